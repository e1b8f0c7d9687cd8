use crate::error::{self, Error};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A named class of asynchronous operation whose maximum wait time can be configured
/// independently. Each variant corresponds to one field of [`crate::TimeoutContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeoutCategory {
    PodStart,
    PodStartShort,
    PodStartSlow,
    PodDelete,
    ClaimProvision,
    ClaimProvisionShort,
    DataSourceProvision,
    ClaimBound,
    PvReclaim,
    PvBound,
    PvCreate,
    PvDelete,
    PvDeleteSlow,
    SnapshotCreate,
    SnapshotDelete,
    SnapshotControllerMetrics,
}

const ALL: [TimeoutCategory; 16] = [
    TimeoutCategory::PodStart,
    TimeoutCategory::PodStartShort,
    TimeoutCategory::PodStartSlow,
    TimeoutCategory::PodDelete,
    TimeoutCategory::ClaimProvision,
    TimeoutCategory::ClaimProvisionShort,
    TimeoutCategory::DataSourceProvision,
    TimeoutCategory::ClaimBound,
    TimeoutCategory::PvReclaim,
    TimeoutCategory::PvBound,
    TimeoutCategory::PvCreate,
    TimeoutCategory::PvDelete,
    TimeoutCategory::PvDeleteSlow,
    TimeoutCategory::SnapshotCreate,
    TimeoutCategory::SnapshotDelete,
    TimeoutCategory::SnapshotControllerMetrics,
];

impl TimeoutCategory {
    /// Every category, in the same order as the fields of `TimeoutContext`.
    pub fn all() -> &'static [TimeoutCategory] {
        &ALL
    }

    /// The snake_case name of the category. This is also the name of the `TimeoutContext` field.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PodStart => "pod_start",
            Self::PodStartShort => "pod_start_short",
            Self::PodStartSlow => "pod_start_slow",
            Self::PodDelete => "pod_delete",
            Self::ClaimProvision => "claim_provision",
            Self::ClaimProvisionShort => "claim_provision_short",
            Self::DataSourceProvision => "data_source_provision",
            Self::ClaimBound => "claim_bound",
            Self::PvReclaim => "pv_reclaim",
            Self::PvBound => "pv_bound",
            Self::PvCreate => "pv_create",
            Self::PvDelete => "pv_delete",
            Self::PvDeleteSlow => "pv_delete_slow",
            Self::SnapshotCreate => "snapshot_create",
            Self::SnapshotDelete => "snapshot_delete",
            Self::SnapshotControllerMetrics => "snapshot_controller_metrics",
        }
    }

    /// A short human readable label for the category.
    pub fn description(&self) -> &'static str {
        match self {
            Self::PodStart => "Pod start",
            Self::PodStartShort => "Pod start (short)",
            Self::PodStartSlow => "Pod start (slow)",
            Self::PodDelete => "Pod delete",
            Self::ClaimProvision => "Claim provisioning",
            Self::ClaimProvisionShort => "Claim provisioning (short)",
            Self::DataSourceProvision => "Claim provisioning from a data source",
            Self::ClaimBound => "Claim bound",
            Self::PvReclaim => "Persistent volume reclaim",
            Self::PvBound => "Persistent volume bound",
            Self::PvCreate => "Persistent volume create",
            Self::PvDelete => "Persistent volume delete",
            Self::PvDeleteSlow => "Persistent volume delete (slow)",
            Self::SnapshotCreate => "Snapshot create",
            Self::SnapshotDelete => "Snapshot delete",
            Self::SnapshotControllerMetrics => "Snapshot controller metrics availability",
        }
    }
}

impl Display for TimeoutCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self.name(), f)
    }
}

impl FromStr for TimeoutCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL.iter()
            .find(|category| category.name() == s)
            .copied()
            .ok_or_else(|| error::ParseCategorySnafu { name: s }.build().into())
    }
}

#[test]
fn category_names_round_trip() {
    for &category in TimeoutCategory::all() {
        assert_eq!(category.to_string().parse::<TimeoutCategory>().ok(), Some(category));
    }
}

#[test]
fn unknown_category_is_an_error() {
    let err = "pod_restart".parse::<TimeoutCategory>().unwrap_err();
    assert_eq!(err.to_string(), "Unknown timeout category 'pod_restart'");
}

#[test]
fn category_names_are_unique() {
    let mut names: Vec<_> = TimeoutCategory::all().iter().map(|c| c.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), TimeoutCategory::all().len());
}
