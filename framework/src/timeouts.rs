use crate::TimeoutCategory;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const fn minutes(n: u64) -> Duration {
    Duration::from_secs(n * 60)
}

/// The canonical default for every timeout category. This is a `const`, so each use produces a
/// fresh value and nothing can modify the defaults.
pub const DEFAULT_TIMEOUTS: TimeoutContext = TimeoutContext {
    pod_start: minutes(5),
    pod_start_short: minutes(2),
    pod_start_slow: minutes(15),
    pod_delete: minutes(5),
    claim_provision: minutes(5),
    claim_provision_short: minutes(1),
    data_source_provision: minutes(5),
    claim_bound: minutes(3),
    pv_reclaim: minutes(3),
    pv_bound: minutes(3),
    pv_create: minutes(3),
    pv_delete: minutes(5),
    pv_delete_slow: minutes(20),
    snapshot_create: minutes(5),
    snapshot_delete: minutes(5),
    snapshot_controller_metrics: minutes(5),
};

/// `TimeoutContext` contains the timeout settings for the asynchronous operations an end-to-end
/// test waits on. Obtain one with [`new_default_timeout_context`] and adjust fields as needed.
///
/// When serialized, durations use the human readable form understood by `humantime`, e.g.:
///
/// ```yaml
/// podStart: 5m
/// pvDeleteSlow: 20m
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeoutContext {
    /// How long to wait for a pod to be started.
    #[serde(with = "humantime_serde")]
    pub pod_start: Duration,

    /// Same as `pod_start`, but shorter. Use it case-by-case, mostly when you are sure pod start
    /// will not be delayed.
    #[serde(with = "humantime_serde")]
    pub pod_start_short: Duration,

    /// Same as `pod_start`, but longer. Use it case-by-case, mostly when you are sure pod start
    /// will take longer than usual.
    #[serde(with = "humantime_serde")]
    pub pod_start_slow: Duration,

    /// How long to wait for a pod to be deleted.
    #[serde(with = "humantime_serde")]
    pub pod_delete: Duration,

    /// How long claims have to become dynamically provisioned.
    #[serde(with = "humantime_serde")]
    pub claim_provision: Duration,

    /// Same as `claim_provision`, but shorter.
    #[serde(with = "humantime_serde")]
    pub claim_provision_short: Duration,

    /// How long claims have to become dynamically provisioned from a source claim.
    #[serde(with = "humantime_serde")]
    pub data_source_provision: Duration,

    /// How long claims have to become bound.
    #[serde(with = "humantime_serde")]
    pub claim_bound: Duration,

    /// How long PVs have to become reclaimed.
    #[serde(with = "humantime_serde")]
    pub pv_reclaim: Duration,

    /// How long PVs have to become bound.
    #[serde(with = "humantime_serde")]
    pub pv_bound: Duration,

    /// How long PVs have to be created.
    #[serde(with = "humantime_serde")]
    pub pv_create: Duration,

    /// How long PVs have to become deleted.
    #[serde(with = "humantime_serde")]
    pub pv_delete: Duration,

    /// Same as `pv_delete`, but slower.
    #[serde(with = "humantime_serde")]
    pub pv_delete_slow: Duration,

    /// How long a snapshot has to create its snapshot content.
    #[serde(with = "humantime_serde")]
    pub snapshot_create: Duration,

    /// How long a snapshot has to delete its snapshot content.
    #[serde(with = "humantime_serde")]
    pub snapshot_delete: Duration,

    /// How long to wait for snapshot controller metrics.
    #[serde(with = "humantime_serde")]
    pub snapshot_controller_metrics: Duration,
}

/// Returns a `TimeoutContext` holding the default values. The caller owns the returned value;
/// changing it has no effect on the defaults or on any other `TimeoutContext`.
pub fn new_default_timeout_context() -> TimeoutContext {
    DEFAULT_TIMEOUTS
}

impl Default for TimeoutContext {
    fn default() -> Self {
        new_default_timeout_context()
    }
}

impl TimeoutContext {
    /// Same as [`new_default_timeout_context`].
    pub fn with_defaults() -> Self {
        new_default_timeout_context()
    }

    /// The timeout configured for `category`.
    pub fn get(&self, category: TimeoutCategory) -> Duration {
        *self.field(category)
    }

    /// Replace the timeout for `category`, leaving every other category untouched.
    pub fn set(&mut self, category: TimeoutCategory, timeout: Duration) {
        *self.field_mut(category) = timeout;
    }

    /// Iterate over every category and its timeout in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (TimeoutCategory, Duration)> + '_ {
        TimeoutCategory::all()
            .iter()
            .map(move |&category| (category, self.get(category)))
    }

    fn field(&self, category: TimeoutCategory) -> &Duration {
        match category {
            TimeoutCategory::PodStart => &self.pod_start,
            TimeoutCategory::PodStartShort => &self.pod_start_short,
            TimeoutCategory::PodStartSlow => &self.pod_start_slow,
            TimeoutCategory::PodDelete => &self.pod_delete,
            TimeoutCategory::ClaimProvision => &self.claim_provision,
            TimeoutCategory::ClaimProvisionShort => &self.claim_provision_short,
            TimeoutCategory::DataSourceProvision => &self.data_source_provision,
            TimeoutCategory::ClaimBound => &self.claim_bound,
            TimeoutCategory::PvReclaim => &self.pv_reclaim,
            TimeoutCategory::PvBound => &self.pv_bound,
            TimeoutCategory::PvCreate => &self.pv_create,
            TimeoutCategory::PvDelete => &self.pv_delete,
            TimeoutCategory::PvDeleteSlow => &self.pv_delete_slow,
            TimeoutCategory::SnapshotCreate => &self.snapshot_create,
            TimeoutCategory::SnapshotDelete => &self.snapshot_delete,
            TimeoutCategory::SnapshotControllerMetrics => &self.snapshot_controller_metrics,
        }
    }

    fn field_mut(&mut self, category: TimeoutCategory) -> &mut Duration {
        match category {
            TimeoutCategory::PodStart => &mut self.pod_start,
            TimeoutCategory::PodStartShort => &mut self.pod_start_short,
            TimeoutCategory::PodStartSlow => &mut self.pod_start_slow,
            TimeoutCategory::PodDelete => &mut self.pod_delete,
            TimeoutCategory::ClaimProvision => &mut self.claim_provision,
            TimeoutCategory::ClaimProvisionShort => &mut self.claim_provision_short,
            TimeoutCategory::DataSourceProvision => &mut self.data_source_provision,
            TimeoutCategory::ClaimBound => &mut self.claim_bound,
            TimeoutCategory::PvReclaim => &mut self.pv_reclaim,
            TimeoutCategory::PvBound => &mut self.pv_bound,
            TimeoutCategory::PvCreate => &mut self.pv_create,
            TimeoutCategory::PvDelete => &mut self.pv_delete,
            TimeoutCategory::PvDeleteSlow => &mut self.pv_delete_slow,
            TimeoutCategory::SnapshotCreate => &mut self.snapshot_create,
            TimeoutCategory::SnapshotDelete => &mut self.snapshot_delete,
            TimeoutCategory::SnapshotControllerMetrics => &mut self.snapshot_controller_metrics,
        }
    }
}
