use crate::error::{self, Result};
use crate::{new_default_timeout_context, TimeoutCategory, TimeoutContext};
use log::{debug, trace};
use snafu::ResultExt;
use std::collections::BTreeMap;

/// The prefix of the environment variables that override individual timeouts. The rest of the
/// variable name is the category name in upper case.
///
/// # Example
///
/// ```text
/// E2E_TIMEOUT_POD_START=10m
/// E2E_TIMEOUT_PV_DELETE_SLOW=1h 30m
/// ```
pub const ENV_PREFIX: &str = "E2E_TIMEOUT_";

impl TimeoutContext {
    /// Returns the defaults with any `E2E_TIMEOUT_*` environment variable overrides applied.
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
        )
    }

    /// Same as [`TimeoutContext::from_env`] but reads the variables from `vars` instead of the
    /// process environment.
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self::with_overrides(
            envy::prefixed(ENV_PREFIX)
                .from_iter(vars)
                .context(error::EnvOverridesSnafu)?,
        )
    }

    fn with_overrides(overrides: BTreeMap<String, String>) -> Result<Self> {
        let mut timeouts = new_default_timeout_context();
        for (name, value) in overrides {
            let category: TimeoutCategory = name.parse()?;
            let timeout = humantime::parse_duration(value.trim()).context(
                error::ParseDurationSnafu {
                    name: &name,
                    value: &value,
                },
            )?;
            debug!(
                "Overriding '{}' timeout: {} -> {}",
                category,
                humantime::format_duration(timeouts.get(category)),
                humantime::format_duration(timeout)
            );
            timeouts.set(category, timeout);
        }
        trace!("Using timeouts {:?}", timeouts);
        Ok(timeouts)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::DEFAULT_TIMEOUTS;
    use std::time::Duration;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn no_overrides_gives_defaults() {
        let t = TimeoutContext::from_vars(vars(&[("PATH", "/usr/bin")])).unwrap();
        assert_eq!(t, DEFAULT_TIMEOUTS);
    }

    #[test]
    fn overrides_named_categories_only() {
        let t = TimeoutContext::from_vars(vars(&[
            ("E2E_TIMEOUT_POD_START", "10m"),
            ("E2E_TIMEOUT_PV_DELETE_SLOW", "1h 30m"),
            ("UNRELATED", "1s"),
        ]))
        .unwrap();
        assert_eq!(t.pod_start, Duration::from_secs(600));
        assert_eq!(t.pv_delete_slow, Duration::from_secs(90 * 60));
        assert_eq!(t.pod_start_short, DEFAULT_TIMEOUTS.pod_start_short);
        assert_eq!(t.snapshot_delete, DEFAULT_TIMEOUTS.snapshot_delete);
        assert_eq!(DEFAULT_TIMEOUTS.pod_start, Duration::from_secs(300));
    }

    #[test]
    fn bad_duration_is_an_error() {
        let err = TimeoutContext::from_vars(vars(&[("E2E_TIMEOUT_CLAIM_BOUND", "soon")]))
            .unwrap_err()
            .to_string();
        assert!(err.contains("claim_bound"), "{}", err);
        assert!(err.contains("soon"), "{}", err);
    }

    #[test]
    fn unknown_category_is_an_error() {
        let err = TimeoutContext::from_vars(vars(&[("E2E_TIMEOUT_POD_RESTART", "1m")]))
            .unwrap_err()
            .to_string();
        assert_eq!(err, "Unknown timeout category 'pod_restart'");
    }
}
