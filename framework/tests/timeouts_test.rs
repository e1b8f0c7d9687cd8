use e2e_framework::{new_default_timeout_context, TimeoutCategory, TimeoutContext, ENV_PREFIX};
use std::thread;
use std::time::Duration;

const MINUTE: Duration = Duration::from_secs(60);

#[test]
fn default_pod_start_and_metrics() {
    let timeouts = new_default_timeout_context();
    assert_eq!(timeouts.pod_start, 5 * MINUTE);
    assert_eq!(timeouts.snapshot_controller_metrics, 5 * MINUTE);
}

#[test]
fn slow_pv_delete_survives_caller_changes() {
    let mut timeouts = new_default_timeout_context();
    timeouts.pv_delete_slow = MINUTE;
    let fresh = new_default_timeout_context();
    assert_eq!(fresh.pv_delete_slow, 20 * MINUTE);
    assert_eq!(timeouts.pv_delete_slow, MINUTE);
}

#[test]
fn each_thread_gets_its_own_copy() {
    let handles: Vec<_> = TimeoutCategory::all()
        .iter()
        .map(|&category| {
            thread::spawn(move || {
                let mut timeouts = new_default_timeout_context();
                timeouts.set(category, Duration::from_secs(1));
                timeouts
            })
        })
        .collect();
    for handle in handles {
        let changed = handle.join().unwrap();
        assert_ne!(changed, TimeoutContext::default());
    }
    assert_eq!(new_default_timeout_context(), TimeoutContext::default());
}

/// The environment tests only touch their own variables.
#[test]
fn environment_overrides() {
    let _ = env_logger::builder().is_test(true).try_init();
    std::env::set_var(format!("{}SNAPSHOT_CREATE", ENV_PREFIX), "7m");
    let timeouts = TimeoutContext::from_env().unwrap();
    std::env::remove_var(format!("{}SNAPSHOT_CREATE", ENV_PREFIX));

    assert_eq!(timeouts.snapshot_create, 7 * MINUTE);
    assert_eq!(timeouts.snapshot_delete, 5 * MINUTE);
    assert_eq!(new_default_timeout_context().snapshot_create, 5 * MINUTE);
}

#[cfg(unix)]
#[test]
fn environment_with_non_utf8_variable() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let key = format!("{}PV_BOUND", ENV_PREFIX);
    std::env::set_var("E2E_FRAMEWORK_NON_UTF8", OsStr::from_bytes(&[0xff, 0xfe]));
    std::env::set_var(&key, "4m");
    let timeouts = TimeoutContext::from_env();
    std::env::remove_var("E2E_FRAMEWORK_NON_UTF8");
    std::env::remove_var(&key);

    let timeouts = timeouts.unwrap();
    assert_eq!(timeouts.pv_bound, 4 * MINUTE);
    assert_eq!(timeouts.pv_create, 3 * MINUTE);
}
