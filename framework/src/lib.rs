/*!

Provides the wait-time thresholds used by end-to-end cluster tests when polling for asynchronous
operations such as pod startup, volume provisioning and snapshot lifecycle.

Every test obtains its own [`TimeoutContext`] from [`new_default_timeout_context`] and may adjust
individual fields on that copy. The process-wide [`DEFAULT_TIMEOUTS`] are a constant and can never
change.

```
use e2e_framework::new_default_timeout_context;
use std::time::Duration;

let mut timeouts = new_default_timeout_context();
timeouts.pv_delete_slow = Duration::from_secs(60);
assert_eq!(new_default_timeout_context().pv_delete_slow, Duration::from_secs(20 * 60));
```

!*/

#![deny(
    clippy::expect_used,
    clippy::get_unwrap,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::panicking_unwrap,
    clippy::unwrap_in_result,
    clippy::unwrap_used
)]

pub use category::TimeoutCategory;
pub use error::{Error, Result};
pub use settings::ENV_PREFIX;
pub use timeouts::{new_default_timeout_context, TimeoutContext, DEFAULT_TIMEOUTS};

mod category;
mod error;
mod settings;
mod timeouts;
