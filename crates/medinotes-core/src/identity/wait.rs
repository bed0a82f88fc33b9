//! Waiting for an Asynchronously Loaded Provider
//!
//! Hosted identity widgets are usually injected with an `async` script tag,
//! so the global they install may appear after the page's own code starts.

use std::future::Future;
use std::time::Duration;

/// How often and how long to look for the provider before giving up
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadPolicy {
    pub interval: Duration,
    pub timeout: Duration,
}

impl Default for LoadPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(50),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Poll `probe` until it yields a value or `policy.timeout` has elapsed
///
/// `sleep` is supplied by the caller so the same loop runs on a browser
/// timer or an async runtime. Returns `None` on timeout.
pub async fn wait_for<T, Fut>(
    policy: LoadPolicy,
    mut probe: impl FnMut() -> Option<T>,
    mut sleep: impl FnMut(Duration) -> Fut,
) -> Option<T>
where
    Fut: Future<Output = ()>,
{
    let mut waited = Duration::ZERO;
    loop {
        if let Some(found) = probe() {
            return Some(found);
        }
        if waited >= policy.timeout {
            tracing::debug!(?waited, "provider did not appear");
            return None;
        }
        sleep(policy.interval).await;
        waited += policy.interval;
    }
}
