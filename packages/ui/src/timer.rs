use std::time::Duration;

/// Platform-appropriate async sleep: browser timers on WASM, tokio on native.
pub(crate) async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Run `f` once `delay` has passed. Dropping the future first means `f` never runs,
/// which is how a spawned task built from this is cancelled.
pub(crate) async fn after<T>(delay: Duration, f: impl FnOnce() -> T) -> T {
    sleep(delay).await;
    f()
}

/// Today's date on the local clock, as used for the "not in the future" rule.
pub(crate) fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
