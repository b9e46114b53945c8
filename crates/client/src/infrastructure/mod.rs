//! Infrastructure adapters and platform glue.
//!
//! Everything that touches the outside world lives here: the HTTP adapter
//! for the remote phonebook store and the platform-conditional async
//! helpers the UI uses.

pub mod http_client;
pub mod testing;

/// Spawn a fire-and-forget async task on the UI runtime.
///
/// Futures spawned from components capture non-`Send` signals, so this
/// rides the Dioxus scheduler on every platform. Must be called from
/// within a running Dioxus runtime (components, hooks, event handlers).
pub fn spawn_task<F>(fut: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    dioxus::prelude::spawn(fut);
}

/// Async sleep that works on both native and wasm targets.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Async sleep that works on both native and wasm targets.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}
