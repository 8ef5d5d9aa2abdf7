//! Task spawning and timers for the UI thread.
//!
//! In the browser work runs on the `wasm-bindgen-futures` executor and sleeps
//! on `setTimeout`. Natively the same calls map onto a tokio `LocalSet`, which
//! lets the controllers run under tests with paused time. Nothing spawned here
//! needs to be `Send`.

use std::future::Future;
use std::time::Duration;

use cfg_if::cfg_if;
use futures::future::{AbortHandle, Abortable};

cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        pub fn spawn<F>(future: F)
        where
            F: Future<Output = ()> + 'static,
        {
            wasm_bindgen_futures::spawn_local(future);
        }

        pub async fn sleep(duration: Duration) {
            gloo_timers::future::sleep(duration).await;
        }
    } else {
        /// Must be called from inside a `tokio::task::LocalSet`.
        pub fn spawn<F>(future: F)
        where
            F: Future<Output = ()> + 'static,
        {
            tokio::task::spawn_local(future);
        }

        pub async fn sleep(duration: Duration) {
            tokio::time::sleep(duration).await;
        }
    }
}

/// Handle to a task started with [`spawn_abortable`]. Dropping it leaves the task running.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    abort: AbortHandle,
}

impl TaskHandle {
    pub fn cancel(&self) {
        self.abort.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }
}

pub fn spawn_abortable<F>(future: F) -> TaskHandle
where
    F: Future<Output = ()> + 'static,
{
    let (abort, registration) = AbortHandle::new_pair();
    spawn(async move {
        let _ = Abortable::new(future, registration).await;
    });
    TaskHandle { abort }
}
