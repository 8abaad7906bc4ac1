//! Background requests
//!
//! A request runs as a detached future that drops its result into a shared
//! slot; the frame loop polls the slot. One slot per user action, no retry.

use crate::api::ApiError;
use std::future::Future;
use std::sync::{Arc, Mutex};

/// Result holder shared between the spawned future and the UI
pub type TaskSlot<T> = Arc<Mutex<Option<Result<T, ApiError>>>>;

/// Take a finished result out of an optional slot without blocking
pub fn take_finished<T>(slot: &Option<TaskSlot<T>>) -> Option<Result<T, ApiError>> {
    slot.as_ref()
        .and_then(|p| p.try_lock().ok())
        .and_then(|mut g| g.take())
}

/// Runs request futures: `spawn_local` on the web, a tokio runtime natively
#[derive(Clone)]
pub struct Spawner {
    #[cfg(not(target_arch = "wasm32"))]
    runtime: Option<Arc<tokio::runtime::Runtime>>,
}

impl Spawner {
    pub fn new() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self {}
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .worker_threads(1)
                .enable_all()
                .build()
                .map_err(|e| tracing::warn!("No async runtime, requests will fail: {e}"))
                .ok()
                .map(Arc::new);
            Self { runtime }
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn spawn<T, F>(&self, future: F) -> TaskSlot<T>
    where
        T: 'static,
        F: Future<Output = Result<T, ApiError>> + 'static,
    {
        let slot: TaskSlot<T> = Arc::new(Mutex::new(None));
        let slot_clone = slot.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let res = future.await;
            if let Ok(mut guard) = slot_clone.lock() {
                *guard = Some(res);
            }
        });
        slot
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn spawn<T, F>(&self, future: F) -> TaskSlot<T>
    where
        T: Send + 'static,
        F: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        let slot: TaskSlot<T> = Arc::new(Mutex::new(None));
        let slot_clone = slot.clone();
        match &self.runtime {
            Some(runtime) => {
                runtime.spawn(async move {
                    let res = future.await;
                    if let Ok(mut guard) = slot_clone.lock() {
                        *guard = Some(res);
                    }
                });
            }
            None => {
                if let Ok(mut guard) = slot.lock() {
                    *guard = Some(Err(ApiError::Network("no async runtime".to_string())));
                }
            }
        }
        slot
    }
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new()
    }
}
