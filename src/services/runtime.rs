//! Tokio Runtime Bridge
//!
//! GPUI uses its own executor, but reqwest requires a tokio reactor.
//! This module provides a bridge to run tokio futures from GPUI context.
//!
//! ## Pattern
//!
//! ```text
//! GPUI async task (cx.spawn)
//!       │
//!       ▼
//! run_in_tokio(async { loader.load().await })
//!       │
//!       ▼
//! tokio::Runtime::spawn()
//!       │
//!       ▼
//! LoadState returned to GPUI
//! ```

use std::future::Future;
use std::sync::OnceLock;
use tokio::runtime::Runtime;

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("customer-list-io")
            .enable_all()
            .build()
            .expect("Failed to create tokio runtime")
    })
}

/// Execute a future in the tokio runtime and wait for the result
///
/// Used for the one-shot customer fetch issued when the list view opens.
///
/// # Example
///
/// ```ignore
/// let state = run_in_tokio(async move {
///     loader.load().await
/// }).await;
/// ```
pub async fn run_in_tokio<F, T>(future: F) -> T
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let handle = get_runtime().spawn(future);
    match handle.await {
        Ok(result) => result,
        Err(e) => std::panic::resume_unwind(e.into_panic()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_in_tokio_returns_value() {
        // Awaited from a runtime without a timer driver, as from GPUI.
        let value = block_on_foreign(run_in_tokio(async {
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
            42
        }));
        assert_eq!(value, 42);
    }

    fn block_on_foreign<F: Future>(future: F) -> F::Output {
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("Failed to build test runtime");
        rt.block_on(future)
    }
}
