//! Tokio Runtime Bridge
//!
//! GPUI runs its own executor, but reqwest and the mock bridge's timers need
//! tokio. This module hosts a lazily created runtime and lets GPUI tasks run
//! futures on it.

use std::future::Future;
use std::sync::OnceLock;
use tokio::runtime::Runtime;

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| Runtime::new().expect("Failed to create tokio runtime"))
}

/// Execute a future on the tokio runtime and await its result from GPUI.
///
/// Used for one-shot bridge calls (page fetches, deletes).
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

/// Block on a future synchronously. Test helper, mainly.
pub fn block_on<F, T>(future: F) -> T
where
    F: Future<Output = T>,
{
    get_runtime().block_on(future)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_in_tokio_returns_result() {
        let value = block_on(run_in_tokio(async { 1 + 1 }));
        assert_eq!(value, 2);
    }
}
