//! Fire-and-forget task spawning for both targets.

use std::future::Future;

/// No runtime was available to run a background task.
#[derive(Debug, Clone, thiserror::Error)]
#[error("no async runtime available: {0}")]
pub struct SpawnError(String);

/// Spawns `future` on the ambient Tokio runtime.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn<F>(future: F) -> Result<(), SpawnError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let handle =
        tokio::runtime::Handle::try_current().map_err(|e| SpawnError(e.to_string()))?;
    handle.spawn(future);
    Ok(())
}

/// Spawns `future` on the browser's microtask queue.
#[cfg(target_arch = "wasm32")]
pub fn spawn<F>(future: F) -> Result<(), SpawnError>
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
    Ok(())
}
