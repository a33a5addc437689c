#[cfg(target_arch = "wasm32")]
pub mod browser_store;
pub mod colors;
