//! Browser glue behind small traits, with in-memory stand-ins for native builds

pub mod location;
pub mod storage;

pub use location::{Location, MemoryLocation};
pub use storage::{KeyValueStore, MemoryStore};

#[cfg(target_arch = "wasm32")]
pub use location::BrowserLocation;
#[cfg(target_arch = "wasm32")]
pub use storage::WebStorage;
