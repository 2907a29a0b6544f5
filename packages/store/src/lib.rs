pub mod config;
pub mod kv;
pub mod models;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use config::{ApiSection, ClientConfig, ConfigError, LogSection, SessionSection};
pub use kv::KeyValueStore;
pub use models::{Session, TOKEN_KEY, USER_NAME_KEY};
