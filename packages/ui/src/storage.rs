//! Platform storage for the session.
//!
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStore`]
//! - **Native**: one file per key under `<data_dir>/promptdeck/` via [`store::FileStore`]
//! - **WASM without `web`**: [`store::MemoryStore`], so the session lasts for the page

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStore;

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = store::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = store::FileStore;

/// Create the platform-appropriate session storage.
pub fn make_storage() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("promptdeck");
        store::FileStore::new(base)
    }
}
