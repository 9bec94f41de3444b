use std::{cell::Cell, rc::Rc};

use thiserror::Error;

/// `localStorage` key holding the member's signed-in flag.
pub const SIGNED_IN_KEY: &str = "gym_portal.signed_in";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("localStorage is unavailable")]
    Unavailable,
    #[error("could not write `{0}` to localStorage")]
    Write(String),
}

/// Where the signed-in flag lives between page loads.
///
/// An absent value reads as signed in, so a first visit shows the bundled member.
pub trait SessionStore {
    fn is_signed_in(&self) -> bool;
    fn set_signed_in(&self, signed_in: bool) -> Result<(), StorageError>;
}

/// Keeps the flag in memory. Clones share it, which stands in for a reload
/// that reads the same storage.
#[derive(Debug, Clone)]
pub struct MemorySessionStore {
    signed_in: Rc<Cell<bool>>,
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self {
            signed_in: Rc::new(Cell::new(true)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn is_signed_in(&self) -> bool {
        self.signed_in.get()
    }

    fn set_signed_in(&self, signed_in: bool) -> Result<(), StorageError> {
        self.signed_in.set(signed_in);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::NoWindow)?
        .local_storage()
        .map_err(|_| StorageError::Unavailable)?
        .ok_or(StorageError::Unavailable)
}

/// `localStorage`-backed flag that survives `location.replace` reloads.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStore;

#[cfg(target_arch = "wasm32")]
impl SessionStore for BrowserSessionStore {
    fn is_signed_in(&self) -> bool {
        match local_storage() {
            Ok(storage) => !matches!(
                storage.get_item(SIGNED_IN_KEY).ok().flatten().as_deref(),
                Some("false")
            ),
            Err(err) => {
                log::warn!("Reading session flag failed: {}", err);
                true
            }
        }
    }

    fn set_signed_in(&self, signed_in: bool) -> Result<(), StorageError> {
        local_storage()?
            .set_item(SIGNED_IN_KEY, if signed_in { "true" } else { "false" })
            .map_err(|_| StorageError::Write(SIGNED_IN_KEY.to_string()))
    }
}

/// Store used by [`crate::api::ApiClient::new`].
#[cfg(target_arch = "wasm32")]
pub fn default_session_store() -> Rc<dyn SessionStore> {
    Rc::new(BrowserSessionStore)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_session_store() -> Rc<dyn SessionStore> {
    Rc::new(MemorySessionStore::default())
}
