use crate::error::Error;
use crate::settings::Backend;
use crate::storage::KeyValueStore;

/// The browser's `localStorage` or `sessionStorage`, accessed through the raw
/// `getItem`/`setItem` API so values are stored as plain strings.
#[derive(Clone, Debug)]
pub struct BrowserStorage {
    raw: web_sys::Storage,
}

impl BrowserStorage {
    /// The window's `localStorage`. Fails with the browser's own exception
    /// when access is denied.
    pub fn local() -> Result<Self, Error> {
        Self::open(Backend::Local)
    }

    pub fn session() -> Result<Self, Error> {
        Self::open(Backend::Session)
    }

    pub fn open(backend: Backend) -> Result<Self, Error> {
        let window = web_sys::window().ok_or(Error::Unavailable(backend))?;
        let raw = match backend {
            Backend::Local => window.local_storage()?,
            Backend::Session => window.session_storage()?,
        };
        Ok(Self {
            raw: raw.ok_or(Error::Unavailable(backend))?,
        })
    }

    pub fn raw(&self) -> &web_sys::Storage {
        &self.raw
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.raw.get_item(key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        Ok(self.raw.set_item(key, value)?)
    }
}
