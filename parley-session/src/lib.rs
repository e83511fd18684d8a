pub mod error;
pub mod settings;
pub mod storage;
pub mod store;

#[cfg(feature = "web")]
mod bindings;
#[cfg(feature = "web")]
pub mod browser;
#[cfg(feature = "web")]
pub mod logging;

pub use error::Error;
pub use settings::{Backend, Settings};
pub use storage::{KeyValueStore, MemoryStorage};
pub use store::SessionStore;

#[cfg(feature = "web")]
pub use browser::BrowserStorage;

/// Opens the session store configured by the page's settings, after setting
/// up logging.
#[cfg(feature = "web")]
pub fn start() -> Result<SessionStore<BrowserStorage>, Error> {
    logging::init();
    let settings = Settings::load();
    tracing::debug!("opening session store on {} storage", settings.backend);
    Ok(SessionStore::new(settings.open()?))
}
