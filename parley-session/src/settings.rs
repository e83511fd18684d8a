use crate::error::Error;

use serde::{Deserialize, Serialize};

/// Which browser storage area holds the session.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Backend {
    /// Survives reloads and browser restarts.
    #[default]
    Local,
    /// Cleared when the tab is closed.
    Session,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub backend: Backend,
}

impl Settings {
    pub fn from_json(raw: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str::<Option<Self>>(raw)?.unwrap_or_default())
    }

    /// Reads the JSON in the page's `<script id="settings">` element, falling
    /// back to the defaults.
    #[cfg(feature = "web")]
    pub fn load() -> Self {
        let raw = gloo_utils::document()
            .query_selector("script[id='settings']")
            .ok()
            .flatten()
            .map(|element| element.inner_html());
        match raw.map(|raw| Self::from_json(&raw)) {
            Some(Ok(settings)) => settings,
            Some(Err(e)) => {
                tracing::warn!("ignoring settings: {}", e);
                Self::default()
            }
            None => {
                tracing::warn!("no settings element, using defaults");
                Self::default()
            }
        }
    }

    #[cfg(feature = "web")]
    pub fn open(&self) -> Result<crate::browser::BrowserStorage, Error> {
        crate::browser::BrowserStorage::open(self.backend)
    }
}
