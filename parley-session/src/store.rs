use crate::error::Error;
use crate::storage::KeyValueStore;

use parley_types::responses;

pub const LOGGED_IN_KEY: &str = "loggedIn";
pub const USERNAME_KEY: &str = "username";

/// Client-side record of whether a user is signed in, and as whom.
///
/// Both values live under fixed keys of the injected storage namespace. They
/// are written together but read independently, with no atomicity between
/// them. Nothing here ever deletes them.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Stores the login flag as `"true"`/`"false"` and the username verbatim.
    /// A failed flag write is returned before the username is touched.
    pub fn set_logged_in(&self, logged_in: bool, username: &str) -> Result<(), Error> {
        tracing::trace!("setting session: logged_in={} username={}", logged_in, username);
        self.storage.set(LOGGED_IN_KEY, &logged_in.to_string())?;
        self.storage.set(USERNAME_KEY, username)?;
        tracing::debug!("session flag set to {}", logged_in);
        Ok(())
    }

    /// True only when the stored flag is exactly `"true"`.
    pub fn is_logged_in(&self) -> Result<bool, Error> {
        let flag = self.storage.get(LOGGED_IN_KEY)?;
        Ok(flag.as_deref() == Some("true"))
    }

    pub fn username(&self) -> Result<Option<String>, Error> {
        self.storage.get(USERNAME_KEY)
    }

    /// Records the outcome of a sign-in or sign-up exchange and returns
    /// whether it succeeded.
    pub fn record_auth(&self, username: &str, response: &responses::Auth) -> Result<bool, Error> {
        if !response.success {
            tracing::debug!("{}", response);
        }
        self.set_logged_in(response.success, username)?;
        Ok(response.success)
    }
}
