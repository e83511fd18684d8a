//! JavaScript entry points for the host application.

use crate::browser::BrowserStorage;
use crate::error::Error;
use crate::store::SessionStore;

use std::cell::OnceCell;

use wasm_bindgen::prelude::*;

thread_local! {
    static STORE: OnceCell<SessionStore<BrowserStorage>> = const { OnceCell::new() };
}

fn with_store<T>(
    f: impl FnOnce(&SessionStore<BrowserStorage>) -> Result<T, Error>,
) -> Result<T, JsError> {
    STORE
        .with(|cell| {
            let store = match cell.get() {
                Some(store) => store,
                None => {
                    let store = crate::start()?;
                    cell.get_or_init(|| store)
                }
            };
            f(store)
        })
        .map_err(|e| JsError::new(&e.to_string()))
}

#[wasm_bindgen(js_name = setLoggedIn)]
pub fn set_logged_in(is_logged_in: bool, username: &str) -> Result<(), JsError> {
    with_store(|store| store.set_logged_in(is_logged_in, username))
}

#[wasm_bindgen(js_name = isLoggedIn)]
pub fn is_logged_in() -> Result<bool, JsError> {
    with_store(SessionStore::is_logged_in)
}

/// Like `localStorage.getItem`, yields `null` when no username was stored.
#[wasm_bindgen(js_name = getUsername)]
pub fn get_username() -> Result<JsValue, JsError> {
    let username = with_store(SessionStore::username)?;
    Ok(username.map_or(JsValue::NULL, JsValue::from))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::store::USERNAME_KEY;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn missing_username_is_null() {
        let storage = BrowserStorage::local().unwrap();
        storage.raw().remove_item(USERNAME_KEY).unwrap();
        assert!(get_username().unwrap().is_null());

        set_logged_in(true, "alice").unwrap();
        assert!(is_logged_in().unwrap());
        assert_eq!(get_username().unwrap().as_string().as_deref(), Some("alice"));
    }
}
