//! Session credentials. They live in sessionStorage, so closing the tab
//! signs the operator out.

use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "auth_access_token";

fn get_session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

/// Get access token from sessionStorage
pub fn get_access_token() -> Option<String> {
    get_session_storage()?
        .get_item(ACCESS_TOKEN_KEY)
        .ok()?
        .filter(|token| !token.trim().is_empty())
}

pub fn has_session() -> bool {
    get_access_token().is_some()
}

/// Forget the current session
pub fn clear_session() {
    if let Some(storage) = get_session_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
    }
}
