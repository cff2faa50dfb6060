use gloo_storage::{LocalStorage, Storage};

const TOKEN_KEY: &str = "token";

pub fn get() -> Option<String> {
    LocalStorage::get::<String>(TOKEN_KEY).ok()
}

pub fn set(token: &str) {
    if let Err(error) = LocalStorage::set(TOKEN_KEY, token) {
        log::error!("Fail to persist auth token, error={error}");
    }
}

pub fn clear() {
    LocalStorage::delete(TOKEN_KEY);
}

/// Clears the persisted token and reports whether one was present. The
/// session-expired hook uses this to react to a 401 at most once.
pub fn take() -> Option<String> {
    let token = get();
    if token.is_some() {
        clear();
    }
    token
}
