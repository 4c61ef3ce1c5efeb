//! Persistence and environment helpers for the app shell.

use floodgate_api_models::AuthMethod;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;

pub(crate) const API_BASE_URL_KEY: &str = "floodgate.api_base_url";
pub(crate) const AUTH_METHOD_KEY: &str = "floodgate.auth.method";

/// Resolve the API base URL: an explicit override, else the page's own origin.
pub(crate) fn api_base_url() -> String {
    if let Ok(value) = LocalStorage::get::<String>(API_BASE_URL_KEY) {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            return trimmed.trim_end_matches('/').to_string();
        }
    }
    match window().location().origin() {
        Ok(origin) => origin,
        Err(err) => {
            console::error!("location origin unavailable", err);
            String::new()
        }
    }
}

/// Last auth method reported by the backend, used until verification settles.
pub(crate) fn load_auth_method() -> AuthMethod {
    LocalStorage::get::<String>(AUTH_METHOD_KEY)
        .map(|value| AuthMethod::from_wire(&value))
        .unwrap_or_default()
}

pub(crate) fn persist_auth_method(method: AuthMethod) {
    if let Err(err) = LocalStorage::set(AUTH_METHOD_KEY, method.as_str()) {
        log_storage_error("set", AUTH_METHOD_KEY, &err.to_string());
    }
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
