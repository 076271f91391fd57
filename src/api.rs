use gloo_net::http::{Request, RequestBuilder};
use gloo_storage::{LocalStorage, Storage};
use log::error;

use crate::config;

/// LocalStorage slot holding the operator key entered on the admin pages.
const ADMIN_KEY_SLOT: &str = "admin_key";

/// Joins a request path onto the detected API base.
pub fn api_url(path: &str) -> String {
    format!("{}{}", config::api_base(), path)
}

/// Creates a request against the detected backend, attaching the
/// X-Admin-Key header when an operator key is stored.
pub fn backend_request(method: &str, path: &str) -> RequestBuilder {
    let url = api_url(path);
    let mut req = match method.to_uppercase().as_str() {
        "GET" => Request::get(&url),
        "POST" => Request::post(&url),
        "PUT" => Request::put(&url),
        "DELETE" => Request::delete(&url),
        "PATCH" => Request::patch(&url),
        _ => Request::get(&url), // Default to GET
    };

    if let Ok(key) = LocalStorage::get::<String>(ADMIN_KEY_SLOT) {
        req = req.header("X-Admin-Key", &key);
    }

    req
}

/// Creates a GET request against the backend
pub fn backend_get(path: &str) -> RequestBuilder {
    backend_request("GET", path)
}

/// Creates a POST request against the backend
pub fn backend_post(path: &str) -> RequestBuilder {
    backend_request("POST", path)
}

/// Creates a PUT request against the backend
pub fn backend_put(path: &str) -> RequestBuilder {
    backend_request("PUT", path)
}

/// Creates a DELETE request against the backend
pub fn backend_delete(path: &str) -> RequestBuilder {
    backend_request("DELETE", path)
}

/// Remembers the operator key for subsequent admin requests.
pub fn store_admin_key(key: &str) {
    if let Err(err) = LocalStorage::set(ADMIN_KEY_SLOT, key.to_string()) {
        error!("failed to store admin key: {:?}", err);
    }
}

/// Forgets the stored operator key.
pub fn clear_admin_key() {
    LocalStorage::delete(ADMIN_KEY_SLOT);
}

pub fn has_admin_key() -> bool {
    LocalStorage::get::<String>(ADMIN_KEY_SLOT).is_ok()
}
