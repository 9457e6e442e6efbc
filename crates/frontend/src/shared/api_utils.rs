//! API utilities for frontend-backend communication.

/// Backend port of the legacy REST API.
const API_PORT: u16 = 5000;

/// Get the base URL for API requests.
///
/// Constructs the API base URL from the current window location, keeping the
/// protocol and hostname and swapping in the backend port.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path (should start with "/api/").
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
