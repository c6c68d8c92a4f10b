//! API utilities for frontend-backend communication
//!
//! The backend listens on the same host as the bundle, on the port from
//! `[api] port` (set once at startup).

use std::sync::OnceLock;

const DEFAULT_API_PORT: u16 = 3000;

static API_PORT: OnceLock<u16> = OnceLock::new();

/// Sets the backend port. Later calls are ignored.
pub fn configure_api_port(port: u16) {
    if API_PORT.set(port).is_err() {
        log::debug!("api port already configured");
    }
}

fn api_port() -> u16 {
    API_PORT.get().copied().unwrap_or(DEFAULT_API_PORT)
}

/// Get the base URL for API requests, e.g. "http://localhost:3000".
/// Empty string if window is not available.
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
    base_url(&protocol, &hostname, api_port())
}

fn base_url(protocol: &str, hostname: &str, port: u16) -> String {
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Build a full API URL from a path starting with "/api/".
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
