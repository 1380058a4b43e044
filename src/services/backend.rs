pub const BACKEND_URL_ENV: &str = "BACKEND_URL";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Resolve the classification backend base URL from the environment,
/// falling back to the local development default.
pub fn backend_url() -> String {
    resolve(std::env::var(BACKEND_URL_ENV).ok().as_deref())
}

fn resolve(configured: Option<&str>) -> String {
    match configured {
        Some(url) if !url.trim().is_empty() => url.trim().trim_end_matches('/').to_string(),
        _ => DEFAULT_BACKEND_URL.to_string(),
    }
}
