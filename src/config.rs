use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the record service, without a trailing slash.
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let mut base_url =
            env::var("HRMS_API_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }
}
