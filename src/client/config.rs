use std::env;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the analysis backend (e.g. `http://127.0.0.1:8000`).
    /// There is no in-repo default: when unset, requests fail and the UI
    /// shows the standard connection error.
    pub api_base_url: Option<String>,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            api_base_url: env::var("API_BASE_URL")
                .ok()
                .map(|u| u.trim_end_matches('/').to_string())
                .filter(|u| !u.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        std::env::set_var("API_BASE_URL", "http://127.0.0.1:8000/");
        let cfg = ClientConfig::from_env();
        assert_eq!(cfg.api_base_url.as_deref(), Some("http://127.0.0.1:8000"));
        std::env::remove_var("API_BASE_URL");
    }
}
