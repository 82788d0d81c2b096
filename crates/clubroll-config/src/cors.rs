use crate::env::split_list;

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:5000,http://localhost:5173";

/// Allowed browser origins. A single `*` entry allows any origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: split_list(DEFAULT_ALLOWED_ORIGINS),
        }
    }
}

impl CorsConfig {
    pub fn from_env() -> Self {
        let raw = std::env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string());

        Self {
            allowed_origins: split_list(&raw),
        }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}
