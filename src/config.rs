//! API Configuration
//!
//! Where the console finds the practice API.

/// Route prefix shared by every endpoint
pub const DEFAULT_PREFIX: &str = "/v1/ply";

/// Used off-browser (tests) when no base is configured
pub const FALLBACK_BASE: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub prefix: String,
    /// Send cookies with every request
    pub with_credentials: bool,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
            with_credentials: true,
        }
    }

    /// Build-time `PLY_API_BASE`, else the page origin, else localhost
    pub fn from_env() -> Self {
        let base = option_env!("PLY_API_BASE")
            .map(str::to_string)
            .filter(|b| !b.is_empty())
            .or_else(page_origin)
            .unwrap_or_else(|| FALLBACK_BASE.to_string());
        Self::new(base)
    }

    /// Absolute URL for a route such as `practice/list`
    pub fn endpoint(&self, path: &str) -> String {
        let prefix = self.prefix.trim_matches('/');
        let path = path.trim_start_matches('/');
        if prefix.is_empty() {
            format!("{}/{}", self.base_url, path)
        } else {
            format!("{}/{}/{}", self.base_url, prefix, path)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}
