//! Application configuration.
//!
//! Compile-time defaults for the catalog admin frontend. The products API
//! location is carried at runtime by [`ApiConfig`], which the page receives
//! as a prop instead of reading a global.

/// Default products API base URL.
///
/// Overridden at build time with `CATALOG_API_URL=... trunk build`.
pub const BACKEND_URL: &str = match option_env!("CATALOG_API_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

/// Collection-creation route for product batches.
pub const PRODUCTS_ADD_PATH: &str = "/api/products/add";

/// How long a notification stays on screen (in milliseconds).
pub const NOTICE_TIMEOUT_MS: u32 = 5_000;

/// Where the products API lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without trailing slash, e.g. `http://localhost:8080`
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Full URL of the batch creation endpoint.
    pub fn products_add_url(&self) -> String {
        format!("{}{}", self.base_url, PRODUCTS_ADD_PATH)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(BACKEND_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_add_url() {
        let config = ApiConfig::new("http://api.example.test/");
        assert_eq!(config.products_add_url(), "http://api.example.test/api/products/add");
    }

    #[test]
    fn test_default_points_at_backend_url() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, BACKEND_URL.trim_end_matches('/'));
        assert!(config.products_add_url().ends_with(PRODUCTS_ADD_PATH));
    }
}
