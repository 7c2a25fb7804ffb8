use std::fmt::{Debug, Formatter};

/// Default Alpha Vantage host.
pub const DEFAULT_PROVIDER_URL: &str = "https://www.alphavantage.co";

/// Provider credential. `Debug` output never shows the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Returns `None` for blank input so an empty env var counts as unset.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_owned()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl Debug for ApiKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Provider settings, loaded once at start-up and injected into the fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub api_key: Option<ApiKey>,
    pub base_url: String,
}

impl ProviderConfig {
    pub fn new(api_key: Option<ApiKey>) -> Self {
        Self {
            api_key,
            base_url: String::from(DEFAULT_PROVIDER_URL),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::new(None)
    }
}
