//! Source-control hosts and the URL prefix each one maps to.

use std::fmt;
use std::str::FromStr;

/// Human-readable list of accepted provider names, appended to provider errors.
pub const AVAILABLE_PROVIDERS: &str = "Available: github, gitlab and none.";

/// Raw-content host the source locator is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Provider {
    /// `https://raw.githubusercontent.com/<locator>`
    #[default]
    Github,
    /// `https://gitlab.com/<locator>`
    Gitlab,
    /// The locator is already a complete URL.
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("not available provider {0:?}. {}", AVAILABLE_PROVIDERS)]
    Unsupported(String),
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::Github, Provider::Gitlab, Provider::None];

    pub fn as_str(self) -> &'static str {
        match self {
            Provider::Github => "github",
            Provider::Gitlab => "gitlab",
            Provider::None => "none",
        }
    }

    /// URL prefix for this provider, or `None` when the locator is used verbatim.
    pub fn base_url(self) -> Option<&'static str> {
        match self {
            Provider::Github => Some("https://raw.githubusercontent.com/"),
            Provider::Gitlab => Some("https://gitlab.com/"),
            Provider::None => None,
        }
    }

    /// Builds the fetch URL by plain concatenation; no escaping or validation.
    pub fn build_url(self, locator: &str) -> String {
        match self.base_url() {
            Some(prefix) => format!("{prefix}{locator}"),
            None => locator.to_string(),
        }
    }
}

impl FromStr for Provider {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Provider::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ProviderError::Unsupported(s.to_string()))
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
