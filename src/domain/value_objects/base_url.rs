//! Base URL Value Object
//!
//! The origin prepended to every asset reference in generated HTML.

use std::fmt;

/// Normalized base URL (never ends with `/`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Used when the configured value is unset or blank
    pub const DEFAULT: &'static str = "http://localhost:4444";

    /// Normalize a configured value
    ///
    /// Blank input falls back to [`BaseUrl::DEFAULT`]. Trailing slashes are
    /// stripped, so `/` yields the empty (root-relative) base.
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self(Self::DEFAULT.to_string());
        }
        Self(trimmed.trim_end_matches('/').to_string())
    }

    /// Normalize an optional value (`None` means unset)
    pub fn from_option(raw: Option<&str>) -> Self {
        Self::new(raw.unwrap_or(""))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// URL of a file directly under this base
    pub fn join(&self, file_name: &str) -> String {
        format!("{}/{}", self.0, file_name.trim_start_matches('/'))
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BaseUrl {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
