//! Generator configuration.
//!
//! `GeneratorConfig` is an immutable configuration struct passed to
//! [`SitemapGenerator::new`](crate::generator::SitemapGenerator::new); it is
//! validated up front so every stored value is known-good (validate, then
//! store).

use crate::error::SitemapError;
use crate::generator::MAX_URLS_PER_SITEMAP;
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Base URL of the site, e.g. `https://example.com`. A trailing slash
    /// is stripped before use.
    pub base_url: String,
    /// Filename for single-sitemap output, and the base name chunk files
    /// are derived from.
    pub sitemap_filename: String,
    /// Filename for the sitemap index document.
    pub sitemap_index_filename: String,
    /// Filename of the robots.txt file to rewrite.
    pub robots_filename: String,
    /// Gzip-compress sitemap files on write (`.gz` suffix). The index
    /// document is never compressed.
    pub compress: bool,
    /// Maximum URLs per sitemap file, 1..=50,000.
    pub max_urls_per_sitemap: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            sitemap_filename: "sitemap.xml".into(),
            sitemap_index_filename: "sitemap-index.xml".into(),
            robots_filename: "robots.txt".into(),
            compress: false,
            max_urls_per_sitemap: MAX_URLS_PER_SITEMAP,
        }
    }
}

impl GeneratorConfig {
    /// Default configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Parse from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, SitemapError> {
        Ok(toml::from_str(s)?)
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self, SitemapError> {
        let content = std::fs::read_to_string(path).map_err(|source| SitemapError::Io {
            name: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Base URL with any trailing slash stripped.
    pub(crate) fn base_url_trimmed(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Validate all fields, reporting the first violation.
    pub fn validate(&self) -> Result<(), SitemapError> {
        if self.base_url.trim().is_empty() {
            return Err(SitemapError::Validation {
                field: "base_url",
                reason: "must not be empty".to_string(),
            });
        }
        if let Err(e) = Url::parse(&self.base_url) {
            return Err(SitemapError::Validation {
                field: "base_url",
                reason: format!("`{}` is not a valid URL: {e}", self.base_url),
            });
        }
        for (field, value) in [
            ("sitemap_filename", &self.sitemap_filename),
            ("sitemap_index_filename", &self.sitemap_index_filename),
            ("robots_filename", &self.robots_filename),
        ] {
            if value.trim().is_empty() {
                return Err(SitemapError::Validation {
                    field,
                    reason: "must not be empty".to_string(),
                });
            }
        }
        if self.max_urls_per_sitemap == 0 {
            return Err(SitemapError::Validation {
                field: "max_urls_per_sitemap",
                reason: "must be positive".to_string(),
            });
        }
        if self.max_urls_per_sitemap > MAX_URLS_PER_SITEMAP {
            return Err(SitemapError::Validation {
                field: "max_urls_per_sitemap",
                reason: format!(
                    "{} exceeds the protocol cap of {MAX_URLS_PER_SITEMAP}",
                    self.max_urls_per_sitemap
                ),
            });
        }
        Ok(())
    }
}
