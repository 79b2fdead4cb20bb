//! Error types for sitemap generation.
//!
//! Every failure is surfaced to the caller immediately with enough context to
//! act on; nothing is retried internally.

use thiserror::Error;

/// Sitemap generation errors.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// Malformed input or configuration (empty location, URL too long,
    /// max-URLs-per-sitemap out of range, empty filename).
    #[error("invalid {field}: {reason}")]
    Validation {
        /// Name of the offending field or parameter.
        field: &'static str,
        reason: String,
    },

    /// Operation invoked out of order (e.g. `build` before any `add_url`,
    /// or `write`/`submit` before `build`). Caller programming error.
    #[error("{0}")]
    Precondition(&'static str),

    /// A produced artifact exceeds a hard protocol limit. The caller must
    /// lower `max_urls_per_sitemap` (or split the input) and rebuild.
    #[error(
        "{what} is {actual}, exceeding the limit of {limit} by {percent:.1}%",
        percent = overage_percent(*.actual, *.limit)
    )]
    Length {
        /// What exceeded the limit (e.g. "sitemap byte size", "chunk count").
        what: &'static str,
        actual: usize,
        limit: usize,
    },

    /// Persistence failure from the filesystem collaborator. Generation
    /// state is not rolled back; files written before the failure remain.
    #[error("IO error when writing `{name}`")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file parsing error.
    #[error("config file parsing error")]
    Toml(#[from] toml::de::Error),
}

/// How far `actual` overshoots `limit`, in percent of the limit.
#[allow(clippy::cast_precision_loss)] // Display only
fn overage_percent(actual: usize, limit: usize) -> f64 {
    if limit == 0 {
        return 0.0;
    }
    (actual as f64 - limit as f64) / limit as f64 * 100.0
}
