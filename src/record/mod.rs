//! URL records listed in a sitemap.
//!
//! A [`UrlRecord`] carries one `<url>` entry's worth of data. Only the
//! location is mandatory; every other field is independently optional and
//! tagged by presence.

mod store;

pub use store::RecordStore;

/// Maximum location length, in Unicode scalar values.
pub const MAX_URL_LENGTH: usize = 2_048;

/// One entry to be listed in a sitemap.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlRecord {
    /// Absolute or relative path, appended to the configured base URL.
    pub location: String,
    /// Last modification time, emitted raw as `<lastmod>` when present.
    /// Expected to already be ISO-8601/RFC 3339 formatted.
    pub lastmod: Option<String>,
    /// Change frequency hint, e.g. "always" or "daily". Not validated
    /// against a fixed set by this layer.
    pub changefreq: Option<String>,
    /// Priority hint, conventionally 0.0..=1.0.
    pub priority: Option<f32>,
    /// Alternate-language links, rendered as `xhtml:link` tags.
    pub alternates: Vec<Alternate>,
}

/// An alternate-language link for multilingual sitemaps.
///
/// Entries missing either field are silently skipped at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternate {
    pub hreflang: Option<String>,
    pub href: Option<String>,
}

impl Alternate {
    pub fn new(hreflang: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            hreflang: Some(hreflang.into()),
            href: Some(href.into()),
        }
    }

    /// Both fields, when the entry is complete enough to render.
    pub(crate) fn complete(&self) -> Option<(&str, &str)> {
        match (self.hreflang.as_deref(), self.href.as_deref()) {
            (Some(hreflang), Some(href)) => Some((hreflang, href)),
            _ => None,
        }
    }
}

impl UrlRecord {
    /// Record with only the location set.
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            lastmod: None,
            changefreq: None,
            priority: None,
            alternates: Vec::new(),
        }
    }

    pub fn with_lastmod(mut self, lastmod: impl Into<String>) -> Self {
        self.lastmod = Some(lastmod.into());
        self
    }

    pub fn with_changefreq(mut self, changefreq: impl Into<String>) -> Self {
        self.changefreq = Some(changefreq.into());
        self
    }

    pub fn with_priority(mut self, priority: f32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_alternate(mut self, alternate: Alternate) -> Self {
        self.alternates.push(alternate);
        self
    }
}
