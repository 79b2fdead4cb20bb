//! Chunking and sitemap document rendering.
//!
//! Partitions the record store into ordered chunks bounded by the configured
//! max-record count, renders each chunk to a complete `<urlset>` document and
//! enforces the protocol's hard byte-size cap. An oversized document fails
//! the whole build; no partial output is ever returned.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <!-- generator-class="SitemapGenerator" -->
//! <!-- generator-version="0.1.0" -->
//! <!-- generated-on="2025-01-01T00:00:00Z" -->
//! <urlset xmlns:xsi="..." xsi:schemaLocation="..." xmlns:xhtml="..." xmlns="...">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!   </url>
//! </urlset>
//! ```

use super::xml::{XML_DECLARATION, escape_xml, generator_comments, urlset_open};
use super::{MAX_FILE_SIZE, MAX_URLS_PER_SITEMAP};
use crate::error::SitemapError;
use crate::record::UrlRecord;

/// One bounded subset of URL records rendered into a single sitemap document.
///
/// Immutable once produced. The filename starts out as the configured base
/// sitemap filename and is finalized by the index builder when more than one
/// chunk exists.
#[derive(Debug, Clone)]
pub struct Chunk {
    /// Zero-based position in the chunk sequence.
    pub sequence: usize,
    pub filename: String,
    pub xml: String,
}

impl Chunk {
    /// Serialized size in bytes.
    pub fn byte_size(&self) -> usize {
        self.xml.len()
    }
}

/// Partition `records` into rendered chunks of at most `max_urls` records.
pub(crate) fn build_chunks(
    records: &[UrlRecord],
    base_url: &str,
    base_filename: &str,
    max_urls: usize,
    generated_on: &str,
) -> Result<Vec<Chunk>, SitemapError> {
    if max_urls == 0 {
        return Err(SitemapError::Validation {
            field: "max_urls_per_sitemap",
            reason: "must be positive".to_string(),
        });
    }
    if max_urls > MAX_URLS_PER_SITEMAP {
        return Err(SitemapError::Validation {
            field: "max_urls_per_sitemap",
            reason: format!("{max_urls} exceeds the protocol cap of {MAX_URLS_PER_SITEMAP}"),
        });
    }
    if records.is_empty() {
        return Err(SitemapError::Precondition(
            "no URLs to build a sitemap from; add at least one record first",
        ));
    }

    let mut chunks = Vec::with_capacity(records.len().div_ceil(max_urls));
    for (sequence, slice) in records.chunks(max_urls).enumerate() {
        let xml = render_urlset(slice, base_url, generated_on);
        if xml.len() > MAX_FILE_SIZE {
            return Err(SitemapError::Length {
                what: "sitemap byte size",
                actual: xml.len(),
                limit: MAX_FILE_SIZE,
            });
        }
        chunks.push(Chunk {
            sequence,
            filename: base_filename.to_string(),
            xml,
        });
    }
    Ok(chunks)
}

/// Render one chunk of records as a complete urlset document.
fn render_urlset(records: &[UrlRecord], base_url: &str, generated_on: &str) -> String {
    let mut xml = String::with_capacity(256 + records.len() * 128);

    xml.push_str(XML_DECLARATION);
    xml.push_str(&generator_comments(generated_on));
    xml.push_str(&urlset_open());

    for record in records {
        render_url(&mut xml, record, base_url);
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Render one `<url>` element with children in fixed order:
/// loc, lastmod?, changefreq?, priority?, xhtml:link*.
fn render_url(xml: &mut String, record: &UrlRecord, base_url: &str) {
    xml.push_str("  <url>\n    <loc>");
    xml.push_str(&escape_xml(&format!("{base_url}{}", record.location)));
    xml.push_str("</loc>\n");

    if let Some(lastmod) = &record.lastmod {
        xml.push_str("    <lastmod>");
        xml.push_str(lastmod);
        xml.push_str("</lastmod>\n");
    }
    if let Some(changefreq) = &record.changefreq {
        xml.push_str("    <changefreq>");
        xml.push_str(changefreq);
        xml.push_str("</changefreq>\n");
    }
    if let Some(priority) = record.priority {
        xml.push_str("    <priority>");
        xml.push_str(&priority.to_string());
        xml.push_str("</priority>\n");
    }
    for alternate in &record.alternates {
        // Incomplete alternates are skipped; href is emitted verbatim
        // (matches the wire output existing consumers rely on)
        if let Some((hreflang, href)) = alternate.complete() {
            xml.push_str("    <xhtml:link rel=\"alternate\" hreflang=\"");
            xml.push_str(hreflang);
            xml.push_str("\" href=\"");
            xml.push_str(href);
            xml.push_str("\"/>\n");
        }
    }

    xml.push_str("  </url>\n");
}
