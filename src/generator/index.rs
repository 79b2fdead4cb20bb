//! Sitemap index building.
//!
//! When chunking produces more than one sitemap, each chunk gets a
//! deterministic sequential filename and a `<sitemapindex>` document is built
//! referencing all of them.

use super::chunk::Chunk;
use super::output::final_chunk_filename;
use super::xml::{XML_DECLARATION, escape_xml, sitemapindex_open};
use super::MAX_SITEMAPS_PER_INDEX;
use crate::error::SitemapError;

/// The second-level index document referencing every chunk.
///
/// Present iff more than one chunk was produced. Immutable once built.
#[derive(Debug, Clone)]
pub struct SitemapIndex {
    pub filename: String,
    pub xml: String,
}

impl SitemapIndex {
    pub fn byte_size(&self) -> usize {
        self.xml.len()
    }
}

/// Assign sequential filenames to `chunks` and build the index document.
///
/// With zero or one chunk there is nothing to index: the single chunk keeps
/// the configured base filename and no index is produced.
pub(crate) fn build_index(
    chunks: &mut [Chunk],
    base_url: &str,
    index_filename: &str,
    sitemap_base_filename: &str,
    compress: bool,
    generated_on: &str,
) -> Result<Option<SitemapIndex>, SitemapError> {
    if chunks.len() <= 1 {
        return Ok(None);
    }
    if chunks.len() > MAX_SITEMAPS_PER_INDEX {
        return Err(SitemapError::Length {
            what: "sitemap count in index",
            actual: chunks.len(),
            limit: MAX_SITEMAPS_PER_INDEX,
        });
    }

    // sitemap.xml -> sitemap1.xml, sitemap2.xml, ... Only the first `.xml`
    // occurrence in the base filename is replaced.
    for (i, chunk) in chunks.iter_mut().enumerate() {
        chunk.filename = sitemap_base_filename.replacen(".xml", &format!("{}.xml", i + 1), 1);
    }

    let mut xml = String::with_capacity(256 + chunks.len() * 128);
    xml.push_str(XML_DECLARATION);
    xml.push_str(&sitemapindex_open());
    for chunk in chunks.iter() {
        let loc = format!(
            "{base_url}/{}",
            final_chunk_filename(&chunk.filename, compress)
        );
        xml.push_str("  <sitemap>\n    <loc>");
        xml.push_str(&escape_xml(&loc));
        xml.push_str("</loc>\n    <lastmod>");
        xml.push_str(generated_on);
        xml.push_str("</lastmod>\n  </sitemap>\n");
    }
    xml.push_str("</sitemapindex>\n");

    Ok(Some(SitemapIndex {
        filename: index_filename.to_string(),
        xml,
    }))
}
