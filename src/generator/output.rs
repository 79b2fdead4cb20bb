//! Output assembly.
//!
//! Resolves final artifact filenames (the `.gz` suffix convention) and the
//! full sitemap URL, and exposes the finished documents in persistence order.

use super::chunk::Chunk;
use super::index::SitemapIndex;

/// One finished document, ready to persist or inspect in memory.
#[derive(Debug, Clone)]
pub struct Artifact {
    /// Final on-disk name, `.gz` suffix included when applicable.
    pub filename: String,
    /// Uncompressed document bytes; compression happens at persist time.
    pub xml: String,
    /// Whether the persistence step should gzip this artifact.
    pub compressed: bool,
}

/// Final filename for a chunk: `.gz` appended only when compression is on.
/// The index document is never compressed, so it never goes through here.
pub(crate) fn final_chunk_filename(filename: &str, compress: bool) -> String {
    if compress {
        format!("{filename}.gz")
    } else {
        filename.to_string()
    }
}

/// Collect artifacts in persistence order: index first (if present), then
/// chunks in sequence order.
pub(crate) fn assemble(
    chunks: &[Chunk],
    index: Option<&SitemapIndex>,
    compress: bool,
) -> Vec<Artifact> {
    let mut artifacts = Vec::with_capacity(chunks.len() + 1);
    if let Some(index) = index {
        artifacts.push(Artifact {
            filename: index.filename.clone(),
            xml: index.xml.clone(),
            compressed: false,
        });
    }
    for chunk in chunks {
        artifacts.push(Artifact {
            filename: final_chunk_filename(&chunk.filename, compress),
            xml: chunk.xml.clone(),
            compressed: compress,
        });
    }
    artifacts
}

/// Full URL used for robots.txt and search-engine pings.
pub(crate) fn sitemap_url(
    base_url: &str,
    chunks: &[Chunk],
    index: Option<&SitemapIndex>,
    compress: bool,
) -> String {
    match index {
        Some(index) => format!("{base_url}/{}", index.filename),
        None => {
            let filename = chunks.first().map(|c| c.filename.as_str()).unwrap_or("");
            format!("{base_url}/{}", final_chunk_filename(filename, compress))
        }
    }
}
