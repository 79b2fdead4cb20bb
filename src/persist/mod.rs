//! Persistence capability.
//!
//! The generator core never touches the filesystem directly; it hands
//! finished artifacts to a [`Persist`] implementation. [`FsPersist`] is the
//! stock implementation writing under a root directory, with gzip support
//! for `.gz` artifacts.

use crate::error::SitemapError;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Persist blobs under a name, and read one back for robots.txt rewriting.
pub trait Persist {
    /// Write `bytes` under `name` as-is.
    fn persist(&self, name: &str, bytes: &[u8]) -> Result<(), SitemapError>;

    /// Write `bytes` under `name`, gzip-compressed.
    fn persist_compressed(&self, name: &str, bytes: &[u8]) -> Result<(), SitemapError>;

    /// Read existing content under `name`, `None` if absent.
    fn load(&self, name: &str) -> Result<Option<String>, SitemapError>;
}

/// Filesystem-backed persistence rooted at a directory.
#[derive(Debug, Clone)]
pub struct FsPersist {
    root: PathBuf,
}

impl FsPersist {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn io_error(name: &str, source: std::io::Error) -> SitemapError {
        SitemapError::Io {
            name: name.to_string(),
            source,
        }
    }
}

impl Persist for FsPersist {
    fn persist(&self, name: &str, bytes: &[u8]) -> Result<(), SitemapError> {
        fs::write(self.root.join(name), bytes).map_err(|e| Self::io_error(name, e))
    }

    fn persist_compressed(&self, name: &str, bytes: &[u8]) -> Result<(), SitemapError> {
        let file = fs::File::create(self.root.join(name)).map_err(|e| Self::io_error(name, e))?;
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder
            .write_all(bytes)
            .and_then(|()| encoder.finish().map(|_| ()))
            .map_err(|e| Self::io_error(name, e))
    }

    fn load(&self, name: &str) -> Result<Option<String>, SitemapError> {
        match fs::read_to_string(self.root.join(name)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::io_error(name, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persist_writes_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let persist = FsPersist::new(dir.path());
        persist.persist("sitemap.xml", b"<urlset/>").unwrap();
        assert_eq!(
            fs::read(dir.path().join("sitemap.xml")).unwrap(),
            b"<urlset/>"
        );
    }

    #[test]
    fn test_persist_compressed_writes_gzip() {
        let dir = tempfile::tempdir().unwrap();
        let persist = FsPersist::new(dir.path());
        persist
            .persist_compressed("sitemap.xml.gz", b"<urlset/>")
            .unwrap();
        let written = fs::read(dir.path().join("sitemap.xml.gz")).unwrap();
        // Gzip magic bytes
        assert_eq!(&written[..2], &[0x1f, 0x8b]);
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let persist = FsPersist::new(dir.path());
        assert_eq!(persist.load("robots.txt").unwrap(), None);
    }

    #[test]
    fn test_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let persist = FsPersist::new(dir.path());
        persist.persist("robots.txt", b"User-agent: *\n").unwrap();
        assert_eq!(
            persist.load("robots.txt").unwrap().as_deref(),
            Some("User-agent: *\n")
        );
    }

    #[test]
    fn test_persist_into_missing_directory_is_io_error() {
        let persist = FsPersist::new("/nonexistent-sitemap-gen-test-dir");
        let err = persist.persist("sitemap.xml", b"<urlset/>").unwrap_err();
        assert!(matches!(err, SitemapError::Io { .. }));
    }
}
