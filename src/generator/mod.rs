//! Sitemap generation.
//!
//! [`SitemapGenerator`] ties the pieces together: it owns the record store
//! and the configuration, partitions records into bounded chunks, builds the
//! index document when needed, and hands finished artifacts to the
//! persistence and notification capabilities.
//!
//! A generator instance is not safe for concurrent `add_url`/`build` calls;
//! callers that need parallelism should use one instance per thread.

pub mod chunk;
pub mod index;
pub mod output;
pub(crate) mod xml;

use crate::config::GeneratorConfig;
use crate::error::SitemapError;
use crate::notify::{PingOutcome, Pinger};
use crate::persist::Persist;
use crate::record::{RecordStore, UrlRecord};
use crate::utils::date::DateTimeUtc;
use crate::{debug, log, robots};

pub use chunk::Chunk;
pub use index::SitemapIndex;
pub use output::Artifact;

/// Hard cap on the byte size of one sitemap file (50 MiB).
pub const MAX_FILE_SIZE: usize = 52_428_800;
/// Hard cap on URLs per sitemap file.
pub const MAX_URLS_PER_SITEMAP: usize = 50_000;
/// Hard cap on sitemaps referenced by one index.
pub const MAX_SITEMAPS_PER_INDEX: usize = 50_000;

/// A finished build: chunks, optional index, and the resolved sitemap URL.
#[derive(Debug)]
struct Built {
    chunks: Vec<Chunk>,
    index: Option<SitemapIndex>,
    sitemap_url: String,
}

/// Sitemap generator.
///
/// Records are appended with [`add_url`](Self::add_url) /
/// [`add_urls`](Self::add_urls); [`build`](Self::build) produces a fresh,
/// immutable chunk set (re-running after further appends replaces it
/// wholesale; there is no incremental update).
#[derive(Debug)]
pub struct SitemapGenerator {
    config: GeneratorConfig,
    store: RecordStore,
    built: Option<Built>,
}

impl SitemapGenerator {
    /// Create a generator from a validated configuration.
    pub fn new(config: GeneratorConfig) -> Result<Self, SitemapError> {
        config.validate()?;
        Ok(Self {
            config,
            store: RecordStore::new(),
            built: None,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Append one record.
    pub fn add_url(&mut self, record: UrlRecord) -> Result<(), SitemapError> {
        self.store.add(record)
    }

    /// Append records in order, failing fast on the first invalid one.
    pub fn add_urls(
        &mut self,
        records: impl IntoIterator<Item = UrlRecord>,
    ) -> Result<(), SitemapError> {
        self.store.add_many(records)
    }

    pub fn url_count(&self) -> usize {
        self.store.len()
    }

    /// Snapshot of all stored records, in insertion order.
    pub fn urls(&self) -> &[UrlRecord] {
        self.store.records()
    }

    /// Build the chunk set and (when more than one chunk results) the index.
    ///
    /// Fails with [`SitemapError::Precondition`] when no records were added,
    /// and with [`SitemapError::Length`] when a produced document exceeds a
    /// protocol limit; no partial output is kept on failure.
    pub fn build(&mut self) -> Result<(), SitemapError> {
        let generated_on = DateTimeUtc::now().to_rfc3339();
        let base_url = self.config.base_url_trimmed().to_string();

        let mut chunks = chunk::build_chunks(
            self.store.records(),
            &base_url,
            &self.config.sitemap_filename,
            self.config.max_urls_per_sitemap,
            &generated_on,
        )?;
        let index = index::build_index(
            &mut chunks,
            &base_url,
            &self.config.sitemap_index_filename,
            &self.config.sitemap_filename,
            self.config.compress,
            &generated_on,
        )?;
        let sitemap_url = output::sitemap_url(&base_url, &chunks, index.as_ref(), self.config.compress);

        debug!("sitemap"; "built {} chunk(s) from {} url(s), index: {}",
            chunks.len(), self.store.len(), index.is_some());

        self.built = Some(Built {
            chunks,
            index,
            sitemap_url,
        });
        Ok(())
    }

    fn built(&self) -> Result<&Built, SitemapError> {
        self.built.as_ref().ok_or(SitemapError::Precondition(
            "sitemaps have not been built yet; call build first",
        ))
    }

    /// Finished artifacts in persistence order: index first (if present),
    /// then chunks.
    pub fn artifacts(&self) -> Result<Vec<Artifact>, SitemapError> {
        let built = self.built()?;
        Ok(output::assemble(
            &built.chunks,
            built.index.as_ref(),
            self.config.compress,
        ))
    }

    /// The built chunks, in order.
    pub fn chunks(&self) -> Result<&[Chunk], SitemapError> {
        Ok(&self.built()?.chunks)
    }

    /// The index document, when more than one chunk was built.
    pub fn index(&self) -> Result<Option<&SitemapIndex>, SitemapError> {
        Ok(self.built()?.index.as_ref())
    }

    /// Full URL of the sitemap or index, for robots.txt and pings.
    pub fn sitemap_url(&self) -> Result<&str, SitemapError> {
        Ok(&self.built()?.sitemap_url)
    }

    /// Persist every artifact through the given capability.
    ///
    /// Fails fast on the first IO error; artifacts written before the
    /// failure remain.
    pub fn write(&self, persist: &dyn Persist) -> Result<(), SitemapError> {
        for artifact in self.artifacts()? {
            if artifact.compressed {
                persist.persist_compressed(&artifact.filename, artifact.xml.as_bytes())?;
            } else {
                persist.persist(&artifact.filename, artifact.xml.as_bytes())?;
            }
            log!("sitemap"; "wrote {} ({} bytes)", artifact.filename, artifact.xml.len());
        }
        Ok(())
    }

    /// Rewrite robots.txt content to reference the built sitemap.
    pub fn update_robots(&self, existing: Option<&str>) -> Result<String, SitemapError> {
        Ok(robots::update(existing, self.sitemap_url()?))
    }

    /// Load the existing robots.txt through the persistence capability,
    /// rewrite it and persist the result.
    pub fn write_robots(&self, persist: &dyn Persist) -> Result<(), SitemapError> {
        let existing = persist.load(&self.config.robots_filename)?;
        let updated = self.update_robots(existing.as_deref())?;
        persist.persist(&self.config.robots_filename, updated.as_bytes())?;
        log!("robots"; "wrote {}", self.config.robots_filename);
        Ok(())
    }

    /// Notify every configured search engine of the built sitemap.
    ///
    /// Returns one outcome per engine; a failing engine yields an outcome
    /// with `http_code` 0 and never blocks the remaining engines.
    pub fn submit(
        &self,
        pinger: &dyn Pinger,
        yahoo_app_id: Option<&str>,
    ) -> Result<Vec<PingOutcome>, SitemapError> {
        let outcomes = crate::notify::submit_all(pinger, self.sitemap_url()?, yahoo_app_id);
        for outcome in &outcomes {
            log!("submit"; "{}: HTTP {}", outcome.site, outcome.http_code);
        }
        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{NotifyError, PingResponse};
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory persistence for end-to-end tests.
    #[derive(Default)]
    struct MemPersist {
        files: RefCell<HashMap<String, Vec<u8>>>,
        compressed: RefCell<Vec<String>>,
    }

    impl Persist for MemPersist {
        fn persist(&self, name: &str, bytes: &[u8]) -> Result<(), SitemapError> {
            self.files
                .borrow_mut()
                .insert(name.to_string(), bytes.to_vec());
            Ok(())
        }

        fn persist_compressed(&self, name: &str, bytes: &[u8]) -> Result<(), SitemapError> {
            self.compressed.borrow_mut().push(name.to_string());
            self.persist(name, bytes)
        }

        fn load(&self, name: &str) -> Result<Option<String>, SitemapError> {
            Ok(self
                .files
                .borrow()
                .get(name)
                .map(|b| String::from_utf8_lossy(b).into_owned()))
        }
    }

    struct OkPinger;

    impl Pinger for OkPinger {
        fn notify(&self, _url: &str) -> Result<PingResponse, NotifyError> {
            Ok(PingResponse {
                status: 200,
                body: "OK".to_string(),
            })
        }
    }

    fn generator() -> SitemapGenerator {
        SitemapGenerator::new(GeneratorConfig::new("https://example.com")).unwrap()
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        assert!(SitemapGenerator::new(GeneratorConfig::default()).is_err());
    }

    #[test]
    fn test_accessors_before_build_are_precondition_errors() {
        let generator = generator();
        assert!(matches!(
            generator.artifacts(),
            Err(SitemapError::Precondition(_))
        ));
        assert!(matches!(
            generator.sitemap_url(),
            Err(SitemapError::Precondition(_))
        ));
        assert!(matches!(
            generator.submit(&OkPinger, None),
            Err(SitemapError::Precondition(_))
        ));
    }

    #[test]
    fn test_end_to_end_single_chunk() {
        let mut generator = generator();
        generator
            .add_urls(["/a", "/b", "/c"].map(UrlRecord::new))
            .unwrap();
        generator.build().unwrap();

        let artifacts = generator.artifacts().unwrap();
        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].filename, "sitemap.xml");
        assert!(generator.index().unwrap().is_none());
        assert_eq!(
            generator.sitemap_url().unwrap(),
            "https://example.com/sitemap.xml"
        );

        let xml = &artifacts[0].xml;
        assert_eq!(xml.matches("<url>").count(), 3);
        let a = xml.find("<loc>https://example.com/a</loc>").unwrap();
        let b = xml.find("<loc>https://example.com/b</loc>").unwrap();
        let c = xml.find("<loc>https://example.com/c</loc>").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_end_to_end_with_index() {
        let mut config = GeneratorConfig::new("https://example.com");
        config.max_urls_per_sitemap = 2;
        let mut generator = SitemapGenerator::new(config).unwrap();
        generator
            .add_urls(["/a", "/b", "/c", "/d", "/e"].map(UrlRecord::new))
            .unwrap();
        generator.build().unwrap();

        let artifacts = generator.artifacts().unwrap();
        let names: Vec<&str> = artifacts.iter().map(|a| a.filename.as_str()).collect();
        assert_eq!(
            names,
            ["sitemap-index.xml", "sitemap1.xml", "sitemap2.xml", "sitemap3.xml"]
        );
        assert_eq!(
            generator.sitemap_url().unwrap(),
            "https://example.com/sitemap-index.xml"
        );
    }

    #[test]
    fn test_rebuild_replaces_previous_chunk_set() {
        let mut generator = generator();
        generator.add_url(UrlRecord::new("/a")).unwrap();
        generator.build().unwrap();
        let first = generator.artifacts().unwrap()[0].xml.clone();

        generator.add_url(UrlRecord::new("/b")).unwrap();
        generator.build().unwrap();
        let second = &generator.artifacts().unwrap()[0].xml;
        assert_eq!(first.matches("<url>").count(), 1);
        assert_eq!(second.matches("<url>").count(), 2);
    }

    #[test]
    fn test_write_persists_all_artifacts() {
        let mut config = GeneratorConfig::new("https://example.com");
        config.max_urls_per_sitemap = 1;
        let mut generator = SitemapGenerator::new(config).unwrap();
        generator.add_urls(["/a", "/b"].map(UrlRecord::new)).unwrap();
        generator.build().unwrap();

        let persist = MemPersist::default();
        generator.write(&persist).unwrap();
        let files = persist.files.borrow();
        assert!(files.contains_key("sitemap-index.xml"));
        assert!(files.contains_key("sitemap1.xml"));
        assert!(files.contains_key("sitemap2.xml"));
        assert!(persist.compressed.borrow().is_empty());
    }

    #[test]
    fn test_write_compressed_chunks_not_index() {
        let mut config = GeneratorConfig::new("https://example.com");
        config.max_urls_per_sitemap = 1;
        config.compress = true;
        let mut generator = SitemapGenerator::new(config).unwrap();
        generator.add_urls(["/a", "/b"].map(UrlRecord::new)).unwrap();
        generator.build().unwrap();

        let persist = MemPersist::default();
        generator.write(&persist).unwrap();
        let compressed = persist.compressed.borrow();
        assert_eq!(*compressed, ["sitemap1.xml.gz", "sitemap2.xml.gz"]);
        assert!(persist.files.borrow().contains_key("sitemap-index.xml"));
    }

    #[test]
    fn test_write_robots_strips_old_directive() {
        let mut generator = generator();
        generator.add_url(UrlRecord::new("/a")).unwrap();
        generator.build().unwrap();

        let persist = MemPersist::default();
        persist
            .persist(
                "robots.txt",
                b"User-agent: *\nSitemap: http://old/sitemap.xml\n",
            )
            .unwrap();
        generator.write_robots(&persist).unwrap();

        let robots = persist.load("robots.txt").unwrap().unwrap();
        assert!(!robots.contains("http://old/sitemap.xml"));
        assert!(robots.ends_with("Sitemap: https://example.com/sitemap.xml"));
    }

    #[test]
    fn test_submit_reports_all_engines() {
        let mut generator = generator();
        generator.add_url(UrlRecord::new("/a")).unwrap();
        generator.build().unwrap();

        let outcomes = generator.submit(&OkPinger, None).unwrap();
        assert_eq!(outcomes.len(), 4);
        assert!(outcomes.iter().all(PingOutcome::succeeded));
    }
}
