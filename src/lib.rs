//! XML sitemap and sitemap index generation per the
//! [sitemaps.org](https://www.sitemaps.org/protocol.html) protocol.
//!
//! Builds bounded-size sitemap documents from an in-memory list of URL
//! records, generates a sitemap index when more than one document results,
//! rewrites robots.txt with a `Sitemap:` directive, and optionally pings
//! search engines. Filesystem writes (plain or gzip) and HTTP pings go
//! through capability traits with stock implementations provided.
//!
//! # Example
//!
//! ```ignore
//! use sitemap_gen::{FsPersist, GeneratorConfig, SitemapGenerator, UrlRecord};
//!
//! let mut generator = SitemapGenerator::new(GeneratorConfig::new("https://example.com"))?;
//! generator.add_url(UrlRecord::new("/about").with_changefreq("monthly"))?;
//! generator.build()?;
//! let persist = FsPersist::new("public");
//! generator.write(&persist)?;
//! generator.write_robots(&persist)?;
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod logger;
pub mod notify;
pub mod persist;
pub mod record;
pub mod robots;
pub mod utils;

pub use config::GeneratorConfig;
pub use error::SitemapError;
pub use generator::{
    Artifact, Chunk, MAX_FILE_SIZE, MAX_SITEMAPS_PER_INDEX, MAX_URLS_PER_SITEMAP, SitemapGenerator,
    SitemapIndex,
};
pub use notify::{HttpPinger, PingOutcome, PingResponse, Pinger};
pub use persist::{FsPersist, Persist};
pub use record::{Alternate, MAX_URL_LENGTH, RecordStore, UrlRecord};
