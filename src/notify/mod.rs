//! Search-engine notification.
//!
//! Pings each configured search-engine endpoint with the sitemap URL and
//! aggregates per-engine results. One engine's failure never aborts the
//! others: transport errors become result rows with `http_code` 0.
//!
//! The HTTP transport is a capability ([`Pinger`]); [`HttpPinger`] is the
//! stock blocking-reqwest implementation.

use crate::generator::xml::escape_xml;
use thiserror::Error;
use url::Url;

/// Yahoo endpoint with an application-id placeholder.
const YAHOO_APPID_TEMPLATE: &str =
    "http://search.yahooapis.com/SiteExplorerService/V1/updateNotification?appid=USERID&url=";
/// Yahoo fallback when no app id is supplied.
const YAHOO_PING_TEMPLATE: &str =
    "http://search.yahooapis.com/SiteExplorerService/V1/ping?sitemap=";

const PING_TEMPLATES: [&str; 3] = [
    "http://www.google.com/webmasters/tools/ping?sitemap=",
    "http://submissions.ask.com/ping?sitemap=",
    "http://www.bing.com/webmaster/ping.aspx?siteMap=",
];

/// Response from a single ping request.
#[derive(Debug, Clone)]
pub struct PingResponse {
    pub status: u16,
    pub body: String,
}

/// Transport failure while pinging an endpoint.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct NotifyError(pub String);

/// Outbound notification capability.
pub trait Pinger {
    fn notify(&self, url: &str) -> Result<PingResponse, NotifyError>;
}

/// Aggregated result of pinging one search engine.
#[derive(Debug, Clone)]
pub struct PingOutcome {
    /// Short host label of the engine, e.g. "google.com".
    pub site: String,
    /// The full URL that was requested.
    pub fullsite: String,
    /// HTTP status, or 0 on transport failure.
    pub http_code: u16,
    /// Response body (newlines flattened), or the transport error text.
    pub message: String,
}

impl PingOutcome {
    pub fn succeeded(&self) -> bool {
        (200..300).contains(&self.http_code)
    }
}

/// Endpoint templates in notification order: Yahoo first (app-id variant
/// when an id is supplied), then the plain ping engines.
fn endpoint_templates(yahoo_app_id: Option<&str>) -> Vec<String> {
    let yahoo = match yahoo_app_id {
        Some(app_id) => YAHOO_APPID_TEMPLATE.replace("USERID", app_id),
        None => YAHOO_PING_TEMPLATE.to_string(),
    };
    std::iter::once(yahoo)
        .chain(PING_TEMPLATES.iter().map(|t| (*t).to_string()))
        .collect()
}

/// Last two dot-separated labels of the endpoint host.
fn short_host_label(endpoint: &str) -> String {
    let Some(host) = Url::parse(endpoint)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
    else {
        return endpoint.to_string();
    };
    let labels: Vec<&str> = host.rsplit('.').take(2).collect();
    labels.into_iter().rev().collect::<Vec<_>>().join(".")
}

/// Ping every configured engine with `sitemap_url` appended (entity-escaped)
/// and collect one outcome per engine, in endpoint order.
pub(crate) fn submit_all(
    pinger: &dyn Pinger,
    sitemap_url: &str,
    yahoo_app_id: Option<&str>,
) -> Vec<PingOutcome> {
    endpoint_templates(yahoo_app_id)
        .into_iter()
        .map(|template| {
            let fullsite = format!("{template}{}", escape_xml(sitemap_url));
            let (http_code, message) = match pinger.notify(&fullsite) {
                Ok(response) => (response.status, response.body.replace('\n', " ")),
                Err(e) => (0, e.to_string()),
            };
            PingOutcome {
                site: short_host_label(&template),
                fullsite,
                http_code,
                message,
            }
        })
        .collect()
}

/// Blocking HTTP pinger backed by reqwest.
#[derive(Debug)]
pub struct HttpPinger {
    client: reqwest::blocking::Client,
}

impl HttpPinger {
    pub fn new() -> Result<Self, NotifyError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| NotifyError(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Pinger for HttpPinger {
    fn notify(&self, url: &str) -> Result<PingResponse, NotifyError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| NotifyError(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.text().unwrap_or_default();
        Ok(PingResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records requested URLs; fails any URL containing "ask.com".
    struct MockPinger {
        requested: RefCell<Vec<String>>,
    }

    impl MockPinger {
        fn new() -> Self {
            Self {
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl Pinger for MockPinger {
        fn notify(&self, url: &str) -> Result<PingResponse, NotifyError> {
            self.requested.borrow_mut().push(url.to_string());
            if url.contains("ask.com") {
                return Err(NotifyError("connection refused".to_string()));
            }
            Ok(PingResponse {
                status: 200,
                body: "Thanks\nfor the ping".to_string(),
            })
        }
    }

    #[test]
    fn test_pings_all_engines_in_order() {
        let pinger = MockPinger::new();
        let outcomes = submit_all(&pinger, "https://example.com/sitemap.xml", None);
        assert_eq!(outcomes.len(), 4);
        assert_eq!(outcomes[0].site, "yahooapis.com");
        assert_eq!(outcomes[1].site, "google.com");
        assert_eq!(outcomes[2].site, "ask.com");
        assert_eq!(outcomes[3].site, "bing.com");
    }

    #[test]
    fn test_one_failure_does_not_abort_the_rest() {
        let pinger = MockPinger::new();
        let outcomes = submit_all(&pinger, "https://example.com/sitemap.xml", None);
        assert_eq!(outcomes[2].http_code, 0);
        assert_eq!(outcomes[2].message, "connection refused");
        assert!(!outcomes[2].succeeded());
        // Engines after the failing one were still pinged
        assert_eq!(outcomes[3].http_code, 200);
        assert!(outcomes[3].succeeded());
    }

    #[test]
    fn test_response_body_newlines_flattened() {
        let pinger = MockPinger::new();
        let outcomes = submit_all(&pinger, "https://example.com/sitemap.xml", None);
        assert_eq!(outcomes[0].message, "Thanks for the ping");
    }

    #[test]
    fn test_yahoo_app_id_substitution() {
        let pinger = MockPinger::new();
        let outcomes = submit_all(&pinger, "https://example.com/sitemap.xml", Some("my-app-id"));
        assert!(outcomes[0].fullsite.contains("appid=my-app-id&url="));
        assert!(!outcomes[0].fullsite.contains("USERID"));
    }

    #[test]
    fn test_yahoo_fallback_without_app_id() {
        let pinger = MockPinger::new();
        let outcomes = submit_all(&pinger, "https://example.com/sitemap.xml", None);
        assert!(outcomes[0].fullsite.starts_with(YAHOO_PING_TEMPLATE));
        assert!(!outcomes[0].fullsite.contains("appid"));
    }

    #[test]
    fn test_sitemap_url_is_entity_escaped() {
        let pinger = MockPinger::new();
        let outcomes = submit_all(&pinger, "https://example.com/sitemap.xml?a=1&b=2", None);
        assert!(outcomes[1].fullsite.ends_with("sitemap.xml?a=1&amp;b=2"));
    }

    #[test]
    fn test_short_host_label() {
        assert_eq!(
            short_host_label("http://www.google.com/webmasters/tools/ping?sitemap="),
            "google.com"
        );
        assert_eq!(
            short_host_label("http://search.yahooapis.com/SiteExplorerService/V1/ping?sitemap="),
            "yahooapis.com"
        );
    }
}
