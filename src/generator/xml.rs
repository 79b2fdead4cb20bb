//! XML building blocks shared by the sitemap and index renderers.

use std::borrow::Cow;

pub(crate) const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
pub(crate) const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub(crate) const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";
pub(crate) const SCHEMA_LOCATION: &str =
    "http://www.sitemaps.org/schemas/sitemap/0.9 http://www.sitemaps.org/schemas/sitemap/0.9/sitemap.xsd";

pub(crate) const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Three generator-identification comment lines emitted at the top of each
/// sitemap document.
pub(crate) fn generator_comments(generated_on: &str) -> String {
    format!(
        "<!-- generator-class=\"SitemapGenerator\" -->\n\
         <!-- generator-version=\"{}\" -->\n\
         <!-- generated-on=\"{generated_on}\" -->\n",
        env!("CARGO_PKG_VERSION")
    )
}

/// Opening tag of a `<urlset>` document, with the xsi, xhtml and default
/// sitemap namespaces.
pub(crate) fn urlset_open() -> String {
    format!(
        "<urlset xmlns:xsi=\"{XSI_NS}\" xsi:schemaLocation=\"{SCHEMA_LOCATION}\" \
         xmlns:xhtml=\"{XHTML_NS}\" xmlns=\"{SITEMAP_NS}\">\n"
    )
}

/// Opening tag of a `<sitemapindex>` document.
pub(crate) fn sitemapindex_open() -> String {
    format!(
        "<sitemapindex xmlns:xsi=\"{XSI_NS}\" xsi:schemaLocation=\"{SCHEMA_LOCATION}\" \
         xmlns=\"{SITEMAP_NS}\">\n"
    )
}

/// Escape special XML characters.
pub(crate) fn escape_xml(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
