//! robots.txt rewriting.
//!
//! Pure text transformation: strip any prior `Sitemap:` directives from an
//! existing robots.txt blob and append the current sitemap URL. Persistence
//! is the caller's (or the persistence capability's) responsibility.

/// Starting content when no robots.txt exists yet.
const SAMPLE_ROBOTS: &str = "User-agent: *\nAllow: /";

/// Rewrite robots.txt content to reference `sitemap_url`.
///
/// Existing content keeps its line-terminator convention and every
/// non-`Sitemap:` line verbatim, blank lines included. The appended
/// `Sitemap:` line carries no trailing terminator.
pub fn update(existing: Option<&str>, sitemap_url: &str) -> String {
    match existing {
        None => format!("{SAMPLE_ROBOTS}\nSitemap: {sitemap_url}"),
        Some(content) => {
            let terminator = if content.contains("\r\n") { "\r\n" } else { "\n" };
            let mut updated = String::with_capacity(content.len() + sitemap_url.len() + 16);
            for line in content.split(terminator) {
                if line.starts_with("Sitemap:") {
                    continue;
                }
                updated.push_str(line);
                updated.push_str(terminator);
            }
            updated.push_str("Sitemap: ");
            updated.push_str(sitemap_url);
            updated
        }
    }
}
