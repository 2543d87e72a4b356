//! Official-website link extraction
//!
//! MediaWiki infoboxes conventionally wrap the subject's primary web
//! presence in a `<span class="official-website">` or `<span class="url">`
//! element containing a hyperlink. Extraction scans all spans of the first
//! class, then all of the second, in document order, and takes the first
//! span whose first `<a href>` has a non-empty target.

use scraper::{Html, Selector};

/// Extracts the official-site URL from an HTML page, if present.
///
/// # Arguments
///
/// * `html` - The HTML content to scan
///
/// # Returns
///
/// The href of the first matching hyperlink, or `None` if no
/// `official-website` or `url` span holds a non-empty link.
pub fn extract_official_site(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    // Both selectors are fixed strings, so parsing cannot fail.
    let span_selectors = [
        Selector::parse("span.official-website").ok()?,
        Selector::parse("span.url").ok()?,
    ];
    let link_selector = Selector::parse("a[href]").ok()?;

    for span_selector in &span_selectors {
        for span in document.select(span_selector) {
            if let Some(link) = span.select(&link_selector).next() {
                if let Some(href) = link.value().attr("href") {
                    if !href.is_empty() {
                        return Some(href.to_string());
                    }
                }
            }
        }
    }

    None
}
