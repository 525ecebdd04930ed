use once_cell::sync::Lazy;
use regex::Regex;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));

/// Strip markup from a rendered fragment, leaving its plain text.
///
/// The template engine only ever emits a small tag subset (headings,
/// paragraphs, emphasis, container divs) and keeps blank lines between
/// blocks in the source string, so removing tags is enough to recover
/// paragraph structure for stats, export and clipboard.
pub fn html_to_text(html: &str) -> String {
    TAG.replace_all(html, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags() {
        assert_eq!(html_to_text("<h1>Topic</h1>"), "Topic");
        assert_eq!(
            html_to_text("<p>One <em>two</em> three</p>"),
            "One two three"
        );
    }

    #[test]
    fn test_preserves_block_breaks() {
        let text = html_to_text("<h2>Introduction</h2>\n<p>Body.</p>\n\n<h2>End</h2>");
        assert_eq!(text, "Introduction\nBody.\n\nEnd");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(html_to_text("no markup here"), "no markup here");
    }
}
