use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::types::RevisionRequest;

static FOCUS_SUMMARIES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "general",
            "This essay has been improved for overall clarity, flow, and academic tone.",
        ),
        (
            "grammar",
            "Grammar and style corrections have been applied throughout the essay.",
        ),
        (
            "structure",
            "The essay structure has been reorganized for better logical flow.",
        ),
        (
            "academic",
            "The language has been adjusted to maintain a more formal academic tone.",
        ),
        (
            "clarity",
            "Sentences have been simplified and clarified for better readability.",
        ),
        (
            "argument",
            "The argument structure has been strengthened with better evidence and reasoning.",
        ),
    ])
});

/// Summary sentence for a revision focus, falling back to the general one.
pub fn focus_summary(focus: &str) -> &'static str {
    FOCUS_SUMMARIES
        .get(focus)
        .copied()
        .unwrap_or_else(|| FOCUS_SUMMARIES["general"])
}

/// Wrap the original text, unchanged, under a focus-specific summary.
pub fn render_revision(req: &RevisionRequest) -> String {
    format!(
        "<h3>Improved Essay ({} focus)</h3>\n\n\
         <p><strong>Improvement Summary:</strong> {}</p>\n\n\
         <div class=\"generated-content\">\n{}\n</div>",
        req.focus,
        focus_summary(&req.focus),
        req.original_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_lookup() {
        assert_eq!(
            focus_summary("clarity"),
            "Sentences have been simplified and clarified for better readability."
        );
    }

    #[test]
    fn test_unknown_focus_falls_back_to_general() {
        assert_eq!(focus_summary("rhymes"), focus_summary("general"));
    }

    #[test]
    fn test_original_text_is_untouched() {
        let req = RevisionRequest {
            original_text: "First paragraph.\n\nSecond paragraph.".to_string(),
            focus: "structure".to_string(),
        };
        let html = render_revision(&req);
        assert!(html.contains("First paragraph.\n\nSecond paragraph."));
        assert!(html.contains("<h3>Improved Essay (structure focus)</h3>"));
        assert!(html.contains("The essay structure has been reorganized"));
    }
}
