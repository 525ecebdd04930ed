use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::constants::WORDS_PER_PARAGRAPH;

use super::types::DraftRequest;

static ESSAY_TYPE_LABELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("argumentative", "Argumentative Essay"),
        ("expository", "Expository Essay"),
        ("persuasive", "Persuasive Essay"),
        ("narrative", "Narrative Essay"),
        ("descriptive", "Descriptive Essay"),
        ("analytical", "Analytical Essay"),
        ("compare-contrast", "Compare & Contrast Essay"),
        ("cause-effect", "Cause & Effect Essay"),
        ("research", "Research Paper"),
        ("literary-analysis", "Literary Analysis"),
    ])
});

/// Display label for an essay type form value, falling back to "Essay".
pub fn essay_type_label(essay_type: &str) -> &'static str {
    ESSAY_TYPE_LABELS.get(essay_type).copied().unwrap_or("Essay")
}

/// Produce the full draft fragment for a request.
///
/// Paragraph count is derived from the requested word count; the body loop
/// covers everything between the introduction and the conclusion, so short
/// requests simply get no body paragraphs. The topic is interpolated
/// verbatim.
pub fn render_draft(req: &DraftRequest) -> String {
    let label = essay_type_label(&req.essay_type).to_lowercase();
    let words: usize = req.target_length.trim().parse().unwrap_or(0);
    let paragraphs = words.div_ceil(WORDS_PER_PARAGRAPH);

    let mut essay = format!("<h1>{}</h1>\n\n", req.topic);

    // Introduction
    essay.push_str("<h2>Introduction</h2>\n");
    essay.push_str(&format!(
        "<p>This {} explores the topic of \"{}\" and its implications in contemporary society. ",
        label, req.topic
    ));
    essay.push_str(
        "The discussion will examine various perspectives and provide a comprehensive analysis of the subject matter. ",
    );
    essay.push_str(
        "Through careful examination of relevant evidence and scholarly sources, this essay aims to provide a thorough understanding of the topic.</p>\n\n",
    );

    // Body paragraphs
    for i in 1..=paragraphs.saturating_sub(2) {
        essay.push_str(&format!("<h3>Body Paragraph {}</h3>\n", i));
        essay.push_str(&format!(
            "<p>This paragraph presents key arguments and evidence related to \"{}\". ",
            req.topic
        ));
        essay.push_str(
            "The analysis incorporates relevant research findings and theoretical frameworks to support the main thesis. ",
        );
        essay.push_str(
            "By examining multiple perspectives, this section provides a balanced view of the topic under discussion.</p>\n\n",
        );
    }

    // Conclusion
    essay.push_str("<h2>Conclusion</h2>\n");
    essay.push_str(&format!(
        "<p>In conclusion, this {} has demonstrated the significance of \"{}\" and its broader implications. ",
        label, req.topic
    ));
    essay.push_str(
        "The analysis has revealed important insights that contribute to our understanding of this complex subject. ",
    );
    essay.push_str(
        "Future research should continue to explore these themes to further develop our knowledge in this area.</p>\n\n",
    );

    // References unless the request opted out of citations
    if req.citation_style != "none" {
        essay.push_str("<h3>References</h3>\n");
        essay.push_str(
            "<p>Smith, J. (2024). Academic Writing Guide. Journal of Education, 15(2), 45-60.</p>\n",
        );
        essay.push_str(
            "<p>Johnson, A. (2023). Research Methods in Social Sciences. University Press.</p>\n",
        );
    }

    essay
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(topic: &str, length: &str, citation: &str) -> DraftRequest {
        DraftRequest {
            essay_type: "argumentative".to_string(),
            topic: topic.to_string(),
            target_length: length.to_string(),
            citation_style: citation.to_string(),
            ..DraftRequest::default()
        }
    }

    fn body_count(html: &str) -> usize {
        html.matches("<h3>Body Paragraph").count()
    }

    #[test]
    fn test_label_lookup() {
        assert_eq!(essay_type_label("research"), "Research Paper");
        assert_eq!(essay_type_label("compare-contrast"), "Compare & Contrast Essay");
        assert_eq!(essay_type_label("sonnet"), "Essay");
    }

    #[test]
    fn test_body_paragraph_count() {
        // ceil(600/200) = 3 paragraphs, minus intro and conclusion
        assert_eq!(body_count(&render_draft(&request("Climate Policy", "600", "mla"))), 1);
        assert_eq!(body_count(&render_draft(&request("T", "1000", "mla"))), 3);
        assert_eq!(body_count(&render_draft(&request("T", "1500", "mla"))), 6);
    }

    #[test]
    fn test_short_lengths_do_not_underflow() {
        assert_eq!(body_count(&render_draft(&request("T", "100", "mla"))), 0);
        assert_eq!(body_count(&render_draft(&request("T", "0", "mla"))), 0);
        assert_eq!(body_count(&render_draft(&request("T", "not a number", "mla"))), 0);
    }

    #[test]
    fn test_references_follow_citation_style() {
        let with = render_draft(&request("T", "600", "mla"));
        assert!(with.contains("<h3>References</h3>"));
        assert_eq!(with.matches("<p>Smith, J.").count() + with.matches("<p>Johnson, A.").count(), 2);

        let without = render_draft(&request("T", "600", "none"));
        assert!(!without.contains("References"));
    }

    #[test]
    fn test_topic_appears_in_heading_and_prose() {
        let html = render_draft(&request("Climate Policy", "600", "mla"));
        assert!(html.starts_with("<h1>Climate Policy</h1>"));
        assert!(html.contains("the topic of \"Climate Policy\""));
        assert!(html.contains("This argumentative essay explores"));
    }
}
