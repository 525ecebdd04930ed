use super::types::CheckRequest;

struct Finding {
    kind: &'static str,
    original: &'static str,
    suggestion: &'static str,
    explanation: &'static str,
}

// The template checker reports the same three findings for any input; the
// request's options only matter to a future real backend.
const FINDINGS: &[Finding] = &[
    Finding {
        kind: "Grammar",
        original: "The students was studying.",
        suggestion: "The students were studying.",
        explanation: "Subject-verb agreement error. \"Students\" is plural, so use \"were\".",
    },
    Finding {
        kind: "Style",
        original: "very very important",
        suggestion: "extremely important",
        explanation: "Avoid repetition. Use a stronger adjective instead.",
    },
    Finding {
        kind: "Punctuation",
        original: "However the results show...",
        suggestion: "However, the results show...",
        explanation: "Add a comma after \"However\" when it begins a sentence.",
    },
];

/// Produce the check-results fragment: a character count followed by the
/// findings list.
pub fn render_check(req: &CheckRequest) -> String {
    let mut results = String::from("<h3>Grammar Check Results</h3>\n\n");
    results.push_str(&format!(
        "<p><strong>Text analyzed:</strong> {} characters</p>\n\n",
        req.text.chars().count()
    ));

    if FINDINGS.is_empty() {
        results.push_str("<p>No issues found! Your text looks good.</p>\n");
        return results;
    }

    results.push_str(&format!("<h4>Issues Found ({})</h4>\n\n", FINDINGS.len()));
    for finding in FINDINGS {
        results.push_str(&format!(
            "<div class=\"grammar-error\">\n\
             <div class=\"error-type\">{}</div>\n\
             <p><strong>Original:</strong> {}</p>\n\
             <div class=\"suggestion\"><strong>Suggestion:</strong> {}</div>\n\
             <p><em>{}</em></p>\n\
             </div>\n",
            finding.kind, finding.original, finding.suggestion, finding.explanation
        ));
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::CheckOptions;

    #[test]
    fn test_reports_character_count() {
        let req = CheckRequest {
            text: "Hello world".to_string(),
            options: CheckOptions::default(),
        };
        assert!(render_check(&req).contains("<strong>Text analyzed:</strong> 11 characters"));
    }

    #[test]
    fn test_always_three_findings() {
        let all = CheckRequest {
            text: "Some text.".to_string(),
            options: CheckOptions::default(),
        };
        let none = CheckRequest {
            text: "Some text.".to_string(),
            options: CheckOptions {
                grammar: false,
                spelling: false,
                style: false,
                punctuation: false,
            },
        };
        // Options are accepted but do not filter the template findings
        assert_eq!(render_check(&all).matches("grammar-error").count(), 3);
        assert_eq!(render_check(&none).matches("grammar-error").count(), 3);
        assert!(render_check(&all).contains("<h4>Issues Found (3)</h4>"));
    }

    #[test]
    fn test_finding_content() {
        let req = CheckRequest {
            text: "x".to_string(),
            options: CheckOptions::default(),
        };
        let html = render_check(&req);
        assert!(html.contains("The students were studying."));
        assert!(html.contains("extremely important"));
        assert!(html.contains("However, the results show..."));
    }
}
