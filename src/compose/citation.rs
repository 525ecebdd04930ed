use chrono::NaiveDate;

use super::types::CitationRequest;

/// Format a single citation line for a (style, source type) pair.
///
/// `today` is only used by MLA website citations ("Accessed ..."); it is
/// passed in rather than read from the clock so identical inputs always
/// produce identical output.
fn citation_line(req: &CitationRequest, today: NaiveDate) -> String {
    match (req.style.as_str(), req.source_type.as_str()) {
        ("mla", "book") => format!(
            "{}. <em>{}</em>. {}, {}.",
            req.author, req.title, req.publisher, req.year
        ),
        ("mla", "journal") => format!(
            "{}. \"{}.\" <em>Journal Name</em>, vol. 1, no. 1, {}, pp. 1-10.",
            req.author, req.title, req.year
        ),
        ("mla", "website") => format!(
            "{}. \"{}.\" <em>Website Name</em>, {}, {}. Accessed {}.",
            req.author,
            req.title,
            req.year,
            req.url,
            today.format("%-m/%-d/%Y")
        ),
        ("apa", "book") => format!(
            "{}. ({}). <em>{}</em>. {}.",
            req.author, req.year, req.title, req.publisher
        ),
        ("apa", "journal") => format!(
            "{}. ({}). {}. <em>Journal Name</em>, 1(1), 1-10.",
            req.author, req.year, req.title
        ),
        ("apa", "website") => format!(
            "{}. ({}). {}. <em>Website Name</em>. {}",
            req.author, req.year, req.title, req.url
        ),
        // Unknown pairs get a generic author/year/title line
        _ => format!("{}. ({}). {}.", req.author, req.year, req.title),
    }
}

/// Produce the display fragment for one citation.
pub fn render_citation(req: &CitationRequest, today: NaiveDate) -> String {
    format!(
        "<div class=\"citation-item\">\n<div class=\"citation-type\">{} - {}</div>\n{}\n</div>",
        req.style.to_uppercase(),
        req.source_type,
        citation_line(req, today)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn request(style: &str, source_type: &str) -> CitationRequest {
        CitationRequest {
            style: style.to_string(),
            source_type: source_type.to_string(),
            title: "On Systems".to_string(),
            author: "Doe, J.".to_string(),
            year: "2021".to_string(),
            url: "https://example.com".to_string(),
            publisher: "ACME Press".to_string(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    #[test]
    fn test_apa_book_exact() {
        assert_eq!(
            citation_line(&request("apa", "book"), today()),
            "Doe, J.. (2021). <em>On Systems</em>. ACME Press."
        );
    }

    #[test]
    fn test_mla_book_exact() {
        assert_eq!(
            citation_line(&request("mla", "book"), today()),
            "Doe, J.. <em>On Systems</em>. ACME Press, 2021."
        );
    }

    #[test]
    fn test_mla_journal_exact() {
        assert_eq!(
            citation_line(&request("mla", "journal"), today()),
            "Doe, J.. \"On Systems.\" <em>Journal Name</em>, vol. 1, no. 1, 2021, pp. 1-10."
        );
    }

    #[test]
    fn test_mla_website_has_access_date() {
        let line = citation_line(&request("mla", "website"), today());
        assert!(line.ends_with("Accessed 8/6/2026."));
    }

    #[test]
    fn test_apa_website_has_no_access_date() {
        let line = citation_line(&request("apa", "website"), today());
        assert!(!line.contains("Accessed"));
        assert!(line.ends_with("https://example.com"));
    }

    #[test]
    fn test_unknown_pair_falls_back() {
        assert_eq!(
            citation_line(&request("chicago", "book"), today()),
            "Doe, J.. (2021). On Systems."
        );
        assert_eq!(
            citation_line(&request("mla", "film"), today()),
            "Doe, J.. (2021). On Systems."
        );
    }

    #[test]
    fn test_render_is_pure() {
        let req = request("mla", "website");
        assert_eq!(render_citation(&req, today()), render_citation(&req, today()));
    }

    #[test]
    fn test_render_wraps_with_type_header() {
        let html = render_citation(&request("apa", "book"), today());
        assert!(html.contains("<div class=\"citation-type\">APA - book</div>"));
    }
}
