use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::constants::PLACEHOLDER_MARKER;

use super::theme::Theme;

/// Convert a rendered fragment into styled ratatui lines.
///
/// The template engine emits a small, known tag subset (headings,
/// paragraphs, emphasis, container divs), so a hand-rolled scan with a
/// style stack covers it; anything unrecognized renders as plain text.
pub fn html_to_lines(html: &str, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut style_stack = vec![Style::default().fg(theme.text_primary)];

    let mut rest = html;
    while !rest.is_empty() {
        if let Some(open) = rest.find('<') {
            if open > 0 {
                push_text(&rest[..open], &mut lines, &mut current, &style_stack);
            }
            let Some(close) = rest[open..].find('>') else {
                // Unterminated tag: treat the remainder as text
                push_text(&rest[open..], &mut lines, &mut current, &style_stack);
                break;
            };
            let tag = &rest[open + 1..open + close];
            handle_tag(tag, theme, &mut lines, &mut current, &mut style_stack);
            rest = &rest[open + close + 1..];
        } else {
            push_text(rest, &mut lines, &mut current, &style_stack);
            break;
        }
    }

    flush(&mut lines, &mut current);
    lines
}

fn handle_tag(
    tag: &str,
    theme: &Theme,
    lines: &mut Vec<Line<'static>>,
    current: &mut Vec<Span<'static>>,
    style_stack: &mut Vec<Style>,
) {
    let closing = tag.starts_with('/');
    let name = tag
        .trim_start_matches('/')
        .split_whitespace()
        .next()
        .unwrap_or("");

    if closing {
        // Block-level closers end the current line
        if matches!(name, "h1" | "h2" | "h3" | "h4" | "p" | "div") {
            flush(lines, current);
        }
        if style_stack.len() > 1 {
            style_stack.pop();
        }
        return;
    }

    // Void tag: breaks the line, pushes nothing to pop later
    if name == "br" {
        break_line(lines, current);
        return;
    }

    let base = *style_stack.last().expect("style stack is never empty");
    let style = match name {
        "h1" => {
            flush(lines, current);
            Style::default()
                .fg(theme.heading_primary)
                .add_modifier(Modifier::BOLD)
        }
        "h2" => {
            flush(lines, current);
            Style::default()
                .fg(theme.heading_secondary)
                .add_modifier(Modifier::BOLD)
        }
        "h3" => {
            flush(lines, current);
            Style::default()
                .fg(theme.heading_tertiary)
                .add_modifier(Modifier::BOLD)
        }
        "h4" => {
            flush(lines, current);
            Style::default()
                .fg(theme.text_highlight)
                .add_modifier(Modifier::BOLD)
        }
        "p" => base,
        "em" => base.add_modifier(Modifier::ITALIC),
        "strong" => base.add_modifier(Modifier::BOLD),
        "div" if tag.contains(PLACEHOLDER_MARKER) => Style::default()
            .fg(theme.text_disabled)
            .add_modifier(Modifier::ITALIC),
        _ => base,
    };
    style_stack.push(style);
}

fn push_text(
    text: &str,
    lines: &mut Vec<Line<'static>>,
    current: &mut Vec<Span<'static>>,
    style_stack: &[Style],
) {
    let style = *style_stack.last().expect("style stack is never empty");
    let mut pieces = text.split('\n');

    if let Some(first) = pieces.next() {
        if !first.is_empty() {
            current.push(Span::styled(first.to_string(), style));
        }
    }
    for piece in pieces {
        break_line(lines, current);
        if !piece.is_empty() {
            current.push(Span::styled(piece.to_string(), style));
        }
    }
}

/// End the current line; consecutive blank lines collapse into one.
fn break_line(lines: &mut Vec<Line<'static>>, current: &mut Vec<Span<'static>>) {
    if current.is_empty() {
        if !matches!(lines.last(), Some(line) if line.spans.is_empty()) {
            lines.push(Line::default());
        }
    } else {
        lines.push(Line::from(std::mem::take(current)));
    }
}

fn flush(lines: &mut Vec<Line<'static>>, current: &mut Vec<Span<'static>>) {
    if !current.is_empty() {
        lines.push(Line::from(std::mem::take(current)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect()
    }

    #[test]
    fn test_heading_and_paragraph() {
        let lines = html_to_lines("<h1>Topic</h1>\n\n<p>Body text.</p>\n", &Theme::dark());
        let text = text_of(&lines);
        assert!(text.contains(&"Topic".to_string()));
        assert!(text.contains(&"Body text.".to_string()));
    }

    #[test]
    fn test_heading_is_bold() {
        let lines = html_to_lines("<h1>Topic</h1>", &Theme::dark());
        let span = &lines[0].spans[0];
        assert!(span.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_inline_emphasis_keeps_one_line() {
        let lines = html_to_lines("<p>One <em>two</em> three</p>", &Theme::dark());
        assert_eq!(text_of(&lines), vec!["One two three".to_string()]);
        assert!(lines[0].spans[1].style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn test_blank_lines_collapse() {
        let lines = html_to_lines("<p>a</p>\n\n\n\n<p>b</p>", &Theme::dark());
        assert_eq!(text_of(&lines), vec!["a".to_string(), String::new(), "b".to_string()]);
    }

    #[test]
    fn test_unterminated_tag_degrades_to_text() {
        let lines = html_to_lines("before <oops", &Theme::dark());
        assert_eq!(text_of(&lines), vec!["before <oops".to_string()]);
    }
}
