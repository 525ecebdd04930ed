use once_cell::sync::Lazy;
use regex::Regex;

static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("valid paragraph pattern"));

/// Word, character and paragraph counts for the draft region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DraftStats {
    pub words: usize,
    pub chars: usize,
    pub paragraphs: usize,
}

/// Count words, characters and paragraphs in the draft's plain text.
///
/// Words split on whitespace runs; characters include whitespace;
/// paragraphs are the non-blank blocks separated by a blank line.
pub fn compute_stats(text: &str) -> DraftStats {
    let words = if text.trim().is_empty() {
        0
    } else {
        text.split_whitespace().count()
    };

    let paragraphs = PARAGRAPH_BREAK
        .split(text)
        .filter(|block| !block.trim().is_empty())
        .count();

    DraftStats {
        words,
        chars: text.chars().count(),
        paragraphs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_zero() {
        assert_eq!(compute_stats(""), DraftStats::default());
        assert_eq!(compute_stats("   \n  "), DraftStats { words: 0, chars: 6, paragraphs: 0 });
    }

    #[test]
    fn test_counts() {
        let text = "one two\n\nthree";
        let stats = compute_stats(text);
        assert_eq!(stats.words, 3);
        assert_eq!(stats.chars, text.len());
        assert_eq!(stats.paragraphs, 2);
    }

    #[test]
    fn test_blank_lines_with_spaces_still_split() {
        let stats = compute_stats("alpha\n   \nbeta\n\n\ngamma");
        assert_eq!(stats.paragraphs, 3);
    }
}
