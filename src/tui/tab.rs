use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// The four writing tools, one per tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tab {
    /// Essay drafting from a topic form
    Draft,
    /// Revision of a pasted essay
    Revise,
    /// Citation formatting
    Cite,
    /// Grammar and style checking
    Check,
}

impl Default for Tab {
    fn default() -> Self {
        Self::Draft
    }
}

impl Tab {
    pub fn all() -> [Tab; 4] {
        [Self::Draft, Self::Revise, Self::Cite, Self::Check]
    }

    /// Cycle to the next tab in the sequence
    pub fn cycle(&self) -> Self {
        match self {
            Self::Draft => Self::Revise,
            Self::Revise => Self::Cite,
            Self::Cite => Self::Check,
            Self::Check => Self::Draft,
        }
    }

    /// Cycle to the previous tab in the sequence
    pub fn cycle_reverse(&self) -> Self {
        match self {
            Self::Draft => Self::Check,
            Self::Check => Self::Cite,
            Self::Cite => Self::Revise,
            Self::Revise => Self::Draft,
        }
    }

    /// Get the display name for the tab
    pub fn display_name(&self) -> &str {
        match self {
            Self::Draft => "Essay Writer",
            Self::Revise => "Essay Improver",
            Self::Cite => "Citation Helper",
            Self::Check => "Grammar Checker",
        }
    }

    /// Get the color associated with this tab for visual indicators
    pub fn color(&self) -> Color {
        match self {
            Self::Draft => Color::Cyan,
            Self::Revise => Color::Green,
            Self::Cite => Color::Yellow,
            Self::Check => Color::Magenta,
        }
    }

    /// Message shown on the loading overlay while this tool "works"
    pub fn loading_message(&self) -> &str {
        match self {
            Self::Draft => "Generating your essay...",
            Self::Revise => "Improving your essay...",
            Self::Cite => "Generating citation...",
            Self::Check => "Checking grammar and style...",
        }
    }

    /// Error shown when required inputs are missing
    pub fn validation_message(&self) -> &str {
        match self {
            Self::Draft => "Please enter an essay topic",
            Self::Revise => "Please paste an essay to improve",
            Self::Cite => "Please enter at least the title and author",
            Self::Check => "Please paste text to check",
        }
    }

    /// Error shown when the backend fails
    pub fn failure_message(&self) -> &str {
        match self {
            Self::Draft => "Failed to generate essay. Please try again.",
            Self::Revise => "Failed to improve essay. Please try again.",
            Self::Cite => "Failed to generate citation. Please try again.",
            Self::Check => "Failed to check grammar. Please try again.",
        }
    }

    /// Message inside this tab's empty display region
    pub fn placeholder_message(&self) -> &str {
        match self {
            Self::Draft => "Your essay will appear here after generation",
            Self::Revise => "Your improved essay will appear here",
            Self::Cite => "Your citations will appear here",
            Self::Check => "Grammar check results will appear here",
        }
    }

    /// Icon name used in the placeholder markup
    pub fn placeholder_icon(&self) -> &str {
        match self {
            Self::Draft | Self::Revise => "file-alt",
            Self::Cite => "quote-left",
            Self::Check => "check-circle",
        }
    }

    /// Parse tab from string (for config files)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draft" | "write" | "essay-writer" => Some(Self::Draft),
            "revise" | "improve" | "essay-improver" => Some(Self::Revise),
            "cite" | "citations" | "citation-helper" => Some(Self::Cite),
            "check" | "grammar" | "grammar-checker" => Some(Self::Check),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycling() {
        let mut tab = Tab::Draft;

        tab = tab.cycle();
        assert_eq!(tab, Tab::Revise);

        tab = tab.cycle();
        assert_eq!(tab, Tab::Cite);

        tab = tab.cycle();
        assert_eq!(tab, Tab::Check);

        tab = tab.cycle();
        assert_eq!(tab, Tab::Draft);
    }

    #[test]
    fn test_tab_cycling_reverse() {
        let mut tab = Tab::Draft;

        tab = tab.cycle_reverse();
        assert_eq!(tab, Tab::Check);

        tab = tab.cycle_reverse();
        assert_eq!(tab, Tab::Cite);

        tab = tab.cycle_reverse();
        assert_eq!(tab, Tab::Revise);

        tab = tab.cycle_reverse();
        assert_eq!(tab, Tab::Draft);
    }

    #[test]
    fn test_initial_tab_is_draft() {
        assert_eq!(Tab::default(), Tab::Draft);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Tab::from_str("draft"), Some(Tab::Draft));
        assert_eq!(Tab::from_str("essay-improver"), Some(Tab::Revise));
        assert_eq!(Tab::from_str("CITE"), Some(Tab::Cite));
        assert_eq!(Tab::from_str("invalid"), None);
    }

    #[test]
    fn test_placeholder_varies_by_tab() {
        assert_ne!(Tab::Draft.placeholder_message(), Tab::Cite.placeholder_message());
        assert_eq!(Tab::Cite.placeholder_icon(), "quote-left");
    }
}
