use serde::{Deserialize, Serialize};

/// Everything the drafting form knows about the essay to produce.
/// All fields arrive as raw form values; only `topic` is validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftRequest {
    pub essay_type: String,
    pub topic: String,
    pub target_length: String,
    pub academic_level: String,
    pub style: String,
    pub citation_style: String,
    pub key_points: String,
    pub sources: String,
    pub instructions: String,
}

/// A revision pass over an existing essay.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RevisionRequest {
    pub original_text: String,
    /// One of general, grammar, structure, academic, clarity, argument.
    /// Unrecognized values fall back to the general summary.
    pub focus: String,
}

/// A single source to format as a citation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CitationRequest {
    pub style: String,
    pub source_type: String,
    pub title: String,
    pub author: String,
    pub year: String,
    pub url: String,
    pub publisher: String,
}

/// Which classes of issues the checker should report.
/// Accepted for future backends; the template checker ignores them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CheckOptions {
    pub grammar: bool,
    pub spelling: bool,
    pub style: bool,
    pub punctuation: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            grammar: true,
            spelling: true,
            style: true,
            punctuation: true,
        }
    }
}

/// Text to run through the grammar/style checker.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckRequest {
    pub text: String,
    pub options: CheckOptions,
}
