// Gateway module for compose - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod checker;
mod citation;
mod draft;
mod revision;
mod stats;
mod types;

// Public re-exports - the ONLY way to access compose functionality
pub use checker::render_check;
pub use citation::render_citation;
pub use draft::{essay_type_label, render_draft};
pub use revision::{focus_summary, render_revision};
pub use stats::{compute_stats, DraftStats};
pub use types::{CheckOptions, CheckRequest, CitationRequest, DraftRequest, RevisionRequest};
