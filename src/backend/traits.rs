use anyhow::Result;
use async_trait::async_trait;

use crate::compose::{CheckRequest, CitationRequest, DraftRequest, RevisionRequest};

/// Core trait every generation backend must implement.
///
/// Today the only implementation renders fixed templates locally; the trait
/// is the seam where a real remote model would plug in, which is why every
/// method returns a Result even though the template backend cannot fail.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Generator: Send + Sync {
    /// Produce a full essay draft.
    async fn draft(&self, req: &DraftRequest) -> Result<String>;

    /// Produce a revision of an existing essay.
    async fn revise(&self, req: &RevisionRequest) -> Result<String>;

    /// Format a single citation.
    async fn cite(&self, req: &CitationRequest) -> Result<String>;

    /// Run a grammar/style check.
    async fn check(&self, req: &CheckRequest) -> Result<String>;

    /// Name of the model this backend presents as.
    fn name(&self) -> &str;

    /// Whether generation happens locally (no API calls).
    fn is_local(&self) -> bool;
}
