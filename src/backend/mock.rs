use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Local;

use super::traits::Generator;
use crate::compose::{
    render_check, render_citation, render_draft, render_revision, CheckRequest, CitationRequest,
    DraftRequest, RevisionRequest,
};
use crate::constants::{
    CHECK_LATENCY_MS, CITATION_LATENCY_MS, DRAFT_LATENCY_MS, REVISION_LATENCY_MS,
};

/// Per-tool artificial delays, standing in for remote round-trip time.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorLatency {
    pub draft: Duration,
    pub revision: Duration,
    pub citation: Duration,
    pub check: Duration,
}

impl Default for GeneratorLatency {
    fn default() -> Self {
        Self {
            draft: Duration::from_millis(DRAFT_LATENCY_MS),
            revision: Duration::from_millis(REVISION_LATENCY_MS),
            citation: Duration::from_millis(CITATION_LATENCY_MS),
            check: Duration::from_millis(CHECK_LATENCY_MS),
        }
    }
}

impl GeneratorLatency {
    /// No artificial delay; used by tests and `simulate_latency = false`.
    pub fn none() -> Self {
        Self {
            draft: Duration::ZERO,
            revision: Duration::ZERO,
            citation: Duration::ZERO,
            check: Duration::ZERO,
        }
    }
}

/// The local template backend. Renders canned output after a configurable
/// pause so the UI exercises the same loading path a remote backend would.
pub struct TemplateGenerator {
    model_name: String,
    latency: GeneratorLatency,
}

impl TemplateGenerator {
    pub fn new(model_name: impl Into<String>, latency: GeneratorLatency) -> Self {
        Self {
            model_name: model_name.into(),
            latency,
        }
    }

    async fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}

#[async_trait]
impl Generator for TemplateGenerator {
    async fn draft(&self, req: &DraftRequest) -> Result<String> {
        self.pause(self.latency.draft).await;
        Ok(render_draft(req))
    }

    async fn revise(&self, req: &RevisionRequest) -> Result<String> {
        self.pause(self.latency.revision).await;
        Ok(render_revision(req))
    }

    async fn cite(&self, req: &CitationRequest) -> Result<String> {
        self.pause(self.latency.citation).await;
        Ok(render_citation(req, Local::now().date_naive()))
    }

    async fn check(&self, req: &CheckRequest) -> Result<String> {
        self.pause(self.latency.check).await;
        Ok(render_check(req))
    }

    fn name(&self) -> &str {
        &self.model_name
    }

    fn is_local(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> TemplateGenerator {
        TemplateGenerator::new("gpt-4", GeneratorLatency::none())
    }

    #[tokio::test]
    async fn test_draft_renders_template() {
        let req = DraftRequest {
            topic: "Test Topic".to_string(),
            target_length: "600".to_string(),
            citation_style: "mla".to_string(),
            ..DraftRequest::default()
        };
        let html = generator().draft(&req).await.unwrap();
        assert!(html.starts_with("<h1>Test Topic</h1>"));
    }

    #[tokio::test]
    async fn test_check_renders_findings() {
        let req = CheckRequest {
            text: "abc".to_string(),
            options: Default::default(),
        };
        let html = generator().check(&req).await.unwrap();
        assert!(html.contains("Grammar Check Results"));
    }

    #[test]
    fn test_identity() {
        let g = generator();
        assert_eq!(g.name(), "gpt-4");
        assert!(g.is_local());
    }
}
