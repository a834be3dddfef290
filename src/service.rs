//! Analysis service: one scoring pass plus best-effort AI improvement
//!
//! The composition point the CLI and the HTTP surface share. All
//! collaborators are injected at construction; the service holds no mutable
//! state and each call is independent.

use crate::ai::{GenerativeModel, ResumeImprover};
use crate::analysis::AtsScorer;
use crate::error::Result;
use crate::output::assembler::{assemble, AnalysisResponse, ParsedResumeInfo};
use std::sync::Arc;
use std::time::Instant;

pub struct AnalysisService {
    scorer: AtsScorer,
    improver: ResumeImprover,
}

impl AnalysisService {
    pub fn new(model: Option<Arc<dyn GenerativeModel>>) -> Result<Self> {
        Ok(Self {
            scorer: AtsScorer::new()?,
            improver: ResumeImprover::new(model),
        })
    }

    /// Run the full pipeline over already-extracted resume text. The
    /// deterministic score always lands; the AI portion degrades to its
    /// fallback payload on any collaborator failure.
    pub async fn analyze(
        &self,
        resume_text: &str,
        job_role: &str,
        company: &str,
        job_description: Option<&str>,
        parsed_resume: ParsedResumeInfo,
    ) -> AnalysisResponse {
        let started = Instant::now();

        let ats_analysis = self
            .scorer
            .score(resume_text, job_role, company, job_description);

        let ai_improvements = self
            .improver
            .improve(resume_text, job_role, company, job_description)
            .await;

        assemble(parsed_resume, ats_analysis, ai_improvements, started)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::AiSource;

    #[tokio::test]
    async fn test_offline_analysis_end_to_end() {
        let service = AnalysisService::new(None).unwrap();
        let parsed = ParsedResumeInfo::from_text("resume.txt", "text", "short resume");
        let response = service
            .analyze("short resume", "Software Engineer", "Acme", None, parsed)
            .await;

        assert!(response.success);
        assert!(response.data.ats_analysis.ats_score <= 100);
        assert_eq!(response.data.ai_improvements.source, AiSource::Fallback);
    }
}
