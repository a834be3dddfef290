//! Response assembler
//!
//! Merges the deterministic score with the AI improvement payload into the
//! single response body both the CLI and the HTTP surface return.

use crate::ai::AiImprovement;
use crate::analysis::ScoreResult;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Cap applied on top of the current score when estimating the ceiling a
/// revised resume could reach.
const POTENTIAL_SCORE_HEADROOM: u8 = 20;
const SUMMARY_TOP_N: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub current_score: u8,
    pub potential_score: u8,
    /// First issues in detection order, not severity-sorted.
    pub top_issues: Vec<String>,
    pub quick_wins: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedResumeInfo {
    pub file_name: String,
    pub file_type: String,
    pub words: usize,
    pub characters: usize,
}

impl ParsedResumeInfo {
    pub fn from_text(file_name: &str, file_type: &str, text: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            file_type: file_type.to_string(),
            words: text.split_whitespace().count(),
            characters: text.chars().count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisData {
    pub parsed_resume: ParsedResumeInfo,
    pub ats_analysis: ScoreResult,
    pub ai_improvements: AiImprovement,
    pub summary: AnalysisSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMetadata {
    pub processing_time_ms: u64,
    pub timestamp: String,
}

impl ResponseMetadata {
    pub fn since(started: Instant) -> Self {
        Self {
            processing_time_ms: started.elapsed().as_millis() as u64,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn empty() -> Self {
        Self {
            processing_time_ms: 0,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub success: bool,
    pub data: AnalysisData,
    pub metadata: ResponseMetadata,
}

/// Merge scorer output with the AI improvement into the final payload.
/// Malformed upstream data never surfaces here: the improver has already
/// substituted defaults for anything absent or mistyped.
pub fn assemble(
    parsed_resume: ParsedResumeInfo,
    ats_analysis: ScoreResult,
    ai_improvements: AiImprovement,
    started: Instant,
) -> AnalysisResponse {
    let potential_score = ats_analysis
        .ats_score
        .saturating_add(POTENTIAL_SCORE_HEADROOM)
        .min(100);

    let summary = AnalysisSummary {
        current_score: ats_analysis.ats_score,
        potential_score,
        top_issues: ats_analysis
            .issues
            .iter()
            .take(SUMMARY_TOP_N)
            .map(|issue| issue.message.clone())
            .collect(),
        quick_wins: ai_improvements
            .format_tips
            .iter()
            .take(SUMMARY_TOP_N)
            .cloned()
            .collect(),
    };

    AnalysisResponse {
        success: true,
        data: AnalysisData {
            parsed_resume,
            ats_analysis,
            ai_improvements,
            summary,
        },
        metadata: ResponseMetadata::since(started),
    }
}
