//! Best-effort AI resume improvement
//!
//! The generative call never blocks correctness: any failure (absent client,
//! network error, unparsable output) degrades to a documented fallback
//! payload. The result carries an explicit `source` discriminant so callers
//! can tell genuine model output from the default.

use crate::ai::client::{strip_json_fences, GenerativeModel};
use crate::ai::prompts;
use crate::analysis::keywords;
use log::warn;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Expected score gain reported when the model's output could not be parsed
/// or no client was configured.
const PARSE_FALLBACK_IMPROVEMENT: u8 = 15;
/// Expected score gain reported when the model call itself failed.
const CALL_FALLBACK_IMPROVEMENT: u8 = 10;

const DEFAULT_BULLET_REASONING: &str = "Improved for ATS compatibility";
const DEFAULT_IMPACT_SCORE: u8 = 75;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiSource {
    /// Payload came from the generative model.
    Generated,
    /// Payload is a documented default substituted after a failure.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovedBullet {
    pub original: String,
    pub improved: String,
    pub reasoning: String,
    pub impact_score: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToneAnalysis {
    pub current: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiImprovement {
    pub source: AiSource,
    pub improved_bullets: Vec<ImprovedBullet>,
    pub format_tips: Vec<String>,
    pub keyword_suggestions: Vec<String>,
    pub tone_analysis: ToneAnalysis,
    pub estimated_improvement_score: u8,
}

/// Raw shape the model is asked to produce; every field optional so a
/// partially valid response still normalizes instead of failing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawImprovement {
    #[serde(default)]
    improved_bullets: Vec<RawBullet>,
    format_tips: Option<Vec<String>>,
    missing_keywords: Option<Vec<String>>,
    estimated_improvement: Option<u8>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBullet {
    original: Option<String>,
    improved: Option<String>,
    reasoning: Option<String>,
    impact_score: Option<u8>,
}

pub struct ResumeImprover {
    model: Option<Arc<dyn GenerativeModel>>,
}

impl ResumeImprover {
    /// The model is an injected capability; pass `None` to run fully offline
    /// with fallback payloads.
    pub fn new(model: Option<Arc<dyn GenerativeModel>>) -> Self {
        Self { model }
    }

    /// Produce improvement suggestions for a resume. Infallible by contract:
    /// every failure path yields a fixed fallback payload.
    pub async fn improve(
        &self,
        resume_text: &str,
        job_role: &str,
        company: &str,
        job_description: Option<&str>,
    ) -> AiImprovement {
        // With a job description we ask the model for its keywords; without
        // one the static role table is the (simpler) source.
        let job_keywords = match job_description.filter(|jd| !jd.trim().is_empty()) {
            Some(jd) => self.extract_job_keywords(jd).await,
            None => keywords::role_keywords(job_role),
        };

        let model = match &self.model {
            Some(model) => model,
            None => {
                warn!("no generative model configured; using fallback improvement payload");
                return absent_model_fallback(&job_keywords);
            }
        };

        let prompt = prompts::render_improve_prompt(resume_text, job_role, company, &job_keywords);

        let content = match model.generate(&prompt).await {
            Ok(content) => content,
            Err(e) => {
                warn!("improvement call failed: {}", e);
                return call_fallback(job_role);
            }
        };

        match serde_json::from_str::<RawImprovement>(strip_json_fences(&content)) {
            Ok(raw) => normalize(raw, &job_keywords),
            Err(e) => {
                warn!("could not parse improvement response: {}", e);
                parse_fallback(&job_keywords)
            }
        }
    }

    /// Ask the model for the top keywords of a job description. Returns an
    /// empty list on any failure; the caller's prompt degrades gracefully.
    pub async fn extract_job_keywords(&self, job_description: &str) -> Vec<String> {
        let model = match &self.model {
            Some(model) => model,
            None => return Vec::new(),
        };

        let prompt = prompts::render_extract_keywords_prompt(job_description);
        let content = match model.generate(&prompt).await {
            Ok(content) => content,
            Err(e) => {
                warn!("keyword extraction call failed: {}", e);
                return Vec::new();
            }
        };

        parse_keyword_array(&content)
    }
}

/// Pull the first JSON array out of free text and keep its string members.
fn parse_keyword_array(content: &str) -> Vec<String> {
    let content = strip_json_fences(content);
    let slice = match (content.find('['), content.rfind(']')) {
        (Some(start), Some(end)) if start < end => &content[start..=end],
        _ => return Vec::new(),
    };

    match serde_json::from_str::<Vec<serde_json::Value>>(slice) {
        Ok(values) => values
            .into_iter()
            .filter_map(|v| v.as_str().map(|s| s.to_string()))
            .collect(),
        Err(_) => Vec::new(),
    }
}

fn normalize(raw: RawImprovement, job_keywords: &[String]) -> AiImprovement {
    AiImprovement {
        source: AiSource::Generated,
        improved_bullets: raw
            .improved_bullets
            .into_iter()
            .map(|b| ImprovedBullet {
                original: b.original.unwrap_or_default(),
                improved: b.improved.unwrap_or_default(),
                reasoning: b.reasoning.unwrap_or_else(|| DEFAULT_BULLET_REASONING.to_string()),
                impact_score: b.impact_score.unwrap_or(DEFAULT_IMPACT_SCORE),
            })
            .collect(),
        format_tips: raw.format_tips.unwrap_or_else(|| {
            vec![
                "Use action verbs at the start of each bullet point".to_string(),
                "Add numbers to show quantifiable impact".to_string(),
                "Avoid tables, images, and special characters".to_string(),
                "Keep consistent formatting throughout".to_string(),
            ]
        }),
        keyword_suggestions: raw
            .missing_keywords
            .unwrap_or_else(|| job_keywords.iter().take(5).cloned().collect()),
        tone_analysis: ToneAnalysis {
            current: "mixed".to_string(),
            suggestion: "Use more active voice and specific metrics".to_string(),
        },
        estimated_improvement_score: raw
            .estimated_improvement
            .unwrap_or(PARSE_FALLBACK_IMPROVEMENT),
    }
}

/// Fallback when no client is configured: the same payload normalization
/// would produce for an empty model reply, tagged as a fallback.
fn absent_model_fallback(job_keywords: &[String]) -> AiImprovement {
    let empty = RawImprovement {
        improved_bullets: Vec::new(),
        format_tips: None,
        missing_keywords: None,
        estimated_improvement: None,
    };
    AiImprovement {
        source: AiSource::Fallback,
        ..normalize(empty, job_keywords)
    }
}

/// Fallback when the model answered but with unparsable output.
fn parse_fallback(job_keywords: &[String]) -> AiImprovement {
    AiImprovement {
        source: AiSource::Fallback,
        improved_bullets: vec![ImprovedBullet {
            original: String::new(),
            improved: "Increased system efficiency by 25% through optimization".to_string(),
            reasoning: "Added metrics and quantification".to_string(),
            impact_score: 85,
        }],
        format_tips: vec![
            "Start each bullet with a strong action verb".to_string(),
            "Include specific metrics and percentages".to_string(),
            "Keep bullet points to 1-2 lines".to_string(),
        ],
        keyword_suggestions: job_keywords.iter().take(5).cloned().collect(),
        tone_analysis: ToneAnalysis {
            current: "mixed".to_string(),
            suggestion: "Use more active voice and specific metrics".to_string(),
        },
        estimated_improvement_score: PARSE_FALLBACK_IMPROVEMENT,
    }
}

/// Fallback when the model call failed outright.
fn call_fallback(job_role: &str) -> AiImprovement {
    AiImprovement {
        source: AiSource::Fallback,
        improved_bullets: vec![ImprovedBullet {
            original: String::new(),
            improved: "Increased efficiency and delivered results on time".to_string(),
            reasoning: "Added specificity and action-oriented language".to_string(),
            impact_score: 70,
        }],
        format_tips: vec![
            "Start bullet points with strong action verbs".to_string(),
            "Add quantifiable metrics (%, $, numbers)".to_string(),
            "Avoid tables, icons, and special characters".to_string(),
            "Keep one idea per bullet point".to_string(),
        ],
        keyword_suggestions: keywords::role_ats_keywords(job_role)
            .into_iter()
            .take(8)
            .collect(),
        tone_analysis: ToneAnalysis {
            current: "mixed".to_string(),
            suggestion: "Use active voice and specific achievements".to_string(),
        },
        estimated_improvement_score: CALL_FALLBACK_IMPROVEMENT,
    }
}
