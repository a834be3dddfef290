//! Deterministic ATS heuristic scorer
//!
//! Computes a 0-100 compatibility score plus a structured issue list from
//! resume text, target role, company, and an optional job description. The
//! scorer is a pure function of its inputs: no network, no hidden state, and
//! it never fails on well-formed strings. An empty resume simply scores low
//! with an issue for every missing signal.

use crate::analysis::keywords;
use crate::analysis::patterns::Patterns;
use crate::analysis::rules::{self, adjustments};
use crate::error::Result;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Error,
    Warning,
}

/// A single finding. Severity runs 1 (cosmetic) to 5 (blocks screening).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub message: String,
    pub severity: u8,
    pub fix_suggestion: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LengthReport {
    pub pages: usize,
    pub words: usize,
    pub optimal: bool,
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureReport {
    pub has_header: bool,
    pub has_sections: bool,
    pub bullet_points: usize,
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityReport {
    pub complex_words: usize,
    pub avg_word_length: f64,
    pub optimal: bool,
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattingReport {
    pub length: LengthReport,
    pub structure: StructureReport,
    pub readability: ReadabilityReport,
}

/// Result of one scoring pass. Immutable once returned; issue order is
/// detection order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub ats_score: u8,
    pub issues: Vec<Issue>,
    pub missing_keywords: Vec<String>,
    pub matched_keywords: Vec<String>,
    pub formatting: FormattingReport,
    pub recommendation: String,
    pub confidence_level: ConfidenceLevel,
}

pub struct AtsScorer {
    patterns: Patterns,
}

impl AtsScorer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            patterns: Patterns::new()?,
        })
    }

    /// Score a resume against the heuristic rule table. All adjustments are
    /// applied to a signed running score and clamped to [0, 100] only at the
    /// end of the pass, so intermediate values may leave that range.
    pub fn score(
        &self,
        resume_text: &str,
        job_role: &str,
        company: &str,
        job_description: Option<&str>,
    ) -> ScoreResult {
        if job_description.is_some() {
            // The deterministic pass scores against the static tables; the
            // job description feeds the AI keyword-extraction path instead.
            debug!("job description present; ignored by heuristic scorer");
        }

        let mut issues = Vec::new();
        let mut score: i32 = rules::BASE_SCORE;
        let lower_resume = resume_text.to_lowercase();

        // Length
        let word_count = resume_text.split_whitespace().count();
        if word_count < rules::MIN_WORDS {
            issues.push(Issue {
                kind: IssueKind::Error,
                message: "Resume too short - may lack detail needed by ATS".to_string(),
                severity: 3,
                fix_suggestion: "Add more descriptions and achievements".to_string(),
            });
            score += adjustments::TOO_SHORT;
        }
        if word_count > rules::MAX_WORDS {
            issues.push(Issue {
                kind: IssueKind::Warning,
                message: format!("Resume is {} words - exceeds optimal 1-2 page length", word_count),
                severity: 2,
                fix_suggestion: "Reduce content to 1-1.5 pages".to_string(),
            });
            score += adjustments::TOO_LONG;
        }

        // Section structure
        let found_sections: Vec<&str> = rules::REQUIRED_SECTIONS
            .iter()
            .copied()
            .filter(|section| lower_resume.contains(section))
            .collect();
        if found_sections.len() < rules::REQUIRED_SECTIONS.len() {
            let missing: Vec<&str> = rules::REQUIRED_SECTIONS
                .iter()
                .copied()
                .filter(|section| !found_sections.contains(section))
                .collect();
            issues.push(Issue {
                kind: IssueKind::Error,
                message: format!("Missing key sections: {}", missing.join(", ")),
                severity: 4,
                fix_suggestion: "Add missing sections: Experience, Education, Skills".to_string(),
            });
            score += adjustments::MISSING_SECTIONS;
        }

        // Contact information
        if !self.patterns.has_email(resume_text) {
            issues.push(Issue {
                kind: IssueKind::Error,
                message: "No email address found in resume".to_string(),
                severity: 5,
                fix_suggestion: "Add your email address at the top of the resume".to_string(),
            });
            score += adjustments::NO_EMAIL;
        }
        if !self.patterns.has_phone(resume_text) {
            issues.push(Issue {
                kind: IssueKind::Error,
                message: "No phone number found in resume".to_string(),
                severity: 5,
                fix_suggestion: "Add your phone number in contact information".to_string(),
            });
            score += adjustments::NO_PHONE;
        }

        // Keywords: partition the full pool in table order
        let pool = keywords::keyword_pool(job_role, company);
        let mut matched_keywords = Vec::new();
        let mut missing_keywords = Vec::new();
        for keyword in pool {
            if lower_resume.contains(&keyword.to_lowercase()) {
                matched_keywords.push(keyword);
            } else {
                missing_keywords.push(keyword);
            }
        }
        if matched_keywords.len() < rules::MIN_KEYWORD_MATCHES {
            let suggestions: Vec<&str> = missing_keywords.iter().take(5).map(|s| s.as_str()).collect();
            issues.push(Issue {
                kind: IssueKind::Warning,
                message: format!("Only {} key job-related keywords found", matched_keywords.len()),
                severity: 4,
                fix_suggestion: format!("Add more keywords: {}", suggestions.join(", ")),
            });
            score += adjustments::FEW_KEYWORDS;
        } else {
            score += matched_keywords.len() as i32 * adjustments::PER_KEYWORD_MATCH;
        }

        // Action verbs
        let has_action_verbs = rules::ACTION_VERBS
            .iter()
            .any(|verb| lower_resume.contains(verb));
        if has_action_verbs {
            score += adjustments::ACTION_VERBS;
        } else {
            issues.push(Issue {
                kind: IssueKind::Warning,
                message: "No strong action verbs detected in resume".to_string(),
                severity: 3,
                fix_suggestion: "Start bullet points with action verbs: Led, Developed, Implemented, etc."
                    .to_string(),
            });
            score += adjustments::NO_ACTION_VERBS;
        }

        // Quantified achievements
        if self.patterns.has_metrics(resume_text) {
            score += adjustments::METRICS;
        } else {
            issues.push(Issue {
                kind: IssueKind::Warning,
                message: "No quantified achievements found (metrics, percentages, numbers)".to_string(),
                severity: 4,
                fix_suggestion: "Add specific metrics: '30% improvement', '$100K saved', etc.".to_string(),
            });
            score += adjustments::NO_METRICS;
        }

        // Single clamp at the end of the pass
        let final_score = score.clamp(0, 100) as u8;

        let formatting = self.build_formatting_report(
            resume_text,
            word_count,
            found_sections.len(),
        );

        let recommendation = recommendation_for(final_score, &missing_keywords);
        let confidence_level = confidence_for(final_score);

        matched_keywords.truncate(rules::KEYWORD_OUTPUT_CAP);
        missing_keywords.truncate(rules::KEYWORD_OUTPUT_CAP);

        ScoreResult {
            ats_score: final_score,
            issues,
            missing_keywords,
            matched_keywords,
            formatting,
            recommendation,
            confidence_level,
        }
    }

    fn build_formatting_report(
        &self,
        resume_text: &str,
        word_count: usize,
        sections_found: usize,
    ) -> FormattingReport {
        let pages = word_count.div_ceil(rules::WORDS_PER_PAGE);
        let length_optimal = (rules::MIN_WORDS..=rules::MAX_WORDS).contains(&word_count);
        let length_verdict = if word_count < rules::MIN_WORDS {
            "too short"
        } else if word_count > rules::MAX_WORDS {
            "too long"
        } else {
            "optimal"
        };

        let has_header = resume_text
            .lines()
            .find(|line| !line.trim().is_empty())
            .map(|line| line.len() > rules::NAME_MIN_LEN && line.len() < rules::NAME_MAX_LEN)
            .unwrap_or(false);

        let bullet_points = resume_text
            .lines()
            .filter(|line| {
                let mut chars = line.trim_start().chars();
                matches!(
                    (chars.next(), chars.next()),
                    (Some(glyph), Some(next))
                        if rules::BULLET_GLYPHS.contains(&glyph) && next.is_whitespace()
                )
            })
            .count();

        let complex_words = self.patterns.complex_word_count(resume_text);
        let avg_word_length = if word_count == 0 {
            0.0
        } else {
            let total_chars: usize = resume_text
                .split_whitespace()
                .map(|word| word.chars().count())
                .sum();
            total_chars as f64 / word_count as f64
        };
        let readability_optimal =
            (complex_words as f64) < word_count as f64 * rules::COMPLEX_WORD_RATIO;

        FormattingReport {
            length: LengthReport {
                pages,
                words: word_count,
                optimal: length_optimal,
                feedback: format!("{} words ({} pages) - {}", word_count, pages, length_verdict),
            },
            structure: StructureReport {
                has_header,
                has_sections: sections_found >= rules::REQUIRED_SECTIONS.len(),
                bullet_points,
                feedback: format!(
                    "{}/{} required sections found",
                    sections_found,
                    rules::REQUIRED_SECTIONS.len()
                ),
            },
            readability: ReadabilityReport {
                complex_words,
                avg_word_length,
                optimal: readability_optimal,
                feedback: format!(
                    "Readability: {}",
                    if readability_optimal { "Good" } else { "Could be improved" }
                ),
            },
        }
    }
}

/// Score-banded recommendation referencing up to 3 missing keywords.
fn recommendation_for(score: u8, missing_keywords: &[String]) -> String {
    let top_missing: Vec<&str> = missing_keywords.iter().take(3).map(|s| s.as_str()).collect();
    if score >= 80 {
        format!(
            "Great! Your resume scores {}/100. Focus on adding more keywords: {}",
            score,
            top_missing.join(", ")
        )
    } else if score >= 60 {
        format!(
            "Good foundation! Your resume scores {}/100. Address issues above and add: {}",
            score,
            top_missing.join(", ")
        )
    } else {
        format!("Your resume needs attention ({}/100). Follow recommendations above", score)
    }
}

/// Thresholds are strict: exactly 80 is medium and exactly 60 is low.
fn confidence_for(score: u8) -> ConfidenceLevel {
    if score > 80 {
        ConfidenceLevel::High
    } else if score > 60 {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}
