//! Console and JSON rendering for CLI output

use crate::analysis::scorer::{ConfidenceLevel, IssueKind};
use crate::error::Result;
use crate::output::assembler::AnalysisResponse;
use colored::Colorize;
use std::fmt::Write;

pub fn format_json(response: &AnalysisResponse) -> Result<String> {
    Ok(serde_json::to_string_pretty(response)?)
}

pub fn format_console(response: &AnalysisResponse, color: bool) -> String {
    if !color {
        colored::control::set_override(false);
    }

    let mut out = String::new();
    let analysis = &response.data.ats_analysis;
    let ai = &response.data.ai_improvements;
    let summary = &response.data.summary;

    let _ = writeln!(out, "{}", "ATS Analysis".bold().underline());
    let _ = writeln!(
        out,
        "  Score: {} / 100  (potential: {})",
        colorize_score(analysis.ats_score),
        summary.potential_score
    );
    let _ = writeln!(
        out,
        "  Confidence: {}",
        match analysis.confidence_level {
            ConfidenceLevel::High => "high".green(),
            ConfidenceLevel::Medium => "medium".yellow(),
            ConfidenceLevel::Low => "low".red(),
        }
    );
    let _ = writeln!(out, "  {}", analysis.recommendation);

    if !analysis.issues.is_empty() {
        let _ = writeln!(out, "\n{}", "Issues".bold());
        for issue in &analysis.issues {
            let tag = match issue.kind {
                IssueKind::Error => "error".red(),
                IssueKind::Warning => "warning".yellow(),
            };
            let _ = writeln!(out, "  [{}] {} (severity {})", tag, issue.message, issue.severity);
            let _ = writeln!(out, "      fix: {}", issue.fix_suggestion);
        }
    }

    let _ = writeln!(out, "\n{}", "Keywords".bold());
    let _ = writeln!(out, "  Matched: {}", join_or_dash(&analysis.matched_keywords));
    let _ = writeln!(out, "  Missing: {}", join_or_dash(&analysis.missing_keywords));

    let fmt = &analysis.formatting;
    let _ = writeln!(out, "\n{}", "Formatting".bold());
    let _ = writeln!(out, "  Length: {}", fmt.length.feedback);
    let _ = writeln!(
        out,
        "  Structure: {} ({} bullet points)",
        fmt.structure.feedback, fmt.structure.bullet_points
    );
    let _ = writeln!(out, "  {}", fmt.readability.feedback);

    let _ = writeln!(out, "\n{}", "AI Suggestions".bold());
    if ai.source == crate::ai::AiSource::Fallback {
        let _ = writeln!(out, "  (default suggestions - no model output available)");
    }
    for bullet in &ai.improved_bullets {
        let _ = writeln!(out, "  > {}", bullet.improved);
        let _ = writeln!(out, "    {} (impact {})", bullet.reasoning, bullet.impact_score);
    }
    for tip in &ai.format_tips {
        let _ = writeln!(out, "  - {}", tip);
    }
    let _ = writeln!(
        out,
        "  Estimated improvement: +{} points",
        ai.estimated_improvement_score
    );

    let _ = writeln!(
        out,
        "\nProcessed in {}ms",
        response.metadata.processing_time_ms
    );

    out
}

fn colorize_score(score: u8) -> colored::ColoredString {
    let text = score.to_string();
    if score > 80 {
        text.green()
    } else if score > 60 {
        text.yellow()
    } else {
        text.red()
    }
}

fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::ResumeImprover;
    use crate::analysis::AtsScorer;
    use crate::output::assembler::{assemble, ParsedResumeInfo};
    use std::time::Instant;

    async fn sample_response() -> AnalysisResponse {
        let scorer = AtsScorer::new().unwrap();
        let improver = ResumeImprover::new(None);
        let score = scorer.score("short resume", "Software Engineer", "Acme", None);
        let ai = improver.improve("short resume", "Software Engineer", "Acme", None).await;
        let parsed = ParsedResumeInfo::from_text("r.txt", "text", "short resume");
        assemble(parsed, score, ai, Instant::now())
    }

    #[tokio::test]
    async fn test_console_output_mentions_score_and_issues() {
        let response = sample_response().await;
        let rendered = format_console(&response, false);
        assert!(rendered.contains("ATS Analysis"));
        assert!(rendered.contains("No email address found in resume"));
        assert!(rendered.contains("Estimated improvement"));
    }

    #[tokio::test]
    async fn test_json_output_is_valid() {
        let response = sample_response().await;
        let rendered = format_json(&response).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["success"], true);
    }
}
