//! Prompt templates for the generative model collaborator

pub const SYSTEM_PROMPT_IMPROVE: &str = "You are an expert resume writer and ATS optimization \
specialist. You respond ONLY with valid JSON, no prose and no markdown fences.";

const IMPROVE_RESUME_TEMPLATE: &str = r#"Rewrite the weakest bullet points of the resume below for the target role and return a JSON object with exactly these keys:
- improvedBullets: array of {original, improved, reasoning, impactScore (0-100)}
- missingKeywords: array of strings worth adding
- formatTips: array of short formatting suggestions
- estimatedImprovement: integer, expected ATS score gain

<RESUME>
{resume}
</RESUME>

Target role: {jobRole}
Target company: {company}
Keywords to work in naturally: {jobKeywords}"#;

const EXTRACT_KEYWORDS_TEMPLATE: &str = r#"You are an expert in extracting job requirements. Extract the top 10 most important keywords, skills, and phrases from this job description. Return ONLY a JSON array of strings, nothing else.

Job description:
{jobDescription}"#;

/// Render the resume-improvement prompt, system preamble included.
pub fn render_improve_prompt(
    resume: &str,
    job_role: &str,
    company: &str,
    job_keywords: &[String],
) -> String {
    let prompt = IMPROVE_RESUME_TEMPLATE
        .replace("{resume}", resume)
        .replace("{jobRole}", job_role)
        .replace("{company}", company)
        .replace("{jobKeywords}", &job_keywords.join(", "));

    format!("{}\n\n{}", SYSTEM_PROMPT_IMPROVE, prompt)
}

/// Render the job-description keyword extraction prompt.
pub fn render_extract_keywords_prompt(job_description: &str) -> String {
    EXTRACT_KEYWORDS_TEMPLATE.replace("{jobDescription}", job_description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_improve_prompt_substitution() {
        let prompt = render_improve_prompt(
            "Software Engineer with Python experience.",
            "Backend Engineer",
            "Acme",
            &["sql".to_string(), "docker".to_string()],
        );
        assert!(prompt.contains("Software Engineer with Python experience."));
        assert!(prompt.contains("Target role: Backend Engineer"));
        assert!(prompt.contains("sql, docker"));
        assert!(prompt.contains("improvedBullets"));
    }

    #[test]
    fn test_extract_keywords_prompt() {
        let prompt = render_extract_keywords_prompt("We need Rust and Kubernetes expertise.");
        assert!(prompt.contains("We need Rust and Kubernetes expertise."));
        assert!(prompt.contains("JSON array of strings"));
    }
}
