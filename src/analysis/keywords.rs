//! Static role and company keyword tables
//!
//! Lookups never fail: unknown roles fall back to a generic keyword list and
//! unknown companies yield an empty list. Order matters: the scorer
//! partitions the pool in table order and callers slice the first N entries.

/// Role-specific skill keywords.
pub fn role_keywords(role: &str) -> Vec<String> {
    let role = role.to_lowercase();

    let keywords: &[&str] = if role.contains("frontend") || role.contains("front-end") {
        &[
            "javascript", "typescript", "react", "css", "html", "responsive design",
            "webpack", "accessibility", "testing", "performance",
        ]
    } else if role.contains("backend") || role.contains("back-end") {
        &[
            "api", "rest", "sql", "postgresql", "microservices", "docker",
            "redis", "scalability", "python", "go",
        ]
    } else if role.contains("full stack") || role.contains("fullstack") {
        &[
            "javascript", "react", "node.js", "api", "sql", "docker",
            "rest", "typescript", "css", "testing",
        ]
    } else if role.contains("data scientist") || role.contains("data science") {
        &[
            "python", "machine learning", "sql", "statistics", "pandas",
            "tensorflow", "data visualization", "a/b testing", "modeling", "numpy",
        ]
    } else if role.contains("data engineer") {
        &[
            "python", "sql", "spark", "airflow", "etl", "kafka",
            "data pipeline", "warehouse", "aws", "scala",
        ]
    } else if role.contains("devops") || role.contains("sre") || role.contains("reliability") {
        &[
            "kubernetes", "docker", "terraform", "ci/cd", "aws", "monitoring",
            "linux", "ansible", "automation", "incident response",
        ]
    } else if role.contains("product manager") || role.contains("product management") {
        &[
            "roadmap", "stakeholder", "agile", "user research", "metrics",
            "prioritization", "a/b testing", "strategy", "analytics", "launch",
        ]
    } else if role.contains("mobile") || role.contains("ios") || role.contains("android") {
        &[
            "swift", "kotlin", "mobile", "app store", "ui", "rest",
            "push notifications", "offline", "performance", "testing",
        ]
    } else if role.contains("software") || role.contains("engineer") || role.contains("developer") {
        &[
            "software development", "git", "api", "testing", "debugging",
            "code review", "agile", "data structures", "algorithms", "sql",
        ]
    } else {
        // Generic professional keywords for roles we have no table for
        &[
            "leadership", "communication", "project management", "collaboration",
            "problem solving", "analysis", "strategy", "planning",
        ]
    };

    keywords.iter().map(|s| s.to_string()).collect()
}

/// ATS category keywords shared across technical roles; appended to the
/// role-specific list when building the scoring pool.
pub fn role_ats_keywords(role: &str) -> Vec<String> {
    let role = role.to_lowercase();

    let keywords: &[&str] = if role.contains("manager") || role.contains("management") {
        &["cross-functional", "okr", "kpi", "budget", "mentoring"]
    } else if role.contains("data") {
        &["big data", "etl", "dashboard", "reporting", "insights"]
    } else {
        &["agile", "scrum", "ci/cd", "cloud", "teamwork"]
    };

    keywords.iter().map(|s| s.to_string()).collect()
}

/// Keywords a specific company's screening is known to favor. Empty for
/// companies without a profile.
pub fn company_keywords(company: &str) -> Vec<String> {
    let company = company.to_lowercase();

    let keywords: &[&str] = if company.contains("google") {
        &["scale", "distributed systems", "innovation", "data-driven"]
    } else if company.contains("amazon") || company.contains("aws") {
        &["customer obsession", "ownership", "scale", "operational excellence"]
    } else if company.contains("microsoft") {
        &["azure", "enterprise", "collaboration", "growth mindset"]
    } else if company.contains("meta") || company.contains("facebook") {
        &["impact", "move fast", "scale", "experimentation"]
    } else if company.contains("apple") {
        &["design", "quality", "user experience", "attention to detail"]
    } else if company.contains("netflix") {
        &["streaming", "microservices", "freedom and responsibility", "scale"]
    } else {
        &[]
    };

    keywords.iter().map(|s| s.to_string()).collect()
}

/// Full candidate pool for a scoring pass: role ∪ ATS-category ∪ company
/// keywords, concatenated in that order. Duplicates are allowed and case is
/// preserved.
pub fn keyword_pool(role: &str, company: &str) -> Vec<String> {
    let mut pool = role_keywords(role);
    pool.extend(role_ats_keywords(role));
    pool.extend(company_keywords(company));
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_role_lookup() {
        let keywords = role_keywords("Senior Frontend Engineer");
        assert!(keywords.contains(&"react".to_string()));
        assert!(keywords.contains(&"css".to_string()));
    }

    #[test]
    fn test_unknown_role_falls_back_to_generic() {
        let keywords = role_keywords("Zookeeper");
        assert!(!keywords.is_empty());
        assert!(keywords.contains(&"communication".to_string()));
    }

    #[test]
    fn test_unknown_company_is_empty() {
        assert!(company_keywords("Tiny Startup LLC").is_empty());
    }

    #[test]
    fn test_pool_preserves_order_and_duplicates() {
        let pool = keyword_pool("Software Engineer", "Google");
        let role = role_keywords("Software Engineer");
        // Pool starts with the role table in order
        assert_eq!(&pool[..role.len()], &role[..]);
        // Company keywords land at the end
        assert!(pool.ends_with(&company_keywords("Google")[..]));
    }
}
