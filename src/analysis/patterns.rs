//! Named regex predicates for contact and achievement detection
//!
//! Each check the scorer performs against raw text lives here as an
//! independently testable predicate, so boundary cases (international phone
//! formats, edge-of-threshold word counts) can be pinned down in isolation.

use crate::error::{Result, ResumeAtsError};
use regex::Regex;

pub struct Patterns {
    email: Regex,
    phone: Regex,
    metrics: Regex,
    complex_word: Regex,
}

impl Patterns {
    pub fn new() -> Result<Self> {
        Ok(Self {
            email: compile(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")?,
            phone: compile(r"(\+\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}")?,
            metrics: compile(
                r"(?i)\d+%|\$\d+|increased by \d+|reduced by \d+|\d+ (users|customers|team|projects)",
            )?,
            complex_word: compile(r"\b\w{12,}\b")?,
        })
    }

    /// True if the text contains something shaped like an email address.
    pub fn has_email(&self, text: &str) -> bool {
        self.email.is_match(text)
    }

    /// True if the text contains a phone number in a common separator or
    /// country-code form.
    pub fn has_phone(&self, text: &str) -> bool {
        self.phone.is_match(text)
    }

    /// True if the text quantifies anything: percentages, dollar amounts,
    /// "increased/reduced by N", or "N users/customers/team/projects".
    pub fn has_metrics(&self, text: &str) -> bool {
        self.metrics.is_match(text)
    }

    /// Number of words long enough to hurt readability.
    pub fn complex_word_count(&self, text: &str) -> usize {
        self.complex_word.find_iter(text).count()
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| ResumeAtsError::TextProcessing(format!("Invalid pattern '{}': {}", pattern, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> Patterns {
        Patterns::new().unwrap()
    }

    #[test]
    fn test_email_detection() {
        let p = patterns();
        assert!(p.has_email("Contact: jane.doe+work@example.co.uk"));
        assert!(p.has_email("a_b%c@sub.domain.org"));
        assert!(!p.has_email("jane.doe at example dot com"));
        assert!(!p.has_email("no contact info here"));
    }

    #[test]
    fn test_phone_detection() {
        let p = patterns();
        assert!(p.has_phone("Call me at 555-123-4567"));
        assert!(p.has_phone("(555) 123 4567"));
        assert!(p.has_phone("+1 555.123.4567"));
        assert!(p.has_phone("+44-555-123-4567"));
        assert!(!p.has_phone("extension 12"));
    }

    #[test]
    fn test_metrics_detection() {
        let p = patterns();
        assert!(p.has_metrics("Improved throughput by 30%"));
        assert!(p.has_metrics("Saved $100K annually"));
        assert!(p.has_metrics("increased by 12 points"));
        assert!(p.has_metrics("Reduced by 4 the average latency"));
        assert!(p.has_metrics("Supported 2000 users across regions"));
        assert!(p.has_metrics("Mentored a 5 team rotation"));
        assert!(!p.has_metrics("Delivered significant improvements"));
    }

    #[test]
    fn test_complex_word_count() {
        let p = patterns();
        // "architectures" and "infrastructure" are >= 12 chars, "deployment" is not
        assert_eq!(p.complex_word_count("architectures infrastructure deployment"), 2);
        assert_eq!(p.complex_word_count("short words only here"), 0);
    }
}
