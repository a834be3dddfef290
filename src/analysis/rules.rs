//! ATS rule tables and scoring constants

/// Every scoring pass starts from this value before adjustments.
pub const BASE_SCORE: i32 = 100;

/// Word-count thresholds for the length check.
pub const MIN_WORDS: usize = 200;
pub const MAX_WORDS: usize = 1500;

/// Assumed words per printed page when estimating page count.
pub const WORDS_PER_PAGE: usize = 250;

/// Score adjustments, applied to a running signed score and clamped once at
/// the end of a pass. Keep the order of application in sync with the scorer.
pub mod adjustments {
    pub const TOO_SHORT: i32 = -10;
    pub const TOO_LONG: i32 = -15;
    pub const MISSING_SECTIONS: i32 = -20;
    pub const NO_EMAIL: i32 = -20;
    pub const NO_PHONE: i32 = -15;
    pub const FEW_KEYWORDS: i32 = -25;
    pub const PER_KEYWORD_MATCH: i32 = 2;
    pub const ACTION_VERBS: i32 = 10;
    pub const NO_ACTION_VERBS: i32 = -10;
    pub const METRICS: i32 = 15;
    pub const NO_METRICS: i32 = -15;
}

/// Minimum keyword matches before the per-match bonus applies.
pub const MIN_KEYWORD_MATCHES: usize = 5;

/// Matched/missing keyword lists are capped to this many entries in output.
pub const KEYWORD_OUTPUT_CAP: usize = 10;

/// Sections every ATS expects to find, matched case-insensitively.
pub const REQUIRED_SECTIONS: [&str; 3] = ["experience", "education", "skills"];

/// Strong action verbs; any case-insensitive hit counts.
pub const ACTION_VERBS: [&str; 12] = [
    "led",
    "developed",
    "implemented",
    "designed",
    "built",
    "optimized",
    "improved",
    "increased",
    "achieved",
    "delivered",
    "managed",
    "created",
];

/// Weak phrasings that should be replaced with stronger verbs.
pub const WEAK_VERBS: [&str; 5] = ["responsible for", "involved in", "helped", "worked on", "did"];

/// Glyphs that commonly break ATS text extraction: decorative bullets,
/// trademark/section symbols, and emoji.
pub const UNPARSABLE_GLYPHS: [char; 22] = [
    '®', '™', '©', '§', '¶', '†', '‡', '•', '★', '○', '●', '◐', '◑', '▲', '▼', '◄', '►', '✓',
    '✗', '❌', '🔥', '💡',
];

/// Line prefixes treated as bullet points in the formatting report.
pub const BULLET_GLYPHS: [char; 3] = ['-', '•', '*'];

/// Tokens at or above this length count as complex words.
pub const COMPLEX_WORD_LEN: usize = 12;

/// Readability is optimal while complex words stay under this share of all words.
pub const COMPLEX_WORD_RATIO: f64 = 0.1;

/// A first non-empty line in this length range is taken as the candidate name.
pub const NAME_MIN_LEN: usize = 5;
pub const NAME_MAX_LEN: usize = 50;
