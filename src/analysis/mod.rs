//! Deterministic resume analysis
//! Rule tables, pattern predicates, keyword tables, the ATS scorer, and the
//! text position finder.

pub mod keywords;
pub mod patterns;
pub mod positions;
pub mod rules;
pub mod scorer;

pub use scorer::{AtsScorer, ScoreResult};
