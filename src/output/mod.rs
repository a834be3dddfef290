//! Response assembly and rendering

pub mod assembler;
pub mod formatter;

pub use assembler::{AnalysisData, AnalysisResponse, AnalysisSummary, ResponseMetadata};
