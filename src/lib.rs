//! Resume ATS analyzer library

pub mod ai;
pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod server;
pub mod service;

pub use config::Config;
pub use error::{ResumeAtsError, Result};
pub use service::AnalysisService;
