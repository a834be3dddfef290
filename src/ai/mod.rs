//! Generative model collaborator
//! Client trait + remote implementation, prompt templates, and the
//! best-effort resume improvement flow with documented fallbacks.

pub mod client;
pub mod improve;
pub mod prompts;

pub use client::{GenerativeModel, GeminiClient};
pub use improve::{AiImprovement, AiSource, ResumeImprover};
