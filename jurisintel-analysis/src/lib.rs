//! JurisIntel Analysis - Prompt handling, LLM access and response normalization
//!
//! This crate owns the analysis pipeline: it renders the externalized prompt
//! template for a research theme, sends it to a generative-AI provider and
//! normalizes the returned JSON into the typed analysis model.

pub mod client;
pub mod normalizer;
pub mod prompt;
pub mod service;

pub use client::{create_auto_client, AnalysisBackend, JurisLlmClient};
pub use normalizer::{clean_response, normalize_response};
pub use prompt::{build_research_prompt, PromptTemplate, THEME_PLACEHOLDER};
pub use service::AnalysisService;
