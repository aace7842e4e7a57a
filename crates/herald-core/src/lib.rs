//! Herald Core - Core library for changelog translation
//!
//! This crate provides the foundational types, error handling, and
//! configuration for the Herald release communication tool.

pub mod config;
pub mod error;
pub mod types;

pub use error::{ConfigError, HeraldError, RequestError, Result};
pub use types::{
    AiEnhancement, Audience, ChangeType, ExtractedChange, ImpactLevel, Mode, Persona, Tone,
    TranslateRequest, TranslateResponse,
};
