//! Herald Translate - deterministic changelog classification
//!
//! Turns raw changelog text into structured, audience-ready summaries with
//! no model calls: fixed keyword tables drive change classification, risk
//! detection, and impact estimation, so the same input always produces the
//! same output.

pub mod classify;
pub mod risk;
pub mod segment;
pub mod summary;
mod translator;

pub use classify::{classify_area, classify_change_type, strip_marker, GENERAL_AREA};
pub use risk::{derive_impact, detect_risks, follow_up_questions};
pub use segment::{normalize, segment_statements};
pub use summary::{cs_line, customer_line, support_line};
pub use translator::Translator;
