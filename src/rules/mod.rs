//! Rule modules: independent, stateless checks over one file's text.
//!
//! Each module maps text (plus optional context) to violation messages;
//! `implementation` additionally separates advisory alerts from hard
//! violations. Composition and ordering belong to the engine.

pub mod docs;
mod engine;
pub mod implementation;
pub mod inheritance;
pub mod namespace;
pub mod naming;
pub mod structure;
mod types;

pub use engine::{RuleEngine, DEFAULT_NAMESPACE_ROOT};
pub use types::{AnalysisResult, Rule};
