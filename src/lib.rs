//! Stylecheck - a house style checker for C# codebases.
//!
//! Stylecheck scans source files with lightweight text heuristics rather
//! than a full parser. It enforces local conventions: namespace layout
//! mirroring the directory tree, identifier prefixes, XML documentation
//! coverage tuned by project type, inheritance control, and common
//! implementation-quality smells.
//!
//! # Architecture
//!
//! - `scope`: brace-counting extraction of `{ ... }` bodies
//! - `matchers`: regex matchers for C# declarations
//! - `project`: project type detection from `.csproj` manifests
//! - `rules`: the six style rules and the engine that coordinates them
//! - `report`: output formatting (pretty, JSON, markdown)
//! - `cli`: command-line interface

pub mod cli;
pub mod matchers;
pub mod project;
pub mod report;
pub mod rules;
pub mod scope;

pub use project::ProjectType;
pub use rules::{AnalysisResult, Rule, RuleEngine, DEFAULT_NAMESPACE_ROOT};
pub use scope::{Scope, ScopeError};
