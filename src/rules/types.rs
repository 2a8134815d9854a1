//! Result records shared by all rule modules.

use serde::{Deserialize, Serialize};

/// Identifies one of the six rule modules. Used in diagnostics when a rule
/// fails to evaluate, and in report summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    #[serde(rename = "namespace")]
    Namespace,
    #[serde(rename = "namespace_structure")]
    NamespaceStructure,
    #[serde(rename = "naming")]
    Naming,
    #[serde(rename = "documentation")]
    Documentation,
    #[serde(rename = "inheritance_control")]
    InheritanceControl,
    #[serde(rename = "implementation_quality")]
    ImplementationQuality,
}

impl Rule {
    /// Evaluation order of the rule set.
    pub const ALL: [Rule; 6] = [
        Rule::Namespace,
        Rule::NamespaceStructure,
        Rule::Naming,
        Rule::Documentation,
        Rule::InheritanceControl,
        Rule::ImplementationQuality,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::Namespace => "namespace",
            Rule::NamespaceStructure => "namespace_structure",
            Rule::Naming => "naming",
            Rule::Documentation => "documentation",
            Rule::InheritanceControl => "inheritance_control",
            Rule::ImplementationQuality => "implementation_quality",
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-file outcome of running the full rule set.
///
/// Violations are hard style breaches; alerts are advisory observations.
/// Immutable once handed to reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub file_path: String,
    pub violations: Vec<String>,
    #[serde(default)]
    pub alerts: Vec<String>,
}

impl AnalysisResult {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            violations: Vec::new(),
            alerts: Vec::new(),
        }
    }

    /// True when the file produced neither violations nor alerts.
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty() && self.alerts.is_empty()
    }
}
