//! Rule composition, ordering, and failure isolation.
//!
//! The engine owns nothing but configuration: every rule is a pure function
//! of one file's text, so analysis runs per file with no shared mutable
//! state and parallelizes across files without locking.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::project::ProjectType;

use super::types::{AnalysisResult, Rule};
use super::{docs, implementation, inheritance, namespace, naming, structure};

/// Root token expected to prefix every namespace.
pub const DEFAULT_NAMESPACE_ROOT: &str = "SOLTEC";

/// Runs the full rule set over files.
///
/// Callers without a project root get degraded-but-defined behavior: the
/// namespace rule is skipped. Callers without a known project type get the
/// documentation rule's built-in short circuit.
pub struct RuleEngine {
    project_root: Option<PathBuf>,
    project_type: ProjectType,
    namespace_root: String,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleEngine {
    pub fn new() -> Self {
        Self {
            project_root: None,
            project_type: ProjectType::Unknown,
            namespace_root: DEFAULT_NAMESPACE_ROOT.to_string(),
        }
    }

    pub fn project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = Some(root.into());
        self
    }

    pub fn project_type(mut self, project_type: ProjectType) -> Self {
        self.project_type = project_type;
        self
    }

    pub fn namespace_root(mut self, root: impl Into<String>) -> Self {
        self.namespace_root = root.into();
        self
    }

    /// Run every rule over one file's text.
    ///
    /// Always produces a result record, even when every list is empty. A
    /// rule that fails to evaluate contributes one diagnostic alert naming
    /// the rule instead of aborting the file; the worst outcome for a file
    /// is zero findings, never a crashed run.
    pub fn analyze(&self, file_path: &Path, text: &str) -> AnalysisResult {
        let mut result = AnalysisResult::new(file_path.display().to_string());

        if let Some(root) = &self.project_root {
            run_rule(Rule::Namespace, &mut result, || {
                let (valid, message) =
                    namespace::check(file_path, text, root, &self.namespace_root);
                if valid {
                    Vec::new()
                } else {
                    vec![message]
                }
            });
        }

        run_rule(Rule::NamespaceStructure, &mut result, || structure::check(text));
        run_rule(Rule::Naming, &mut result, || naming::check(text));
        run_rule(Rule::Documentation, &mut result, || {
            docs::check(text, self.project_type)
        });
        run_rule(Rule::InheritanceControl, &mut result, || inheritance::check(text));

        // ImplementationQuality is the one rule that also emits alerts.
        match catch_unwind(AssertUnwindSafe(|| implementation::check(text))) {
            Ok(findings) => {
                result.violations.extend(findings.violations);
                result.alerts.extend(findings.alerts);
            }
            Err(_) => result
                .alerts
                .push(rule_failure(Rule::ImplementationQuality)),
        }

        result
    }

    /// Analyze many files, in parallel, preserving input order.
    ///
    /// Only files with at least one finding are kept; rayon's collect
    /// resequences by original index regardless of completion order.
    pub fn analyze_many(&self, files: &[(PathBuf, String)]) -> Vec<AnalysisResult> {
        files
            .par_iter()
            .map(|(path, text)| self.analyze(path, text))
            .filter(|result| !result.is_clean())
            .collect()
    }
}

fn run_rule<F>(rule: Rule, result: &mut AnalysisResult, check: F)
where
    F: FnOnce() -> Vec<String>,
{
    match catch_unwind(AssertUnwindSafe(check)) {
        Ok(violations) => result.violations.extend(violations),
        Err(_) => result.alerts.push(rule_failure(rule)),
    }
}

fn rule_failure(rule: Rule) -> String {
    format!("Rule '{}' failed to evaluate and was skipped.", rule)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MESSY_FILE: &str = "\
using System;

public class Widget
{
    public int count;

    public void Touch(int unused)
    {
    }
}
";

    #[test]
    fn test_analyze_merges_rule_outputs_in_order() {
        let engine = RuleEngine::new().project_root("/proj");
        let result = engine.analyze(Path::new("/proj/Widget.cs"), MESSY_FILE);

        // Namespace rules fire first, then naming, then the rest.
        assert!(result.violations[0].contains("No namespace declared"));
        assert!(result.violations[1].contains("No namespace declaration found"));
        assert!(result
            .violations
            .iter()
            .any(|v| v.contains("Global field 'count'")));
        assert!(result
            .violations
            .iter()
            .any(|v| v.contains("Public class 'Widget'")));
        assert!(result
            .violations
            .iter()
            .any(|v| v.contains("Parameter 'unused'")));
    }

    #[test]
    fn test_panicking_rule_contributes_one_diagnostic_alert() {
        let mut result = AnalysisResult::new("x.cs");
        run_rule(Rule::Naming, &mut result, || panic!("scan blew up"));

        assert!(result.violations.is_empty());
        assert_eq!(
            result.alerts,
            vec!["Rule 'naming' failed to evaluate and was skipped."]
        );
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let engine = RuleEngine::new().project_root("/proj");
        let first = engine.analyze(Path::new("/proj/Widget.cs"), MESSY_FILE);
        let second = engine.analyze(Path::new("/proj/Widget.cs"), MESSY_FILE);
        assert_eq!(first, second);
    }

    #[test]
    fn test_namespace_rule_skipped_without_root() {
        let engine = RuleEngine::new();
        let result = engine.analyze(Path::new("Widget.cs"), MESSY_FILE);
        assert!(!result
            .violations
            .iter()
            .any(|v| v.contains("No namespace declared")));
        // The structure rule still runs.
        assert!(result
            .violations
            .iter()
            .any(|v| v.contains("No namespace declaration found")));
    }

    #[test]
    fn test_clean_file_yields_empty_result() {
        let text = "\
namespace SOLTEC;

/// <summary>
/// Fine.
/// </summary>
public sealed class Fine
{
    public int Get()
    {
        return 1;
    }
}
";
        let engine = RuleEngine::new().project_root("/proj");
        let result = engine.analyze(Path::new("/proj/Fine.cs"), text);
        assert!(result.is_clean(), "{:?}", result);
    }

    #[test]
    fn test_analyze_many_preserves_input_order_and_drops_clean_files() {
        let clean = "\
namespace SOLTEC;

public sealed class Ok
{
    public int Get()
    {
        return 1;
    }
}
";
        let files = vec![
            (PathBuf::from("/proj/B.cs"), MESSY_FILE.to_string()),
            (PathBuf::from("/proj/Ok.cs"), clean.to_string()),
            (PathBuf::from("/proj/A.cs"), MESSY_FILE.to_string()),
        ];

        let engine = RuleEngine::new();
        let results = engine.analyze_many(&files);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].file_path, "/proj/B.cs");
        assert_eq!(results[1].file_path, "/proj/A.cs");
    }
}
