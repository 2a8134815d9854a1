//! Output formatting for stylecheck results.
//!
//! Supports three output formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption
//! - Markdown: report file suitable for committing or attaching to reviews

use colored::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::project::ProjectType;
use crate::rules::AnalysisResult;

// =============================================================================
// JSON Format
// =============================================================================

/// Top-level JSON report structure.
#[derive(Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub path: String,
    pub project_type: ProjectType,
    pub files_analyzed: usize,
    pub total_violations: usize,
    pub total_alerts: usize,
    pub results: Vec<JsonFileResult>,
}

/// Per-file entry in the JSON report.
#[derive(Serialize, Deserialize)]
pub struct JsonFileResult {
    pub file: String,
    pub violation_count: usize,
    pub alert_count: usize,
    pub violations: Vec<String>,
    pub alerts: Vec<String>,
}

/// Write results in JSON format to stdout.
pub fn write_json(
    path: &str,
    project_type: ProjectType,
    files_analyzed: usize,
    results: &[AnalysisResult],
) -> anyhow::Result<()> {
    let report = build_json_report(path, project_type, files_analyzed, results);
    let json = serde_json::to_string_pretty(&report)?;
    println!("{}", json);
    Ok(())
}

fn build_json_report(
    path: &str,
    project_type: ProjectType,
    files_analyzed: usize,
    results: &[AnalysisResult],
) -> JsonReport {
    let entries: Vec<JsonFileResult> = results
        .iter()
        .map(|r| JsonFileResult {
            file: r.file_path.clone(),
            violation_count: r.violations.len(),
            alert_count: r.alerts.len(),
            violations: r.violations.clone(),
            alerts: r.alerts.clone(),
        })
        .collect();

    JsonReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        path: path.to_string(),
        project_type,
        files_analyzed,
        total_violations: total_violations(results),
        total_alerts: total_alerts(results),
        results: entries,
    }
}

/// Sum of violations across all file results.
pub fn total_violations(results: &[AnalysisResult]) -> usize {
    results.iter().map(|r| r.violations.len()).sum()
}

/// Sum of alerts across all file results.
pub fn total_alerts(results: &[AnalysisResult]) -> usize {
    results.iter().map(|r| r.alerts.len()).sum()
}

// =============================================================================
// Markdown Format
// =============================================================================

/// Render the full markdown report as a string.
pub fn render_markdown(
    path: &str,
    project_type: ProjectType,
    files_analyzed: usize,
    results: &[AnalysisResult],
) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# Code Style Report\n\n\
         Generated by stylecheck v{}\n\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str(&format!("- **Path:** `{}`\n", path));
    out.push_str(&format!("- **Project type:** {}\n", project_type));
    out.push_str(&format!("- **Files analyzed:** {}\n", files_analyzed));
    out.push_str(&format!(
        "- **Total violations:** {}\n",
        total_violations(results)
    ));
    out.push_str(&format!("- **Total alerts:** {}\n\n", total_alerts(results)));

    if results.is_empty() {
        out.push_str("No style issues found.\n");
        return out;
    }

    for result in results {
        out.push_str(&format!("## {}\n\n", result.file_path));

        if !result.violations.is_empty() {
            out.push_str("### Violations\n\n");
            for v in &result.violations {
                out.push_str(&format!("- {}\n", v));
            }
            out.push('\n');
        }

        if !result.alerts.is_empty() {
            out.push_str("### Alerts\n\n");
            for a in &result.alerts {
                out.push_str(&format!("- {}\n", a));
            }
            out.push('\n');
        }
    }

    out
}

/// Write the markdown report to `report_path`.
pub fn write_markdown(
    report_path: &Path,
    path: &str,
    project_type: ProjectType,
    files_analyzed: usize,
    results: &[AnalysisResult],
) -> anyhow::Result<()> {
    let markdown = render_markdown(path, project_type, files_analyzed, results);
    std::fs::write(report_path, markdown)?;
    Ok(())
}

// =============================================================================
// Pretty Format
// =============================================================================

/// Write results in pretty (human-readable) format.
pub fn write_pretty(
    path: &str,
    project_type: ProjectType,
    files_analyzed: usize,
    results: &[AnalysisResult],
) {
    // Header
    println!();
    print!("  ");
    print!("{}", "stylecheck".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    // Scan info
    print!("  {}", "Scanning:     ".dimmed());
    println!("{}", path);
    print!("  {}", "Project type: ".dimmed());
    println!("{}", project_type);
    print!("  {}", "Files:        ".dimmed());
    println!("{}", files_analyzed);
    println!();

    if results.is_empty() {
        println!("  {}", "✓ No style issues found".green());
        println!();
        return;
    }

    for result in results {
        println!("  {}", result.file_path.blue());

        for v in &result.violations {
            println!("    {} {}", "VIOLATION".red(), v);
        }
        for a in &result.alerts {
            println!("    {}     {}", "ALERT".yellow(), a);
        }
        println!();
    }

    write_final_status(results);
    println!();
}

fn write_final_status(results: &[AnalysisResult]) {
    let violations = total_violations(results);
    let alerts = total_alerts(results);

    print!(
        "  {}",
        format!("{} violation(s), {} alert(s)", violations, alerts).dimmed()
    );
    print!("  ");

    if violations == 0 {
        print!("{}", "PASSED".green());
    } else {
        print!("{}", "FAILED".red());
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::AnalysisResult;

    fn sample_results() -> Vec<AnalysisResult> {
        vec![
            AnalysisResult {
                file_path: "src/Ledger.cs".to_string(),
                violations: vec!["Namespace mismatch. Expected 'SOLTEC' but found 'Other'.".to_string()],
                alerts: vec![],
            },
            AnalysisResult {
                file_path: "src/Helpers.cs".to_string(),
                violations: vec![],
                alerts: vec![
                    "Method 'Render' is too long (61 lines). Consider splitting or refactoring."
                        .to_string(),
                ],
            },
        ]
    }

    #[test]
    fn test_totals() {
        let results = sample_results();
        assert_eq!(total_violations(&results), 1);
        assert_eq!(total_alerts(&results), 1);
    }

    #[test]
    fn test_json_report_structure() {
        let results = sample_results();
        let report = build_json_report("/repo", ProjectType::ClassLibrary, 5, &results);

        assert_eq!(report.files_analyzed, 5);
        assert_eq!(report.total_violations, 1);
        assert_eq!(report.total_alerts, 1);
        assert_eq!(report.results.len(), 2);
        assert_eq!(report.results[0].violation_count, 1);
        assert_eq!(report.results[1].alert_count, 1);

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"project_type\":\"class_library\""));
    }

    #[test]
    fn test_markdown_sections() {
        let results = sample_results();
        let md = render_markdown("/repo", ProjectType::ClassLibrary, 5, &results);

        assert!(md.starts_with("# Code Style Report"));
        assert!(md.contains("## src/Ledger.cs"));
        assert!(md.contains("### Violations"));
        assert!(md.contains("### Alerts"));
        assert!(md.contains("Namespace mismatch"));
    }

    #[test]
    fn test_markdown_clean_run() {
        let md = render_markdown("/repo", ProjectType::Unknown, 3, &[]);
        assert!(md.contains("No style issues found."));
    }
}
