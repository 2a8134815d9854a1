//! Integration tests for the full analysis pipeline.
//!
//! These tests run the rule engine against the testdata fixtures and
//! validate the aggregate behavior: which files are reported, which
//! messages they carry, and in what order.

use std::path::PathBuf;

use stylecheck::project::ProjectType;
use stylecheck::report;
use stylecheck::rules::RuleEngine;

fn testdata_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

fn library_engine() -> RuleEngine {
    RuleEngine::new()
        .project_root(testdata_path())
        .project_type(ProjectType::ClassLibrary)
}

fn read_fixture(name: &str) -> (PathBuf, String) {
    let path = testdata_path().join(name);
    let text = std::fs::read_to_string(&path).expect("should read fixture");
    (path, text)
}

#[test]
fn test_clean_fixture_produces_no_result() {
    let engine = library_engine();
    let files = vec![read_fixture("clean.cs")];

    let results = engine.analyze_many(&files);
    assert!(
        results.is_empty(),
        "clean.cs should pass all rules, got: {:?}",
        results
    );
}

#[test]
fn test_violations_fixture_trips_expected_rules() {
    let engine = library_engine();
    let (path, text) = read_fixture("violations.cs");

    let result = engine.analyze(&path, &text);

    let expect = |needle: &str| {
        assert!(
            result.violations.iter().any(|v| v.contains(needle)),
            "expected a violation containing {:?}, got: {:?}",
            needle,
            result.violations
        );
    };

    // Namespace does not start with the root token.
    expect("Namespace mismatch. Expected 'SOLTEC' but found 'Vendor.Processing'.");

    // Naming prefixes.
    expect("Local variable 'result' should start with '_'.");
    expect("Global field 'total' should start with 'g'.");

    // Documentation coverage for a library project.
    expect("class 'Processor' has no XML documentation block");
    expect("method 'Process' has no XML documentation block");
    expect("method 'Compute' has no XML documentation block");

    // Inheritance control.
    expect("Public class 'Processor' must be sealed, abstract, or contain at least one virtual method.");

    // Implementation quality.
    expect("Public method 'Compute' has no meaningful implementation.");
    expect("Parameter 'input' in method 'Process' is never used.");
}

#[test]
fn test_analysis_is_deterministic() {
    let engine = library_engine();
    let (path, text) = read_fixture("violations.cs");

    let first = engine.analyze(&path, &text);
    let second = engine.analyze(&path, &text);

    assert_eq!(first, second);
}

#[test]
fn test_results_preserve_input_order() {
    let engine = RuleEngine::new().project_type(ProjectType::Unknown);

    // Three files without namespaces; all trip the structure rule.
    let files: Vec<(PathBuf, String)> = ["c.cs", "a.cs", "b.cs"]
        .iter()
        .map(|name| (PathBuf::from(name), "public class X { }\n".to_string()))
        .collect();

    let results = engine.analyze_many(&files);
    let order: Vec<_> = results.iter().map(|r| r.file_path.as_str()).collect();

    assert_eq!(order, vec!["c.cs", "a.cs", "b.cs"]);
}

#[test]
fn test_clean_files_dropped_from_aggregate() {
    let engine = library_engine();
    let files = vec![read_fixture("clean.cs"), read_fixture("violations.cs")];

    let results = engine.analyze_many(&files);

    assert_eq!(results.len(), 1);
    assert!(results[0].file_path.ends_with("violations.cs"));
}

#[test]
fn test_markdown_report_from_analysis() {
    let engine = library_engine();
    let files = vec![read_fixture("violations.cs")];
    let results = engine.analyze_many(&files);

    let md = report::render_markdown("testdata", ProjectType::ClassLibrary, 1, &results);

    assert!(md.contains("# Code Style Report"));
    assert!(md.contains("violations.cs"));
    assert!(md.contains("Namespace mismatch"));
}

#[test]
fn test_json_report_totals_from_analysis() {
    let engine = library_engine();
    let files = vec![read_fixture("violations.cs")];
    let results = engine.analyze_many(&files);

    assert!(report::total_violations(&results) >= 9);
    assert_eq!(report::total_alerts(&results), 0);
}
