//! Namespace placement and multiplicity.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NAMESPACE_DECL: Regex =
        Regex::new(r"(?m)^\s*namespace\s+[A-Za-z_][A-Za-z0-9_.]*").unwrap();
}

/// Check that exactly one namespace is declared and that it is the first
/// substantive line of the file.
pub fn check(text: &str) -> Vec<String> {
    let mut violations = Vec::new();

    let count = NAMESPACE_DECL.find_iter(text).count();
    if count == 0 {
        violations.push("No namespace declaration found.".to_string());
        return violations;
    }
    if count > 1 {
        violations.push("Multiple namespace declarations found in the same file.".to_string());
    }

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("//") || trimmed.starts_with("/*") {
            continue;
        }
        if !trimmed.starts_with("namespace ") {
            violations.push("Namespace declaration is not at the top of the file.".to_string());
        }
        break;
    }

    violations
}
