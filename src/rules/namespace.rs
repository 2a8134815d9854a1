//! Namespace-to-path agreement.
//!
//! Every file must declare exactly the namespace derived from its location
//! under the project root: path separators become dots, prefixed with the
//! house root token. Multiplicity is the structure rule's concern, not ours.

use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

lazy_static! {
    /// A well-formed namespace line: dotted identifier, optionally closed
    /// with `;` (file-scoped) or `{`.
    static ref NAMESPACE_LINE: Regex =
        Regex::new(r"^\s*namespace\s+[A-Za-z_][A-Za-z0-9_.]*\s*[;{]?\s*$").unwrap();
}

/// Derive the namespace a file should declare from its location.
///
/// Only directory components contribute; a file directly under the project
/// root is expected to declare the root token alone.
pub fn expected_namespace(file_path: &Path, project_root: &Path, root_token: &str) -> String {
    let relative = file_path.strip_prefix(project_root).unwrap_or(file_path);
    let mut parts = vec![root_token.to_string()];
    if let Some(parent) = relative.parent() {
        for component in parent.components() {
            let segment = component.as_os_str().to_string_lossy();
            if !segment.is_empty() && segment != "." {
                parts.push(segment.to_string());
            }
        }
    }
    parts.join(".")
}

/// Check the declared namespace against the path-derived expectation.
///
/// Returns `(false, message)` on violation. Malformed input is data, never
/// an error: the worst outcome is a descriptive message.
pub fn check(
    file_path: &Path,
    text: &str,
    project_root: &Path,
    root_token: &str,
) -> (bool, String) {
    let expected = expected_namespace(file_path, project_root, root_token);

    let Some(line) = text
        .lines()
        .find(|l| l.trim_start().starts_with("namespace "))
    else {
        return (false, "No namespace declared.".to_string());
    };

    if !NAMESPACE_LINE.is_match(line) {
        return (false, "Namespace declaration is invalid.".to_string());
    }

    let declared = line
        .trim()
        .trim_start_matches("namespace")
        .trim()
        .trim_end_matches([';', '{'])
        .trim_end();

    if declared != expected {
        return (
            false,
            format!(
                "Namespace mismatch. Expected '{}' but found '{}'.",
                expected, declared
            ),
        );
    }

    (true, String::new())
}
