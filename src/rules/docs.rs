//! XML documentation presence.
//!
//! Every exposed declaration must be immediately preceded by a `///` block
//! containing a `<summary>` tag. Library surfaces additionally require an
//! `<example>` tag on type and method declarations. Strictness is tuned by
//! the externally supplied project type; Razor apps and unknown projects
//! are not checked at all.

use lazy_static::lazy_static;
use regex::Regex;

use crate::project::ProjectType;

lazy_static! {
    /// An exposed type declaration line.
    static ref TYPE_LINE: Regex = Regex::new(
        r"^\s*(public|protected internal|protected|internal)\s+(?:(?:abstract|sealed|static|partial|readonly)\s+)*(class|interface|struct|record|enum|delegate)\s+(\w+)"
    ).unwrap();

    /// An exposed event declaration line.
    static ref EVENT_LINE: Regex = Regex::new(
        r"^\s*(public|protected internal|protected|internal)\s+(?:(?:static|virtual|override|sealed|abstract)\s+)*event\s+[\w<>\[\]\?]+\s+(\w+)"
    ).unwrap();

    /// An exposed member declaration line: method or property.
    static ref MEMBER_LINE: Regex = Regex::new(
        r"^\s*(public|protected internal|protected|internal)\s+(?:(?:static|virtual|override|sealed|abstract|async|readonly|partial|new|unsafe)\s+)*[\w<>\[\]\?]+\s+(\w+)\s*(\(|\{|=>)"
    ).unwrap();
}

/// One declaration line that qualifies for documentation checks.
struct DocTarget<'a> {
    label: &'a str,
    name: String,
    line_index: usize,
    needs_example: bool,
}

/// Check documentation presence for every qualifying declaration.
pub fn check(text: &str, project_type: ProjectType) -> Vec<String> {
    if !project_type.enforces_docs() {
        return Vec::new();
    }

    let lines: Vec<&str> = text.lines().collect();
    let mut violations = Vec::new();

    for target in collect_targets(&lines, project_type) {
        check_target(&lines, &target, &mut violations);
    }

    violations
}

fn collect_targets<'a>(lines: &[&'a str], project_type: ProjectType) -> Vec<DocTarget<'a>> {
    let mut targets = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        if let Some(caps) = TYPE_LINE.captures(line) {
            if !access_qualifies(&caps[1], project_type) {
                continue;
            }
            targets.push(DocTarget {
                label: caps.get(2).unwrap().as_str(),
                name: caps[3].to_string(),
                line_index: index,
                needs_example: project_type.requires_examples(),
            });
        } else if let Some(caps) = EVENT_LINE.captures(line) {
            if !access_qualifies(&caps[1], project_type) {
                continue;
            }
            targets.push(DocTarget {
                label: "event",
                name: caps[2].to_string(),
                line_index: index,
                needs_example: false,
            });
        } else if let Some(caps) = MEMBER_LINE.captures(line) {
            if !access_qualifies(&caps[1], project_type) {
                continue;
            }
            let is_method = &caps[3] == "(";
            targets.push(DocTarget {
                label: if is_method { "method" } else { "property" },
                name: caps[2].to_string(),
                line_index: index,
                needs_example: is_method && project_type.requires_examples(),
            });
        }
    }

    targets
}

/// Internal declarations only qualify for console apps; public/protected
/// always qualify.
fn access_qualifies(access: &str, project_type: ProjectType) -> bool {
    match access {
        "internal" => project_type.checks_internal(),
        _ => true,
    }
}

fn check_target(lines: &[&str], target: &DocTarget<'_>, violations: &mut Vec<String>) {
    let line_number = target.line_index + 1;

    // The immediately preceding non-blank line must begin the doc block.
    let mut cursor = target.line_index;
    while cursor > 0 && lines[cursor - 1].trim().is_empty() {
        cursor -= 1;
    }
    if cursor == 0 || !is_doc_line(lines[cursor - 1]) {
        violations.push(format!(
            "{} '{}' has no XML documentation block (line {}).",
            target.label, target.name, line_number
        ));
        return;
    }

    // Scan backward while lines continue to be documentation lines.
    let mut block = String::new();
    let mut i = cursor - 1;
    loop {
        block.push_str(lines[i]);
        block.push('\n');
        if i == 0 || !is_doc_line(lines[i - 1]) {
            break;
        }
        i -= 1;
    }

    if !block.contains("<summary>") {
        violations.push(format!(
            "{} '{}' documentation is missing <summary> (line {}).",
            target.label, target.name, line_number
        ));
    }
    if target.needs_example && !block.contains("<example>") {
        violations.push(format!(
            "{} '{}' documentation is missing <example> (line {}).",
            target.label, target.name, line_number
        ));
    }
}

fn is_doc_line(line: &str) -> bool {
    line.trim_start().starts_with("///")
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENTED_CLASS: &str = "\
namespace SOLTEC;

/// <summary>
/// A documented type.
/// </summary>
/// <example>
/// var _f = new Foo();
/// </example>
public sealed class Foo
{
}
";

    #[test]
    fn test_undocumented_class_is_flagged() {
        let text = "namespace SOLTEC;\n\npublic class Foo\n{\n}\n";
        let violations = check(text, ProjectType::ClassLibrary);
        assert_eq!(
            violations,
            vec!["class 'Foo' has no XML documentation block (line 3)."]
        );
    }

    #[test]
    fn test_documented_class_passes() {
        assert!(check(DOCUMENTED_CLASS, ProjectType::ClassLibrary).is_empty());
    }

    #[test]
    fn test_summary_without_example_for_library() {
        let text = "\
/// <summary>
/// A documented type.
/// </summary>
public sealed class Foo
{
}
";
        let violations = check(text, ProjectType::ClassLibrary);
        assert_eq!(
            violations,
            vec!["class 'Foo' documentation is missing <example> (line 4)."]
        );
    }

    #[test]
    fn test_razor_app_skips_documentation() {
        let text = "public class Foo\n{\n}\n";
        assert!(check(text, ProjectType::RazorApp).is_empty());
        assert!(check(text, ProjectType::Unknown).is_empty());
    }

    #[test]
    fn test_console_app_requires_no_example() {
        let text = "\
/// <summary>
/// A documented type.
/// </summary>
public sealed class Foo
{
}
";
        assert!(check(text, ProjectType::ConsoleApp).is_empty());
    }

    #[test]
    fn test_internal_checked_only_for_console() {
        let text = "internal class Helper\n{\n}\n";
        assert!(check(text, ProjectType::ClassLibrary).is_empty());
        let violations = check(text, ProjectType::ConsoleApp);
        assert_eq!(
            violations,
            vec!["class 'Helper' has no XML documentation block (line 1)."]
        );
    }

    #[test]
    fn test_undocumented_method_is_flagged() {
        let text = "\
/// <summary>
/// Documented.
/// </summary>
/// <example>
/// new Foo();
/// </example>
public sealed class Foo
{
    public int Count()
    {
        return 1;
    }
}
";
        let violations = check(text, ProjectType::ClassLibrary);
        assert_eq!(
            violations,
            vec!["method 'Count' has no XML documentation block (line 9)."]
        );
    }

    #[test]
    fn test_expression_bodied_method_still_requires_example() {
        // The parameter list closes the match before the arrow can, so the
        // declaration is classified as a method, not a property.
        let text = "\
/// <summary>
/// Documented.
/// </summary>
public int Total() => 5;
";
        let violations = check(text, ProjectType::ClassLibrary);
        assert_eq!(
            violations,
            vec!["method 'Total' documentation is missing <example> (line 4)."]
        );
    }

    #[test]
    fn test_property_requires_summary_only() {
        let text = "\
/// <summary>
/// Documented.
/// </summary>
public int Total { get; set; }
";
        assert!(check(text, ProjectType::ClassLibrary).is_empty());
    }
}
