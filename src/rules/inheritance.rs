//! Inheritance exposure control.
//!
//! A public class must be `sealed`, `abstract`, or accompanied by at least
//! one `public`/`protected` `virtual` member. The virtual-member search is
//! file-scoped, not type-scoped: one virtual method anywhere in the file
//! satisfies every public class in it.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `public [modifiers] class Name`; the modifier text is inspected
    /// separately because the decision depends on what it contains.
    static ref PUBLIC_CLASS: Regex =
        Regex::new(r"(?m)\bpublic\s+((?:\w+\s+)*)class\s+(\w+)").unwrap();

    static ref VIRTUAL_MEMBER: Regex =
        Regex::new(r"(?m)\b(public|protected)\s+virtual\s+[\w<>\[\]\?]+\s+\w+\s*\(").unwrap();
}

/// Check that public classes are deliberately open or closed.
pub fn check(text: &str) -> Vec<String> {
    let mut violations = Vec::new();
    let has_virtual = VIRTUAL_MEMBER.is_match(text);

    for caps in PUBLIC_CLASS.captures_iter(text) {
        let modifiers = &caps[1];
        if modifiers
            .split_whitespace()
            .any(|m| matches!(m, "sealed" | "abstract" | "static"))
        {
            continue;
        }
        if !has_virtual {
            violations.push(format!(
                "Public class '{}' must be sealed, abstract, or contain at least one virtual method.",
                &caps[2]
            ));
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_class_without_virtual_member() {
        let violations = check("public class A { }\n");
        assert_eq!(
            violations,
            vec!["Public class 'A' must be sealed, abstract, or contain at least one virtual method."]
        );
    }

    #[test]
    fn test_sealed_and_abstract_classes_pass() {
        assert!(check("public sealed class A { }\n").is_empty());
        assert!(check("public abstract class B { }\n").is_empty());
        assert!(check("public static class C { }\n").is_empty());
    }

    #[test]
    fn test_virtual_member_anywhere_satisfies_all_classes() {
        // File-scoped search: the virtual method in B also clears A.
        let text = "\
public class A { }
public class B
{
    public virtual void X() { }
}
";
        assert!(check(text).is_empty());
    }

    #[test]
    fn test_two_open_classes_both_flagged() {
        let text = "public class A { }\npublic class B { }\n";
        let violations = check(text);
        assert_eq!(violations.len(), 2);
        assert!(violations[0].contains("'A'"));
        assert!(violations[1].contains("'B'"));
    }

    #[test]
    fn test_non_public_class_not_checked() {
        assert!(check("internal class A { }\n").is_empty());
    }
}
