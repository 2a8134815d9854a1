//! Implementation hygiene checks.
//!
//! Eight independent sub-checks over one file's text. Hard breaches go to
//! `violations`; advisory observations (currently only overlong methods) go
//! to `alerts`. Each sub-check runs isolated: one failing scan never blocks
//! the rest.

use std::panic::{catch_unwind, AssertUnwindSafe};

use lazy_static::lazy_static;
use regex::Regex;

use crate::matchers::{self, AccessModifier, DeclarationKind};
use crate::scope;

/// Method bodies longer than this raise an advisory alert.
const MAX_METHOD_LINES: usize = 50;

lazy_static! {
    /// A member exposed from inside a type body.
    static ref EXPOSED_MEMBER: Regex =
        Regex::new(r"(public|protected)\s+(event|void|[\w<>\[\]\?]+\s+\w+)\s*[\(\{]").unwrap();

    static ref NOT_IMPLEMENTED: Regex =
        Regex::new(r"throw\s+new\s+NotImplementedException\s*\(\s*\)\s*;").unwrap();

    /// A body that is exactly one constant-ish return.
    static ref USELESS_RETURN: Regex =
        Regex::new(r"^return\s+(null|default|0|false)\s*;$").unwrap();

    static ref EMPTY_CATCH: Regex =
        Regex::new(r"catch\s*(\([^)]*\)\s*)?\{\s*\}").unwrap();

    /// Fields following the `g` house prefix; usage counting targets these.
    static ref GLOBAL_FIELD: Regex = Regex::new(
        r"(private|protected|public|internal)\s+(?:(?:static|readonly)\s+)*[\w<>\[\]\?]+\s+(g\w+)\s*[=;]"
    ).unwrap();

    static ref RETURN_KEYWORD: Regex = Regex::new(r"\breturn\b").unwrap();
}

/// Findings split by severity.
#[derive(Debug, Default)]
pub struct QualityFindings {
    pub violations: Vec<String>,
    pub alerts: Vec<String>,
}

/// Run all eight sub-checks over one file's text.
pub fn check(text: &str) -> QualityFindings {
    let mut findings = QualityFindings::default();

    run_isolated(|| empty_exposed_types(text), &mut findings.violations);
    run_isolated(|| trivial_public_methods(text), &mut findings.violations);
    run_isolated(|| overlong_methods(text), &mut findings.alerts);
    run_isolated(|| unused_parameters(text), &mut findings.violations);
    run_isolated(|| empty_catch_blocks(text), &mut findings.violations);
    run_isolated(|| unused_fields(text), &mut findings.violations);
    run_isolated(|| empty_public_constructors(text), &mut findings.violations);
    run_isolated(|| missing_returns(text), &mut findings.violations);

    findings
}

fn run_isolated<F>(sub_check: F, out: &mut Vec<String>)
where
    F: FnOnce() -> Vec<String>,
{
    if let Ok(found) = catch_unwind(AssertUnwindSafe(sub_check)) {
        out.extend(found);
    }
}

/// A public/protected type whose body exposes no member.
fn empty_exposed_types(text: &str) -> Vec<String> {
    let mut violations = Vec::new();

    for ty in matchers::find_types(text) {
        if !ty.declaration.access.is_exposed() {
            continue;
        }
        // Enum members carry no access modifiers; delegates have no body.
        if ty.keyword == "enum" || ty.keyword == "delegate" {
            continue;
        }
        let Ok(body_scope) = scope::extract(text, ty.declaration.start) else {
            continue;
        };
        if !EXPOSED_MEMBER.is_match(body_scope.body(text)) {
            violations.push(format!(
                "{} '{}' is public/protected but exposes no members.",
                ty.keyword, ty.declaration.name
            ));
        }
    }

    violations
}

/// A public method whose body is blank, comment-only, a not-implemented
/// throw, or a lone constant return.
fn trivial_public_methods(text: &str) -> Vec<String> {
    let mut violations = Vec::new();

    for method in matchers::find_methods(text) {
        if method.declaration.access != AccessModifier::Public {
            continue;
        }
        let Ok(body_scope) = scope::extract(text, method.declaration.start) else {
            continue;
        };
        let body = body_scope.body(text).trim();

        if body.is_empty()
            || comment_only(body)
            || NOT_IMPLEMENTED.is_match(body)
            || USELESS_RETURN.is_match(body)
        {
            violations.push(format!(
                "Public method '{}' has no meaningful implementation.",
                method.declaration.name
            ));
        }
    }

    violations
}

/// Any method, regardless of access, whose body exceeds the line budget.
fn overlong_methods(text: &str) -> Vec<String> {
    let mut alerts = Vec::new();

    for method in matchers::find_methods(text) {
        let Ok(body_scope) = scope::extract(text, method.declaration.start) else {
            continue;
        };
        let line_count = body_scope
            .body(text)
            .lines()
            .filter(|l| !l.trim().is_empty())
            .count();

        if line_count > MAX_METHOD_LINES {
            alerts.push(format!(
                "Method '{}' is too long ({} lines). Consider splitting or refactoring.",
                method.declaration.name, line_count
            ));
        }
    }

    alerts
}

/// A declared parameter that never occurs inside its method's body.
fn unused_parameters(text: &str) -> Vec<String> {
    let mut violations = Vec::new();

    for method in matchers::find_methods(text) {
        let Ok(body_scope) = scope::extract(text, method.declaration.start) else {
            continue;
        };
        let body = body_scope.body(text);

        for parameter in &method.parameters {
            let pattern = format!(r"\b{}\b", regex::escape(parameter));
            let used = Regex::new(&pattern).map(|re| re.is_match(body)).unwrap_or(true);
            if !used {
                violations.push(format!(
                    "Parameter '{}' in method '{}' is never used.",
                    parameter, method.declaration.name
                ));
            }
        }
    }

    violations
}

/// Empty catch blocks; reported once per file, not per occurrence.
fn empty_catch_blocks(text: &str) -> Vec<String> {
    if EMPTY_CATCH.is_match(text) {
        vec!["Empty or silent catch block detected. Consider logging or rethrowing.".to_string()]
    } else {
        Vec::new()
    }
}

/// A `g`-prefixed field whose identifier occurs only at its declaration.
fn unused_fields(text: &str) -> Vec<String> {
    let mut violations = Vec::new();

    for caps in GLOBAL_FIELD.captures_iter(text) {
        let name = &caps[2];
        let pattern = format!(r"\b{}\b", regex::escape(name));
        let Ok(re) = Regex::new(&pattern) else {
            continue;
        };
        if re.find_iter(text).count() <= 1 {
            violations.push(format!(
                "Global field '{}' is declared but never used.",
                name
            ));
        }
    }

    violations
}

/// A public constructor with a blank or comment-only body.
fn empty_public_constructors(text: &str) -> Vec<String> {
    let mut violations = Vec::new();

    for ctor in matchers::find_all(text, DeclarationKind::Constructor) {
        if ctor.access != AccessModifier::Public {
            continue;
        }
        let Ok(body_scope) = scope::extract(text, ctor.start) else {
            continue;
        };
        let body = body_scope.body(text).trim();
        if body.is_empty() || comment_only(body) {
            violations.push(format!("Public constructor for '{}' is empty.", ctor.name));
        }
    }

    violations
}

/// A value-returning method whose body never mentions `return`.
fn missing_returns(text: &str) -> Vec<String> {
    let mut violations = Vec::new();

    for method in matchers::find_methods(text) {
        if is_void_like(&method.return_type) {
            continue;
        }
        let Ok(body_scope) = scope::extract(text, method.declaration.start) else {
            continue;
        };
        if !RETURN_KEYWORD.is_match(body_scope.body(text)) {
            violations.push(format!(
                "Method '{}' declares return type '{}' but may exit without returning.",
                method.declaration.name, method.return_type
            ));
        }
    }

    violations
}

fn is_void_like(return_type: &str) -> bool {
    return_type == "void"
        || return_type == "Task"
        || return_type.starts_with("Task<")
        || return_type == "ValueTask"
        || return_type.starts_with("ValueTask<")
}

fn comment_only(body: &str) -> bool {
    body.lines()
        .map(str::trim)
        .all(|l| l.is_empty() || l.starts_with("//"))
}
