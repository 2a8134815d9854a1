//! Identifier prefix conventions.
//!
//! Independent sub-checks, each driven by its own pattern: local variables
//! start with `_`, access-modified fields with `g`, access-modified
//! constants with `gc`, method-local constants with `_c`, and parameters
//! start lowercase.

use lazy_static::lazy_static;
use regex::Regex;

use crate::matchers::{self, AccessModifier, DeclarationKind};

lazy_static! {
    /// A local declaration: primitive or `var`-like keyword, identifier,
    /// then an initializer or terminator.
    static ref LOCAL_VAR: Regex = Regex::new(
        r"\b(var|int|uint|long|ulong|short|ushort|byte|sbyte|bool|double|float|decimal|char|string|object)\s+([A-Za-z_]\w*)\s*[=;]"
    ).unwrap();

    /// Modifier keywords that mark the same line as a member declaration,
    /// not a method-local statement.
    static ref MEMBER_PREFIX: Regex = Regex::new(
        r"(public|protected|internal|private|static|readonly|const|volatile)\s*$"
    ).unwrap();
}

/// Check identifier prefixes across the whole file.
pub fn check(text: &str) -> Vec<String> {
    let mut violations = Vec::new();
    local_variables(text, &mut violations);
    global_fields(text, &mut violations);
    constants(text, &mut violations);
    parameter_case(text, &mut violations);
    violations
}

/// Local variables must start with `_`. Identifiers inside a parameter list
/// are exempt, as are `g`/`gc`-prefixed names the field patterns also reach.
fn local_variables(text: &str, violations: &mut Vec<String>) {
    for caps in LOCAL_VAR.captures_iter(text) {
        let m = caps.get(0).unwrap();
        let name = &caps[2];
        if name.starts_with('_') || name.starts_with('g') {
            continue;
        }
        if in_parameter_list(text, m.start()) {
            continue;
        }
        if is_member_declaration_line(text, m.start()) {
            continue;
        }
        violations.push(format!("Local variable '{}' should start with '_'.", name));
    }
}

/// Non-constant fields with an access modifier must start with `g`.
fn global_fields(text: &str, violations: &mut Vec<String>) {
    for field in matchers::find_all(text, DeclarationKind::Field) {
        if !field.name.starts_with('g') {
            violations.push(format!(
                "Global field '{}' should start with 'g'.",
                field.name
            ));
        }
    }
}

/// Access-modified constants must start with `gc`; local constants with `_c`.
fn constants(text: &str, violations: &mut Vec<String>) {
    for constant in matchers::find_all(text, DeclarationKind::Constant) {
        match constant.access {
            AccessModifier::Unspecified => {
                if !constant.name.starts_with("_c") {
                    violations.push(format!(
                        "Local constant '{}' should start with '_c'.",
                        constant.name
                    ));
                }
            }
            _ => {
                if !constant.name.starts_with("gc") {
                    violations.push(format!(
                        "Global constant '{}' should start with 'gc'.",
                        constant.name
                    ));
                }
            }
        }
    }
}

/// Declared parameters must start with a lowercase letter.
fn parameter_case(text: &str, violations: &mut Vec<String>) {
    for parameter in matchers::find_all(text, DeclarationKind::Parameter) {
        if parameter.name.starts_with(char::is_uppercase) {
            violations.push(format!(
                "Parameter '{}' should start with lowercase.",
                parameter.name
            ));
        }
    }
}

/// Walk backward from `pos` to the nearest unclosed opener. If it is a `(`
/// the match sits in a signature's parameter list, not a body.
fn in_parameter_list(text: &str, pos: usize) -> bool {
    let mut closed_parens = 0u32;
    let mut closed_braces = 0u32;
    for &b in text.as_bytes()[..pos].iter().rev() {
        match b {
            b')' => closed_parens += 1,
            b'(' => {
                if closed_parens == 0 {
                    return true;
                }
                closed_parens -= 1;
            }
            b'}' => closed_braces += 1,
            b'{' => {
                if closed_braces == 0 {
                    return false;
                }
                closed_braces -= 1;
            }
            _ => {}
        }
    }
    false
}

/// True when the text immediately before `pos` on the same line ends with a
/// member modifier, meaning the match is a field or constant declaration
/// handled by the dedicated checks.
fn is_member_declaration_line(text: &str, pos: usize) -> bool {
    let line_start = text[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0);
    MEMBER_PREFIX.is_match(text[line_start..pos].trim_end())
}
