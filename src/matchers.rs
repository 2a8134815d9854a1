//! Structural declaration patterns.
//!
//! Each declaration kind is located by a named regex over raw file text.
//! Matching is textual and nesting-blind by design: a nested type is matched
//! exactly like a top-level one, and rule modules do any scope-relative
//! reasoning they need on top of these matches.

use lazy_static::lazy_static;
use regex::Regex;

/// The kinds of declarations the matchers can locate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Type,
    Method,
    Constructor,
    Field,
    Constant,
    Parameter,
}

/// Access modifier captured from a declaration, `Unspecified` when absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessModifier {
    Public,
    Protected,
    ProtectedInternal,
    Private,
    Internal,
    #[default]
    Unspecified,
}

impl AccessModifier {
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "public" => AccessModifier::Public,
            "protected" => AccessModifier::Protected,
            "protected internal" => AccessModifier::ProtectedInternal,
            "private" => AccessModifier::Private,
            "internal" => AccessModifier::Internal,
            _ => AccessModifier::Unspecified,
        }
    }

    /// Visible outside the assembly, directly or to derived types.
    pub fn is_exposed(&self) -> bool {
        matches!(
            self,
            AccessModifier::Public | AccessModifier::Protected | AccessModifier::ProtectedInternal
        )
    }
}

/// A textual declaration occurrence. Produced transiently per query and
/// never persisted.
#[derive(Debug, Clone)]
pub struct Declaration {
    pub kind: DeclarationKind,
    pub access: AccessModifier,
    pub name: String,
    /// Byte offset where the matched signature begins.
    pub start: usize,
    /// Byte offset one past the matched signature text.
    pub end: usize,
}

/// A type declaration with its kind keyword (`class`, `struct`, ...).
#[derive(Debug, Clone)]
pub struct TypeSignature {
    pub declaration: Declaration,
    pub keyword: String,
}

/// A method declaration with the pieces rules reason about.
#[derive(Debug, Clone)]
pub struct MethodSignature {
    pub declaration: Declaration,
    pub return_type: String,
    pub parameters: Vec<String>,
}

lazy_static! {
    /// Type declarations: optional access, optional modifiers, kind keyword,
    /// identifier. Anchored to line starts so expressions like
    /// `typeof(class)` noise is not picked up.
    static ref TYPE_DECL: Regex = Regex::new(
        r"(?m)^[ \t]*(?:(public|protected internal|protected|internal|private)\s+)?(?:(?:abstract|sealed|static|partial|readonly)\s+)*(class|interface|struct|record|enum|delegate)\s+(\w+)"
    ).unwrap();

    /// Block-bodied methods: access, modifiers, space-free return type,
    /// identifier, parameter list, opening brace. Generic return types
    /// containing spaces are not matched; accepted heuristic.
    static ref METHOD_DECL: Regex = Regex::new(
        r"(?m)\b(public|protected internal|protected|internal|private)\s+(?:(?:static|virtual|override|sealed|abstract|async|partial|new|unsafe)\s+)*([\w<>\[\]\?]+)\s+(\w+)\s*\(([^)]*)\)\s*\{"
    ).unwrap();

    /// Constructors: access, single identifier, parameter list, opening
    /// brace. No return type distinguishes this from the method shape.
    static ref CTOR_DECL: Regex = Regex::new(
        r"(?m)\b(public|protected|internal|private)\s+(\w+)\s*\(([^)]*)\)\s*\{"
    ).unwrap();

    /// Non-constant fields with an access modifier, with or without an
    /// initializer.
    static ref FIELD_DECL: Regex = Regex::new(
        r"(?m)\b(public|protected internal|protected|internal|private)\s+(?:(?:static|readonly|volatile)\s+)*([\w<>\[\]\?]+)\s+(\w+)\s*[=;]"
    ).unwrap();

    /// `const` declarations; the access group is absent for method-local
    /// constants.
    static ref CONST_DECL: Regex = Regex::new(
        r"(?m)\b(?:(public|protected internal|protected|internal|private)\s+)?const\s+[\w<>\[\]\?]+\s+(\w+)\s*="
    ).unwrap();

    /// Any parenthesized list; used to enumerate parameter declarations.
    static ref PARAM_LIST: Regex = Regex::new(r"\(([^)]*)\)").unwrap();

    static ref IDENTIFIER: Regex = Regex::new(r"^[A-Za-z_]\w*$").unwrap();
}

/// Locate every declaration of `kind` in `text`.
pub fn find_all(text: &str, kind: DeclarationKind) -> Vec<Declaration> {
    match kind {
        DeclarationKind::Type => find_types(text)
            .into_iter()
            .map(|t| t.declaration)
            .collect(),
        DeclarationKind::Method => find_methods(text)
            .into_iter()
            .map(|m| m.declaration)
            .collect(),
        DeclarationKind::Constructor => find_constructors(text),
        DeclarationKind::Field => find_fields(text),
        DeclarationKind::Constant => find_constants(text),
        DeclarationKind::Parameter => find_parameters(text),
    }
}

/// Type declarations with their kind keyword.
pub fn find_types(text: &str) -> Vec<TypeSignature> {
    TYPE_DECL
        .captures_iter(text)
        .map(|caps| {
            let m = caps.get(0).unwrap();
            TypeSignature {
                declaration: Declaration {
                    kind: DeclarationKind::Type,
                    access: access_of(&caps, 1),
                    name: caps[3].to_string(),
                    start: m.start(),
                    end: m.end(),
                },
                keyword: caps[2].to_string(),
            }
        })
        .collect()
}

/// Block-bodied method declarations with return type and parameter names.
pub fn find_methods(text: &str) -> Vec<MethodSignature> {
    METHOD_DECL
        .captures_iter(text)
        .map(|caps| {
            let m = caps.get(0).unwrap();
            MethodSignature {
                declaration: Declaration {
                    kind: DeclarationKind::Method,
                    access: access_of(&caps, 1),
                    name: caps[3].to_string(),
                    start: m.start(),
                    end: m.end(),
                },
                return_type: caps[2].to_string(),
                parameters: parameter_names(&caps[4]),
            }
        })
        .collect()
}

fn find_constructors(text: &str) -> Vec<Declaration> {
    CTOR_DECL
        .captures_iter(text)
        .map(|caps| {
            let m = caps.get(0).unwrap();
            Declaration {
                kind: DeclarationKind::Constructor,
                access: access_of(&caps, 1),
                name: caps[2].to_string(),
                start: m.start(),
                end: m.end(),
            }
        })
        .collect()
}

fn find_fields(text: &str) -> Vec<Declaration> {
    FIELD_DECL
        .captures_iter(text)
        .map(|caps| {
            let m = caps.get(0).unwrap();
            Declaration {
                kind: DeclarationKind::Field,
                access: access_of(&caps, 1),
                name: caps[3].to_string(),
                start: m.start(),
                end: m.end(),
            }
        })
        .collect()
}

fn find_constants(text: &str) -> Vec<Declaration> {
    CONST_DECL
        .captures_iter(text)
        .map(|caps| {
            let m = caps.get(0).unwrap();
            Declaration {
                kind: DeclarationKind::Constant,
                access: access_of(&caps, 1),
                name: caps[2].to_string(),
                start: m.start(),
                end: m.end(),
            }
        })
        .collect()
}

fn find_parameters(text: &str) -> Vec<Declaration> {
    let mut out = Vec::new();
    for caps in PARAM_LIST.captures_iter(text) {
        let list = caps.get(1).unwrap();
        for name in parameter_names(list.as_str()) {
            out.push(Declaration {
                kind: DeclarationKind::Parameter,
                access: AccessModifier::Unspecified,
                name,
                start: list.start(),
                end: list.end(),
            });
        }
    }
    out
}

fn access_of(caps: &regex::Captures<'_>, group: usize) -> AccessModifier {
    caps.get(group)
        .map(|g| AccessModifier::parse(g.as_str()))
        .unwrap_or_default()
}

/// Parameter identifiers from a comma-separated parameter list.
///
/// Each segment's name is the last whitespace token before any default
/// value, and a segment only counts as a parameter when a type token
/// precedes the name. Bare single-token segments (call-site arguments) and
/// segments produced by splitting inside generic arguments are dropped.
pub fn parameter_names(list: &str) -> Vec<String> {
    list.split(',')
        .filter_map(|segment| {
            let segment = segment.split('=').next().unwrap_or("").trim();
            let mut tokens = segment.split_whitespace();
            let first = tokens.next()?;
            let name = tokens.last().unwrap_or(first);
            if name == first {
                return None;
            }
            IDENTIFIER.is_match(name).then(|| name.to_string())
        })
        .collect()
}
