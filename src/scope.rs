//! Balanced-brace scope extraction.
//!
//! Given the start of a declaration signature, finds the `{ ... }` body that
//! belongs to it by counting brace depth. This is lexical scanning, not
//! parsing: braces inside string or character literals and inside comments
//! are counted as structural braces. That trade-off is accepted and pinned
//! by tests rather than hidden.

use thiserror::Error;

/// How far past the signature to look for an opening brace before deciding
/// the declaration has no block body (auto-properties, expression-bodied
/// members, abstract signatures).
const OPEN_BRACE_LOOKAHEAD: usize = 512;

/// Why a scope could not be extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScopeError {
    /// No opening brace within the lookahead window, or a `;` terminated the
    /// declaration first. Callers treat this as "no scope", not a failure.
    #[error("declaration has no block body")]
    NoBlock,
    /// Brace depth never returned to zero before end of text.
    #[error("scope opened at byte {open} is never closed")]
    NotClosed { open: usize },
}

/// A balanced-brace body located in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scope {
    /// Byte offset of the opening `{`.
    pub open: usize,
    /// Byte offset of the matching `}`.
    pub close: usize,
}

impl Scope {
    /// The body text between the braces, exclusive of both.
    pub fn body<'a>(&self, text: &'a str) -> &'a str {
        &text[self.open + 1..self.close]
    }
}

/// Find the balanced-brace body following a declaration signature.
///
/// Scans forward from `signature_start` to the first `{`, then maintains a
/// depth counter until it returns to zero. `signature_start` is typically
/// the byte offset where a declaration match begins; any braces inside the
/// signature's parameter list do not occur in practice for the declaration
/// shapes we match.
pub fn extract(text: &str, signature_start: usize) -> Result<Scope, ScopeError> {
    let bytes = text.as_bytes();
    let window_end = bytes.len().min(signature_start.saturating_add(OPEN_BRACE_LOOKAHEAD));

    let mut open = None;
    let mut i = signature_start;
    while i < window_end {
        match bytes[i] {
            b'{' => {
                open = Some(i);
                break;
            }
            b';' => return Err(ScopeError::NoBlock),
            _ => {}
        }
        i += 1;
    }
    let open = open.ok_or(ScopeError::NoBlock)?;

    let mut depth: usize = 0;
    for (j, &b) in bytes.iter().enumerate().skip(open) {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(Scope { open, close: j });
                }
            }
            _ => {}
        }
    }

    Err(ScopeError::NotClosed { open })
}
