//! Structural check: tags close, and close in the right order.

use thiserror::Error;

use crate::scanner::{Token, TokenKind};

/// Why a token sequence is not properly nested.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NestingError {
    /// A closing tag appeared while no tag was open.
    #[error("Closing tag </{tag}> has no matching opening tag")]
    UnexpectedClose {
        /// Name of the closing tag.
        tag: String,
        /// Byte offset of the closing tag.
        position: usize,
    },

    /// A closing tag did not match the innermost open tag.
    #[error("Closing tag </{found}> does not match innermost open tag <{expected}>")]
    MismatchedClose {
        /// Innermost open tag at that point.
        expected: String,
        /// Name of the closing tag actually found.
        found: String,
        /// Byte offset of the closing tag.
        position: usize,
    },

    /// Input ended with tags still open.
    #[error("Unclosed tags: {}", open.join(", "))]
    Unclosed {
        /// Every still-open tag, outermost first.
        open: Vec<String>,
    },
}

impl NestingError {
    /// The tag most directly implicated: the offending closing tag, or the
    /// innermost unclosed one.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::UnexpectedClose { tag, .. } => Some(tag),
            Self::MismatchedClose { found, .. } => Some(found),
            Self::Unclosed { open } => open.last().map(String::as_str),
        }
    }

    /// Byte offset of the offending closing tag, if there is one.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::UnexpectedClose { position, .. } | Self::MismatchedClose { position, .. } => {
                Some(*position)
            }
            Self::Unclosed { .. } => None,
        }
    }
}

/// Check that `tokens` close and nest correctly.
///
/// Single left-to-right pass over an explicit stack: opening tags push,
/// closing tags pop and must match, self-closing tags are ignored.
///
/// # Errors
/// Returns the first [`NestingError`] encountered, or
/// [`NestingError::Unclosed`] listing every tag left open at the end.
pub fn check_nesting(tokens: &[Token]) -> Result<(), NestingError> {
    let mut stack: Vec<&str> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::Open => stack.push(&token.name),
            TokenKind::SelfClosing => {}
            TokenKind::Close => {
                let Some(open) = stack.pop() else {
                    return Err(NestingError::UnexpectedClose {
                        tag: token.name.clone(),
                        position: token.position,
                    });
                };
                if open != token.name {
                    return Err(NestingError::MismatchedClose {
                        expected: open.to_owned(),
                        found: token.name.clone(),
                        position: token.position,
                    });
                }
            }
        }
    }

    if stack.is_empty() {
        Ok(())
    } else {
        Err(NestingError::Unclosed {
            open: stack.into_iter().map(str::to_owned).collect(),
        })
    }
}
