//! Validation outcome and failure taxonomy.

use serde::Serialize;
use thiserror::Error;

use crate::nesting::NestingError;

/// The three ways input can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A tag is not in the tag whitelist.
    DisallowedTag,
    /// Tags do not close or nest correctly.
    MalformedNesting,
    /// An attribute is not in the attribute whitelist.
    DisallowedAttribute,
}

impl ViolationKind {
    /// Snake-case label, matching the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DisallowedTag => "disallowed_tag",
            Self::MalformedNesting => "malformed_nesting",
            Self::DisallowedAttribute => "disallowed_attribute",
        }
    }
}

/// Why an input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// A scanned tag matches no tag pattern, in either form.
    #[error("Tag <{tag}> is not allowed")]
    DisallowedTag {
        /// Normalized tag name.
        tag: String,
        /// Byte offset of the tag.
        position: usize,
    },

    /// The tags do not close or nest correctly.
    #[error(transparent)]
    MalformedNesting(#[from] NestingError),

    /// An attribute matches no attribute pattern.
    #[error("Attribute '{attribute}' is not allowed on <{tag}>")]
    DisallowedAttribute {
        /// Lowercased attribute name.
        attribute: String,
        /// Normalized name of the owning tag.
        tag: String,
        /// Byte offset of the owning tag.
        position: usize,
    },
}

impl Violation {
    /// Which check rejected the input.
    #[must_use]
    pub const fn kind(&self) -> ViolationKind {
        match self {
            Self::DisallowedTag { .. } => ViolationKind::DisallowedTag,
            Self::MalformedNesting(_) => ViolationKind::MalformedNesting,
            Self::DisallowedAttribute { .. } => ViolationKind::DisallowedAttribute,
        }
    }

    /// The implicated tag name, when there is one.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::DisallowedTag { tag, .. } | Self::DisallowedAttribute { tag, .. } => Some(tag),
            Self::MalformedNesting(err) => err.tag(),
        }
    }

    /// The rejected attribute name, for [`Violation::DisallowedAttribute`].
    #[must_use]
    pub fn attribute(&self) -> Option<&str> {
        match self {
            Self::DisallowedAttribute { attribute, .. } => Some(attribute),
            Self::DisallowedTag { .. } | Self::MalformedNesting(_) => None,
        }
    }

    /// Byte offset of the offending tag, when there is one.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::DisallowedTag { position, .. } | Self::DisallowedAttribute { position, .. } => {
                Some(*position)
            }
            Self::MalformedNesting(err) => err.position(),
        }
    }
}

/// Result of validating one input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum ValidationOutcome {
    /// Every check passed.
    Valid,
    /// The first failing check's reason.
    Invalid(Violation),
}

impl ValidationOutcome {
    /// Whether every check passed.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The rejection reason, if any.
    #[must_use]
    pub const fn violation(&self) -> Option<&Violation> {
        match self {
            Self::Valid => None,
            Self::Invalid(violation) => Some(violation),
        }
    }

    /// Convert into a `Result` for use with `?`.
    ///
    /// # Errors
    /// Returns the [`Violation`] when the outcome is invalid.
    pub fn into_result(self) -> Result<(), Violation> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(violation) => Err(violation),
        }
    }
}

impl From<Result<(), Violation>> for ValidationOutcome {
    fn from(result: Result<(), Violation>) -> Self {
        match result {
            Ok(()) => Self::Valid,
            Err(violation) => Self::Invalid(violation),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_disallowed_tag_accessors() {
        let violation = Violation::DisallowedTag {
            tag: "div".to_owned(),
            position: 3,
        };
        assert_eq!(violation.kind(), ViolationKind::DisallowedTag);
        assert_eq!(violation.tag(), Some("div"));
        assert_eq!(violation.attribute(), None);
        assert_eq!(violation.position(), Some(3));
        assert_eq!(violation.to_string(), "Tag <div> is not allowed");
    }

    #[test]
    fn test_disallowed_attribute_accessors() {
        let violation = Violation::DisallowedAttribute {
            attribute: "data-test".to_owned(),
            tag: "a".to_owned(),
            position: 0,
        };
        assert_eq!(violation.kind(), ViolationKind::DisallowedAttribute);
        assert_eq!(violation.tag(), Some("a"));
        assert_eq!(violation.attribute(), Some("data-test"));
        assert_eq!(
            violation.to_string(),
            "Attribute 'data-test' is not allowed on <a>"
        );
    }

    #[test]
    fn test_nesting_display_is_transparent() {
        let violation = Violation::from(NestingError::Unclosed {
            open: vec!["strong".to_owned()],
        });
        assert_eq!(violation.kind(), ViolationKind::MalformedNesting);
        assert_eq!(violation.to_string(), "Unclosed tags: strong");
        assert_eq!(violation.position(), None);
    }

    #[test]
    fn test_outcome_from_result() {
        assert!(ValidationOutcome::from(Ok::<(), Violation>(())).is_valid());
        let outcome = ValidationOutcome::from(Err::<(), Violation>(Violation::DisallowedTag {
            tag: "div".to_owned(),
            position: 0,
        }));
        assert!(!outcome.is_valid());
        assert_eq!(
            outcome.violation().map(Violation::kind),
            Some(ViolationKind::DisallowedTag)
        );
        assert!(outcome.into_result().is_err());
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ViolationKind::MalformedNesting).unwrap();
        assert_eq!(json, "\"malformed_nesting\"");
        assert_eq!(ViolationKind::MalformedNesting.as_str(), "malformed_nesting");
    }
}
