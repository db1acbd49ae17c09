//! Whitelist checks over scanned tokens. Both fail fast on the first miss.

use tracing::debug;

use crate::attributes::parse_attributes;
use crate::outcome::Violation;
use crate::pattern::{AttributePattern, TagPattern};
use crate::scanner::Token;

/// Check that every token's tag name matches at least one tag pattern.
///
/// Opening and closing forms are treated alike. With no patterns, any tag
/// is rejected.
///
/// # Errors
/// Returns [`Violation::DisallowedTag`] for the first unmatched token.
pub fn check_allowed_tags(tokens: &[Token], patterns: &[TagPattern]) -> Result<(), Violation> {
    for token in tokens {
        if !patterns.iter().any(|p| p.matches(token)) {
            debug!(tag = %token.name, position = token.position, "tag not in whitelist");
            return Err(Violation::DisallowedTag {
                tag: token.name.clone(),
                position: token.position,
            });
        }
    }
    Ok(())
}

/// Check that every attribute on every token matches at least one
/// attribute pattern. Runs over all tokens, regardless of whether their
/// tag is allowed; a tag without attributes passes trivially.
///
/// # Errors
/// Returns [`Violation::DisallowedAttribute`] for the first unmatched attribute.
pub fn check_allowed_attributes(
    tokens: &[Token],
    patterns: &[AttributePattern],
) -> Result<(), Violation> {
    for token in tokens {
        for assignment in parse_attributes(&token.attributes) {
            let rendered = assignment.render();
            if !patterns.iter().any(|p| p.matches(&rendered)) {
                debug!(
                    tag = %token.name,
                    attribute = %assignment.name,
                    position = token.position,
                    "attribute not in whitelist"
                );
                return Err(Violation::DisallowedAttribute {
                    attribute: assignment.name,
                    tag: token.name.clone(),
                    position: token.position,
                });
            }
        }
    }
    Ok(())
}
