//! Ready-made whitelists.

use crate::config::WhitelistConfig;

/// Tags allowed by [`basic_html`].
pub const BASIC_TAGS: &[&str] = &["a", "i", "code", "strike", "strong"];

/// Attributes allowed by [`basic_html`], with any value.
pub const BASIC_ATTRIBUTES: &[&str] = &["href", "title"];

/// Inline formatting plus links: `a`, `i`, `code`, `strike`, `strong`,
/// with `href` and `title` attributes.
#[must_use]
pub fn basic_html() -> WhitelistConfig {
    WhitelistConfig {
        tags: BASIC_TAGS.iter().map(|&t| t.to_owned()).collect(),
        attributes: BASIC_ATTRIBUTES.iter().map(|&a| a.to_owned()).collect(),
        ..WhitelistConfig::default()
    }
}
