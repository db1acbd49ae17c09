//! The validator engine: scan, then check tags, nesting and attributes.

use tracing::debug;

use crate::config::WhitelistConfig;
use crate::nesting::check_nesting;
use crate::outcome::{ValidationOutcome, Violation};
use crate::pattern::{AttributePattern, PatternError, TagPattern};
use crate::scanner::scan_with;
use crate::whitelist::{check_allowed_attributes, check_allowed_tags};

/// Compiled whitelist. Read-only once handed to a [`Validator`].
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct ValidatorConfig {
    /// Allowed tags; any match accepts a tag.
    pub tag_patterns: Vec<TagPattern>,
    /// Allowed attributes; any match accepts an attribute.
    pub attribute_patterns: Vec<AttributePattern>,
    /// Treat `<name ... />` as a tag that opens and closes itself.
    pub allow_self_closing: bool,
}

impl ValidatorConfig {
    /// Config with the given patterns and self-closing tags disabled.
    #[must_use]
    pub fn new(tag_patterns: Vec<TagPattern>, attribute_patterns: Vec<AttributePattern>) -> Self {
        Self {
            tag_patterns,
            attribute_patterns,
            allow_self_closing: false,
        }
    }

    /// Enable or disable self-closing tags.
    #[must_use]
    pub fn with_self_closing(mut self, allow: bool) -> Self {
        self.allow_self_closing = allow;
        self
    }
}

/// Anything that can judge a piece of markup.
pub trait Validate {
    /// Validate `input`, returning the verdict and the reason for a rejection.
    fn validate(&self, input: &str) -> ValidationOutcome;
}

/// Whitelist markup validator.
///
/// Built once and reused across calls; each call allocates its own tokens
/// and stack, so a shared `&Validator` can be used from many threads.
#[derive(Debug, Clone)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    /// Build a validator from tag and attribute patterns.
    #[must_use]
    pub fn new(tag_patterns: Vec<TagPattern>, attribute_patterns: Vec<AttributePattern>) -> Self {
        Self::with_config(ValidatorConfig::new(tag_patterns, attribute_patterns))
    }

    /// Build a validator from an already compiled config.
    #[must_use]
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Compile a declarative whitelist into a validator.
    ///
    /// # Errors
    /// Returns a [`PatternError`] if any name or regex in `config` is invalid.
    pub fn from_config(config: &WhitelistConfig) -> Result<Self, PatternError> {
        Ok(Self::with_config(config.compile()?))
    }

    /// The compiled whitelist.
    #[must_use]
    pub const fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate `text`.
    ///
    /// Checks run in a fixed order and stop at the first failure:
    /// allowed tags, then nesting, then allowed attributes.
    pub fn validate(&self, text: &str) -> ValidationOutcome {
        self.check(text).into()
    }

    /// Whether `text` passes every check.
    #[must_use]
    pub fn is_valid(&self, text: &str) -> bool {
        self.check(text).is_ok()
    }

    /// Same as [`Validator::validate`], as a `Result`.
    ///
    /// # Errors
    /// Returns the [`Violation`] from the first failing check.
    pub fn check(&self, text: &str) -> Result<(), Violation> {
        let tokens = scan_with(text, self.config.allow_self_closing);
        debug!(tokens = tokens.len(), "validating markup");

        check_allowed_tags(&tokens, &self.config.tag_patterns)?;
        check_nesting(&tokens).inspect_err(|err| debug!(%err, "malformed nesting"))?;
        check_allowed_attributes(&tokens, &self.config.attribute_patterns)?;
        Ok(())
    }
}

impl Validate for Validator {
    fn validate(&self, input: &str) -> ValidationOutcome {
        self.check(input).into()
    }
}
