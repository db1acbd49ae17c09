//! Whitelist entries: allowed tags and allowed attributes.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use thiserror::Error;

use crate::scanner::Token;

/// Tag name at the start of one `|` alternative of a tag regex: the `a` in
/// `<a href="[^"]*">` or `<\/a>`. The name must end the alternative or be
/// followed by whitespace or `>`.
static ENCODED_TAG: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(concat!(
        r"(?i)^\^?<",
        r"(?:\\?/)?", // closing marker, possibly escaped
        r"([a-z]+)",
        r"(?:[\s>]|$)",
    )) {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid encoded tag regex: {err}"),
    }
});

/// Errors from building a whitelist pattern.
#[derive(Debug, Error)]
pub enum PatternError {
    /// A regex pattern failed to compile.
    #[error("Invalid {target} pattern '{pattern}': {source}")]
    Regex {
        /// `"tag"` or `"attribute"`.
        target: &'static str,
        /// The pattern source as supplied.
        pattern: String,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// A bare name can never match a scanned tag or attribute.
    #[error("Invalid {target} name '{name}': {cause}")]
    Name {
        /// `"tag"` or `"attribute"`.
        target: &'static str,
        /// The name as supplied.
        name: String,
        /// Human-readable description of the problem.
        cause: &'static str,
    },
}

#[derive(Debug, Clone)]
enum TagMatcher {
    Name(String),
    Regex {
        source: String,
        regex: Regex,
        encoded: Vec<String>,
    },
}

/// An allowed tag, independent of opening/closing form.
#[derive(Debug, Clone)]
pub struct TagPattern(TagMatcher);

impl TagPattern {
    /// Allow the tag with exactly this name (ASCII letters, any case).
    ///
    /// # Errors
    /// Returns [`PatternError::Name`] if `name` is empty or contains anything
    /// but ASCII letters, since the scanner never produces such a tag.
    pub fn name(name: &str) -> Result<Self, PatternError> {
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(PatternError::Name {
                target: "tag",
                name: name.to_owned(),
                cause: "must be one or more ASCII letters",
            });
        }
        Ok(Self(TagMatcher::Name(name.to_ascii_lowercase())))
    }

    /// Allow every tag for which `<name>` or `</name>` contains a match of
    /// `pattern` (case-insensitive), e.g. `<a>|</a>` or `</?(em|u)>`.
    ///
    /// A pattern written for a full opening tag, such as
    /// `<a href="[^"]*" title="[^"]*">`, never matches the bare forms; the
    /// tag names leading each `|` alternative are allowed as well.
    ///
    /// # Errors
    /// Returns [`PatternError::Regex`] if `pattern` does not compile.
    pub fn regex(pattern: &str) -> Result<Self, PatternError> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| PatternError::Regex {
                target: "tag",
                pattern: pattern.to_owned(),
                source,
            })?;
        let encoded = pattern
            .split('|')
            .filter_map(|alternative| ENCODED_TAG.captures(alternative.trim()))
            .filter_map(|caps| caps.get(1))
            .map(|name| name.as_str().to_ascii_lowercase())
            .collect();
        Ok(Self(TagMatcher::Regex {
            source: pattern.to_owned(),
            regex,
            encoded,
        }))
    }

    /// Test a scanned tag, in either its opening or closing form.
    #[must_use]
    pub fn matches(&self, token: &Token) -> bool {
        match &self.0 {
            TagMatcher::Name(name) => *name == token.name,
            TagMatcher::Regex { regex, encoded, .. } => {
                regex.is_match(&token.open_form())
                    || regex.is_match(&token.close_form())
                    || encoded.iter().any(|name| *name == token.name)
            }
        }
    }

    /// The name or regex source this pattern was built from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match &self.0 {
            TagMatcher::Name(name) => name,
            TagMatcher::Regex { source, .. } => source,
        }
    }
}

/// An allowed attribute, tested against the rendered `name="value"` text.
#[derive(Debug, Clone)]
pub struct AttributePattern {
    source: String,
    regex: Regex,
}

impl AttributePattern {
    /// Allow `name="..."` with any value, including an empty one.
    ///
    /// # Errors
    /// Returns [`PatternError::Name`] if `name` is empty or contains
    /// whitespace, `=`, quotes or `>`.
    pub fn name(name: &str) -> Result<Self, PatternError> {
        let invalid = |c: char| c.is_whitespace() || matches!(c, '=' | '"' | '\'' | '>');
        if name.is_empty() || name.chars().any(invalid) {
            return Err(PatternError::Name {
                target: "attribute",
                name: name.to_owned(),
                cause: "must be non-empty without whitespace, '=', quotes or '>'",
            });
        }
        let lowered = name.to_ascii_lowercase();
        let pattern = format!("^{}=\"[^\"]*\"$", regex::escape(&lowered));
        let regex = Regex::new(&pattern).map_err(|source| PatternError::Regex {
            target: "attribute",
            pattern,
            source,
        })?;
        Ok(Self {
            source: lowered,
            regex,
        })
    }

    /// Allow every attribute whose rendered `name="value"` text contains a
    /// match of `pattern`. Matching is case-sensitive; names are already
    /// lowercased when rendered, so anchor and write names in lowercase,
    /// e.g. `^href="https://[^"]+"$`.
    ///
    /// # Errors
    /// Returns [`PatternError::Regex`] if `pattern` does not compile.
    pub fn regex(pattern: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(pattern).map_err(|source| PatternError::Regex {
            target: "attribute",
            pattern: pattern.to_owned(),
            source,
        })?;
        Ok(Self {
            source: pattern.to_owned(),
            regex,
        })
    }

    /// Test a rendered attribute (`name="value"` or bare `name`).
    #[must_use]
    pub fn matches(&self, rendered: &str) -> bool {
        self.regex.is_match(rendered)
    }

    /// The name or regex source this pattern was built from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }
}
