//! Tag scanner.
//!
//! Lexes markup text into an ordered sequence of [`Token`]s. The scanner is
//! total: text without recognizable tags yields an empty sequence, and
//! anything that does not have a tag shape is treated as plain text.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

/// Tag shape: `<`, optional `/`, ASCII letters, then either `>` directly,
/// a bare `/` (`<br/>`), or whitespace followed by raw attribute text.
static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(concat!(
        r"(?i)<",
        r"(/?)",          // closing marker
        r"([a-z]+)",      // tag name
        r"(\s[^>]*|/)?", // raw attribute text
        r">",
    )) {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid tag regex: {err}"),
    }
});

/// Whether a token opens, closes, or opens-and-closes a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `<name ...>`
    Open,
    /// `</name>`
    Close,
    /// `<name ... />`, only produced when self-closing tags are enabled.
    SelfClosing,
}

impl TokenKind {
    /// Short lowercase label, used in logs and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Close => "close",
            Self::SelfClosing => "self-closing",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single scanned tag occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Lowercased tag name, used for every comparison.
    pub name: String,
    /// Opening, closing or self-closing form.
    pub kind: TokenKind,
    /// Raw attribute text with leading whitespace trimmed. Always empty for
    /// closing tags; the trailing `/` of a self-closing tag is stripped.
    pub attributes: String,
    /// Byte offset of the `<` in the scanned text.
    pub position: usize,
}

impl Token {
    /// Whether this token is a closing tag.
    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.kind == TokenKind::Close
    }

    /// `<name>` rendering of the normalized name.
    #[must_use]
    pub fn open_form(&self) -> String {
        format!("<{}>", self.name)
    }

    /// `</name>` rendering of the normalized name.
    #[must_use]
    pub fn close_form(&self) -> String {
        format!("</{}>", self.name)
    }
}

/// Scan `text` for tags. Self-closing tags are treated as ordinary opening tags.
#[must_use]
pub fn scan(text: &str) -> Vec<Token> {
    scan_with(text, false)
}

/// Scan `text` for tags, producing [`TokenKind::SelfClosing`] tokens for
/// `<name ... />` when `allow_self_closing` is set.
#[must_use]
pub fn scan_with(text: &str, allow_self_closing: bool) -> Vec<Token> {
    let mut tokens = Vec::new();

    for caps in TAG_PATTERN.captures_iter(text) {
        let (Some(whole), Some(raw_name)) = (caps.get(0), caps.get(2)) else {
            continue;
        };
        let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
        let raw_attributes = caps.get(3).map_or("", |m| m.as_str()).trim();

        let (kind, attributes) = if closing {
            (TokenKind::Close, "")
        } else if let Some(stripped) = raw_attributes
            .strip_suffix('/')
            .filter(|_| allow_self_closing)
        {
            (TokenKind::SelfClosing, stripped.trim_end())
        } else {
            (TokenKind::Open, raw_attributes)
        };

        let token = Token {
            name: raw_name.as_str().to_ascii_lowercase(),
            kind,
            attributes: attributes.to_owned(),
            position: whole.start(),
        };
        trace!(
            tag = %token.name,
            kind = %token.kind,
            position = token.position,
            "scanned tag"
        );
        tokens.push(token);
    }

    tokens
}
