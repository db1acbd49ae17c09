//! Attribute decoding.
//!
//! Splits a token's raw attribute text into `(name, value)` pairs. Decoding
//! never fails: stray characters end up inside a name, and such a name can
//! never match a sensible attribute pattern.

/// A decoded attribute from a tag's raw attribute text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeAssignment {
    /// Lowercased attribute name.
    pub name: String,
    /// Attribute value without quotes; `None` for a valueless attribute.
    pub value: Option<String>,
}

impl AttributeAssignment {
    /// The text tested against attribute patterns.
    ///
    /// Any valued form (`name="v"`, `name='v'`, `name=v`) renders as
    /// `name="v"`; a valueless attribute renders as its bare name.
    #[must_use]
    pub fn render(&self) -> String {
        match &self.value {
            Some(value) => format!("{}=\"{value}\"", self.name),
            None => self.name.clone(),
        }
    }
}

/// Decode every attribute in `raw`, in source order.
#[must_use]
pub fn parse_attributes(raw: &str) -> Vec<AttributeAssignment> {
    let mut assignments = Vec::new();
    let mut rest = raw.trim_start();

    while !rest.is_empty() {
        let name_end = rest
            .find(|c: char| c.is_whitespace() || c == '=')
            .unwrap_or(rest.len());
        let name = rest[..name_end].to_ascii_lowercase();
        rest = &rest[name_end..];

        let value = if let Some(after_eq) = rest.trim_start().strip_prefix('=') {
            let (value, remainder) = split_value(after_eq.trim_start());
            rest = remainder;
            Some(value.to_owned())
        } else {
            None
        };

        assignments.push(AttributeAssignment { name, value });
        rest = rest.trim_start();
    }

    assignments
}

/// Split a value off the front of `input`, returning `(value, remainder)`.
/// An unterminated quote runs to the end of the input.
fn split_value(input: &str) -> (&str, &str) {
    match input.chars().next() {
        Some(quote @ ('"' | '\'')) => {
            let body = &input[1..];
            match body.find(quote) {
                Some(end) => (&body[..end], &body[end + 1..]),
                None => (body, ""),
            }
        }
        _ => {
            let end = input.find(char::is_whitespace).unwrap_or(input.len());
            input.split_at(end)
        }
    }
}
