//! # markup-guard
//!
//! Whitelist-based markup validator.
//!
//! Given a fragment of markup, a [`Validator`] decides whether it uses only
//! allowed tags, only allowed attributes, and whether its tags close and
//! nest correctly. It never rewrites input: the answer is a
//! [`ValidationOutcome`], carrying a [`Violation`] on rejection.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. every tag name is in the tag whitelist,
//! 2. tags close and nest correctly,
//! 3. every attribute, as `name="value"`, is in the attribute whitelist.
//!
//! ## Quick Start
//!
//! ```rust
//! use markup_guard::{Validator, ViolationKind, presets};
//!
//! let validator = Validator::from_config(&presets::basic_html()).unwrap();
//!
//! assert!(validator.is_valid("<strong>Bold</strong>"));
//!
//! let outcome = validator.validate(r#"<a href="https://x.com" data-test="1">x</a>"#);
//! let violation = outcome.violation().unwrap();
//! assert_eq!(violation.kind(), ViolationKind::DisallowedAttribute);
//! assert_eq!(violation.attribute(), Some("data-test"));
//! ```

mod attributes;
mod config;
mod nesting;
mod outcome;
mod pattern;
pub mod presets;
mod scanner;
mod validator;
mod whitelist;

pub use attributes::{AttributeAssignment, parse_attributes};
pub use config::{ConfigError, WhitelistConfig};
pub use nesting::{NestingError, check_nesting};
pub use outcome::{ValidationOutcome, Violation, ViolationKind};
pub use pattern::{AttributePattern, PatternError, TagPattern};
pub use scanner::{Token, TokenKind, scan, scan_with};
pub use validator::{Validate, Validator, ValidatorConfig};
pub use whitelist::{check_allowed_attributes, check_allowed_tags};
