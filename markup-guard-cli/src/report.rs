//! Per-input results and the run summary.

use markup_guard::{ValidationOutcome, Validator, ViolationKind};
use serde::Serialize;

/// One piece of markup to validate, with a label for output.
#[derive(Debug, Clone)]
pub struct Input {
    /// Where the text came from (`arg #1`, a file path, `<stdin>`).
    pub source: String,
    /// The markup itself.
    pub text: String,
}

/// Verdict for a single input.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct InputResult {
    /// Label of the input.
    pub source: String,
    /// Whether the input passed every check.
    pub valid: bool,
    /// Which check rejected the input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ViolationKind>,
    /// Implicated tag name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Rejected attribute name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    /// Byte offset of the offending tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    /// Human-readable reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl InputResult {
    /// Build a result from a validator outcome.
    #[must_use]
    pub fn from_outcome(source: String, outcome: &ValidationOutcome) -> Self {
        match outcome.violation() {
            None => Self {
                source,
                valid: true,
                kind: None,
                tag: None,
                attribute: None,
                position: None,
                message: None,
            },
            Some(violation) => Self {
                source,
                valid: false,
                kind: Some(violation.kind()),
                tag: violation.tag().map(str::to_owned),
                attribute: violation.attribute().map(str::to_owned),
                position: violation.position(),
                message: Some(violation.to_string()),
            },
        }
    }

    /// Format the result for human-readable output.
    ///
    /// `{source}: valid` or `{source}: {message} [{kind}]`
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        match (&self.message, self.kind) {
            (Some(message), Some(kind)) => {
                format!("{}: {message} [{}]", self.source, kind.as_str())
            }
            _ => format!("{}: valid", self.source),
        }
    }
}

/// Result of validating a batch of inputs.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct CheckReport {
    /// Whether every input passed.
    pub ok: bool,
    /// One result per input, in input order.
    pub results: Vec<InputResult>,
}

impl CheckReport {
    /// Validate every input with `validator`.
    #[must_use]
    pub fn run(validator: &Validator, inputs: &[Input]) -> Self {
        let results: Vec<InputResult> = inputs
            .iter()
            .map(|input| {
                let outcome = validator.validate(&input.text);
                InputResult::from_outcome(input.source.clone(), &outcome)
            })
            .collect();
        let ok = results.iter().all(|r| r.valid);
        Self { ok, results }
    }

    /// Number of rejected inputs.
    #[must_use]
    pub fn invalid_count(&self) -> usize {
        self.results.iter().filter(|r| !r.valid).count()
    }
}
