//! Output formatting for check reports.
//!
//! Color is applied with `colored`; the caller decides whether colors are
//! enabled (see [`colored::control::set_override`]).

use std::io::Write;

use colored::Colorize;

use crate::report::CheckReport;

/// Format a `CheckReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &CheckReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `CheckReport` as human-readable text to a writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &CheckReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    for result in &report.results {
        let marker = if result.valid {
            "\u{2713}".green()
        } else {
            "\u{2717}".red()
        };
        writeln!(writer, "{marker} {}", result.format_human_readable())?;
    }

    writeln!(writer, "{}", "-".repeat(60))?;
    let total = report.results.len();
    let summary = if report.ok {
        format!("All {total} input(s) passed validation")
            .as_str()
            .green()
    } else {
        format!("{} of {total} input(s) rejected", report.invalid_count())
            .as_str()
            .red()
    };
    writeln!(writer, "{summary}")?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::report::Input;
    use markup_guard::{Validator, presets};

    fn report(texts: &[&str]) -> CheckReport {
        colored::control::set_override(false);
        let validator = Validator::from_config(&presets::basic_html()).unwrap();
        let inputs: Vec<Input> = texts
            .iter()
            .enumerate()
            .map(|(i, text)| Input {
                source: format!("arg #{}", i + 1),
                text: (*text).to_owned(),
            })
            .collect();
        CheckReport::run(&validator, &inputs)
    }

    #[test]
    fn test_human_all_valid() {
        let mut out = Vec::new();
        write_human(&report(&["<i>x</i>"]), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("arg #1: valid"), "got: {text}");
        assert!(text.contains("All 1 input(s) passed validation"), "got: {text}");
    }

    #[test]
    fn test_human_with_rejection() {
        let mut out = Vec::new();
        write_human(&report(&["<i>x</i>", "<div>y</div>"]), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(
            text.contains("arg #2: Tag <div> is not allowed [disallowed_tag]"),
            "got: {text}"
        );
        assert!(text.contains("1 of 2 input(s) rejected"), "got: {text}");
    }

    #[test]
    fn test_json() {
        let mut out = Vec::new();
        write_json(&report(&[r#"<a data-test="1">x</a>"#]), &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["ok"], false);
        assert_eq!(value["results"][0]["kind"], "disallowed_attribute");
        assert_eq!(value["results"][0]["attribute"], "data-test");
        assert_eq!(value["results"][0]["tag"], "a");
    }
}
