//! Sample inputs run by `markup-guard demo` against the basic preset.

use crate::report::Input;

/// Sample markup with the verdict the basic preset is expected to give.
pub const SCENARIOS: &[(&str, bool)] = &[
    ("<strong>Bold text</strong>", true),
    (r#"<a href="https://google.com" title="Google">google</a>"#, true),
    (
        r#"<a href="https://google.com" title="Google" data-test="1">google</a>"#,
        false,
    ),
    (
        "<strong>Bold text <i>italic with crossed closing</strong></i>",
        false,
    ),
    ("<strong>Unclosed tag", false),
    (r#"<div>block</div><a href="https://google.com">google</a>"#, false),
];

/// The scenarios as labelled inputs.
#[must_use]
pub fn inputs() -> Vec<Input> {
    SCENARIOS
        .iter()
        .enumerate()
        .map(|(i, (text, _))| Input {
            source: format!("demo #{}", i + 1),
            text: (*text).to_owned(),
        })
        .collect()
}
