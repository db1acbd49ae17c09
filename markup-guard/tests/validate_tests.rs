#![allow(clippy::unwrap_used)]
//! Integration tests for `Validator::validate`.
//!
//! Whitelist used throughout: tags `a`, `i`, `code`, `strike`, `strong`;
//! attributes `href`, `title`.

use markup_guard::{
    AttributePattern, NestingError, TagPattern, Validate, ValidationOutcome, Validator, Violation,
    ViolationKind, presets,
};

fn basic() -> Validator {
    Validator::from_config(&presets::basic_html()).unwrap()
}

fn kind_of(outcome: &ValidationOutcome) -> Option<ViolationKind> {
    outcome.violation().map(Violation::kind)
}

// ─────────────────────────────────────────────────────────────────────────────
// Reference scenarios
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_bold_is_valid() {
    assert_eq!(basic().validate("<strong>Bold</strong>"), ValidationOutcome::Valid);
}

#[test]
fn test_link_with_allowed_attributes_is_valid() {
    let outcome = basic().validate(r#"<a href="https://x.com" title="X">x</a>"#);
    assert!(outcome.is_valid(), "got: {outcome:?}");
}

#[test]
fn test_link_with_extra_attribute_is_invalid() {
    let outcome = basic().validate(r#"<a href="https://x.com" title="X" data-test="1">x</a>"#);
    assert_eq!(
        outcome,
        ValidationOutcome::Invalid(Violation::DisallowedAttribute {
            attribute: "data-test".to_owned(),
            tag: "a".to_owned(),
            position: 0,
        })
    );
}

#[test]
fn test_crossed_nesting_is_invalid() {
    let outcome = basic().validate("<strong>Bold <i>italic</strong></i>");
    assert_eq!(kind_of(&outcome), Some(ViolationKind::MalformedNesting));
    assert!(matches!(
        outcome.violation(),
        Some(Violation::MalformedNesting(NestingError::MismatchedClose { expected, found, .. }))
            if expected == "i" && found == "strong"
    ));
}

#[test]
fn test_unclosed_is_invalid() {
    let outcome = basic().validate("<strong>Unclosed");
    assert_eq!(
        outcome,
        ValidationOutcome::Invalid(Violation::MalformedNesting(NestingError::Unclosed {
            open: vec!["strong".to_owned()],
        }))
    );
}

#[test]
fn test_disallowed_tag_is_invalid() {
    let outcome = basic().validate(r#"<div>x</div><a href="https://x.com">x</a>"#);
    assert_eq!(
        outcome,
        ValidationOutcome::Invalid(Violation::DisallowedTag {
            tag: "div".to_owned(),
            position: 0,
        })
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Properties
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_tag_free_text_valid_under_any_config() {
    let texts = ["", "plain text", "a > b", "x < y", "tabs\tand\nnewlines"];
    let empty = Validator::new(Vec::new(), Vec::new());
    for text in texts {
        assert!(basic().is_valid(text), "basic rejected {text}");
        assert!(empty.is_valid(text), "empty rejected {text}");
    }
}

#[test]
fn test_empty_tag_whitelist_rejects_every_tag() {
    let empty = Validator::new(Vec::new(), Vec::new());
    for input in ["<i>x</i>", "</i>", "<strong>"] {
        assert_eq!(
            kind_of(&empty.validate(input)),
            Some(ViolationKind::DisallowedTag),
            "input: {input}"
        );
    }
}

#[test]
fn test_disallowed_tag_wins_over_other_problems() {
    let inputs = [
        "<span>x</span>",
        "<span>unclosed",
        r#"<span class="x">x</span>"#,
        "<i>x</i></span>",
    ];
    for input in inputs {
        assert_eq!(
            kind_of(&basic().validate(input)),
            Some(ViolationKind::DisallowedTag),
            "input: {input}"
        );
    }
}

#[test]
fn test_crossed_nesting_independent_of_attribute_whitelist() {
    let tags = vec![TagPattern::name("strong").unwrap(), TagPattern::name("i").unwrap()];
    let no_attrs = Validator::new(tags.clone(), Vec::new());
    let some_attrs = Validator::new(tags, vec![AttributePattern::name("href").unwrap()]);
    for v in [no_attrs, some_attrs] {
        assert_eq!(
            kind_of(&v.validate("<strong><i>text</strong></i>")),
            Some(ViolationKind::MalformedNesting)
        );
    }
}

#[test]
fn test_close_without_open_is_invalid() {
    let outcome = basic().validate("</strong>text");
    assert!(matches!(
        outcome.violation(),
        Some(Violation::MalformedNesting(NestingError::UnexpectedClose { tag, .. })) if tag == "strong"
    ));
}

#[test]
fn test_case_insensitive_tags() {
    assert!(basic().is_valid(r#"<STRONG>x</strong> <A HREF="/">y</a>"#));
}

#[test]
fn test_deep_balanced_nesting() {
    let input = "<strong><i><code><strike><a href=\"#\">x</a></strike></code></i></strong>";
    assert!(basic().is_valid(input));
}

#[test]
fn test_regex_tag_patterns() {
    let v = Validator::new(
        vec![
            TagPattern::regex("<a>|</a>").unwrap(),
            TagPattern::regex("</?em>").unwrap(),
        ],
        Vec::new(),
    );
    assert!(v.is_valid("<a>x</a> <em>y</em>"));
    assert_eq!(
        kind_of(&v.validate("<abbr>x</abbr>")),
        Some(ViolationKind::DisallowedTag)
    );
}

#[test]
fn test_original_pattern_constants() {
    let tags = [
        r"<a>|<\/a>",
        r"<code>|<\/code>",
        r"<i>|<\/i>",
        r"<strike>|<\/strike>",
        r"<strong>|<\/strong>",
    ]
    .iter()
    .map(|p| TagPattern::regex(p).unwrap())
    .collect();
    let attrs = [r#"^href="[^"]*"$"#, r#"^title="[^"]*"$"#]
        .iter()
        .map(|p| AttributePattern::regex(p).unwrap())
        .collect();
    let v = Validator::new(tags, attrs);

    assert!(v.is_valid("<strong>Bold text</strong>"));
    assert!(v.is_valid(r#"<a href="https://google.com" title="Google">google</a>"#));
    assert_eq!(
        v.validate(r#"<a href="https://google.com" title="Google" data-test="1">google</a>"#)
            .violation()
            .and_then(Violation::attribute),
        Some("data-test")
    );
    assert!(matches!(
        v.validate("<strong>Bold <i>italic</strong></i>").violation(),
        Some(Violation::MalformedNesting(NestingError::MismatchedClose { .. }))
    ));
    assert!(matches!(
        v.validate("<strong>Unclosed").violation(),
        Some(Violation::MalformedNesting(NestingError::Unclosed { .. }))
    ));
}

#[test]
fn test_regex_tag_pattern_with_attributes_allows_both_forms() {
    let v = Validator::new(
        vec![TagPattern::regex(r#"<a href="[^"]*" title="[^"]*">"#).unwrap()],
        vec![
            AttributePattern::name("href").unwrap(),
            AttributePattern::name("title").unwrap(),
        ],
    );
    assert_eq!(
        v.validate(r#"<a href="x" title="y">l</a>"#),
        ValidationOutcome::Valid
    );
    assert_eq!(
        kind_of(&v.validate("<i>x</i>")),
        Some(ViolationKind::DisallowedTag)
    );
}

#[test]
fn test_idempotent() {
    let v = basic();
    let inputs = [
        "<strong>Bold</strong>",
        "<strong>Unclosed",
        "<div>x</div>",
        r#"<a data-test="1">x</a>"#,
    ];
    for input in inputs {
        assert_eq!(v.validate(input), v.validate(input), "input: {input}");
    }
}

#[test]
fn test_shared_across_threads() {
    let v = basic();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let v = &v;
                scope.spawn(move || {
                    if i % 2 == 0 {
                        v.is_valid("<i>ok</i>")
                    } else {
                        !v.is_valid("<i>broken")
                    }
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    });
}

#[test]
fn test_boxed_validators() {
    let validators: Vec<Box<dyn Validate>> = vec![
        Box::new(basic()),
        Box::new(Validator::new(Vec::new(), Vec::new())),
    ];
    let verdicts: Vec<bool> = validators
        .iter()
        .map(|v| v.validate("<i>x</i>").is_valid())
        .collect();
    assert_eq!(verdicts, vec![true, false]);
}
