//! The score extractors, in the order [`crate::default_extractors`] tries them.
//!
//! Each pattern is case-insensitive and captures the score digits in group 1.
//! Whitespace is Unicode-aware, so non-breaking spaces in model output still
//! separate a score from its denominator. Digits are ASCII only.

use std::sync::LazyLock;

use regex::Regex;

use crate::ScoreExtractor;

static OUT_OF_TEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+)\s*(?:/|out of)\s*10").expect("valid out-of-ten pattern")
});

static BOXED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\\boxed\{([0-9]+)\}").expect("valid boxed pattern"));

static KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:severity|score)[\s:]*([0-9]+)").expect("valid keyword pattern")
});

/// `<digits> / 10` or `<digits> out of 10`.
pub struct OutOfTen;

/// `\boxed{<digits>}`, the final-answer marker some generative models emit.
pub struct Boxed;

/// `severity` or `score`, then any run of whitespace or colons, then digits.
pub struct Keyword;

impl ScoreExtractor for OutOfTen {
    fn id(&self) -> &str {
        "out_of_ten"
    }

    fn extract<'t>(&self, text: &'t str) -> Option<&'t str> {
        first_capture(&OUT_OF_TEN, text)
    }
}

impl ScoreExtractor for Boxed {
    fn id(&self) -> &str {
        "boxed"
    }

    fn extract<'t>(&self, text: &'t str) -> Option<&'t str> {
        first_capture(&BOXED, text)
    }
}

impl ScoreExtractor for Keyword {
    fn id(&self) -> &str {
        "keyword"
    }

    fn extract<'t>(&self, text: &'t str) -> Option<&'t str> {
        first_capture(&KEYWORD, text)
    }
}

fn first_capture<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
