//! surgisense-severity
//!
//! Wound severity classification. Pure text heuristics, no I/O.
//!
//! The wound-analysis backend answers with free-form clinical commentary
//! that usually, but not always, contains a 1–10 severity score. This crate
//! pulls that score out with an ordered list of [`ScoreExtractor`]s and maps
//! it onto a fixed risk [`Tier`].
//!
//! Extractors are tried in order and the first one that captures a number
//! decides the outcome. If that number is not a valid score the text has no
//! assessment; later extractors are not consulted.

pub mod assessment;
pub mod extractors;
pub mod tier;

pub use assessment::SeverityAssessment;
pub use tier::{Score, Tier, TierMetadata};

/// A single way of locating a severity score in free text.
pub trait ScoreExtractor: Send + Sync {
    /// Stable identifier, used in logs and tests.
    fn id(&self) -> &str;

    /// Return the digit run captured by this extractor, if it matches.
    fn extract<'t>(&self, text: &'t str) -> Option<&'t str>;
}

/// The extractors [`classify`] uses, in precedence order.
pub fn default_extractors() -> &'static [&'static dyn ScoreExtractor] {
    static EXTRACTORS: [&dyn ScoreExtractor; 3] = [
        &extractors::OutOfTen,
        &extractors::Boxed,
        &extractors::Keyword,
    ];
    &EXTRACTORS
}

/// Classify an analysis text using the default extractor order.
pub fn classify(text: &str) -> Option<SeverityAssessment> {
    classify_with(text, default_extractors())
}

/// Classify an analysis text with a caller-supplied extractor order.
pub fn classify_with(
    text: &str,
    extractors: &[&dyn ScoreExtractor],
) -> Option<SeverityAssessment> {
    let score = extract_score_with(text, extractors)?;
    Some(SeverityAssessment::new(text, score))
}

/// Extract and validate the score only.
pub fn extract_score(text: &str) -> Option<Score> {
    extract_score_with(text, default_extractors())
}

pub fn extract_score_with(text: &str, extractors: &[&dyn ScoreExtractor]) -> Option<Score> {
    let digits = extractors.iter().find_map(|e| e.extract(text))?;
    Score::parse(digits)
}
