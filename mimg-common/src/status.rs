//! Status classification
//!
//! Maps raw model output onto one of six status codes. There are two
//! independent entry points and a single call never mixes them:
//!
//! - [`classify_binary`] for the first-line OPMD/Benign screening model
//! - [`classify_deep`] for per-class detection maxima (OLP/OLK/OSF)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// OPMD confidence at or above which the screening result is positive
pub const OPMD_POSITIVE_THRESHOLD: f64 = 0.8;
/// OPMD confidence at or above which the screening result is suspected
pub const OPMD_SUSPECTED_THRESHOLD: f64 = 0.4;
/// Benign confidence at or below which the screening result is still suspected
pub const BENIGN_SUSPECTED_CEILING: f64 = 0.6;

/// Outcome of a classification, keying the report text table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusCode {
    OpmdPositive,
    OpmdSuspected,
    OpmdNegative,
    OlkPositive,
    OlpPositive,
    OsfPositive,
}

impl StatusCode {
    /// Every status code, in report-table order
    pub const ALL: [StatusCode; 6] = [
        StatusCode::OpmdPositive,
        StatusCode::OpmdSuspected,
        StatusCode::OpmdNegative,
        StatusCode::OlkPositive,
        StatusCode::OlpPositive,
        StatusCode::OsfPositive,
    ];

    /// Wire name, e.g. `OPMD_SUSPECTED`
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCode::OpmdPositive => "OPMD_POSITIVE",
            StatusCode::OpmdSuspected => "OPMD_SUSPECTED",
            StatusCode::OpmdNegative => "OPMD_NEGATIVE",
            StatusCode::OlkPositive => "OLK_POSITIVE",
            StatusCode::OlpPositive => "OLP_POSITIVE",
            StatusCode::OsfPositive => "OSF_POSITIVE",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatusCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| format!("unknown status code: {}", s))
    }
}

/// Severity tag shown next to a diagnosis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Severity for a screening (two-class) result
    pub fn for_screening(predicted_class: &str, confidence: f64) -> Self {
        match predicted_class {
            // OPMD is never below medium, however unsure the model is
            "OPMD" if confidence >= 0.9 => Severity::High,
            "OPMD" => Severity::Medium,
            "Benign" => Severity::Low,
            _ if confidence >= 0.7 => Severity::Medium,
            _ => Severity::Low,
        }
    }

    /// Severity for a detection result, from its top confidence
    pub fn for_detection(top_confidence: f64) -> Self {
        if top_confidence >= 0.8 {
            Severity::High
        } else if top_confidence >= 0.6 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}

/// Lesion classes distinguished by the deep detector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeepClass {
    Olp,
    Olk,
    Osf,
}

impl DeepClass {
    /// Tie-break order for [`classify_deep`]: the first class holding the
    /// maximum score wins.
    pub const PRIORITY: [DeepClass; 3] = [DeepClass::Olp, DeepClass::Olk, DeepClass::Osf];

    /// Case-insensitive lookup of a detector class label
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_uppercase().as_str() {
            "OLP" => Some(DeepClass::Olp),
            "OLK" => Some(DeepClass::Olk),
            "OSF" => Some(DeepClass::Osf),
            _ => None,
        }
    }

    pub fn positive_status(self) -> StatusCode {
        match self {
            DeepClass::Olp => StatusCode::OlpPositive,
            DeepClass::Olk => StatusCode::OlkPositive,
            DeepClass::Osf => StatusCode::OsfPositive,
        }
    }
}

/// Per-class maximum detection confidence (0 when a class was not seen)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DeepScores {
    #[serde(rename = "OLP")]
    pub olp: f64,
    #[serde(rename = "OLK")]
    pub olk: f64,
    #[serde(rename = "OSF")]
    pub osf: f64,
}

impl DeepScores {
    pub fn new(olp: f64, olk: f64, osf: f64) -> Self {
        Self { olp, olk, osf }
    }

    pub fn get(&self, class: DeepClass) -> f64 {
        let score = match class {
            DeepClass::Olp => self.olp,
            DeepClass::Olk => self.olk,
            DeepClass::Osf => self.osf,
        };
        if score.is_nan() {
            0.0
        } else {
            score
        }
    }

    /// Raise the score of `class` to `confidence` if it is higher
    pub fn observe(&mut self, class: DeepClass, confidence: f64) {
        let slot = match class {
            DeepClass::Olp => &mut self.olp,
            DeepClass::Olk => &mut self.olk,
            DeepClass::Osf => &mut self.osf,
        };
        *slot = slot.max(confidence);
    }

    /// Combined OPMD score: the maximum of the three classes
    pub fn opmd(&self) -> f64 {
        DeepClass::PRIORITY
            .into_iter()
            .map(|class| self.get(class))
            .fold(0.0, f64::max)
    }
}

/// Classify the screening model's output
///
/// A low-confidence OPMD prediction (< 0.4) is NEGATIVE, not SUSPECTED.
/// Legacy multi-class labels (OLP/OLK/OSF) pass straight through to their
/// positive status; anything else is treated as suspected.
pub fn classify_binary(predicted_class: &str, confidence: f64) -> StatusCode {
    match predicted_class {
        "OPMD" => {
            if confidence >= OPMD_POSITIVE_THRESHOLD {
                StatusCode::OpmdPositive
            } else if confidence >= OPMD_SUSPECTED_THRESHOLD {
                StatusCode::OpmdSuspected
            } else {
                StatusCode::OpmdNegative
            }
        }
        "Benign" => {
            if confidence <= BENIGN_SUSPECTED_CEILING {
                StatusCode::OpmdSuspected
            } else {
                StatusCode::OpmdNegative
            }
        }
        other => match DeepClass::from_label(other) {
            Some(class) => class.positive_status(),
            None => StatusCode::OpmdSuspected,
        },
    }
}

/// Classify per-class detection maxima
///
/// All zero means nothing was detected. Ties go to the class listed first
/// in [`DeepClass::PRIORITY`].
pub fn classify_deep(scores: &DeepScores) -> StatusCode {
    let max = scores.opmd();
    if max == 0.0 {
        return StatusCode::OpmdNegative;
    }

    DeepClass::PRIORITY
        .into_iter()
        .find(|class| scores.get(*class) == max)
        .map(DeepClass::positive_status)
        .unwrap_or(StatusCode::OpmdNegative)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opmd_high_confidence_is_positive() {
        for c in [0.8, 0.85, 0.92, 1.0] {
            assert_eq!(classify_binary("OPMD", c), StatusCode::OpmdPositive, "c = {}", c);
        }
    }

    #[test]
    fn test_opmd_mid_confidence_is_suspected() {
        for c in [0.4, 0.55, 0.79, 0.7999] {
            assert_eq!(classify_binary("OPMD", c), StatusCode::OpmdSuspected, "c = {}", c);
        }
    }

    #[test]
    fn test_opmd_low_confidence_is_negative_not_suspected() {
        for c in [0.0, 0.1, 0.39, 0.3999] {
            assert_eq!(classify_binary("OPMD", c), StatusCode::OpmdNegative, "c = {}", c);
        }
    }

    #[test]
    fn test_benign_thresholds() {
        assert_eq!(classify_binary("Benign", 0.3), StatusCode::OpmdSuspected);
        assert_eq!(classify_binary("Benign", 0.6), StatusCode::OpmdSuspected);
        assert_eq!(classify_binary("Benign", 0.6001), StatusCode::OpmdNegative);
        assert_eq!(classify_binary("Benign", 0.95), StatusCode::OpmdNegative);
    }

    #[test]
    fn test_legacy_labels_pass_through() {
        assert_eq!(classify_binary("OLP", 0.2), StatusCode::OlpPositive);
        assert_eq!(classify_binary("olk", 0.9), StatusCode::OlkPositive);
        assert_eq!(classify_binary("OSF", 0.5), StatusCode::OsfPositive);
    }

    #[test]
    fn test_unknown_label_falls_back_to_suspected() {
        assert_eq!(classify_binary("OOML", 0.99), StatusCode::OpmdSuspected);
        assert_eq!(classify_binary("", 0.0), StatusCode::OpmdSuspected);
        // Exact match only for the screening labels
        assert_eq!(classify_binary("opmd", 0.99), StatusCode::OpmdSuspected);
    }

    #[test]
    fn test_deep_all_zero_is_negative() {
        assert_eq!(classify_deep(&DeepScores::default()), StatusCode::OpmdNegative);
    }

    #[test]
    fn test_deep_picks_highest_class() {
        assert_eq!(classify_deep(&DeepScores::new(0.1, 0.7, 0.3)), StatusCode::OlkPositive);
        assert_eq!(classify_deep(&DeepScores::new(0.0, 0.0, 0.77)), StatusCode::OsfPositive);
        assert_eq!(classify_deep(&DeepScores::new(0.6, 0.2, 0.1)), StatusCode::OlpPositive);
    }

    #[test]
    fn test_deep_tie_break_order() {
        assert_eq!(classify_deep(&DeepScores::new(0.5, 0.3, 0.5)), StatusCode::OlpPositive);
        assert_eq!(classify_deep(&DeepScores::new(0.2, 0.5, 0.5)), StatusCode::OlkPositive);
        assert_eq!(classify_deep(&DeepScores::new(0.4, 0.4, 0.4)), StatusCode::OlpPositive);
    }

    #[test]
    fn test_deep_ignores_nan() {
        let scores = DeepScores::new(f64::NAN, 0.0, 0.0);
        assert_eq!(classify_deep(&scores), StatusCode::OpmdNegative);
        assert_eq!(scores.opmd(), 0.0);
    }

    #[test]
    fn test_observe_keeps_maximum() {
        let mut scores = DeepScores::default();
        scores.observe(DeepClass::Osf, 0.4);
        scores.observe(DeepClass::Osf, 0.77);
        scores.observe(DeepClass::Osf, 0.5);
        assert_eq!(scores.osf, 0.77);
        assert_eq!(scores.opmd(), 0.77);
    }

    #[test]
    fn test_status_code_wire_names() {
        for code in StatusCode::ALL {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code));
            assert_eq!(code.as_str().parse::<StatusCode>().unwrap(), code);
        }
        assert!("NOT_A_CODE".parse::<StatusCode>().is_err());
    }

    #[test]
    fn test_severity_rules() {
        assert_eq!(Severity::for_screening("OPMD", 0.95), Severity::High);
        assert_eq!(Severity::for_screening("OPMD", 0.2), Severity::Medium);
        assert_eq!(Severity::for_screening("Benign", 0.99), Severity::Low);
        assert_eq!(Severity::for_screening("OLP", 0.7), Severity::Medium);
        assert_eq!(Severity::for_screening("OLP", 0.69), Severity::Low);

        assert_eq!(Severity::for_detection(0.8), Severity::High);
        assert_eq!(Severity::for_detection(0.77), Severity::Medium);
        assert_eq!(Severity::for_detection(0.59), Severity::Low);
    }
}
