//! Report text resolution
//!
//! Every [`StatusCode`] owns exactly one canonical text bundle. Resolution
//! is a pure lookup; the only variable part is the optional confidence
//! annotation on the finding, which is off unless explicitly enabled.

mod texts;

use crate::status::StatusCode;
use serde::{Deserialize, Serialize};

/// Four report texts shown for a diagnosis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTextBundle {
    pub finding: String,
    /// Markdown
    pub knowledge: String,
    pub recommendation: String,
    pub report_recommendation: String,
}

impl ReportTextBundle {
    /// Bundle returned for status codes that are not in the table
    pub fn placeholder() -> Self {
        PLACEHOLDER.to_bundle(String::new())
    }
}

/// Compile-time text table entry
pub(crate) struct StaticBundle {
    pub finding: &'static str,
    pub knowledge: &'static str,
    pub recommendation: &'static str,
    pub report_recommendation: &'static str,
}

impl StaticBundle {
    fn to_bundle(&self, finding_suffix: String) -> ReportTextBundle {
        ReportTextBundle {
            finding: format!("{}{}", self.finding, finding_suffix),
            knowledge: self.knowledge.to_string(),
            recommendation: self.recommendation.to_string(),
            report_recommendation: self.report_recommendation.to_string(),
        }
    }
}

const PLACEHOLDER: StaticBundle = StaticBundle {
    finding: "其他可能情况待排",
    knowledge: "（占位）默认 - 医学知识宣讲",
    recommendation: "（占位）默认 - 诊断结果/建议",
    report_recommendation: "（占位）默认 - 详细诊断建议",
};

/// Whether the model confidence is embedded in the finding text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingAnnotation {
    #[default]
    Suppressed,
    /// Appends `（置信度 NN.N%）`
    Percent,
}

impl FindingAnnotation {
    pub fn from_flag(show_confidence: bool) -> Self {
        if show_confidence {
            FindingAnnotation::Percent
        } else {
            FindingAnnotation::Suppressed
        }
    }

    fn suffix(self, confidence: Option<f64>) -> String {
        match (self, confidence) {
            (FindingAnnotation::Percent, Some(c)) => format!("（置信度 {:.1}%）", c * 100.0),
            _ => String::new(),
        }
    }
}

fn table(code: StatusCode) -> &'static StaticBundle {
    match code {
        StatusCode::OpmdPositive => &texts::OPMD_POSITIVE,
        StatusCode::OpmdSuspected => &texts::OPMD_SUSPECTED,
        StatusCode::OpmdNegative => &texts::OPMD_NEGATIVE,
        StatusCode::OlkPositive => &texts::OLK_POSITIVE,
        StatusCode::OlpPositive => &texts::OLP_POSITIVE,
        StatusCode::OsfPositive => &texts::OSF_POSITIVE,
    }
}

/// Resolve the text bundle for `code` with the confidence annotation off
pub fn resolve(code: StatusCode, confidence: Option<f64>) -> ReportTextBundle {
    resolve_with(code, confidence, FindingAnnotation::Suppressed)
}

/// Resolve the text bundle for `code`, annotating the finding as configured
pub fn resolve_with(
    code: StatusCode,
    confidence: Option<f64>,
    annotation: FindingAnnotation,
) -> ReportTextBundle {
    table(code).to_bundle(annotation.suffix(confidence))
}

/// Resolve by wire name; unrecognised names get the placeholder bundle
pub fn resolve_name(code: &str, confidence: Option<f64>) -> ReportTextBundle {
    match code.parse::<StatusCode>() {
        Ok(code) => resolve(code, confidence),
        Err(_) => {
            tracing::debug!(status = code, "No report texts for status code, using placeholder");
            ReportTextBundle::placeholder()
        }
    }
}
