//! Parsing of inference script output

use mimg_common::models::{ClassificationResult, DetectionRecord};
use std::path::Path;

use super::{truncate_tail, InvokeError};

/// Preferred detection result file
pub const SINGLE_RESULT_FILE: &str = "single_result.json";
/// Fallback detection result file, one JSON record per line
pub const JSONL_RESULT_FILE: &str = "inference_results.jsonl";

const RAW_EXCERPT_CHARS: usize = 2000;

fn parse_failure(reason: impl Into<String>, raw: &str) -> InvokeError {
    InvokeError::ParseFailure {
        reason: reason.into(),
        raw: truncate_tail(raw, RAW_EXCERPT_CHARS),
    }
}

/// Extract the classification record from screening stdout
///
/// The script may log freely; the result is the first line that starts
/// with `{` and mentions `predicted_class`.
pub fn extract_classification(stdout: &str) -> Result<ClassificationResult, InvokeError> {
    let line = stdout
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with('{') && line.contains("predicted_class"))
        .ok_or_else(|| parse_failure("no JSON line with predicted_class in output", stdout))?;

    serde_json::from_str(line).map_err(|e| parse_failure(e.to_string(), line))
}

/// Read the detection record written into `output_dir`
///
/// `single_result.json` wins when present and parseable; otherwise the
/// first line of `inference_results.jsonl` is used.
pub async fn read_detection_record(output_dir: &Path) -> Result<DetectionRecord, InvokeError> {
    let single = output_dir.join(SINGLE_RESULT_FILE);
    if let Ok(content) = tokio::fs::read_to_string(&single).await {
        match serde_json::from_str::<DetectionRecord>(&content) {
            Ok(record) => return Ok(record),
            Err(e) => {
                tracing::warn!(
                    file = %single.display(),
                    error = %e,
                    "Unparseable single result file, trying JSONL"
                );
            }
        }
    }

    let jsonl = output_dir.join(JSONL_RESULT_FILE);
    let content = match tokio::fs::read_to_string(&jsonl).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(parse_failure(
                format!("detection output not found in {}", output_dir.display()),
                "",
            ));
        }
        Err(e) => return Err(e.into()),
    };

    let first_line = content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .ok_or_else(|| parse_failure(format!("{} is empty", JSONL_RESULT_FILE), ""))?;

    serde_json::from_str(first_line).map_err(|e| parse_failure(e.to_string(), first_line))
}
