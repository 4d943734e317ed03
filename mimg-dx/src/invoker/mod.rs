//! External inference invocation
//!
//! The ML models run as Python scripts in their own environments. This
//! module turns "spawn a process and scrape its output" into a typed
//! [`Invoker`] interface so the diagnosis logic can be driven by canned
//! results in tests.

pub mod output;
pub mod process;
pub mod python;

pub use output::{extract_classification, read_detection_record};
pub use process::{run, ProcessOutput, ProcessSpec};
pub use python::PythonInvoker;

use async_trait::async_trait;
use mimg_common::models::{ClassificationResult, DetectionRecord};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Which input of an invocation a path refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRole {
    Interpreter,
    Script,
    Model,
    Config,
    Weights,
    WorkingDir,
    Image,
    Output,
}

impl fmt::Display for PathRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PathRole::Interpreter => "Python interpreter",
            PathRole::Script => "Inference script",
            PathRole::Model => "Model weights",
            PathRole::Config => "Model config",
            PathRole::Weights => "Checkpoint",
            PathRole::WorkingDir => "Working directory",
            PathRole::Image => "Input image",
            PathRole::Output => "Inference output",
        };
        f.write_str(name)
    }
}

/// Invocation errors
#[derive(Debug, Error)]
pub enum InvokeError {
    /// Required file or directory does not exist; checked before spawning
    #[error("{what} path does not exist: {}", .path.display())]
    MissingPath { what: PathRole, path: PathBuf },

    /// Process could not be started
    #[error("Failed to spawn process: {0}")]
    Spawn(#[source] std::io::Error),

    /// Process exceeded its wall-clock budget and was killed
    #[error("Process timed out after {}s", .after.as_secs())]
    TimedOut { after: Duration },

    #[error("Process exited with code {}: {}", exit_code_label(.code), .stderr.trim())]
    NonZeroExit { code: Option<i32>, stderr: String },

    /// Output did not contain the expected JSON
    #[error("Failed to parse inference output: {reason}")]
    ParseFailure { reason: String, raw: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn exit_code_label(code: &Option<i32>) -> String {
    code.map_or_else(|| "none".to_string(), |c| c.to_string())
}

impl InvokeError {
    /// True when the caller supplied an image that does not exist
    pub fn is_missing_image(&self) -> bool {
        matches!(self, InvokeError::MissingPath { what: PathRole::Image, .. })
    }

    /// Stderr captured from a failed process, if any
    pub fn stderr(&self) -> Option<&str> {
        match self {
            InvokeError::NonZeroExit { stderr, .. } if !stderr.trim().is_empty() => Some(stderr),
            _ => None,
        }
    }
}

/// Limit `text` to its last `max_chars` characters
///
/// Python tracebacks end with the interesting line, so the tail is kept.
pub fn truncate_tail(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    let count = text.chars().count();
    if count <= max_chars {
        return text.to_string();
    }
    let tail: String = text.chars().skip(count - max_chars).collect();
    format!("...{}", tail)
}

/// Runs the three external inference stages
#[async_trait]
pub trait Invoker: Send + Sync {
    /// Two-class OPMD/Benign screening of `image`
    async fn classify(&self, image: &Path) -> Result<ClassificationResult, InvokeError>;

    /// Three-class detection of `image`; artifacts are written to `output_dir`
    async fn detect(&self, image: &Path, output_dir: &Path) -> Result<DetectionRecord, InvokeError>;

    /// Instance segmentation of `image`
    ///
    /// Returns the path of the rendered overlay image.
    async fn segment(&self, image: &Path) -> Result<PathBuf, InvokeError>;
}
