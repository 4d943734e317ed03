//! Invoker backed by the Python inference scripts

use async_trait::async_trait;
use mimg_common::config::{
    PythonPaths, ScriptPaths, ServiceConfig, CLASSIFICATION_TIMEOUT, DETECTION_TIMEOUT,
    SEGMENTATION_TIMEOUT,
};
use mimg_common::models::{ClassificationResult, DetectionRecord};
use std::path::{Path, PathBuf};

use super::output::{extract_classification, read_detection_record};
use super::process::{require_path, require_program, run, ProcessSpec};
use super::{InvokeError, Invoker, PathRole};

/// Detection confidence threshold passed to the detector
pub const DETECTION_CONFIDENCE: &str = "0.25";
/// Bounding-box line thickness in the annotated image
pub const DETECTION_LINE_THICKNESS: &str = "6";
/// Output directory of the segmentation script, relative to its working directory
pub const SEGMENTATION_OUTPUT_DIR: &str = "eval_results";

pub struct PythonInvoker {
    python: PythonPaths,
    scripts: ScriptPaths,
}

impl PythonInvoker {
    pub fn new(python: PythonPaths, scripts: ScriptPaths) -> Self {
        Self { python, scripts }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(config.python.clone(), config.scripts.clone())
    }
}

/// Directory the segmentation script renders overlays into
pub fn segmentation_vis_dir(scripts: &ScriptPaths) -> PathBuf {
    scripts
        .segmentation_dir
        .join(SEGMENTATION_OUTPUT_DIR)
        .join("vis")
}

#[async_trait]
impl Invoker for PythonInvoker {
    async fn classify(&self, image: &Path) -> Result<ClassificationResult, InvokeError> {
        let interpreter = &self.python.classification;
        require_program(PathRole::Interpreter, interpreter)?;
        require_path(PathRole::Script, &self.scripts.classification_script)?;

        let spec = ProcessSpec::new(
            interpreter.as_str(),
            &self.scripts.workspace_root,
            CLASSIFICATION_TIMEOUT,
        )
        .arg(&self.scripts.classification_script)
        .arg(image);

        let output = run(&spec).await?;
        let result = extract_classification(&output.stdout)?;

        tracing::debug!(
            predicted_class = %result.predicted_class,
            confidence = result.confidence,
            "Screening inference complete"
        );
        Ok(result)
    }

    async fn detect(&self, image: &Path, output_dir: &Path) -> Result<DetectionRecord, InvokeError> {
        let interpreter = &self.python.yolo_detection;
        require_program(PathRole::Interpreter, interpreter)?;
        require_path(PathRole::Image, image)?;
        require_path(PathRole::Script, &self.scripts.yolo_script)?;
        require_path(PathRole::Model, &self.scripts.yolo_model)?;

        tokio::fs::create_dir_all(output_dir).await?;

        let spec = ProcessSpec::new(interpreter.as_str(), &self.scripts.workspace_root, DETECTION_TIMEOUT)
            .arg(&self.scripts.yolo_script)
            .arg("--model")
            .arg(&self.scripts.yolo_model)
            .arg("--source")
            .arg(image)
            .arg("--output")
            .arg(output_dir)
            .arg("--conf")
            .arg(DETECTION_CONFIDENCE)
            .arg("--line-thickness")
            .arg(DETECTION_LINE_THICKNESS)
            .arg("--single-json");

        if let Err(e) = run(&spec).await {
            if e.stderr().is_some_and(|s| s.contains("No module named 'ultralytics'")) {
                tracing::error!(
                    interpreter = %interpreter,
                    "ultralytics is not installed in the detection environment"
                );
            }
            return Err(e);
        }

        read_detection_record(output_dir).await
    }

    async fn segment(&self, image: &Path) -> Result<PathBuf, InvokeError> {
        let interpreter = &self.python.segmentation;
        require_program(PathRole::Interpreter, interpreter)?;
        require_path(PathRole::Image, image)?;
        require_path(PathRole::WorkingDir, &self.scripts.segmentation_dir)?;
        require_path(PathRole::Script, &self.scripts.segmentation_script)?;
        require_path(PathRole::Config, &self.scripts.segmentation_config)?;
        require_path(PathRole::Weights, &self.scripts.segmentation_weights)?;

        let spec = ProcessSpec::new(
            interpreter.as_str(),
            &self.scripts.segmentation_dir,
            SEGMENTATION_TIMEOUT,
        )
        .arg(&self.scripts.segmentation_script)
        .arg(image)
        .arg(&self.scripts.segmentation_config)
        .arg("--weights")
        .arg(&self.scripts.segmentation_weights)
        .arg("--out-dir")
        .arg(SEGMENTATION_OUTPUT_DIR);

        let output = run(&spec).await?;
        let stderr = output.stderr.trim();
        if !stderr.is_empty() && !stderr.contains("UserWarning") {
            tracing::warn!(stderr = %stderr, "Segmentation script wrote to stderr");
        }

        let file_name = image.file_name().ok_or_else(|| InvokeError::MissingPath {
            what: PathRole::Image,
            path: image.to_path_buf(),
        })?;
        let overlay = segmentation_vis_dir(&self.scripts).join(file_name);
        require_path(PathRole::Output, &overlay)?;

        Ok(overlay)
    }
}
