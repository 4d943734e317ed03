//! Instance segmentation
//!
//! Runs the segmentation model on an uploaded image and publishes the
//! rendered overlay under the uploads directory.

use chrono::Utc;
use mimg_common::config::{PythonPaths, ScriptPaths};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime};

use crate::error::{ApiError, ApiResult};
use crate::invoker::process::{require_path, require_program};
use crate::invoker::python::segmentation_vis_dir;
use crate::invoker::{Invoker, PathRole};
use crate::services::diagnosis::{resolve_upload_path, DEEP_OUTPUT_PREFIX};

pub const MODEL_VERSION: &str = "mask2former_swin_s_v1.0";
/// Prefix of published overlays; cleanup only touches these files
pub const OVERLAY_PREFIX: &str = "segmented_";
pub const DEFAULT_CLEANUP_HOURS: u64 = 24;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentationResult {
    pub overlay_image_url: String,
    pub inference_time_ms: u64,
    pub model_version: String,
    pub original_image_path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnvironmentStatus {
    pub ready: bool,
    pub message: String,
}

pub struct SegmentationService {
    invoker: Arc<dyn Invoker>,
    python: PythonPaths,
    scripts: ScriptPaths,
    uploads_dir: PathBuf,
}

impl SegmentationService {
    pub fn new(
        invoker: Arc<dyn Invoker>,
        python: PythonPaths,
        scripts: ScriptPaths,
        uploads_dir: PathBuf,
    ) -> Self {
        Self {
            invoker,
            python,
            scripts,
            uploads_dir,
        }
    }

    /// Segment the uploaded image behind `image_url`
    pub async fn run(&self, image_url: &str) -> ApiResult<SegmentationResult> {
        let image_path = resolve_upload_path(&self.uploads_dir, image_url)?;
        if !image_path.exists() {
            return Err(ApiError::NotFound(format!(
                "Image not found: {}",
                image_path.display()
            )));
        }

        let started = Instant::now();
        let overlay = self.invoker.segment(&image_path).await?;
        let inference_time_ms = started.elapsed().as_millis() as u64;

        let file_name = overlay_file_name(&image_path, Utc::now().timestamp_millis());
        tokio::fs::create_dir_all(&self.uploads_dir).await.map_err(mimg_common::Error::from)?;
        let published = self.uploads_dir.join(&file_name);
        tokio::fs::copy(&overlay, &published).await.map_err(mimg_common::Error::from)?;

        tracing::info!(
            overlay = %overlay.display(),
            published = %published.display(),
            inference_time_ms,
            "Segmentation complete"
        );

        Ok(SegmentationResult {
            overlay_image_url: format!("/uploads/{}", file_name),
            inference_time_ms,
            model_version: MODEL_VERSION.to_string(),
            original_image_path: image_path.display().to_string(),
        })
    }

    /// Check that every file the segmentation run needs is present
    pub fn check_environment(&self) -> EnvironmentStatus {
        let checks = [
            require_program(PathRole::Interpreter, &self.python.segmentation),
            require_path(PathRole::Script, &self.scripts.segmentation_script),
            require_path(PathRole::Config, &self.scripts.segmentation_config),
            require_path(PathRole::Weights, &self.scripts.segmentation_weights),
            require_path(PathRole::WorkingDir, &self.scripts.segmentation_dir),
        ];

        let problems: Vec<String> = checks
            .into_iter()
            .filter_map(|check| check.err().map(|e| e.to_string()))
            .collect();

        if problems.is_empty() {
            tracing::debug!("Segmentation environment ready");
            EnvironmentStatus {
                ready: true,
                message: "Segmentation environment ready".to_string(),
            }
        } else {
            for problem in &problems {
                tracing::warn!("Segmentation environment check failed: {}", problem);
            }
            EnvironmentStatus {
                ready: false,
                message: problems.join("; "),
            }
        }
    }

    /// Remove inference output older than `older_than_hours`
    ///
    /// Sweeps the segmentation `vis` directory, published `segmented_*`
    /// overlays and per-request `deep_*` detection directories. Returns the
    /// number of entries removed. Failures are logged and skipped.
    pub async fn cleanup(&self, older_than_hours: u64) -> usize {
        let max_age = Duration::from_secs(older_than_hours.saturating_mul(3600));
        let cutoff = SystemTime::now()
            .checked_sub(max_age)
            .unwrap_or(SystemTime::UNIX_EPOCH);

        let vis_dir = segmentation_vis_dir(&self.scripts);
        let removed = remove_older_than(&vis_dir, cutoff, |_, is_dir| !is_dir).await
            + remove_older_than(&self.uploads_dir, cutoff, is_generated_output).await;

        tracing::info!(removed, older_than_hours, "Segmentation cleanup complete");
        removed
    }
}

/// Uploads entries written by inference rather than by users
fn is_generated_output(name: &str, is_dir: bool) -> bool {
    if is_dir {
        name.starts_with(DEEP_OUTPUT_PREFIX)
    } else {
        name.starts_with(OVERLAY_PREFIX)
    }
}

/// `segmented_<millis>_<stem><ext>`
pub fn overlay_file_name(image: &Path, millis: i64) -> String {
    let stem = image
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = image
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    format!("{}{}_{}{}", OVERLAY_PREFIX, millis, stem, ext)
}

async fn remove_older_than<F>(dir: &Path, cutoff: SystemTime, matches: F) -> usize
where
    F: Fn(&str, bool) -> bool,
{
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return 0,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "Cannot read directory for cleanup");
            return 0;
        }
    };

    let mut removed = 0;
    loop {
        let entry = match entries.next_entry().await {
            Ok(Some(entry)) => entry,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "Directory listing interrupted");
                break;
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        let (is_dir, modified) = match entry.metadata().await.and_then(|m| Ok((m.is_dir(), m.modified()?))) {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(file = %name, error = %e, "Cannot stat entry for cleanup");
                continue;
            }
        };
        if !matches(&name, is_dir) {
            continue;
        }

        if modified >= cutoff {
            continue;
        }

        let removal = if is_dir {
            tokio::fs::remove_dir_all(entry.path()).await
        } else {
            tokio::fs::remove_file(entry.path()).await
        };
        match removal {
            Ok(()) => {
                tracing::debug!(file = %name, "Removed old inference output");
                removed += 1;
            }
            Err(e) => tracing::warn!(file = %name, error = %e, "Failed to remove old inference output"),
        }
    }

    removed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_file_name() {
        assert_eq!(
            overlay_file_name(Path::new("/srv/uploads/mouth_01.jpg"), 1700000000123),
            "segmented_1700000000123_mouth_01.jpg"
        );
        assert_eq!(
            overlay_file_name(Path::new("noext"), 5),
            "segmented_5_noext"
        );
    }

    #[tokio::test]
    async fn test_remove_older_than_respects_filter_and_cutoff() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("segmented_1_a.jpg"), b"x").unwrap();
        std::fs::write(dir.path().join("upload.jpg"), b"x").unwrap();
        std::fs::create_dir(dir.path().join("segmented_dir")).unwrap();
        std::fs::create_dir(dir.path().join("deep_1_abcdef01")).unwrap();
        std::fs::write(dir.path().join("deep_1_abcdef01").join("single_result.json"), b"{}").unwrap();
        std::fs::write(dir.path().join("deep_notes.txt"), b"x").unwrap();

        // Cutoff in the past: nothing is old enough
        let past = SystemTime::now() - Duration::from_secs(3600);
        assert_eq!(remove_older_than(dir.path(), past, is_generated_output).await, 0);

        // Cutoff in the future: overlays and detection directories go
        let future = SystemTime::now() + Duration::from_secs(3600);
        assert_eq!(remove_older_than(dir.path(), future, is_generated_output).await, 2);
        assert!(!dir.path().join("segmented_1_a.jpg").exists());
        assert!(!dir.path().join("deep_1_abcdef01").exists());
        assert!(dir.path().join("upload.jpg").exists());
        assert!(dir.path().join("segmented_dir").exists());
        assert!(dir.path().join("deep_notes.txt").exists());
    }

    #[tokio::test]
    async fn test_remove_older_than_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let removed = remove_older_than(&dir.path().join("absent"), SystemTime::now(), |_, _| true).await;
        assert_eq!(removed, 0);
    }
}
