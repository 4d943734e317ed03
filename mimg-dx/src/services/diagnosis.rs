//! Diagnosis orchestration
//!
//! Two flows share the same pipeline (invoke, classify, resolve texts,
//! persist or return) but differ in failure policy:
//! - Screening (`oral`): any inference failure degrades to a placeholder
//!   result flagged with `fallback: true`.
//! - Detection (`oral-deep`): failures propagate to the caller.

use chrono::Utc;
use mimg_common::models::{
    ClassificationResult, DetectionRecord, DiagnosisFindings, DiagnosisResult, DiagnosisType,
    MockScores,
};
use mimg_common::report::{resolve_with, FindingAnnotation};
use mimg_common::{classify_binary, classify_deep, Severity, StatusCode};
use rand::Rng;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::db::DiagnosisRepository;
use crate::error::{ApiError, ApiResult};
use crate::invoker::process::require_path;
use crate::invoker::{Invoker, PathRole};

/// Prefix of per-request detection output directories under uploads
pub const DEEP_OUTPUT_PREFIX: &str = "deep_";

pub struct DiagnosisService {
    invoker: Arc<dyn Invoker>,
    repository: Option<Arc<dyn DiagnosisRepository>>,
    uploads_dir: PathBuf,
    annotation: FindingAnnotation,
}

impl DiagnosisService {
    pub fn new(
        invoker: Arc<dyn Invoker>,
        repository: Option<Arc<dyn DiagnosisRepository>>,
        uploads_dir: PathBuf,
        annotation: FindingAnnotation,
    ) -> Self {
        Self {
            invoker,
            repository,
            uploads_dir,
            annotation,
        }
    }

    /// Two-class screening with placeholder fallback
    pub async fn analyze_oral(&self, patient_id: &str, image_url: &str) -> ApiResult<DiagnosisResult> {
        let image_path = resolve_upload_path(&self.uploads_dir, image_url)?;
        tracing::info!(
            patient_id = %patient_id,
            image = %image_path.display(),
            "Starting screening inference"
        );

        let classification = self.invoker.classify(&image_path).await;
        let results = match classification {
            Ok(classification) => screening_findings(&classification, self.annotation),
            Err(e) => {
                tracing::warn!(
                    patient_id = %patient_id,
                    error = %e,
                    "Screening inference failed, returning placeholder result"
                );
                fallback_findings(&mut rand::thread_rng(), self.annotation)
            }
        };

        tracing::info!(
            patient_id = %patient_id,
            status = %results.status_code,
            fallback = results.fallback,
            "Screening diagnosis complete"
        );

        self.finish(patient_id, image_url, DiagnosisType::Oral, results).await
    }

    /// Three-class detection; no fallback
    pub async fn analyze_oral_deep(
        &self,
        patient_id: &str,
        image_url: &str,
    ) -> ApiResult<DiagnosisResult> {
        let image_path = resolve_upload_path(&self.uploads_dir, image_url)?;
        require_path(PathRole::Image, &image_path)?;

        let output_name = deep_output_dir_name();
        let output_dir = self.uploads_dir.join(&output_name);

        tracing::info!(
            patient_id = %patient_id,
            image = %image_path.display(),
            output_dir = %output_dir.display(),
            "Starting detection inference"
        );

        let record = match self.invoker.detect(&image_path, &output_dir).await {
            Ok(record) => record,
            Err(e) => {
                discard_output_dir(&output_dir).await;
                return Err(e.into());
            }
        };
        let results = detection_findings(record, &output_name, self.annotation);

        tracing::info!(
            patient_id = %patient_id,
            status = %results.status_code,
            opmd = results.opmd.unwrap_or_default(),
            "Detection diagnosis complete"
        );

        self.finish(patient_id, image_url, DiagnosisType::OralDeep, results).await
    }

    async fn finish(
        &self,
        patient_id: &str,
        image_url: &str,
        kind: DiagnosisType,
        results: DiagnosisFindings,
    ) -> ApiResult<DiagnosisResult> {
        let diagnosis = DiagnosisResult {
            id: None,
            patient_id: patient_id.to_string(),
            kind,
            image_url: image_url.to_string(),
            results,
            created_at: None,
            updated_at: None,
        };

        match &self.repository {
            Some(repository) => Ok(repository.save(diagnosis).await?),
            None => Ok(diagnosis),
        }
    }
}

/// Map an upload URL onto the uploads directory
///
/// Only the final path component is kept, so `imageUrl` can never point
/// outside the uploads directory.
pub fn resolve_upload_path(uploads_dir: &Path, image_url: &str) -> ApiResult<PathBuf> {
    let file_name = image_url
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .map(str::trim)
        .filter(|name| !name.is_empty() && *name != "." && *name != "..")
        .ok_or_else(|| ApiError::BadRequest(format!("Invalid image URL: {}", image_url)))?;
    Ok(uploads_dir.join(file_name))
}

/// `deep_<millis>_<8 hex>`; the random suffix keeps same-millisecond requests apart
pub fn deep_output_dir_name() -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!(
        "{}{}_{}",
        DEEP_OUTPUT_PREFIX,
        Utc::now().timestamp_millis(),
        &suffix[..8]
    )
}

/// Best-effort removal of a failed run's output
async fn discard_output_dir(output_dir: &Path) {
    match tokio::fs::remove_dir_all(output_dir).await {
        Ok(()) => tracing::debug!(output_dir = %output_dir.display(), "Removed failed detection output"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!(
            output_dir = %output_dir.display(),
            error = %e,
            "Failed to remove detection output"
        ),
    }
}

/// Findings for a successful screening inference
pub fn screening_findings(
    classification: &ClassificationResult,
    annotation: FindingAnnotation,
) -> DiagnosisFindings {
    let class = classification.predicted_class.as_str();
    let confidence = classification.confidence;
    let status = classify_binary(class, confidence);
    let texts = resolve_with(status, Some(confidence), annotation);

    let mut findings = DiagnosisFindings::new(
        status,
        Severity::for_screening(class, confidence),
        confidence,
        texts,
    );
    findings.predicted_class = Some(classification.predicted_class.clone());
    findings.opmd = Some(classification.opmd_score());
    findings
}

/// Placeholder findings used when screening inference is unavailable
pub fn fallback_findings<R: Rng>(rng: &mut R, annotation: FindingAnnotation) -> DiagnosisFindings {
    let mock = MockScores::generate(rng);
    let confidence = mock.max();
    let status = StatusCode::OpmdSuspected;
    let texts = resolve_with(status, Some(confidence), annotation);

    let mut findings = DiagnosisFindings::new(status, Severity::Medium, confidence, texts);
    findings.olp = mock.olp;
    findings.olk = mock.olk;
    findings.ooml = Some(mock.ooml);
    findings.fallback = true;
    findings
}

/// Findings for a detection record written under `/uploads/<output_name>/`
pub fn detection_findings(
    record: DetectionRecord,
    output_name: &str,
    annotation: FindingAnnotation,
) -> DiagnosisFindings {
    let scores = record.deep_scores();
    let status = classify_deep(&scores);
    let texts = resolve_with(status, Some(record.top_confidence), annotation);

    let mut findings = DiagnosisFindings::new(
        status,
        Severity::for_detection(record.top_confidence),
        record.top_confidence,
        texts,
    );
    findings.olp = scores.olp;
    findings.olk = scores.olk;
    findings.osf = Some(scores.osf);
    findings.opmd = Some(scores.opmd());
    findings.annotated_image = record
        .vis_image
        .as_deref()
        .map(|vis| format!("/uploads/{}/{}", output_name, vis.replace('\\', "/")));
    findings.detections = Some(record.detections);
    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoker::InvokeError;
    use async_trait::async_trait;
    use mimg_common::models::Detection;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Detector that leaves a partial output file behind and then fails
    #[derive(Default)]
    struct BrokenDetector {
        detect_calls: AtomicUsize,
    }

    #[async_trait]
    impl Invoker for BrokenDetector {
        async fn classify(&self, _image: &Path) -> Result<ClassificationResult, InvokeError> {
            unreachable!("screening is not exercised here")
        }

        async fn detect(&self, _image: &Path, output_dir: &Path) -> Result<DetectionRecord, InvokeError> {
            self.detect_calls.fetch_add(1, Ordering::SeqCst);
            std::fs::create_dir_all(output_dir.join("vis")).unwrap();
            std::fs::write(output_dir.join("batch_results.jsonl"), b"").unwrap();
            Err(InvokeError::ParseFailure {
                reason: "empty batch results".to_string(),
                raw: String::new(),
            })
        }

        async fn segment(&self, _image: &Path) -> Result<PathBuf, InvokeError> {
            unreachable!("segmentation is not exercised here")
        }
    }

    fn detection_service(uploads: &Path) -> (Arc<BrokenDetector>, DiagnosisService) {
        let detector = Arc::new(BrokenDetector::default());
        let service = DiagnosisService::new(
            detector.clone(),
            None,
            uploads.to_path_buf(),
            FindingAnnotation::Suppressed,
        );
        (detector, service)
    }

    fn detection(class_name: &str, confidence: f64) -> Detection {
        Detection {
            class_name: class_name.to_string(),
            confidence,
            extra: Default::default(),
        }
    }

    #[test]
    fn test_resolve_upload_path_keeps_file_name_only() {
        let uploads = Path::new("/srv/uploads");
        assert_eq!(
            resolve_upload_path(uploads, "/uploads/mouth_01.jpg").unwrap(),
            PathBuf::from("/srv/uploads/mouth_01.jpg")
        );
        assert_eq!(
            resolve_upload_path(uploads, "http://host:5000/uploads/../../etc/passwd").unwrap(),
            PathBuf::from("/srv/uploads/passwd")
        );
        assert_eq!(
            resolve_upload_path(uploads, "C:\\images\\a.png").unwrap(),
            PathBuf::from("/srv/uploads/a.png")
        );
        assert!(resolve_upload_path(uploads, "/uploads/").is_err());
        assert!(resolve_upload_path(uploads, "..").is_err());
    }

    #[test]
    fn test_deep_output_dir_names_are_unique() {
        let a = deep_output_dir_name();
        let b = deep_output_dir_name();
        assert!(a.starts_with("deep_"));
        assert_eq!(a.rsplit('_').next().unwrap().len(), 8);
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_deep_analysis_rejects_missing_image_before_detection() {
        let dir = tempfile::tempdir().unwrap();
        let (detector, service) = detection_service(dir.path());

        let err = service
            .analyze_oral_deep("p1", "/uploads/missing.jpg")
            .await
            .unwrap_err();

        match &err {
            ApiError::Invocation(InvokeError::MissingPath { what, path }) => {
                assert_eq!(*what, PathRole::Image);
                assert_eq!(path, &dir.path().join("missing.jpg"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(detector.detect_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_failed_deep_analysis_removes_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.jpg"), b"jpeg").unwrap();
        let (detector, service) = detection_service(dir.path());

        let err = service.analyze_oral_deep("p1", "/uploads/a.jpg").await.unwrap_err();
        assert!(matches!(err, ApiError::Invocation(InvokeError::ParseFailure { .. })));
        assert_eq!(detector.detect_calls.load(Ordering::SeqCst), 1);

        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|name| name.starts_with(DEEP_OUTPUT_PREFIX))
            .collect();
        assert!(leftovers.is_empty(), "left behind: {:?}", leftovers);
        assert!(dir.path().join("a.jpg").exists());
    }

    #[test]
    fn test_screening_findings_opmd_positive() {
        let classification = ClassificationResult {
            predicted_class: "OPMD".to_string(),
            confidence: 0.92,
        };
        let findings = screening_findings(&classification, FindingAnnotation::Suppressed);

        assert_eq!(findings.status_code, StatusCode::OpmdPositive);
        assert_eq!(findings.severity, Severity::High);
        assert!(findings.finding.contains("潜在恶性疾病阳性待排"));
        assert_eq!(findings.predicted_class.as_deref(), Some("OPMD"));
        assert_eq!(findings.opmd, Some(0.92));
        assert_eq!(findings.olp, 0.0);
        assert_eq!(findings.olk, 0.0);
        assert!(!findings.fallback);
    }

    #[test]
    fn test_screening_findings_low_confidence_opmd_is_negative() {
        let classification = ClassificationResult {
            predicted_class: "OPMD".to_string(),
            confidence: 0.35,
        };
        let findings = screening_findings(&classification, FindingAnnotation::Suppressed);
        assert_eq!(findings.status_code, StatusCode::OpmdNegative);
        assert_eq!(findings.severity, Severity::Medium);
    }

    #[test]
    fn test_fallback_findings_within_jitter() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let findings = fallback_findings(&mut rng, FindingAnnotation::Suppressed);
            assert_eq!(findings.status_code, StatusCode::OpmdSuspected);
            assert_eq!(findings.severity, Severity::Medium);
            assert!(findings.fallback);

            let half = MockScores::JITTER / 2.0;
            assert!((findings.olp - MockScores::BASE.olp).abs() <= half + 1e-12);
            assert!((findings.olk - MockScores::BASE.olk).abs() <= half + 1e-12);
            let ooml = findings.ooml.unwrap();
            assert!(ooml >= 0.01 && (ooml - MockScores::BASE.ooml).abs() <= half + 1e-12);

            let max = findings.olp.max(findings.olk).max(ooml);
            assert_eq!(findings.confidence, max);
        }
    }

    #[test]
    fn test_detection_findings_osf() {
        let record = DetectionRecord {
            detections: vec![detection("OSF", 0.77)],
            top_confidence: 0.77,
            vis_image: Some("vis\\mouth.jpg".to_string()),
        };
        let findings = detection_findings(record, "deep_1_abcdef01", FindingAnnotation::Suppressed);

        assert_eq!(findings.status_code, StatusCode::OsfPositive);
        assert_eq!(findings.opmd, Some(0.77));
        assert_eq!(findings.osf, Some(0.77));
        assert_eq!(findings.olp, 0.0);
        assert_eq!(findings.severity, Severity::Medium);
        assert_eq!(
            findings.annotated_image.as_deref(),
            Some("/uploads/deep_1_abcdef01/vis/mouth.jpg")
        );
        assert_eq!(findings.detections.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_detection_findings_case_insensitive_and_unknown_ignored() {
        let record = DetectionRecord {
            detections: vec![
                detection("olk", 0.4),
                detection("OLK", 0.85),
                detection("caries", 0.99),
            ],
            top_confidence: 0.99,
            vis_image: None,
        };
        let findings = detection_findings(record, "deep_x", FindingAnnotation::Suppressed);

        assert_eq!(findings.status_code, StatusCode::OlkPositive);
        assert_eq!(findings.olk, 0.85);
        assert_eq!(findings.opmd, Some(0.85));
        assert_eq!(findings.severity, Severity::High);
        assert!(findings.annotated_image.is_none());
    }

    #[test]
    fn test_detection_findings_without_detections_is_negative() {
        let record = DetectionRecord::default();
        let findings = detection_findings(record, "deep_x", FindingAnnotation::Suppressed);
        assert_eq!(findings.status_code, StatusCode::OpmdNegative);
        assert_eq!(findings.severity, Severity::Low);
        assert_eq!(findings.opmd, Some(0.0));
    }

    #[test]
    fn test_confidence_annotation_applied_when_enabled() {
        let classification = ClassificationResult {
            predicted_class: "Benign".to_string(),
            confidence: 0.9,
        };
        let findings = screening_findings(&classification, FindingAnnotation::Percent);
        assert!(findings.finding.ends_with("（置信度 90.0%）"));
        assert_eq!(findings.findings, vec![findings.finding.clone()]);
    }
}
