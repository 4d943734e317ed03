//! Diagnosis and patient data model
//!
//! Field names follow the JSON shape the frontend consumes: camelCase for
//! most fields, upper-case class names for scores, and the snake_case keys
//! emitted by the Python scripts.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::report::ReportTextBundle;
use crate::status::{DeepClass, DeepScores, Severity, StatusCode};

/// Output of the two-class screening script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub predicted_class: String,
    pub confidence: f64,
}

impl ClassificationResult {
    /// Screening scores in the frontend's OLP/OLK/OPMD shape
    ///
    /// OLP and OLK are always zero; OPMD carries the model's belief in
    /// OPMD, clamped to [0.01, 0.99].
    pub fn opmd_score(&self) -> f64 {
        let raw = match self.predicted_class.as_str() {
            "Benign" => (1.0 - self.confidence).max(0.01),
            _ => self.confidence,
        };
        raw.clamp(0.01, 0.99)
    }
}

/// One detection box from the YOLO script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub class_name: String,
    pub confidence: f64,
    /// Anything else the script emits (boxes, class ids) is passed through
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Per-image record written by the YOLO script
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionRecord {
    /// Required: a record without it is an error report, not a negative result
    pub detections: Vec<Detection>,
    pub top_confidence: f64,
    /// Visualisation image, relative to the output directory
    #[serde(default)]
    pub vis_image: Option<String>,
}

impl DetectionRecord {
    /// Per-class maxima over all detections; unknown classes are ignored
    pub fn deep_scores(&self) -> DeepScores {
        let mut scores = DeepScores::default();
        for detection in &self.detections {
            if let Some(class) = DeepClass::from_label(&detection.class_name) {
                scores.observe(class, detection.confidence);
            }
        }
        scores
    }
}

/// Placeholder scores used when the screening model is unavailable
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MockScores {
    #[serde(rename = "OLP")]
    pub olp: f64,
    #[serde(rename = "OLK")]
    pub olk: f64,
    #[serde(rename = "OOML")]
    pub ooml: f64,
}

impl MockScores {
    pub const BASE: MockScores = MockScores {
        olp: 0.184,
        olk: 0.651,
        ooml: 0.121,
    };

    /// Full width of the jitter window centred on each base value
    pub const JITTER: f64 = 0.15;

    /// Base values each moved by up to ±JITTER/2, clamped to [0.01, 0.99]
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let mut jitter = |base: f64| {
            let offset = (rng.gen::<f64>() - 0.5) * Self::JITTER;
            (base + offset).clamp(0.01, 0.99)
        };
        MockScores {
            olp: jitter(Self::BASE.olp),
            olk: jitter(Self::BASE.olk),
            ooml: jitter(Self::BASE.ooml),
        }
    }

    pub fn max(&self) -> f64 {
        self.olp.max(self.olk).max(self.ooml)
    }
}

/// Which flow produced a diagnosis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosisType {
    Oral,
    OralDeep,
}

impl DiagnosisType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosisType::Oral => "oral",
            DiagnosisType::OralDeep => "oral-deep",
        }
    }
}

/// Scores, status and texts of one diagnosis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisFindings {
    #[serde(rename = "predicted_class", default, skip_serializing_if = "Option::is_none")]
    pub predicted_class: Option<String>,
    pub confidence: f64,
    #[serde(rename = "OLP")]
    pub olp: f64,
    #[serde(rename = "OLK")]
    pub olk: f64,
    #[serde(rename = "OSF", default, skip_serializing_if = "Option::is_none")]
    pub osf: Option<f64>,
    #[serde(rename = "OOML", default, skip_serializing_if = "Option::is_none")]
    pub ooml: Option<f64>,
    #[serde(rename = "OPMD", default, skip_serializing_if = "Option::is_none")]
    pub opmd: Option<f64>,
    pub finding: String,
    pub findings: Vec<String>,
    pub recommendation: String,
    pub knowledge: String,
    pub report_recommendation: String,
    pub status_code: StatusCode,
    pub severity: Severity,
    /// True when the scores are placeholders, not model output
    #[serde(default)]
    pub fallback: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotated_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detections: Option<Vec<Detection>>,
}

impl DiagnosisFindings {
    /// Findings carrying `texts`, with every score zeroed
    pub fn new(
        status_code: StatusCode,
        severity: Severity,
        confidence: f64,
        texts: ReportTextBundle,
    ) -> Self {
        Self {
            predicted_class: None,
            confidence,
            olp: 0.0,
            olk: 0.0,
            osf: None,
            ooml: None,
            opmd: None,
            findings: vec![texts.finding.clone()],
            finding: texts.finding,
            recommendation: texts.recommendation,
            knowledge: texts.knowledge,
            report_recommendation: texts.report_recommendation,
            status_code,
            severity,
            fallback: false,
            annotated_image: None,
            detections: None,
        }
    }
}

/// A diagnosis, stored or returned directly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisResult {
    /// Assigned on save; absent when persistence is disabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub patient_id: String,
    #[serde(rename = "type")]
    pub kind: DiagnosisType,
    pub image_url: String,
    pub results: DiagnosisFindings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of the diagnosis endpoints
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDiagnosisRequest {
    #[serde(default)]
    pub patient_id: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Stored patient record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub history: String,
    /// YYYY-MM-DD
    pub date: String,
    pub index: String,
    #[serde(default)]
    pub biopsy_confirmed: bool,
    #[serde(default)]
    pub doctor: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Patient {
    /// Build a fresh record from a creation request
    pub fn from_request(request: CreatePatientRequest, now: DateTime<Utc>) -> Self {
        let millis = now.timestamp_millis();
        let suffix = &uuid::Uuid::new_v4().simple().to_string()[..6];
        Self {
            id: format!("patient-{}-{}", millis, suffix),
            name: request.name,
            history: request.medical_history.join(", "),
            date: now.format("%Y-%m-%d").to_string(),
            index: millis.to_string(),
            biopsy_confirmed: false,
            doctor: Some("Unknown".to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update; empty fields keep their current value
    pub fn apply(&mut self, update: UpdatePatientRequest, now: DateTime<Utc>) {
        if let Some(name) = update.name.filter(|n| !n.trim().is_empty()) {
            self.name = name;
        }
        if let Some(history) = update.medical_history.filter(|h| !h.is_empty()) {
            self.history = history.join(", ");
        }
        if let Some(biopsy) = update.biopsy_confirmed {
            self.biopsy_confirmed = biopsy;
        }
        if let Some(doctor) = update.doctor {
            self.doctor = Some(doctor);
        }
        self.updated_at = now;
    }
}

/// POST /api/patients body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePatientRequest {
    pub name: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub medical_history: Vec<String>,
}

/// PUT /api/patients/:id body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePatientRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub medical_history: Option<Vec<String>>,
    #[serde(default)]
    pub biopsy_confirmed: Option<bool>,
    #[serde(default)]
    pub doctor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_opmd_score_mapping() {
        let opmd = ClassificationResult { predicted_class: "OPMD".into(), confidence: 0.92 };
        assert_eq!(opmd.opmd_score(), 0.92);

        let benign = ClassificationResult { predicted_class: "Benign".into(), confidence: 0.7 };
        assert!((benign.opmd_score() - 0.3).abs() < 1e-9);

        let certain = ClassificationResult { predicted_class: "Benign".into(), confidence: 1.0 };
        assert_eq!(certain.opmd_score(), 0.01);

        let saturated = ClassificationResult { predicted_class: "OPMD".into(), confidence: 1.0 };
        assert_eq!(saturated.opmd_score(), 0.99);
    }

    #[test]
    fn test_detection_record_parsing_keeps_extra_fields() {
        let json = r#"{
            "detections": [
                {"class_name": "osf", "confidence": 0.77, "bbox": [1, 2, 3, 4]},
                {"class_name": "OLP", "confidence": 0.31},
                {"class_name": "calculus", "confidence": 0.99}
            ],
            "top_confidence": 0.99,
            "vis_image": "vis\\img.jpg"
        }"#;
        let record: DetectionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.detections[0].extra["bbox"], serde_json::json!([1, 2, 3, 4]));

        let scores = record.deep_scores();
        assert_eq!(scores, DeepScores::new(0.31, 0.0, 0.77));
    }

    #[test]
    fn test_detection_record_requires_detections_and_top_confidence() {
        assert!(serde_json::from_str::<DetectionRecord>("{}").is_err());
        assert!(serde_json::from_str::<DetectionRecord>(r#"{"error":"CUDA out of memory"}"#).is_err());
        assert!(serde_json::from_str::<DetectionRecord>(r#"{"detections":[]}"#).is_err());

        let record: DetectionRecord =
            serde_json::from_str(r#"{"detections":[],"top_confidence":0.0}"#).unwrap();
        assert!(record.vis_image.is_none());
        assert_eq!(record.deep_scores(), DeepScores::default());
    }

    #[test]
    fn test_mock_scores_stay_in_jitter_window() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let mock = MockScores::generate(&mut rng);
            assert!((mock.olp - MockScores::BASE.olp).abs() <= MockScores::JITTER / 2.0);
            assert!((mock.olk - MockScores::BASE.olk).abs() <= MockScores::JITTER / 2.0);
            assert!((mock.ooml - MockScores::BASE.ooml).abs() <= MockScores::JITTER / 2.0);
            assert!(mock.ooml >= 0.01);
        }
    }

    #[test]
    fn test_patient_from_request() {
        let now = Utc::now();
        let patient = Patient::from_request(
            CreatePatientRequest {
                name: "张三".into(),
                medical_history: vec!["吸烟".into(), "槟榔".into()],
                ..Default::default()
            },
            now,
        );
        assert!(patient.id.starts_with("patient-"));
        assert_eq!(patient.history, "吸烟, 槟榔");
        assert_eq!(patient.doctor.as_deref(), Some("Unknown"));
        assert!(!patient.biopsy_confirmed);
        assert_eq!(patient.date.len(), 10);
    }

    #[test]
    fn test_patient_update_keeps_unset_fields() {
        let now = Utc::now();
        let mut patient = Patient::from_request(
            CreatePatientRequest { name: "A".into(), medical_history: vec!["x".into()], ..Default::default() },
            now,
        );
        patient.apply(
            UpdatePatientRequest { name: Some("".into()), biopsy_confirmed: Some(true), ..Default::default() },
            now,
        );
        assert_eq!(patient.name, "A");
        assert_eq!(patient.history, "x");
        assert!(patient.biopsy_confirmed);
    }

    #[test]
    fn test_findings_wire_shape() {
        let texts = crate::report::resolve(StatusCode::OpmdPositive, None);
        let mut findings = DiagnosisFindings::new(StatusCode::OpmdPositive, Severity::High, 0.92, texts);
        findings.predicted_class = Some("OPMD".into());
        findings.opmd = Some(0.92);

        let json = serde_json::to_value(&findings).unwrap();
        assert_eq!(json["predicted_class"], "OPMD");
        assert_eq!(json["statusCode"], "OPMD_POSITIVE");
        assert_eq!(json["severity"], "high");
        assert_eq!(json["OPMD"], 0.92);
        assert_eq!(json["OLP"], 0.0);
        assert!(json.get("OSF").is_none());
        assert_eq!(json["findings"][0], json["finding"]);
    }
}
