//! Service layer between the HTTP handlers and the inference invoker

pub mod diagnosis;
pub mod segmentation;

pub use diagnosis::DiagnosisService;
pub use segmentation::{EnvironmentStatus, SegmentationResult, SegmentationService};
