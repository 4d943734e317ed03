//! # mimg common library
//!
//! Shared code for the medical-imaging diagnosis service:
//! - Status codes and the two classifiers that produce them
//! - Report text bundles keyed by status code
//! - Diagnosis and patient data model
//! - Configuration loading (env > TOML > compiled defaults)

pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod status;

pub use error::{Error, Result};
pub use report::{resolve, ReportTextBundle};
pub use status::{classify_binary, classify_deep, DeepScores, Severity, StatusCode};
