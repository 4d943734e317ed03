//! Configuration loading and resolution
//!
//! Every setting follows the same priority order:
//! 1. Environment variable (highest priority)
//! 2. TOML config file
//! 3. Compiled default (fallback)
//!
//! Resolution itself is a pure function of an env lookup and a parsed
//! [`TomlConfig`]; only [`load_toml_config`] and
//! [`ServiceConfig::from_environment`] touch the outside world.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Config file name searched in the working directory and config dir
pub const CONFIG_FILE_NAME: &str = "mimg-dx.toml";

pub const CLASSIFICATION_TIMEOUT: Duration = Duration::from_secs(30);
pub const DETECTION_TIMEOUT: Duration = Duration::from_secs(90);
pub const SEGMENTATION_TIMEOUT: Duration = Duration::from_secs(120);

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_BIND: &str = "0.0.0.0";
const DEFAULT_INTERPRETER: &str = "python";
const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";
const EXTRA_ORIGINS: [&str; 3] = [
    "http://localhost:3001",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:3001",
];

/// On-disk TOML configuration; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub server: ServerSection,
    pub python: PythonSection,
    pub paths: PathsSection,
    pub persistence: PersistenceSection,
    pub report: ReportSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub port: Option<u16>,
    pub bind: Option<String>,
    pub frontend_url: Option<String>,
}

/// Interpreter per inference stage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PythonSection {
    pub classification: Option<String>,
    pub yolo_detection: Option<String>,
    pub segmentation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsSection {
    pub workspace_root: Option<PathBuf>,
    pub uploads_dir: Option<PathBuf>,
    pub classification_script: Option<PathBuf>,
    pub yolo_script: Option<PathBuf>,
    pub yolo_model: Option<PathBuf>,
    pub segmentation_dir: Option<PathBuf>,
    pub segmentation_script: Option<PathBuf>,
    pub segmentation_config: Option<PathBuf>,
    pub segmentation_weights: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistenceSection {
    pub enabled: Option<bool>,
    pub database: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSection {
    pub show_confidence: Option<bool>,
}

/// Resolved interpreter paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonPaths {
    pub classification: String,
    pub yolo_detection: String,
    pub segmentation: String,
}

impl PythonPaths {
    /// One-line summary for startup logging
    pub fn summary(&self) -> String {
        format!(
            "classification={}; yolo_detection={}; segmentation={}",
            self.classification, self.yolo_detection, self.segmentation
        )
    }
}

/// Resolved script, weight and output locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptPaths {
    /// Working directory for the classification and detection scripts
    pub workspace_root: PathBuf,
    pub classification_script: PathBuf,
    pub yolo_script: PathBuf,
    pub yolo_model: PathBuf,
    /// Working directory for the segmentation script
    pub segmentation_dir: PathBuf,
    pub segmentation_script: PathBuf,
    pub segmentation_config: PathBuf,
    pub segmentation_weights: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub bind: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub server: ServerSettings,
    pub python: PythonPaths,
    pub scripts: ScriptPaths,
    pub uploads_dir: PathBuf,
    pub persistence_enabled: bool,
    pub database_path: PathBuf,
    pub show_confidence: bool,
}

impl ServiceConfig {
    /// Resolve against the process environment
    pub fn from_environment(toml: &TomlConfig) -> Self {
        Self::resolve(|key| std::env::var(key).ok(), toml)
    }

    /// Rebase every relative path onto `base`
    ///
    /// Scripts run with their own working directory, so paths handed to
    /// them must not depend on the service's cwd. Bare interpreter names
    /// stay as they are and are looked up through `PATH`.
    pub fn anchored_at(mut self, base: &Path) -> Self {
        let anchor = |path: &mut PathBuf| {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        };

        let scripts = &mut self.scripts;
        for path in [
            &mut scripts.workspace_root,
            &mut scripts.classification_script,
            &mut scripts.yolo_script,
            &mut scripts.yolo_model,
            &mut scripts.segmentation_dir,
            &mut scripts.segmentation_script,
            &mut scripts.segmentation_config,
            &mut scripts.segmentation_weights,
            &mut self.uploads_dir,
            &mut self.database_path,
        ] {
            anchor(path);
        }

        let python = &mut self.python;
        for program in [
            &mut python.classification,
            &mut python.yolo_detection,
            &mut python.segmentation,
        ] {
            let path = Path::new(program.as_str());
            if path.is_relative() && path.components().count() > 1 {
                *program = base.join(path).to_string_lossy().into_owned();
            }
        }

        self
    }

    /// Resolve with env > TOML > default for every setting
    ///
    /// Empty environment values count as unset.
    pub fn resolve<F>(lookup: F, toml: &TomlConfig) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let env_path = |key: &str| env(key).map(PathBuf::from);

        // Detection and segmentation inherit the classification interpreter
        let classification_env = env("PYTHON_EXE_PATH");
        let classification_toml = toml.python.classification.clone();
        let classification = classification_env
            .clone()
            .or_else(|| classification_toml.clone())
            .unwrap_or_else(|| DEFAULT_INTERPRETER.to_string());
        let inherit = |own_env: Option<String>, own_toml: &Option<String>| {
            own_env
                .or_else(|| own_toml.clone())
                .or_else(|| classification_env.clone())
                .or_else(|| classification_toml.clone())
                .unwrap_or_else(|| DEFAULT_INTERPRETER.to_string())
        };
        let python = PythonPaths {
            yolo_detection: inherit(env("YOLO_PYTHON_EXE_PATH"), &toml.python.yolo_detection),
            segmentation: inherit(env("SEG_PYTHON_EXE_PATH"), &toml.python.segmentation),
            classification,
        };

        let paths = &toml.paths;
        let workspace_root = env_path("MIMG_WORKSPACE_ROOT")
            .or_else(|| paths.workspace_root.clone())
            .unwrap_or_else(|| PathBuf::from(".."));
        let yolo_dir = workspace_root.join("YOLO12-Simplified-OralImages");
        let segmentation_dir = env_path("MIMG_SEG_DIR")
            .or_else(|| paths.segmentation_dir.clone())
            .unwrap_or_else(|| workspace_root.join("MMDETECTION_mini"));
        let seg_eval_dir = segmentation_dir.join("eval_ZJY_1102_mask2");

        let scripts = ScriptPaths {
            classification_script: env_path("MIMG_CLASSIFY_SCRIPT")
                .or_else(|| paths.classification_script.clone())
                .unwrap_or_else(|| {
                    workspace_root
                        .join("Classify-LM-Simple-OralImages")
                        .join("classify_image.py")
                }),
            yolo_script: env_path("MIMG_YOLO_SCRIPT")
                .or_else(|| paths.yolo_script.clone())
                .unwrap_or_else(|| yolo_dir.join("Yolo12Inference.py")),
            yolo_model: env_path("YOLO_MODEL_PATH")
                .or_else(|| paths.yolo_model.clone())
                .unwrap_or_else(|| yolo_dir.join("best_155epoch_shengkouV2.pt")),
            segmentation_script: env_path("MIMG_SEG_SCRIPT")
                .or_else(|| paths.segmentation_script.clone())
                .unwrap_or_else(|| segmentation_dir.join("image_demo.py")),
            segmentation_config: env_path("MIMG_SEG_CONFIG")
                .or_else(|| paths.segmentation_config.clone())
                .unwrap_or_else(|| seg_eval_dir.join("mask2former_swin_s.py")),
            segmentation_weights: env_path("MIMG_SEG_WEIGHTS")
                .or_else(|| paths.segmentation_weights.clone())
                .unwrap_or_else(|| seg_eval_dir.join("Swing-S-75000-best-data.pth")),
            segmentation_dir,
            workspace_root,
        };

        let uploads_dir = env_path("MIMG_UPLOADS_DIR")
            .or_else(|| paths.uploads_dir.clone())
            .unwrap_or_else(|| PathBuf::from("uploads"));

        // NO_DB=true bypasses persistence; otherwise TOML decides
        let persistence_enabled = match env("NO_DB") {
            Some(value) => !parse_flag(&value),
            None => toml.persistence.enabled.unwrap_or(true),
        };
        let database_path = env_path("MIMG_DATABASE")
            .or_else(|| toml.persistence.database.clone())
            .unwrap_or_else(|| PathBuf::from("mimg.db"));

        let show_confidence = env("MIMG_SHOW_CONFIDENCE")
            .map(|v| parse_flag(&v))
            .or(toml.report.show_confidence)
            .unwrap_or(false);

        let frontend_url = env("FRONTEND_URL")
            .or_else(|| toml.server.frontend_url.clone())
            .unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string());
        let mut allowed_origins = vec![frontend_url];
        for origin in EXTRA_ORIGINS {
            if !allowed_origins.iter().any(|o| o == origin) {
                allowed_origins.push(origin.to_string());
            }
        }

        let server = ServerSettings {
            bind: toml.server.bind.clone().unwrap_or_else(|| DEFAULT_BIND.to_string()),
            port: toml.server.port.unwrap_or(DEFAULT_PORT),
            allowed_origins,
        };

        Self {
            server,
            python,
            scripts,
            uploads_dir,
            persistence_enabled,
            database_path,
            show_confidence,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes" | "on")
}

/// Candidate config file locations, most specific first
pub fn config_file_candidates(explicit: Option<&Path>) -> Vec<PathBuf> {
    if let Some(path) = explicit {
        return vec![path.to_path_buf()];
    }

    let mut candidates = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("mimg").join(CONFIG_FILE_NAME));
    }
    candidates
}

/// Load the TOML config file
///
/// When no candidate exists a warning is logged and defaults are used.
/// An explicitly named file that does not exist, or any file that fails
/// to parse, is a configuration error.
pub fn load_toml_config(explicit: Option<&Path>) -> Result<(TomlConfig, Option<PathBuf>)> {
    for candidate in config_file_candidates(explicit) {
        if !candidate.exists() {
            continue;
        }
        let content = std::fs::read_to_string(&candidate)?;
        let config: TomlConfig = toml::from_str(&content).map_err(|e| {
            Error::Config(format!("Parse TOML {} failed: {}", candidate.display(), e))
        })?;
        info!("Loaded config file: {}", candidate.display());
        return Ok((config, Some(candidate)));
    }

    if let Some(path) = explicit {
        return Err(Error::Config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    warn!("No {} found, using environment and defaults", CONFIG_FILE_NAME);
    Ok((TomlConfig::default(), None))
}
