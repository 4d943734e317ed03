//! Bounded child-process execution

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

use super::{InvokeError, PathRole};

/// One external command invocation
#[derive(Debug, Clone)]
pub struct ProcessSpec {
    pub program: String,
    pub args: Vec<OsString>,
    pub cwd: PathBuf,
    pub timeout: Duration,
}

impl ProcessSpec {
    pub fn new(program: impl Into<String>, cwd: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
            timeout,
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Command line for logging
    pub fn display(&self) -> String {
        let mut line = format!("\"{}\"", self.program);
        for arg in &self.args {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Fail unless `path` exists
pub fn require_path(what: PathRole, path: &Path) -> Result<(), InvokeError> {
    if path.exists() {
        Ok(())
    } else {
        Err(InvokeError::MissingPath {
            what,
            path: path.to_path_buf(),
        })
    }
}

/// Fail unless `program` exists
///
/// Bare names such as `python` are resolved through `PATH` at spawn time
/// and are not checked here.
pub fn require_program(what: PathRole, program: &str) -> Result<(), InvokeError> {
    let path = Path::new(program);
    if path.components().count() <= 1 && !path.is_absolute() {
        return Ok(());
    }
    require_path(what, path)
}

/// Run `spec` to completion or until its timeout elapses
///
/// The child is killed when the timeout fires. Non-zero exit status is an
/// error carrying the captured stderr.
pub async fn run(spec: &ProcessSpec) -> Result<ProcessOutput, InvokeError> {
    tracing::debug!(
        command = %spec.display(),
        cwd = %spec.cwd.display(),
        timeout_secs = spec.timeout.as_secs(),
        "Spawning inference process"
    );

    let child = Command::new(&spec.program)
        .args(&spec.args)
        .current_dir(&spec.cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(InvokeError::Spawn)?;

    // Dropping the wait future on timeout drops the child, which kills it
    let output = match tokio::time::timeout(spec.timeout, child.wait_with_output()).await {
        Ok(result) => result?,
        Err(_) => {
            tracing::warn!(
                command = %spec.display(),
                timeout_secs = spec.timeout.as_secs(),
                "Inference process timed out"
            );
            return Err(InvokeError::TimedOut { after: spec.timeout });
        }
    };

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
        return Err(InvokeError::NonZeroExit {
            code: output.status.code(),
            stderr,
        });
    }

    if !stderr.trim().is_empty() {
        tracing::debug!(stderr = %stderr.trim(), "Inference process wrote to stderr");
    }

    Ok(ProcessOutput { stdout, stderr })
}
