//! Process-level tests for the inference invoker
//!
//! Shell scripts stand in for the Python inference scripts; `sh` plays
//! the interpreter.

#![cfg(unix)]

use mimg_common::config::{ServiceConfig, TomlConfig};
use std::path::{Path, PathBuf};
use std::time::Duration;

use mimg_dx::invoker::{extract_classification, run, InvokeError, Invoker, ProcessSpec, PythonInvoker};

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}

fn sh(dir: &Path, script: &str, timeout: Duration) -> ProcessSpec {
    ProcessSpec::new("sh", dir, timeout).arg("-c").arg(script)
}

/// Invoker whose interpreter is `sh` and whose scripts live in `dir`
fn shell_invoker(dir: &Path, overrides: &[(&str, PathBuf)]) -> PythonInvoker {
    let root = dir.to_string_lossy().to_string();
    let overrides: Vec<(String, String)> = overrides
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string_lossy().to_string()))
        .collect();
    let config = ServiceConfig::resolve(
        |key| {
            if key == "MIMG_WORKSPACE_ROOT" {
                return Some(root.clone());
            }
            if key == "PYTHON_EXE_PATH" {
                return Some("sh".to_string());
            }
            overrides
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        },
        &TomlConfig::default(),
    );
    PythonInvoker::from_config(&config)
}

#[tokio::test]
async fn test_run_captures_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&sh(dir.path(), "echo hello; pwd", Duration::from_secs(10)))
        .await
        .unwrap();

    let mut lines = output.stdout.lines();
    assert_eq!(lines.next(), Some("hello"));
    let cwd = PathBuf::from(lines.next().unwrap());
    assert_eq!(
        cwd.canonicalize().unwrap(),
        dir.path().canonicalize().unwrap()
    );
}

#[tokio::test]
async fn test_run_non_zero_exit_keeps_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let err = run(&sh(
        dir.path(),
        "echo 'RuntimeError: CUDA out of memory' >&2; exit 3",
        Duration::from_secs(10),
    ))
    .await
    .unwrap_err();

    match err {
        InvokeError::NonZeroExit { code, stderr } => {
            assert_eq!(code, Some(3));
            assert!(stderr.contains("CUDA out of memory"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_run_times_out() {
    let dir = tempfile::tempdir().unwrap();
    let started = std::time::Instant::now();
    let err = run(&sh(dir.path(), "sleep 10", Duration::from_millis(200)))
        .await
        .unwrap_err();

    assert!(matches!(err, InvokeError::TimedOut { .. }));
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_run_missing_program_is_spawn_error() {
    let dir = tempfile::tempdir().unwrap();
    let spec = ProcessSpec::new("mimg-no-such-interpreter", dir.path(), Duration::from_secs(5));
    let err = run(&spec).await.unwrap_err();
    assert!(matches!(err, InvokeError::Spawn(_)));
}

#[tokio::test]
async fn test_output_without_json_is_parse_failure() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&sh(
        dir.path(),
        "echo 'Loading weights'; echo 'done'",
        Duration::from_secs(10),
    ))
    .await
    .unwrap();

    let err = extract_classification(&output.stdout).unwrap_err();
    assert!(matches!(err, InvokeError::ParseFailure { .. }));
}

#[tokio::test]
async fn test_classify_through_shell_script() {
    let dir = tempfile::tempdir().unwrap();
    let script = write_script(
        dir.path(),
        "classify.sh",
        "echo \"Using device cpu\"\necho \"image=$1\"\necho '{\"predicted_class\": \"OPMD\", \"confidence\": 0.92}'\n",
    );
    let invoker = shell_invoker(dir.path(), &[("MIMG_CLASSIFY_SCRIPT", script)]);

    let result = invoker.classify(&dir.path().join("a.jpg")).await.unwrap();
    assert_eq!(result.predicted_class, "OPMD");
    assert!((result.confidence - 0.92).abs() < 1e-12);
}

#[tokio::test]
async fn test_detect_reads_single_result_file() {
    let dir = tempfile::tempdir().unwrap();
    let image = dir.path().join("a.jpg");
    std::fs::write(&image, b"jpeg").unwrap();
    let model = dir.path().join("best.pt");
    std::fs::write(&model, b"weights").unwrap();
    let script = write_script(
        dir.path(),
        "detect.sh",
        r#"out=""
while [ $# -gt 0 ]; do
  if [ "$1" = "--output" ]; then out="$2"; fi
  shift
done
printf '{"detections":[{"class_name":"olp","confidence":0.66}],"top_confidence":0.66,"vis_image":"vis/a.jpg"}' > "$out/single_result.json"
"#,
    );
    let invoker = shell_invoker(
        dir.path(),
        &[("MIMG_YOLO_SCRIPT", script), ("YOLO_MODEL_PATH", model)],
    );

    let output_dir = dir.path().join("uploads").join("deep_1_abcdef01");
    let record = invoker.detect(&image, &output_dir).await.unwrap();

    assert!(output_dir.is_dir());
    assert_eq!(record.detections.len(), 1);
    assert_eq!(record.detections[0].class_name, "olp");
    assert_eq!(record.vis_image.as_deref(), Some("vis/a.jpg"));
}

#[tokio::test]
async fn test_segment_returns_rendered_overlay() {
    let dir = tempfile::tempdir().unwrap();
    let seg_dir = dir.path().join("seg");
    std::fs::create_dir_all(&seg_dir).unwrap();
    let image = dir.path().join("mouth.jpg");
    std::fs::write(&image, b"jpeg").unwrap();
    let config = write_script(&seg_dir, "model.py", "# config");
    let weights = write_script(&seg_dir, "model.pth", "weights");
    let script = write_script(
        &seg_dir,
        "demo.sh",
        "mkdir -p eval_results/vis\ncp \"$1\" \"eval_results/vis/$(basename \"$1\")\"\necho 'UserWarning: deprecated' >&2\n",
    );
    let invoker = shell_invoker(
        dir.path(),
        &[
            ("MIMG_SEG_DIR", seg_dir.clone()),
            ("MIMG_SEG_SCRIPT", script),
            ("MIMG_SEG_CONFIG", config),
            ("MIMG_SEG_WEIGHTS", weights),
        ],
    );

    let overlay = invoker.segment(&image).await.unwrap();
    assert_eq!(overlay, seg_dir.join("eval_results").join("vis").join("mouth.jpg"));
    assert_eq!(std::fs::read(&overlay).unwrap(), b"jpeg");
}

/// `<root>/svc` is the service directory; scripts sit beside it as in a
/// default deployment
fn default_layout(root: &Path) -> ServiceConfig {
    let service_dir = root.join("svc");
    std::fs::create_dir_all(service_dir.join("uploads")).unwrap();
    std::fs::write(service_dir.join("uploads").join("a.jpg"), b"jpeg").unwrap();

    ServiceConfig::resolve(
        |key| (key == "PYTHON_EXE_PATH").then(|| "sh".to_string()),
        &TomlConfig::default(),
    )
    .anchored_at(&service_dir)
}

#[tokio::test]
async fn test_classify_with_default_relative_layout() {
    let dir = tempfile::tempdir().unwrap();
    let classify_dir = dir.path().join("Classify-LM-Simple-OralImages");
    std::fs::create_dir_all(&classify_dir).unwrap();
    write_script(
        &classify_dir,
        "classify_image.py",
        "test -f \"$1\" || { echo \"missing image $1\" >&2; exit 4; }\necho '{\"predicted_class\": \"Benign\", \"confidence\": 0.85}'\n",
    );

    let config = default_layout(dir.path());
    let image = config.uploads_dir.join("a.jpg");
    assert!(image.is_absolute());

    let invoker = PythonInvoker::from_config(&config);
    let result = invoker.classify(&image).await.unwrap();
    assert_eq!(result.predicted_class, "Benign");
}

#[tokio::test]
async fn test_detect_with_default_relative_layout() {
    let dir = tempfile::tempdir().unwrap();
    let yolo_dir = dir.path().join("YOLO12-Simplified-OralImages");
    std::fs::create_dir_all(&yolo_dir).unwrap();
    std::fs::write(yolo_dir.join("best_155epoch_shengkouV2.pt"), b"weights").unwrap();
    write_script(
        &yolo_dir,
        "Yolo12Inference.py",
        r#"out=""; src=""
while [ $# -gt 0 ]; do
  case "$1" in
    --output) out="$2" ;;
    --source) src="$2" ;;
  esac
  shift
done
test -f "$src" || exit 4
printf '{"detections":[{"class_name":"OLK","confidence":0.81}],"top_confidence":0.81,"vis_image":"a.jpg"}' > "$out/single_result.json"
"#,
    );

    let config = default_layout(dir.path());
    let output_dir = config.uploads_dir.join("deep_1_abcdef01");

    let invoker = PythonInvoker::from_config(&config);
    let record = invoker
        .detect(&config.uploads_dir.join("a.jpg"), &output_dir)
        .await
        .unwrap();

    assert_eq!(record.detections[0].class_name, "OLK");
    assert!(output_dir.join("single_result.json").exists());
}
