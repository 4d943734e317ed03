//! Stamps the binary with its source revision so the startup log line
//! identifies which build is answering diagnosis requests.

use std::process::Command;

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=8", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    let hash = hash.trim();
    (!hash.is_empty()).then(|| hash.to_string())
}

fn main() {
    let stamps = [
        ("GIT_HASH", git_short_hash().unwrap_or_else(|| "nogit".to_string())),
        // UTC so builds from different machines compare directly
        ("BUILD_TIMESTAMP", chrono::Utc::now().format("%Y-%m-%dT%H:%MZ").to_string()),
        ("BUILD_PROFILE", std::env::var("PROFILE").unwrap_or_default()),
    ];
    for (key, value) in stamps {
        println!("cargo:rustc-env={}={}", key, value);
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../.git/HEAD");
}
