use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const CORPUS: &str = "Sistem Informasi Akademik Berbasis Web
Analisis Sentimen Media Sosial
Sistem Pendukung Keputusan Pemilihan Beasiswa
Aplikasi Kasir Berbasis Android
";

pub const ALWAYS_ORIGINAL: &str =
    r#"{"kind": "logistic_regression", "weights": [], "intercept": -5.0}"#;

#[allow(dead_code)]
pub const ALWAYS_PLAGIARIZED: &str =
    r#"{"kind": "logistic_regression", "weights": [], "intercept": 5.0}"#;

/// Command for the titlecheck binary, isolated from user configuration
pub fn titlecheck(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("titlecheck");
    cmd.current_dir(dir)
        .env("TITLECHECK_CONFIG_DIR", dir.join("no-global-config"))
        .env_remove("TITLECHECK_CONFIG")
        .env_remove("TITLECHECK_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Workspace holding a corpus, a classifier and a `titlecheck.toml`
pub fn workspace(classifier: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("judul_lama.txt"), CORPUS).unwrap();
    fs::write(dir.path().join("classifier.json"), classifier).unwrap();
    fs::write(
        dir.path().join("titlecheck.toml"),
        r#"[artifacts]
corpus = "judul_lama.txt"
classifier = "classifier.json"

[decision]
top_k = 3
threshold = 40.0
"#,
    )
    .unwrap();
    dir
}
