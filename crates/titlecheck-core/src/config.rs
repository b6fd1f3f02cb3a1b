//! Configuration for titlecheck
//!
//! Configuration is read from `titlecheck.toml` in the working directory, or
//! from the global config directory (`~/.config/titlecheck/config.toml`).

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::engine::DecisionPolicy;
use crate::error::{Result, TitlecheckError};

pub use types::{
    ArtifactsConfig, DecisionConfig, TitlecheckConfig, DEFAULT_THRESHOLD, DEFAULT_TOP_K,
};

/// Config file name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "titlecheck.toml";

const CONFIG_DIR: &str = "titlecheck";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "TITLECHECK_CONFIG_DIR";

impl TitlecheckConfig {
    /// Load configuration from a file
    ///
    /// Relative artifact paths are resolved against the directory holding the file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            TitlecheckError::failed_operation(
                &format!("read config {}", path.display()),
                e,
            )
        })?;
        let mut config: TitlecheckConfig = toml::from_str(&content)?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        config.resolve_paths(base);
        config.validate()?;

        debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Find and load the configuration that applies to `cwd`
    ///
    /// Search order: `<cwd>/titlecheck.toml`, then the global config file.
    /// Falls back to defaults (resolved against `cwd`) when neither exists.
    pub fn discover(cwd: &Path) -> Result<Self> {
        let local = cwd.join(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Self::load(&local);
        }

        if let Some(global) = global_config_path() {
            if global.is_file() {
                return Self::load(&global);
            }
        }

        debug!(cwd = %cwd.display(), "config_defaults");
        let mut config = TitlecheckConfig::default();
        config.resolve_paths(cwd);
        Ok(config)
    }

    /// Resolve relative artifact paths against `base`
    pub fn resolve_paths(&mut self, base: &Path) {
        let resolve = |p: &Path| -> PathBuf {
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                base.join(p)
            }
        };

        self.artifacts.corpus = resolve(&self.artifacts.corpus);
        self.artifacts.classifier = resolve(&self.artifacts.classifier);
        self.artifacts.vectorizer = self.artifacts.vectorizer.as_deref().map(resolve);
    }

    /// Check the configuration for values the engine cannot work with
    pub fn validate(&self) -> Result<()> {
        DecisionPolicy::try_from(&self.decision)?;
        self.vectorizer.validate()
    }
}

/// Location of the global config file, honouring `TITLECHECK_CONFIG_DIR`
pub fn global_config_path() -> Option<PathBuf> {
    let dir = match std::env::var(CONFIG_DIR_ENV_VAR) {
        Ok(env_dir) => PathBuf::from(env_dir),
        Err(_) => dirs::config_dir()?.join(CONFIG_DIR),
    };
    Some(dir.join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorize::Norm;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = TitlecheckConfig::default();
        assert_eq!(config.decision.top_k, DEFAULT_TOP_K);
        assert_eq!(config.decision.threshold, DEFAULT_THRESHOLD);
        assert!(config.artifacts.vectorizer.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_resolves_relative_paths() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(LOCAL_CONFIG_FILE);
        fs::write(
            &path,
            r#"
[artifacts]
corpus = "data/judul_lama.txt"
vectorizer = "/opt/models/vectorizer.json"
classifier = "models/rf.json"

[decision]
top_k = 10
threshold = 55.5
"#,
        )
        .unwrap();

        let config = TitlecheckConfig::load(&path).unwrap();
        assert_eq!(
            config.artifacts.corpus,
            dir.path().join("data/judul_lama.txt")
        );
        assert_eq!(config.artifacts.classifier, dir.path().join("models/rf.json"));
        assert_eq!(
            config.artifacts.vectorizer,
            Some(PathBuf::from("/opt/models/vectorizer.json"))
        );
        assert_eq!(config.decision.top_k, 10);
        assert_eq!(config.decision.threshold, 55.5);
    }

    #[test]
    fn test_load_vectorizer_section() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(LOCAL_CONFIG_FILE);
        fs::write(
            &path,
            r#"
[vectorizer]
ngram_range = [1, 2]
sublinear_tf = true
norm = "none"
stop_words = ["dan", "di"]
"#,
        )
        .unwrap();

        let config = TitlecheckConfig::load(&path).unwrap();
        assert_eq!(config.vectorizer.ngram_range, (1, 2));
        assert!(config.vectorizer.sublinear_tf);
        assert_eq!(config.vectorizer.norm, Norm::None);
        assert_eq!(config.vectorizer.stop_words, vec!["dan", "di"]);
        // Unspecified fields keep their defaults
        assert!(config.vectorizer.lowercase);
        assert!(config.vectorizer.smooth_idf);
    }

    #[test]
    fn test_load_rejects_zero_top_k() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(LOCAL_CONFIG_FILE);
        fs::write(&path, "[decision]\ntop_k = 0\n").unwrap();

        let err = TitlecheckConfig::load(&path).unwrap_err();
        assert!(matches!(err, TitlecheckError::InvalidValue { .. }));
    }

    #[test]
    fn test_load_rejects_inverted_ngram_range() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(LOCAL_CONFIG_FILE);
        fs::write(&path, "[vectorizer]\nngram_range = [2, 1]\n").unwrap();

        assert!(TitlecheckConfig::load(&path).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = TitlecheckConfig::load(&dir.path().join("missing.toml"));
        assert!(matches!(
            result,
            Err(TitlecheckError::FailedOperation { .. })
        ));
    }

    #[test]
    fn test_discover_prefers_local_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(LOCAL_CONFIG_FILE),
            "[decision]\nthreshold = 70.0\n",
        )
        .unwrap();

        let config = TitlecheckConfig::discover(dir.path()).unwrap();
        assert_eq!(config.decision.threshold, 70.0);
        assert_eq!(config.artifacts.corpus, dir.path().join("corpus.txt"));
    }
}
