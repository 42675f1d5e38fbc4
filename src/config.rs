use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "Docflow";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// 100MB, same ceiling for every file type policy.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

pub const DEFAULT_ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];

const ENV_FINAL_POLICY: &str = "DOCFLOW_FINAL_POLICY";
const ENV_FILE_POLICY: &str = "DOCFLOW_FILE_POLICY";
const ENV_MAX_FILE_SIZE: &str = "DOCFLOW_MAX_FILE_SIZE";

/// Filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "docflow_lib=info,warn"
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid value for {var}: {value}")]
    InvalidEnv { var: &'static str, value: String },
}

// ═══════════════════════════════════════════════════════════
// Policies
// ═══════════════════════════════════════════════════════════

/// How `is_final` is decided when a document is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalVersionPolicy {
    /// The uploader picks "Final Version" or "Working Copy".
    #[default]
    UserChoice,
    /// PDFs are final, everything else is a working copy. The form's
    /// version choice is ignored.
    PdfIsFinal,
}

/// Which uploads reach the classification form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileTypePolicy {
    /// Only `accepted_extensions`; anything else is rejected on selection.
    #[default]
    Whitelist,
    /// Any extension is stored as found.
    Permissive,
}

impl FinalVersionPolicy {
    fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "user_choice" => Some(Self::UserChoice),
            "pdf_is_final" => Some(Self::PdfIsFinal),
            _ => None,
        }
    }
}

impl FileTypePolicy {
    fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "whitelist" => Some(Self::Whitelist),
            "permissive" => Some(Self::Permissive),
            _ => None,
        }
    }
}

// ═══════════════════════════════════════════════════════════
// WorkflowConfig
// ═══════════════════════════════════════════════════════════

/// Session-wide workflow settings. Fixed once a session starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    pub final_version_policy: FinalVersionPolicy,
    pub file_type_policy: FileTypePolicy,
    /// Lowercase extensions without the leading dot.
    pub accepted_extensions: Vec<String>,
    pub max_file_size_bytes: u64,
    /// Keep domain/department/category selected after a successful submit.
    pub retain_classification_after_submit: bool,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            final_version_policy: FinalVersionPolicy::default(),
            file_type_policy: FileTypePolicy::default(),
            accepted_extensions: DEFAULT_ACCEPTED_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE,
            retain_classification_after_submit: true,
        }
    }
}

impl WorkflowConfig {
    /// Load from a JSON file. Missing keys take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&raw)?;
        config.normalize();
        Ok(config)
    }

    /// Defaults, then environment overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply `DOCFLOW_*` variables on top of the current values.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|var| std::env::var(var).ok())
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_FINAL_POLICY) {
            self.final_version_policy = FinalVersionPolicy::parse(&value).ok_or(
                ConfigError::InvalidEnv {
                    var: ENV_FINAL_POLICY,
                    value,
                },
            )?;
        }
        if let Some(value) = lookup(ENV_FILE_POLICY) {
            self.file_type_policy =
                FileTypePolicy::parse(&value).ok_or(ConfigError::InvalidEnv {
                    var: ENV_FILE_POLICY,
                    value,
                })?;
        }
        if let Some(value) = lookup(ENV_MAX_FILE_SIZE) {
            self.max_file_size_bytes =
                value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                    var: ENV_MAX_FILE_SIZE,
                    value,
                })?;
        }
        Ok(())
    }

    /// Whether an extension (already lowercased) passes the type policy.
    pub fn accepts_extension(&self, file_type: &str) -> bool {
        match self.file_type_policy {
            FileTypePolicy::Permissive => true,
            FileTypePolicy::Whitelist => self.accepted_extensions.iter().any(|e| e == file_type),
        }
    }

    fn normalize(&mut self) {
        for ext in &mut self.accepted_extensions {
            *ext = ext.trim().trim_start_matches('.').to_lowercase();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let map: HashMap<&'static str, String> =
            pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn app_name_is_docflow() {
        assert_eq!(APP_NAME, "Docflow");
    }

    #[test]
    fn defaults_match_upload_surface() {
        let config = WorkflowConfig::default();
        assert_eq!(config.final_version_policy, FinalVersionPolicy::UserChoice);
        assert_eq!(config.file_type_policy, FileTypePolicy::Whitelist);
        assert_eq!(config.accepted_extensions, vec!["pdf", "doc", "docx"]);
        assert_eq!(config.max_file_size_bytes, DEFAULT_MAX_FILE_SIZE);
        assert!(config.retain_classification_after_submit);
    }

    #[test]
    fn whitelist_rejects_unlisted_extension() {
        let config = WorkflowConfig::default();
        assert!(config.accepts_extension("pdf"));
        assert!(config.accepts_extension("docx"));
        assert!(!config.accepts_extension("txt"));
        assert!(!config.accepts_extension(""));
    }

    #[test]
    fn permissive_accepts_anything() {
        let config = WorkflowConfig {
            file_type_policy: FileTypePolicy::Permissive,
            ..Default::default()
        };
        assert!(config.accepts_extension("txt"));
        assert!(config.accepts_extension(""));
    }

    #[test]
    fn load_partial_json_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docflow.json");
        std::fs::write(
            &path,
            r#"{"final_version_policy": "pdf_is_final", "accepted_extensions": [".PDF", "odt"]}"#,
        )
        .unwrap();

        let config = WorkflowConfig::from_json_file(&path).unwrap();
        assert_eq!(config.final_version_policy, FinalVersionPolicy::PdfIsFinal);
        assert_eq!(config.file_type_policy, FileTypePolicy::Whitelist);
        assert_eq!(config.accepted_extensions, vec!["pdf", "odt"]);
        assert!(config.retain_classification_after_submit);
    }

    #[test]
    fn load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            WorkflowConfig::from_json_file(&path),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = WorkflowConfig::from_json_file(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn env_overrides_apply() {
        let mut config = WorkflowConfig::default();
        config
            .apply_overrides(lookup(&[
                (ENV_FINAL_POLICY, "pdf_is_final"),
                (ENV_FILE_POLICY, "permissive"),
                (ENV_MAX_FILE_SIZE, "2048"),
            ]))
            .unwrap();
        assert_eq!(config.final_version_policy, FinalVersionPolicy::PdfIsFinal);
        assert_eq!(config.file_type_policy, FileTypePolicy::Permissive);
        assert_eq!(config.max_file_size_bytes, 2048);
    }

    #[test]
    fn env_override_rejects_unknown_policy() {
        let mut config = WorkflowConfig::default();
        let err = config
            .apply_overrides(lookup(&[(ENV_FILE_POLICY, "anything")]))
            .unwrap_err();
        assert!(err.to_string().contains(ENV_FILE_POLICY));
        assert_eq!(config.file_type_policy, FileTypePolicy::Whitelist);
    }

    #[test]
    fn no_env_leaves_defaults() {
        let mut config = WorkflowConfig::default();
        config.apply_overrides(lookup(&[])).unwrap();
        assert_eq!(config, WorkflowConfig::default());
    }
}
