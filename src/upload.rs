//! Upload intake: turns what the file picker / drop zone hands over into a
//! `FileHandle`, and applies the file type and size policy before the file
//! reaches the classification form.

use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::config::WorkflowConfig;
use crate::models::FileHandle;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UploadError {
    #[error("Unsupported file type: {0}. Accepted formats: {1}")]
    UnsupportedFileType(String, String),

    #[error("File too large: {size_mb:.1}MB exceeds {max_mb:.1}MB limit")]
    FileTooLarge { size_mb: f64, max_mb: f64 },
}

/// What the drop zone shows once a file is selected.
#[derive(Debug, Clone, Serialize)]
pub struct UploadPreview {
    pub file_name: String,
    pub file_type: String,
    pub size_kb: String,
    /// Drives the PDF vs. generic document icon.
    pub is_pdf: bool,
}

impl FileHandle {
    /// Build a handle from host-supplied metadata. The name is sanitised;
    /// a missing MIME hint is guessed from the extension.
    pub fn new(name: &str, size_bytes: u64, mime_hint: Option<String>) -> Self {
        let name = sanitize_filename(name);
        let mime_hint = mime_hint
            .filter(|m| !m.trim().is_empty())
            .or_else(|| guess_mime(&name));
        Self {
            name,
            size_bytes,
            mime_hint,
        }
    }

    pub fn file_type(&self) -> String {
        extract_file_type(&self.name)
    }

    pub fn is_pdf(&self) -> bool {
        self.mime_hint
            .as_deref()
            .map_or(false, |m| m.contains("pdf"))
    }
}

/// Lowercased text after the last `.`; empty when there is no dot.
pub fn extract_file_type(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((_, ext)) => ext.to_lowercase(),
        None => String::new(),
    }
}

/// Sanitize a filename: strip path components, limit length
pub fn sanitize_filename(original: &str) -> String {
    let name = Path::new(original)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("document");

    let clean: String = name
        .chars()
        .filter(|c| !matches!(c, '/' | '\\' | '\0'))
        .take(255)
        .collect();

    if clean.is_empty() {
        "document".to_string()
    } else {
        clean
    }
}

fn guess_mime(name: &str) -> Option<String> {
    mime_guess::from_path(name)
        .first_raw()
        .map(|m| m.to_string())
}

/// Apply the session's type and size policy to a selected file.
pub fn check_upload(file: &FileHandle, config: &WorkflowConfig) -> Result<UploadPreview, UploadError> {
    if file.size_bytes > config.max_file_size_bytes {
        return Err(UploadError::FileTooLarge {
            size_mb: to_mb(file.size_bytes),
            max_mb: to_mb(config.max_file_size_bytes),
        });
    }

    let file_type = file.file_type();
    if !config.accepts_extension(&file_type) {
        let accepted = config
            .accepted_extensions
            .iter()
            .map(|e| e.to_uppercase())
            .collect::<Vec<_>>()
            .join(", ");
        let shown = if file_type.is_empty() {
            "(none)".to_string()
        } else {
            format!(".{file_type}")
        };
        return Err(UploadError::UnsupportedFileType(shown, accepted));
    }

    Ok(UploadPreview {
        file_name: file.name.clone(),
        size_kb: format!("{:.1} KB", file.size_bytes as f64 / 1024.0),
        is_pdf: file.is_pdf(),
        file_type,
    })
}

fn to_mb(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileTypePolicy;

    #[test]
    fn file_type_takes_last_extension_lowercased() {
        assert_eq!(extract_file_type("Report.PDF"), "pdf");
        assert_eq!(extract_file_type("archive.tar.gz"), "gz");
        assert_eq!(extract_file_type("noext"), "");
        assert_eq!(extract_file_type("trailing."), "");
    }

    #[test]
    fn sanitize_strips_paths() {
        assert_eq!(sanitize_filename("/tmp/uploads/policy.pdf"), "policy.pdf");
        assert_eq!(sanitize_filename("policy.pdf"), "policy.pdf");
        assert_eq!(sanitize_filename(""), "document");
    }

    #[test]
    fn new_handle_guesses_mime() {
        let handle = FileHandle::new("policy.pdf", 10, None);
        assert_eq!(handle.mime_hint.as_deref(), Some("application/pdf"));
        assert!(handle.is_pdf());

        let handle = FileHandle::new("notes.docx", 10, Some(String::new()));
        assert!(handle.mime_hint.is_some());
        assert!(!handle.is_pdf());
    }

    #[test]
    fn explicit_mime_hint_wins() {
        let handle = FileHandle::new("scan", 10, Some("application/pdf".into()));
        assert!(handle.is_pdf());
        assert_eq!(handle.file_type(), "");
    }

    #[test]
    fn whitelist_rejects_txt() {
        let config = WorkflowConfig::default();
        let err = check_upload(&FileHandle::new("notes.txt", 10, None), &config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unsupported file type: .txt. Accepted formats: PDF, DOC, DOCX"
        );
    }

    #[test]
    fn whitelist_accepts_uppercase_extension() {
        let config = WorkflowConfig::default();
        let preview = check_upload(&FileHandle::new("Report.PDF", 2048, None), &config).unwrap();
        assert_eq!(preview.file_type, "pdf");
        assert_eq!(preview.size_kb, "2.0 KB");
        assert!(preview.is_pdf);
    }

    #[test]
    fn permissive_keeps_whatever_extension() {
        let config = WorkflowConfig {
            file_type_policy: FileTypePolicy::Permissive,
            ..Default::default()
        };
        let preview = check_upload(&FileHandle::new("noext", 1, None), &config).unwrap();
        assert_eq!(preview.file_type, "");
    }

    #[test]
    fn oversized_file_rejected() {
        let config = WorkflowConfig {
            max_file_size_bytes: 1024,
            ..Default::default()
        };
        let err = check_upload(&FileHandle::new("big.pdf", 4096, None), &config).unwrap_err();
        assert!(matches!(err, UploadError::FileTooLarge { .. }));
    }
}
