use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

use super::enums::{Category, DocumentStatus};
use super::taxonomy::{Department, Domain};

/// Handle to an uploaded file. The bytes stay with the host; only what is
/// needed to describe the file is kept here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileHandle {
    pub name: String,
    pub size_bytes: u64,
    pub mime_hint: Option<String>,
}

/// A classified document.
///
/// `is_final` and `status` are private: they only move together through
/// `DocumentPatch`, which only the transition module produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    id: Uuid,
    name: String,
    domain: Domain,
    department: Department,
    category: Category,
    file_type: String,
    is_final: bool,
    status: DocumentStatus,
    file: FileHandle,
    uploaded_at: NaiveDateTime,
}

/// Atomic update of the `is_final` / `status` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentPatch {
    pub(crate) is_final: bool,
    pub(crate) status: DocumentStatus,
}

/// Everything a new document needs; produced by the classification form.
#[derive(Debug, Clone)]
pub(crate) struct NewDocument {
    pub name: String,
    pub domain: Domain,
    pub department: Department,
    pub category: Category,
    pub file_type: String,
    pub is_final: bool,
    pub file: FileHandle,
    pub uploaded_at: NaiveDateTime,
}

impl Document {
    /// Initial status follows `is_final`; a new document is never in review.
    pub(crate) fn create(new: NewDocument) -> Self {
        Self {
            id: Uuid::new_v4(),
            status: DocumentStatus::from_is_final(new.is_final),
            name: new.name,
            domain: new.domain,
            department: new.department,
            category: new.category,
            file_type: new.file_type,
            is_final: new.is_final,
            file: new.file,
            uploaded_at: new.uploaded_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn department(&self) -> Department {
        self.department
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn file_type(&self) -> &str {
        &self.file_type
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn status(&self) -> DocumentStatus {
        self.status
    }

    pub fn file(&self) -> &FileHandle {
        &self.file
    }

    pub fn uploaded_at(&self) -> NaiveDateTime {
        self.uploaded_at
    }

    pub(crate) fn apply_patch(&mut self, patch: DocumentPatch) {
        self.is_final = patch.is_final;
        self.status = patch.status;
    }
}

impl DocumentPatch {
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn status(&self) -> DocumentStatus {
        self.status
    }
}
