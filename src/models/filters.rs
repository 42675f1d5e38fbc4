use serde::{Deserialize, Serialize};

use super::document::Document;
use super::enums::{Category, DocumentStatus};
use super::taxonomy::{Department, Domain};

/// Dropdown filter over the document list. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFilter {
    pub domain: Option<Domain>,
    pub department: Option<Department>,
    pub category: Option<Category>,
    pub status: Option<DocumentStatus>,
}

impl DocumentFilter {
    /// Same dependent reset as the upload form.
    pub fn set_domain(&mut self, domain: Option<Domain>) {
        self.domain = domain;
        self.department = None;
    }

    pub fn matches(&self, doc: &Document) -> bool {
        self.domain.map_or(true, |d| doc.domain() == d)
            && self.department.map_or(true, |d| doc.department() == d)
            && self.category.map_or(true, |c| doc.category() == c)
            && self.status.map_or(true, |s| doc.status() == s)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
