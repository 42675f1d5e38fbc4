//! Handlers the UI host calls from its event callbacks.
//!
//! Input arrives as the strings the widgets produce; errors go back as
//! user-visible `String`s. Silent no-ops (unknown ids, drops that change
//! nothing) are never errors.

pub mod board;
pub mod review;
pub mod upload;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Category, Document, DocumentStatus, Domain};

/// Dropdown option: wire value plus display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionItem {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainOptions {
    pub domain: OptionItem,
    pub departments: Vec<OptionItem>,
}

/// Everything needed to populate the classification dropdowns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyView {
    pub domains: Vec<DomainOptions>,
    pub categories: Vec<OptionItem>,
}

/// A row in the document table.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentRow {
    pub id: Uuid,
    pub name: String,
    pub domain: String,
    pub department: String,
    pub category: String,
    pub file_type: String,
    pub is_final: bool,
    pub status: DocumentStatus,
    pub status_label: String,
    pub size_kb: String,
    pub uploaded_at: String,
}

impl DocumentRow {
    pub fn from_document(doc: &Document) -> Self {
        Self {
            id: doc.id(),
            name: doc.name().to_string(),
            domain: doc.domain().label().to_string(),
            department: doc.department().label().to_string(),
            category: doc.category().label().to_string(),
            file_type: doc.file_type().to_string(),
            is_final: doc.is_final(),
            status: doc.status(),
            status_label: doc.status().label().to_string(),
            size_kb: format!("{:.1} KB", doc.file().size_bytes as f64 / 1024.0),
            uploaded_at: doc.uploaded_at().format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

fn option(value: &str, label: &str) -> OptionItem {
    OptionItem {
        value: value.to_string(),
        label: label.to_string(),
    }
}

/// List domains with their departments, and the category list.
pub fn get_taxonomy() -> TaxonomyView {
    let domains = Domain::ALL
        .iter()
        .map(|d| DomainOptions {
            domain: option(d.as_str(), d.label()),
            departments: d
                .departments()
                .iter()
                .map(|dep| option(dep.as_str(), dep.label()))
                .collect(),
        })
        .collect();
    let categories = Category::ALL
        .iter()
        .map(|c| option(c.as_str(), c.label()))
        .collect();
    TaxonomyView {
        domains,
        categories,
    }
}

pub(crate) fn parse_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id.trim()).ok()
}
