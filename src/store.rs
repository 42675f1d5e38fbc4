//! In-session document store.
//!
//! Holds documents in insertion order. The only mutators are `add` and
//! `update_field`; the final/working/review views are recomputed on every
//! read rather than stored.

use uuid::Uuid;

use crate::models::{Document, DocumentFilter, DocumentPatch, DocumentStatus};
use crate::transition::{transition, StatusEvent};

#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: Vec<Document>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fully formed document. Validation happens upstream.
    pub fn add(&mut self, document: Document) -> &Document {
        tracing::debug!(id = %document.id(), status = document.status().as_str(), "Document added");
        let index = self.documents.len();
        self.documents.push(document);
        &self.documents[index]
    }

    /// Apply `patch` to the document with `id`. Unknown ids are ignored;
    /// returns whether a document was updated.
    pub fn update_field(&mut self, id: Uuid, patch: DocumentPatch) -> bool {
        match self.documents.iter_mut().find(|d| d.id() == id) {
            Some(doc) => {
                doc.apply_patch(patch);
                true
            }
            None => {
                tracing::debug!(%id, "update_field: no document with this id");
                false
            }
        }
    }

    /// Run `event` through the transition function and store the result.
    /// Returns the updated document, or `None` when nothing changed.
    pub fn apply_event(&mut self, id: Uuid, event: &StatusEvent) -> Option<&Document> {
        let patch = transition(self.get(id)?, event)?;
        self.update_field(id, patch);
        self.get(id)
    }

    pub fn get(&self, id: Uuid) -> Option<&Document> {
        self.documents.iter().find(|d| d.id() == id)
    }

    /// Documents currently in `status`, in store order.
    pub fn by_status(&self, status: DocumentStatus) -> Vec<&Document> {
        self.documents
            .iter()
            .filter(|d| d.status() == status)
            .collect()
    }

    pub fn filtered(&self, filter: &DocumentFilter) -> Vec<&Document> {
        self.documents.iter().filter(|d| filter.matches(d)).collect()
    }

    pub fn all(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
