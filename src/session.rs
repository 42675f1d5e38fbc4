//! Workflow session state.
//!
//! `WorkflowSession` is the single owned state container for one user
//! session: the document store, the upload form, the configuration and the
//! signature collaborator. The host creates one at session start, passes it
//! by `&mut` into every event handler, and drops it at session end. All
//! handlers run to completion on the host's UI thread, so there is no
//! locking.

use chrono::{Local, NaiveDateTime};
use uuid::Uuid;

use crate::classification::{ClassificationForm, FormError};
use crate::config::WorkflowConfig;
use crate::models::{Document, DocumentStatus};
use crate::review::{
    self, LogSignatureRequester, ReviewError, ReviewSummary, SignatureRequest, SignatureRequester,
};
use crate::store::DocumentStore;
use crate::transition::{StatusEvent, ToggleField};

pub struct WorkflowSession {
    config: WorkflowConfig,
    store: DocumentStore,
    form: ClassificationForm,
    requester: Box<dyn SignatureRequester>,
    started_at: NaiveDateTime,
}

impl WorkflowSession {
    pub fn new(config: WorkflowConfig) -> Self {
        Self::with_requester(config, Box::new(LogSignatureRequester))
    }

    pub fn with_requester(config: WorkflowConfig, requester: Box<dyn SignatureRequester>) -> Self {
        tracing::info!(
            final_policy = ?config.final_version_policy,
            file_policy = ?config.file_type_policy,
            "Workflow session started"
        );
        Self {
            config,
            store: DocumentStore::new(),
            form: ClassificationForm::new(),
            requester,
            started_at: Local::now().naive_local(),
        }
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn form(&self) -> &ClassificationForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ClassificationForm {
        &mut self.form
    }

    pub fn started_at(&self) -> NaiveDateTime {
        self.started_at
    }

    // ── Upload ──────────────────────────────────────────────

    /// Submit the form and append the new document to the store.
    pub fn submit(&mut self) -> Result<&Document, FormError> {
        let document = match self.form.submit(&self.config) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::info!(error = %e, "Document submission rejected");
                return Err(e);
            }
        };
        tracing::info!(
            id = %document.id(),
            file_type = document.file_type(),
            status = document.status().as_str(),
            "Document created"
        );
        Ok(self.store.add(document))
    }

    // ── Board and table ─────────────────────────────────────

    /// Resolve the drag surface's drop target. Container ids map to their
    /// status; a card id maps to the container the card sits in; anything
    /// else is no target.
    pub fn resolve_drop_target(&self, over_id: Option<&str>) -> Option<DocumentStatus> {
        let over_id = over_id?;
        if let Some(status) = DocumentStatus::ALL
            .iter()
            .find(|s| s.as_str() == over_id)
        {
            return Some(*status);
        }
        let card = Uuid::parse_str(over_id).ok()?;
        self.store.get(card).map(|d| d.status())
    }

    /// Handle a finished drag. Returns the moved document, or `None` when
    /// the drop changed nothing.
    pub fn drag_end(&mut self, active_id: Uuid, over_id: Option<&str>) -> Option<&Document> {
        let target = self.resolve_drop_target(over_id);
        let event = StatusEvent::Drop { target };
        let moved = self.store.apply_event(active_id, &event);
        match moved {
            Some(doc) => {
                tracing::info!(id = %active_id, status = doc.status().as_str(), "Document moved");
            }
            None => {
                tracing::debug!(id = %active_id, ?over_id, "Drop ignored");
            }
        }
        moved
    }

    /// Handle a table toggle.
    pub fn toggle(&mut self, id: Uuid, field: ToggleField) -> Option<&Document> {
        let toggled = self.store.apply_event(id, &StatusEvent::Toggle { field });
        match toggled {
            Some(doc) => {
                tracing::info!(%id, is_final = doc.is_final(), status = doc.status().as_str(), "Document toggled");
            }
            None => {
                tracing::debug!(%id, "Toggle ignored: unknown document");
            }
        }
        toggled
    }

    // ── Review ──────────────────────────────────────────────

    pub fn review_summary(&self, department: &str) -> Result<ReviewSummary, ReviewError> {
        review::build_review_summary(&self.store, department)
    }

    pub fn request_signature(&self, department: &str) -> Result<SignatureRequest, ReviewError> {
        review::request_signature(&self.store, department, self.requester.as_ref())
    }
}

impl Default for WorkflowSession {
    fn default() -> Self {
        Self::new(WorkflowConfig::default())
    }
}
