//! Review stage: summary of the "In Review" column and the signature
//! request hand-off.
//!
//! The department chosen for the request is free text and is not checked
//! against the documents' own departments. The request itself is
//! fire-and-forget: the requester gets the payload and nothing comes back.

use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Document, DocumentStatus};
use crate::store::DocumentStore;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReviewError {
    #[error("No documents are in review")]
    NothingInReview,
}

/// One line in the review dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewItem {
    pub id: Uuid,
    pub name: String,
    pub file_type: String,
}

/// Review dialog content: documents in review, split by `is_final`.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewSummary {
    pub department: String,
    pub final_versions: Vec<ReviewItem>,
    pub working_copies: Vec<ReviewItem>,
}

/// Payload handed to the signature collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct SignatureRequest {
    pub request_id: Uuid,
    pub department: String,
    pub document_ids: Vec<Uuid>,
    pub requested_at: NaiveDateTime,
}

/// Downstream "request signature" collaborator.
pub trait SignatureRequester {
    fn request_signature(&self, request: &SignatureRequest);
}

/// Default requester: records the request in the log and nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSignatureRequester;

impl SignatureRequester for LogSignatureRequester {
    fn request_signature(&self, request: &SignatureRequest) {
        tracing::info!(
            request_id = %request.request_id,
            department = %request.department,
            documents = request.document_ids.len(),
            "Signature request sent"
        );
    }
}

// ---------------------------------------------------------------------------
// Functions
// ---------------------------------------------------------------------------

impl ReviewItem {
    fn from_document(doc: &Document) -> Self {
        Self {
            id: doc.id(),
            name: doc.name().to_string(),
            file_type: doc.file_type().to_string(),
        }
    }
}

/// Whether the review trigger is available.
pub fn can_start_review(store: &DocumentStore) -> bool {
    !store.by_status(DocumentStatus::Review).is_empty()
}

pub fn build_review_summary(
    store: &DocumentStore,
    department: &str,
) -> Result<ReviewSummary, ReviewError> {
    let in_review = store.by_status(DocumentStatus::Review);
    if in_review.is_empty() {
        return Err(ReviewError::NothingInReview);
    }

    let (finals, working): (Vec<&Document>, Vec<&Document>) =
        in_review.into_iter().partition(|d| d.is_final());

    Ok(ReviewSummary {
        department: department.to_string(),
        final_versions: finals.into_iter().map(ReviewItem::from_document).collect(),
        working_copies: working.into_iter().map(ReviewItem::from_document).collect(),
    })
}

/// Send every document in review to `requester` for `department`.
pub fn request_signature(
    store: &DocumentStore,
    department: &str,
    requester: &dyn SignatureRequester,
) -> Result<SignatureRequest, ReviewError> {
    let document_ids: Vec<Uuid> = store
        .by_status(DocumentStatus::Review)
        .iter()
        .map(|d| d.id())
        .collect();
    if document_ids.is_empty() {
        return Err(ReviewError::NothingInReview);
    }

    let request = SignatureRequest {
        request_id: Uuid::new_v4(),
        department: department.to_string(),
        document_ids,
        requested_at: Local::now().naive_local(),
    };
    requester.request_signature(&request);
    Ok(request)
}
