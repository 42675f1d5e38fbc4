//! Status transitions for a single document.
//!
//! Every mutation of `is_final` / `status` goes through [`transition`], which
//! returns both fields together or `None` when the event changes nothing.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{Document, DocumentPatch, DocumentStatus, ModelError};

/// Field a table toggle targets. Only `is_final` is toggleable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleField {
    IsFinal,
}

impl FromStr for ToggleField {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "isFinal" | "is_final" => Ok(Self::IsFinal),
            other => Err(ModelError::InvalidEnum {
                field: "ToggleField".into(),
                value: other.into(),
            }),
        }
    }
}

/// User interaction that can change a document's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusEvent {
    /// Drag ended. `None` means the card was released outside every container.
    Drop { target: Option<DocumentStatus> },
    /// Table checkbox clicked.
    Toggle { field: ToggleField },
}

/// Compute the patch for `event`, or `None` when nothing changes.
pub fn transition(doc: &Document, event: &StatusEvent) -> Option<DocumentPatch> {
    match *event {
        StatusEvent::Drop { target: None } => None,
        StatusEvent::Drop {
            target: Some(target),
        } => {
            if target == doc.status() {
                return None;
            }
            Some(DocumentPatch {
                is_final: doc.is_final(),
                status: target,
            })
        }
        StatusEvent::Toggle {
            field: ToggleField::IsFinal,
        } => {
            let is_final = !doc.is_final();
            Some(DocumentPatch {
                is_final,
                status: DocumentStatus::from_is_final(is_final),
            })
        }
    }
}

/// Pure form of [`transition`]: the document after `event`.
pub fn apply(doc: &Document, event: &StatusEvent) -> Document {
    let mut next = doc.clone();
    if let Some(patch) = transition(doc, event) {
        next.apply_patch(patch);
    }
    next
}
