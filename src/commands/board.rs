//! Board (three drop containers) and document table handlers.

use serde::Serialize;

use super::{parse_id, DocumentRow};
use crate::models::{DocumentFilter, DocumentStatus};
use crate::review::can_start_review;
use crate::session::WorkflowSession;
use crate::transition::ToggleField;

#[derive(Debug, Clone, Serialize)]
pub struct BoardColumn {
    /// Container id the drag surface reports as the drop target.
    pub id: DocumentStatus,
    pub title: String,
    pub documents: Vec<DocumentRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardView {
    pub columns: Vec<BoardColumn>,
    pub can_start_review: bool,
}

pub fn get_board(session: &WorkflowSession) -> BoardView {
    let store = session.store();
    let columns = DocumentStatus::ALL
        .iter()
        .map(|status| BoardColumn {
            id: *status,
            title: status.label().to_string(),
            documents: store
                .by_status(*status)
                .into_iter()
                .map(DocumentRow::from_document)
                .collect(),
        })
        .collect();
    BoardView {
        columns,
        can_start_review: can_start_review(store),
    }
}

pub fn get_document_table(session: &WorkflowSession) -> Vec<DocumentRow> {
    session
        .store()
        .all()
        .iter()
        .map(DocumentRow::from_document)
        .collect()
}

pub fn filter_documents(session: &WorkflowSession, filter: &DocumentFilter) -> Vec<DocumentRow> {
    session
        .store()
        .filtered(filter)
        .into_iter()
        .map(DocumentRow::from_document)
        .collect()
}

/// Drag ended. `over_id` is a container id, a card id, or `None` when the
/// card was released outside the board. Always returns the board to render.
pub fn handle_drag_end(
    session: &mut WorkflowSession,
    active_id: String,
    over_id: Option<String>,
) -> BoardView {
    if let Some(id) = parse_id(&active_id) {
        session.drag_end(id, over_id.as_deref());
    } else {
        tracing::debug!(%active_id, "Drag ignored: not a document id");
    }
    get_board(session)
}

/// Table checkbox. Unknown ids and fields are ignored.
pub fn toggle_document_field(
    session: &mut WorkflowSession,
    id: String,
    field: String,
) -> Vec<DocumentRow> {
    match (parse_id(&id), field.parse::<ToggleField>()) {
        (Some(id), Ok(field)) => {
            session.toggle(id, field);
        }
        _ => tracing::debug!(%id, %field, "Toggle ignored"),
    }
    get_document_table(session)
}
