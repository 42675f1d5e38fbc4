//! Review dialog handlers.
//!
//! Two commands:
//! - `get_review_summary`: documents in review, split into final versions and working copies
//! - `request_signature`: hand the review set to the signature collaborator

use crate::review::ReviewSummary;
use crate::session::WorkflowSession;

pub fn get_review_summary(
    session: &WorkflowSession,
    department: String,
) -> Result<ReviewSummary, String> {
    session
        .review_summary(&department)
        .map_err(|e| e.to_string())
}

/// Returns the confirmation message shown to the user.
pub fn request_signature(session: &WorkflowSession, department: String) -> Result<String, String> {
    let request = session
        .request_signature(&department)
        .map_err(|e| e.to_string())?;
    Ok(format!(
        "Signature request sent for {} document(s)",
        request.document_ids.len()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::board::handle_drag_end;
    use crate::commands::upload::{
        choose_version, select_category, select_department, select_domain, select_file,
        submit_document,
    };

    fn add_to_review(session: &mut WorkflowSession, file: &str, version: &str) {
        select_domain(session, "Legal".into()).unwrap();
        select_department(session, "Contracts".into()).unwrap();
        select_category(session, "Forms".into()).unwrap();
        select_file(session, file.into(), 1024, None).unwrap();
        choose_version(session, version.into()).unwrap();
        let id = submit_document(session).unwrap().id;
        handle_drag_end(session, id.to_string(), Some("review".into()));
    }

    #[test]
    fn summary_and_request() {
        let mut session = WorkflowSession::default();
        add_to_review(&mut session, "nda.pdf", "final");
        add_to_review(&mut session, "nda_redline.docx", "working");

        let summary = get_review_summary(&session, "Finance".into()).unwrap();
        assert_eq!(summary.final_versions[0].name, "nda.pdf");
        assert_eq!(summary.working_copies[0].name, "nda_redline.docx");

        let message = request_signature(&session, "Finance".into()).unwrap();
        assert_eq!(message, "Signature request sent for 2 document(s)");
    }

    #[test]
    fn empty_review_is_refused() {
        let session = WorkflowSession::default();
        assert_eq!(
            request_signature(&session, "Legal".into()).unwrap_err(),
            "No documents are in review"
        );
        assert!(get_review_summary(&session, "Legal".into()).is_err());
    }
}
