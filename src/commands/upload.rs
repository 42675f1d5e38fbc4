//! Upload form handlers: file selection, classification dropdowns,
//! version choice and submit.

use serde::Serialize;

use super::{option, DocumentRow, OptionItem};
use crate::models::{Category, Domain, FileHandle, VersionChoice};
use crate::session::WorkflowSession;
use crate::upload::UploadPreview;

/// Current state of the upload form, for re-rendering after each change.
#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    pub file_name: Option<String>,
    pub document_name: String,
    pub domain: Option<String>,
    pub department: Option<String>,
    pub category: Option<String>,
    pub version: VersionChoice,
    /// Departments for the current domain; empty disables the dropdown.
    pub departments: Vec<OptionItem>,
    pub can_submit: bool,
}

pub fn get_form(session: &WorkflowSession) -> FormView {
    let form = session.form();
    FormView {
        file_name: form.file().map(|f| f.name.clone()),
        document_name: form.name().to_string(),
        domain: form.domain().map(|d| d.as_str().to_string()),
        department: form.department().map(|d| d.as_str().to_string()),
        category: form.category().map(|c| c.as_str().to_string()),
        version: form.version(),
        departments: form
            .available_departments()
            .iter()
            .map(|d| option(d.as_str(), d.label()))
            .collect(),
        can_submit: form.missing_fields().is_empty(),
    }
}

/// File picked or dropped onto the upload zone.
pub fn select_file(
    session: &mut WorkflowSession,
    name: String,
    size_bytes: u64,
    mime_hint: Option<String>,
) -> Result<UploadPreview, String> {
    let file = FileHandle::new(&name, size_bytes, mime_hint);
    let config = session.config().clone();
    session.form_mut().select_file(file, &config).map_err(|e| {
        tracing::info!(file = %name, error = %e, "File rejected");
        e.to_string()
    })
}

pub fn select_domain(session: &mut WorkflowSession, domain: String) -> Result<FormView, String> {
    let domain = domain.parse::<Domain>().map_err(|e| e.to_string())?;
    session.form_mut().set_domain(domain);
    Ok(get_form(session))
}

pub fn select_department(
    session: &mut WorkflowSession,
    department: String,
) -> Result<FormView, String> {
    let form = session.form_mut();
    let domain = form
        .domain()
        .ok_or_else(|| "Select a domain before choosing a department".to_string())?;
    let department = domain.parse_department(&department).map_err(|e| e.to_string())?;
    form.set_department(department).map_err(|e| e.to_string())?;
    Ok(get_form(session))
}

pub fn select_category(session: &mut WorkflowSession, category: String) -> Result<FormView, String> {
    let category = category.parse::<Category>().map_err(|e| e.to_string())?;
    session.form_mut().set_category(category);
    Ok(get_form(session))
}

pub fn set_document_name(session: &mut WorkflowSession, name: String) -> FormView {
    session.form_mut().set_name(&name);
    get_form(session)
}

/// Radio choice between "final" and "working".
pub fn choose_version(session: &mut WorkflowSession, version: String) -> Result<FormView, String> {
    let version = version
        .parse::<VersionChoice>()
        .map_err(|e| e.to_string())?;
    session.form_mut().set_version(version);
    Ok(get_form(session))
}

pub fn submit_document(session: &mut WorkflowSession) -> Result<DocumentRow, String> {
    session
        .submit()
        .map(DocumentRow::from_document)
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocumentStatus;

    fn fill(session: &mut WorkflowSession) {
        select_domain(session, "IT".into()).unwrap();
        select_department(session, "Security".into()).unwrap();
        select_category(session, "Policies".into()).unwrap();
    }

    #[test]
    fn full_upload_flow() {
        let mut session = WorkflowSession::default();
        fill(&mut session);
        let preview = select_file(&mut session, "policy.pdf".into(), 3072, None).unwrap();
        assert_eq!(preview.file_type, "pdf");
        assert_eq!(preview.size_kb, "3.0 KB");

        let view = choose_version(&mut session, "final".into()).unwrap();
        assert!(view.can_submit);
        assert_eq!(view.document_name, "policy.pdf");

        let row = submit_document(&mut session).unwrap();
        assert_eq!(row.status, DocumentStatus::Final);
        assert!(row.is_final);
        assert_eq!(row.department, "Security");

        let view = get_form(&session);
        assert_eq!(view.file_name, None);
        assert_eq!(view.domain.as_deref(), Some("it"));
        assert!(!view.can_submit);
    }

    #[test]
    fn domain_change_clears_department_in_view() {
        let mut session = WorkflowSession::default();
        fill(&mut session);
        let view = select_domain(&mut session, "Legal".into()).unwrap();
        assert_eq!(view.department, None);
        assert_eq!(view.departments.len(), 4);
        assert_eq!(view.departments[0].label, "Compliance");
    }

    #[test]
    fn department_from_other_domain_rejected() {
        let mut session = WorkflowSession::default();
        select_domain(&mut session, "Finance".into()).unwrap();
        let err = select_department(&mut session, "Security".into()).unwrap_err();
        assert_eq!(err, "Department Security does not belong to domain Finance");
    }

    #[test]
    fn department_before_domain_rejected() {
        let mut session = WorkflowSession::default();
        assert!(select_department(&mut session, "Security".into()).is_err());
    }

    #[test]
    fn unknown_values_rejected() {
        let mut session = WorkflowSession::default();
        assert!(select_domain(&mut session, "Space".into()).is_err());
        assert!(select_category(&mut session, "Memes".into()).is_err());
        assert!(choose_version(&mut session, "draft".into()).is_err());
    }

    #[test]
    fn unsupported_file_message() {
        let mut session = WorkflowSession::default();
        let err = select_file(&mut session, "notes.txt".into(), 10, None).unwrap_err();
        assert!(err.starts_with("Unsupported file type: .txt"));
        assert!(get_form(&session).file_name.is_none());
    }

    #[test]
    fn submit_missing_fields_message() {
        let mut session = WorkflowSession::default();
        select_file(&mut session, "policy.pdf".into(), 10, None).unwrap();
        let err = submit_document(&mut session).unwrap_err();
        assert_eq!(err, "Please fill in all required fields and upload a file");
        assert!(session.store().is_empty());
    }

    #[test]
    fn renamed_document_keeps_new_name() {
        let mut session = WorkflowSession::default();
        fill(&mut session);
        select_file(&mut session, "scan_0042.pdf".into(), 10, None).unwrap();
        set_document_name(&mut session, "Access Control Policy".into());
        let row = submit_document(&mut session).unwrap();
        assert_eq!(row.name, "Access Control Policy");
    }
}
