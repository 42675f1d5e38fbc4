//! Upload form state: the selected file, its editable name, the three
//! taxonomy selections and the version choice. `submit` validates and
//! produces a new `Document`.

use chrono::Local;
use serde::Serialize;
use thiserror::Error;

use crate::config::{FinalVersionPolicy, WorkflowConfig};
use crate::models::{
    Category, Department, Document, Domain, FileHandle, ModelError, NewDocument, VersionChoice,
};
use crate::upload::{check_upload, UploadError, UploadPreview};

/// Fields that must be present before a document can be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    File,
    Domain,
    Department,
    Category,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("Please fill in all required fields and upload a file")]
    MissingFields(Vec<RequiredField>),

    #[error("Document name cannot be empty")]
    EmptyName,

    #[error("Select a domain before choosing a department")]
    NoDomainSelected,

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Upload(#[from] UploadError),
}

#[derive(Debug, Clone, Default)]
pub struct ClassificationForm {
    file: Option<FileHandle>,
    name: String,
    domain: Option<Domain>,
    department: Option<Department>,
    category: Option<Category>,
    version: VersionChoice,
}

impl ClassificationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a file. The name field is reset to the file's name. A file
    /// rejected by the upload policy leaves the previous selection in place.
    pub fn select_file(
        &mut self,
        file: FileHandle,
        config: &WorkflowConfig,
    ) -> Result<UploadPreview, FormError> {
        let preview = check_upload(&file, config)?;
        self.name = file.name.clone();
        self.file = Some(file);
        Ok(preview)
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Choosing a domain always clears the department, even if unchanged.
    pub fn set_domain(&mut self, domain: Domain) {
        self.domain = Some(domain);
        self.department = None;
    }

    pub fn set_department(&mut self, department: Department) -> Result<(), FormError> {
        let domain = self.domain.ok_or(FormError::NoDomainSelected)?;
        if !domain.contains(department) {
            return Err(ModelError::DepartmentOutsideDomain {
                department: department.label().into(),
                domain: domain.label().into(),
            }
            .into());
        }
        self.department = Some(department);
        Ok(())
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = Some(category);
    }

    pub fn set_version(&mut self, version: VersionChoice) {
        self.version = version;
    }

    pub fn file(&self) -> Option<&FileHandle> {
        self.file.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain(&self) -> Option<Domain> {
        self.domain
    }

    pub fn department(&self) -> Option<Department> {
        self.department
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn version(&self) -> VersionChoice {
        self.version
    }

    /// Departments selectable under the current domain.
    pub fn available_departments(&self) -> &'static [Department] {
        match self.domain {
            Some(domain) => domain.departments(),
            None => &[],
        }
    }

    pub fn missing_fields(&self) -> Vec<RequiredField> {
        let mut missing = Vec::new();
        if self.file.is_none() {
            missing.push(RequiredField::File);
        }
        if self.domain.is_none() {
            missing.push(RequiredField::Domain);
        }
        if self.department.is_none() {
            missing.push(RequiredField::Department);
        }
        if self.category.is_none() {
            missing.push(RequiredField::Category);
        }
        missing
    }

    /// Validate and build a document. On success the file and name are
    /// cleared; classification is kept or cleared per config.
    pub fn submit(&mut self, config: &WorkflowConfig) -> Result<Document, FormError> {
        let (file, domain, department, category) =
            match (&self.file, self.domain, self.department, self.category) {
                (Some(file), Some(domain), Some(department), Some(category)) => {
                    (file.clone(), domain, department, category)
                }
                _ => return Err(FormError::MissingFields(self.missing_fields())),
            };

        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::EmptyName);
        }

        let file_type = file.file_type();
        let is_final = match config.final_version_policy {
            FinalVersionPolicy::UserChoice => self.version.is_final(),
            FinalVersionPolicy::PdfIsFinal => file_type == "pdf",
        };

        let document = Document::create(NewDocument {
            name: name.to_string(),
            domain,
            department,
            category,
            file_type,
            is_final,
            file,
            uploaded_at: Local::now().naive_local(),
        });

        self.file = None;
        self.name.clear();
        if !config.retain_classification_after_submit {
            self.domain = None;
            self.department = None;
            self.category = None;
        }

        Ok(document)
    }
}
