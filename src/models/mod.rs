pub mod document;
pub mod enums;
pub mod filters;
pub mod taxonomy;

pub use document::*;
pub use enums::*;
pub use filters::*;
pub use taxonomy::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Department {department} does not belong to domain {domain}")]
    DepartmentOutsideDomain { department: String, domain: String },
}
