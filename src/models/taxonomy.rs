//! Two-level classification taxonomy: domain, then department.
//!
//! The domain → department table is an exhaustive `match`, so adding a
//! domain without listing its departments fails to compile.

use serde::{Deserialize, Serialize};

use super::enums::str_enum;
use super::ModelError;

str_enum!(Domain {
    Finance => "finance", "Finance",
    Hr => "hr", "HR",
    It => "it", "IT",
    Marketing => "marketing", "Marketing",
    Operations => "operations", "Operations",
    Legal => "legal", "Legal",
});

str_enum!(Department {
    Accounting => "accounting", "Accounting",
    Budgeting => "budgeting", "Budgeting",
    Payroll => "payroll", "Payroll",
    Tax => "tax", "Tax",
    Recruitment => "recruitment", "Recruitment",
    Training => "training", "Training",
    Benefits => "benefits", "Benefits",
    EmployeeRelations => "employee_relations", "Employee Relations",
    Development => "development", "Development",
    Infrastructure => "infrastructure", "Infrastructure",
    Support => "support", "Support",
    Security => "security", "Security",
    Digital => "digital", "Digital",
    Content => "content", "Content",
    Brand => "brand", "Brand",
    Analytics => "analytics", "Analytics",
    Logistics => "logistics", "Logistics",
    Production => "production", "Production",
    Quality => "quality", "Quality",
    Facilities => "facilities", "Facilities",
    Compliance => "compliance", "Compliance",
    Contracts => "contracts", "Contracts",
    IntellectualProperty => "intellectual_property", "Intellectual Property",
    Litigation => "litigation", "Litigation",
});

impl Domain {
    pub fn departments(&self) -> &'static [Department] {
        use Department::*;
        match self {
            Self::Finance => &[Accounting, Budgeting, Payroll, Tax],
            Self::Hr => &[Recruitment, Training, Benefits, EmployeeRelations],
            Self::It => &[Development, Infrastructure, Support, Security],
            Self::Marketing => &[Digital, Content, Brand, Analytics],
            Self::Operations => &[Logistics, Production, Quality, Facilities],
            Self::Legal => &[Compliance, Contracts, IntellectualProperty, Litigation],
        }
    }

    pub fn contains(&self, department: Department) -> bool {
        department.domain() == *self
    }

    /// Parse a department name and check it belongs to this domain.
    pub fn parse_department(&self, value: &str) -> Result<Department, ModelError> {
        let department: Department = value.parse()?;
        if self.contains(department) {
            Ok(department)
        } else {
            Err(ModelError::DepartmentOutsideDomain {
                department: department.label().into(),
                domain: self.label().into(),
            })
        }
    }
}

impl Department {
    /// Owning domain. Each department belongs to exactly one.
    pub fn domain(&self) -> Domain {
        use Department::*;
        match self {
            Accounting | Budgeting | Payroll | Tax => Domain::Finance,
            Recruitment | Training | Benefits | EmployeeRelations => Domain::Hr,
            Development | Infrastructure | Support | Security => Domain::It,
            Digital | Content | Brand | Analytics => Domain::Marketing,
            Logistics | Production | Quality | Facilities => Domain::Operations,
            Compliance | Contracts | IntellectualProperty | Litigation => Domain::Legal,
        }
    }
}
