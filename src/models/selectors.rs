//! Selector profile for one site template.
//!
//! The crawler is tied to a site only through this configuration: a new
//! site template is a new profile, not new code. Selectors are CSS.

use serde::{Deserialize, Serialize};

/// Record field a probe writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobField {
    Description,
    ApplyLink,
    CompanyLogo,
    Locations,
    TimeType,
    PostedOn,
    JobRequisitionId,
    EndDate,
}

/// One independent field probe: locate an element, take its text or a
/// named attribute. Lookup failure means field-absent, never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldRule {
    /// Target record field
    pub field: JobField,

    /// CSS selector for the element
    pub selector: String,

    /// Attribute to read; `None` reads the element text
    #[serde(default)]
    pub attr: Option<String>,
}

/// All selectors for one site template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorProfile {
    /// Anchor elements linking to job-detail pages on a results page
    #[serde(default = "defaults::results_anchor")]
    pub results_anchor: String,

    /// Next-page control on a results page
    #[serde(default = "defaults::next_button")]
    pub next_button: String,

    /// Structured-metadata script block on a job-detail page
    #[serde(default = "defaults::metadata_script")]
    pub metadata_script: String,

    /// Ordered field probes for a job-detail page
    #[serde(default = "defaults::field_rules")]
    pub fields: Vec<FieldRule>,
}

impl Default for SelectorProfile {
    fn default() -> Self {
        Self {
            results_anchor: defaults::results_anchor(),
            next_button: defaults::next_button(),
            metadata_script: defaults::metadata_script(),
            fields: defaults::field_rules(),
        }
    }
}

mod defaults {
    use super::{FieldRule, JobField};

    pub fn results_anchor() -> String {
        "a[data-automation-id=jobTitle]".into()
    }

    pub fn next_button() -> String {
        "button[aria-label=next]".into()
    }

    pub fn metadata_script() -> String {
        r#"script[type="application/ld+json"]"#.into()
    }

    // Workday's job-detail template keys most blocks by data-automation-id.
    pub fn field_rules() -> Vec<FieldRule> {
        vec![
            FieldRule {
                field: JobField::Description,
                selector: "h2[data-automation-id=jobPostingHeader]".into(),
                attr: None,
            },
            FieldRule {
                field: JobField::ApplyLink,
                selector: "a[data-automation-id=adventureButton]".into(),
                attr: Some("href".into()),
            },
            FieldRule {
                field: JobField::CompanyLogo,
                selector: "a[data-automation-id=logoLink] img".into(),
                attr: Some("src".into()),
            },
            FieldRule {
                field: JobField::Locations,
                selector: "div[data-automation-id=locations] dd".into(),
                attr: None,
            },
            FieldRule {
                field: JobField::TimeType,
                selector: "div[data-automation-id=time] dd".into(),
                attr: None,
            },
            FieldRule {
                field: JobField::PostedOn,
                selector: "div[data-automation-id=postedOn] dd".into(),
                attr: None,
            },
            FieldRule {
                field: JobField::JobRequisitionId,
                selector: "div[data-automation-id=requisitionId] dd".into(),
                attr: None,
            },
            FieldRule {
                field: JobField::EndDate,
                selector: "div[data-automation-id=timeLeftToApply] dd".into(),
                attr: None,
            },
        ]
    }
}
