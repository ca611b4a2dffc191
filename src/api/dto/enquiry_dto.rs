//! Enquiry DTOs for the submission endpoint.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::persistence::models::NewEnquiry;

/// A validated contact-form submission.
///
/// Exactly one of `phone` / `interest` is populated, depending on which
/// form variant the deployment accepts. Built by the handler's field
/// validation, never deserialized directly from the request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EnquiryForm {
    /// Submitter's full name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number (`phone` variant only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Company name.
    pub company: String,
    /// Company size bracket, free-form (e.g. `"11-50"`).
    pub employees: String,
    /// Product interest (`interest` variant only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest: Option<String>,
    /// Free-form enquiry message.
    pub message: String,
}

impl EnquiryForm {
    /// Maps the form onto a persistence record, field by field.
    #[must_use]
    pub fn into_record(self) -> NewEnquiry {
        NewEnquiry {
            name: self.name,
            email: self.email,
            phone: self.phone,
            company: self.company,
            employees: self.employees,
            interest: self.interest,
            message: self.message,
        }
    }
}

/// Response body for the `phone` variant: a bare confirmation message.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: String,
}

/// Response body for the `interest` variant: flag plus form echo.
#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// The submitted form, echoed back without the row id.
    pub data: EnquiryForm,
}
