//! Database models for enquiry records.

use serde::{Deserialize, Serialize};

/// An enquiry record that has not been stored yet (no id).
///
/// `phone` and `interest` are optional at the storage level because each
/// wire variant requires exactly one of them; the column belonging to the
/// inactive variant stays NULL. Construction goes through
/// [`crate::api::dto::EnquiryForm::into_record`], which enumerates every
/// field explicitly so nothing outside the declared schema can reach the
/// table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEnquiry {
    /// Submitter's name.
    pub name: String,
    /// Contact email. Stored as submitted; no format validation.
    pub email: String,
    /// Contact phone number (`phone` variant only).
    pub phone: Option<String>,
    /// Submitter's company.
    pub company: String,
    /// Free-form company-size bucket label (e.g. `"11-50"`).
    pub employees: String,
    /// What the submitter is interested in (`interest` variant only).
    pub interest: Option<String>,
    /// Free-form message body.
    pub message: String,
}

/// A stored row from the `enquiries` table.
///
/// Immutable once written: the service exposes no update or delete
/// operation, and `id` is assigned exactly once by the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enquiry {
    /// Auto-increment row id.
    pub id: i64,
    /// Submitter's name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number, if the row came from the `phone` variant.
    pub phone: Option<String>,
    /// Submitter's company.
    pub company: String,
    /// Company-size bucket label.
    pub employees: String,
    /// Interest, if the row came from the `interest` variant.
    pub interest: Option<String>,
    /// Free-form message body.
    pub message: String,
}
