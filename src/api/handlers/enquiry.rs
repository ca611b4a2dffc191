//! Enquiry submission handler and its field validation.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{EnquiryForm, MessageResponse, SubmitResponse};
use crate::app_state::AppState;
use crate::config::EnquiryVariant;
use crate::error::{ErrorResponse, FieldError, ServiceError};

/// `POST /enquiry` — Submit a contact-form enquiry.
///
/// # Errors
///
/// Returns [`ServiceError::Validation`] when required fields are missing
/// or not strings, and [`ServiceError::Persistence`] when the row cannot
/// be stored.
#[utoipa::path(
    post,
    path = "/enquiry",
    tag = "Enquiries",
    summary = "Submit an enquiry",
    description = "Validates the contact form for the configured variant and stores it as a new row. The `phone` variant replies with a confirmation message; the `interest` variant echoes the submitted fields.",
    request_body = EnquiryForm,
    responses(
        (status = 200, description = "Enquiry stored; shape depends on the configured variant", body = serde_json::Value),
        (status = 422, description = "Missing or mistyped fields", body = ErrorResponse),
        (status = 500, description = "Persistence failure", body = ErrorResponse),
    )
)]
pub async fn submit_enquiry(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<impl IntoResponse, ServiceError> {
    let form = parse_enquiry_form(state.variant, &body)?;

    let record = form.clone().into_record();
    let stored = state.store.insert(&record).await?;
    tracing::info!(id = stored.id, variant = %state.variant, "enquiry stored");

    let response = match state.variant {
        EnquiryVariant::Phone => (
            StatusCode::OK,
            Json(MessageResponse {
                message: "Enquiry submitted successfully".to_string(),
            }),
        )
            .into_response(),
        EnquiryVariant::Interest => (
            StatusCode::OK,
            Json(SubmitResponse {
                success: true,
                data: form,
            }),
        )
            .into_response(),
    };

    Ok(response)
}

/// Enquiry routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/enquiry", post(submit_enquiry))
}

// ── Field Validation Helpers ────────────────────────────────────────────

/// Validates the raw JSON body against the variant's field set.
///
/// Walks every field so one response reports all missing and mistyped
/// fields at once. Unknown fields are ignored. Only the field shape is
/// checked; length limits live in the table definition.
///
/// # Errors
///
/// Returns [`ServiceError::Validation`] listing every offending field.
pub fn parse_enquiry_form(
    variant: EnquiryVariant,
    body: &serde_json::Value,
) -> Result<EnquiryForm, ServiceError> {
    let Some(obj) = body.as_object() else {
        return Err(ServiceError::validation(vec![FieldError::new(
            "body",
            "expected a JSON object",
        )]));
    };

    let mut errors = Vec::new();

    let name = required_string(obj, "name", &mut errors);
    let email = required_string(obj, "email", &mut errors);
    let phone = match variant {
        EnquiryVariant::Phone => required_string(obj, "phone", &mut errors),
        EnquiryVariant::Interest => None,
    };
    let company = required_string(obj, "company", &mut errors);
    let employees = required_string(obj, "employees", &mut errors);
    let interest = match variant {
        EnquiryVariant::Interest => required_string(obj, "interest", &mut errors),
        EnquiryVariant::Phone => None,
    };
    let message = required_string(obj, "message", &mut errors);

    match (name, email, company, employees, message) {
        (Some(name), Some(email), Some(company), Some(employees), Some(message))
            if errors.is_empty() =>
        {
            Ok(EnquiryForm {
                name,
                email,
                phone,
                company,
                employees,
                interest,
                message,
            })
        }
        _ => Err(ServiceError::validation(errors)),
    }
}

/// Extracts a required string field, recording missing and mistyped ones.
fn required_string(
    obj: &serde_json::Map<String, serde_json::Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match obj.get(field) {
        Some(serde_json::Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError::new(field, "must be a string"));
            None
        }
        None => {
            errors.push(FieldError::new(field, "is required"));
            None
        }
    }
}
