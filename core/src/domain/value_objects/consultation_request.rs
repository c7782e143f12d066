//! Consultation request input and its required-field validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::errors::{DomainError, FieldViolation, ValidationError};

/// Client input for booking a consultation
///
/// Both fields are optional at the type level so that a missing value
/// surfaces as a field-specific validation message rather than a
/// deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationRequest {
    /// Lawyer being booked
    #[validate(required(message = "Lawyer ID is required"))]
    pub lawyer_id: Option<Uuid>,

    /// Requested meeting time
    #[validate(required(message = "Scheduled time is required"))]
    pub scheduled_at: Option<DateTime<Utc>>,
}

impl ConsultationRequest {
    /// Creates a fully populated request
    pub fn new(lawyer_id: Uuid, scheduled_at: DateTime<Utc>) -> Self {
        Self {
            lawyer_id: Some(lawyer_id),
            scheduled_at: Some(scheduled_at),
        }
    }

    /// Validates the request and returns its required parts
    ///
    /// # Returns
    ///
    /// `(lawyer_id, scheduled_at)` when every field is present
    ///
    /// # Errors
    ///
    /// `ValidationError::Fields` listing every missing field, ordered by name
    pub fn into_parts(self) -> Result<(Uuid, DateTime<Utc>), DomainError> {
        self.validate().map_err(to_validation_error)?;

        match (self.lawyer_id, self.scheduled_at) {
            (Some(lawyer_id), Some(scheduled_at)) => Ok((lawyer_id, scheduled_at)),
            // validate() rejects both None cases above
            _ => Err(DomainError::Internal {
                message: "consultation request passed validation with missing fields".to_string(),
            }),
        }
    }
}

fn to_validation_error(errors: ValidationErrors) -> DomainError {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = to_camel_case(&field.to_string());
            errs.iter()
                .map(|e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    FieldViolation::new(field.clone(), message)
                })
                .collect::<Vec<_>>()
        })
        .collect();

    violations.sort_by(|a, b| a.field.cmp(&b.field));
    ValidationError::Fields(violations).into()
}

/// Field names are reported the way clients send them
fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_request_yields_parts() {
        let lawyer_id = Uuid::new_v4();
        let at = Utc::now();

        let (id, scheduled) = ConsultationRequest::new(lawyer_id, at).into_parts().unwrap();
        assert_eq!(id, lawyer_id);
        assert_eq!(scheduled, at);
    }

    #[test]
    fn test_missing_lawyer_id_message() {
        let request = ConsultationRequest {
            lawyer_id: None,
            scheduled_at: Some(Utc::now()),
        };

        match request.into_parts() {
            Err(DomainError::ValidationErr(err)) => {
                assert_eq!(err.message_for("lawyerId"), Some("Lawyer ID is required"));
                assert_eq!(err.message_for("scheduledAt"), None);
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_both_fields_reports_each() {
        match ConsultationRequest::default().into_parts() {
            Err(DomainError::ValidationErr(ValidationError::Fields(violations))) => {
                assert_eq!(
                    violations,
                    vec![
                        FieldViolation::new("lawyerId", "Lawyer ID is required"),
                        FieldViolation::new("scheduledAt", "Scheduled time is required"),
                    ]
                );
            }
            other => panic!("Expected field violations, got {:?}", other),
        }
    }

    #[test]
    fn test_past_schedule_is_not_a_validation_failure() {
        let request =
            ConsultationRequest::new(Uuid::new_v4(), Utc::now() - chrono::Duration::days(1));
        assert!(request.into_parts().is_ok());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let lawyer_id = Uuid::new_v4();
        let json = format!(
            r#"{{"lawyerId":"{}","scheduledAt":"2030-01-15T10:00:00Z"}}"#,
            lawyer_id
        );
        let request: ConsultationRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request.lawyer_id, Some(lawyer_id));
        assert!(request.scheduled_at.is_some());
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("lawyer_id"), "lawyerId");
        assert_eq!(to_camel_case("scheduled_at"), "scheduledAt");
        assert_eq!(to_camel_case("notes"), "notes");
    }
}
