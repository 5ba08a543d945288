//! Synchronous form validation run before any request leaves the browser.
//!
//! Forms derive [`Validate`]; the resulting [`ValidationErrors`] tree is wrapped in
//! [`FieldErrors`], whose first message per field is shown beneath that field.

use crate::api::{EventPayload, EventStatus, LoginRequest, SignupRequest};
use crate::utils::time::parse_timestamp;
use chrono::{DateTime, Utc};
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(ValidationErrors);

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        Self(errors)
    }
}

impl FieldErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<Cow<'static, str>>) {
        let mut error = ValidationError::new(field);
        error.message = Some(message.into());
        self.0.add(field, error);
    }

    pub fn first(&self, field: &str) -> Option<&str> {
        match self.0.errors().get(field)? {
            ValidationErrorsKind::Field(errors) => errors
                .iter()
                .find_map(|error| error.message.as_deref()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("blank"))
    } else {
        Ok(())
    }
}

/// Blank input is left to the `length` rule so only one message shows.
fn timestamp(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || parse_timestamp(value).is_some() {
        Ok(())
    } else {
        Err(ValidationError::new("timestamp"))
    }
}

fn into_field_errors(result: Result<(), ValidationErrors>) -> FieldErrors {
    result.err().map(FieldErrors::from).unwrap_or_default()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct EventForm {
    #[validate(custom(function = "not_blank", message = "Title is required"))]
    pub title: String,
    #[validate(
        length(min = 1, message = "Start time is required"),
        custom(function = "timestamp", message = "Invalid start time")
    )]
    pub start_time: String,
    #[validate(
        length(min = 1, message = "End time is required"),
        custom(function = "timestamp", message = "Invalid end time")
    )]
    pub end_time: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl EventDraft {
    pub fn into_payload(self, status: EventStatus) -> EventPayload {
        EventPayload {
            title: self.title,
            start_time: self.start_time,
            end_time: self.end_time,
            status,
        }
    }
}

impl EventForm {
    pub fn check(&self) -> Result<EventDraft, FieldErrors> {
        let mut errors = into_field_errors(self.validate());
        let start = parse_timestamp(&self.start_time);
        let end = parse_timestamp(&self.end_time);
        if let (Some(start_time), Some(end_time)) = (start, end) {
            if end_time <= start_time {
                errors.push("end_time", "End time must be after start time");
            }
        }
        match (start, end) {
            (Some(start_time), Some(end_time)) if errors.is_empty() => Ok(EventDraft {
                title: self.title.trim().to_string(),
                start_time,
                end_time,
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct LoginForm {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl LoginForm {
    pub fn check(&self) -> Result<LoginRequest, FieldErrors> {
        let normalized = Self {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        };
        normalized.validate().map_err(FieldErrors::from)?;
        Ok(LoginRequest {
            email: normalized.email,
            password: normalized.password,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct SignupForm {
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

impl SignupForm {
    pub fn check(&self) -> Result<SignupRequest, FieldErrors> {
        let normalized = Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        };
        normalized.validate().map_err(FieldErrors::from)?;
        Ok(SignupRequest {
            name: normalized.name,
            email: normalized.email,
            password: normalized.password,
        })
    }
}
