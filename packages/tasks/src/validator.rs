use serde::Serialize;

/// Validation errors for task data
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

const TITLE_REQUIRED: &str = "Title is required and must be a non-empty string";

/// Validates a title for creation or update.
///
/// Shared by create (where a missing title is a violation) and update
/// (where the title is only checked when supplied). Errors accumulate;
/// a non-empty list is a validation failure.
pub fn validate_title(title: Option<&str>) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    match title {
        Some(title) if !title.trim().is_empty() => {}
        _ => errors.push(ValidationError::new("title", TITLE_REQUIRED)),
    }

    errors
}
