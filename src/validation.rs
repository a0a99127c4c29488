use std::fmt::Display;

/// A single validation problem, keyed by the offending field where one is
/// known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: Option<String>,
    pub message: String,
}

/// Validation problems collected for one statement.
///
/// Errors travel back to the caller as data rather than a raised fault so
/// that every problem with a statement surfaces in one pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        ValidationErrors::default()
    }

    /// Records an error if `value` is missing or blank.
    pub fn check_required_field(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.errors.push(ValidationError {
                field: Some(field.to_string()),
                message: format!("{field} is required"),
            });
        }
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(ValidationError { field: None, message: message.into() });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// All messages, including the field name where one was recorded.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.message.clone()).collect()
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}
