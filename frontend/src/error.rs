//! Error types for form submission

use thiserror::Error;

/// A single field that failed its local constraint check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// One or more required fields failed validation; nothing was sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Please fix the errors above.")]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

#[cfg(test)]
impl ValidationError {
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.field == field)
            .map(|f| f.message.as_str())
    }

    pub fn has(&self, field: &str) -> bool {
        self.message_for(field).is_some()
    }
}

/// The relay call did not succeed. Handled by the mail fallback, only logged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Relay request failed: {0}")]
    Network(String),

    #[error("Relay responded with status {0}")]
    Status(u16),
}
