use thiserror::Error;

/// Core error taxonomy. Nothing here is fatal: callers either surface the
/// condition as a recoverable message or fall back to "no change".
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

impl CoreError {
    pub fn not_found(entity: &str, id: &str) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}
