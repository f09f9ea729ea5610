use thiserror::Error;

/// A record that deserialized cleanly but breaks one of its field constraints.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("field `{field}` {reason}")]
pub struct ConstraintViolation {
    /// Name of the offending field as it appears in the source JSON.
    pub field: &'static str,
    /// Human-readable description of the broken constraint.
    pub reason: String,
}

impl ConstraintViolation {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}
