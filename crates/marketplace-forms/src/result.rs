// File: src/result.rs
// Purpose: Outcome of one validation pass

use std::collections::BTreeMap;

use serde::Serialize;

use crate::field::FieldName;

/// Result of validation with at most one error per field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub field_errors: BTreeMap<FieldName, String>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        Self {
            is_valid: true,
            field_errors: BTreeMap::new(),
        }
    }

    /// Build a result from per-field errors; valid when there are none
    pub fn from_errors(field_errors: BTreeMap<FieldName, String>) -> Self {
        Self {
            is_valid: field_errors.is_empty(),
            field_errors,
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.field_errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.field_errors.len()
    }

    /// Get the error for a specific field
    pub fn error(&self, field: FieldName) -> Option<&str> {
        self.field_errors.get(&field).map(|s| s.as_str())
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}
