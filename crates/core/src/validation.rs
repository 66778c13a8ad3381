//! Field-level validation helpers.
//!
//! DTOs declare their rules with `#[derive(validator::Validate)]`; this
//! module supplies the custom rules those derives reference and folds a
//! [`ValidationErrors`] report into one [`CoreError::Validation`] message.

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

use crate::error::CoreError;
use crate::water::{WaterType, VALID_WATER_TYPES};

/// Custom rule: the value must name one of the [`WaterType`] variants.
pub fn validate_water(value: &str) -> Result<(), ValidationError> {
    WaterType::from_str(value).map(|_| ()).map_err(|_| {
        let mut err = ValidationError::new("water");
        err.message = Some(Cow::Owned(format!(
            "must be one of: {}",
            VALID_WATER_TYPES.join(", ")
        )));
        err
    })
}

/// Render every failing field as `field: reason`, sorted by field name and
/// joined with `"; "`.
pub fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<(String, Vec<String>)> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let reasons = errs
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            (field.to_string(), reasons)
        })
        .collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .map(|(field, reasons)| format!("{field}: {}", reasons.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        CoreError::Validation(describe(&errors))
    }
}
