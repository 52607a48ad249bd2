use validator::{Validate, ValidationErrors};

use crate::errors::AppError;

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(map_validation_error)
}

/// Flattens field errors into `field: [code, ...]` pairs, sorted by field name.
fn map_validation_error(err: ValidationErrors) -> AppError {
    let mut fields: Vec<_> = err.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    let details = fields
        .iter()
        .map(|(field, errs)| {
            let codes = errs
                .iter()
                .map(|e| e.code.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}: [{}]", field, codes)
        })
        .collect::<Vec<_>>()
        .join("; ");
    AppError::BadRequest(format!("Validation failed: {}", details))
}
