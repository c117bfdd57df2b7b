use validator::{Validate, ValidationErrors};

/// Runs the `validator` rules of a payload and flattens any failures into a
/// single readable line.
pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), String> {
    payload.validate().map_err(|err| describe_validation_errors(&err))
}

pub fn describe_validation_errors(err: &ValidationErrors) -> String {
    let mut fields = err.field_errors().into_iter().collect::<Vec<_>>();
    fields.sort_by_key(|(field, _)| *field);

    let details = fields
        .iter()
        .map(|(field, errs)| {
            let errors = errs.iter()
                .map(|e| match e.message.as_deref() {
                    Some(message) => format!("{}: {}", e.code, message),
                    None => e.code.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}: [{}]", field, errors)
        })
        .collect::<Vec<_>>()
        .join("; ");

    format!("Validation failed: {}", details)
}
