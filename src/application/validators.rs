use std::borrow::Cow;

use validator::{ValidateEmail, ValidationError, ValidationErrors};

/// Validates that the input looks like a valid email address
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && email.validate_email()
}

/// Rejects empty and whitespace-only strings. Used as a `validator` custom rule.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Required email rule. Carries its own message so a blank value reports
/// "mandatory" and a malformed one reports "must be valid", never both.
pub fn required_email(value: &str) -> Result<(), ValidationError> {
    let (code, msg) = if value.trim().is_empty() {
        ("blank", "Email is mandatory")
    } else if !is_valid_email(value) {
        ("email", "Email must be valid")
    } else {
        return Ok(());
    };

    let mut err = ValidationError::new(code);
    err.message = Some(message(msg));
    Err(err)
}

/// Flattens field errors into one message, ordered by field name.
pub fn join_messages(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn message(msg: &'static str) -> Cow<'static, str> {
    Cow::Borrowed(msg)
}
