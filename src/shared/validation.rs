//! Input validation
//!
//! Field checks shared by the auth, profile and bookmark handlers. Each
//! validator returns the normalized value or a `SharedError::ValidationError`
//! naming the field.

use url::Url;
use validator::ValidateEmail;

use crate::shared::error::SharedError;

/// Minimum password length accepted on sign-up.
pub const MIN_PASSWORD_LEN: usize = 8;

/// bcrypt only looks at the first 72 bytes of its input.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Upper bound on an email address (RFC 5321 path limit).
pub const MAX_EMAIL_LEN: usize = 254;

/// Validate email format
///
/// Syntax is checked by `validator`; on top of that the domain must be
/// dotted, so `misha@asd` is rejected. The value is returned unchanged:
/// emails are case-sensitive identities.
pub fn validate_email(email: &str) -> Result<&str, SharedError> {
    if email.is_empty() {
        return Err(SharedError::validation("email", "email must not be empty"));
    }
    if email.len() > MAX_EMAIL_LEN {
        return Err(SharedError::validation("email", "email is too long"));
    }

    let dotted = email
        .rsplit_once('@')
        .is_some_and(|(_, domain)| domain.contains('.'));
    if !dotted || !email.validate_email() {
        return Err(SharedError::validation("email", "invalid email format"));
    }

    Ok(email)
}

/// Validate password length
pub fn validate_password(password: &str) -> Result<&str, SharedError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(SharedError::validation(
            "password",
            format!("password must be at least {} characters", MIN_PASSWORD_LEN),
        ));
    }
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(SharedError::validation(
            "password",
            format!("password must be at most {} bytes", MAX_PASSWORD_BYTES),
        ));
    }
    Ok(password)
}

/// Require a string that is not blank once trimmed.
pub fn validate_not_blank<'a>(field: &str, value: &'a str) -> Result<&'a str, SharedError> {
    if value.trim().is_empty() {
        return Err(SharedError::validation(field, format!("{} must not be empty", field)));
    }
    Ok(value)
}

/// Validate a bookmark link: an absolute `http` or `https` URL.
pub fn validate_link(link: &str) -> Result<&str, SharedError> {
    validate_not_blank("link", link)?;
    let parsed = Url::parse(link)
        .map_err(|e| SharedError::validation("link", format!("invalid URL: {}", e)))?;
    match parsed.scheme() {
        "http" | "https" => Ok(link),
        other => Err(SharedError::validation(
            "link",
            format!("unsupported URL scheme '{}'", other),
        )),
    }
}
