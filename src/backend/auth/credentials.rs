/**
 * Credentials
 *
 * Handlers build `Credentials` from the raw JSON body before calling the
 * auth service.
 *
 * # Policies
 *
 * - Sign-up: well-formed email and a password of acceptable length
 * - Sign-in: both fields present; anything else is left to the password
 *   check so every mismatch ends in the same `Credentials error`
 */

use std::fmt;

use crate::shared::validation::{validate_email, validate_not_blank, validate_password};
use crate::shared::SharedError;

/// Email/password pair that passed input validation
///
/// The email is always kept exactly as supplied.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Validate raw sign-up inputs
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, SharedError> {
        let email = validate_email(email)?;
        let password = validate_password(password)?;
        Ok(Self {
            email: email.to_owned(),
            password: password.to_owned(),
        })
    }

    /// Accept raw sign-in inputs
    ///
    /// Only emptiness is rejected. The sign-up password policy is not applied
    /// here, so a short wrong password is just another credential mismatch.
    pub fn for_sign_in(email: &str, password: &str) -> Result<Self, SharedError> {
        let email = validate_not_blank("email", email)?;
        if password.is_empty() {
            return Err(SharedError::validation("password", "password must not be empty"));
        }
        Ok(Self {
            email: email.to_owned(),
            password: password.to_owned(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
