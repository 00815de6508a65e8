/**
 * Authentication Handler Types
 *
 * This module defines the request bodies for the sign-up and sign-in
 * handlers. Both respond with `AccessToken`.
 */

use serde::{Deserialize, Serialize};

/// Sign up request
///
/// Unknown fields are ignored.
#[derive(Deserialize, Serialize, Debug)]
pub struct SignUpRequest {
    /// User's email address
    pub email: String,
    /// User's password (will be hashed before storage)
    pub password: String,
}

/// Sign in request
#[derive(Deserialize, Serialize, Debug)]
pub struct SignInRequest {
    pub email: String,
    /// User's password (will be verified against stored hash)
    pub password: String,
}
