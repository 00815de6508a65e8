//! Users Module
//!
//! Profile read and edit for the signed-in user. Account creation lives in
//! `auth`.

pub mod handlers;
pub mod service;

pub use handlers::{UserResponse, EditUserRequest};
pub use service::{ProfileEdit, ProfileError, UserService};
