mod auth_form;
mod error;
mod types;
pub mod validation;

pub use auth_form::{Alerts, AuthForm, Navigate, TokenStore, INVALID_INPUT_WARNING};
pub use error::{RequestError, StoreError, ValidationError};
pub use types::*;
