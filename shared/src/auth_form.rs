use log::{debug, info, warn};

use crate::error::{RequestError, StoreError};
use crate::types::{AuthFields, AuthMode, AuthRequest, AuthResponse, Field, BLOGS_PATH, TOKEN_KEY};
use crate::validation;

pub const INVALID_INPUT_WARNING: &str = "Please enter valid inputs";

/// Key-value sink for the issued token.
pub trait TokenStore {
    fn put(&self, key: &str, token: &str) -> Result<(), StoreError>;
}

/// Blocking, user-visible warnings.
pub trait Alerts {
    fn warn(&self, message: &str);
}

pub trait Navigate {
    fn navigate(&self, path: &str);
}

/// State of one mounted sign-up / sign-in form.
///
/// The form does no IO itself: [`AuthForm::submit`] hands back the request
/// to send, and the caller reports its outcome through [`AuthForm::finish`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    fields: AuthFields,
    submitting: bool,
}

impl AuthForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &AuthFields {
        &self.fields
    }

    pub fn value(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    /// True while a request is in flight. Drives the loading indicator.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value.into());
    }

    pub fn reset(&mut self) {
        self.fields = AuthFields::default();
    }

    /// Validates the current fields for `mode`.
    ///
    /// Returns the request to dispatch, or `None` when nothing should be sent:
    /// either a request is already pending, or validation failed (in which
    /// case the user has been warned and the fields cleared).
    pub fn submit(
        &mut self,
        mode: AuthMode,
        base_url: &str,
        alerts: &impl Alerts,
    ) -> Option<AuthRequest> {
        if self.submitting {
            debug!("ignoring {} submit, request already pending", mode.as_str());
            return None;
        }

        if let Err(err) = validation::validate(mode, &self.fields) {
            warn!("{} rejected: {}", mode.as_str(), err);
            alerts.warn(INVALID_INPUT_WARNING);
            self.reset();
            return None;
        }

        self.submitting = true;
        let url = mode.endpoint(base_url);
        debug!("submitting {} to {}", mode.as_str(), url);
        Some(AuthRequest {
            mode,
            url,
            body: self.fields.clone(),
        })
    }

    /// Applies the outcome of a request returned by [`AuthForm::submit`].
    ///
    /// Returns `true` when the user is now signed in and has been sent to the
    /// blog listing.
    pub fn finish(
        &mut self,
        result: Result<AuthResponse, RequestError>,
        store: &impl TokenStore,
        alerts: &impl Alerts,
        nav: &impl Navigate,
    ) -> bool {
        self.submitting = false;

        let response = match result {
            Ok(response) => response,
            Err(err) => {
                warn!("auth request failed: {}", err);
                alerts.warn(&err.warning());
                self.reset();
                return false;
            }
        };

        if let Err(err) = store.put(TOKEN_KEY, &response.jwt) {
            warn!("{}", err);
            alerts.warn(&err.to_string());
            self.reset();
            return false;
        }

        info!("signed in, redirecting to {}", BLOGS_PATH);
        nav.navigate(BLOGS_PATH);
        true
    }
}
