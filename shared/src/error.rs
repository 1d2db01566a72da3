use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("password must be at least {min} characters")]
    PasswordTooShort { min: usize },
}

/// Failure of the auth round trip, as seen by the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The server answered with a non-2xx status. `message` is the `message`
    /// field of the JSON body, when there was one.
    #[error("server responded with status {status}")]
    Http { status: u16, message: Option<String> },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl RequestError {
    pub fn server_message(&self) -> Option<&str> {
        match self {
            RequestError::Http { message, .. } => message.as_deref(),
            RequestError::Transport(_) | RequestError::Decode(_) => None,
        }
    }

    /// Text shown to the user in the failure warning.
    pub fn warning(&self) -> String {
        match self.server_message() {
            Some(message) => format!("Error while signing in: {message}"),
            None => format!("Error while signing in: {self}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not save session: {0}")]
pub struct StoreError(pub String);
