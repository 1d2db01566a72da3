use serde::{Deserialize, Serialize};

pub const TOKEN_KEY: &str = "token";

pub const SIGNUP_PATH: &str = "/signup";
pub const SIGNIN_PATH: &str = "/signin";
pub const BLOGS_PATH: &str = "/blogs";

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    Signup,
    Signin,
}

impl AuthMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMode::Signup => "signup",
            AuthMode::Signin => "signin",
        }
    }

    pub fn all() -> &'static [AuthMode] {
        &[AuthMode::Signup, AuthMode::Signin]
    }

    /// The mode the cross-link on the form points to.
    pub fn other(&self) -> AuthMode {
        match self {
            AuthMode::Signup => AuthMode::Signin,
            AuthMode::Signin => AuthMode::Signup,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            AuthMode::Signup => SIGNUP_PATH,
            AuthMode::Signin => SIGNIN_PATH,
        }
    }

    /// Full endpoint URL for this mode. A trailing `/` on `base_url` is ignored.
    pub fn endpoint(&self, base_url: &str) -> String {
        format!(
            "{}/api/v1/user/{}",
            base_url.trim_end_matches('/'),
            self.as_str()
        )
    }

    pub fn heading(&self) -> &'static str {
        match self {
            AuthMode::Signup => "Create an account",
            AuthMode::Signin => "Sign in",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            AuthMode::Signup => "Already have an account?",
            AuthMode::Signin => "Don't have an account?",
        }
    }

    /// Button text, also used as the cross-link text of the opposite mode.
    pub fn action_label(&self) -> &'static str {
        match self {
            AuthMode::Signup => "Sign up",
            AuthMode::Signin => "Sign in",
        }
    }

    pub fn shows_name_field(&self) -> bool {
        matches!(self, AuthMode::Signup)
    }

    pub fn shows_note(&self) -> bool {
        matches!(self, AuthMode::Signup)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
}

impl Field {
    pub fn id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Password => "Password",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "Username",
            Field::Email => "randomname@email.com",
            Field::Password => "123456",
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            Field::Password => "password",
            Field::Name | Field::Email => "text",
        }
    }

    /// Fields rendered for `mode`, in display order.
    pub fn visible_in(mode: AuthMode) -> &'static [Field] {
        if mode.shows_name_field() {
            &[Field::Name, Field::Email, Field::Password]
        } else {
            &[Field::Email, Field::Password]
        }
    }
}

// ============================================================================
// API Request Types
// ============================================================================

/// Credentials as entered. Also the JSON body of both auth endpoints; `name`
/// is sent in sign-in mode too and ignored by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthFields {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl AuthFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthRequest {
    pub mode: AuthMode,
    pub url: String,
    pub body: AuthFields,
}

// ============================================================================
// API Response Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub jwt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}
