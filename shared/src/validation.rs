//! Shape checks for the sign-up and sign-in payloads.
//!
//! Both schemas require a well-formed email and a password of at least
//! [`MIN_PASSWORD_LEN`] characters. Sign-up accepts any `name`, including
//! an empty one.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::ValidationError;
use crate::types::{AuthFields, AuthMode};

pub const MIN_PASSWORD_LEN: usize = 6;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$")
            .expect("email pattern is valid")
    })
}

pub fn is_valid_email(email: &str) -> bool {
    !email.contains("..") && email_regex().is_match(email)
}

pub fn signup(fields: &AuthFields) -> Result<(), ValidationError> {
    credentials(fields)
}

pub fn signin(fields: &AuthFields) -> Result<(), ValidationError> {
    credentials(fields)
}

pub fn validate(mode: AuthMode, fields: &AuthFields) -> Result<(), ValidationError> {
    match mode {
        AuthMode::Signup => signup(fields),
        AuthMode::Signin => signin(fields),
    }
}

fn credentials(fields: &AuthFields) -> Result<(), ValidationError> {
    if !is_valid_email(&fields.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if fields.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, email: &str, password: &str) -> AuthFields {
        AuthFields {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn accepts_common_addresses() {
        for email in [
            "randomname@email.com",
            "first.last+tag@sub.example.org",
            "a_b-c@x-y.io",
        ] {
            assert!(is_valid_email(email), "{email}");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in [
            "",
            "plain",
            "@email.com",
            "name@",
            "name@email",
            "name@email.c",
            "name@@email.com",
            "na me@email.com",
            "name@-email.com",
            "first..last@email.com",
            " name@email.com",
        ] {
            assert!(!is_valid_email(email), "{email}");
        }
    }

    #[test]
    fn signup_allows_empty_name() {
        assert_eq!(signup(&fields("", "a@b.io", "123456")), Ok(()));
        assert_eq!(signup(&fields("Ada", "a@b.io", "123456")), Ok(()));
    }

    #[test]
    fn password_length_counts_characters() {
        assert_eq!(
            signin(&fields("", "a@b.io", "12345")),
            Err(ValidationError::PasswordTooShort { min: 6 })
        );
        // six characters, twelve bytes
        assert_eq!(signin(&fields("", "a@b.io", "ääääää")), Ok(()));
        assert!(signin(&fields("", "a@b.io", "ääää")).is_err());
    }

    #[test]
    fn email_is_checked_before_password() {
        assert_eq!(
            validate(AuthMode::Signin, &fields("", "nope", "1")),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn empty_form_fails_both_modes() {
        let empty = AuthFields::default();
        for mode in AuthMode::all() {
            assert!(validate(*mode, &empty).is_err());
        }
    }
}
