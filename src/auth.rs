//! Credential Validation
//!
//! Client-side checks run before the login/register forms submit.

use serde::Serialize;

use crate::error::{ApiError, FormError};
use crate::route::{HOME_PATH, LOGIN_PATH};

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    pub fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Log in",
            AuthMode::Register => "Register",
        }
    }

    /// Where a successful submit navigates to
    pub fn success_path(self) -> &'static str {
        match self {
            AuthMode::Login => HOME_PATH,
            AuthMode::Register => LOGIN_PATH,
        }
    }

    /// Alert text for a failed submit: the server's reason when it gave one
    pub fn failure_notice(self, err: &ApiError) -> String {
        if err.status().is_none() {
            return "Request failed, please try again later".to_string();
        }
        if let Some(reason) = err.server_message() {
            return reason.to_string();
        }
        match self {
            AuthMode::Login => "Login failed, check your username and password".to_string(),
            AuthMode::Register => "Registration failed, the username may already be taken".to_string(),
        }
    }
}

/// Trimmed username/password pair (request body of /login and /register)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn validate(username: &str, password: &str, mode: AuthMode) -> Result<Self, FormError> {
        let username = username.trim();
        let password = password.trim();
        if username.is_empty() || password.is_empty() {
            return Err(FormError::MissingCredentials);
        }
        if mode == AuthMode::Register && password.chars().count() < MIN_PASSWORD_LEN {
            return Err(FormError::PasswordTooShort { min: MIN_PASSWORD_LEN });
        }
        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields() {
        assert_eq!(Credentials::validate("", "secret1", AuthMode::Login), Err(FormError::MissingCredentials));
        assert_eq!(Credentials::validate("amy", "   ", AuthMode::Register), Err(FormError::MissingCredentials));
    }

    #[test]
    fn test_short_password_only_rejected_on_register() {
        assert_eq!(
            Credentials::validate("amy", "abc", AuthMode::Register),
            Err(FormError::PasswordTooShort { min: 6 })
        );
        assert!(Credentials::validate("amy", "abc", AuthMode::Login).is_ok());
    }

    #[test]
    fn test_failure_notice_prefers_server_reason() {
        let err = ApiError::from_status(401, r#"{"error":"invalid password"}"#);
        assert_eq!(AuthMode::Login.failure_notice(&err), "invalid password");

        let bare = ApiError::from_status(409, "");
        assert!(AuthMode::Register.failure_notice(&bare).starts_with("Registration failed"));

        let offline = ApiError::Network("offline".to_string());
        assert!(AuthMode::Login.failure_notice(&offline).starts_with("Request failed"));
    }

    #[test]
    fn test_success_path() {
        assert_eq!(AuthMode::Login.success_path(), "/");
        assert_eq!(AuthMode::Register.success_path(), "/login");
    }

    #[test]
    fn test_values_are_trimmed() {
        let creds = Credentials::validate("  amy ", " secret1 ", AuthMode::Register).unwrap();
        assert_eq!(creds.username, "amy");
        assert_eq!(creds.password, "secret1");
        assert_eq!(
            serde_json::to_string(&creds).unwrap(),
            r#"{"username":"amy","password":"secret1"}"#
        );
    }
}
