//! Login and password-reset form validation.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

pub const MIN_LOGIN_PASSWORD_LEN: usize = 6;
pub const MIN_RESET_PASSWORD_LEN: usize = 8;
pub const MISSING_RESET_TOKEN: &str = "Invalid or missing reset token.";

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Validation failure attached to one form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub human_verified: bool,
}

impl LoginForm {
    /// Field errors in form order; empty when the form may be submitted
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if !EMAIL.is_match(self.email.trim()) {
            errors.push(FieldError::new("email", "Enter a valid email"));
        }
        if self.password.chars().count() < MIN_LOGIN_PASSWORD_LEN {
            errors.push(FieldError::new(
                "password",
                format!("Password must be at least {MIN_LOGIN_PASSWORD_LEN} characters"),
            ));
        }
        if !self.human_verified {
            errors.push(FieldError::new("robot", "Please verify you are a human"));
        }

        errors
    }
}

#[derive(Debug, Clone, Default)]
pub struct ResetPasswordForm {
    pub password: String,
    pub confirm_password: String,
}

impl ResetPasswordForm {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.password.chars().count() < MIN_RESET_PASSWORD_LEN {
            errors.push(FieldError::new(
                "password",
                format!("Password must be at least {MIN_RESET_PASSWORD_LEN} characters"),
            ));
        }
        if self.password != self.confirm_password {
            errors.push(FieldError::new("confirmPassword", "Passwords do not match"));
        }

        errors
    }
}
