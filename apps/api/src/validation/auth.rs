//! Sign-in, sign-up, password reset and profile forms.

use serde::{Deserialize, Serialize};

use super::rules::{char_len, is_email, INVALID_EMAIL};
use super::{Validate, ValidationErrors};
use crate::models::user::ProfileUpdate;

pub const LOGIN_PASSWORD_MIN: usize = 6;
pub const REGISTER_PASSWORD_MIN: usize = 8;
pub const FULL_NAME_MIN: usize = 2;

fn check_email(errors: &mut ValidationErrors, email: &str) {
    errors.check(is_email(email), "email", INVALID_EMAIL);
}

fn check_full_name(errors: &mut ValidationErrors, full_name: &str) {
    errors.check(
        char_len(full_name) >= FULL_NAME_MIN,
        "fullName",
        "Full name must be at least 2 characters",
    );
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl Validate for LoginForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_email(&mut errors, &self.email);
        errors.check(
            char_len(&self.password) >= LOGIN_PASSWORD_MIN,
            "password",
            "Password must be at least 6 characters",
        );
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl Validate for RegisterForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_full_name(&mut errors, &self.full_name);
        check_email(&mut errors, &self.email);
        errors.check(
            char_len(&self.password) >= REGISTER_PASSWORD_MIN,
            "password",
            "Password must be at least 8 characters",
        );
        // Reported on the confirmation field whatever state `password` is in.
        errors.check(
            self.confirm_password == self.password,
            "confirmPassword",
            "Passwords don't match",
        );
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl Validate for ForgotPasswordForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_email(&mut errors, &self.email);
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileForm {
    pub full_name: String,
    pub email: String,
}

impl Validate for ProfileForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_full_name(&mut errors, &self.full_name);
        check_email(&mut errors, &self.email);
        errors.into_result()
    }
}

/// A submitted profile update obeys the profile form's rules.
impl Validate for ProfileUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_full_name(&mut errors, &self.full_name);
        check_email(&mut errors, &self.email);
        errors.into_result()
    }
}
