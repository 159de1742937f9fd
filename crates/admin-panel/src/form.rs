//! Create/edit form state and its validation rules.
//!
//! # Validation Rules
//!
//! - Name: required
//! - Email: required, must look like an email address
//! - Password: required; when present at least [`PASSWORD_MIN_LENGTH`]
//!   UTF-16 code units with a lowercase letter, an uppercase letter, a digit, and
//!   one of [`PASSWORD_SPECIAL_CHARS`]
//!
//! Every rule is checked independently and every failure is reported, so the
//! operator sees all problems at once.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::user::{User, UserPayload};

/// Minimum password length, counted in UTF-16 code units.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Characters that satisfy the special-character rule.
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*";

const EMAIL_PATTERN: &str =
    r#"^[^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*@([A-Za-z0-9-]+\.)+[A-Za-z]{2,}$"#;

fn email_regex() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).ok()).as_ref()
}

/// Form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// The name input.
    Name,
    /// The email input.
    Email,
    /// The password input.
    Password,
}

impl FormField {
    /// Field key as used in payloads and backend error details.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One unmet validation rule, shown inline next to its field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field the message belongs to.
    pub field: FormField,
    /// Operator-facing message.
    pub message: String,
}

impl FieldError {
    /// Construct an error for `field`.
    #[must_use]
    pub fn new(field: FormField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Values typed into the create/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    /// Name input.
    pub name: String,
    /// Email input.
    pub email: String,
    /// Password input.
    pub password: String,
}

impl UserForm {
    /// Form pre-filled with the given values.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Form pre-populated from an existing user, for edit mode.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self::new(
            user.name.clone(),
            user.email.clone(),
            user.password.clone(),
        )
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Validate the form and produce the request payload.
    ///
    /// # Errors
    /// Returns every unmet rule, in field order, when any rule fails.
    ///
    /// # Examples
    /// ```
    /// use admin_panel::UserForm;
    ///
    /// let payload = UserForm::new("Ann", "ann@x.com", "Valid1Pass!")
    ///     .validate()
    ///     .expect("all rules pass");
    /// assert_eq!(payload.name, "Ann");
    /// ```
    pub fn validate(&self) -> Result<UserPayload, Vec<FieldError>> {
        let mut errors = Vec::new();
        check_name(&self.name, &mut errors);
        check_email(&self.email, &mut errors);
        check_password(&self.password, &mut errors);
        if errors.is_empty() {
            Ok(UserPayload {
                name: self.name.clone(),
                email: self.email.clone(),
                password: self.password.clone(),
            })
        } else {
            Err(errors)
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn check_name(name: &str, errors: &mut Vec<FieldError>) {
    if is_blank(name) {
        errors.push(FieldError::new(FormField::Name, "Name is required"));
    }
}

fn check_email(email: &str, errors: &mut Vec<FieldError>) {
    if is_blank(email) {
        errors.push(FieldError::new(FormField::Email, "Email is required"));
        return;
    }
    let valid = email_regex().is_some_and(|regex| regex.is_match(email));
    if !valid {
        errors.push(FieldError::new(
            FormField::Email,
            "Email is not a valid email",
        ));
    }
}

fn check_password(password: &str, errors: &mut Vec<FieldError>) {
    if password.is_empty() {
        errors.push(FieldError::new(FormField::Password, "Password is required"));
        return;
    }
    let rules: [(bool, &str); 5] = [
        (
            password.encode_utf16().count() >= PASSWORD_MIN_LENGTH,
            "Password must be at least 8 characters",
        ),
        (
            password.chars().any(|c| c.is_ascii_lowercase()),
            "Password must contain at least one lowercase letter",
        ),
        (
            password.chars().any(|c| c.is_ascii_uppercase()),
            "Password must contain at least one uppercase letter",
        ),
        (
            password.chars().any(|c| c.is_ascii_digit()),
            "Password must contain at least one number",
        ),
        (
            password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c)),
            "Password must contain at least one special character",
        ),
    ];
    errors.extend(
        rules
            .into_iter()
            .filter(|(met, _)| !met)
            .map(|(_, message)| FieldError::new(FormField::Password, message)),
    );
}
