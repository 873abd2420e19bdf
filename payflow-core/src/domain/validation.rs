//! Signup form validation
//!
//! Declarative per-field rules gating submission: every field required,
//! email format-checked, password length bounded, confirmPassword matched
//! against password. Failures surface per field, next to the offending
//! input, never as a thrown error.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::user::SignupRequest;

pub const PASSWORD_MIN_LEN: usize = 5;
pub const PASSWORD_MAX_LEN: usize = 12;

/// Fields of the signup form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SignupField {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    Password,
    ConfirmPassword,
}

impl SignupField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignupField::FirstName => "firstName",
            SignupField::LastName => "lastName",
            SignupField::Email => "email",
            SignupField::PhoneNumber => "phoneNumber",
            SignupField::Password => "password",
            SignupField::ConfirmPassword => "confirmPassword",
        }
    }
}

/// A single per-field validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: SignupField,
    pub message: String,
}

impl FieldError {
    fn new(field: SignupField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Check an email address for plausible shape
///
/// Format check only: one `@` with non-empty, whitespace-free sides. No TLD
/// requirement, so `a@b` passes.
fn is_valid_email(email: &str) -> bool {
    let email_re = Regex::new(r"^[^@\s]+@[^@\s]+$").unwrap();
    email_re.is_match(email)
}

/// Validate signup data against the schema
///
/// Returns one error per violated field; an empty vec means the form may be
/// submitted.
pub fn validate_signup(data: &SignupRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if data.first_name.trim().is_empty() {
        errors.push(FieldError::new(
            SignupField::FirstName,
            "first name is a required field",
        ));
    }

    if data.last_name.trim().is_empty() {
        errors.push(FieldError::new(
            SignupField::LastName,
            "last name is a required field",
        ));
    }

    if data.email.trim().is_empty() {
        errors.push(FieldError::new(
            SignupField::Email,
            "email address is required",
        ));
    } else if !is_valid_email(&data.email) {
        errors.push(FieldError::new(
            SignupField::Email,
            "please provide a valid email address",
        ));
    }

    if data.phone_number.trim().is_empty() {
        errors.push(FieldError::new(
            SignupField::PhoneNumber,
            "phone number is a required field",
        ));
    }

    if data.password.is_empty() {
        errors.push(FieldError::new(
            SignupField::Password,
            "password is required",
        ));
    } else if data.password.chars().count() < PASSWORD_MIN_LEN {
        errors.push(FieldError::new(
            SignupField::Password,
            format!(
                "password should have a minimum length of {}",
                PASSWORD_MIN_LEN
            ),
        ));
    } else if data.password.chars().count() > PASSWORD_MAX_LEN {
        errors.push(FieldError::new(
            SignupField::Password,
            format!(
                "password should have a maximum length of {}",
                PASSWORD_MAX_LEN
            ),
        ));
    }

    if data.confirm_password.is_empty() {
        errors.push(FieldError::new(
            SignupField::ConfirmPassword,
            "confirm password is required",
        ));
    } else if data.confirm_password != data.password {
        errors.push(FieldError::new(
            SignupField::ConfirmPassword,
            "passwords do not match",
        ));
    }

    errors
}

/// Signup form state machine
///
/// `Untouched -> Validating -> Valid | Invalid(per-field errors)`.
/// `Validating` is observable only from inside a validate call; at rest the
/// form is untouched, valid, or invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Untouched,
    Validating,
    Valid,
    Invalid(Vec<FieldError>),
}

/// Client-side signup form
///
/// Validation and submission stay separate: `validate` only moves the state
/// machine, `submit` hands validated data to a caller-supplied handler and
/// refuses to run it while the form is invalid.
#[derive(Debug)]
pub struct SignupForm {
    state: FormState,
}

impl SignupForm {
    pub fn new() -> Self {
        Self {
            state: FormState::Untouched,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Run the schema over the data; returns whether submission is enabled
    pub fn validate(&mut self, data: &SignupRequest) -> bool {
        self.state = FormState::Validating;
        let errors = validate_signup(data);
        if errors.is_empty() {
            self.state = FormState::Valid;
            true
        } else {
            self.state = FormState::Invalid(errors);
            false
        }
    }

    /// Per-field errors from the last validation, empty unless invalid
    pub fn field_errors(&self) -> &[FieldError] {
        match &self.state {
            FormState::Invalid(errors) => errors,
            _ => &[],
        }
    }

    /// Validate and, if the data passes, hand it to the handler
    ///
    /// Returns `None` (leaving per-field errors readable) when validation
    /// blocks the submission.
    pub fn submit<T>(
        &mut self,
        data: SignupRequest,
        handler: impl FnOnce(SignupRequest) -> T,
    ) -> Option<T> {
        if self.validate(&data) {
            Some(handler(data))
        } else {
            None
        }
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}
