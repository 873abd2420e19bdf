//! Core domain entities
//!
//! Transient request/response DTOs and the validation schema. These are
//! pure data structures - no I/O or external dependencies.

mod fund;
mod transaction;
mod user;
pub mod result;
pub mod validation;

pub use fund::FundRequest;
pub use transaction::{transactions_from_body, Balance, Transaction};
pub use user::{Credentials, ForgotPasswordRequest, Session, SignupRequest, VerifyOtpRequest};
pub use validation::{validate_signup, FieldError, FormState, SignupField, SignupForm};
