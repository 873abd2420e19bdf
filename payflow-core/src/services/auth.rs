//! Auth operations: login, signup, forgot password, OTP verification

use std::sync::Arc;

use serde_json::Value as JsonValue;

use crate::domain::result::OperationOutcome;
use crate::domain::{Credentials, ForgotPasswordRequest, Session, SignupRequest, VerifyOtpRequest};
use crate::registry::OperationId;
use crate::services::Dispatcher;

pub struct AuthService {
    dispatcher: Arc<Dispatcher>,
}

impl AuthService {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Log in with email and password
    ///
    /// A rejected login surfaces its message through the notification sink;
    /// the returned outcome carries the session (token included) when
    /// fulfilled.
    pub fn login(&self, credentials: &Credentials) -> OperationOutcome<Session> {
        self.post(OperationId::LoginUser, credentials)
            .map(|body| serde_json::from_value(body).unwrap_or_default())
    }

    /// Submit a signup request
    ///
    /// Pass-through by design: client-side validation lives in
    /// `SignupForm`, which gates what gets here.
    pub fn signup(&self, request: &SignupRequest) -> OperationOutcome<JsonValue> {
        self.post(OperationId::Signup, request)
    }

    /// Request a password reset email
    pub fn forgot_password(&self, email: &str) -> OperationOutcome<JsonValue> {
        self.post(
            OperationId::ForgotPassword,
            &ForgotPasswordRequest {
                email: email.to_string(),
            },
        )
    }

    /// Verify a one-time password
    pub fn verify_otp(&self, otp: &str) -> OperationOutcome<JsonValue> {
        self.post(
            OperationId::VerifyOtp,
            &VerifyOtpRequest {
                otp: otp.to_string(),
            },
        )
    }

    fn post<T: serde::Serialize>(
        &self,
        operation: OperationId,
        body: &T,
    ) -> OperationOutcome<JsonValue> {
        match serde_json::to_value(body) {
            Ok(body) => self.dispatcher.dispatch(operation, &[], Some(body)),
            Err(e) => OperationOutcome::rejected(e.to_string()),
        }
    }
}
