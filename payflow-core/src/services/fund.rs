//! Fund deposit operation

use std::sync::Arc;

use serde_json::Value as JsonValue;

use crate::domain::result::OperationOutcome;
use crate::domain::FundRequest;
use crate::registry::OperationId;
use crate::services::Dispatcher;

pub struct FundService {
    dispatcher: Arc<Dispatcher>,
}

impl FundService {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Submit a fund deposit
    ///
    /// The only operation with a success notification: a fulfilled call
    /// emits "Funding request submitted successfully" through the sink,
    /// a rejected one emits the normalized error. Exactly one of the two
    /// fires per call.
    pub fn add_fund(&self, request: &FundRequest) -> OperationOutcome<JsonValue> {
        match serde_json::to_value(request) {
            Ok(body) => self
                .dispatcher
                .dispatch(OperationId::AddFund, &[], Some(body)),
            Err(e) => OperationOutcome::rejected(e.to_string()),
        }
    }
}
