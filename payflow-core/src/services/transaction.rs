//! Transaction and balance lookups
//!
//! The three cached queries. All of them tag their results "Users", so an
//! invalidation of that tag makes each eligible for refetch.

use std::sync::Arc;

use serde_json::Value as JsonValue;

use crate::domain::result::OperationOutcome;
use crate::domain::{transactions_from_body, Balance, Transaction};
use crate::registry::OperationId;
use crate::services::Dispatcher;

pub struct TransactionService {
    dispatcher: Arc<Dispatcher>,
}

impl TransactionService {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Fetch all transactions for a user
    pub fn get_user_transactions(&self, user_id: &str) -> OperationOutcome<Vec<Transaction>> {
        self.dispatcher
            .dispatch(
                OperationId::GetUserTransactions,
                &[user_id.to_string()],
                None,
            )
            .map(|body| transactions_from_body(&body))
    }

    /// Fetch one transaction by user and transaction id
    pub fn get_transaction(&self, user_id: &str, tran_id: &str) -> OperationOutcome<JsonValue> {
        self.dispatcher.dispatch(
            OperationId::GetTransactionsUserId,
            &[user_id.to_string(), tran_id.to_string()],
            None,
        )
    }

    /// Fetch the wallet balance
    ///
    /// The route has no path parameter; the user id only scopes the cache
    /// key, matching the server contract.
    pub fn get_balance(&self, user_id: &str) -> OperationOutcome<Balance> {
        self.dispatcher
            .dispatch(OperationId::GetBalance, &[user_id.to_string()], None)
            .map(|body| serde_json::from_value(body).unwrap_or_default())
    }
}
