/// Test utilities for building connections with known statements.
use rust_decimal::Decimal;
use shared::ExamPeriod;
use std::sync::Arc;

use super::connection::MemoryConnection;
use crate::domain::models::statement::{AccountStatement, FeeBreakdown};
use crate::storage::traits::StatementStorage;
use crate::storage::Connection;

/// Test helper that owns a connection and can register statements on it
pub struct TestHelper {
    pub connection: Arc<MemoryConnection>,
}

impl TestHelper {
    /// Helper over an empty catalogue
    pub fn new() -> Self {
        Self {
            connection: Arc::new(MemoryConnection::empty()),
        }
    }

    /// Helper over the sample catalogue and statements
    pub fn with_sample_data() -> Self {
        Self {
            connection: Arc::new(MemoryConnection::with_sample_data()),
        }
    }

    /// Register a statement with one fee line of `balance` and a PRELIM due
    pub fn add_prelim_statement(&self, student_id: &str, prelim_due: Decimal, balance: Decimal) -> AccountStatement {
        let statement = AccountStatement::new(student_id)
            .with_fee(FeeBreakdown::new("Tuition Fee", balance, None))
            .with_period_due(ExamPeriod::Prelim, prelim_due);
        self.connection
            .create_statement_repository()
            .store_statement(statement.clone())
            .expect("Failed to store test statement");
        statement
    }
}
