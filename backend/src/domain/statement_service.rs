//! Statement of accounts service: lookups and payment processing.
//!
//! `process_payment` never returns an error. Validation failures, unknown
//! students and storage failures all come back as a `PaymentResult` with
//! `success == false` and a message for the user. A rejected payment leaves the
//! statement untouched.

use anyhow::Result;
use chrono::Utc;
use log::{error, info, warn};
use rust_decimal::Decimal;
use shared::{PaymentConfig, PaymentRequest, PaymentResult, StatementSummary, StatementTableConfig};
use std::sync::Arc;

use crate::domain::commands::payments::ProcessPaymentCommand;
use crate::domain::models::statement::{AccountStatement, PaymentTransaction};
use crate::domain::payment_validation::PaymentValidationService;
use crate::domain::statement_table::StatementTableService;
use crate::storage::{Connection, StatementStorage};

/// Service responsible for statement lookups and recording payments
#[derive(Clone)]
pub struct StatementService<C: Connection> {
    statement_repository: C::StatementRepository,
    validation_service: PaymentValidationService,
    table_service: StatementTableService,
}

impl<C: Connection> StatementService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        Self::with_config(connection, PaymentConfig::default())
    }

    pub fn with_config(connection: Arc<C>, config: PaymentConfig) -> Self {
        let statement_repository = connection.create_statement_repository();
        Self {
            statement_repository,
            validation_service: PaymentValidationService::with_config(config),
            table_service: StatementTableService::new(),
        }
    }

    /// Use `config` for the amounts and dates in statement summaries
    pub fn with_table_config(mut self, config: StatementTableConfig) -> Self {
        self.table_service = StatementTableService::with_config(config);
        self
    }

    /// Snapshot of a student's statement; `None` for an unknown student
    pub fn get_statement(&self, student_id: &str) -> Result<Option<AccountStatement>> {
        self.statement_repository.get_statement(student_id)
    }

    /// Formatted statement for the statement screen; `None` for an unknown student
    pub fn get_statement_summary(&self, student_id: &str) -> Result<Option<StatementSummary>> {
        Ok(self
            .get_statement(student_id)?
            .map(|statement| self.table_service.build_summary(&statement)))
    }

    /// Current balance; `None` for an unknown student
    pub fn get_balance(&self, student_id: &str) -> Result<Option<Decimal>> {
        Ok(self.get_statement(student_id)?.map(|s| s.get_balance()))
    }

    /// Register a new statement
    pub fn open_statement(&self, statement: AccountStatement) -> Result<()> {
        self.statement_repository.store_statement(statement)
    }

    pub fn list_student_ids(&self) -> Result<Vec<String>> {
        self.statement_repository.list_student_ids()
    }

    pub fn supported_channels(&self) -> &[String] {
        &self.validation_service.get_config().supported_channels
    }

    /// Convenience wrapper taking the payment form DTO
    pub fn process_payment_request(&self, request: PaymentRequest) -> PaymentResult {
        self.process_payment(request.into())
    }

    /// Validate and record a payment
    pub fn process_payment(&self, command: ProcessPaymentCommand) -> PaymentResult {
        info!(
            "Processing payment for student {} via {:?}: {:?}",
            command.student_id, command.channel, command.amount_input
        );

        let amount = match self.validation_service.validate_amount(&command.amount_input) {
            Ok(amount) => amount,
            Err(e) => {
                warn!("Rejected payment for student {}: {}", command.student_id, e);
                return PaymentResult::failure(e.to_string());
            }
        };

        let channel = match self.validation_service.validate_channel(&command.channel) {
            Ok(channel) => channel,
            Err(e) => {
                warn!("Rejected payment for student {}: {}", command.student_id, e);
                return PaymentResult::failure(e.to_string());
            }
        };

        let now = Utc::now();
        let reference = match command.reference.as_deref().map(str::trim) {
            Some(reference) if !reference.is_empty() => reference.to_string(),
            _ => PaymentTransaction::generate_reference(now.timestamp_millis()),
        };

        let payment = PaymentTransaction {
            date: now,
            amount,
            reference: reference.clone(),
            channel: channel.clone(),
        };

        let outcome = self.statement_repository.update_statement(&command.student_id, |statement| {
            statement.record_payment(payment);
            statement.get_balance()
        });

        match outcome {
            Ok(Some(remaining_balance)) => {
                info!(
                    "Recorded payment {} of {} for student {}, remaining balance {}",
                    reference, amount, command.student_id, remaining_balance
                );
                let message = format!(
                    "Payment of {} via {} received. Reference: {}. Remaining balance: {}",
                    self.validation_service.format_amount(amount),
                    channel,
                    reference,
                    self.validation_service.format_amount(remaining_balance)
                );
                PaymentResult::success(message, reference)
            }
            Ok(None) => {
                warn!("Payment submitted for unknown student {}", command.student_id);
                PaymentResult::failure(format!(
                    "No statement of accounts found for student {}",
                    command.student_id
                ))
            }
            Err(e) => {
                error!("Failed to record payment for student {}: {}", command.student_id, e);
                PaymentResult::failure(format!("Payment could not be recorded: {}", e))
            }
        }
    }
}
