//! Statement table domain logic for the statement of accounts screen.
//!
//! Turns an `AccountStatement` into the formatted rows the statement screen
//! displays, and into the fixed-width text shown in the print preview panel.
//!
//! ## Key Responsibilities
//!
//! - **Row Formatting**: fee lines, exam-period dues with status, payment history
//! - **Amount Formatting**: configurable currency symbol, two decimal places
//! - **Date Formatting**: ISO, short or long dates
//! - **Print Preview**: plain-text rendering of the whole statement

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use shared::{
    DateFormat, ExamPeriod, FormattedFeeLine, FormattedPayment, FormattedPeriodDue,
    StatementSummary, StatementTableConfig,
};
use log::warn;
use std::fmt::{self, Write};

use crate::domain::models::statement::{AccountStatement, FeeBreakdown, PaymentTransaction};

const PREVIEW_WIDTH: usize = 72;
/// Cell text for an unposted date or a period with no due
const BLANK_CELL: &str = "-";

/// Statement table service that handles all statement display logic
#[derive(Clone)]
pub struct StatementTableService {
    config: StatementTableConfig,
}

impl StatementTableService {
    pub fn new() -> Self {
        Self {
            config: StatementTableConfig::default(),
        }
    }

    pub fn with_config(config: StatementTableConfig) -> Self {
        Self { config }
    }

    pub fn format_amount(&self, amount: Decimal) -> String {
        format!("{}{:.2}", self.config.currency_symbol, amount)
    }

    pub fn format_date(&self, date: NaiveDate) -> String {
        match self.config.date_format {
            DateFormat::MonthDayYear => date.format("%B %-d, %Y").to_string(),
            DateFormat::ShortDate => date.format("%m/%d/%Y").to_string(),
            DateFormat::Iso => date.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn format_timestamp(&self, timestamp: DateTime<Utc>) -> String {
        self.format_date(timestamp.date_naive())
    }

    pub fn format_fee_line(&self, fee: &FeeBreakdown) -> FormattedFeeLine {
        FormattedFeeLine {
            description: fee.description.clone(),
            formatted_date: fee
                .date_posted
                .map(|d| self.format_date(d))
                .unwrap_or_else(|| BLANK_CELL.to_string()),
            formatted_amount: self.format_amount(fee.amount),
            raw_amount: fee.amount,
        }
    }

    pub fn format_fee_lines(&self, statement: &AccountStatement) -> Vec<FormattedFeeLine> {
        statement
            .get_fee_breakdowns()
            .iter()
            .map(|fee| self.format_fee_line(fee))
            .collect()
    }

    pub fn format_payment(&self, payment: &PaymentTransaction) -> FormattedPayment {
        FormattedPayment {
            formatted_date: self.format_timestamp(payment.date),
            reference: payment.reference.clone(),
            channel: payment.channel.clone(),
            formatted_amount: self.format_amount(payment.amount),
            raw_amount: payment.amount,
        }
    }

    pub fn format_payments(&self, statement: &AccountStatement) -> Vec<FormattedPayment> {
        statement
            .get_payment_history()
            .iter()
            .map(|payment| self.format_payment(payment))
            .collect()
    }

    pub fn format_period_dues(&self, statement: &AccountStatement) -> Vec<FormattedPeriodDue> {
        ExamPeriod::ALL
            .iter()
            .map(|&period| FormattedPeriodDue {
                period,
                formatted_due: self.format_amount(statement.get_exam_period_due(period)),
                status: statement
                    .has_period_due(period)
                    .then(|| statement.period_status(period)),
            })
            .collect()
    }

    pub fn build_summary(&self, statement: &AccountStatement) -> StatementSummary {
        StatementSummary {
            student_id: statement.student_id().to_string(),
            fee_lines: self.format_fee_lines(statement),
            period_dues: self.format_period_dues(statement),
            payments: self.format_payments(statement),
            formatted_total_fees: self.format_amount(statement.total_fees()),
            formatted_total_payments: self.format_amount(statement.total_payments()),
            formatted_balance: self.format_amount(statement.get_balance()),
        }
    }

    /// Plain-text statement for the print preview panel
    pub fn render_print_preview(&self, statement: &AccountStatement) -> String {
        let summary = self.build_summary(statement);
        let mut out = String::new();
        if let Err(e) = self.write_preview(&mut out, &summary) {
            warn!("Print preview for {} is incomplete: {}", summary.student_id, e);
        }
        out
    }

    fn write_preview(&self, out: &mut String, summary: &StatementSummary) -> fmt::Result {
        let rule = "=".repeat(PREVIEW_WIDTH);
        let thin_rule = "-".repeat(PREVIEW_WIDTH);

        writeln!(out, "{}", rule)?;
        writeln!(out, "{:^width$}", "STATEMENT OF ACCOUNTS", width = PREVIEW_WIDTH)?;
        writeln!(out, "{}", rule)?;
        writeln!(out, "Student ID: {}", summary.student_id)?;
        writeln!(out)?;

        writeln!(out, "FEE BREAKDOWN")?;
        writeln!(out, "{:<40} {:<16} {:>14}", "Description", "Date Posted", "Amount")?;
        writeln!(out, "{}", thin_rule)?;
        if summary.fee_lines.is_empty() {
            writeln!(out, "No fees recorded")?;
        }
        for line in &summary.fee_lines {
            writeln!(
                out,
                "{:<40.40} {:<16} {:>14}",
                line.description, line.formatted_date, line.formatted_amount
            )?;
        }
        writeln!(out, "{:<57} {:>14}", "Total Fees", summary.formatted_total_fees)?;
        writeln!(out)?;

        writeln!(out, "EXAM PERIOD DUES")?;
        writeln!(out, "{:<20} {:>14}   {:<10}", "Period", "Amount Due", "Status")?;
        writeln!(out, "{}", thin_rule)?;
        for due in &summary.period_dues {
            writeln!(
                out,
                "{:<20} {:>14}   {:<10}",
                due.period.label(),
                due.formatted_due,
                due.status.map_or(BLANK_CELL, |status| status.as_str())
            )?;
        }
        writeln!(out)?;

        writeln!(out, "PAYMENT HISTORY")?;
        writeln!(out, "{:<20} {:<22} {:<14} {:>14}", "Date", "Reference", "Channel", "Amount")?;
        writeln!(out, "{}", thin_rule)?;
        if summary.payments.is_empty() {
            writeln!(out, "No payments recorded")?;
        }
        for payment in &summary.payments {
            writeln!(
                out,
                "{:<20} {:<22.22} {:<14.14} {:>14}",
                payment.formatted_date, payment.reference, payment.channel, payment.formatted_amount
            )?;
        }
        writeln!(out, "{:<57} {:>14}", "Total Payments", summary.formatted_total_payments)?;
        writeln!(out, "{}", rule)?;
        writeln!(out, "{:<57} {:>14}", "BALANCE", summary.formatted_balance)?;
        writeln!(out, "{}", rule)
    }
}

impl Default for StatementTableService {
    fn default() -> Self {
        Self::new()
    }
}
