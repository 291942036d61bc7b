//! Domain model for a student's statement of accounts.
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::{ExamPeriod, PaymentStatus};
use std::collections::BTreeMap;

/// One debit line of the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    pub description: String,
    pub amount: Decimal,
    pub date_posted: Option<NaiveDate>,
}

impl FeeBreakdown {
    pub fn new(description: &str, amount: Decimal, date_posted: Option<NaiveDate>) -> Self {
        Self {
            description: description.to_string(),
            amount,
            date_posted,
        }
    }
}

/// One credit line of the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentTransaction {
    pub date: DateTime<Utc>,
    pub amount: Decimal,
    pub reference: String,
    pub channel: String,
}

impl PaymentTransaction {
    /// Generate a payment reference.
    /// Format: PAY-<timestamp_ms>-<random_suffix>
    /// Example: PAY-1718000000123-9f2c
    pub fn generate_reference(timestamp_ms: i64) -> String {
        let suffix: String = uuid::Uuid::new_v4().simple().to_string().chars().take(4).collect();
        format!("PAY-{}-{}", timestamp_ms, suffix)
    }
}

/// Fees, payments and exam-period dues of one student.
///
/// Fees and dues are fixed when the statement is built; afterwards the only
/// mutation is appending a payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountStatement {
    student_id: String,
    fee_breakdowns: Vec<FeeBreakdown>,
    payments: Vec<PaymentTransaction>,
    period_dues: BTreeMap<ExamPeriod, Decimal>,
}

impl AccountStatement {
    pub fn new(student_id: &str) -> Self {
        Self {
            student_id: student_id.to_string(),
            fee_breakdowns: Vec::new(),
            payments: Vec::new(),
            period_dues: BTreeMap::new(),
        }
    }

    pub fn with_fee(mut self, fee: FeeBreakdown) -> Self {
        self.fee_breakdowns.push(fee);
        self
    }

    pub fn with_period_due(mut self, period: ExamPeriod, amount: Decimal) -> Self {
        self.period_dues.insert(period, amount);
        self
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    /// Configured due for the period, zero if none was set
    pub fn get_exam_period_due(&self, period: ExamPeriod) -> Decimal {
        self.period_dues.get(&period).copied().unwrap_or(Decimal::ZERO)
    }

    /// Whether a non-zero due was configured for the period
    pub fn has_period_due(&self, period: ExamPeriod) -> bool {
        self.get_exam_period_due(period) > Decimal::ZERO
    }

    /// Portion of all payments made so far that settles `period`.
    /// Payments fill PRELIM first, then MIDTERM, then FINAL.
    pub fn allocated_to(&self, period: ExamPeriod) -> Decimal {
        let mut remaining = self.total_payments();
        for current in ExamPeriod::ALL {
            let allocated = remaining.min(self.get_exam_period_due(current));
            if current == period {
                return allocated;
            }
            remaining -= allocated;
        }
        Decimal::ZERO
    }

    pub fn is_period_paid(&self, period: ExamPeriod) -> bool {
        self.allocated_to(period) >= self.get_exam_period_due(period)
    }

    pub fn is_prelim_paid(&self) -> bool {
        self.is_period_paid(ExamPeriod::Prelim)
    }

    pub fn period_status(&self, period: ExamPeriod) -> PaymentStatus {
        if self.is_period_paid(period) {
            PaymentStatus::Paid
        } else {
            PaymentStatus::Unpaid
        }
    }

    pub fn total_fees(&self) -> Decimal {
        self.fee_breakdowns.iter().map(|f| f.amount).sum()
    }

    pub fn total_payments(&self) -> Decimal {
        self.payments.iter().map(|p| p.amount).sum()
    }

    /// Fees minus payments, clamped at zero when overpaid
    pub fn get_balance(&self) -> Decimal {
        (self.total_fees() - self.total_payments()).max(Decimal::ZERO)
    }

    pub fn get_fee_breakdowns(&self) -> &[FeeBreakdown] {
        &self.fee_breakdowns
    }

    pub fn get_payment_history(&self) -> &[PaymentTransaction] {
        &self.payments
    }

    /// Append an already validated payment
    pub(crate) fn record_payment(&mut self, payment: PaymentTransaction) {
        self.payments.push(payment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn payment(amount: Decimal, reference: &str) -> PaymentTransaction {
        PaymentTransaction {
            date: Utc::now(),
            amount,
            reference: reference.to_string(),
            channel: "BDO".to_string(),
        }
    }

    fn term_statement() -> AccountStatement {
        AccountStatement::new("2021-00123")
            .with_fee(FeeBreakdown::new("Tuition Fee", dec!(12000.00), None))
            .with_fee(FeeBreakdown::new("Miscellaneous Fee", dec!(3000.00), None))
            .with_period_due(ExamPeriod::Prelim, dec!(5000.00))
            .with_period_due(ExamPeriod::Midterm, dec!(5000.00))
            .with_period_due(ExamPeriod::Final, dec!(5000.00))
    }

    #[test]
    fn test_has_period_due() {
        let statement = AccountStatement::new("2023-00456")
            .with_period_due(ExamPeriod::Prelim, dec!(2000))
            .with_period_due(ExamPeriod::Midterm, Decimal::ZERO);

        assert!(statement.has_period_due(ExamPeriod::Prelim));
        assert!(!statement.has_period_due(ExamPeriod::Midterm));
        assert!(!statement.has_period_due(ExamPeriod::Final));
        assert!(term_statement().has_period_due(ExamPeriod::Final));
    }

    #[test]
    fn test_unconfigured_period_due_is_zero() {
        let statement = AccountStatement::new("x").with_period_due(ExamPeriod::Prelim, dec!(100));
        assert_eq!(statement.get_exam_period_due(ExamPeriod::Midterm), Decimal::ZERO);
        assert_eq!(statement.get_exam_period_due(ExamPeriod::Prelim), dec!(100));
    }

    #[test]
    fn test_balance_is_fees_minus_payments() {
        let mut statement = term_statement();
        assert_eq!(statement.get_balance(), dec!(15000.00));

        statement.record_payment(payment(dec!(2500.50), "A"));
        assert_eq!(statement.get_balance(), dec!(12499.50));
        assert_eq!(statement.total_payments(), dec!(2500.50));
    }

    #[test]
    fn test_balance_clamps_at_zero() {
        let mut statement = term_statement();
        statement.record_payment(payment(dec!(20000), "A"));
        assert_eq!(statement.get_balance(), Decimal::ZERO);
    }

    #[test]
    fn test_payments_settle_periods_in_order() {
        let mut statement = term_statement();
        assert_eq!(statement.period_status(ExamPeriod::Prelim), PaymentStatus::Unpaid);

        statement.record_payment(payment(dec!(7000), "A"));
        assert!(statement.is_prelim_paid());
        assert_eq!(statement.allocated_to(ExamPeriod::Midterm), dec!(2000));
        assert!(!statement.is_period_paid(ExamPeriod::Midterm));
        assert_eq!(statement.allocated_to(ExamPeriod::Final), Decimal::ZERO);

        statement.record_payment(payment(dec!(3000), "B"));
        assert_eq!(statement.period_status(ExamPeriod::Midterm), PaymentStatus::Paid);
        assert_eq!(statement.period_status(ExamPeriod::Final), PaymentStatus::Unpaid);
    }

    #[test]
    fn test_partial_prelim_payment_stays_unpaid() {
        let mut statement = term_statement();
        statement.record_payment(payment(dec!(4999.99), "A"));
        assert!(!statement.is_prelim_paid());
    }

    #[test]
    fn test_history_keeps_insertion_order() {
        let mut statement = term_statement();
        statement.record_payment(payment(dec!(1), "first"));
        statement.record_payment(payment(dec!(2), "second"));

        let references: Vec<&str> = statement
            .get_payment_history()
            .iter()
            .map(|p| p.reference.as_str())
            .collect();
        assert_eq!(references, vec!["first", "second"]);
        assert_eq!(statement.get_fee_breakdowns()[0].description, "Tuition Fee");
    }

    #[test]
    fn test_generate_reference_format() {
        let reference = PaymentTransaction::generate_reference(1_718_000_000_123);
        let parts: Vec<&str> = reference.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "PAY");
        assert_eq!(parts[1], "1718000000123");
        assert_eq!(parts[2].len(), 4);
    }
}
