use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Exam period a due amount and paid status belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExamPeriod {
    Prelim,
    Midterm,
    Final,
}

impl ExamPeriod {
    /// All periods in allocation order (payments settle PRELIM first)
    pub const ALL: [ExamPeriod; 3] = [ExamPeriod::Prelim, ExamPeriod::Midterm, ExamPeriod::Final];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExamPeriod::Prelim => "PRELIM",
            ExamPeriod::Midterm => "MIDTERM",
            ExamPeriod::Final => "FINAL",
        }
    }

    /// Title-case label used in tables
    pub fn label(&self) -> &'static str {
        match self {
            ExamPeriod::Prelim => "Prelim",
            ExamPeriod::Midterm => "Midterm",
            ExamPeriod::Final => "Final",
        }
    }
}

impl fmt::Display for ExamPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Paid state of a single exam period. There is no transition back to `Unpaid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Unpaid,
    Paid,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "UNPAID",
            PaymentStatus::Paid => "PAID",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw input from the payment form. The amount stays text until the backend validates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub student_id: String,
    /// Amount as typed, e.g. "5,000.00" or "₱500"
    pub amount: String,
    /// Payment channel name, e.g. "BDO" or "GCash"
    pub channel: String,
    /// Optional reference number; one is generated when blank
    pub reference: Option<String>,
}

/// Outcome of a payment submission, shown to the user as-is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentResult {
    pub success: bool,
    pub message: String,
    /// Reference of the recorded transaction (only set on success)
    pub reference: Option<String>,
}

impl PaymentResult {
    pub fn success(message: String, reference: String) -> Self {
        Self {
            success: true,
            message,
            reference: Some(reference),
        }
    }

    pub fn failure(message: String) -> Self {
        Self {
            success: false,
            message,
            reference: None,
        }
    }
}

/// Selector value that disables the publication type filter
pub const ALL_PUBLICATION_TYPES: &str = "All";

/// Raw input from the advanced search form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvancedSearchRequest {
    pub title: String,
    pub author: String,
    pub journal: String,
    /// Lower year bound as typed; blank or unparsable means no bound
    pub year_from: String,
    /// Upper year bound as typed; blank or unparsable means no bound
    pub year_to: String,
    /// Publication type label, or "All"
    pub publication_type: String,
}

impl Default for AdvancedSearchRequest {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            journal: String::new(),
            year_from: String::new(),
            year_to: String::new(),
            publication_type: ALL_PUBLICATION_TYPES.to_string(),
        }
    }
}

/// One row of the search results table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleResultRow {
    pub title: String,
    pub authors: String,
    pub journal_name: String,
    pub publication_type: String,
    pub year: String,
    /// Keywords joined with ", "
    pub keywords: String,
}

/// One fee line formatted for the statement table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedFeeLine {
    pub description: String,
    pub formatted_date: String,
    pub formatted_amount: String,
    pub raw_amount: Decimal,
}

/// One payment formatted for the payment history table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedPayment {
    pub formatted_date: String,
    pub reference: String,
    pub channel: String,
    pub formatted_amount: String,
    pub raw_amount: Decimal,
}

/// Due amount and status of one exam period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedPeriodDue {
    pub period: ExamPeriod,
    pub formatted_due: String,
    /// `None` when no due is configured for the period
    pub status: Option<PaymentStatus>,
}

/// Everything the statement-of-accounts screen displays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementSummary {
    pub student_id: String,
    pub fee_lines: Vec<FormattedFeeLine>,
    pub period_dues: Vec<FormattedPeriodDue>,
    pub payments: Vec<FormattedPayment>,
    pub formatted_total_fees: String,
    pub formatted_total_payments: String,
    pub formatted_balance: String,
}

/// Date formatting options for statement tables
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DateFormat {
    MonthDayYear, // "June 13, 2025"
    ShortDate,    // "06/13/2025"
    Iso,          // "2025-06-13"
}

/// Display settings for statement tables and the print preview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatementTableConfig {
    pub currency_symbol: String,
    pub date_format: DateFormat,
}

impl Default for StatementTableConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₱".to_string(),
            date_format: DateFormat::MonthDayYear,
        }
    }
}

/// Limits and channels accepted by the payment form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentConfig {
    pub currency_symbol: String,
    pub min_amount: Decimal,
    pub max_amount: Decimal,
    pub supported_channels: Vec<String>,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₱".to_string(),
            min_amount: Decimal::new(1, 2),
            max_amount: Decimal::new(1_000_000, 0),
            supported_channels: vec![
                "BDO".to_string(),
                "BPI".to_string(),
                "Metrobank".to_string(),
                "GCash".to_string(),
                "PayMaya".to_string(),
                "Over the Counter".to_string(),
            ],
        }
    }
}

/// Portal-wide configuration. Missing sections fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub payment: PaymentConfig,
    pub statement_table: StatementTableConfig,
}

impl PortalConfig {
    /// Parse a JSON config document
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Which part of the search panel is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SearchView {
    #[default]
    SearchForm,
    ResultsView,
}

/// View state of the article search panel, independent of the search data itself
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchPanelState {
    pub view: SearchView,
    /// e.g. "3 of 8 articles match \"tourism\"", set while results are shown
    pub result_summary: Option<String>,
    pub result_count: usize,
}

impl SearchPanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to the results view after a search completes
    pub fn show_results(&mut self, result_count: usize, summary: String) {
        self.view = SearchView::ResultsView;
        self.result_count = result_count;
        self.result_summary = Some(summary);
    }

    /// Return to the search form and drop the previous results summary
    pub fn back_to_search(&mut self) {
        self.view = SearchView::SearchForm;
        self.result_count = 0;
        self.result_summary = None;
    }

    pub fn is_showing_results(&self) -> bool {
        self.view == SearchView::ResultsView
    }
}
