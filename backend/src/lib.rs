//! # Student Portal Backend
//!
//! Non-UI logic for the student portal: the journal article search and the
//! statement of accounts with its payment form.
//!
//! - **Domain**: search filters, statement ledger, payment validation, table formatting
//! - **Storage**: in-memory catalogue and statements behind storage traits
//!
//! Presentation code builds a [`Backend`] once and calls its services; nothing
//! is looked up through globals.

use shared::PortalConfig;
use std::sync::Arc;

pub mod domain;
pub mod storage;

pub use storage::MemoryConnection;

/// Main backend struct that owns all services
#[derive(Clone)]
pub struct Backend {
    pub article_search_service: domain::ArticleSearchService<MemoryConnection>,
    pub statement_service: domain::StatementService<MemoryConnection>,
    pub statement_table_service: domain::StatementTableService,
}

impl Backend {
    /// Backend over the sample data with default configuration
    pub fn new() -> Self {
        Self::with_config(PortalConfig::default())
    }

    /// Backend over the sample data with the given configuration
    pub fn with_config(config: PortalConfig) -> Self {
        Self::with_connection(Arc::new(MemoryConnection::with_sample_data()), config)
    }

    /// Backend over an existing connection
    pub fn with_connection(connection: Arc<MemoryConnection>, config: PortalConfig) -> Self {
        let article_search_service = domain::ArticleSearchService::new(connection.clone());
        let statement_service = domain::StatementService::with_config(connection, config.payment)
            .with_table_config(config.statement_table.clone());
        let statement_table_service = domain::StatementTableService::with_config(config.statement_table);

        Self {
            article_search_service,
            statement_service,
            statement_table_service,
        }
    }
}

impl Default for Backend {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::sample_data::{SAMPLE_STUDENT_ID, SAMPLE_TRANSFEREE_ID};
    use shared::{PaymentRequest, SearchPanelState, SearchView};

    #[test]
    fn test_backend_wires_sample_data() {
        let backend = Backend::new();

        assert_eq!(backend.article_search_service.search("").unwrap().searched_count, 8);
        assert_eq!(
            backend.statement_service.list_student_ids().unwrap(),
            vec![SAMPLE_STUDENT_ID, SAMPLE_TRANSFEREE_ID]
        );
    }

    #[test]
    fn test_search_then_back_to_form() {
        let backend = Backend::new();
        let mut panel = SearchPanelState::new();

        let result = backend.article_search_service.search("covid").unwrap();
        panel.show_results(result.articles.len(), result.summary("\"covid\""));
        assert_eq!(panel.view, SearchView::ResultsView);
        assert_eq!(panel.result_summary.as_deref(), Some("1 of 8 articles matches \"covid\""));

        panel.back_to_search();
        assert_eq!(panel.view, SearchView::SearchForm);
    }

    #[test]
    fn test_payment_shows_in_print_preview() {
        let backend = Backend::new();
        let result = backend.statement_service.process_payment_request(PaymentRequest {
            student_id: SAMPLE_TRANSFEREE_ID.to_string(),
            amount: "750".to_string(),
            channel: "GCash".to_string(),
            reference: Some("GC-2024-0001".to_string()),
        });
        assert!(result.success);

        let statement = backend
            .statement_service
            .get_statement(SAMPLE_TRANSFEREE_ID)
            .unwrap()
            .unwrap();
        let preview = backend.statement_table_service.render_print_preview(&statement);
        assert!(preview.contains("GC-2024-0001"));
        assert!(preview.lines().any(|l| l.starts_with("BALANCE") && l.ends_with("₱6000.00")));
    }

    #[test]
    fn test_config_flows_into_services() {
        let config = PortalConfig::from_json_str(
            r#"{ "payment": { "supported_channels": ["Cashier"] },
                 "statement_table": { "currency_symbol": "PHP " } }"#,
        )
        .unwrap();
        let backend = Backend::with_config(config);

        assert_eq!(backend.statement_service.supported_channels(), &["Cashier".to_string()]);
        assert_eq!(
            backend.statement_table_service.format_amount(rust_decimal::Decimal::ONE),
            "PHP 1.00"
        );
        let summary = backend
            .statement_service
            .get_statement_summary(SAMPLE_TRANSFEREE_ID)
            .unwrap()
            .unwrap();
        assert_eq!(summary.formatted_balance, "PHP 6750.00");
    }
}
