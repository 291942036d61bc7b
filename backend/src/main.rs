use log::{info, warn};
use shared::{AdvancedSearchRequest, PaymentRequest, SearchPanelState};
use student_portal_backend::domain::models::article::PublicationType;
use student_portal_backend::storage::memory::sample_data::SAMPLE_STUDENT_ID;
use student_portal_backend::Backend;

fn main() -> anyhow::Result<()> {
    // Initialize logging; RUST_LOG=debug shows ignored year bounds and lookups
    env_logger::init();
    info!("Starting student portal demo");

    let backend = Backend::new();
    let mut panel = SearchPanelState::new();

    // Plain search
    let result = backend.article_search_service.search("tourism")?;
    panel.show_results(result.articles.len(), result.summary("\"tourism\""));
    if let Some(summary) = &panel.result_summary {
        println!("{}", summary);
    }
    for row in backend.article_search_service.format_results(&result.articles) {
        println!("  {} ({}) - {} [{}]", row.title, row.year, row.journal_name, row.publication_type);
    }
    panel.back_to_search();

    // Advanced search with a malformed upper bound, which is ignored
    println!("Publication types: {}", PublicationType::selector_options().join(" | "));
    let request = AdvancedSearchRequest {
        author: "dela cruz".to_string(),
        year_from: "2020".to_string(),
        year_to: "soon".to_string(),
        ..Default::default()
    };
    let result = backend.article_search_service.advanced_search(&request)?;
    panel.show_results(result.articles.len(), result.summary("the advanced search"));
    if let Some(summary) = &panel.result_summary {
        println!("{}", summary);
    }
    panel.back_to_search();

    // A rejected and an accepted payment
    for amount in ["-100", "5,000.00"] {
        let payment = backend.statement_service.process_payment_request(PaymentRequest {
            student_id: SAMPLE_STUDENT_ID.to_string(),
            amount: amount.to_string(),
            channel: "BDO".to_string(),
            reference: None,
        });
        if !payment.success {
            warn!("Payment rejected: {}", payment.message);
        }
        println!("{}", payment.message);
    }

    match backend.statement_service.get_statement(SAMPLE_STUDENT_ID)? {
        Some(statement) => {
            println!();
            print!("{}", backend.statement_table_service.render_print_preview(&statement));
        }
        None => warn!("No statement for {}", SAMPLE_STUDENT_ID),
    }

    Ok(())
}
