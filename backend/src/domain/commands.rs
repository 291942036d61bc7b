//! Domain-level command and query types
//! These structs are used by services inside the domain layer. Callers holding
//! the public DTOs from the `shared` crate convert them with the `From` impls
//! below.

pub mod payments {
    use shared::PaymentRequest;

    /// Input for recording a payment against a student's statement.
    #[derive(Debug, Clone)]
    pub struct ProcessPaymentCommand {
        pub student_id: String,
        /// Amount as typed; validated by the statement service
        pub amount_input: String,
        pub channel: String,
        pub reference: Option<String>,
    }

    impl From<PaymentRequest> for ProcessPaymentCommand {
        fn from(request: PaymentRequest) -> Self {
            Self {
                student_id: request.student_id,
                amount_input: request.amount,
                channel: request.channel,
                reference: request.reference,
            }
        }
    }
}

pub mod search {
    use crate::domain::models::article::ArticleRecord;

    /// Result of a plain or advanced article search.
    #[derive(Debug, Clone)]
    pub struct ArticleSearchResult {
        /// Matches in catalogue order
        pub articles: Vec<ArticleRecord>,
        /// Size of the catalogue that was searched
        pub searched_count: usize,
    }

    impl ArticleSearchResult {
        /// e.g. "2 of 8 articles match \"tourism\""
        pub fn summary(&self, description: &str) -> String {
            let noun = if self.searched_count == 1 { "article" } else { "articles" };
            let verb = if self.articles.len() == 1 { "matches" } else { "match" };
            format!(
                "{} of {} {} {} {}",
                self.articles.len(),
                self.searched_count,
                noun,
                verb,
                description
            )
        }
    }
}
