//! # Domain Module
//!
//! Contains the business logic behind the student portal screens, independent
//! of any UI framework or storage mechanism.
//!
//! ## Module Organization
//!
//! - **article_search_service**: plain and advanced article search
//! - **statement_service**: statement lookups and payment processing
//! - **payment_validation**: payment form parsing and limits
//! - **statement_table**: statement table formatting and print preview
//! - **models**: `ArticleRecord`, `AccountStatement` and their parts
//! - **commands**: command/result types used by the services
//!
//! ## Business Rules
//!
//! - Searches are case-insensitive substring matches and keep catalogue order
//! - Malformed year bounds in the advanced search are treated as "no bound"
//! - Payments must be positive, within the configured limits, and use a supported channel
//! - Payments settle PRELIM, then MIDTERM, then FINAL
//! - Balance is never negative

pub mod article_search_service;
pub mod commands;
pub mod models;
pub mod payment_validation;
pub mod statement_service;
pub mod statement_table;

pub use article_search_service::*;
pub use commands::*;
pub use payment_validation::*;
pub use statement_service::*;
pub use statement_table::*;
