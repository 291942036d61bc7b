//! # In-Memory Storage Module
//!
//! Process-lifetime storage for the article catalogue and student statements.
//!
//! - The catalogue is an immutable `Vec` shared behind an `Arc`.
//! - Statements sit in a `RwLock<HashMap<..>>` keyed by student id, each behind
//!   its own `Mutex`, so payments for different students never contend.

pub mod article_repository;
pub mod connection;
pub mod sample_data;
pub mod statement_repository;

#[cfg(test)]
pub mod test_utils;

pub use article_repository::ArticleRepository;
pub use connection::MemoryConnection;
pub use statement_repository::StatementRepository;
