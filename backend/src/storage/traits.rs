//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;
use crate::domain::models::article::ArticleRecord;
use crate::domain::models::statement::AccountStatement;

/// Read-only access to the article catalogue
pub trait ArticleStorage: Send + Sync {
    /// All articles in catalogue (insertion) order
    fn list_articles(&self) -> Result<Vec<ArticleRecord>>;
}

/// Trait defining the interface for statement storage operations
///
/// Implementations must serialise a mutation and a read of the same student's
/// statement, so a rendered view never observes a half-applied payment.
pub trait StatementStorage: Send + Sync {
    /// Register a statement. Fails if the student already has one.
    fn store_statement(&self, statement: AccountStatement) -> Result<()>;

    /// Snapshot of a student's statement, `None` for an unknown student
    fn get_statement(&self, student_id: &str) -> Result<Option<AccountStatement>>;

    /// Run `update` with exclusive access to the student's statement.
    /// Returns `None` without calling `update` for an unknown student.
    fn update_statement<F, R>(&self, student_id: &str, update: F) -> Result<Option<R>>
    where
        F: FnOnce(&mut AccountStatement) -> R;

    /// Student ids with a statement, sorted
    fn list_student_ids(&self) -> Result<Vec<String>>;
}

/// Trait defining the interface for storage connections
///
/// Provides factory methods for creating repositories, so the domain layer can
/// work with any storage backend without knowing the implementation details.
pub trait Connection: Send + Sync + Clone {
    type ArticleRepository: ArticleStorage + Clone;
    type StatementRepository: StatementStorage + Clone;

    fn create_article_repository(&self) -> Self::ArticleRepository;

    fn create_statement_repository(&self) -> Self::StatementRepository;
}
