use crate::domain::models::article::ArticleRecord;
use crate::domain::models::statement::AccountStatement;
use crate::storage::traits::Connection;
use log::info;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use super::article_repository::ArticleRepository;
use super::sample_data;
use super::statement_repository::StatementRepository;

pub(crate) type StatementTable = RwLock<HashMap<String, Arc<Mutex<AccountStatement>>>>;

/// MemoryConnection owns the catalogue and the statement table; repositories
/// created from it share the same data.
#[derive(Clone)]
pub struct MemoryConnection {
    articles: Arc<Vec<ArticleRecord>>,
    statements: Arc<StatementTable>,
}

impl MemoryConnection {
    /// Create a connection over a fixed catalogue and no statements
    pub fn new(articles: Vec<ArticleRecord>) -> Self {
        Self {
            articles: Arc::new(articles),
            statements: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a connection with no articles and no statements
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Create a connection seeded with the sample catalogue and statements
    pub fn with_sample_data() -> Self {
        let articles = sample_data::sample_articles();
        let statements = sample_data::sample_statements();
        info!(
            "Seeding in-memory storage with {} articles and {} statements",
            articles.len(),
            statements.len()
        );

        let table = statements
            .into_iter()
            .map(|s| (s.student_id().to_string(), Arc::new(Mutex::new(s))))
            .collect();

        Self {
            articles: Arc::new(articles),
            statements: Arc::new(RwLock::new(table)),
        }
    }

    pub(crate) fn articles(&self) -> &[ArticleRecord] {
        &self.articles
    }

    pub(crate) fn statements(&self) -> &StatementTable {
        &self.statements
    }
}

impl Connection for MemoryConnection {
    type ArticleRepository = ArticleRepository;
    type StatementRepository = StatementRepository;

    fn create_article_repository(&self) -> Self::ArticleRepository {
        ArticleRepository::new(self.clone())
    }

    fn create_statement_repository(&self) -> Self::StatementRepository {
        StatementRepository::new(self.clone())
    }
}
