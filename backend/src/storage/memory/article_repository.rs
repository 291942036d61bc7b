use anyhow::Result;

use super::connection::MemoryConnection;
use crate::domain::models::article::ArticleRecord;
use crate::storage::traits::ArticleStorage;

/// Article repository over the connection's fixed catalogue
#[derive(Clone)]
pub struct ArticleRepository {
    connection: MemoryConnection,
}

impl ArticleRepository {
    pub fn new(connection: MemoryConnection) -> Self {
        Self { connection }
    }
}

impl ArticleStorage for ArticleRepository {
    fn list_articles(&self) -> Result<Vec<ArticleRecord>> {
        Ok(self.connection.articles().to_vec())
    }
}
