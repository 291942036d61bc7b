use anyhow::{anyhow, Result};
use log::{debug, info};
use std::sync::{Arc, Mutex};

use super::connection::MemoryConnection;
use crate::domain::models::statement::AccountStatement;
use crate::storage::traits::StatementStorage;

/// Statement repository with one lock per student
#[derive(Clone)]
pub struct StatementRepository {
    connection: MemoryConnection,
}

impl StatementRepository {
    pub fn new(connection: MemoryConnection) -> Self {
        Self { connection }
    }

    /// Handle to a student's statement, holding the table lock only for the lookup
    fn statement_handle(&self, student_id: &str) -> Result<Option<Arc<Mutex<AccountStatement>>>> {
        let table = self
            .connection
            .statements()
            .read()
            .map_err(|_| anyhow!("Statement table lock poisoned"))?;
        Ok(table.get(student_id).cloned())
    }
}

impl StatementStorage for StatementRepository {
    fn store_statement(&self, statement: AccountStatement) -> Result<()> {
        let mut table = self
            .connection
            .statements()
            .write()
            .map_err(|_| anyhow!("Statement table lock poisoned"))?;

        let student_id = statement.student_id().to_string();
        if table.contains_key(&student_id) {
            return Err(anyhow!("Statement for student {} already exists", student_id));
        }

        info!("Storing statement for student {}", student_id);
        table.insert(student_id, Arc::new(Mutex::new(statement)));
        Ok(())
    }

    fn get_statement(&self, student_id: &str) -> Result<Option<AccountStatement>> {
        let Some(handle) = self.statement_handle(student_id)? else {
            debug!("No statement found for student {}", student_id);
            return Ok(None);
        };

        let statement = handle
            .lock()
            .map_err(|_| anyhow!("Statement lock poisoned for student {}", student_id))?;
        Ok(Some(statement.clone()))
    }

    fn update_statement<F, R>(&self, student_id: &str, update: F) -> Result<Option<R>>
    where
        F: FnOnce(&mut AccountStatement) -> R,
    {
        let Some(handle) = self.statement_handle(student_id)? else {
            debug!("No statement to update for student {}", student_id);
            return Ok(None);
        };

        let mut statement = handle
            .lock()
            .map_err(|_| anyhow!("Statement lock poisoned for student {}", student_id))?;
        Ok(Some(update(&mut *statement)))
    }

    fn list_student_ids(&self) -> Result<Vec<String>> {
        let table = self
            .connection
            .statements()
            .read()
            .map_err(|_| anyhow!("Statement table lock poisoned"))?;
        let mut ids: Vec<String> = table.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::statement::{FeeBreakdown, PaymentTransaction};
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use std::thread;

    fn statement(student_id: &str) -> AccountStatement {
        AccountStatement::new(student_id).with_fee(FeeBreakdown::new("Tuition Fee", dec!(1000), None))
    }

    #[test]
    fn test_store_and_get_statement() {
        let repo = StatementRepository::new(MemoryConnection::empty());
        repo.store_statement(statement("2021-001")).unwrap();

        let found = repo.get_statement("2021-001").unwrap().unwrap();
        assert_eq!(found.get_balance(), dec!(1000));
        assert!(repo.get_statement("unknown").unwrap().is_none());
    }

    #[test]
    fn test_store_duplicate_fails() {
        let repo = StatementRepository::new(MemoryConnection::empty());
        repo.store_statement(statement("2021-001")).unwrap();
        assert!(repo.store_statement(statement("2021-001")).is_err());
    }

    #[test]
    fn test_update_unknown_student_does_not_run_closure() {
        let repo = StatementRepository::new(MemoryConnection::empty());
        let mut called = false;
        let result = repo.update_statement("ghost", |_| called = true).unwrap();
        assert!(result.is_none());
        assert!(!called);
    }

    #[test]
    fn test_list_student_ids_sorted() {
        let repo = StatementRepository::new(MemoryConnection::empty());
        repo.store_statement(statement("b")).unwrap();
        repo.store_statement(statement("a")).unwrap();
        assert_eq!(repo.list_student_ids().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_concurrent_updates_are_serialised() {
        let repo = StatementRepository::new(MemoryConnection::empty());
        repo.store_statement(statement("2021-001")).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let repo = repo.clone();
                thread::spawn(move || {
                    repo.update_statement("2021-001", |s| {
                        s.record_payment(PaymentTransaction {
                            date: Utc::now(),
                            amount: dec!(10),
                            reference: format!("T-{}", i),
                            channel: "GCash".to_string(),
                        })
                    })
                    .unwrap()
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let found = repo.get_statement("2021-001").unwrap().unwrap();
        assert_eq!(found.get_payment_history().len(), 8);
        assert_eq!(found.get_balance(), dec!(920));
    }
}
