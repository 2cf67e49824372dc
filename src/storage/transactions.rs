//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json. The file
//! is a plain JSON array; new transactions are prepended so the stored
//! order is newest-insert first.

use std::path::PathBuf;
use std::sync::RwLock;

use tracing::debug;

use crate::error::SpendlensError;
use crate::models::{Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<Vec<Transaction>>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load transactions from disk
    pub fn load(&self) -> Result<(), SpendlensError> {
        let transactions: Vec<Transaction> = read_json(&self.path)?;
        debug!(count = transactions.len(), "Loaded transactions");

        let mut data = self.data.write().map_err(|e| {
            SpendlensError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = transactions;

        Ok(())
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), SpendlensError> {
        let data = self.data.read().map_err(|e| {
            SpendlensError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        write_json_atomic(&self.path, data.as_slice())
    }

    /// Get a transaction by ID
    pub fn get(&self, id: &TransactionId) -> Result<Option<Transaction>, SpendlensError> {
        let data = self.data.read().map_err(|e| {
            SpendlensError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.iter().find(|t| &t.id == id).cloned())
    }

    /// Get all transactions in stored order
    pub fn get_all(&self) -> Result<Vec<Transaction>, SpendlensError> {
        let data = self.data.read().map_err(|e| {
            SpendlensError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.clone())
    }

    /// Add a transaction at the front of the collection
    pub fn add(&self, txn: Transaction) -> Result<(), SpendlensError> {
        let mut data = self.data.write().map_err(|e| {
            SpendlensError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.insert(0, txn);
        Ok(())
    }

    /// Replace an existing transaction, keeping its position
    ///
    /// Returns false if no transaction has that ID.
    pub fn update(&self, txn: Transaction) -> Result<bool, SpendlensError> {
        let mut data = self.data.write().map_err(|e| {
            SpendlensError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        match data.iter_mut().find(|t| t.id == txn.id) {
            Some(slot) => {
                *slot = txn;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Delete a transaction
    pub fn delete(&self, id: &TransactionId) -> Result<bool, SpendlensError> {
        let mut data = self.data.write().map_err(|e| {
            SpendlensError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let before = data.len();
        data.retain(|t| &t.id != id);
        Ok(data.len() != before)
    }

    /// Count transactions
    pub fn count(&self) -> Result<usize, SpendlensError> {
        let data = self.data.read().map_err(|e| {
            SpendlensError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }
}
