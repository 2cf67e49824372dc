//! Transaction service
//!
//! Validated create/update/delete and lookup for income and expense
//! records.

use chrono::NaiveDate;
use tracing::info;

use crate::error::{SpendlensError, SpendlensResult};
use crate::models::{Category, CategoryId, Kind, Transaction, YearMonth};
use crate::storage::Storage;

use super::resolve_by_id;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Only income or only expenses
    pub kind: Option<Kind>,
    /// Filter by category
    pub category_id: Option<CategoryId>,
    /// Only transactions dated in this month
    pub month: Option<YearMonth>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn month(mut self, month: YearMonth) -> Self {
        self.month = Some(month);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, txn: &Transaction) -> bool {
        self.kind.map_or(true, |k| txn.kind == k)
            && self.category_id.as_ref().map_or(true, |c| &txn.category == c)
            && self.month.map_or(true, |m| m.contains(txn.date))
    }
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub kind: Kind,
    pub amount: f64,
    pub date: NaiveDate,
    /// Category id, id prefix or name
    pub category: String,
    pub description: String,
}

/// Fields to change on an existing transaction; `None` leaves a field alone
#[derive(Debug, Clone, Default)]
pub struct UpdateTransactionInput {
    pub kind: Option<Kind>,
    pub amount: Option<f64>,
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl UpdateTransactionInput {
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.amount.is_none()
            && self.date.is_none()
            && self.category.is_none()
            && self.description.is_none()
    }
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new transaction
    pub fn create(&self, input: CreateTransactionInput) -> SpendlensResult<Transaction> {
        let category = self.resolve_category(&input.category, input.kind)?;

        let txn = Transaction::new(
            input.kind,
            input.amount,
            input.date,
            category.id.clone(),
            input.description.trim(),
        );
        txn.validate()
            .map_err(|e| SpendlensError::Validation(e.to_string()))?;

        self.storage.transactions.add(txn.clone())?;
        self.storage.transactions.save()?;

        info!(
            id = %txn.id.short(),
            kind = txn.kind.as_str(),
            amount = txn.amount,
            category = %category.name,
            "Recorded transaction"
        );

        Ok(txn)
    }

    /// Find a transaction by ID or unique ID prefix
    pub fn find(&self, identifier: &str) -> SpendlensResult<Option<Transaction>> {
        let all = self.storage.transactions.get_all()?;
        resolve_by_id(all, identifier, "Transaction", |t| t.id.as_str())
    }

    /// Like [`find`](Self::find), but a miss is an error
    pub fn get(&self, identifier: &str) -> SpendlensResult<Transaction> {
        self.find(identifier)?
            .ok_or_else(|| SpendlensError::transaction_not_found(identifier))
    }

    /// List transactions in stored order (most recently added first)
    pub fn list(&self, filter: TransactionFilter) -> SpendlensResult<Vec<Transaction>> {
        let mut transactions = self.storage.transactions.get_all()?;
        transactions.retain(|t| filter.matches(t));

        if let Some(limit) = filter.limit {
            transactions.truncate(limit);
        }

        Ok(transactions)
    }

    /// Update fields of an existing transaction
    pub fn update(
        &self,
        identifier: &str,
        input: UpdateTransactionInput,
    ) -> SpendlensResult<Transaction> {
        let mut txn = self.get(identifier)?;

        if input.is_empty() {
            return Ok(txn);
        }

        if let Some(kind) = input.kind {
            txn.kind = kind;
        }
        if let Some(amount) = input.amount {
            txn.amount = amount;
        }
        if let Some(date) = input.date {
            txn.date = date;
        }
        if let Some(description) = input.description {
            txn.description = description.trim().to_string();
        }

        // A kind change must still agree with the (possibly new) category
        if input.category.is_some() || input.kind.is_some() {
            let wanted = match &input.category {
                Some(c) => c.clone(),
                None => txn.category.to_string(),
            };
            let category = self.resolve_category(&wanted, txn.kind)?;
            txn.category = category.id;
        }

        txn.validate()
            .map_err(|e| SpendlensError::Validation(e.to_string()))?;

        self.storage.transactions.update(txn.clone())?;
        self.storage.transactions.save()?;

        info!(id = %txn.id.short(), "Updated transaction");

        Ok(txn)
    }

    /// Delete a transaction
    pub fn delete(&self, identifier: &str) -> SpendlensResult<Transaction> {
        let txn = self.get(identifier)?;

        self.storage.transactions.delete(&txn.id)?;
        self.storage.transactions.save()?;

        info!(id = %txn.id.short(), "Deleted transaction");

        Ok(txn)
    }

    /// Count all transactions
    pub fn count(&self) -> SpendlensResult<usize> {
        self.storage.transactions.count()
    }

    fn resolve_category(&self, identifier: &str, kind: Kind) -> SpendlensResult<Category> {
        let category = super::CategoryService::new(self.storage).get(identifier)?;

        if category.kind != kind {
            return Err(SpendlensError::Validation(format!(
                "Category '{}' is an {} category, not {}",
                category.name,
                category.kind.as_str(),
                kind.as_str()
            )));
        }

        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::create_test_storage;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn lunch() -> CreateTransactionInput {
        CreateTransactionInput {
            kind: Kind::Expense,
            amount: 12.5,
            date: date(2025, 3, 10),
            category: "Food & Dining".into(),
            description: "Lunch".into(),
        }
    }

    #[test]
    fn test_create_transaction() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service.create(lunch()).unwrap();
        assert_eq!(txn.category.as_str(), "1");
        assert_eq!(txn.description, "Lunch");
        assert_eq!(service.count().unwrap(), 1);
    }

    #[test]
    fn test_create_rejects_invalid_input() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let mut zero = lunch();
        zero.amount = 0.0;
        assert!(service.create(zero).unwrap_err().is_validation());

        let mut negative = lunch();
        negative.amount = -3.0;
        assert!(service.create(negative).unwrap_err().is_validation());

        let mut blank = lunch();
        blank.description = "   ".into();
        assert!(service.create(blank).unwrap_err().is_validation());

        let mut missing = lunch();
        missing.category = "No Such Category".into();
        assert!(service.create(missing).unwrap_err().is_not_found());

        let mut wrong_kind = lunch();
        wrong_kind.category = "Salary".into();
        assert!(service.create(wrong_kind).unwrap_err().is_validation());

        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_list_newest_added_first_with_filters() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let first = service.create(lunch()).unwrap();
        let second = service
            .create(CreateTransactionInput {
                kind: Kind::Income,
                amount: 2000.0,
                date: date(2025, 2, 28),
                category: "10".into(),
                description: "Paycheck".into(),
            })
            .unwrap();

        let all = service.list(TransactionFilter::new()).unwrap();
        assert_eq!(all[0].id, second.id);
        assert_eq!(all[1].id, first.id);

        let expenses = service
            .list(TransactionFilter::new().kind(Kind::Expense))
            .unwrap();
        assert_eq!(expenses.len(), 1);

        let february = service
            .list(TransactionFilter::new().month(YearMonth::new(2025, 2).unwrap()))
            .unwrap();
        assert_eq!(february.len(), 1);
        assert_eq!(february[0].id, second.id);

        let limited = service.list(TransactionFilter::new().limit(1)).unwrap();
        assert_eq!(limited.len(), 1);
    }

    #[test]
    fn test_update_transaction() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);
        let txn = service.create(lunch()).unwrap();

        let updated = service
            .update(
                txn.id.short(),
                UpdateTransactionInput {
                    amount: Some(20.0),
                    category: Some("Shopping".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.amount, 20.0);
        assert_eq!(updated.category.as_str(), "3");
        assert_eq!(updated.created_at, txn.created_at);

        let err = service
            .update(
                txn.id.as_str(),
                UpdateTransactionInput {
                    amount: Some(-1.0),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(service.get(txn.id.as_str()).unwrap().amount, 20.0);
    }

    #[test]
    fn test_delete_transaction() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);
        let txn = service.create(lunch()).unwrap();

        let deleted = service.delete(txn.id.as_str()).unwrap();
        assert_eq!(deleted.id, txn.id);
        assert_eq!(service.count().unwrap(), 0);

        assert!(service.delete(txn.id.as_str()).unwrap_err().is_not_found());
    }
}
