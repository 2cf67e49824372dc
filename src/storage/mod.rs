//! Storage layer for spendlens
//!
//! Three independent JSON collections (transactions, categories, budgets)
//! with atomic writes and automatic directory creation.

pub mod budgets;
pub mod categories;
pub mod file_io;
pub mod init;
pub mod transactions;

pub use budgets::BudgetRepository;
pub use categories::CategoryRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use transactions::TransactionRepository;

use crate::analytics::AnalysisContext;
use crate::config::paths::SpendlensPaths;
use crate::error::SpendlensError;
use crate::models::{Budget, Category, Transaction};

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: SpendlensPaths,
    pub transactions: TransactionRepository,
    pub categories: CategoryRepository,
    pub budgets: BudgetRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: SpendlensPaths) -> Result<Self, SpendlensError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &SpendlensPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), SpendlensError> {
        self.transactions.load()?;
        self.categories.load()?;
        self.budgets.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), SpendlensError> {
        self.transactions.save()?;
        self.categories.save()?;
        self.budgets.save()?;
        Ok(())
    }

    /// Take a full copy of the three collections for analysis
    pub fn snapshot(&self) -> Result<Snapshot, SpendlensError> {
        Ok(Snapshot {
            transactions: self.transactions.get_all()?,
            categories: self.categories.get_all()?,
            budgets: self.budgets.get_all()?,
        })
    }
}

/// Owned copy of every stored record, handed to the analytics engine
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub transactions: Vec<Transaction>,
    pub categories: Vec<Category>,
    pub budgets: Vec<Budget>,
}

impl Snapshot {
    /// Borrow the snapshot as an analysis context for the given day
    pub fn context(&self, today: chrono::NaiveDate) -> AnalysisContext<'_> {
        AnalysisContext::new(&self.transactions, &self.categories, &self.budgets, today)
    }
}
