//! Transaction model
//!
//! A single income or expense entry. The amount is a positive magnitude;
//! `kind` says which way the money moved.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, TransactionId};
use super::kind::Kind;
use super::month::YearMonth;

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Positive magnitude
    pub amount: f64,

    /// Transaction date
    pub date: NaiveDate,

    /// Free text description
    #[serde(default)]
    pub description: String,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: Kind,

    /// Category reference (may not resolve to an existing category)
    pub category: CategoryId,

    /// When the transaction was recorded; used for recency ordering only
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction stamped with the current time
    pub fn new(
        kind: Kind,
        amount: f64,
        date: NaiveDate,
        category: impl Into<CategoryId>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: TransactionId::generate(),
            amount,
            date,
            description: description.into(),
            kind,
            category: category.into(),
            created_at: Utc::now(),
        }
    }

    /// Check if this is an expense
    pub fn is_expense(&self) -> bool {
        self.kind == Kind::Expense
    }

    /// Check if this is income
    pub fn is_income(&self) -> bool {
        self.kind == Kind::Income
    }

    /// The calendar month the transaction falls in
    pub fn month(&self) -> YearMonth {
        YearMonth::of(self.date)
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_finite() {
            return Err(TransactionValidationError::NonFiniteAmount);
        }

        if self.amount <= 0.0 {
            return Err(TransactionValidationError::NonPositiveAmount);
        }

        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_expense() { "-" } else { "+" };
        write!(
            f,
            "{} {} {}{:.2}",
            self.date, self.description, sign, self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount,
    NonFiniteAmount,
    EmptyDescription,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Amount must be greater than zero"),
            Self::NonFiniteAmount => write!(f, "Amount must be a finite number"),
            Self::EmptyDescription => write!(f, "Description is required"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
