// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Failures surfaced by ledger operations.
///
/// Validation variants are returned before any state changes. Persistence
/// variants are only returned by the store itself; the ledger logs and
/// swallows them.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Invalid amount '{0}', expected a positive number up to 1000000000")]
    InvalidAmount(String),
    #[error("Invalid budget '{0}', expected a number from 0 to 1000000000")]
    InvalidBudget(String),
    #[error("Invalid payday {0}, expected a day between 1 and 28")]
    InvalidPayday(u32),
    #[error("Category '{0}' already exists")]
    DuplicateCategory(String),
    #[error("Category '{0}' not found")]
    UnknownCategory(String),
    #[error("Category name must not be empty")]
    InvalidCategoryName,
    #[error("Date {0} is outside the supported calendar range")]
    DateOutOfRange(chrono::NaiveDate),
    #[error("No transactions to export")]
    EmptyExport,
    #[error("Persistence failure: {0}")]
    Persistence(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
