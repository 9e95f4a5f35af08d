// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Spend and savings per period.
//!
//! The budget is a single figure applied to every period, so changing it
//! restates the savings of past periods as well.

use crate::error::Result;
use crate::models::{LedgerState, Period, SavedRecord, Transaction};
use crate::periods;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

/// Sum of the amounts dated inside `period`, both ends inclusive.
pub fn spent_in(period: &Period, transactions: &[Transaction]) -> Decimal {
    transactions
        .iter()
        .filter(|t| period.contains(t.day()))
        .map(|t| t.amount)
        .sum()
}

pub fn saved_records(
    periods: &[Period],
    transactions: &[Transaction],
    budget: Decimal,
) -> Vec<SavedRecord> {
    periods
        .iter()
        .map(|p| SavedRecord {
            label: p.label.clone(),
            start: p.start,
            end: p.end,
            saved: budget - spent_in(p, transactions),
        })
        .collect()
}

/// Derives the saved records from primary data only.
pub fn recompute(state: &LedgerState, today: NaiveDate) -> Result<Vec<SavedRecord>> {
    let periods = periods::partition_transactions(state.payday, &state.transactions, today)?;
    Ok(saved_records(&periods, &state.transactions, state.budget))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodRow {
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub spent: Decimal,
    pub saved: Decimal,
}

/// Saved records with the spend made explicit, for reporting.
pub fn period_rows(records: &[SavedRecord], budget: Decimal) -> Vec<PeriodRow> {
    records
        .iter()
        .map(|r| PeriodRow {
            label: r.label.clone(),
            start: r.start,
            end: r.end,
            spent: budget - r.saved,
            saved: r.saved,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub name: String,
    pub period: Period,
    pub budget: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    /// Sum of `saved` over periods that ended before today.
    pub total_saved: Decimal,
    pub transaction_count: usize,
    pub total_spent: Decimal,
}

pub fn summary(state: &LedgerState, today: NaiveDate) -> Result<Summary> {
    let period = periods::period_containing(state.payday, today)?;
    let spent = spent_in(&period, &state.transactions);
    let total_saved = recompute(state, today)?
        .iter()
        .filter(|r| r.end < today)
        .map(|r| r.saved)
        .sum();
    Ok(Summary {
        name: state.name.clone(),
        budget: state.budget,
        spent,
        remaining: state.budget - spent,
        total_saved,
        transaction_count: state.transactions.len(),
        total_spent: state.transactions.iter().map(|t| t.amount).sum(),
        period,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpend {
    pub category: String,
    pub amount: Decimal,
}

/// Totals per category, largest first; ties break on the name.
pub fn spend_by_category(transactions: &[Transaction]) -> Vec<CategorySpend> {
    let mut agg: HashMap<&str, Decimal> = HashMap::new();
    for t in transactions {
        *agg.entry(t.category.as_str()).or_insert(Decimal::ZERO) += t.amount;
    }
    let mut items: Vec<CategorySpend> = agg
        .into_iter()
        .map(|(category, amount)| CategorySpend {
            category: category.to_string(),
            amount,
        })
        .collect();
    items.sort_by(|a, b| b.amount.cmp(&a.amount).then_with(|| a.category.cmp(&b.category)));
    items
}
