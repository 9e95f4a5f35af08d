// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The ledger store: sole owner of transactions, categories, budget and
//! payday. Every mutation re-derives the saved records from scratch and
//! writes the full snapshot.

use crate::clock::{Clock, SystemClock};
use crate::error::{LedgerError, Result};
use crate::export::{self, Grouping};
use crate::models::{
    DEFAULT_CATEGORY, DEFAULT_PAYDAY, LedgerState, MAX_AMOUNT, PLACEHOLDER_DESCRIPTION,
    STATE_VERSION, SavedRecord, Theme, Transaction, default_categories,
};
use crate::periods::validate_payday;
use crate::savings::{self, PeriodRow, Summary};
use crate::store::StateStore;
use crate::utils::round_money;
use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Narrows the on-screen transaction list. Exports ignore it.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub search: Option<Regex>,
    pub category: Option<String>,
    pub limit: Option<usize>,
}

pub struct Ledger {
    state: LedgerState,
    store: Box<dyn StateStore>,
    clock: Box<dyn Clock>,
}

impl std::fmt::Debug for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ledger").field("state", &self.state).finish()
    }
}

impl Ledger {
    pub fn open(store: impl StateStore + 'static) -> Self {
        Self::open_with_clock(store, SystemClock)
    }

    /// Loads the persisted snapshot over the defaults. A snapshot that
    /// cannot be read is logged and the ledger starts from defaults.
    pub fn open_with_clock(store: impl StateStore + 'static, clock: impl Clock + 'static) -> Self {
        let state = match store.load() {
            Ok(Some(state)) => normalize(state),
            Ok(None) => {
                debug!("no saved ledger found, starting from defaults");
                LedgerState::default()
            }
            Err(err) => {
                error!(error = %err, "failed to load ledger, starting from defaults");
                LedgerState::default()
            }
        };
        let mut ledger = Self {
            state,
            store: Box::new(store),
            clock: Box::new(clock),
        };
        if let Err(err) = ledger.recompute() {
            error!(error = %err, "failed to derive periods on load");
        }
        ledger
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.state.transactions
    }

    pub fn categories(&self) -> &[String] {
        &self.state.categories
    }

    pub fn budget(&self) -> Decimal {
        self.state.budget
    }

    pub fn payday(&self) -> u32 {
        self.state.payday
    }

    pub fn name(&self) -> &str {
        &self.state.name
    }

    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    /// Last derived records, oldest first.
    pub fn saved_records(&self) -> &[SavedRecord] {
        &self.state.saved_records
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.now().date_naive()
    }

    pub fn add_transaction(
        &mut self,
        description: &str,
        amount: Decimal,
        category: &str,
    ) -> Result<Transaction> {
        let amount = round_money(amount);
        if !valid_amount(amount) {
            return Err(LedgerError::InvalidAmount(amount.to_string()));
        }
        let category = match category.trim() {
            "" => self.default_category(),
            name if self.has_category(name) => name.to_string(),
            name => return Err(LedgerError::UnknownCategory(name.to_string())),
        };
        let description = match description.trim() {
            "" => PLACEHOLDER_DESCRIPTION.to_string(),
            d => d.to_string(),
        };

        let tx = Transaction {
            id: Uuid::new_v4().to_string(),
            description,
            amount,
            category,
            date: self.clock.now(),
        };
        info!(id = %tx.id, amount = %tx.amount, category = %tx.category, "added transaction");
        self.state.transactions.push(tx.clone());
        self.commit();
        Ok(tx)
    }

    /// Removes the transaction with `id`. Unknown ids are ignored.
    pub fn delete_transaction(&mut self, id: &str) -> bool {
        let before = self.state.transactions.len();
        self.state.transactions.retain(|t| t.id != id);
        if self.state.transactions.len() == before {
            debug!(id, "delete ignored, no such transaction");
            return false;
        }
        info!(id, "deleted transaction");
        self.commit();
        true
    }

    pub fn set_budget(&mut self, value: Decimal) -> Result<()> {
        let value = round_money(value);
        if !valid_budget(value) {
            return Err(LedgerError::InvalidBudget(value.to_string()));
        }
        self.state.budget = value;
        info!(budget = %self.state.budget, "budget set");
        self.commit();
        Ok(())
    }

    pub fn set_payday(&mut self, day: u32) -> Result<()> {
        self.state.payday = validate_payday(day)?;
        info!(payday = day, "payday set");
        self.commit();
        Ok(())
    }

    pub fn set_name(&mut self, name: &str) {
        self.state.name = name.trim().to_string();
        self.commit();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.state.theme = theme;
        self.commit();
    }

    pub fn add_category(&mut self, name: &str) -> Result<()> {
        let name = category_name(name)?;
        if self.has_category(name) {
            return Err(LedgerError::DuplicateCategory(name.to_string()));
        }
        self.state.categories.push(name.to_string());
        info!(category = name, "added category");
        self.commit();
        Ok(())
    }

    /// Renames in place. Transactions keep the old name.
    pub fn rename_category(&mut self, old: &str, new: &str) -> Result<()> {
        let new = category_name(new)?;
        let Some(pos) = self.state.categories.iter().position(|c| c == old) else {
            return Err(LedgerError::UnknownCategory(old.to_string()));
        };
        if old != new && self.has_category(new) {
            return Err(LedgerError::DuplicateCategory(new.to_string()));
        }
        self.state.categories[pos] = new.to_string();
        info!(from = old, to = new, "renamed category");
        self.commit();
        Ok(())
    }

    /// Drops the name from the set. Transactions keep referring to it.
    pub fn remove_category(&mut self, name: &str) -> Result<()> {
        let Some(pos) = self.state.categories.iter().position(|c| c == name) else {
            return Err(LedgerError::UnknownCategory(name.to_string()));
        };
        self.state.categories.remove(pos);
        info!(category = name, "removed category");
        self.commit();
        Ok(())
    }

    /// Re-derives every saved record from transactions, budget and payday.
    pub fn recompute(&mut self) -> Result<()> {
        let today = self.today();
        self.state.saved_records = savings::recompute(&self.state, today)?;
        debug!(
            periods = self.state.saved_records.len(),
            "recomputed saved records"
        );
        Ok(())
    }

    /// Newest first.
    pub fn list(&self, filter: &TransactionFilter) -> Vec<&Transaction> {
        let mut rows: Vec<&Transaction> = self
            .state
            .transactions
            .iter()
            .filter(|t| {
                filter
                    .category
                    .as_deref()
                    .is_none_or(|c| t.category == c)
            })
            .filter(|t| {
                filter
                    .search
                    .as_ref()
                    .is_none_or(|re| re.is_match(&t.description) || re.is_match(&t.category))
            })
            .collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        if let Some(limit) = filter.limit {
            rows.truncate(limit);
        }
        rows
    }

    pub fn summary(&self) -> Result<Summary> {
        savings::summary(&self.state, self.today())
    }

    pub fn summary_on(&self, day: NaiveDate) -> Result<Summary> {
        savings::summary(&self.state, day)
    }

    pub fn period_rows(&self) -> Vec<PeriodRow> {
        savings::period_rows(&self.state.saved_records, self.state.budget)
    }

    /// Groups the full history for export.
    pub fn export(&self) -> Result<Grouping<'_>> {
        export::group_by_category(&self.state.transactions)
    }

    /// Writes the current snapshot, reporting failure to the caller.
    pub fn save(&self) -> Result<()> {
        self.store.save(&self.state)
    }

    fn has_category(&self, name: &str) -> bool {
        self.state.categories.iter().any(|c| c == name)
    }

    fn default_category(&self) -> String {
        if self.has_category(DEFAULT_CATEGORY) {
            DEFAULT_CATEGORY.to_string()
        } else {
            self.state
                .categories
                .first()
                .cloned()
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string())
        }
    }

    fn commit(&mut self) {
        if let Err(err) = self.recompute() {
            error!(error = %err, "failed to derive periods");
        }
        self.persist();
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(&self.state) {
            warn!(error = %err, "failed to save ledger, changes kept in memory");
        }
    }
}

fn valid_amount(amount: Decimal) -> bool {
    amount > Decimal::ZERO && amount <= MAX_AMOUNT
}

fn valid_budget(budget: Decimal) -> bool {
    budget >= Decimal::ZERO && budget <= MAX_AMOUNT
}

fn category_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(LedgerError::InvalidCategoryName);
    }
    Ok(name)
}

/// Repairs a loaded snapshot so the ledger invariants hold.
fn normalize(mut state: LedgerState) -> LedgerState {
    if state.categories.is_empty() {
        info!("no categories in saved ledger, reseeding defaults");
        state.categories = default_categories();
    }
    if validate_payday(state.payday).is_err() {
        warn!(
            payday = state.payday,
            "saved payday out of range, using default"
        );
        state.payday = DEFAULT_PAYDAY;
    }
    let budget = round_money(state.budget);
    if valid_budget(budget) {
        state.budget = budget;
    } else {
        warn!(budget = %state.budget, "saved budget out of range, using zero");
        state.budget = Decimal::ZERO;
    }
    state.transactions.retain_mut(|t| {
        t.amount = round_money(t.amount);
        let keep = valid_amount(t.amount);
        if !keep {
            warn!(
                id = %t.id,
                amount = %t.amount,
                "dropping saved transaction with invalid amount"
            );
        }
        keep
    });
    state.version = STATE_VERSION;
    state
}
