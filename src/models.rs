// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const STATE_VERSION: u32 = 1;
pub const DEFAULT_PAYDAY: u32 = 25;
pub const DEFAULT_CATEGORY: &str = "Sonstiges";
pub const PLACEHOLDER_DESCRIPTION: &str = "Ohne Beschreibung";
/// Upper bound for a single amount or the budget, CHF 1'000'000'000.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Lebensmittel",
    "Miete",
    "Transport",
    "Freizeit",
    "Gesundheit",
    DEFAULT_CATEGORY,
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "desc")]
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    pub date: DateTime<Utc>,
}

impl Transaction {
    /// Calendar day the transaction counts towards.
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }
}

/// One payday-to-payday interval, both ends inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    pub fn contains(&self, day: NaiveDate) -> bool {
        day >= self.start && day <= self.end
    }
}

/// A period together with what was left of the budget in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedRecord {
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub saved: Decimal,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme '{}' (use light|dark)", other)),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

/// The whole persisted blob. Every field falls back to its default when
/// missing so older files keep loading as fields are added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LedgerState {
    pub version: u32,
    pub name: String,
    pub budget: Decimal,
    pub transactions: Vec<Transaction>,
    pub categories: Vec<String>,
    pub theme: Theme,
    pub payday: u32,
    pub saved_records: Vec<SavedRecord>,
}

impl Default for LedgerState {
    fn default() -> Self {
        Self {
            version: STATE_VERSION,
            name: String::new(),
            budget: Decimal::ZERO,
            transactions: Vec::new(),
            categories: default_categories(),
            theme: Theme::default(),
            payday: DEFAULT_PAYDAY,
            saved_records: Vec::new(),
        }
    }
}

pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}
