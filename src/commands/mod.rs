// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod budgets;
pub mod categories;
pub mod exporter;
pub mod reports;
pub mod settings;
pub mod transactions;

use crate::ledger::Ledger;
use anyhow::{Context, Result};
use std::path::Path;

pub fn init(ledger: &Ledger, path: &Path) -> Result<()> {
    ledger
        .save()
        .with_context(|| format!("Write ledger at {}", path.display()))?;
    println!("Ledger initialized at {}", path.display());
    Ok(())
}
