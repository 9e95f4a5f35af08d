// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::LedgerError;
use crate::export::{export_file_name, render_csv, render_document};
use crate::ledger::Ledger;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("csv", sub)) => export(ledger, sub, Format::Csv).map(|_| ()),
        Some(("doc", sub)) => export(ledger, sub, Format::Doc).map(|_| ()),
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Csv,
    Doc,
}

fn export(ledger: &Ledger, sub: &clap::ArgMatches, format: Format) -> Result<Option<PathBuf>> {
    let dir = sub.get_one::<String>("dir").map_or(".", |s| s.trim());
    write_export(ledger, Path::new(dir), format)
}

/// Writes the export into `dir` and returns its path, or `None` when there
/// was nothing to export.
pub fn write_export(ledger: &Ledger, dir: &Path, format: Format) -> Result<Option<PathBuf>> {
    let grouping = match ledger.export() {
        Ok(g) => g,
        Err(LedgerError::EmptyExport) => {
            println!("Nothing to export: no transactions recorded yet");
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };
    let today = ledger.today();
    let (name, contents) = match format {
        Format::Csv => (export_file_name(today, "csv"), render_csv(&grouping)?),
        Format::Doc => {
            let title = if ledger.name().is_empty() {
                format!("Ausgaben {}", today.format("%Y-%m-%d"))
            } else {
                format!("Ausgaben {} {}", ledger.name(), today.format("%Y-%m-%d"))
            };
            (export_file_name(today, "doc"), render_document(&grouping, &title))
        }
    };
    let path = dir.join(name);
    std::fs::write(&path, contents)
        .with_context(|| format!("Write export to {}", path.display()))?;
    println!(
        "Exported {} transactions to {}",
        grouping.transaction_count(),
        path.display()
    );
    Ok(Some(path))
}
