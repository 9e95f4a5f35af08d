// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::{Ledger, TransactionFilter};
use crate::utils::{fmt_chf, maybe_print_json, parse_amount, pretty_table, search_matcher};
use anyhow::Result;
use serde::Serialize;

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(ledger, sub)?,
        Some(("list", sub)) => list(ledger, sub)?,
        Some(("rm", sub)) => rm(ledger, sub),
        _ => {}
    }
    Ok(())
}

fn add(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_amount(sub.get_one::<String>("amount").map_or("", |s| s.as_str()))?;
    let desc = sub.get_one::<String>("desc").map_or("", |s| s.as_str());
    let category = sub.get_one::<String>("category").map_or("", |s| s.as_str());
    let tx = ledger.add_transaction(desc, amount, category)?;
    println!(
        "Recorded {} for '{}' in {} (id {})",
        fmt_chf(&tx.amount),
        tx.description,
        tx.category,
        tx.id
    );
    Ok(())
}

fn rm(ledger: &mut Ledger, sub: &clap::ArgMatches) {
    let id = sub.get_one::<String>("id").map_or("", |s| s.trim());
    if ledger.delete_transaction(id) {
        println!("Deleted transaction {}", id);
    }
}

fn list(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(ledger, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.description.clone(),
                    r.category.clone(),
                    r.amount.clone(),
                    r.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Description", "Category", "Amount", "ID"], rows)
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub description: String,
    pub category: String,
    pub amount: String,
}

pub fn query_rows(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let filter = TransactionFilter {
        search: sub
            .get_one::<String>("search")
            .filter(|s| !s.trim().is_empty())
            .map(|s| search_matcher(s))
            .transpose()?,
        category: sub.get_one::<String>("category").cloned(),
        limit: sub.get_one::<usize>("limit").copied(),
    };
    Ok(ledger
        .list(&filter)
        .into_iter()
        .map(|t| TransactionRow {
            id: t.id.clone(),
            date: t.date.format("%Y-%m-%d %H:%M").to_string(),
            description: t.description.clone(),
            category: t.category.clone(),
            amount: fmt_chf(&t.amount),
        })
        .collect())
}
