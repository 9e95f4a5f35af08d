// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::savings::spend_by_category;
use crate::utils::{fmt_chf, maybe_print_json, parse_date, pretty_table};
use anyhow::Result;

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(ledger, sub)?,
        Some(("periods", sub)) => periods(ledger, sub)?,
        Some(("categories", sub)) => categories(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let s = match sub.get_one::<String>("date") {
        Some(d) => ledger.summary_on(parse_date(d.trim())?)?,
        None => ledger.summary()?,
    };
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s)? {
        return Ok(());
    }
    let mut rows = Vec::new();
    if !s.name.is_empty() {
        rows.push(vec!["Name".to_string(), s.name.clone()]);
    }
    rows.push(vec![
        "Period".to_string(),
        format!("{} ({} .. {})", s.period.label, s.period.start, s.period.end),
    ]);
    rows.push(vec!["Budget".to_string(), fmt_chf(&s.budget)]);
    rows.push(vec!["Spent".to_string(), fmt_chf(&s.spent)]);
    rows.push(vec!["Remaining".to_string(), fmt_chf(&s.remaining)]);
    rows.push(vec!["Saved (past periods)".to_string(), fmt_chf(&s.total_saved)]);
    rows.push(vec![
        "Transactions".to_string(),
        s.transaction_count.to_string(),
    ]);
    rows.push(vec!["Spent (all time)".to_string(), fmt_chf(&s.total_spent)]);
    println!("{}", pretty_table(&["", ""], rows));
    Ok(())
}

fn periods(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let data = ledger.period_rows();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .iter()
            .map(|p| {
                vec![
                    p.label.clone(),
                    p.start.to_string(),
                    p.end.to_string(),
                    fmt_chf(&p.spent),
                    fmt_chf(&p.saved),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Period", "Start", "End", "Spent", "Saved"], rows)
        );
    }
    Ok(())
}

fn categories(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let data = spend_by_category(ledger.transactions());
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .iter()
            .map(|c| vec![c.category.clone(), fmt_chf(&c.amount)])
            .collect();
        println!("{}", pretty_table(&["Category", "Spent"], rows));
    }
    Ok(())
}
