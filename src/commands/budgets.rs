// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::periods::period_containing;
use crate::utils::{fmt_chf, parse_budget, pretty_table};
use anyhow::Result;

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let amount = parse_budget(sub.get_one::<String>("amount").map_or("", |s| s.as_str()))?;
            ledger.set_budget(amount)?;
            println!("Budget set to {} per period", fmt_chf(&ledger.budget()));
        }
        Some(("payday", sub)) => {
            let day = sub.get_one::<u32>("day").copied().unwrap_or_default();
            ledger.set_payday(day)?;
            println!("Payday set to day {} of each month", day);
        }
        Some(("show", _)) => show(ledger)?,
        _ => {}
    }
    Ok(())
}

fn show(ledger: &Ledger) -> Result<()> {
    let period = period_containing(ledger.payday(), ledger.today())?;
    let rows = vec![
        vec!["Budget".to_string(), fmt_chf(&ledger.budget())],
        vec!["Payday".to_string(), ledger.payday().to_string()],
        vec![
            "Current period".to_string(),
            format!("{} ({} .. {})", period.label, period.start, period.end),
        ],
    ];
    println!("{}", pretty_table(&["Setting", "Value"], rows));
    Ok(())
}
