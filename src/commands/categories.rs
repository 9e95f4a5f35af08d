// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").map_or("", |s| s.as_str());
            ledger.add_category(name)?;
            println!("Added category '{}'", name.trim());
        }
        Some(("list", sub)) => {
            let names = ledger.categories();
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &names)? {
                let data = names.iter().map(|n| vec![n.clone()]).collect();
                println!("{}", pretty_table(&["Category"], data));
            }
        }
        Some(("rename", sub)) => {
            let old = sub.get_one::<String>("old").map_or("", |s| s.as_str());
            let new = sub.get_one::<String>("new").map_or("", |s| s.as_str());
            ledger.rename_category(old, new)?;
            println!("Renamed category '{}' to '{}'", old, new.trim());
        }
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("name").map_or("", |s| s.as_str());
            ledger.remove_category(name)?;
            println!("Removed category '{}'", name);
        }
        _ => {}
    }
    Ok(())
}
