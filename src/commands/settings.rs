// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::models::Theme;
use anyhow::{Result, anyhow};

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("name", sub)) => {
            let name = sub.get_one::<String>("name").map_or("", |s| s.as_str());
            ledger.set_name(name);
            println!("Name set to '{}'", ledger.name());
        }
        Some(("theme", sub)) => {
            let raw = sub.get_one::<String>("theme").map_or("", |s| s.as_str());
            let theme: Theme = raw.parse().map_err(|e: String| anyhow!(e))?;
            ledger.set_theme(theme);
            println!("Theme set to {}", theme);
        }
        _ => {}
    }
    Ok(())
}
