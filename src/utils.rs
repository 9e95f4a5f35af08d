// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::LedgerError;
use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use regex::{Regex, RegexBuilder};
use rust_decimal::{Decimal, RoundingStrategy};

pub const CURRENCY: &str = "CHF";

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// Parses a transaction amount; accepts a decimal comma.
pub fn parse_amount(s: &str) -> std::result::Result<Decimal, LedgerError> {
    let cleaned = s.trim().replace(',', ".");
    cleaned
        .parse::<Decimal>()
        .map_err(|_| LedgerError::InvalidAmount(s.trim().to_string()))
}

pub fn parse_budget(s: &str) -> std::result::Result<Decimal, LedgerError> {
    let cleaned = s.trim().replace(',', ".");
    cleaned
        .parse::<Decimal>()
        .map_err(|_| LedgerError::InvalidBudget(s.trim().to_string()))
}

/// Rounds to whole cents, halves away from zero.
pub fn round_money(d: Decimal) -> Decimal {
    d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

pub fn fmt_chf(d: &Decimal) -> String {
    format!("{} {:.2}", CURRENCY, round_money(*d))
}

/// RFC 3339 in UTC with milliseconds, e.g. `2024-01-10T08:30:00.000Z`.
pub fn fmt_iso_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Escapes text placed into HTML markup.
pub fn escape_markup(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Case-insensitive literal matcher for list searches.
pub fn search_matcher(query: &str) -> Result<Regex> {
    RegexBuilder::new(&regex::escape(query.trim()))
        .case_insensitive(true)
        .build()
        .with_context(|| format!("Invalid search '{}'", query))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
