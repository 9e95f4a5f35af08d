// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Category-grouped exports.
//!
//! One grouping pass feeds both renderers: a flat CSV and an HTML table
//! document with per-category subtotals and a grand total.

use crate::error::{LedgerError, Result};
use crate::models::Transaction;
use crate::utils::{escape_markup, fmt_chf, fmt_iso_timestamp, round_money};
use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

pub const CSV_HEADER: [&str; 4] = ["Kategorie", "Beschreibung", "Betrag", "Datum"];
pub const DOCUMENT_HEADER: [&str; 3] = ["Kategorie", "Beschreibung", "Betrag"];
pub const GRAND_TOTAL_LABEL: &str = "Gesamttotal";
const BOM: char = '\u{feff}';

#[derive(Debug, Clone)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    /// Oldest first.
    pub transactions: Vec<&'a Transaction>,
    pub subtotal: Decimal,
}

#[derive(Debug, Clone)]
pub struct Grouping<'a> {
    /// Sorted by category name.
    pub groups: Vec<CategoryGroup<'a>>,
    pub grand_total: Decimal,
}

impl Grouping<'_> {
    pub fn transaction_count(&self) -> usize {
        self.groups.iter().map(|g| g.transactions.len()).sum()
    }
}

/// Groups the complete transaction set by category.
pub fn group_by_category(transactions: &[Transaction]) -> Result<Grouping<'_>> {
    if transactions.is_empty() {
        return Err(LedgerError::EmptyExport);
    }
    let mut by_category: BTreeMap<&str, Vec<&Transaction>> = BTreeMap::new();
    for t in transactions {
        by_category.entry(t.category.as_str()).or_default().push(t);
    }

    let groups: Vec<CategoryGroup<'_>> = by_category
        .into_iter()
        .map(|(category, mut items)| {
            items.sort_by_key(|t| t.date);
            let subtotal: Decimal = items.iter().map(|t| t.amount).sum();
            CategoryGroup {
                category,
                transactions: items,
                subtotal,
            }
        })
        .collect();
    let grand_total: Decimal = groups.iter().map(|g| g.subtotal).sum();
    debug_assert_eq!(
        grand_total,
        transactions.iter().map(|t| t.amount).sum::<Decimal>()
    );
    Ok(Grouping {
        groups,
        grand_total,
    })
}

/// Flat CSV: header plus one fully quoted row per transaction.
pub fn render_csv(grouping: &Grouping<'_>) -> Result<String> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    wtr.write_record(CSV_HEADER)?;
    for group in &grouping.groups {
        for t in &group.transactions {
            let amount = format!("{:.2}", round_money(t.amount));
            let date = fmt_iso_timestamp(&t.date);
            wtr.write_record([
                t.category.as_str(),
                t.description.as_str(),
                amount.as_str(),
                date.as_str(),
            ])?;
        }
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| LedgerError::Io(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| LedgerError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// HTML table document with a leading byte-order mark, readable by word
/// processors.
pub fn render_document(grouping: &Grouping<'_>, title: &str) -> String {
    let mut out = String::new();
    out.push(BOM);
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_markup(title)));
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!("<h1>{}</h1>\n", escape_markup(title)));
    out.push_str("<table border=\"1\" cellspacing=\"0\" cellpadding=\"4\">\n");
    out.push_str("<tr>");
    for h in DOCUMENT_HEADER {
        out.push_str(&format!("<th>{}</th>", h));
    }
    out.push_str("</tr>\n");

    for group in &grouping.groups {
        let category = escape_markup(group.category);
        for t in &group.transactions {
            out.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                category,
                escape_markup(&t.description),
                escape_markup(&fmt_chf(&t.amount)),
            ));
        }
        out.push_str(&total_row(&format!("Total {}", group.category), &group.subtotal));
    }
    out.push_str(&total_row(GRAND_TOTAL_LABEL, &grouping.grand_total));
    out.push_str("</table>\n</body>\n</html>\n");
    out
}

fn total_row(label: &str, amount: &Decimal) -> String {
    format!(
        "<tr><td colspan=\"2\"><b>{}</b></td><td><b>{}</b></td></tr>\n",
        escape_markup(label),
        escape_markup(&fmt_chf(amount)),
    )
}

/// Date-stamped artifact name, e.g. `saldo_2024-01-31.csv`.
pub fn export_file_name(day: NaiveDate, extension: &str) -> String {
    format!("saldo_{}.{}", day.format("%Y-%m-%d"), extension)
}
