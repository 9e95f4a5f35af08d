// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use saldo::error::LedgerError;
use saldo::models::Transaction;
use saldo::periods::{anchor_start, partition, partition_transactions, period_containing};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn tx_on(y: i32, m: u32, day: u32) -> Transaction {
    Transaction {
        id: format!("{}-{}-{}", y, m, day),
        description: "t".into(),
        amount: Decimal::ONE,
        category: "Sonstiges".into(),
        date: Utc.with_ymd_and_hms(y, m, day, 12, 0, 0).unwrap(),
    }
}

#[test]
fn anchor_uses_same_month_on_or_after_payday() {
    assert_eq!(anchor_start(15, d(2024, 1, 20)).unwrap(), d(2024, 1, 15));
    assert_eq!(anchor_start(15, d(2024, 1, 15)).unwrap(), d(2024, 1, 15));
}

#[test]
fn anchor_rolls_back_across_year_boundary() {
    assert_eq!(anchor_start(15, d(2024, 1, 10)).unwrap(), d(2023, 12, 15));
    assert_eq!(anchor_start(28, d(2024, 3, 1)).unwrap(), d(2024, 2, 28));
}

#[test]
fn anchor_rejects_payday_out_of_range() {
    assert!(matches!(
        anchor_start(29, d(2024, 1, 10)),
        Err(LedgerError::InvalidPayday(29))
    ));
    assert!(matches!(
        anchor_start(0, d(2024, 1, 10)),
        Err(LedgerError::InvalidPayday(0))
    ));
}

#[test]
fn payday_fifteen_example_periods() {
    let periods = partition(15, d(2024, 1, 10), d(2024, 1, 25)).unwrap();
    assert_eq!(periods.len(), 2);
    assert_eq!(periods[0].label, "Dec 2023");
    assert_eq!(periods[0].start, d(2023, 12, 15));
    assert_eq!(periods[0].end, d(2024, 1, 14));
    assert_eq!(periods[1].label, "Jan 2024");
    assert_eq!(periods[1].start, d(2024, 1, 15));
    assert_eq!(periods[1].end, d(2024, 2, 14));
}

#[test]
fn periods_are_contiguous_through_february_and_new_year() {
    let periods = partition(28, d(2023, 11, 5), d(2024, 3, 1)).unwrap();
    let starts: Vec<NaiveDate> = periods.iter().map(|p| p.start).collect();
    assert_eq!(
        starts,
        vec![
            d(2023, 10, 28),
            d(2023, 11, 28),
            d(2023, 12, 28),
            d(2024, 1, 28),
            d(2024, 2, 28),
        ]
    );
    for pair in periods.windows(2) {
        assert_eq!(pair[1].start, pair[0].end.succ_opt().unwrap());
    }
    assert_eq!(periods[3].end, d(2024, 2, 27));
    assert_eq!(periods[4].end, d(2024, 3, 27));
}

#[test]
fn payday_one_matches_calendar_months() {
    let periods = partition(1, d(2024, 2, 1), d(2024, 3, 10)).unwrap();
    assert_eq!(periods.len(), 2);
    assert_eq!(periods[0].end, d(2024, 2, 29));
    assert_eq!(periods[1].start, d(2024, 3, 1));
    assert_eq!(periods[1].end, d(2024, 3, 31));
}

#[test]
fn last_period_contains_today() {
    let today = d(2025, 6, 3);
    let periods = partition(10, d(2024, 11, 12), today).unwrap();
    let last = periods.last().unwrap();
    assert!(last.contains(today));
    assert_eq!(period_containing(10, today).unwrap(), *last);
}

#[test]
fn no_transactions_means_no_periods() {
    assert!(partition_transactions(15, &[], d(2024, 1, 1)).unwrap().is_empty());
}

#[test]
fn every_transaction_lands_in_exactly_one_period() {
    let txs = vec![
        tx_on(2023, 12, 31),
        tx_on(2024, 1, 14),
        tx_on(2024, 1, 15),
        tx_on(2024, 2, 29),
        tx_on(2024, 4, 14),
    ];
    let periods = partition_transactions(15, &txs, d(2024, 4, 20)).unwrap();
    for t in &txs {
        let hits = periods.iter().filter(|p| p.contains(t.day())).count();
        assert_eq!(hits, 1, "transaction on {}", t.day());
    }
}

#[test]
fn future_dated_transaction_still_gets_a_period() {
    let txs = vec![tx_on(2024, 1, 5), tx_on(2024, 5, 20)];
    let periods = partition_transactions(15, &txs, d(2024, 2, 1)).unwrap();
    assert!(periods.last().unwrap().contains(d(2024, 5, 20)));
}
