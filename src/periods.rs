// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Splits transaction history into payday-to-payday periods.
//!
//! A period starts on the payday of one month and ends the day before the
//! payday of the next. Paydays are limited to 1..=28 so every month has one.

use crate::error::{LedgerError, Result};
use crate::models::{Period, Transaction};
use chrono::{Datelike, Months, NaiveDate};

pub const MIN_PAYDAY: u32 = 1;
pub const MAX_PAYDAY: u32 = 28;

pub fn validate_payday(day: u32) -> Result<u32> {
    if (MIN_PAYDAY..=MAX_PAYDAY).contains(&day) {
        Ok(day)
    } else {
        Err(LedgerError::InvalidPayday(day))
    }
}

/// Start of the period that contains `day`.
pub fn anchor_start(payday: u32, day: NaiveDate) -> Result<NaiveDate> {
    let payday = validate_payday(payday)?;
    let same_month = day
        .with_day(payday)
        .ok_or(LedgerError::DateOutOfRange(day))?;
    if day.day() >= payday {
        Ok(same_month)
    } else {
        same_month
            .checked_sub_months(Months::new(1))
            .ok_or(LedgerError::DateOutOfRange(day))
    }
}

/// The single period starting at `start`.
pub fn period_from(start: NaiveDate) -> Result<Period> {
    let next = start
        .checked_add_months(Months::new(1))
        .ok_or(LedgerError::DateOutOfRange(start))?;
    let end = next.pred_opt().ok_or(LedgerError::DateOutOfRange(next))?;
    Ok(Period {
        label: label_for(start),
        start,
        end,
    })
}

/// Period that contains `day`.
pub fn period_containing(payday: u32, day: NaiveDate) -> Result<Period> {
    period_from(anchor_start(payday, day)?)
}

/// Abbreviated month and year of the period start, e.g. "Jan 2024".
pub fn label_for(start: NaiveDate) -> String {
    start.format("%b %Y").to_string()
}

/// Contiguous periods from the one holding `earliest` through the one
/// holding `until`, oldest first.
pub fn partition(payday: u32, earliest: NaiveDate, until: NaiveDate) -> Result<Vec<Period>> {
    let mut periods = Vec::new();
    let mut start = anchor_start(payday, earliest)?;
    while start <= until {
        let period = period_from(start)?;
        start = period
            .end
            .succ_opt()
            .ok_or(LedgerError::DateOutOfRange(period.end))?;
        periods.push(period);
    }
    Ok(periods)
}

/// Periods covering every transaction up to `today`. Empty without
/// transactions.
pub fn partition_transactions(
    payday: u32,
    transactions: &[Transaction],
    today: NaiveDate,
) -> Result<Vec<Period>> {
    let days = transactions.iter().map(Transaction::day);
    let Some(earliest) = days.clone().min() else {
        return Ok(Vec::new());
    };
    // a transaction dated after today still needs a period
    let until = days.max().map_or(today, |latest| latest.max(today));
    partition(payday, earliest, until)
}
