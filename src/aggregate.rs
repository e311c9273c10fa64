// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived views over a transaction snapshot: totals, the seven-day
//! spending series and the date-labelled list grouping.
//!
//! Everything here is a pure function of its arguments. "Now", the time
//! zone and the locale come in through [`ReportOptions`]. Each transaction's
//! calendar day is taken under the zone rules in force at its own instant,
//! so entries recorded on the other side of a DST change keep their day.
//!
//! Sums saturate instead of overflowing; amounts are capped on entry, so
//! only hand-edited storage can get near the limit.

use crate::config::ReportOptions;
use crate::models::{DailySpending, DateGroup, Totals, Transaction, TransactionType};
use chrono::{DateTime, Datelike, Duration, Locale, NaiveDate, NaiveTime, TimeZone, Utc};
use rust_decimal::Decimal;

pub const TODAY: &str = "Today";
pub const YESTERDAY: &str = "Yesterday";

const WEEK_DAYS: i64 = 7;

pub fn compute_totals(transactions: &[Transaction]) -> Totals {
    let (income, expense) =
        transactions
            .iter()
            .fold((Decimal::ZERO, Decimal::ZERO), |(inc, exp), t| match t.r#type {
                TransactionType::Income => (inc.saturating_add(t.amount), exp),
                TransactionType::Expense => (inc, exp.saturating_add(t.amount)),
            });
    Totals {
        income,
        expense,
        balance: income.saturating_sub(expense),
    }
}

fn local_day<Tz: TimeZone>(date: &DateTime<Utc>, opts: &ReportOptions<Tz>) -> NaiveDate {
    date.with_timezone(&opts.timezone()).date_naive()
}

/// Format a calendar date on its own, independent of any zone offset.
fn format_day(day: NaiveDate, fmt: &str, locale: Locale) -> String {
    Utc.from_utc_datetime(&day.and_time(NaiveTime::default()))
        .format_localized(fmt, locale)
        .to_string()
}

/// Expense totals for the seven calendar days ending today, oldest first.
/// Always seven entries; days without expenses report zero.
pub fn weekly_series<Tz: TimeZone>(
    transactions: &[Transaction],
    opts: &ReportOptions<Tz>,
) -> Vec<DailySpending> {
    let today = opts.now.date_naive();
    (0..WEEK_DAYS)
        .rev()
        .map(|back| {
            let date = today - Duration::days(back);
            let amount = transactions
                .iter()
                .filter(|t| t.is_expense() && local_day(&t.date, opts) == date)
                .fold(Decimal::ZERO, |acc, t| acc.saturating_add(t.amount));
            DailySpending {
                day: format_day(date, "%a", opts.locale),
                date,
                amount,
                is_today: back == 0,
            }
        })
        .collect()
}

/// Human label for a transaction date: `Today`, `Yesterday`, or a short
/// localized calendar date such as `Mar 10` (with the year when it differs
/// from the current one).
pub fn date_label<Tz: TimeZone>(date: &DateTime<Utc>, opts: &ReportOptions<Tz>) -> String {
    let day = local_day(date, opts);
    let today = opts.now.date_naive();
    if day == today {
        TODAY.to_string()
    } else if today.pred_opt() == Some(day) {
        YESTERDAY.to_string()
    } else if day.year() == today.year() {
        format_day(day, "%b %-d", opts.locale)
    } else {
        format_day(day, "%b %-d, %Y", opts.locale)
    }
}

fn label_rank(label: &str) -> u8 {
    match label {
        TODAY => 0,
        YESTERDAY => 1,
        _ => 2,
    }
}

/// Bucket transactions by [`date_label`].
///
/// Buckets keep collection order internally. `Today` and `Yesterday` come
/// first; every other bucket stays in the order its label was first seen,
/// which is not necessarily chronological.
pub fn group_by_date_label<'a, Tz: TimeZone>(
    transactions: &'a [Transaction],
    opts: &ReportOptions<Tz>,
) -> Vec<DateGroup<'a>> {
    let mut groups: Vec<DateGroup<'a>> = Vec::new();
    for t in transactions {
        let label = date_label(&t.date, opts);
        match groups.iter_mut().find(|g| g.label == label) {
            Some(g) => g.transactions.push(t),
            None => groups.push(DateGroup {
                label,
                transactions: vec![t],
            }),
        }
    }
    groups.sort_by_key(|g| label_rank(&g.label));
    groups
}
