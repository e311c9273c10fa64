// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{compute_totals, weekly_series};
use crate::config::{get_locale, parse_locale, ReportOptions};
use crate::models::Transaction;
use crate::store::snapshot;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

/// Reports read the collection once and never write to storage.
pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let transactions = snapshot(conn);
    match m.subcommand() {
        Some(("summary", sub)) => summary(&transactions, sub)?,
        Some(("weekly", sub)) => weekly(conn, &transactions, sub)?,
        _ => {}
    }
    Ok(())
}

/// Local clock plus the `--locale` override, or the stored locale setting.
pub fn report_options(conn: &Connection, sub: &clap::ArgMatches) -> Result<ReportOptions> {
    let locale = match sub.try_get_one::<String>("locale").ok().flatten() {
        Some(name) => parse_locale(name)?,
        None => get_locale(conn)?,
    };
    Ok(ReportOptions::local(locale))
}

fn summary(transactions: &[Transaction], sub: &clap::ArgMatches) -> Result<()> {
    let t = compute_totals(transactions);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &t)? {
        let rows = vec![
            vec!["Income".to_string(), fmt_money(&t.income)],
            vec!["Expenses".to_string(), fmt_money(&t.expense)],
            vec!["Balance".to_string(), fmt_money(&t.balance)],
        ];
        println!("{}", pretty_table(&["", "Amount"], rows));
    }
    Ok(())
}

fn weekly(conn: &Connection, transactions: &[Transaction], sub: &clap::ArgMatches) -> Result<()> {
    let opts = report_options(conn, sub)?;
    let data = weekly_series(transactions, &opts);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|d| {
                let day = if d.is_today {
                    format!("{} *", d.day)
                } else {
                    d.day.clone()
                };
                vec![day, d.date.to_string(), fmt_money(&d.amount)]
            })
            .collect();
        println!("{}", pretty_table(&["Day", "Date", "Spent"], rows));
    }
    Ok(())
}
