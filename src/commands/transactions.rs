// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::group_by_date_label;
use crate::commands::reports::report_options;
use crate::config::ReportOptions;
use crate::models::{DateGroup, NewTransaction, Transaction, TransactionType};
use crate::registry;
use crate::store::{snapshot, TransactionStore};
use crate::utils::{fmt_signed, maybe_print_json, parse_instant, pretty_table};
use anyhow::{bail, Context, Result};
use chrono::{Local, TimeZone};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let t = add(conn, sub)?;
            println!(
                "Recorded {} {} in {} ({})",
                t.r#type,
                fmt_signed(&t),
                registry::resolve(&t.category).name,
                t.note
            );
        }
        Some(("list", sub)) => list(conn, sub)?,
        _ => {}
    }
    Ok(())
}

/// Turn `tx add` arguments into raw form input. The amount text is passed
/// through unparsed; the store validates it.
pub fn form_input(sub: &clap::ArgMatches) -> Result<NewTransaction> {
    let amount = sub
        .get_one::<String>("amount")
        .cloned()
        .unwrap_or_default();
    let r#type = match sub.get_one::<String>("type") {
        Some(t) => t.parse::<TransactionType>().map_err(anyhow::Error::msg)?,
        None => TransactionType::Expense,
    };
    let category = sub
        .get_one::<String>("category")
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "other".to_string());
    let note = sub.get_one::<String>("note").cloned();
    let date = match sub.get_one::<String>("date") {
        Some(s) => Some(parse_instant(s, &Local)?),
        None => None,
    };
    Ok(NewTransaction {
        amount,
        r#type,
        category,
        note,
        date,
    })
}

pub fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<Transaction> {
    let input = form_input(sub)?;
    if registry::lookup(&input.category).is_none() {
        log::warn!(
            "category '{}' is not in the registry, it will show as Other",
            input.category
        );
    }
    let mut store = TransactionStore::open(conn);
    let t = store.append(input).context("Transaction not recorded")?;
    if !store.is_persisted() {
        bail!("Transaction could not be saved to storage");
    }
    Ok(t)
}

/// Group the newest `limit` transactions (all when `None`) by date label.
pub fn list_groups<'a, Tz: TimeZone>(
    transactions: &'a [Transaction],
    opts: &ReportOptions<Tz>,
    limit: Option<usize>,
) -> Vec<DateGroup<'a>> {
    let n = limit.unwrap_or(transactions.len()).min(transactions.len());
    group_by_date_label(&transactions[..n], opts)
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let opts = report_options(conn, sub)?;
    let transactions = snapshot(conn);
    let tz = opts.timezone();
    let groups = list_groups(
        &transactions,
        &opts,
        sub.get_one::<usize>("limit").copied(),
    );
    if maybe_print_json(json_flag, jsonl_flag, &groups)? {
        return Ok(());
    }
    if groups.is_empty() {
        println!("No transactions yet.");
        return Ok(());
    }
    for g in &groups {
        println!("{}", g.label);
        let rows: Vec<Vec<String>> = g
            .transactions
            .iter()
            .map(|t| {
                let cat = registry::resolve(&t.category);
                vec![
                    t.note.clone(),
                    format!("{} {}", cat.icon.name(), cat.name),
                    t.date
                        .with_timezone(&tz)
                        .format("%H:%M")
                        .to_string(),
                    fmt_signed(t),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Note", "Category", "Time", "Amount"], rows)
        );
    }
    Ok(())
}
