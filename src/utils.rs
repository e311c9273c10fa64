// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::errors::WalletError;
use crate::models::{Transaction, TransactionType};
use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Digits with at most one decimal point and an optional sign. No exponents,
/// no digit separators.
static AMOUNT_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)$").ok());

/// Amounts stay below 10^13 so that every accepted value, at two decimal
/// places, survives the round trip through a JSON number.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_316_134_912, 2_328, 0, false, 0);

/// Parse user-entered amount text. Surrounding whitespace is ignored;
/// anything that is not a plain non-negative decimal with at most two
/// decimal places below [`MAX_AMOUNT`] is rejected.
pub fn parse_amount(s: &str) -> Result<Decimal, WalletError> {
    let t = s.trim();
    let plain = AMOUNT_RE.as_ref().is_some_and(|re| re.is_match(t));
    if !plain {
        return Err(WalletError::InvalidAmount(s.to_string()));
    }
    let d = Decimal::from_str(t).map_err(|_| WalletError::InvalidAmount(s.to_string()))?;
    if d.is_sign_negative() && !d.is_zero() {
        return Err(WalletError::NegativeAmount(s.to_string()));
    }
    if d >= MAX_AMOUNT {
        return Err(WalletError::AmountOutOfRange(s.to_string()));
    }
    if d.normalize().scale() > 2 {
        return Err(WalletError::TooPrecise(s.to_string()));
    }
    Ok(d)
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// Accept either a full RFC 3339 instant or a bare `YYYY-MM-DD`, which is
/// taken as midnight in `tz`.
pub fn parse_instant<Tz: TimeZone>(s: &str, tz: &Tz) -> Result<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    let day = parse_date(s)
        .with_context(|| format!("Invalid date '{}', expected RFC 3339 or YYYY-MM-DD", s))?;
    let midnight = day
        .and_hms_opt(0, 0, 0)
        .context("Midnight is always representable")?;
    tz.from_local_datetime(&midnight)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("Midnight does not exist on '{}' in this time zone", s))
}

/// `$1,234.56`; negative values render as `-$1,234.56`.
pub fn fmt_money(d: &Decimal) -> String {
    let rounded = d.round_dp(2).abs();
    let text = format!("{:.2}", rounded);
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if d.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}${}.{}", sign, grouped, frac_part)
}

/// List-row rendering: `+$2,500.00` for income, `-$45.50` for expenses.
pub fn fmt_signed(t: &Transaction) -> String {
    let sign = match t.r#type {
        TransactionType::Income => '+',
        TransactionType::Expense => '-',
    };
    format!("{}{}", sign, fmt_money(&t.amount))
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
        // If v is an array, stream each element; else stream single line
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
