// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(format!("Unknown transaction type '{}' (use income|expense)", other)),
        }
    }
}

/// A recorded income or expense. Field names and encodings match the
/// persisted JSON layout: `amount` is a JSON number, `date` an ISO-8601 instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub r#type: TransactionType,
    pub category: String,
    pub date: DateTime<Utc>,
    pub note: String,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.r#type == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.r#type == TransactionType::Expense
    }
}

/// Raw form input as handed over by the presentation layer.
///
/// `amount` is unparsed text; `note` and `date` are optional and get
/// defaulted by the store.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub amount: String,
    pub r#type: TransactionType,
    pub category: String,
    pub note: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

impl NewTransaction {
    /// Form defaults: an expense filed under `other`.
    pub fn expense(amount: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            r#type: TransactionType::Expense,
            category: "other".to_string(),
            note: None,
            date: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

/// One bar of the weekly spending chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailySpending {
    pub day: String,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub is_today: bool,
}

/// A labelled bucket of transactions, e.g. "Today".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateGroup<'a> {
    pub label: String,
    pub transactions: Vec<&'a Transaction>,
}
