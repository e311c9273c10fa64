// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::KeyValueStore;
use crate::registry;
use crate::store::read_persisted;
use crate::utils::pretty_table;
use anyhow::Result;
use std::collections::HashSet;

pub fn handle<S: KeyValueStore>(storage: &S) -> Result<()> {
    let rows = diagnose(storage);
    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

/// Inspect the stored collection without triggering the seed fallback.
pub fn diagnose<S: KeyValueStore>(storage: &S) -> Vec<Vec<String>> {
    let mut rows = Vec::new();

    let transactions = match read_persisted(storage) {
        Ok(Some(t)) => t,
        Ok(None) => {
            rows.push(vec![
                "no_saved_data".into(),
                "demo transactions will be created on first use".into(),
            ]);
            return rows;
        }
        Err(e) => {
            rows.push(vec!["unreadable_storage".into(), e.to_string()]);
            return rows;
        }
    };

    // 1) Categories the registry does not know; these display as Other
    let mut seen_cats = HashSet::new();
    for t in &transactions {
        if registry::lookup(&t.category).is_none() && seen_cats.insert(t.category.as_str()) {
            rows.push(vec!["dangling_category".into(), t.category.clone()]);
        }
    }

    // 2) Ids must be unique across the collection
    let mut ids = HashSet::new();
    for t in &transactions {
        if !ids.insert(t.id.as_str()) {
            rows.push(vec!["duplicate_id".into(), t.id.clone()]);
        }
    }

    // 3) Amounts are stored unsigned
    for t in &transactions {
        if t.amount.is_sign_negative() && !t.amount.is_zero() {
            rows.push(vec!["negative_amount".into(), format!("{} {}", t.id, t.amount)]);
        }
    }

    rows
}
