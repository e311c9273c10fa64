// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::snapshot;
use anyhow::{bail, Result};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(conn, sub),
        _ => Ok(()),
    }
}

fn export_transactions(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub
        .get_one::<String>("format")
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "csv".to_string());
    let out = sub.get_one::<String>("out").map(|s| s.trim()).unwrap_or("");
    if out.is_empty() {
        bail!("Missing --out path");
    }
    if fmt != "csv" && fmt != "json" {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }

    let transactions = snapshot(conn);

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["id", "date", "type", "category", "amount", "note"])?;
            for t in &transactions {
                wtr.write_record([
                    t.id.clone(),
                    t.date.to_rfc3339(),
                    t.r#type.to_string(),
                    t.category.clone(),
                    t.amount.to_string(),
                    t.note.clone(),
                ])?;
            }
            wtr.flush()?;
        }
        _ => {
            // Same layout as the storage slot, so the file can be read back.
            std::fs::write(out, serde_json::to_string_pretty(&transactions)?)?;
        }
    }
    println!("Exported {} transactions to {}", transactions.len(), out);
    Ok(())
}
