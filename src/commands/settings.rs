// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{get_setting, set_locale, DEFAULT_LOCALE};
use anyhow::{bail, Result};
use rusqlite::Connection;

const KNOWN_KEYS: &[&str] = &["locale"];

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("get", sub)) => {
            let key = checked_key(sub)?;
            println!("{}", get(conn, key)?);
        }
        Some(("set", sub)) => {
            let key = checked_key(sub)?;
            let value = sub.get_one::<String>("value").map(String::as_str).unwrap_or("");
            set(conn, key, value)?;
            println!("{} = {}", key, value.trim());
        }
        _ => {}
    }
    Ok(())
}

fn checked_key(sub: &clap::ArgMatches) -> Result<&str> {
    let key = sub.get_one::<String>("key").map(String::as_str).unwrap_or("");
    if !KNOWN_KEYS.contains(&key) {
        bail!("Unknown setting '{}' (known: {})", key, KNOWN_KEYS.join(", "));
    }
    Ok(key)
}

pub fn get(conn: &Connection, key: &str) -> Result<String> {
    let v = get_setting(conn, key)?;
    Ok(match key {
        "locale" => v.unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
        _ => v.unwrap_or_default(),
    })
}

pub fn set(conn: &Connection, key: &str, value: &str) -> Result<()> {
    match key {
        "locale" => {
            set_locale(conn, value)?;
        }
        other => bail!("Unknown setting '{}'", other),
    }
    Ok(())
}
