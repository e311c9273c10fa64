// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::errors::WalletError;
use anyhow::Result;
use chrono::{DateTime, Local, Locale, TimeZone};
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};

pub const DEFAULT_LOCALE: &str = "en_US";

/// Inputs the aggregation functions need besides the transactions: which
/// instant counts as "now", the time zone whose rules decide each
/// transaction's calendar day, and which locale weekday and month names
/// come from.
#[derive(Debug, Clone)]
pub struct ReportOptions<Tz: TimeZone = Local> {
    pub now: DateTime<Tz>,
    pub locale: Locale,
}

impl<Tz: TimeZone> ReportOptions<Tz> {
    pub fn new(now: DateTime<Tz>, locale: Locale) -> Self {
        Self { now, locale }
    }

    pub fn timezone(&self) -> Tz {
        self.now.timezone()
    }
}

impl ReportOptions<Local> {
    /// Local wall clock and zone rules with the given locale.
    pub fn local(locale: Locale) -> Self {
        Self::new(Local::now(), locale)
    }
}

pub fn parse_locale(s: &str) -> Result<Locale, WalletError> {
    Locale::try_from(s.trim()).map_err(|_| WalletError::UnknownLocale(s.to_string()))
}

pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let v: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key=?1",
            params![key],
            |r| r.get(0),
        )
        .optional()?;
    Ok(v)
}

pub fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![key, value],
    )?;
    Ok(())
}

/// Stored locale, or `en_US` when unset or no longer recognised.
pub fn get_locale(conn: &Connection) -> Result<Locale> {
    let stored = get_setting(conn, "locale")?;
    let name = stored.as_deref().unwrap_or(DEFAULT_LOCALE);
    match parse_locale(name) {
        Ok(l) => Ok(l),
        Err(e) => {
            warn!("{}; using {}", e, DEFAULT_LOCALE);
            Ok(Locale::en_US)
        }
    }
}

pub fn set_locale(conn: &Connection, name: &str) -> Result<Locale> {
    let locale = parse_locale(name)?;
    set_setting(conn, "locale", name.trim())?;
    Ok(locale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_schema;

    fn conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn locale_defaults_to_en_us() {
        let conn = conn();
        assert_eq!(get_locale(&conn).unwrap(), Locale::en_US);
    }

    #[test]
    fn locale_is_validated_and_stored() {
        let conn = conn();
        assert_eq!(set_locale(&conn, "fr_FR").unwrap(), Locale::fr_FR);
        assert_eq!(get_locale(&conn).unwrap(), Locale::fr_FR);
        assert!(set_locale(&conn, "xx_NOPE").is_err());
        assert_eq!(get_setting(&conn, "locale").unwrap().as_deref(), Some("fr_FR"));
    }

    #[test]
    fn stale_locale_falls_back() {
        let conn = conn();
        set_setting(&conn, "locale", "garbage").unwrap();
        assert_eq!(get_locale(&conn).unwrap(), Locale::en_US);
    }
}
