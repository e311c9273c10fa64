// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::errors::WalletError;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "ZenWallet", "zenwallet"));

/// A flat string key-value slot, the local equivalent of browser storage.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, WalletError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), WalletError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, WalletError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), WalletError> {
        (**self).set_item(key, value)
    }
}

impl KeyValueStore for Connection {
    fn get_item(&self, key: &str) -> Result<Option<String>, WalletError> {
        let v = self
            .query_row(
                "SELECT value FROM kv_store WHERE key=?1",
                params![key],
                |r| r.get(0),
            )
            .optional()?;
        Ok(v)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), WalletError> {
        self.execute(
            "INSERT INTO kv_store(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}

/// Process-local storage, used for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let s = Self::new();
        s.items.borrow_mut().insert(key.to_string(), value.to_string());
        s
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, WalletError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), WalletError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("zenwallet.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    open_at(&db_path()?)
}

pub fn open_at(path: &Path) -> Result<Connection> {
    let conn =
        Connection::open(path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS kv_store(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );
    "#,
    )?;
    Ok(())
}
