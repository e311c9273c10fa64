// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use serde_json::json;
use tempfile::tempdir;
use zenwallet::db::{init_schema, KeyValueStore};
use zenwallet::store::STORAGE_KEY;
use zenwallet::{cli, commands::exporter};

fn base_conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    init_schema(&conn).unwrap();
    conn.set_item(
        STORAGE_KEY,
        r#"[{"id":"t1","amount":12.34,"type":"expense","category":"food","date":"2025-01-02T10:00:00Z","note":"Weekly run"}]"#,
    )
    .unwrap();
    conn
}

fn export(conn: &Connection, format: &str, out: &str) -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches_from([
        "zenwallet",
        "export",
        "transactions",
        "--format",
        format,
        "--out",
        out,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(conn, export_m)
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn export_transactions_as_storage_json() {
    let conn = base_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    export(&conn, "json", &out_path.to_string_lossy()).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        parsed,
        json!([
            {
                "id": "t1",
                "amount": 12.34,
                "type": "expense",
                "category": "food",
                "date": "2025-01-02T10:00:00Z",
                "note": "Weekly run"
            }
        ])
    );
}

#[test]
fn export_transactions_as_csv() {
    let conn = base_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    export(&conn, "CSV", &out_path.to_string_lossy()).unwrap();

    let mut rdr = csv::Reader::from_path(&out_path).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        ["id", "date", "type", "category", "amount", "note"]
    );
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(&rows[0][0], "t1");
    assert_eq!(&rows[0][2], "expense");
    assert_eq!(&rows[0][4], "12.34");
}

#[test]
fn export_transactions_rejects_unknown_format() {
    let conn = base_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.unknown");
    assert!(export(&conn, "xml", &out_path.to_string_lossy()).is_err());
    assert!(!out_path.exists());
}

#[test]
fn export_of_fresh_storage_does_not_save_demo_data() {
    let conn = Connection::open_in_memory().unwrap();
    init_schema(&conn).unwrap();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    export(&conn, "json", &out_path.to_string_lossy()).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed.len(), 4);
    assert_eq!(conn.get_item(STORAGE_KEY).unwrap(), None);
}
