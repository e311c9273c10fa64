// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;

use zenwallet::{cli, commands, db};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let db_override = matches.get_one::<String>("db").map(PathBuf::from);
    let conn = match &db_override {
        Some(path) => db::open_at(path)?,
        None => db::open_or_init()?,
    };

    match matches.subcommand() {
        Some(("init", _)) => {
            let path = match db_override {
                Some(p) => p,
                None => db::db_path()?,
            };
            println!("Wallet storage at {}", path.display());
        }
        Some(("tx", sub)) => commands::transactions::handle(&conn, sub)?,
        Some(("report", sub)) => commands::reports::handle(&conn, sub)?,
        Some(("category", sub)) => commands::categories::handle(sub)?,
        Some(("config", sub)) => commands::settings::handle(&conn, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&conn, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&conn)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
