// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON document per line"),
    )
}

fn locale_arg() -> Arg {
    Arg::new("locale")
        .long("locale")
        .value_name("LOCALE")
        .help("Locale for weekday and month names, e.g. en_US (defaults to the stored setting)")
}

pub fn build_cli() -> Command {
    Command::new("zenwallet")
        .version(crate_version!())
        .about("ZenWallet: track income and expenses, see your balance and weekly spending")
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .value_name("PATH")
                .help("Use this database file instead of the platform data directory"),
        )
        .subcommand(Command::new("init").about("Create the wallet storage and print its location"))
        .subcommand(
            Command::new("tx")
                .about("Record and list transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .allow_hyphen_values(true)
                                .help("Amount, e.g. 45.50"),
                        )
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["income", "expense"])
                                .default_value("expense"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .default_value("other")
                                .help("Category id, see `category list`"),
                        )
                        .arg(
                            Arg::new("note")
                                .long("note")
                                .help("What was it for? Defaults to the category name"),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("RFC 3339 instant or YYYY-MM-DD (defaults to now)"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions grouped by day, newest first")
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        )
                        .arg(locale_arg()),
                )),
        )
        .subcommand(
            Command::new("report")
                .about("Balance and spending summaries")
                .subcommand(json_flags(
                    Command::new("summary").about("Income, expense and balance totals"),
                ))
                .subcommand(json_flags(
                    Command::new("weekly")
                        .about("Expenses for each of the last seven days")
                        .arg(locale_arg()),
                )),
        )
        .subcommand(
            Command::new("category")
                .about("Transaction categories")
                .subcommand(json_flags(Command::new("list").about("List categories"))),
        )
        .subcommand(
            Command::new("config")
                .about("Read or change settings")
                .subcommand(Command::new("get").arg(Arg::new("key").required(true)))
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("key").required(true))
                        .arg(Arg::new("value").required(true)),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export data")
                .subcommand(
                    Command::new("transactions")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv or json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(Command::new("doctor").about("Check stored data for problems"))
}
