// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, command, value_parser};

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    command!()
        .arg(
            Arg::new("data")
                .long("data")
                .global(true)
                .env("SALDO_DATA")
                .value_name("PATH")
                .help("Ledger file to use instead of the platform data dir"),
        )
        .subcommand(Command::new("init").about("Create the ledger file if missing"))
        .subcommand(
            Command::new("tx")
                .about("Record, list and delete transactions")
                .subcommand(
                    Command::new("add")
                        .arg(
                            Arg::new("amount")
                                .required(true)
                                .allow_hyphen_values(true)
                                .help("Amount in CHF"),
                        )
                        .arg(Arg::new("desc").long("desc").short('d'))
                        .arg(Arg::new("category").long("category").short('c')),
                )
                .subcommand(json_args(
                    Command::new("list")
                        .arg(Arg::new("search").long("search").short('s'))
                        .arg(Arg::new("category").long("category").short('c'))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(Command::new("rm").arg(Arg::new("id").required(true))),
        )
        .subcommand(
            Command::new("category")
                .about("Manage category names")
                .subcommand(Command::new("add").arg(Arg::new("name").required(true)))
                .subcommand(json_args(Command::new("list")))
                .subcommand(
                    Command::new("rename")
                        .arg(Arg::new("old").required(true))
                        .arg(Arg::new("new").required(true)),
                )
                .subcommand(Command::new("rm").arg(Arg::new("name").required(true))),
        )
        .subcommand(
            Command::new("budget")
                .about("Budget per period and payday anchor")
                .subcommand(
                    Command::new("set").arg(
                        Arg::new("amount")
                            .required(true)
                            .allow_hyphen_values(true),
                    ),
                )
                .subcommand(
                    Command::new("payday").arg(
                        Arg::new("day")
                            .required(true)
                            .value_parser(value_parser!(u32)),
                    ),
                )
                .subcommand(Command::new("show")),
        )
        .subcommand(
            Command::new("settings")
                .about("Owner name and theme")
                .subcommand(Command::new("name").arg(Arg::new("name").required(true)))
                .subcommand(Command::new("theme").arg(Arg::new("theme").required(true))),
        )
        .subcommand(
            Command::new("report")
                .about("Period savings and summaries")
                .subcommand(json_args(
                    Command::new("summary").arg(
                        Arg::new("date")
                            .long("date")
                            .help("Report as of YYYY-MM-DD instead of today"),
                    ),
                ))
                .subcommand(json_args(Command::new("periods")))
                .subcommand(json_args(Command::new("categories"))),
        )
        .subcommand(
            Command::new("export")
                .about("Write grouped exports of all transactions")
                .subcommand(
                    Command::new("csv").arg(Arg::new("dir").long("dir").default_value(".")),
                )
                .subcommand(
                    Command::new("doc").arg(Arg::new("dir").long("dir").default_value(".")),
                ),
        )
}
