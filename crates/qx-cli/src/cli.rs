//! Command-line definition

use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

fn matrix_arg() -> Arg {
    Arg::new("file")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Matrix workbook (.xls, .xlsx, .xlsb, .ods)")
}

/// Build the `qx` command
#[must_use]
pub fn build_cli() -> Command {
    Command::new("qx")
        .version(crate::VERSION)
        .about("Resolve QX matrix defects into sub-assemblies, components and parameters")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON on stderr"),
        )
        .subcommand(
            Command::new("list")
                .about("List every defect in the matrix")
                .arg(matrix_arg())
                .arg(
                    Arg::new("csv")
                        .long("csv")
                        .action(ArgAction::SetTrue)
                        .help("Output as CSV"),
                ),
        )
        .subcommand(
            Command::new("analyze")
                .about("Resolve the hierarchy of one defect")
                .arg(matrix_arg())
                .arg(
                    Arg::new("defect")
                        .required(true)
                        .help("Defect name (case-insensitive, partial match)"),
                )
                .arg(
                    Arg::new("colors")
                        .long("colors")
                        .value_parser(value_parser!(PathBuf))
                        .help("Colour table JSON extracted from the same sheet"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("text")
                        .value_parser(["text", "json", "csv"])
                        .help("Output format"),
                )
                .arg(
                    Arg::new("raw")
                        .long("raw")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("format")
                        .help("Print filtered and unfiltered results with colour status as JSON"),
                ),
        )
        .subcommand(
            Command::new("search")
                .about("Find defects whose name contains a keyword")
                .arg(matrix_arg())
                .arg(Arg::new("keyword").required(true).help("Search keyword")),
        )
}
