//! `qx` binary

use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use qx_cli::{cli::build_cli, commands, AnalyzerConfig, OutputFormat};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt as tracing_fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    init_tracing(matches.get_flag("log-json"));

    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => AnalyzerConfig::load(path)?,
        None => AnalyzerConfig::default(),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match matches.subcommand() {
        Some(("list", args)) => {
            let session = commands::open_session(matrix_path(args)?, None, &config)?;
            commands::list(&session, args.get_flag("csv"), &mut out)?;
        }
        Some(("analyze", args)) => {
            let colors = args.get_one::<PathBuf>("colors").map(PathBuf::as_path);
            let session = commands::open_session(matrix_path(args)?, colors, &config)?;
            let defect = required_str(args, "defect")?;
            let format: OutputFormat = required_str(args, "format")?.parse()?;
            commands::analyze(&session, defect, format, args.get_flag("raw"), &mut out)?;
        }
        Some(("search", args)) => {
            let session = commands::open_session(matrix_path(args)?, None, &config)?;
            commands::search(&session, required_str(args, "keyword")?, &mut out)?;
        }
        Some((other, _)) => bail!("unknown command: {other}"),
        None => bail!("no command given"),
    }

    out.flush().context("flushing stdout")?;
    Ok(())
}

fn matrix_path(args: &ArgMatches) -> Result<&Path> {
    args.get_one::<PathBuf>("file")
        .map(PathBuf::as_path)
        .context("missing matrix file")
}

fn required_str<'a>(args: &'a ArgMatches, id: &str) -> Result<&'a str> {
    args.get_one::<String>(id)
        .map(String::as_str)
        .with_context(|| format!("missing argument: {id}"))
}

/// Logs go to stderr so stdout stays machine-readable
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let text_layer = (!json).then(|| tracing_fmt::layer().with_writer(std::io::stderr));
    let json_layer = json.then(|| tracing_fmt::layer().json().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(text_layer)
        .with(json_layer)
        .init();
}
