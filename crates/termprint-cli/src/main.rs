//! termprint - compose and print plain-text reports.

use std::ffi::OsString;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use termprint_core::{List, Printer, Text};
use tracing_subscriber::EnvFilter;

mod error;
mod report;

use error::CliError;
use report::Report;

#[derive(Parser, Debug)]
#[command(name = "termprint")]
#[command(about = "Compose and print a plain-text report")]
#[command(version)]
struct Cli {
    /// Lines of text printed after the title and report
    lines: Vec<String>,

    /// Title printed first
    #[arg(short, long)]
    title: Option<String>,

    /// YAML report file ("-" reads stdin)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Bullet used for list items
    #[arg(long, default_value = List::DEFAULT_BULLET)]
    bullet: String,

    /// Disable ANSI colors (also set by a non-empty NO_COLOR)
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        // Reader went away (e.g. `| head`); nothing left to report.
        Err(e) if e.is_broken_pipe() => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let report = cli.file.as_deref().map(load_report).transpose()?;

    let mut printer = Printer::new();
    printer.set_no_color(no_color_requested(
        cli.no_color,
        std::env::var_os("NO_COLOR"),
    ));
    compose(cli, report.as_ref(), &mut printer)?;
    printer.print()?;
    Ok(())
}

/// Whether colors are turned off by the flag or the `NO_COLOR` convention.
fn no_color_requested(flag: bool, env: Option<OsString>) -> bool {
    flag || env.is_some_and(|v| !v.is_empty())
}

fn load_report(path: &Path) -> Result<Report, CliError> {
    let yaml = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)?
    };
    tracing::debug!(path = %path.display(), bytes = yaml.len(), "loaded report");
    Report::from_yaml(&yaml)
}

/// Add the title, the report and the positional lines, in that order.
fn compose<W: Write>(
    cli: &Cli,
    report: Option<&Report>,
    printer: &mut Printer<W>,
) -> Result<(), CliError> {
    if let Some(title) = &cli.title {
        let styled = printer.colors().bold(title);
        printer.add_title(styled);
    }
    if let Some(report) = report {
        if report.is_empty() {
            tracing::warn!("report has no title or components");
        }
        report.apply(printer, &cli.bullet)?;
    }
    printer.extend(cli.lines.iter().cloned().map(Text::new));

    if printer.is_empty() {
        return Err(CliError::EmptyReport);
    }
    tracing::debug!(components = printer.len(), "composed");
    Ok(())
}
