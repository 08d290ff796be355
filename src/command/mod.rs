mod common;
pub mod analyze;

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};
use colored::Colorize;
use const_format::str_repeat;
use crate::{
    Error,
    err::{validate_param, add_path},
    seq::motif::{self, Rule, MotifResult},
};
use common::{print_version, create_writer};

struct Args {
    motifs: bool,
    list_rules: bool,
    rules: Option<PathBuf>,
    report: Option<PathBuf>,
    verbosity: log::LevelFilter,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            motifs: false,
            list_rules: false,
            rules: None,
            report: None,
            verbosity: log::LevelFilter::Info,
        }
    }
}

fn print_help() {
    const KEY: usize = 16;
    const VAL: usize = 4;
    const EMPTY: &'static str = str_repeat!(" ", KEY + VAL + 5);

    print_version();
    println!("\n{}", "Compute simple statistics over DNA sequences, entered interactively.".yellow());
    println!("GC content, mutation pattern occurrences, positional similarity and marker patterns.");

    println!("\n{} {} [arguments]", "Usage:".bold(), env!("CARGO_PKG_NAME"));

    println!("\n{}", "Motif scan:".bold());
    println!("    {:KEY$} {:VAL$}  Scan sequence 1 with the default motif catalogue.",
        "-m, --motifs".green(), "");
    println!("    {:KEY$} {:VAL$}  Load motif catalogue from a JSON file (implies -m).\n\
        {EMPTY}  Array of objects with fields id, name, category and regex or pattern.",
        "-r, --rules".green(), "FILE".yellow());
    println!("    {:KEY$} {:VAL$}  Write motif scan results as CSV (implies -m).\n\
        {EMPTY}  Use - to write to stdout.",
        "-o, --report".green(), "FILE".yellow());
    println!("    {:KEY$} {:VAL$}  List the motif catalogue (default or from -r) and exit.",
        "-l, --list-rules".green(), "");

    println!("\n{}", "Other parameters:".bold());
    println!("    {:KEY$} {:VAL$}  Print debug messages.", "-v, --verbose".green(), "");
    println!("    {:KEY$} {:VAL$}  Print only warnings and errors.", "-q, --quiet".green(), "");
    println!("    {:KEY$} {:VAL$}  Show this help message.", "-h, --help".green(), "");
    println!("    {:KEY$} {:VAL$}  Show version.", "-V, --version".green(), "");
}

fn parse_args(argv: &[String]) -> Result<Args, lexopt::Error> {
    use lexopt::prelude::*;
    let mut args = Args::default();
    let mut parser = lexopt::Parser::from_args(argv);

    while let Some(arg) = parser.next()? {
        match arg {
            Short('m') | Long("motifs") => args.motifs = true,
            Short('r') | Long("rules") => args.rules = Some(parser.value()?.parse()?),
            Short('o') | Long("report") => args.report = Some(parser.value()?.parse()?),
            Short('l') | Long("list-rules") => args.list_rules = true,

            Short('v') | Long("verbose") => args.verbosity = log::LevelFilter::Debug,
            Short('q') | Long("quiet") => args.verbosity = log::LevelFilter::Warn,
            Short('V') | Long("version") => {
                print_version();
                std::process::exit(0);
            }
            Short('h') | Long("help") => {
                print_help();
                std::process::exit(0);
            }
            _ => Err(arg.unexpected())?,
        }
    }
    Ok(args)
}

fn process_args(mut args: Args) -> Result<Args, Error> {
    args.motifs |= args.rules.is_some() || args.report.is_some();
    if let Some(filename) = &args.rules {
        validate_param!(filename.is_file(), "Motif catalogue {} does not exist",
            crate::ext::fmt::path(filename));
    }
    Ok(args)
}

/// Motif catalogue: loaded from the file, default, or none if motif scan is not needed.
fn select_rules(args: &Args) -> Result<Option<Vec<Rule>>, Error> {
    Ok(match &args.rules {
        Some(filename) => Some(motif::load_rules(filename)?),
        None if args.motifs || args.list_rules => Some(motif::DEFAULT_RULES.clone()),
        None => None,
    })
}

/// Writes motif scan results as CSV into the file (or stdout if filename is `-`).
fn write_report(filename: &Path, results: &[MotifResult]) -> Result<(), Error> {
    let mut out = create_writer(filename)?;
    motif::write_csv(&mut out, results).map_err(add_path!(filename))?;
    out.flush().map_err(add_path!(filename))?;
    log::info!("Motif report written to {}", crate::ext::fmt::path(filename));
    Ok(())
}

/// Runs the tool with command-line arguments (without the program name).
pub fn run(argv: &[String]) -> Result<(), Error> {
    let args = process_args(parse_args(argv)?)?;
    log::set_max_level(args.verbosity);
    let rules = select_rules(&args)?;

    if args.list_rules {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        motif::write_catalog(&mut out, rules.as_deref().unwrap_or(&[])).map_err(add_path!(!))?;
        out.flush().map_err(add_path!(!))?;
        return Ok(());
    }

    let results = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        analyze::interactive(&mut stdin.lock(), &mut stdout.lock(), rules.as_deref())?
    };

    if let Some(filename) = &args.report {
        write_report(filename, &results)?;
    }
    Ok(())
}
