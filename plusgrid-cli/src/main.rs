use std::fmt::Write as _;
use std::fs;
use std::io::{self, Read, Write};

use anyhow::{bail, Context};
use facet::Facet;
use facet_args as args;
use plusgrid::CountOptions;

/// Count plus signs painted by a stroke path
#[derive(Facet, Debug)]
struct Args {
    /// Input file (reads from stdin if not provided)
    #[facet(default, args::positional)]
    input: Option<String>,

    /// Output file (writes to stdout if not provided)
    #[facet(default, args::named, args::short = 'o')]
    output: Option<String>,

    /// Also print each plus-sign center as "x y"
    #[facet(args::named)]
    centers: bool,

    /// Accept lowercase direction letters
    #[facet(args::named)]
    lowercase: bool,

    /// Reject zero-length strokes instead of skipping them
    #[facet(args::named)]
    strict: bool,

    /// Enable debug logging
    #[facet(args::named, args::short = 'v')]
    verbose: bool,
}

/// Stroke input as read from a file
#[derive(Debug, PartialEq)]
struct Input {
    stroke_count: usize,
    lengths: Vec<u64>,
    directions: String,
}

/// Parse `N`, then `N` lengths, then the directions.
///
/// Directions may be a single `ULDR...` token or one token per stroke.
/// Count mismatches are left to the library to report.
fn parse_input(text: &str) -> anyhow::Result<Input> {
    let mut tokens = text.split_whitespace();

    let Some(first) = tokens.next() else {
        bail!("empty input");
    };
    let stroke_count: usize = first
        .parse()
        .with_context(|| format!("invalid stroke count {first:?}"))?;

    // Every length needs its own token, so the text bounds the capacity
    let mut lengths = Vec::with_capacity(stroke_count.min(text.len()));
    for i in 0..stroke_count {
        let Some(token) = tokens.next() else {
            bail!("expected {stroke_count} lengths, found {i}");
        };
        let length: u64 = token
            .parse()
            .with_context(|| format!("invalid length {token:?} for stroke {i}"))?;
        lengths.push(length);
    }

    let directions: String = tokens.collect();

    Ok(Input {
        stroke_count,
        lengths,
        directions,
    })
}

/// Count (and optionally locate) the plus signs described by `text`
fn report(args: &Args, text: &str) -> anyhow::Result<String> {
    let input = parse_input(text)?;
    let options = CountOptions::new()
        .with_lowercase(args.lowercase)
        .with_reject_zero_length(args.strict);

    let mut out = String::new();
    if args.centers {
        let centers = plusgrid::find_plus_signs(
            input.stroke_count,
            &input.lengths,
            &input.directions,
            &options,
        )?;
        writeln!(out, "{}", centers.len())?;
        for c in &centers {
            writeln!(out, "{} {}", c.x, c.y)?;
        }
    } else {
        let count = plusgrid::count_plus_signs_with_options(
            input.stroke_count,
            &input.lengths,
            &input.directions,
            &options,
        )?;
        writeln!(out, "{count}")?;
    }
    Ok(out)
}

fn run(args: &Args) -> anyhow::Result<()> {
    let text = match &args.input {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    log::debug!("read {} bytes of input", text.len());

    let result = report(args, &text)?;

    match &args.output {
        Some(path) => fs::write(path, &result).with_context(|| format!("failed to write {path}")),
        None => io::stdout()
            .write_all(result.as_bytes())
            .context("failed to write stdout"),
    }
}

fn main() {
    let args: Args = match args::from_std_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
