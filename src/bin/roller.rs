use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use number_distributor::error::Result;
use number_distributor::input::parse_range_bound;
use number_distributor::logging::init_logging;
use number_distributor::render::render_roll;
use number_distributor::rng::Rng;
use number_distributor::roller::Roller;

const EXIT_INVALID_INPUT: u8 = 2;
const EXHAUSTED_LINE: &str = "All numbers rolled.";

#[derive(Parser, Debug)]
#[command(author, version, about = "Roll numbers from a range without repeats")]
struct Cli {
    #[arg(long, allow_hyphen_values = true)]
    min: String,
    #[arg(long, allow_hyphen_values = true)]
    max: String,
    /// Roll this many numbers, then stop
    #[arg(long, conflicts_with = "all")]
    count: Option<usize>,
    /// Roll until the range is exhausted
    #[arg(long)]
    all: bool,
    #[arg(long)]
    seed: Option<u32>,
}

fn main() -> ExitCode {
    init_logging("warn");
    let cli = Cli::parse();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    ExitCode::from(run(&cli, stdin.lock(), &mut stdout))
}

fn run(cli: &Cli, input: impl BufRead, out: &mut impl Write) -> u8 {
    let mut roller = Roller::new();
    if let Err(err) = start(&mut roller, &cli.min, &cli.max) {
        eprintln!("{err}");
        return EXIT_INVALID_INPUT;
    }
    let mut rng = Rng::from_optional_seed(cli.seed);

    let limit = if cli.all {
        Some(roller.remaining_count())
    } else {
        cli.count
    };
    let result = match limit {
        Some(limit) => write_lines(out, &roll_batch(&mut roller, &mut rng, limit)),
        None => run_interactive(&mut roller, &mut rng, input, out, &cli.min, &cli.max),
    };
    match result {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(%err, "failed to write output");
            1
        }
    }
}

fn start(roller: &mut Roller, min_raw: &str, max_raw: &str) -> Result<()> {
    let min = parse_range_bound(min_raw)?;
    let max = parse_range_bound(max_raw)?;
    roller.start(min, max)
}

fn roll_line(roller: &Roller, value: i64) -> String {
    let drawn = roller.drawn().len();
    render_roll(value, drawn, drawn + roller.remaining_count())
}

fn roll_batch(roller: &mut Roller, rng: &mut Rng, limit: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for _ in 0..limit {
        let Some(value) = roller.roll_next(rng) else {
            break;
        };
        lines.push(roll_line(roller, value));
    }
    if roller.is_exhausted() {
        lines.push(EXHAUSTED_LINE.to_string());
    }
    lines
}

#[derive(Debug, PartialEq, Eq)]
enum Step {
    Print(Vec<String>),
    Quit,
    Fail(u8),
}

fn handle_line(
    roller: &mut Roller,
    rng: &mut Rng,
    line: &str,
    min_raw: &str,
    max_raw: &str,
) -> Step {
    match line.trim() {
        "q" | "quit" => Step::Quit,
        "r" | "restart" => match start(roller, min_raw, max_raw) {
            Ok(()) => Step::Print(vec!["Restarted.".to_string()]),
            Err(err) => {
                eprintln!("{err}");
                Step::Fail(EXIT_INVALID_INPUT)
            }
        },
        _ => match roller.roll_next(rng) {
            Some(value) => {
                let mut lines = vec![roll_line(roller, value)];
                if roller.is_exhausted() {
                    lines.push(EXHAUSTED_LINE.to_string());
                }
                Step::Print(lines)
            }
            None => Step::Print(vec![format!("{EXHAUSTED_LINE} Enter 'r' to restart.")]),
        },
    }
}

fn run_interactive(
    roller: &mut Roller,
    rng: &mut Rng,
    input: impl BufRead,
    out: &mut impl Write,
    min_raw: &str,
    max_raw: &str,
) -> io::Result<u8> {
    writeln!(out, "Enter to roll, 'r' to restart, 'q' to quit.")?;
    for line in input.lines() {
        match handle_line(roller, rng, &line?, min_raw, max_raw) {
            Step::Print(lines) => {
                write_lines(out, &lines)?;
            }
            Step::Quit => break,
            Step::Fail(code) => return Ok(code),
        }
        out.flush()?;
    }
    Ok(0)
}

fn write_lines(out: &mut impl Write, lines: &[String]) -> io::Result<u8> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(0)
}
