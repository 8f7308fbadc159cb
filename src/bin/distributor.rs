use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use number_distributor::config::Config;
use number_distributor::history_store::HistoryStore;
use number_distributor::input::validate_distribution;
use number_distributor::logging::init_logging;
use number_distributor::render::{render_groups, render_history};
use number_distributor::rng::Rng;
use number_distributor::session::distribute;
use serde::Serialize;

const EXIT_INVALID_INPUT: u8 = 2;

#[derive(Parser, Debug)]
#[command(author, version, about = "Split a number range into evenly sized random groups")]
struct Cli {
    /// History file (overrides DISTRIBUTOR_HISTORY_PATH)
    #[arg(long, global = true)]
    history_path: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Shuffle [from, to] into groups and record the result
    Split {
        #[arg(long, allow_hyphen_values = true)]
        from: String,
        #[arg(long, allow_hyphen_values = true)]
        to: String,
        #[arg(long, allow_hyphen_values = true)]
        groups: String,
        #[arg(long)]
        seed: Option<u32>,
        #[arg(long)]
        json: bool,
    },
    /// Show the most recent distributions
    History {
        #[arg(long)]
        json: bool,
    },
    /// Forget all recorded distributions
    ClearHistory,
}

fn main() -> ExitCode {
    init_logging("warn");
    let cli = Cli::parse();
    let config = Config::from_env().with_history_path(cli.history_path.clone());
    let mut stdout = io::stdout();
    ExitCode::from(run(cli.command, config, &mut stdout))
}

fn run(command: Command, config: Config, out: &mut impl Write) -> u8 {
    let mut history = HistoryStore::open(config.history_path);
    let result = match command {
        Command::Split {
            from,
            to,
            groups,
            seed,
            json,
        } => {
            let request = match validate_distribution(&from, &to, &groups) {
                Ok(request) => request,
                Err(err) => {
                    eprintln!("{err}");
                    return EXIT_INVALID_INPUT;
                }
            };
            let mut rng = Rng::from_optional_seed(seed);
            match distribute(request, &mut rng, &mut history) {
                Ok(entry) if json => write_json(out, &entry),
                Ok(entry) => write!(out, "{}", render_groups(&entry.data)),
                Err(err) => {
                    eprintln!("{err}");
                    return EXIT_INVALID_INPUT;
                }
            }
        }
        Command::History { json: true } => write_json(out, history.entries()),
        Command::History { json: false } => write!(out, "{}", render_history(history.entries())),
        Command::ClearHistory => {
            history.clear();
            writeln!(out, "History cleared ({}).", history.path().display())
        }
    };
    match result {
        Ok(()) => 0,
        Err(err) => {
            tracing::error!(%err, "failed to write output");
            1
        }
    }
}

fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> io::Result<()> {
    let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    writeln!(out, "{text}")
}
