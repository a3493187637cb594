//! Terminal front-end for the Tilelink matching game.
//!
//! Reads commands from standard input and prints the board after every
//! change. Set `RUST_LOG=debug` to follow the session's visual events.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin tilelink -- --types 8 --time-limit 120
//! ```

use std::{
    io::{self, BufRead as _, Write as _},
    process,
    time::{Duration, Instant},
};

use clap::Parser;
use tilelink_core::{CatalogError, TileTypeCatalog};
use tilelink_game::{BoardSession, ClickOutcome, GameError, SessionConfig, SessionStatus};
use tilelink_generator::{BoardConfig, BoardGenerator, BoardSeed, GeneratorError};

use crate::{
    command::{Command, HELP},
    terminal::TerminalPresenter,
};

mod command;
mod terminal;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Smallest board width.
    #[arg(long, value_name = "N", default_value_t = 6)]
    min_width: usize,

    /// Exclusive upper bound of the board width.
    #[arg(long, value_name = "N", default_value_t = 8)]
    max_width: usize,

    /// Smallest board height.
    #[arg(long, value_name = "N", default_value_t = 10)]
    min_height: usize,

    /// Exclusive upper bound of the board height.
    #[arg(long, value_name = "N", default_value_t = 14)]
    max_height: usize,

    /// Number of tile types in play.
    #[arg(long, value_name = "COUNT", default_value_t = 14)]
    types: usize,

    /// Seed of the first board, as 64 hex digits.
    #[arg(long, value_name = "SEED")]
    seed: Option<BoardSeed>,

    /// Seconds available for each board.
    #[arg(long, value_name = "SECS", default_value_t = 60)]
    time_limit: u64,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("{_0}")]
    Catalog(#[from] CatalogError),
    #[display("{_0}")]
    Game(#[from] GameError),
    #[display("{_0}")]
    Generator(#[from] GeneratorError),
    #[display("failed to read input: {_0}")]
    Io(#[from] io::Error),
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let generator = BoardGenerator::new(TileTypeCatalog::with_type_count(args.types)?);
    let config = SessionConfig {
        board: BoardConfig {
            min_width: args.min_width,
            max_width: args.max_width,
            min_height: args.min_height,
            max_height: args.max_height,
        },
        time_limit: Duration::from_secs(args.time_limit),
        ..SessionConfig::default()
    };
    let seed = args.seed.unwrap_or_else(BoardSeed::random);
    let generated = generator.generate_with_seed(&config.board, seed)?;
    let mut session = BoardSession::from_generated(generated, config, TerminalPresenter::default());
    log::info!("starting session with seed {seed}");
    show(&mut session);
    println!("{HELP}");

    let stdin = io::stdin();
    let mut last = Instant::now();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }

        let now = Instant::now();
        let before = session.status();
        if before.is_playing() && session.advance_time(now - last).is_out_of_time() {
            println!("out of time!");
        }
        last = now;

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                if !line.trim().is_empty() {
                    println!("{e}");
                }
                continue;
            }
        };
        match command {
            Command::Click(coord) => {
                let outcome = session.click(coord);
                report(&session, &outcome);
            }
            Command::Scramble => {
                session.scramble();
                show(&mut session);
            }
            Command::NewBoard => {
                session.new_board(&generator)?;
                if let Some(seed) = session.seed() {
                    println!("seed {seed}");
                }
                show(&mut session);
            }
            Command::Show => show(&mut session),
            Command::Help => println!("{HELP}"),
            Command::Quit => return Ok(()),
        }
    }
}

fn show(session: &mut BoardSession<TerminalPresenter>) {
    let grid = session.board().grid();
    let size = (grid.total_width(), grid.total_height());
    session.presenter_mut().fit(size);
    println!("{}", session.presenter().render(None));
    print_status(session);
}

fn report(session: &BoardSession<TerminalPresenter>, outcome: &ClickOutcome) {
    match outcome {
        ClickOutcome::Selected => println!("selected"),
        ClickOutcome::Deselected => println!("deselected"),
        ClickOutcome::MatchRejected => println!("no match"),
        ClickOutcome::MatchAccepted(path) => {
            println!("match with {} bends", path.bends());
        }
        ClickOutcome::BoardComplete(_) => println!("board complete!"),
        ClickOutcome::Ignored => match session.status() {
            SessionStatus::Playing => println!("nothing to select there"),
            SessionStatus::Complete => println!("the board is complete, type `new` to play again"),
            SessionStatus::OutOfTime => println!("out of time, type `new` to play again"),
        },
    }
    if outcome.is_match_accepted() || outcome.is_selected() {
        print_status(session);
    }
}

fn print_status(session: &BoardSession<TerminalPresenter>) {
    println!(
        "{} tiles left, {:.1}s remaining",
        session.board().tile_count(),
        session.time_remaining().as_secs_f32()
    );
}
