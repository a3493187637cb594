//! Example demonstrating board generation.
//!
//! This example shows how to:
//! - Create a `BoardGenerator` with a tile catalog
//! - Generate a random board, or reproduce one from a seed
//! - Count the pairs that can be matched right away
//! - Sample many boards in parallel and keep the most playable one
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_board
//! ```
//!
//! Reproduce a board from its seed:
//!
//! ```sh
//! cargo run --example generate_board -- --seed 1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef
//! ```
//!
//! Sample boards and keep the one with the most open pairs:
//!
//! ```sh
//! cargo run --example generate_board -- --types 6 --max-tries 1000
//! ```

use std::process;

use clap::Parser;
use rayon::prelude::*;
use tilelink_core::{Board, TileTypeCatalog};
use tilelink_generator::{BoardConfig, BoardGenerator, BoardSeed, GeneratedBoard};
use tilelink_pathfinder::PathFinder;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of tile types to draw from.
    #[arg(long, value_name = "COUNT", default_value_t = 14)]
    types: usize,

    /// Seed to reproduce, as 64 hex digits.
    #[arg(long, value_name = "SEED", conflicts_with = "max_tries")]
    seed: Option<BoardSeed>,

    /// Boards to sample, keeping the one with the most open pairs.
    #[arg(long, value_name = "COUNT")]
    max_tries: Option<usize>,
}

fn main() {
    let args = Args::parse();
    let catalog = match TileTypeCatalog::with_type_count(args.types) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    };
    let generator = BoardGenerator::new(catalog);
    let config = BoardConfig::default();

    let Some(max_tries) = args.max_tries else {
        let seed = args.seed.unwrap_or_else(BoardSeed::random);
        let generated = generator.generate_with_seed(&config, seed).unwrap();
        let open = open_pairs(&generated.board);
        print_board(&generated, open, None);
        return;
    };
    if max_tries == 0 {
        eprintln!("--max-tries must be at least 1.");
        process::exit(1);
    }

    let best = (0..max_tries)
        .into_par_iter()
        .map(|_| {
            let generated = generator.generate(&config).unwrap();
            let open = open_pairs(&generated.board);
            (generated, open)
        })
        .max_by_key(|(_, open)| *open);

    if let Some((generated, open)) = best {
        print_board(&generated, open, Some(max_tries));
    }
}

/// Counts the same-type pairs connected by an admissible path.
fn open_pairs(board: &Board) -> usize {
    let tiles = board.tiles().collect::<Vec<_>>();
    let mut count = 0;
    for (i, a) in tiles.iter().enumerate() {
        for b in &tiles[i + 1..] {
            if a.ty == b.ty
                && PathFinder::new(board.grid())
                    .find_path(a.coord, b.coord)
                    .is_some()
            {
                count += 1;
            }
        }
    }
    count
}

fn print_board(generated: &GeneratedBoard, open: usize, sampled: Option<usize>) {
    let GeneratedBoard { board, seed } = generated;
    println!("Seed:");
    println!("  {seed}");
    println!();

    if let Some(max_tries) = sampled {
        println!("Selection:");
        println!("  Max tries: {max_tries}");
        println!();
    }

    println!("Board ({}x{}):", board.grid().width(), board.grid().height());
    for row in board.to_string().lines() {
        println!("  {row}");
    }
    println!();

    println!("Stats:");
    for (ty, count) in board.type_counter().iter().filter(|(_, count)| *count > 0) {
        println!("  {ty}: {count}");
    }
    println!("  open pairs: {open}");
    println!("  total: {}", board.tile_count());
}
