// SPDX-License-Identifier: MIT OR Apache-2.0

//! Headless self-play driver for the draughts engine.
//!
//! Plays batches of random-vs-random games to completion, reporting each
//! result and an aggregate tally. Used for soak-testing the rules engine
//! and for producing quick baselines.

mod random;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use draughts_core::{Color, FinishReason, Game, GameConfig, GameStatus};

use crate::random::RandomSource;

/// Command-line arguments
#[derive(Parser, Debug)]
#[clap(name = "draughts-cli", version, about = "Draughts self-play driver")]
struct Args {
    /// Number of games to play
    #[clap(short, long, default_value = "1")]
    games: u32,

    /// Turn limit per game before declaring a draw
    #[clap(long, default_value = "200")]
    max_turns: u32,

    /// Undo-history depth carried by each game
    #[clap(long, default_value = "20")]
    history: usize,

    /// Seed for the random move sources; a fixed seed replays the batch
    #[clap(short, long)]
    seed: Option<u64>,

    /// Print the final board of every game
    #[clap(long)]
    show_board: bool,

    /// Emit one JSON line per game instead of plain text
    #[clap(long)]
    json: bool,

    /// Write a CSV dump of every final board into this directory
    #[clap(long)]
    dump_dir: Option<PathBuf>,
}

/// Per-game result line for machine consumption.
#[derive(Debug, Serialize)]
struct GameReport {
    game: u32,
    winner: Option<Color>,
    winner_name: Option<String>,
    reason: FinishReason,
    turns: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut light_wins = 0u32;
    let mut dark_wins = 0u32;
    let mut draws = 0u32;

    for game_no in 1..=args.games {
        let config = GameConfig {
            max_turns: args.max_turns,
            history_capacity: args.history,
            ..GameConfig::default()
        };
        let mut game = Game::with_config(config);

        // One rng stream per game, so a batch replays end to end.
        let mut source = match args.seed {
            Some(seed) => RandomSource::seeded(seed.wrapping_add(u64::from(game_no))),
            None => RandomSource::new(),
        };

        let reason = loop {
            match game.step(&mut source) {
                Ok(GameStatus::Playing) => {}
                Ok(GameStatus::Finished(reason)) => break reason,
                Err(err) => return Err(err).context("rules engine rejected a generated move"),
            }
        };

        match game.winner().map(|player| player.color) {
            Some(Color::Light) => light_wins += 1,
            Some(Color::Dark) => dark_wins += 1,
            None => draws += 1,
        }

        if args.json {
            let report = GameReport {
                game: game_no,
                winner: game.winner().map(|player| player.color),
                winner_name: game.winner().map(|player| player.name.clone()),
                reason,
                turns: game.turn(),
            };
            println!("{}", serde_json::to_string(&report)?);
        } else {
            match game.winner() {
                Some(winner) => println!(
                    "game {}: {} ({}) wins after {} turns ({:?})",
                    game_no,
                    winner.name,
                    winner.color,
                    game.turn(),
                    reason
                ),
                None => println!("game {}: draw after {} turns", game_no, game.turn()),
            }
        }

        if args.show_board {
            println!("{}", render::render_board(game.board()));
        }
        if let Some(dir) = &args.dump_dir {
            draughts_core::export::dump_board(game.board(), dir)
                .context("failed to dump final board")?;
        }
    }

    if args.games > 1 && !args.json {
        println!("totals: light {light_wins}, dark {dark_wins}, draws {draws}");
    }
    Ok(())
}
