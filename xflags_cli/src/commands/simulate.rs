use crate::{
    commands::common::GameArgs,
    io::{FileOrStderr, FileOrStdout},
};
use anyhow::{Context, Result};
use clap::{self, Parser};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Serialize;
use std::io::{BufWriter, Write};
use xflags::{
    player::Player,
    report::{Reporter, SvgReport, TextReport},
    simulation::{FlagGame, Move, MoveLog},
    strategy::InitialStrategy,
};

/// Play a game where both players follow the optimal strategy and report every move
#[derive(Parser, Debug)]
pub struct Args {
    #[command(flatten)]
    game: GameArgs,

    /// Seed of the moves made from a lost position. Random if not given
    #[arg(long, default_value = None)]
    seed: Option<u64>,

    /// Path to write the textual report to
    #[arg(long, default_value = "-")]
    output: FileOrStdout,

    /// Path to write SVG timeline of the game to
    #[arg(long, default_value = None)]
    svg: Option<FileOrStdout>,

    /// Path to output logs
    #[arg(long, default_value = None)]
    log: Option<FileOrStderr>,
}

#[derive(Debug, Clone, Serialize)]
enum Log {
    Start {
        game: String,
        seed: u64,
        strategy: InitialStrategy,
    },
    Move(Move),
    Finished {
        winner: Option<Player>,
        turns: usize,
    },
}

pub fn run(args: Args) -> Result<()> {
    let config = args.game.config()?;
    let game = FlagGame::new(config);
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);

    let mut log_writer = match &args.log {
        Some(path) => Some(BufWriter::new(
            path.create()
                .with_context(|| format!("Could not open log file `{}`", path))?,
        )),
        None => None,
    };
    let moves = {
        let mut write_log = |log: &Log| -> Result<()> {
            if let Some(w) = log_writer.as_mut() {
                writeln!(w, "{}", serde_json::ser::to_string(log)?)?;
            }
            Ok(())
        };

        write_log(&Log::Start {
            game: config.to_string(),
            seed,
            strategy: game.initial_strategy(),
        })?;
        let moves = game
            .turns(&mut rng)
            .map(|m| -> Result<Move> {
                write_log(&Log::Move(m))?;
                Ok(m)
            })
            .collect::<Result<MoveLog>>()?;
        write_log(&Log::Finished {
            winner: moves.winner(),
            turns: moves.len(),
        })?;
        moves
    };
    if let Some(mut w) = log_writer {
        w.flush().context("Could not flush log file")?;
    }

    let output = args
        .output
        .create()
        .with_context(|| format!("Could not open output file `{}`", &args.output))?;
    TextReport::new(BufWriter::new(output))
        .report(config, &moves)
        .context("Could not write report")?;

    if let Some(svg_path) = &args.svg {
        let mut svg = SvgReport::new(String::new());
        svg.report(config, &moves)
            .context("Could not render timeline")?;
        let mut svg_file = svg_path
            .create()
            .with_context(|| format!("Could not open SVG file `{}`", svg_path))?;
        svg_file
            .write_all(svg.into_inner().as_bytes())
            .with_context(|| format!("Could not write SVG file `{}`", svg_path))?;
        eprintln!("Timeline written to {}", svg_path);
    }

    Ok(())
}
