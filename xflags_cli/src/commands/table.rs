use anyhow::{Result, bail};
use clap::{self, Parser};
use serde::Serialize;
use xflags::{
    config::GameConfig, player::Player, strategy::initial_strategy, subtraction::grundy_sequence,
};

#[derive(Debug, Clone, Serialize)]
struct Report {
    game: String,
    winner: Player,
    opening_move: Option<u32>,
    nim_value: String,
}

/// Evaluate all pile sizes in a given range for a fixed removal cap.
#[derive(Parser, Debug)]
pub struct Args {
    /// Maximum number of flags a player can pick in one turn
    #[arg(long)]
    max_flags: u32,

    /// Smallest pile size, defaults to the removal cap
    #[arg(long, default_value = None)]
    start_total: Option<u32>,

    /// Largest pile size
    #[arg(long, default_value_t = 20)]
    end_total: u32,
}

pub fn run(args: Args) -> Result<()> {
    if args.max_flags == 0 {
        bail!("Max flags must be a positive integer.");
    }
    let start_total = args.start_total.unwrap_or(args.max_flags);
    if start_total < args.max_flags {
        bail!(
            "Starting pile ({}) cannot be smaller than max flags ({}).",
            start_total,
            args.max_flags
        );
    }
    if start_total > args.end_total {
        bail!(
            "Empty range, start total ({}) is above end total ({}).",
            start_total,
            args.end_total
        );
    }

    let nim_values = grundy_sequence(args.max_flags)
        .skip(start_total as usize)
        .take((args.end_total - start_total) as usize + 1);
    for (total_flags, nim_value) in (start_total..=args.end_total).zip(nim_values) {
        let config = GameConfig::new(total_flags, args.max_flags)?;
        let strategy = initial_strategy(config);
        let report = Report {
            game: config.to_string(),
            winner: strategy.winner,
            opening_move: strategy.opening_move.map(|flags| flags.get()),
            nim_value: nim_value.to_string(),
        };
        println!("{}", serde_json::ser::to_string(&report)?);
    }

    Ok(())
}
