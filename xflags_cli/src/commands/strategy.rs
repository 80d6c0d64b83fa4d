use crate::commands::common::GameArgs;
use anyhow::Result;
use clap::{self, Parser};
use xflags::strategy::initial_strategy;

/// Print the winner under perfect play and the opening move that secures it
#[derive(Parser, Debug)]
pub struct Args {
    #[command(flatten)]
    game: GameArgs,
}

pub fn run(args: Args) -> Result<()> {
    let config = args.game.config()?;
    let strategy = initial_strategy(config);

    println!("Game: {}", config);
    println!("The optimal strategy is: {}", strategy);
    match strategy.opening_move {
        Some(flags) => println!(
            "First player wins by picking {} flags, leaving a multiple of {}",
            flags,
            u64::from(config.max_flags()) + 1
        ),
        None => println!("First player cannot avoid leaving a winning pile, second player wins"),
    }

    Ok(())
}
