use crate::commands::*;
use anyhow::Result;
use clap::{self, Parser, Subcommand};

mod commands;
mod io;

#[cfg(not(windows))]
#[global_allocator]
static ALLOC: jemallocator::Jemalloc = jemallocator::Jemalloc;

#[derive(Subcommand, Debug)]
enum Command {
    Strategy(strategy::Args),
    Simulate(simulate::Args),
    Table(table::Args),
}

#[derive(Parser)]
#[command(version, about = "Optimal play in the X Flags subtraction game")]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    let args = Args::parse();
    match args.command {
        Command::Strategy(args) => strategy::run(args),
        Command::Simulate(args) => simulate::run(args),
        Command::Table(args) => table::run(args),
    }
}
