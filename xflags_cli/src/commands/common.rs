use anyhow::{Context, Result};
use xflags::config::GameConfig;

/// Parameters of a single game
#[derive(clap::Args, Debug, Clone, Copy)]
pub struct GameArgs {
    /// Number of flags on the pile at the start of the game
    #[arg(long, allow_negative_numbers = true)]
    pub total_flags: i64,

    /// Maximum number of flags a player can pick in one turn
    #[arg(long, allow_negative_numbers = true)]
    pub max_flags: i64,
}

impl GameArgs {
    pub fn config(self) -> Result<GameConfig> {
        GameConfig::from_signed(self.total_flags, self.max_flags).with_context(|| {
            format!(
                "Invalid game with {} total flags and {} max flags",
                self.total_flags, self.max_flags
            )
        })
    }
}
