//! Optimal play in X Flags.
//!
//! Two players alternately take between one and [`max_flags`](config::GameConfig::max_flags)
//! flags from a shared pile, whoever takes the last flag wins. The game is the subtraction game
//! with subtraction set `{1, ..., max_flags}` under normal play, solved in closed form by
//! [`strategy`]. [`simulation`] plays it out and [`report`] presents the result as text or as an
//! SVG timeline.
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use xflags::{config::GameConfig, player::Player, simulation::FlagGame};
//!
//! let game = FlagGame::new(GameConfig::new(10, 3).unwrap());
//! assert_eq!(game.initial_strategy().winner, Player::First);
//!
//! let log = game.simulate(&mut StdRng::seed_from_u64(42));
//! assert_eq!(log.moves()[0].flags_picked, 2);
//! assert_eq!(log.winner(), Some(Player::First));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod drawing;
pub mod numeric;
pub mod player;
pub mod report;
pub mod simulation;
pub mod strategy;
pub mod subtraction;

mod display;
