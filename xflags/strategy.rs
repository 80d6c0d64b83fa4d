//! Perfect play in X Flags.
//!
//! A pile holding a multiple of `max_flags + 1` flags is lost for the player to move: whatever
//! `k` flags they pick, the opponent answers with `max_flags + 1 - k` and restores the multiple,
//! eventually taking the last flag. Every other pile is won by picking the remainder.

use crate::{config::GameConfig, display, player::Player};
use rand::Rng;
use std::{
    fmt::{self, Display},
    num::NonZeroU32,
};

/// Source of the arbitrary move made from a lost position
pub trait RandomSource {
    /// Pick an integer from `low..=high`, uniformly if the source is random
    fn pick_inclusive(&mut self, low: u32, high: u32) -> u32;
}

impl<R> RandomSource for R
where
    R: Rng + ?Sized,
{
    #[inline]
    fn pick_inclusive(&mut self, low: u32, high: u32) -> u32 {
        self.random_range(low..=high)
    }
}

/// Outcome of the game under perfect play, seen before the opening move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InitialStrategy {
    /// Player that wins with perfect play
    pub winner: Player,

    /// Number of flags the first player should pick. `None` if the first player cannot win
    pub opening_move: Option<NonZeroU32>,
}

impl Display for InitialStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::parens(f, |f| match self.opening_move {
            Some(flags) => write!(f, "{}, {}", self.winner, flags),
            None => write!(f, "{}, None", self.winner),
        })
    }
}

/// Remainder of the pile modulo `max_flags + 1`, zero exactly on lost positions
#[inline]
pub const fn remainder(current_flags: u32, max_flags: u32) -> u32 {
    // Widened so that `max_flags == u32::MAX` does not overflow
    (current_flags as u64 % (max_flags as u64 + 1)) as u32
}

/// Check if the player to move loses against perfect play
#[inline]
pub const fn is_losing_position(current_flags: u32, max_flags: u32) -> bool {
    remainder(current_flags, max_flags) == 0
}

/// The unique move that leaves the opponent in a lost position, if there is one
#[inline]
pub const fn winning_move(current_flags: u32, max_flags: u32) -> Option<NonZeroU32> {
    NonZeroU32::new(remainder(current_flags, max_flags))
}

/// Decide who wins the game described by `config` and how the first player should open
pub const fn initial_strategy(config: GameConfig) -> InitialStrategy {
    match winning_move(config.total_flags(), config.max_flags()) {
        Some(flags) => InitialStrategy {
            winner: Player::First,
            opening_move: Some(flags),
        },
        None => InitialStrategy {
            winner: Player::Second,
            opening_move: None,
        },
    }
}

/// Number of flags to pick from a pile of `current_flags`.
///
/// From a won position this is the [`winning_move`]. From a lost position no move is better than
/// another, so an arbitrary count in `1..=max_flags` is drawn from `rng`. The result is not
/// clamped to the pile size.
pub fn optimal_move<R>(current_flags: u32, max_flags: u32, rng: &mut R) -> u32
where
    R: RandomSource + ?Sized,
{
    match winning_move(current_flags, max_flags) {
        Some(flags) => flags.get(),
        None => rng.pick_inclusive(1, max_flags),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::QuickCheck;
    use rand::{SeedableRng, rngs::StdRng};

    struct Always(u32);

    impl RandomSource for Always {
        fn pick_inclusive(&mut self, low: u32, high: u32) -> u32 {
            self.0.clamp(low, high)
        }
    }

    fn config(total_flags: u32, max_flags: u32) -> GameConfig {
        GameConfig::new(total_flags, max_flags).unwrap()
    }

    #[test]
    fn first_player_wins_with_remainder() {
        let strategy = initial_strategy(config(10, 3));
        assert_eq!(strategy.winner, Player::First);
        assert_eq!(strategy.opening_move, NonZeroU32::new(2));
        assert_eq!(strategy.to_string(), "(first, 2)");

        // Opponent is left with a multiple of 4
        assert!(is_losing_position(10 - 2, 3));
    }

    #[test]
    fn second_player_wins_on_multiple() {
        let strategy = initial_strategy(config(8, 3));
        assert_eq!(
            strategy,
            InitialStrategy {
                winner: Player::Second,
                opening_move: None,
            }
        );
        assert_eq!(strategy.to_string(), "(second, None)");
    }

    #[test]
    fn initial_strategy_is_idempotent() {
        let game = config(17, 5);
        assert_eq!(initial_strategy(game), initial_strategy(game));
        assert_eq!(game, config(17, 5));
    }

    #[test]
    fn whole_pile_when_cap_allows_it() {
        let strategy = initial_strategy(config(6, 6));
        assert_eq!(strategy.opening_move, NonZeroU32::new(6));
    }

    #[test]
    fn huge_cap_does_not_overflow() {
        assert_eq!(remainder(u32::MAX, u32::MAX), u32::MAX);
        assert!(!is_losing_position(u32::MAX, u32::MAX));
    }

    #[test]
    fn optimal_move_uses_random_source_only_when_lost() {
        assert_eq!(optimal_move(8, 3, &mut Always(3)), 3);
        assert_eq!(optimal_move(8, 3, &mut Always(1)), 1);
        assert_eq!(optimal_move(8, 3, &mut Always(100)), 3);
        assert_eq!(optimal_move(9, 3, &mut Always(3)), 1);
        assert_eq!(optimal_move(11, 3, &mut Always(1)), 3);
    }

    #[test]
    fn random_fallback_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for max_flags in 1..=6 {
            for _ in 0..100 {
                let flags = optimal_move(4 * (max_flags + 1), max_flags, &mut rng);
                assert!((1..=max_flags).contains(&flags));
            }
        }
    }

    #[test]
    fn random_fallback_covers_every_move() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[optimal_move(12, 3, &mut rng) as usize] = true;
        }
        assert_eq!(seen, [false, true, true, true]);
    }

    #[test]
    fn winning_move_leaves_lost_position() {
        let test = |config: GameConfig| {
            let total_flags = config.total_flags();
            let max_flags = config.max_flags();
            match winning_move(total_flags, max_flags) {
                Some(flags) => {
                    assert!(flags.get() <= max_flags);
                    assert!(is_losing_position(total_flags - flags.get(), max_flags));
                }
                None => {
                    for flags in 1..=max_flags.min(total_flags) {
                        assert!(!is_losing_position(total_flags - flags, max_flags));
                    }
                }
            }
        };
        QuickCheck::new().quickcheck(test as fn(GameConfig));
    }
}
