//! X Flags as a subtraction game with subtraction set `{1, 2, ..., max_flags}`.
//!
//! Nim values are computed by the Grundy scale method, independently of the closed form in
//! [`strategy`](crate::strategy). Used to cross-check the closed form and to tabulate positions.

use crate::{config::GameConfig, numeric::nimber::Nimber, player::Player};

/// Get the infinite Grundy sequence of X Flags with a given removal cap, starting at an empty
/// pile
#[inline]
pub fn grundy_sequence(max_flags: u32) -> GrundySequence {
    GrundySequence {
        max_flags,
        previous: vec![Nimber::new(0); max_flags.max(1) as usize],
        current: 0,
    }
}

/// Grundy sequence iterator using Grundy scale method.
#[derive(Debug, Clone)]
pub struct GrundySequence {
    /// Largest element of the subtraction set
    max_flags: u32,

    /// Ring buffer of previous values
    previous: Vec<Nimber>,

    /// Current pile size to compute nim value for
    current: u32,
}

impl Iterator for GrundySequence {
    type Item = Nimber;

    fn next(&mut self) -> Option<Self::Item> {
        let period_len = self.previous.len() as u32;

        let for_mex = (1..=self.max_flags.min(self.current))
            .map(|m| self.previous[((self.current - m) % period_len) as usize])
            .collect::<Vec<_>>();
        let mex = Nimber::mex(for_mex);

        self.previous[(self.current % period_len) as usize] = mex;
        self.current = self.current.checked_add(1)?;

        Some(mex)
    }
}

/// Nim value of the starting pile of `config`
pub fn nim_value(config: GameConfig) -> Nimber {
    grundy_sequence(config.max_flags())
        .nth(config.total_flags() as usize)
        .unwrap_or(Nimber::new(0))
}

/// Winner of `config` under perfect play, by exhaustive evaluation of all pile sizes
pub fn exhaustive_winner(config: GameConfig) -> Player {
    if nim_value(config).is_zero() {
        Player::Second
    } else {
        Player::First
    }
}
