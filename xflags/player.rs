//! Players of X Flags

use std::fmt::{self, Display};

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[allow(missing_docs)]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// Opposite player
    #[inline(always)]
    #[must_use]
    pub const fn opposite(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Seat number, `1` for the first player and `2` for the second
    #[inline]
    pub const fn seat(self) -> u8 {
        match self {
            Player::First => 1,
            Player::Second => 2,
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::First => write!(f, "first"),
            Player::Second => write!(f, "second"),
        }
    }
}
