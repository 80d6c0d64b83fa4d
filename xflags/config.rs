//! Game configuration: starting pile and per-turn removal cap

use crate::display;
use std::{
    error::Error,
    fmt::{self, Display},
    str::FromStr,
};

/// Reason why a game configuration was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidConfiguration {
    /// Input could not be read as an integer
    NotAnInteger,

    /// Input is an integer, but too large to be a pile size
    OutOfRange,

    /// Total number of flags is zero or negative
    NonPositiveTotal,

    /// Maximum number of flags per turn is zero or negative
    NonPositiveMax,

    /// Players would be allowed to take more flags than the pile ever holds
    MaxExceedsTotal {
        /// Requested pile size
        total_flags: u32,

        /// Requested removal cap
        max_flags: u32,
    },
}

impl Display for InvalidConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnInteger => write!(f, "Both total flags and max flags must be integers"),
            Self::OutOfRange => write!(f, "Flag count does not fit in 32 bits"),
            Self::NonPositiveTotal => write!(f, "Total flags must be a positive integer"),
            Self::NonPositiveMax => write!(f, "Max flags must be a positive integer"),
            Self::MaxExceedsTotal {
                total_flags,
                max_flags,
            } => write!(
                f,
                "Max flags ({}) cannot be greater than total flags ({})",
                max_flags, total_flags
            ),
        }
    }
}

impl Error for InvalidConfiguration {}

/// Validated configuration of a single game of X Flags
///
/// Invariant: `0 < max_flags <= total_flags`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameConfig {
    total_flags: u32,
    max_flags: u32,
}

impl GameConfig {
    /// Create new configuration, rejecting empty piles and out of bounds caps
    pub const fn new(total_flags: u32, max_flags: u32) -> Result<Self, InvalidConfiguration> {
        if total_flags == 0 {
            return Err(InvalidConfiguration::NonPositiveTotal);
        }
        if max_flags == 0 {
            return Err(InvalidConfiguration::NonPositiveMax);
        }
        if max_flags > total_flags {
            return Err(InvalidConfiguration::MaxExceedsTotal {
                total_flags,
                max_flags,
            });
        }
        Ok(Self {
            total_flags,
            max_flags,
        })
    }

    /// Like [`Self::new`] but accepts signed input, as read from an untrusted source
    pub fn from_signed(total_flags: i64, max_flags: i64) -> Result<Self, InvalidConfiguration> {
        if total_flags <= 0 {
            return Err(InvalidConfiguration::NonPositiveTotal);
        }
        if max_flags <= 0 {
            return Err(InvalidConfiguration::NonPositiveMax);
        }
        let total_flags =
            u32::try_from(total_flags).map_err(|_| InvalidConfiguration::OutOfRange)?;
        let max_flags = u32::try_from(max_flags).map_err(|_| InvalidConfiguration::OutOfRange)?;
        Self::new(total_flags, max_flags)
    }

    /// Initial pile size
    #[inline]
    pub const fn total_flags(&self) -> u32 {
        self.total_flags
    }

    /// Maximum number of flags a player may pick in one turn
    #[inline]
    pub const fn max_flags(&self) -> u32 {
        self.max_flags
    }
}

impl Display for GameConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "XFlags")?;
        display::parens(f, |f| display::commas(f, &[self.total_flags, self.max_flags]))
    }
}

/// Parses either `total,max` or the [`Display`] form `XFlags(total, max)`
impl FromStr for GameConfig {
    type Err = InvalidConfiguration;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let inner = s
            .strip_prefix("XFlags(")
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(s);
        let (total, max) = inner
            .split_once(',')
            .ok_or(InvalidConfiguration::NotAnInteger)?;
        let parse = |n: &str| {
            n.trim()
                .parse::<i64>()
                .map_err(|_| InvalidConfiguration::NotAnInteger)
        };
        Self::from_signed(parse(total)?, parse(max)?)
    }
}

#[cfg(any(test, feature = "quickcheck"))]
impl quickcheck::Arbitrary for GameConfig {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let bound = g.size().max(1) as u32;
        let total_flags = u32::arbitrary(g) % bound + 1;
        let max_flags = u32::arbitrary(g) % total_flags + 1;
        Self {
            total_flags,
            max_flags,
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let mut smaller = Vec::with_capacity(2);
        if self.max_flags > 1 {
            smaller.push(Self {
                total_flags: self.total_flags,
                max_flags: self.max_flags - 1,
            });
        }
        if self.total_flags > 1 {
            smaller.push(Self {
                total_flags: self.total_flags - 1,
                max_flags: self.max_flags.min(self.total_flags - 1),
            });
        }
        Box::new(smaller.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::QuickCheck;

    #[test]
    fn rejects_invalid_configurations() {
        assert_eq!(
            GameConfig::new(0, 0),
            Err(InvalidConfiguration::NonPositiveTotal)
        );
        assert_eq!(
            GameConfig::new(5, 0),
            Err(InvalidConfiguration::NonPositiveMax)
        );
        assert_eq!(
            GameConfig::new(3, 5),
            Err(InvalidConfiguration::MaxExceedsTotal {
                total_flags: 3,
                max_flags: 5
            })
        );
        assert_eq!(
            GameConfig::from_signed(-4, 2),
            Err(InvalidConfiguration::NonPositiveTotal)
        );
        assert_eq!(
            GameConfig::from_signed(4, -2),
            Err(InvalidConfiguration::NonPositiveMax)
        );
        assert_eq!(
            GameConfig::from_signed(i64::from(u32::MAX) + 1, 1),
            Err(InvalidConfiguration::OutOfRange)
        );
    }

    #[test]
    fn accepts_cap_equal_to_pile() {
        let config = GameConfig::new(7, 7).unwrap();
        assert_eq!(config.total_flags(), 7);
        assert_eq!(config.max_flags(), 7);
    }

    #[test]
    fn parsing() {
        assert_eq!("10,3".parse(), GameConfig::new(10, 3));
        assert_eq!(" 10 , 3 ".parse(), GameConfig::new(10, 3));
        assert_eq!("XFlags(8, 3)".parse(), GameConfig::new(8, 3));
        assert_eq!(
            "10.5,3".parse::<GameConfig>(),
            Err(InvalidConfiguration::NotAnInteger)
        );
        assert_eq!(
            "ten,three".parse::<GameConfig>(),
            Err(InvalidConfiguration::NotAnInteger)
        );
        assert_eq!(
            "10".parse::<GameConfig>(),
            Err(InvalidConfiguration::NotAnInteger)
        );
        assert_eq!(
            "3,5".parse::<GameConfig>(),
            Err(InvalidConfiguration::MaxExceedsTotal {
                total_flags: 3,
                max_flags: 5
            })
        );
    }

    #[test]
    fn parsing_preserves_equality() {
        let test = |config: GameConfig| {
            assert_eq!(config.to_string().parse(), Ok(config));
        };
        QuickCheck::new().quickcheck(test as fn(GameConfig));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            InvalidConfiguration::MaxExceedsTotal {
                total_flags: 3,
                max_flags: 5
            }
            .to_string(),
            "Max flags (5) cannot be greater than total flags (3)"
        );
    }
}
