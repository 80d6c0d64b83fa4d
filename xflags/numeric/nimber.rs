//! Nimber is a number that represents a Nim heap of a given size.

use std::fmt::Display;

/// Number that represents a Nim heap of given size.
///
/// A position is lost for the player to move exactly when its nimber is zero.
#[repr(transparent)]
#[derive(Debug, Hash, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nimber(u32);

impl Nimber {
    /// Construct new nimber
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the underlying nimber value
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Check if the nimber is zero, i.e. the previous player wins
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Compute the minimum excluded value from a vector of nimbers.
    /// See <https://en.wikipedia.org/wiki/Mex_(mathematics)>
    pub fn mex(mut nimbers: Vec<Self>) -> Self {
        nimbers.sort_unstable();
        let mut current = 0;
        for n in nimbers {
            match current.cmp(&n.0) {
                std::cmp::Ordering::Less => return Self(current),
                std::cmp::Ordering::Equal => current += 1,
                std::cmp::Ordering::Greater => {}
            }
        }
        Self(current)
    }
}

impl From<u32> for Nimber {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Display for Nimber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            0 => write!(f, "0"),
            1 => write!(f, "*"),
            n => write!(f, "*{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mex_works() {
        assert_eq!(
            Nimber(3),
            Nimber::mex(vec![Nimber(0), Nimber(0), Nimber(2), Nimber(5), Nimber(1)])
        );
        assert_eq!(Nimber(2), Nimber::mex(vec![Nimber(0), Nimber(1), Nimber(1)]));
        assert_eq!(Nimber(0), Nimber::mex(vec![Nimber(4), Nimber(1)]));
        assert_eq!(Nimber(0), Nimber::mex(vec![]));
    }

    #[test]
    fn display_uses_star_notation() {
        assert_eq!(Nimber::new(0).to_string(), "0");
        assert_eq!(Nimber::new(1).to_string(), "*");
        assert_eq!(Nimber::new(3).to_string(), "*3");
        assert!(Nimber::new(0).is_zero());
        assert!(!Nimber::from(2).is_zero());
    }
}
