//! Drawing module

use crate::player::Player;
use std::fmt::{self, Display};

pub mod svg;

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Color of flags taken by the first player
    #[allow(clippy::unreadable_literal)]
    pub const BLUE: Color = Color::from_hex(0x4e4afbff);

    /// Color of flags taken by the second player
    #[allow(clippy::unreadable_literal)]
    pub const RED: Color = Color::from_hex(0xf92672ff);

    #[allow(clippy::unreadable_literal, missing_docs)]
    pub const BLACK: Color = Color::from_hex(0x000000ff);

    /// Background of rendered images
    #[allow(clippy::unreadable_literal)]
    pub const WHITE: Color = Color::from_hex(0xffffffff);

    /// Color of flags still on the pile
    #[allow(clippy::unreadable_literal)]
    pub const LIGHT_GRAY: Color = Color::from_hex(0xccccccff);

    /// Construct color from `0xRRGGBBAA`
    #[must_use]
    pub const fn from_hex(hex: u32) -> Color {
        Color {
            r: ((hex >> 24) & 0xff) as u8,
            g: ((hex >> 16) & 0xff) as u8,
            b: ((hex >> 8) & 0xff) as u8,
            a: (hex & 0xff) as u8,
        }
    }

    /// Color of a flag owned by `owner`
    #[must_use]
    pub const fn of_owner(owner: Option<Player>) -> Color {
        match owner {
            Some(Player::First) => Color::BLUE,
            Some(Player::Second) => Color::RED,
            None => Color::LIGHT_GRAY,
        }
    }
}

/// Formats as CSS `rgba(...)`, alpha normalized to `0..=1`
impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({},{},{},{:.3})",
            self.r,
            self.g,
            self.b,
            self.a as f32 / 255.0
        )
    }
}
