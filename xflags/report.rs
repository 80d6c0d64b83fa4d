//! Human facing output of a simulated game.
//!
//! Reporters only consume a configuration and a finished [`MoveLog`], strategy and simulation
//! types know nothing about them.

use crate::{
    config::GameConfig,
    drawing::{
        Color,
        svg::{Circle, ImmSvg, Svg, Text, TextAnchor},
    },
    player::Player,
    simulation::MoveLog,
    strategy::initial_strategy,
};
use std::{fmt, io};

/// Anything that can present a finished game
pub trait Reporter {
    /// Error raised by the underlying output
    type Error;

    /// Present a game played with `config` that resulted in `log`
    fn report(&mut self, config: GameConfig, log: &MoveLog) -> Result<(), Self::Error>;
}

const RULE_WIDTH: usize = 60;

fn coordinate(pixels: u64) -> i64 {
    i64::try_from(pixels).unwrap_or(i64::MAX)
}

/// Turn by turn textual listing, preceded by the game parameters and the initial strategy
#[derive(Debug)]
pub struct TextReport<W> {
    writer: W,
}

impl<W> TextReport<W> {
    /// Create reporter writing to `writer`
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Get back the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Reporter for TextReport<W>
where
    W: io::Write,
{
    type Error = io::Error;

    fn report(&mut self, config: GameConfig, log: &MoveLog) -> io::Result<()> {
        let w = &mut self.writer;
        writeln!(
            w,
            "X Flags - Total Flags: {}, Max Flags per Turn: {}",
            config.total_flags(),
            config.max_flags()
        )?;
        writeln!(w, "{:-<1$}", "", RULE_WIDTH)?;
        writeln!(w, "The optimal strategy is: {}", initial_strategy(config))?;
        writeln!(w, "{:-<1$}", "", RULE_WIDTH)?;
        for m in log {
            writeln!(w, "{}", m)?;
        }
        w.flush()
    }
}

/// Every flag of the pile, left to right, with the player that picked it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    config: GameConfig,
    owners: Vec<Option<Player>>,
}

impl Timeline {
    const SPACING: u64 = 40;
    const RADIUS: u32 = 12;
    const HEIGHT: u64 = 150;
    const MIN_WIDTH: u64 = 360;
    const TITLE_Y: i64 = 24;
    const LABEL_Y: i64 = 96;
    const TOKEN_Y: i64 = 115;
    const LEGEND_WIDTH: u64 = 130;
    const LEGEND_Y: i64 = 44;
    const LEGEND_ROW_HEIGHT: i64 = 20;
    const LEGEND_MARKER_RADIUS: u32 = 6;

    /// Assign flags to players in the order they were picked. Flags left on the pile have no
    /// owner, picks beyond the pile are ignored
    pub fn new(config: GameConfig, log: &MoveLog) -> Self {
        let mut owners = vec![None; config.total_flags() as usize];
        let picked = log
            .iter()
            .flat_map(|m| std::iter::repeat_n(m.player, m.flags_picked as usize));
        for (owner, player) in owners.iter_mut().zip(picked) {
            *owner = Some(player);
        }
        Self { config, owners }
    }

    /// Owner of each flag, in pick order
    pub fn owners(&self) -> &[Option<Player>] {
        &self.owners
    }

    /// Width of the rendered image in pixels
    pub fn width(&self) -> u64 {
        Self::canvas_width(self.config.total_flags())
    }

    fn canvas_width(total_flags: u32) -> u64 {
        (u64::from(total_flags) + 1)
            .saturating_mul(Self::SPACING)
            .max(Self::MIN_WIDTH)
    }

    /// Horizontal center of the flag at `idx`
    fn flag_x(idx: usize) -> i64 {
        coordinate((idx as u64).saturating_add(1).saturating_mul(Self::SPACING))
    }

    fn legend<W>(&self, w: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        let x = coordinate(self.width() - Self::LEGEND_WIDTH);
        for (row, player) in [Player::First, Player::Second].into_iter().enumerate() {
            let y = Self::LEGEND_Y + Self::LEGEND_ROW_HEIGHT * row as i64;
            ImmSvg::circle(
                w,
                &Circle {
                    cx: x,
                    cy: y,
                    r: Self::LEGEND_MARKER_RADIUS,
                    stroke: Color::BLACK,
                    stroke_width: 1,
                    fill: Color::of_owner(Some(player)),
                },
            )?;
            ImmSvg::text(
                w,
                &Text {
                    x: x + 12,
                    y: y + 4,
                    text: match player {
                        Player::First => "First Player".to_owned(),
                        Player::Second => "Second Player".to_owned(),
                    },
                    ..Text::default()
                },
            )?;
        }
        Ok(())
    }
}

impl Svg for Timeline {
    fn to_svg<W>(&self, w: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        let width = self.width();
        ImmSvg::new(w, width, Self::HEIGHT, |w| {
            ImmSvg::rect(w, 0, 0, width, Self::HEIGHT, Color::WHITE)?;
            ImmSvg::g(w, Color::BLACK, |w| {
                ImmSvg::text(
                    w,
                    &Text {
                        x: coordinate(width / 2),
                        y: Self::TITLE_Y,
                        text: format!(
                            "Visualization ({},{})",
                            self.config.total_flags(),
                            self.config.max_flags()
                        ),
                        text_anchor: TextAnchor::Middle,
                        font_size: 14,
                        bold: true,
                    },
                )?;

                for (idx, owner) in self.owners.iter().enumerate() {
                    let cx = Self::flag_x(idx);
                    ImmSvg::circle(
                        w,
                        &Circle {
                            cx,
                            cy: Self::TOKEN_Y,
                            r: Self::RADIUS,
                            stroke: Color::BLACK,
                            stroke_width: 1,
                            fill: Color::of_owner(*owner),
                        },
                    )?;
                    if let Some(player) = owner {
                        ImmSvg::text(
                            w,
                            &Text {
                                x: cx,
                                y: Self::LABEL_Y,
                                text: format!("P{}", player.seat()),
                                text_anchor: TextAnchor::Middle,
                                font_size: 10,
                                bold: true,
                            },
                        )?;
                    }
                }

                self.legend(w)
            })
        })
    }
}

/// Renders the [`Timeline`] of a game as an SVG document
#[derive(Debug)]
pub struct SvgReport<W> {
    writer: W,
}

impl<W> SvgReport<W> {
    /// Create reporter writing to `writer`
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Get back the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Reporter for SvgReport<W>
where
    W: fmt::Write,
{
    type Error = fmt::Error;

    fn report(&mut self, config: GameConfig, log: &MoveLog) -> fmt::Result {
        Timeline::new(config, log).to_svg(&mut self.writer)
    }
}
