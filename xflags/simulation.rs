//! Turn by turn simulation of a game where both players follow [`optimal_move`]

use crate::{
    config::GameConfig,
    player::Player,
    strategy::{self, InitialStrategy, RandomSource, optimal_move},
};
use itertools::Itertools;
use std::{
    fmt::{self, Display},
    iter::FusedIterator,
    slice,
};

/// Single turn of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    /// Player that made the move
    pub player: Player,

    /// Number of flags taken from the pile
    pub flags_picked: u32,

    /// Number of flags left on the pile after the move
    pub remaining_flags: u32,
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} player picked {} flags. Remaining flags: {}",
            self.player, self.flags_picked, self.remaining_flags
        )
    }
}

/// Moves of a finished game in chronological order
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MoveLog {
    moves: Vec<Move>,
}

impl MoveLog {
    /// Create empty log
    #[inline]
    pub const fn new() -> Self {
        Self { moves: Vec::new() }
    }

    /// Append a move at the end of the log
    #[inline]
    pub fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    /// Get all moves
    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Iterate moves in the order they were made
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Number of turns played
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check if no move was made
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Player that took the last flag, `None` for an empty log
    pub fn winner(&self) -> Option<Player> {
        self.moves
            .last()
            .filter(|m| m.remaining_flags == 0)
            .map(|m| m.player)
    }

    /// Total number of flags picked by all players
    pub fn flags_picked(&self) -> u64 {
        self.moves.iter().map(|m| u64::from(m.flags_picked)).sum()
    }

    /// Number of flags picked by a given player
    pub fn flags_picked_by(&self, player: Player) -> u64 {
        self.moves
            .iter()
            .filter(|m| m.player == player)
            .map(|m| u64::from(m.flags_picked))
            .sum()
    }
}

impl Display for MoveLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.moves.iter().join("\n"))
    }
}

impl FromIterator<Move> for MoveLog {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Move>,
    {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for MoveLog {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveLog {
    type Item = &'a Move;
    type IntoIter = slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// Game of X Flags with a fixed configuration
///
/// Holds no pile state, every simulation starts from the full pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FlagGame {
    config: GameConfig,
}

impl FlagGame {
    /// Create new game
    #[inline]
    pub const fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Get the game configuration
    #[inline]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    /// See [`strategy::initial_strategy`]
    #[inline]
    pub const fn initial_strategy(&self) -> InitialStrategy {
        strategy::initial_strategy(self.config)
    }

    /// Lazily play the game, yielding moves until the pile is empty.
    ///
    /// The opening move is labelled with the [`InitialStrategy::winner`], so on a pile that is a
    /// multiple of `max_flags + 1` the move log opens with [`Player::Second`].
    pub fn turns<'rng, R>(&self, rng: &'rng mut R) -> Turns<'rng, R>
    where
        R: RandomSource + ?Sized,
    {
        Turns {
            max_flags: self.config.max_flags(),
            current_flags: self.config.total_flags(),
            player: self.initial_strategy().winner,
            rng,
        }
    }

    /// Play the game to completion
    pub fn simulate<R>(&self, rng: &mut R) -> MoveLog
    where
        R: RandomSource + ?Sized,
    {
        self.turns(rng).collect()
    }
}

/// Iterator over the moves of a single game, see [`FlagGame::turns`]
pub struct Turns<'rng, R>
where
    R: ?Sized,
{
    max_flags: u32,
    current_flags: u32,
    player: Player,
    rng: &'rng mut R,
}

impl<R> Turns<'_, R>
where
    R: ?Sized,
{
    /// Flags left on the pile
    #[inline]
    pub const fn current_flags(&self) -> u32 {
        self.current_flags
    }

    /// Player that makes the next move
    #[inline]
    pub const fn player_to_move(&self) -> Player {
        self.player
    }
}

impl<R> Iterator for Turns<'_, R>
where
    R: RandomSource + ?Sized,
{
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_flags == 0 {
            return None;
        }

        let mut flags_picked = optimal_move(self.current_flags, self.max_flags, &mut *self.rng);
        if self.current_flags <= self.max_flags {
            flags_picked = self.current_flags;
        }

        self.current_flags -= flags_picked;
        let m = Move {
            player: self.player,
            flags_picked,
            remaining_flags: self.current_flags,
        };
        self.player = self.player.opposite();
        Some(m)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.current_flags == 0 {
            return (0, Some(0));
        }
        let lower = self.current_flags.div_ceil(self.max_flags) as usize;
        (lower, Some(self.current_flags as usize))
    }
}

impl<R> FusedIterator for Turns<'_, R> where R: RandomSource + ?Sized {}

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

    fn game(total_flags: u32, max_flags: u32) -> FlagGame {
        FlagGame::new(GameConfig::new(total_flags, max_flags).unwrap())
    }

    fn mv(player: Player, flags_picked: u32, remaining_flags: u32) -> Move {
        Move {
            player,
            flags_picked,
            remaining_flags,
        }
    }

    #[test]
    fn first_player_drives_winning_game() {
        let log = game(10, 3).simulate(&mut Always(1));
        assert_eq!(
            log.moves(),
            &[
                mv(Player::First, 2, 8),
                mv(Player::Second, 1, 7),
                mv(Player::First, 3, 4),
                mv(Player::Second, 1, 3),
                mv(Player::First, 3, 0),
            ]
        );
        assert_eq!(log.winner(), Some(Player::First));
        assert_eq!(log.flags_picked_by(Player::First), 8);
        assert_eq!(log.flags_picked_by(Player::Second), 2);
    }

    #[test]
    fn lost_opening_is_labelled_with_predicted_winner() {
        let game = game(8, 3);
        assert_eq!(game.initial_strategy().winner, Player::Second);

        let log = game.simulate(&mut Always(3));
        assert_eq!(
            log.moves(),
            &[
                mv(Player::Second, 3, 5),
                mv(Player::First, 1, 4),
                mv(Player::Second, 3, 1),
                mv(Player::First, 1, 0),
            ]
        );
        assert_eq!(log.moves()[0].player, game.initial_strategy().winner);
        assert_eq!(log.winner(), Some(Player::First));
    }

    #[test]
    fn single_flag() {
        let log = game(1, 1).simulate(&mut Always(1));
        assert_eq!(log.moves(), &[mv(Player::First, 1, 0)]);
    }

    #[test]
    fn simulation_does_not_consume_game() {
        let game = game(13, 4);
        let mut rng = StdRng::seed_from_u64(1);
        let first = game.simulate(&mut rng);
        let second = game.simulate(&mut rng);
        assert_eq!(first.flags_picked(), 13);
        assert_eq!(second.flags_picked(), 13);
    }

    #[test]
    fn same_seed_same_game() {
        let game = game(40, 3);
        let lhs = game.simulate(&mut StdRng::seed_from_u64(1234));
        let rhs = game.simulate(&mut StdRng::seed_from_u64(1234));
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn turns_are_lazy() {
        let game = game(12, 3);
        let mut rng = Always(2);
        let mut turns = game.turns(&mut rng);
        assert_eq!(turns.player_to_move(), Player::Second);
        assert_eq!(turns.next(), Some(mv(Player::Second, 2, 10)));
        assert_eq!(turns.current_flags(), 10);
        assert_eq!(turns.player_to_move(), Player::First);
        assert_eq!(turns.by_ref().count(), 5);
        assert_eq!(turns.next(), None);
        assert_eq!(turns.size_hint(), (0, Some(0)));
    }

    #[test]
    fn display_lists_moves() {
        let log = game(4, 3).simulate(&mut Always(1));
        assert_eq!(
            log.to_string(),
            "second player picked 1 flags. Remaining flags: 3\n\
             first player picked 3 flags. Remaining flags: 0"
        );
    }

    #[test]
    fn simulated_games_are_well_formed() {
        let test = |config: GameConfig, seed: u64| {
            let game = FlagGame::new(config);
            let log = game.simulate(&mut StdRng::seed_from_u64(seed));

            assert!(!log.is_empty());
            assert!(log.len() <= config.total_flags() as usize);
            let strategy = game.initial_strategy();
            let opener = log.moves()[0].player;
            assert_eq!(opener, strategy.winner);
            assert_eq!(log.moves().last().map(|m| m.remaining_flags), Some(0));
            assert_eq!(log.flags_picked(), u64::from(config.total_flags()));
            let last_mover = match strategy.opening_move {
                Some(_) => opener,
                None => opener.opposite(),
            };
            assert_eq!(log.winner(), Some(last_mover));

            let mut pile = config.total_flags();
            for m in &log {
                assert!((1..=config.max_flags()).contains(&m.flags_picked));
                pile -= m.flags_picked;
                assert_eq!(m.remaining_flags, pile);
            }
            for (prev, next) in log.iter().tuple_windows() {
                assert_eq!(next.player, prev.player.opposite());
            }
        };
        QuickCheck::new().quickcheck(test as fn(GameConfig, u64));
    }
}
