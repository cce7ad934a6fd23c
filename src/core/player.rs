//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! Nine Men's Morris is strictly two-player, so the identity type is a
//! closed two-variant enum rather than a numeric id. This removes the
//! class of key-typo bugs that dictionary-keyed player state invites.
//!
//! ## PlayerPair
//!
//! Fixed two-slot storage indexed by `Player`. Both slots always exist,
//! so lookups are infallible and O(1).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Slot index (0 for White, 1 for Black).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::White => 0,
            Player::Black => 1,
        }
    }

    /// Both players, White first.
    ///
    /// ```
    /// use morris_engine::core::Player;
    ///
    /// let players: Vec<_> = Player::both().collect();
    /// assert_eq!(players, vec![Player::White, Player::Black]);
    /// ```
    pub fn both() -> impl Iterator<Item = Player> {
        [Player::White, Player::Black].into_iter()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}

/// Per-player data storage with infallible O(1) access.
///
/// ## Example
///
/// ```
/// use morris_engine::core::{Player, PlayerPair};
///
/// let mut hands: PlayerPair<u8> = PlayerPair::with_value(9);
///
/// assert_eq!(hands[Player::White], 9);
///
/// hands[Player::Black] -= 1;
/// assert_eq!(hands[Player::Black], 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::White), factory(Player::Black)],
        }
    }

    /// Create a pair with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs, White first.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::both().zip(self.data.iter())
    }
}

impl<T: Default> Default for PlayerPair<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Player> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerPair<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
