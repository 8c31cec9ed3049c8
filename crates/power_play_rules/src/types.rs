//! Core domain types for Power Play.

use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Player in the game.
///
/// Declaration order is the order in which the line scanner checks players.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Player {
    /// Gray pieces (code 1).
    Gray,
    /// White pieces (code 2).
    White,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Gray => Player::White,
            Player::White => Player::Gray,
        }
    }

    /// Numeric code used in grid documents.
    pub fn code(self) -> u8 {
        match self {
            Player::Gray => 1,
            Player::White => 2,
        }
    }
}

/// A cell on the Power Play grid.
///
/// Serializes as its numeric code: 0 neutral, 1 gray, 2 white.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Cell {
    /// No piece.
    #[default]
    Neutral,
    /// Cell holding a player's piece.
    Occupied(Player),
}

impl Cell {
    /// Code of a neutral cell.
    pub const NEUTRAL_CODE: u8 = 0;

    /// Converts a numeric code under the given policy.
    ///
    /// Under [`UnknownCellPolicy::Neutral`] unknown codes become
    /// [`Cell::Neutral`]; they can never take part in a winning window either way.
    #[instrument]
    pub fn from_code(code: u8, policy: UnknownCellPolicy) -> Result<Self, InvalidCellCode> {
        match (Self::try_from(code), policy) {
            (Ok(cell), _) => Ok(cell),
            (Err(_), UnknownCellPolicy::Neutral) => {
                warn!(code, "Unknown cell code read as neutral");
                Ok(Cell::Neutral)
            }
            (Err(e), UnknownCellPolicy::Reject) => Err(e),
        }
    }

    /// Numeric code of this cell.
    pub fn code(self) -> u8 {
        match self {
            Cell::Neutral => Self::NEUTRAL_CODE,
            Cell::Occupied(player) => player.code(),
        }
    }

    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Neutral => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

impl TryFrom<u8> for Cell {
    type Error = InvalidCellCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Cell::Neutral),
            1 => Ok(Cell::Occupied(Player::Gray)),
            2 => Ok(Cell::Occupied(Player::White)),
            other => Err(InvalidCellCode(other)),
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell.code()
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Occupied(player)
    }
}

/// A numeric code that names no cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Unknown cell code {} (expected 0, 1 or 2)", _0)]
pub struct InvalidCellCode(#[error(not(source))] pub u8);

/// How to treat cell codes other than 0, 1 and 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UnknownCellPolicy {
    /// Read the code as a neutral cell.
    #[default]
    Neutral,
    /// Fail the conversion.
    Reject,
}

/// Outcome of a win check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "status", content = "winner", rename_all = "snake_case")]
pub enum WinResult {
    /// No line holds four in a row.
    #[default]
    NotWon,
    /// The player completed four in a row.
    Won(Player),
}

impl WinResult {
    /// Returns true if some player won.
    pub fn is_won(self) -> bool {
        matches!(self, WinResult::Won(_))
    }

    /// Returns the winning player, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            WinResult::Won(player) => Some(player),
            WinResult::NotWon => None,
        }
    }
}

impl From<Option<Player>> for WinResult {
    fn from(winner: Option<Player>) -> Self {
        winner.map_or(WinResult::NotWon, WinResult::Won)
    }
}

impl std::fmt::Display for WinResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WinResult::Won(player) => write!(f, "{} wins", player),
            WinResult::NotWon => write!(f, "no winner"),
        }
    }
}
