//! Errors produced by the snake rules.
use std::fmt;

use super::{snake_direction::Direction, snake_movement::Coordinate};

pub type Result<T> = std::result::Result<T, SnakeError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnakeError {
    /// The snake has no segments, so there is no head to look at.
    EmptySnake,
    /// A key code other than the four arrow keys.
    InvalidDirectionCode(u32),
    /// A meal type index other than 0 (mouse) or 1 (frog).
    InvalidMealKind(u8),
    /// Board has fewer than one column or row.
    InvalidBoardSize { columns: i32, rows: i32 },
    /// Stepping from `from` in `direction` would leave the `i32` range.
    CoordinateOverflow { from: Coordinate, direction: Direction },
    /// Every cell of the board is taken by the snake.
    BoardFull,
}

impl fmt::Display for SnakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnakeError::EmptySnake => write!(f, "snake has no segments"),
            SnakeError::InvalidDirectionCode(code) => {
                write!(f, "{code} is not an arrow key code")
            }
            SnakeError::InvalidMealKind(index) => write!(f, "{index} is not a meal type"),
            SnakeError::InvalidBoardSize { columns, rows } => {
                write!(f, "board of {columns}x{rows} needs at least one cell per axis")
            }
            SnakeError::CoordinateOverflow { from, direction } => {
                write!(f, "moving {direction} from ({}, {}) overflows", from.x, from.y)
            }
            SnakeError::BoardFull => write!(f, "no free cell left on the board"),
        }
    }
}

impl std::error::Error for SnakeError {}
