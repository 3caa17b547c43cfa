//! Direction of travel and the rule for which turns are allowed.
use std::fmt;

use super::snake_error::{Result, SnakeError};

/// Arrow key codes as delivered by the input layer.
pub const KEY_LEFT: u32 = 37;
pub const KEY_UP: u32 = 38;
pub const KEY_RIGHT: u32 = 39;
pub const KEY_DOWN: u32 = 40;

/// Direction the snake is moving in.
///
/// Variants are declared in clockwise order, so neighbours in
/// [`Direction::VARIANTS`] (wrapping around) are exactly the 90 degree turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const VARIANTS: [Direction; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    fn cycle_index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }

    /// Direction after a clockwise quarter turn.
    #[must_use]
    pub fn turn_right(self) -> Direction {
        Self::VARIANTS[(self.cycle_index() + 1) % 4]
    }

    /// Direction after a counter-clockwise quarter turn.
    #[must_use]
    pub fn turn_left(self) -> Direction {
        Self::VARIANTS[(self.cycle_index() + 3) % 4]
    }

    #[must_use]
    pub fn opposite(self) -> Direction {
        Self::VARIANTS[(self.cycle_index() + 2) % 4]
    }

    /// True if `other` is a left or right turn away from `self`.
    #[must_use]
    pub fn is_adjacent(self, other: Direction) -> bool {
        other == self.turn_left() || other == self.turn_right()
    }

    /// Returns the (dx, dy) step for this direction. y grows downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    #[must_use]
    pub fn key_code(self) -> u32 {
        match self {
            Direction::Up => KEY_UP,
            Direction::Right => KEY_RIGHT,
            Direction::Down => KEY_DOWN,
            Direction::Left => KEY_LEFT,
        }
    }

    /// Translates an arrow key code into a direction.
    ///
    /// # Errors
    ///
    /// Returns [`SnakeError::InvalidDirectionCode`] for anything but 37 to 40.
    pub fn from_key_code(code: u32) -> Result<Direction> {
        match code {
            KEY_UP => Ok(Direction::Up),
            KEY_RIGHT => Ok(Direction::Right),
            KEY_DOWN => Ok(Direction::Down),
            KEY_LEFT => Ok(Direction::Left),
            _ => Err(SnakeError::InvalidDirectionCode(code)),
        }
    }
}

impl TryFrom<u32> for Direction {
    type Error = SnakeError;

    fn try_from(code: u32) -> Result<Self> {
        Direction::from_key_code(code)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "Up"),
            Direction::Right => write!(f, "Right"),
            Direction::Down => write!(f, "Down"),
            Direction::Left => write!(f, "Left"),
        }
    }
}

/// Decides which way the snake heads next given the player's input.
///
/// Only a left or right turn is accepted. Reversing into the body and repeating
/// the current direction both leave `current_direction` in place.
#[must_use]
pub fn identify_next_direction(
    new_direction: Direction,
    current_direction: Direction,
) -> Direction {
    if current_direction.is_adjacent(new_direction) {
        new_direction
    } else {
        current_direction
    }
}

/// Same rule as [`identify_next_direction`] on raw key codes.
///
/// Unknown codes on either side never fail; `current_code` comes back untouched.
#[must_use]
pub fn identify_next_direction_code(new_code: u32, current_code: u32) -> u32 {
    match (
        Direction::from_key_code(new_code),
        Direction::from_key_code(current_code),
    ) {
        (Ok(new_direction), Ok(current_direction)) => {
            identify_next_direction(new_direction, current_direction).key_code()
        }
        _ => current_code,
    }
}
