//! Head movement and collision checks.
//!
//! A snake is a tail-first slice of [`Coordinate`]s: the last element is the head.
//! Nothing here mutates the snake; the caller appends the returned head and drops
//! the tail itself.
use log::debug;

use super::{
    snake_direction::Direction,
    snake_error::{Result, SnakeError},
};

/// A cell on the board. May be off the board for a moment, which is how a wall
/// hit is noticed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `None` if either axis would leave the `i32` range.
    #[must_use]
    pub fn moved_by(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    #[must_use]
    pub fn moved_in_direction(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Returns the head, i.e. the last segment.
///
/// # Errors
///
/// [`SnakeError::EmptySnake`] if `snake` has no segments.
pub fn head(snake: &[Coordinate]) -> Result<Coordinate> {
    snake.last().copied().ok_or(SnakeError::EmptySnake)
}

/// Every segment except the head. Empty for an empty snake.
#[must_use]
pub fn tail(snake: &[Coordinate]) -> &[Coordinate] {
    match snake.split_last() {
        Some((_, rest)) => rest,
        None => &[],
    }
}

/// Cell the head will occupy after one step in `direction`.
///
/// # Errors
///
/// [`SnakeError::EmptySnake`] if `snake` has no segments, or
/// [`SnakeError::CoordinateOverflow`] if the step leaves the `i32` range.
pub fn calculate_next_snake_pixel(
    snake: &[Coordinate],
    direction: Direction,
) -> Result<Coordinate> {
    let head = head(snake)?;
    head.moved_in_direction(direction)
        .ok_or(SnakeError::CoordinateOverflow { from: head, direction })
}

/// [`calculate_next_snake_pixel`] for a raw arrow key code.
///
/// # Errors
///
/// [`SnakeError::InvalidDirectionCode`] if `code` is not 37 to 40, otherwise as
/// [`calculate_next_snake_pixel`].
pub fn calculate_next_snake_pixel_from_code(
    snake: &[Coordinate],
    code: u32,
) -> Result<Coordinate> {
    let direction = Direction::from_key_code(code)?;
    calculate_next_snake_pixel(snake, direction)
}

/// Checks whether the head sits on any other segment.
///
/// # Errors
///
/// [`SnakeError::EmptySnake`] if `snake` has no segments.
pub fn has_self_collision(snake: &[Coordinate]) -> Result<bool> {
    let head = head(snake)?;
    let hit = tail(snake).contains(&head);
    if hit {
        debug!("Head at {head:?} ran into its own body");
    }
    Ok(hit)
}

/// Checks whether the head left the board.
///
/// Column 0 and row 0 count as inside, as do `columns` and `rows` themselves.
///
/// # Errors
///
/// [`SnakeError::EmptySnake`] if `snake` has no segments.
pub fn has_wall_collision(snake: &[Coordinate], columns: i32, rows: i32) -> Result<bool> {
    let Coordinate { x, y } = head(snake)?;
    let hit = x < 0 || x > columns || y < 0 || y > rows;
    if hit {
        debug!("Head at ({x}, {y}) is outside the {columns}x{rows} board");
    }
    Ok(hit)
}
