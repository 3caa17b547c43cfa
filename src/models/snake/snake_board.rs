//! Board dimensions.
use rand::Rng;

use super::{
    snake_error::{Result, SnakeError},
    snake_meal::{generate_random_meal_with_rng, Meal},
    snake_movement::{has_wall_collision, Coordinate},
};

/// Default number of columns.
pub const DEFAULT_COLUMNS: i32 = 20;
/// Default number of rows.
pub const DEFAULT_ROWS: i32 = 20;

const _: () = assert!(DEFAULT_COLUMNS >= 1 && DEFAULT_ROWS >= 1);

/// Width and height of the playing field, at least one cell each way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    columns: i32,
    rows: i32,
}

impl Board {
    /// # Errors
    ///
    /// Returns [`SnakeError::InvalidBoardSize`] if either axis is smaller than 1.
    pub fn new(columns: i32, rows: i32) -> Result<Self> {
        if columns < 1 || rows < 1 {
            return Err(SnakeError::InvalidBoardSize { columns, rows });
        }
        Ok(Self { columns, rows })
    }

    #[must_use]
    pub fn columns(self) -> i32 {
        self.columns
    }

    #[must_use]
    pub fn rows(self) -> i32 {
        self.rows
    }

    #[must_use]
    pub fn cell_count(self) -> i64 {
        i64::from(self.columns) * i64::from(self.rows)
    }

    /// True if a meal could spawn on `cell`, i.e. it lies in `[1, columns] x [1, rows]`.
    #[must_use]
    pub fn contains(self, cell: Coordinate) -> bool {
        (1..=self.columns).contains(&cell.x) && (1..=self.rows).contains(&cell.y)
    }

    /// # Errors
    ///
    /// [`SnakeError::EmptySnake`] if `snake` has no segments.
    pub fn has_wall_collision(self, snake: &[Coordinate]) -> Result<bool> {
        has_wall_collision(snake, self.columns, self.rows)
    }

    /// # Errors
    ///
    /// [`SnakeError::BoardFull`] if the snake covers every cell.
    pub fn generate_random_meal(self, snake: &[Coordinate]) -> Result<Meal> {
        self.generate_random_meal_with_rng(&mut rand::thread_rng(), snake)
    }

    /// # Errors
    ///
    /// [`SnakeError::BoardFull`] if the snake covers every cell.
    pub fn generate_random_meal_with_rng<R: Rng + ?Sized>(
        self,
        rng: &mut R,
        snake: &[Coordinate],
    ) -> Result<Meal> {
        generate_random_meal_with_rng(rng, self.columns, self.rows, snake)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn test_default_board() {
        let board = Board::default();
        assert_eq!(board.columns(), 20);
        assert_eq!(board.rows(), 20);
        assert_eq!(board.cell_count(), 400);
        assert_eq!(Board::new(DEFAULT_COLUMNS, DEFAULT_ROWS), Ok(board));
    }

    #[test]
    fn test_board_size_validation() {
        assert!(Board::new(1, 1).is_ok());
        assert_eq!(
            Board::new(0, 10),
            Err(SnakeError::InvalidBoardSize { columns: 0, rows: 10 })
        );
        assert_eq!(
            Board::new(10, -1),
            Err(SnakeError::InvalidBoardSize { columns: 10, rows: -1 })
        );
    }

    #[test]
    fn test_contains_uses_meal_range() {
        let board = Board::new(10, 8).unwrap();
        assert!(board.contains(Coordinate::new(1, 1)));
        assert!(board.contains(Coordinate::new(10, 8)));
        assert!(!board.contains(Coordinate::new(0, 4)));
        assert!(!board.contains(Coordinate::new(4, 9)));
    }

    #[test]
    fn test_board_wall_collision() {
        let board = Board::new(10, 10).unwrap();
        assert_eq!(board.has_wall_collision(&[Coordinate::new(0, 5)]), Ok(false));
        assert_eq!(board.has_wall_collision(&[Coordinate::new(11, 5)]), Ok(true));
    }

    #[test]
    fn test_board_meal_is_on_board() {
        let board = Board::new(6, 3).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let snake = [Coordinate::new(1, 1), Coordinate::new(1, 2)];
        for _ in 0..100 {
            let meal = board.generate_random_meal_with_rng(&mut rng, &snake).unwrap();
            assert!(board.contains(meal.position));
            assert!(!snake.contains(&meal.position));
        }
        assert!(board.generate_random_meal(&snake).is_ok());
    }
}
