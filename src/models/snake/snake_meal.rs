//! Meals: what they are, where they spawn, and when the snake reaches one.
use std::{collections::HashSet, fmt};

use log::{debug, warn};
use rand::{seq::SliceRandom, Rng};

use super::{
    snake_error::{Result, SnakeError},
    snake_movement::{head, Coordinate},
};

/// Number of random draws before switching to picking from the list of free cells.
pub const MAX_REJECTION_ATTEMPTS: usize = 256;

/// Kind of meal on the board. Only changes how it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MealKind {
    Mouse,
    Frog,
}

impl MealKind {
    pub const VARIANTS: [MealKind; 2] = [Self::Mouse, Self::Frog];

    #[must_use]
    pub fn index(self) -> u8 {
        match self {
            MealKind::Mouse => 0,
            MealKind::Frog => 1,
        }
    }

    /// # Errors
    ///
    /// Returns [`SnakeError::InvalidMealKind`] for anything but 0 or 1.
    pub fn from_index(index: u8) -> Result<MealKind> {
        match index {
            0 => Ok(MealKind::Mouse),
            1 => Ok(MealKind::Frog),
            _ => Err(SnakeError::InvalidMealKind(index)),
        }
    }

    /// Picks a kind with even odds.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> MealKind {
        if rng.gen_bool(0.5) {
            MealKind::Frog
        } else {
            MealKind::Mouse
        }
    }
}

impl TryFrom<u8> for MealKind {
    type Error = SnakeError;

    fn try_from(index: u8) -> Result<Self> {
        MealKind::from_index(index)
    }
}

impl fmt::Display for MealKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MealKind::Mouse => write!(f, "Mouse"),
            MealKind::Frog => write!(f, "Frog"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meal {
    pub position: Coordinate,
    pub kind: MealKind,
}

impl Meal {
    #[must_use]
    pub fn new(position: Coordinate, kind: MealKind) -> Self {
        Self { position, kind }
    }
}

/// Spawns a meal somewhere on `[1, columns] x [1, rows]` that the snake does not cover.
///
/// Uses the thread local generator; see [`generate_random_meal_with_rng`].
///
/// # Errors
///
/// See [`generate_random_meal_with_rng`].
pub fn generate_random_meal(columns: i32, rows: i32, snake: &[Coordinate]) -> Result<Meal> {
    generate_random_meal_with_rng(&mut rand::thread_rng(), columns, rows, snake)
}

/// Spawns a meal using `rng`.
///
/// Every free cell is equally likely and the kind is a coin flip.
///
/// # Errors
///
/// [`SnakeError::InvalidBoardSize`] if either axis is smaller than 1, and
/// [`SnakeError::BoardFull`] if the snake covers every cell.
pub fn generate_random_meal_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    columns: i32,
    rows: i32,
    snake: &[Coordinate],
) -> Result<Meal> {
    if columns < 1 || rows < 1 {
        return Err(SnakeError::InvalidBoardSize { columns, rows });
    }
    let position = sample_free_cell(rng, columns, rows, snake, MAX_REJECTION_ATTEMPTS)?;
    Ok(Meal::new(position, MealKind::random(rng)))
}

fn sample_free_cell<R: Rng + ?Sized>(
    rng: &mut R,
    columns: i32,
    rows: i32,
    snake: &[Coordinate],
    max_attempts: usize,
) -> Result<Coordinate> {
    for _ in 0..max_attempts {
        let candidate = Coordinate::new(rng.gen_range(1..=columns), rng.gen_range(1..=rows));
        if !snake.contains(&candidate) {
            return Ok(candidate);
        }
    }

    debug!("No free cell after {max_attempts} draws on {columns}x{rows}, listing free cells");
    let taken: HashSet<Coordinate> = snake.iter().copied().collect();
    let free: Vec<Coordinate> = (1..=rows)
        .flat_map(|y| (1..=columns).map(move |x| Coordinate::new(x, y)))
        .filter(|cell| !taken.contains(cell))
        .collect();
    if let Some(cell) = free.choose(rng) {
        Ok(*cell)
    } else {
        warn!("Snake covers the whole {columns}x{rows} board, no place for a meal");
        Err(SnakeError::BoardFull)
    }
}

/// Checks whether the head is on the meal.
///
/// # Errors
///
/// [`SnakeError::EmptySnake`] if `snake` has no segments.
pub fn has_found_meal(snake: &[Coordinate], meal: &Meal) -> Result<bool> {
    Ok(head(snake)? == meal.position)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    /// Every cell of the board except `free`.
    fn all_but(columns: i32, rows: i32, free: Coordinate) -> Vec<Coordinate> {
        let mut cells = Vec::new();
        for y in 1..=rows {
            for x in 1..=columns {
                let cell = Coordinate::new(x, y);
                if cell != free {
                    cells.push(cell);
                }
            }
        }
        cells
    }

    #[test]
    fn test_meal_kind_index() {
        assert_eq!(MealKind::Mouse.index(), 0);
        assert_eq!(MealKind::Frog.index(), 1);
        assert_eq!(MealKind::try_from(1), Ok(MealKind::Frog));
        assert_eq!(MealKind::from_index(2), Err(SnakeError::InvalidMealKind(2)));
    }

    #[test]
    fn test_meal_is_inside_board_and_off_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = vec![
            Coordinate::new(1, 1),
            Coordinate::new(2, 1),
            Coordinate::new(3, 1),
        ];
        for _ in 0..500 {
            let meal = generate_random_meal_with_rng(&mut rng, 5, 4, &snake).unwrap();
            assert!((1..=5).contains(&meal.position.x));
            assert!((1..=4).contains(&meal.position.y));
            assert!(!snake.contains(&meal.position));
        }
    }

    #[test]
    fn test_meal_lands_on_only_free_cell() {
        let _ = env_logger::builder().is_test(true).try_init();
        let free = Coordinate::new(3, 2);
        let snake = all_but(4, 3, free);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let meal = generate_random_meal_with_rng(&mut rng, 4, 3, &snake).unwrap();
            assert_eq!(meal.position, free);
        }
    }

    #[test]
    fn test_free_cell_fallback() {
        let mut rng = StdRng::seed_from_u64(3);
        let free = Coordinate::new(6, 6);
        let snake = all_but(8, 8, free);
        assert_eq!(sample_free_cell(&mut rng, 8, 8, &snake, 0), Ok(free));
    }

    #[test]
    fn test_full_board() {
        let snake = all_but(3, 3, Coordinate::new(0, 0));
        assert_eq!(
            generate_random_meal(3, 3, &snake),
            Err(SnakeError::BoardFull)
        );
    }

    #[test]
    fn test_invalid_board_size() {
        assert_eq!(
            generate_random_meal(0, 5, &[]),
            Err(SnakeError::InvalidBoardSize { columns: 0, rows: 5 })
        );
        assert_eq!(
            generate_random_meal(5, -2, &[]),
            Err(SnakeError::InvalidBoardSize { columns: 5, rows: -2 })
        );
    }

    #[test]
    fn test_single_cell_board() {
        let meal = generate_random_meal(1, 1, &[Coordinate::new(0, 0)]).unwrap();
        assert_eq!(meal.position, Coordinate::new(1, 1));
    }

    #[test]
    fn test_both_kinds_spawn() {
        let mut rng = StdRng::seed_from_u64(42);
        let kinds: HashSet<MealKind> = (0..200)
            .map(|_| generate_random_meal_with_rng(&mut rng, 10, 10, &[]).unwrap().kind)
            .collect();
        assert_eq!(kinds.len(), 2);
    }

    #[test]
    fn test_found_meal() {
        let meal = Meal::new(Coordinate::new(4, 2), MealKind::Mouse);
        let on_meal = [Coordinate::new(3, 2), Coordinate::new(4, 2)];
        let next_to_meal = [Coordinate::new(4, 2), Coordinate::new(4, 3)];
        assert_eq!(has_found_meal(&on_meal, &meal), Ok(true));
        // only the head counts
        assert_eq!(has_found_meal(&next_to_meal, &meal), Ok(false));
        assert_eq!(
            has_found_meal(&[Coordinate::new(2, 4)], &meal),
            Ok(false)
        );
        assert_eq!(has_found_meal(&[], &meal), Err(SnakeError::EmptySnake));
    }
}
