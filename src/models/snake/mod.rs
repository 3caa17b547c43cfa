pub mod snake_board;
pub mod snake_direction;
pub mod snake_error;
pub mod snake_meal;
pub mod snake_movement;
