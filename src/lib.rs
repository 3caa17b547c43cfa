#![deny(warnings)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(unsafe_code)]

//! Rules of a grid based snake game: movement, turning, collisions and meal spawning.
//!
//! Everything here is a pure function over a snake given as a tail-first slice of
//! [`models::snake::snake_movement::Coordinate`]s. Growing or shrinking the snake,
//! timing, input and drawing are left to the caller.

pub mod models;
