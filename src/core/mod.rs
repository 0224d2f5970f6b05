//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI or terminal I/O.

pub mod board;
pub mod catalog;
pub mod game;
pub mod piece;
pub mod rng;
pub mod snapshot;

pub use board::Board;
pub use catalog::{shape_for, Shape, CATALOG};
pub use game::Game;
pub use piece::Piece;
pub use rng::{PieceSource, RandomSource, SimpleRng};
pub use snapshot::{GameSnapshot, PieceView};
