//! Terminal falling-block puzzle game.
//!
//! The simulation core lives in [`core`] and is free of any I/O. Two render
//! adapters consume its snapshots: [`term`] (real-time, full-screen) and
//! [`line`] (blocking, turn-based fallback).

pub mod core;
pub mod input;
pub mod line;
pub mod term;
pub mod types;
