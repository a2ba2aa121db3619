#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The solver core.

pub mod constraints;
pub mod grid;
pub mod solver;
pub mod trail;
pub mod variable_selection;
