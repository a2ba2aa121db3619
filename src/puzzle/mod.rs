#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Input glue around the solver core.

pub mod parse;
