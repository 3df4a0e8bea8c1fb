//! Terminal Snake with three heuristic assists: distance-biased food
//! placement, a greedy ghost rival and score-driven speed adaptation.
//!
//! The simulation (`game`, `snake`, `grid`, `food`, `ghost`, `difficulty`)
//! is free of terminal concerns and can be driven tick by tick from tests.

pub mod clock;
pub mod config;
pub mod difficulty;
pub mod feedback;
pub mod food;
pub mod game;
pub mod ghost;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
