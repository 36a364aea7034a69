pub mod cli;

pub mod core {
	pub mod app;
}

pub mod game {
	pub mod catalog;
	pub mod engine;
	pub mod rng;
	pub mod round;
}

pub mod ui;

// Re-export for convenience
pub use crate::game::engine::{GameEngine, Intent, Notice};
pub use crate::game::round::{Outcome, Round, MAX_WRONG_GUESSES};
