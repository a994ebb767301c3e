//! Train simulation.
//!
//! Places trains on the built network and advances them tick by tick.
//! Randomness is injected by the caller, so simulations are reproducible
//! under a seeded generator.

mod engine;
mod train;

pub use engine::{advance_all, generate_trains};
pub use train::Train;
