//! fitcalc - Fitness training calculator
//!
//! Turns raw sensor packages into distance, mean speed and spent calories
//! for running, sports walking and swimming.

pub mod error;
pub mod info;
pub mod package;
pub mod training;

pub use error::TrainingError;
pub use info::InfoMessage;
pub use package::read_package;
pub use training::{Training, Workout, WorkoutKind};
