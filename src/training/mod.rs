//! Training model - distance, speed and calories per workout type
//!
//! Every workout type implements [`Training`]. Distance and mean speed have
//! shared default formulas; calories have none, so each type must supply its
//! own before it can be used at all.

pub mod running;
pub mod swimming;
pub mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use serde::{Deserialize, Serialize};

use crate::error::TrainingError;
use crate::info::InfoMessage;

/// Distance of one step, meters
pub const LEN_STEP: f64 = 0.65;
pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// Workout types known to the sensor packages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    /// Short code used in sensor packages
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Display name used in the info message
    pub fn name(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Number of positional parameters in a package of this type
    pub fn param_count(&self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }

    pub fn all() -> &'static [WorkoutKind] {
        &[
            WorkoutKind::Swimming,
            WorkoutKind::Running,
            WorkoutKind::SportsWalking,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.code() == code)
    }
}

/// Fields shared by every workout type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    action: u32,
    duration: f64, // hours
    weight: f64,   // kg
}

impl Session {
    pub fn new(action: u32, duration: f64, weight: f64) -> Result<Self, TrainingError> {
        if duration == 0.0 {
            return Err(TrainingError::ZeroDuration);
        }
        Ok(Self {
            action,
            duration: positive("duration", duration)?,
            weight: positive("weight", weight)?,
        })
    }

    /// Steps or strokes recorded by the sensor
    pub fn action(&self) -> u32 {
        self.action
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Check a measurement is a finite number greater than zero
pub(crate) fn positive(name: &'static str, value: f64) -> Result<f64, TrainingError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TrainingError::InvalidParameter { name, value })
    }
}

/// Check a sensor counter is a non-negative whole number
pub(crate) fn count(name: &'static str, value: f64) -> Result<u32, TrainingError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Ok(value as u32)
    } else {
        Err(TrainingError::InvalidParameter { name, value })
    }
}

/// Common behaviour of all workout types
pub trait Training {
    fn kind(&self) -> WorkoutKind;

    fn session(&self) -> &Session;

    fn len_step(&self) -> f64 {
        LEN_STEP
    }

    /// Distance covered, km
    fn distance(&self) -> f64 {
        self.session().action() as f64 * self.len_step() / M_IN_KM
    }

    /// Mean speed, km/h
    fn mean_speed(&self) -> f64 {
        self.distance() / self.session().duration()
    }

    /// Calories spent, kcal
    fn spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage::new(
            self.kind().name(),
            self.session().duration(),
            self.distance(),
            self.mean_speed(),
            self.spent_calories(),
        )
    }
}

/// A training of any known type
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    fn as_training(&self) -> &dyn Training {
        match self {
            Workout::Running(t) => t,
            Workout::SportsWalking(t) => t,
            Workout::Swimming(t) => t,
        }
    }
}

impl Training for Workout {
    fn kind(&self) -> WorkoutKind {
        self.as_training().kind()
    }

    fn session(&self) -> &Session {
        self.as_training().session()
    }

    fn len_step(&self) -> f64 {
        self.as_training().len_step()
    }

    fn distance(&self) -> f64 {
        self.as_training().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.as_training().mean_speed()
    }

    fn spent_calories(&self) -> f64 {
        self.as_training().spent_calories()
    }
}

impl From<Running> for Workout {
    fn from(t: Running) -> Self {
        Workout::Running(t)
    }
}

impl From<SportsWalking> for Workout {
    fn from(t: SportsWalking) -> Self {
        Workout::SportsWalking(t)
    }
}

impl From<Swimming> for Workout {
    fn from(t: Swimming) -> Self {
        Workout::Swimming(t)
    }
}
