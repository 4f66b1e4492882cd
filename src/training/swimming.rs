//! Swimming - distance counted in strokes, speed from pool laps

use super::{M_IN_KM, Session, Training, WorkoutKind, positive};
use crate::error::TrainingError;

/// Distance of one stroke, meters
pub const LEN_STEP: f64 = 1.38;

const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    session: Session,
    length_pool: f64, // m
    count_pool: u32,
}

impl Swimming {
    pub fn new(
        action: u32,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: u32,
    ) -> Result<Self, TrainingError> {
        Ok(Self {
            session: Session::new(action, duration, weight)?,
            length_pool: positive("length_pool", length_pool)?,
            count_pool,
        })
    }

    pub fn length_pool(&self) -> f64 {
        self.length_pool
    }

    pub fn count_pool(&self) -> u32 {
        self.count_pool
    }
}

impl Training for Swimming {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn len_step(&self) -> f64 {
        LEN_STEP
    }

    fn mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool as f64 / M_IN_KM / self.session.duration()
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + CALORIES_MEAN_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.session.weight()
    }
}
