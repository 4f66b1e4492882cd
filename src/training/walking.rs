//! Sports walking

use super::{MIN_IN_H, Session, Training, WorkoutKind, positive};
use crate::error::TrainingError;

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    session: Session,
    height: f64, // cm
}

impl SportsWalking {
    pub fn new(action: u32, duration: f64, weight: f64, height: f64) -> Result<Self, TrainingError> {
        Ok(Self {
            session: Session::new(action, duration, weight)?,
            height: positive("height", height)?,
        })
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Training for SportsWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn spent_calories(&self) -> f64 {
        let weight = self.session.weight();
        let duration_in_min = self.session.duration() * MIN_IN_H;
        // floor division, not a plain ratio
        let speed_per_height = self.mean_speed().powi(2).div_euclid(self.height);
        (CALORIES_WEIGHT_MULTIPLIER * weight
            + speed_per_height * CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * duration_in_min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walking_sample() {
        let walking = SportsWalking::new(9000, 1.0, 75.0, 180.0).unwrap();
        assert!((walking.distance() - 5.85).abs() < 1e-9);
        assert!((walking.mean_speed() - 5.85).abs() < 1e-9);
        // 5.85^2 // 180 == 0, only the weight term remains
        assert!((walking.spent_calories() - 157.5).abs() < 1e-9);
    }

    #[test]
    fn test_walking_floor_division_kicks_in() {
        // speed 20 km/h: 400 // 180 == 2
        let walking = SportsWalking::new(20_000_000 / 650, 1.0, 100.0, 180.0).unwrap();
        let speed = walking.mean_speed();
        let floored = (speed * speed / 180.0).floor();
        let expected = (0.035 * 100.0 + floored * 0.029 * 100.0) * 60.0;
        assert_eq!(floored, 2.0);
        assert!((walking.spent_calories() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_walking_rejects_zero_height() {
        assert_eq!(
            SportsWalking::new(9000, 1.0, 75.0, 0.0),
            Err(TrainingError::InvalidParameter { name: "height", value: 0.0 })
        );
    }

    #[test]
    fn test_walking_info_name() {
        let info = SportsWalking::new(9000, 1.0, 75.0, 180.0).unwrap().show_training_info();
        assert_eq!(info.training_type, "SportsWalking");
    }
}
