//! Running

use super::{M_IN_KM, MIN_IN_H, Session, Training, WorkoutKind};
use crate::error::TrainingError;

const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    session: Session,
}

impl Running {
    pub fn new(action: u32, duration: f64, weight: f64) -> Result<Self, TrainingError> {
        Ok(Self {
            session: Session::new(action, duration, weight)?,
        })
    }
}

impl Training for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn spent_calories(&self) -> f64 {
        let duration_in_min = self.session.duration() * MIN_IN_H;
        (CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed() - CALORIES_MEAN_SPEED_SHIFT)
            * self.session.weight()
            / M_IN_KM
            * duration_in_min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_sample() {
        let running = Running::new(15000, 1.0, 75.0).unwrap();
        assert!((running.distance() - 9.75).abs() < 1e-9);
        assert!((running.mean_speed() - 9.75).abs() < 1e-9);
        // (18 * 9.75 - 20) * 75 / 1000 * 60
        assert!((running.spent_calories() - 699.75).abs() < 1e-9);
    }

    #[test]
    fn test_running_speed_depends_on_duration() {
        let running = Running::new(15000, 1.5, 75.0).unwrap();
        assert!((running.mean_speed() - 6.5).abs() < 1e-9);
    }

    #[test]
    fn test_running_info() {
        let info = Running::new(15000, 1.0, 75.0).unwrap().show_training_info();
        assert_eq!(info.training_type, "Running");
        assert_eq!(
            info.get_message(),
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
        );
    }

    #[test]
    fn test_running_zero_duration() {
        assert_eq!(Running::new(15000, 0.0, 75.0), Err(TrainingError::ZeroDuration));
    }
}
