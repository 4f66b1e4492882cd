//! Sensor packages - build a training from a type code and raw readings

use tracing::debug;

use crate::error::TrainingError;
use crate::training::{Running, SportsWalking, Swimming, Workout, WorkoutKind, count};

/// Build a workout from a package code and its positional parameters
///
/// Parameter order per code:
/// - `SWM`: action, duration, weight, length_pool, count_pool
/// - `RUN`: action, duration, weight
/// - `WLK`: action, duration, weight, height
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout, TrainingError> {
    let kind = WorkoutKind::from_code(workout_type)
        .ok_or_else(|| TrainingError::UnknownWorkoutType(workout_type.to_string()))?;

    if data.len() != kind.param_count() {
        return Err(TrainingError::Arity {
            code: kind.code(),
            expected: kind.param_count(),
            got: data.len(),
        });
    }

    let action = count("action", data[0])?;
    let (duration, weight) = (data[1], data[2]);

    let workout: Workout = match kind {
        WorkoutKind::Running => Running::new(action, duration, weight)?.into(),
        WorkoutKind::SportsWalking => SportsWalking::new(action, duration, weight, data[3])?.into(),
        WorkoutKind::Swimming => {
            let count_pool = count("count_pool", data[4])?;
            Swimming::new(action, duration, weight, data[3], count_pool)?.into()
        }
    };

    debug!(code = kind.code(), "package read");
    Ok(workout)
}
