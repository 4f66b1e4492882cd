//! Errors raised while turning sensor packages into trainings

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrainingError {
    #[error("workout type {0} is not defined")]
    UnknownWorkoutType(String),
    #[error("workout type {code} expects {expected} parameters, got {got}")]
    Arity {
        code: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("training duration must be greater than zero")]
    ZeroDuration,
    #[error("invalid value for {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}
