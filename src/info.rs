//! Informational message about a finished training

use std::fmt;

use serde::{Deserialize, Serialize};

/// Computed results of one training, rounded only when rendered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    pub training_type: String,
    pub duration: f64, // hours
    pub distance: f64, // km
    pub speed: f64,    // km/h
    pub calories: f64, // kcal
}

impl InfoMessage {
    pub fn new(training_type: &str, duration: f64, distance: f64, speed: f64, calories: f64) -> Self {
        Self {
            training_type: training_type.to_string(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    /// Human-readable summary line
    pub fn get_message(&self) -> String {
        format!(
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_format() {
        let info = InfoMessage::new("Swimming", 1.0, 0.9936, 1.0, 336.0);
        assert_eq!(
            info.get_message(),
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
        );
    }

    #[test]
    fn test_message_is_stable() {
        let info = InfoMessage::new("Running", 1.5, 9.75, 6.5, 701.925);
        assert_eq!(info.get_message(), info.get_message());
        assert_eq!(info.to_string(), info.get_message());
    }

    #[test]
    fn test_values_not_rounded_before_render() {
        let info = InfoMessage::new("Swimming", 1.0, 0.9936, 1.0, 336.0);
        assert_eq!(info.distance, 0.9936);
    }

    #[test]
    fn test_json_fields() {
        let info = InfoMessage::new("Running", 1.0, 9.75, 9.75, 701.925);
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["training_type"], "Running");
        assert_eq!(json["distance"], 9.75);
    }
}
