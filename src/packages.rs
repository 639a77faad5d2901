//! Turn raw sensor packages into workouts.

use crate::error::{Result, TrainingError};
use crate::training::{Running, SportsWalking, Swimming, Workout};
use crate::types::{Package, WorkoutCode};

/// Build the workout a sensor package describes.
///
/// `data` is assigned positionally:
/// - `RUN`: action, duration (h), weight (kg)
/// - `WLK`: action, duration (h), weight (kg), height (cm)
/// - `SWM`: action, duration (h), weight (kg), pool length (m), pool count
pub fn read_package(code: &str, data: &[f64]) -> Result<Workout> {
    let code: WorkoutCode = code.parse()?;
    if data.len() != code.arity() {
        return Err(TrainingError::ArityMismatch {
            code: code.as_str(),
            expected: code.arity(),
            got: data.len(),
        });
    }

    for &v in data {
        if !v.is_finite() {
            return Err(invalid("reading", v, "must be a finite number"));
        }
    }

    let action = action_count(data[0])?;
    let duration = positive("duration", data[1])?;
    let weight = non_negative("weight", data[2])?;

    let workout = match code {
        WorkoutCode::Running => Running::new(action, duration, weight).into(),
        WorkoutCode::Walking => {
            let height = positive("height", data[3])?;
            SportsWalking::new(action, duration, weight, height).into()
        }
        WorkoutCode::Swimming => {
            let length_pool = non_negative("length_pool", data[3])?;
            let count_pool = non_negative("count_pool", data[4])?;
            Swimming::new(action, duration, weight, length_pool, count_pool).into()
        }
    };

    Ok(workout)
}

/// Same as [`read_package`].
pub fn create_workout(code: &str, data: &[f64]) -> Result<Workout> {
    read_package(code, data)
}

impl TryFrom<&Package> for Workout {
    type Error = TrainingError;

    fn try_from(p: &Package) -> Result<Self> {
        read_package(&p.code, &p.data)
    }
}

const fn invalid(field: &'static str, value: f64, reason: &'static str) -> TrainingError {
    TrainingError::InvalidReading {
        field,
        value,
        reason,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn action_count(v: f64) -> Result<u32> {
    if v < 0.0 || v.fract() != 0.0 || v > f64::from(u32::MAX) {
        return Err(invalid(
            "action",
            v,
            "must be a whole number between 0 and u32::MAX",
        ));
    }
    Ok(v as u32)
}

fn positive(field: &'static str, v: f64) -> Result<f64> {
    if v > 0.0 {
        Ok(v)
    } else {
        Err(invalid(field, v, "must be greater than zero"))
    }
}

fn non_negative(field: &'static str, v: f64) -> Result<f64> {
    if v >= 0.0 {
        Ok(v)
    } else {
        Err(invalid(field, v, "must not be negative"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training::Training;

    #[test]
    fn test_builds_each_variant() {
        assert!(matches!(
            read_package("RUN", &[15000.0, 1.0, 75.0]),
            Ok(Workout::Running(_))
        ));
        assert!(matches!(
            read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]),
            Ok(Workout::Walking(_))
        ));
        assert!(matches!(
            read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
            Ok(Workout::Swimming(_))
        ));
    }

    #[test]
    fn test_positional_assignment() {
        let Ok(Workout::Swimming(s)) = read_package("SWM", &[720.0, 2.0, 80.0, 50.0, 10.0]) else {
            panic!("expected swimming");
        };
        assert_eq!(s.session().action, 720);
        assert!((s.session().duration - 2.0).abs() < f64::EPSILON);
        assert!((s.session().weight - 80.0).abs() < f64::EPSILON);
        assert!((s.length_pool() - 50.0).abs() < f64::EPSILON);
        assert!((s.count_pool() - 10.0).abs() < f64::EPSILON);

        let Ok(Workout::Walking(w)) = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]) else {
            panic!("expected walking");
        };
        assert!((w.height() - 180.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(
            read_package("XYZ", &[1.0, 2.0, 3.0]),
            Err(TrainingError::UnknownWorkoutType {
                code: "XYZ".to_string()
            })
        );
    }

    #[test]
    fn test_arity_mismatch() {
        assert_eq!(
            create_workout("WLK", &[1.0, 2.0]),
            Err(TrainingError::ArityMismatch {
                code: "WLK",
                expected: 4,
                got: 2
            })
        );
        assert!(matches!(
            create_workout("RUN", &[1.0, 2.0, 3.0, 4.0]),
            Err(TrainingError::ArityMismatch { expected: 3, got: 4, .. })
        ));
    }

    #[test]
    fn test_zero_duration_rejected() {
        assert!(matches!(
            read_package("RUN", &[100.0, 0.0, 75.0]),
            Err(TrainingError::InvalidReading { field: "duration", .. })
        ));
    }

    #[test]
    fn test_zero_height_rejected() {
        assert!(matches!(
            read_package("WLK", &[100.0, 1.0, 75.0, 0.0]),
            Err(TrainingError::InvalidReading { field: "height", .. })
        ));
    }

    #[test]
    fn test_fractional_action_rejected() {
        assert!(matches!(
            read_package("RUN", &[10.5, 1.0, 75.0]),
            Err(TrainingError::InvalidReading { field: "action", .. })
        ));
        assert!(matches!(
            read_package("RUN", &[-1.0, 1.0, 75.0]),
            Err(TrainingError::InvalidReading { field: "action", .. })
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            read_package("SWM", &[1.0, 1.0, 75.0, f64::NAN, 4.0]),
            Err(TrainingError::InvalidReading { field: "reading", .. })
        ));
    }

    #[test]
    fn test_negative_weight_rejected() {
        assert!(matches!(
            read_package("RUN", &[1.0, 1.0, -75.0]),
            Err(TrainingError::InvalidReading { field: "weight", .. })
        ));
    }

    #[test]
    fn test_negative_pool_values_rejected() {
        assert!(matches!(
            read_package("SWM", &[1.0, 1.0, 80.0, -25.0, 40.0]),
            Err(TrainingError::InvalidReading { field: "length_pool", .. })
        ));
        assert!(matches!(
            read_package("SWM", &[1.0, 1.0, 80.0, 25.0, -40.0]),
            Err(TrainingError::InvalidReading { field: "count_pool", .. })
        ));
    }

    #[test]
    fn test_infinite_reading_rejected() {
        assert!(matches!(
            read_package("RUN", &[1.0, f64::INFINITY, 75.0]),
            Err(TrainingError::InvalidReading { field: "reading", .. })
        ));
    }

    #[test]
    fn test_action_above_u32_rejected() {
        assert!(matches!(
            read_package("RUN", &[4_294_967_296.0, 1.0, 75.0]),
            Err(TrainingError::InvalidReading { field: "action", .. })
        ));
        let Ok(w) = read_package("RUN", &[f64::from(u32::MAX), 1.0, 75.0]) else {
            panic!("u32::MAX steps should be accepted");
        };
        assert_eq!(w.session().action, u32::MAX);
    }

    #[test]
    fn test_try_from_package() {
        let p = Package::new("RUN", [15000.0, 1.0, 75.0]);
        let w = Workout::try_from(&p).unwrap();
        assert!((w.get_distance() - 9.75).abs() < 1e-9);
    }
}
