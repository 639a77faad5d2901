use thiserror::Error;

/// Failures raised while turning a sensor package into a workout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrainingError {
    #[error("unknown workout type {code:?} (expected one of SWM, RUN, WLK)")]
    UnknownWorkoutType { code: String },

    #[error("{code} expects {expected} readings, got {got}")]
    ArityMismatch {
        code: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("invalid {field} reading {value}: {reason}")]
    InvalidReading {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

pub type Result<T, E = TrainingError> = std::result::Result<T, E>;
