//! Workout model: one calculation per workout type.
//!
//! Every derived value is a pure function of the readings a workout was
//! built from, so calling a getter twice always yields the same number.

use crate::message::InfoMessage;
use crate::types::WorkoutCode;

/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;
/// Step length in meters for running and walking.
pub const LEN_STEP: f64 = 0.65;
/// Stroke length in meters for swimming.
pub const LEN_STROKE: f64 = 1.38;

/// How `speed² / height` is divided in the walking calorie formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedHeightDivision {
    /// Floor division, the historical behaviour reports were calibrated on.
    #[default]
    Floor,
    /// Ordinary division, as in the textbook formula.
    Exact,
}

impl SpeedHeightDivision {
    pub fn apply(self, numerator: f64, denominator: f64) -> f64 {
        match self {
            Self::Floor => floor_div(numerator, denominator),
            Self::Exact => numerator / denominator,
        }
    }
}

/// Float floor division that agrees with `fmod`: `floor_div(1.0, 0.1) == 9.0`,
/// where `(1.0 / 0.1).floor()` rounds up to `10.0`.
fn floor_div(n: f64, d: f64) -> f64 {
    let m = n % d;
    let mut q = (n - m) / d;
    // Remainder must carry the divisor's sign.
    if m != 0.0 && (d < 0.0) != (m < 0.0) {
        q -= 1.0;
    }
    if q == 0.0 {
        return 0.0_f64.copysign(n / d);
    }
    let f = q.floor();
    if q - f > 0.5 { f + 1.0 } else { f }
}

/// Division used by [`SportsWalking::new`].
pub const WALKING_SPEED_HEIGHT_DIVISION: SpeedHeightDivision = SpeedHeightDivision::Floor;

/// Readings shared by every workout type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    /// Steps or strokes recorded by the sensor.
    pub action: u32,
    /// Duration in hours.
    pub duration: f64,
    /// Athlete weight in kg.
    pub weight: f64,
}

impl Session {
    pub const fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

pub trait Training {
    fn session(&self) -> &Session;

    /// Label shown in the report.
    fn workout_type(&self) -> &'static str;

    fn step_length(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in km.
    fn get_distance(&self) -> f64 {
        f64::from(self.session().action) * self.step_length() / M_IN_KM
    }

    /// Mean speed in km/h.
    fn get_mean_speed(&self) -> f64 {
        self.get_distance() / self.session().duration
    }

    /// Energy spent in kcal.
    fn get_spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage::new(
            self.workout_type(),
            self.session().duration,
            self.get_distance(),
            self.get_mean_speed(),
            self.get_spent_calories(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    session: Session,
}

impl Running {
    pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;

    pub const fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            session: Session::new(action, duration, weight),
        }
    }
}

impl Training for Running {
    fn session(&self) -> &Session {
        &self.session
    }

    fn workout_type(&self) -> &'static str {
        "Running"
    }

    fn get_spent_calories(&self) -> f64 {
        let s = &self.session;
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.get_mean_speed()
            - Self::CALORIES_MEAN_SPEED_SHIFT)
            * s.weight
            / M_IN_KM
            * s.duration
            * MIN_IN_H
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    session: Session,
    /// Height in cm.
    height: f64,
    division: SpeedHeightDivision,
}

impl SportsWalking {
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub const fn new(action: u32, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            session: Session::new(action, duration, weight),
            height,
            division: WALKING_SPEED_HEIGHT_DIVISION,
        }
    }

    #[must_use]
    pub const fn with_division(mut self, division: SpeedHeightDivision) -> Self {
        self.division = division;
        self
    }

    pub const fn height(&self) -> f64 {
        self.height
    }

    pub const fn division(&self) -> SpeedHeightDivision {
        self.division
    }
}

impl Training for SportsWalking {
    fn session(&self) -> &Session {
        &self.session
    }

    fn workout_type(&self) -> &'static str {
        "SportsWalking"
    }

    fn get_spent_calories(&self) -> f64 {
        let s = &self.session;
        let speed_height = self
            .division
            .apply(self.get_mean_speed().powi(2), self.height);

        (Self::CALORIES_WEIGHT_MULTIPLIER * s.weight
            + speed_height * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * s.weight)
            * s.duration
            * MIN_IN_H
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    session: Session,
    /// Pool length in meters.
    length_pool: f64,
    /// Number of pool lengths swum.
    count_pool: f64,
}

impl Swimming {
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub const fn new(
        action: u32,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: f64,
    ) -> Self {
        Self {
            session: Session::new(action, duration, weight),
            length_pool,
            count_pool,
        }
    }

    pub const fn length_pool(&self) -> f64 {
        self.length_pool
    }

    pub const fn count_pool(&self) -> f64 {
        self.count_pool
    }
}

impl Training for Swimming {
    fn session(&self) -> &Session {
        &self.session
    }

    fn workout_type(&self) -> &'static str {
        "Swimming"
    }

    fn step_length(&self) -> f64 {
        LEN_STROKE
    }

    // Pool geometry, not stroke count, drives swimming speed.
    fn get_mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool / M_IN_KM / self.session.duration
    }

    fn get_spent_calories(&self) -> f64 {
        (self.get_mean_speed() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.session.weight
    }
}

/// A workout built from a sensor package.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Running(Running),
    Walking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    pub const fn code(&self) -> WorkoutCode {
        match self {
            Self::Running(_) => WorkoutCode::Running,
            Self::Walking(_) => WorkoutCode::Walking,
            Self::Swimming(_) => WorkoutCode::Swimming,
        }
    }

    fn inner(&self) -> &dyn Training {
        match self {
            Self::Running(t) => t,
            Self::Walking(t) => t,
            Self::Swimming(t) => t,
        }
    }

    /// Rendered one-line report.
    pub fn render_report(&self) -> String {
        self.show_training_info().get_message()
    }
}

impl Training for Workout {
    fn session(&self) -> &Session {
        self.inner().session()
    }

    fn workout_type(&self) -> &'static str {
        self.inner().workout_type()
    }

    fn step_length(&self) -> f64 {
        self.inner().step_length()
    }

    fn get_distance(&self) -> f64 {
        self.inner().get_distance()
    }

    fn get_mean_speed(&self) -> f64 {
        self.inner().get_mean_speed()
    }

    fn get_spent_calories(&self) -> f64 {
        self.inner().get_spent_calories()
    }
}

impl From<Running> for Workout {
    fn from(t: Running) -> Self {
        Self::Running(t)
    }
}

impl From<SportsWalking> for Workout {
    fn from(t: SportsWalking) -> Self {
        Self::Walking(t)
    }
}

impl From<Swimming> for Workout {
    fn from(t: Swimming) -> Self {
        Self::Swimming(t)
    }
}
