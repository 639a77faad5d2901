use crate::error::TrainingError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Short code a sensor tags its package with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutCode {
    Swimming,
    Running,
    Walking,
}

impl WorkoutCode {
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::Walking];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Swimming => "SWM",
            Self::Running => "RUN",
            Self::Walking => "WLK",
        }
    }

    /// Number of readings a package of this type carries.
    pub const fn arity(self) -> usize {
        match self {
            Self::Running => 3,
            Self::Walking => 4,
            Self::Swimming => 5,
        }
    }
}

impl FromStr for WorkoutCode {
    type Err = TrainingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| TrainingError::UnknownWorkoutType {
                code: s.to_string(),
            })
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One raw sensor package: a type code and its positional readings.
///
/// Accepts either `["RUN", [15000, 1, 75]]` or
/// `{"code": "RUN", "data": [15000, 1, 75]}` in JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "PackageRepr")]
pub struct Package {
    pub code: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            data: data.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PackageRepr {
    Pair(String, Vec<f64>),
    Object { code: String, data: Vec<f64> },
}

impl From<PackageRepr> for Package {
    fn from(r: PackageRepr) -> Self {
        match r {
            PackageRepr::Pair(code, data) | PackageRepr::Object { code, data } => {
                Self { code, data }
            }
        }
    }
}

/// Packages replayed when no input file is given.
pub fn demo_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", [15000.0, 1.0, 75.0]),
        Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}
