pub mod cli;
pub mod error;
pub mod message;
pub mod packages;
pub mod report;
pub mod training;
pub mod types;
pub mod utils;

pub use error::TrainingError;
pub use message::InfoMessage;
pub use packages::{create_workout, read_package};
pub use training::{Running, SportsWalking, Swimming, Training, Workout};
