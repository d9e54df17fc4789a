pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::GameConfig;
pub use crate::core::{
    game::{parse_command, Reply, Session},
    input::{Exit, Replay, Shell},
    messenger::{MessageRequest, Messenger},
    robot::Robot,
    table::Table,
};
pub use crate::domain::model::{Command, Direction, Position, RawArg};
pub use crate::utils::error::{ErrorCategory, GameError, MessengerError, Result, RobotError};
