pub mod game;
pub mod input;
pub mod messenger;
pub mod robot;
pub mod table;

pub use crate::domain::model::{Command, Direction, Position, RawArg};
pub use crate::domain::ports::Surface;
pub use crate::utils::error::Result;
