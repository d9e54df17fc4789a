use crate::config::GameConfig;
use crate::core::messenger::Messenger;
use crate::core::robot::Robot;
use crate::core::table::Table;
use crate::domain::model::{Command, RawArg};
use crate::domain::ports::Surface;
use crate::utils::error::RobotError;
use regex::Regex;
use std::sync::LazyLock;

// PLACE X(,| )Y(,| )F
static PLACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^place\s+([^\s,]+)(?:\s*,\s*|\s+)([^\s,]+)(?:\s*,\s*|\s+)([^\s,]+)$")
        .expect("PLACE pattern is a valid regex")
});

/// 解析一行輸入 (不含離開指令)
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();

    if let Some(caps) = PLACE_RE.captures(line) {
        return Command::Place {
            x: caps[1].to_string(),
            y: caps[2].to_string(),
            facing: caps[3].to_string(),
        };
    }

    match line.to_ascii_lowercase().as_str() {
        "move" => Command::Move,
        "left" => Command::Left,
        "right" => Command::Right,
        "report" => Command::Report,
        _ => Command::Unknown(line.to_string()),
    }
}

/// What a single line produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The command was applied; nothing to print.
    Applied,
    Report(String),
    Rejected(RobotError),
    Unknown(String),
    Quit,
}

impl Reply {
    /// Text to print before the prompt, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Reply::Report(text) | Reply::Unknown(text) => Some(text.as_str()),
            Reply::Rejected(err) => Some(err.message()),
            Reply::Applied | Reply::Quit => None,
        }
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, Reply::Quit)
    }
}

/// One game: the robot plus the keywords that end it.
#[derive(Debug, Clone)]
pub struct Session<S: Surface = Table> {
    robot: Robot<S>,
    quit_keywords: Vec<String>,
}

impl Session<Table> {
    pub fn new(config: &GameConfig) -> Self {
        let robot = Robot::new(
            &config.robot,
            Table::new(&config.table),
            Messenger::new(&config.messenger),
        );
        Self::with_robot(robot, config.game.quit_keywords.clone())
    }
}

impl<S: Surface> Session<S> {
    pub fn with_robot(robot: Robot<S>, quit_keywords: Vec<String>) -> Self {
        Self {
            robot,
            quit_keywords,
        }
    }

    pub fn robot(&self) -> &Robot<S> {
        &self.robot
    }

    pub fn messenger(&self) -> &Messenger {
        self.robot.messenger()
    }

    pub fn is_quit(&self, line: &str) -> bool {
        let line = line.trim();
        self.quit_keywords.iter().any(|k| k.eq_ignore_ascii_case(line))
    }

    /// 執行已解析的指令
    pub fn do_action(&mut self, command: Command) -> Reply {
        let outcome = match command {
            Command::Place { x, y, facing } => {
                self.robot
                    .place(x, y, Some(RawArg::Text(facing)))
                    .map(|_| ())
            }
            Command::Move => self.robot.r#move().map(|_| ()),
            Command::Left => self.robot.left().map(|_| ()),
            Command::Right => self.robot.right().map(|_| ()),
            Command::Report => return Reply::Report(self.robot.report()),
            Command::Quit => return Reply::Quit,
            Command::Unknown(_) => {
                return Reply::Unknown(self.messenger().render("unknown_command"))
            }
        };

        match outcome {
            Ok(()) => Reply::Applied,
            Err(err) => {
                tracing::debug!("Command rejected ({:?}): {}", err.category(), err);
                Reply::Rejected(err)
            }
        }
    }

    /// Trims, checks quit keywords, parses and dispatches one input line.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let command = if self.is_quit(line) {
            Command::Quit
        } else {
            parse_command(line)
        };
        tracing::debug!("Line {:?} parsed as {:?}", line.trim(), command);
        self.do_action(command)
    }
}
