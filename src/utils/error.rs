use thiserror::Error;

/// 機器人指令失敗的分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 參數格式錯誤 (非整數、缺少方向、負數座標...)
    Validation,
    /// 尚未 PLACE 就下達其他指令
    Sequencing,
    /// 指令本身合法，但會讓機器人離開桌面
    Domain,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RobotError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    Sequencing { message: String },

    #[error("{message}")]
    Domain { message: String },
}

impl RobotError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RobotError::Validation { .. } => ErrorCategory::Validation,
            RobotError::Sequencing { .. } => ErrorCategory::Sequencing,
            RobotError::Domain { .. } => ErrorCategory::Domain,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            RobotError::Validation { message }
            | RobotError::Sequencing { message }
            | RobotError::Domain { message } => message,
        }
    }
}

/// Message lookup failures. The text is rendered by the messenger itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MessengerError {
    #[error("{message}")]
    ConfigRequired { message: String },

    #[error("{message}")]
    KeyNotFound { key: String, message: String },
}

#[derive(Error, Debug)]
pub enum GameError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

impl GameError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GameError::IoError(_) => "Check that the file exists and is readable",
            GameError::ConfigError { .. } | GameError::ConfigValidationError { .. } => {
                "Make sure the configuration file is valid TOML"
            }
            GameError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and start again"
            }
            GameError::MissingConfigError { .. } => {
                "Add the missing field to the configuration"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
