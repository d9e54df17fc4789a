#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::{GameError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_required_keys,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// 內建的預設配置
pub const DEFAULT_CONFIG: &str = include_str!("../../config/default.toml");

/// Upper bound for table origin, size and robot step.
pub const MAX_EXTENT: i64 = 1_000_000_000;

/// Message keys every deployment must define.
pub const REQUIRED_MESSAGES: &[&str] = &[
    "welcome",
    "file_not_found",
    "file_done",
    "unknown_command",
    "no_initial_command",
    "non_int_coordinates",
    "no_face",
    "face_not_string",
    "no_negative_coordinates",
    "wrong_direction",
    "wrong_place",
    "wrong_move",
    "position",
    "place_me_first",
    "need_message_config",
    "message_key_not_found",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub table: TableConfig,
    pub robot: RobotConfig,
    pub game: SessionConfig,
    pub input: InputConfig,
    pub messenger: MessengerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    pub start_x: i64,
    pub start_y: i64,
    pub rows: i64,
    pub columns: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotConfig {
    pub step: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub prompt: String,
    pub quit_keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    pub data_dir: String,
    pub extension: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessengerConfig {
    pub messages: HashMap<String, String>,
}

/// User file layout: every section optional, merged over the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
struct PartialConfig {
    table: Option<TableConfig>,
    robot: Option<RobotConfig>,
    game: Option<SessionConfig>,
    input: Option<InputConfig>,
    messenger: Option<MessengerConfig>,
}

impl GameConfig {
    /// 解析內建的預設配置
    pub fn embedded() -> Result<Self> {
        toml::from_str(DEFAULT_CONFIG).map_err(|e| GameError::ConfigValidationError {
            field: "embedded_default".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GameError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置，缺少的區段沿用預設值
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let partial: PartialConfig =
            toml::from_str(&processed_content).map_err(|e| GameError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;

        Ok(Self::embedded()?.merge(partial))
    }

    fn merge(mut self, partial: PartialConfig) -> Self {
        if let Some(table) = partial.table {
            self.table = table;
        }
        if let Some(robot) = partial.robot {
            self.robot = robot;
        }
        if let Some(game) = partial.game {
            self.game = game;
        }
        if let Some(input) = partial.input {
            self.input = input;
        }
        if let Some(messenger) = partial.messenger {
            self.messenger.messages.extend(messenger.messages);
        }
        self
    }

    /// 替換環境變數 (例如 ${ROBOT_DATA_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GameError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for TableConfig {
    fn validate(&self) -> Result<()> {
        validate_range("table.start_x", self.start_x, 0, MAX_EXTENT)?;
        validate_range("table.start_y", self.start_y, 0, MAX_EXTENT)?;
        validate_range("table.rows", self.rows, 1, MAX_EXTENT)?;
        validate_range("table.columns", self.columns, 1, MAX_EXTENT)?;
        Ok(())
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<()> {
        self.table.validate()?;
        validate_range("robot.step", self.robot.step, 1, MAX_EXTENT)?;
        validate_non_empty_string("game.prompt", &self.game.prompt)?;
        for keyword in &self.game.quit_keywords {
            validate_non_empty_string("game.quit_keywords", keyword)?;
        }
        validate_path("input.data_dir", &self.input.data_dir)?;
        validate_non_empty_string("input.extension", &self.input.extension)?;
        validate_required_keys(
            "messenger.messages",
            self.messenger.messages.keys(),
            REQUIRED_MESSAGES,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::embedded().unwrap();

        assert_eq!(
            config.table,
            TableConfig {
                start_x: 0,
                start_y: 0,
                rows: 5,
                columns: 5
            }
        );
        assert_eq!(config.robot.step, 1);
        assert_eq!(config.game.prompt, "> ");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_merges_over_defaults() {
        let toml_content = r#"
[table]
start_x = 0
start_y = 0
rows = 10
columns = 8

[messenger.messages]
position = "Robot at {x},{y} facing {f}"
"#;

        let config = GameConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.table.rows, 10);
        assert_eq!(config.table.columns, 8);
        assert_eq!(config.input.extension, "txt");
        assert_eq!(
            config.messenger.messages["position"],
            "Robot at {x},{y} facing {f}"
        );
        assert!(config.messenger.messages.contains_key("wrong_move"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TOY_ROBOT_TEST_DATA_DIR", "/tmp/robot-commands");

        let toml_content = r#"
[input]
data_dir = "${TOY_ROBOT_TEST_DATA_DIR}"
extension = "cmd"
"#;

        let config = GameConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.input.data_dir, "/tmp/robot-commands");
        assert_eq!(config.input.extension, "cmd");

        std::env::remove_var("TOY_ROBOT_TEST_DATA_DIR");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[table]
start_x = 0
start_y = 0
rows = 0
columns = 5
"#;

        let config = GameConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_values_are_rejected() {
        let config = GameConfig::from_toml_str("[robot]\nstep = 9223372036854775807\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidConfigValueError { ref field, .. } if field == "robot.step"
        ));

        let config = GameConfig::from_toml_str(
            "[table]\nstart_x = 0\nstart_y = 0\nrows = 1000000001\ncolumns = 5\n",
        )
        .unwrap();
        assert!(config.validate().is_err());

        let mut config = GameConfig::embedded().unwrap();
        config.table.rows = MAX_EXTENT;
        config.table.start_x = MAX_EXTENT;
        config.robot.step = MAX_EXTENT;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let err = GameConfig::from_toml_str("[table\nrows = ").unwrap_err();
        assert!(matches!(err, GameError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[game]
prompt = "robot> "
quit_keywords = ["bye"]
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = GameConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.game.prompt, "robot> ");
        assert_eq!(config.game.quit_keywords, vec!["bye".to_string()]);
    }
}
