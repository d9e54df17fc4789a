use crate::config::GameConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "toy-robot")]
#[command(about = "A toy robot moving on a square table")]
pub struct CliConfig {
    /// Command file to replay before reading from stdin
    pub file: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory searched for `<FILE>.<extension>` when FILE is not found
    #[arg(long)]
    pub data_dir: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 載入配置並套用命令列覆蓋設定
    pub fn load_game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                GameConfig::from_file(path)?
            }
            None => GameConfig::embedded()?,
        };

        if let Some(data_dir) = &self.data_dir {
            tracing::info!("🔧 Data directory overridden to: {}", data_dir);
            config.input.data_dir = data_dir.clone();
        }

        Ok(config)
    }
}
