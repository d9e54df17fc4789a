use anyhow::Context;
use clap::Parser;
use std::io;
use toy_robot::utils::{logger, validation::Validate};
use toy_robot::{CliConfig, Exit, Session, Shell};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting toy-robot");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.load_game_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let session = Session::new(&config);
    let stdin = io::stdin();
    let mut shell = Shell::new(session, &config, io::stdout(), io::stderr());

    let exit = shell
        .run(cli.file.as_deref(), stdin.lock())
        .context("toy-robot session failed")?;

    match exit {
        Exit::Quit => tracing::info!("👋 Quit requested"),
        Exit::EndOfInput => tracing::info!("👋 Input closed"),
    }

    Ok(())
}
