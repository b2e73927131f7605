use clap::Parser;
use std::io::Write;
use tc_config::AppConfig;
use tc_console::{Cli, Console, ConsoleError, commands};
use tc_telemetry::init_tracing;

#[tokio::main]
async fn main() {
    // 加载本地 .env（如存在）
    dotenvy::dotenv().ok();
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        tracing::debug!(error = %err, "command failed");
        eprintln!("{}", err.user_message());
        std::process::exit(err.exit_code());
    }
}

async fn run(cli: Cli) -> Result<(), ConsoleError> {
    let config = AppConfig::from_env()?;
    let mut console = Console::connect(config)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(cli.command, &mut console, &mut out).await?;
    out.flush()?;
    Ok(())
}
