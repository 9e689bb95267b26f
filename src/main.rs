use std::sync::Arc;

use color_eyre::Result;

use socialdash::app::{run_app, App};
use socialdash::cli::{is_local, parse_args, run_cli_command, CliCommand};
use socialdash::config::Config;
use socialdash::context::AppContext;
use socialdash::logging::{self, LogTarget};
use socialdash::terminal::{install_panic_hook, TerminalManager};

fn main() -> Result<()> {
    color_eyre::install()?;

    let command = parse_args(std::env::args());
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(command))
}

async fn run(command: CliCommand) -> Result<()> {
    // --version, --help and usage errors must work even with a broken environment
    if is_local(&command) {
        let ctx = AppContext::from_config(&Config::default());
        return run_cli_command(&command, &ctx).await.unwrap_or(Ok(()));
    }

    let config = Config::from_env()?;

    if command == CliCommand::RunTui {
        if let Some(path) = logging::default_log_path() {
            logging::init(LogTarget::File(path))?;
        }
    } else {
        logging::init(LogTarget::Stderr)?;
    }
    tracing::debug!("backend {} as user {}", config.api_url, config.user_id);

    let ctx = AppContext::from_config(&config);
    if let Some(result) = run_cli_command(&command, &ctx).await {
        return result;
    }

    install_panic_hook();
    let mut manager = TerminalManager::new()?;
    let mut app = App::new(Arc::new(ctx));
    let result = run_app(manager.terminal(), &mut app).await;
    manager.restore()?;

    tracing::info!("dashboard closed");
    result
}
