use anyhow::Result;
use clap::Parser;
use relayboard::{
    app,
    cli::{handle_checklist_command, Cli, CliCommand},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Some(CliCommand::Version) => {
            println!("relayboard {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(CliCommand::Checklist(args)) => handle_checklist_command(args).await,
        Some(CliCommand::Serve(args)) => app::run_server(args.port).await,
        None => app::run_server(None).await,
    }
}
