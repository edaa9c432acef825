use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "relayboard")]
#[command(about = "Task-board checklist automation and transcription upload relay", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Run the HTTP API server (the default when no command is given)
    Serve(ServeCliArgs),
    /// Create a checklist with one item on the configured card and exit
    Checklist(ChecklistCliArgs),
    /// Print version information
    Version,
}

#[derive(ClapArgs, Debug)]
pub struct ServeCliArgs {
    /// Port to listen on (overrides the config file)
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[derive(ClapArgs, Debug)]
pub struct ChecklistCliArgs {
    /// Card to attach the checklist to (overrides the config file)
    #[arg(long)]
    pub card: Option<String>,
    /// Name for the new checklist
    #[arg(long)]
    pub name: Option<String>,
    /// Name for the checklist item
    #[arg(long)]
    pub item: Option<String>,
}
