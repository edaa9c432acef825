pub mod args;
pub mod checklist;

pub use args::{ChecklistCliArgs, Cli, CliCommand, ServeCliArgs};
pub use checklist::handle_checklist_command;
