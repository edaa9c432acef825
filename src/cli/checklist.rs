//! CLI handler for the one-shot checklist flow.
//!
//! Creates a checklist with one item on the configured card and prints the
//! combined outcome, mirroring what the API endpoint reports.

use anyhow::{Context, Result};

use crate::cli::args::ChecklistCliArgs;
use crate::config::Config;
use crate::trello::{ChecklistTarget, TrelloClient};

/// Handle the checklist CLI command.
pub async fn handle_checklist_command(args: ChecklistCliArgs) -> Result<()> {
    let config = Config::load()?;
    let credentials = config.trello.credentials()?;
    let client = TrelloClient::new(credentials, config.trello.api_base.clone());

    let target = ChecklistTarget {
        card_id: args.card.unwrap_or(config.trello.card_id),
        checklist_name: args.name.unwrap_or(config.trello.checklist_name),
        item_name: args.item.unwrap_or(config.trello.item_name),
    };

    let outcome = client
        .create_checklist_with_item(&target)
        .await
        .context("Failed to create checklist")?;

    println!("Checklist created with id {}", outcome.checklist_id);
    println!(
        "checklist status: {}, item status: {}",
        outcome.checklist_status, outcome.item_status
    );

    Ok(())
}
