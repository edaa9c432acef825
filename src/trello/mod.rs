//! Client for the Trello REST API.
//!
//! Covers the two calls this service makes: creating a checklist on a card
//! and adding a check item to that checklist.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::config::{TrelloConfig, TrelloCredentials};

/// What to create: the owning card plus the names for the checklist and its
/// first item.
#[derive(Debug, Clone)]
pub struct ChecklistTarget {
    pub card_id: String,
    pub checklist_name: String,
    pub item_name: String,
}

impl ChecklistTarget {
    pub fn from_config(config: &TrelloConfig) -> Self {
        Self {
            card_id: config.card_id.clone(),
            checklist_name: config.checklist_name.clone(),
            item_name: config.item_name.clone(),
        }
    }
}

/// Combined result of the checklist-then-item flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistOutcome {
    pub checklist_id: String,
    pub checklist_status: u16,
    pub item_status: u16,
}

#[derive(Debug, Deserialize)]
struct ChecklistCreated {
    id: String,
}

#[derive(Debug, Error)]
pub enum TrelloError {
    /// Trello answered the checklist-creation call with a non-200 status.
    #[error("checklist creation returned status {status}")]
    ChecklistRejected { status: u16, details: Value },
    #[error("failed to reach the Trello API: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response from the Trello API: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct TrelloClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    token: String,
}

impl TrelloClient {
    pub fn new(credentials: TrelloCredentials, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: credentials.api_key,
            token: credentials.token,
        }
    }

    fn checklists_url(&self, card_id: &str) -> String {
        format!("{}/cards/{}/checklists", self.base_url, card_id)
    }

    fn check_items_url(&self, checklist_id: &str) -> String {
        format!("{}/checklists/{}/checkItems", self.base_url, checklist_id)
    }

    /// Create a checklist on the given card. Only a 200 counts as success;
    /// anything else carries the upstream body back as details.
    pub async fn create_checklist(
        &self,
        card_id: &str,
        name: &str,
    ) -> Result<(String, u16), TrelloError> {
        let url = self.checklists_url(card_id);

        debug!("Creating checklist on card {}", card_id);

        let response = self
            .client
            .post(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("token", self.token.as_str()),
                ("name", name),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != reqwest::StatusCode::OK {
            error!("Checklist creation failed with status {}: {}", status, body);
            return Err(TrelloError::ChecklistRejected {
                status: status.as_u16(),
                details: body_as_json(&body),
            });
        }

        let created: ChecklistCreated = serde_json::from_str(&body)?;
        info!("Checklist created with id {}", created.id);

        Ok((created.id, status.as_u16()))
    }

    /// Add an unchecked item at the bottom of the checklist. The upstream
    /// status is reported as-is, success or not.
    pub async fn add_check_item(
        &self,
        checklist_id: &str,
        name: &str,
    ) -> Result<u16, TrelloError> {
        let url = self.check_items_url(checklist_id);

        debug!("Adding item to checklist {}", checklist_id);

        let response = self
            .client
            .post(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("token", self.token.as_str()),
                ("name", name),
                ("pos", "bottom"),
                ("checked", "false"),
            ])
            .send()
            .await?;

        let status = response.status();
        info!("Add item response: {}", status);

        Ok(status.as_u16())
    }

    /// The full flow: create the checklist, then add the item. The item call
    /// never runs when checklist creation did not return 200.
    pub async fn create_checklist_with_item(
        &self,
        target: &ChecklistTarget,
    ) -> Result<ChecklistOutcome, TrelloError> {
        let (checklist_id, checklist_status) = self
            .create_checklist(&target.card_id, &target.checklist_name)
            .await?;

        let item_status = self
            .add_check_item(&checklist_id, &target.item_name)
            .await?;

        Ok(ChecklistOutcome {
            checklist_id,
            checklist_status,
            item_status,
        })
    }
}

/// Upstream error bodies are usually JSON but not always; keep raw text as a
/// JSON string when parsing fails.
fn body_as_json(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}
