use reqwest::{Client, StatusCode};
use serde::Serialize;
use thiserror::Error;

use crate::config::SendFoxConfig;

#[derive(Debug, Error)]
pub enum SendFoxError {
    #[error("request to SendFox failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("SendFox rejected the contact ({status}): {body}")]
    Rejected { status: StatusCode, body: String },
}

#[derive(Serialize)]
struct ContactPayload<'a> {
    email: &'a str,
    first_name: &'a str,
    lists: [u64; 1],
}

/// Thin client for the SendFox contacts API.
#[derive(Clone)]
pub struct SendFoxClient {
    client: Client,
    base_url: String,
    api_token: String,
    list_id: u64,
}

impl SendFoxClient {
    pub fn new(config: &SendFoxConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
            list_id: config.list_id,
        }
    }

    /// Adds a contact to the configured list.
    pub async fn create_contact(&self, email: &str, first_name: &str) -> Result<(), SendFoxError> {
        let response = self
            .client
            .post(format!("{}/contacts", self.base_url))
            .bearer_auth(&self.api_token)
            .json(&ContactPayload {
                email,
                first_name,
                lists: [self.list_id],
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SendFoxError::Rejected { status, body });
        }

        Ok(())
    }
}
