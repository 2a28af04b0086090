use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::SecondsFormat;
use reqwest::Client;
use serde_json::json;
use url::Url;

use super::notifier::ReviewNotificationProvider;
use crate::domain::notification::ReviewEvent;

pub struct ReviewWebhookProvider {
    webhook_url: Url,
    client: Client,
}

impl ReviewWebhookProvider {
    pub fn new(webhook_url: Url) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(3))
            .build()
            .expect("reqwest client must build");

        Self {
            webhook_url,
            client,
        }
    }
}

#[async_trait]
impl ReviewNotificationProvider for ReviewWebhookProvider {
    async fn send(&self, event: &ReviewEvent) -> Result<()> {
        let response = self
            .client
            .post(self.webhook_url.clone())
            .json(&json!({
                "campaign_id": event.campaign_id,
                "campaign_title": event.campaign_title,
                "decision": event.decision.to_string(),
                "reviewed_at": event
                    .reviewed_at
                    .to_rfc3339_opts(SecondsFormat::Secs, true),
            }))
            .send()
            .await
            .map_err(sanitize_reqwest_error)?;

        if response.status().is_success() {
            return Ok(());
        }

        Err(anyhow!(
            "review webhook returned non-success status: {}",
            response.status()
        ))
    }

    fn provider_name(&self) -> &'static str {
        "webhook"
    }
}

fn sanitize_reqwest_error(error: reqwest::Error) -> anyhow::Error {
    if error.is_timeout() {
        return anyhow!("review webhook request timed out");
    }
    if error.is_connect() {
        return anyhow!("review webhook connection failed");
    }
    anyhow!("review webhook request failed")
}
