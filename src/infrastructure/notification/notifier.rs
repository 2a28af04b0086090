use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::warn;

use crate::domain::notification::{ReviewEvent, ReviewEventSink};

#[async_trait]
pub trait ReviewNotificationProvider: Send + Sync {
    async fn send(&self, event: &ReviewEvent) -> Result<()>;
    fn provider_name(&self) -> &'static str;
}

/// Fan-out queue for review events. Events are consumed by a spawned task;
/// a full queue or a failing provider logs a warning and drops the event
/// rather than delaying the admin request.
#[derive(Clone)]
pub struct ReviewNotifier {
    tx: mpsc::Sender<ReviewEvent>,
}

impl ReviewNotifier {
    pub fn new(providers: Vec<Arc<dyn ReviewNotificationProvider>>) -> Self {
        let (tx, mut rx) = mpsc::channel::<ReviewEvent>(256);

        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                for provider in &providers {
                    if let Err(error) = provider.send(&event).await {
                        warn!(
                            provider = provider.provider_name(),
                            campaign_id = event.campaign_id,
                            error = %error,
                            "Review notification provider failed"
                        );
                    }
                }
            }
        });

        Self { tx }
    }
}

impl ReviewEventSink for ReviewNotifier {
    fn review_decided(&self, event: ReviewEvent) {
        match self.tx.try_send(event) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Full(_)) => {
                warn!("Review notification queue full; dropping event");
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                warn!("Review notification queue closed; dropping event");
            }
        }
    }
}

/// Sink used when no webhook is configured; decisions are only logged.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReviewSink;

impl ReviewEventSink for NoopReviewSink {
    fn review_decided(&self, event: ReviewEvent) {
        tracing::info!(
            campaign_id = event.campaign_id,
            decision = %event.decision,
            "Review decided (no notification provider configured)"
        );
    }
}
