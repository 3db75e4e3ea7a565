use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::time::interval;

use crate::core::state::SharedNewsroom;

/// Background worker that publishes scheduled articles once their date arrives
pub struct ScheduledPublisher {
    newsroom: SharedNewsroom,
    interval: Duration,
}

impl ScheduledPublisher {
    pub fn new(newsroom: SharedNewsroom, interval: Duration) -> Self {
        Self { newsroom, interval }
    }

    /// Run the publisher in a background loop
    pub async fn run(&self) {
        tracing::info!(
            "Starting scheduled publisher worker: interval={}s",
            self.interval.as_secs()
        );

        let mut ticker = interval(self.interval);

        loop {
            ticker.tick().await;
            self.run_once().await;
        }
    }

    /// Publish everything due now; returns the promoted article ids
    pub async fn run_once(&self) -> Vec<String> {
        self.run_at(Utc::now()).await
    }

    pub async fn run_at(&self, now: DateTime<Utc>) -> Vec<String> {
        let promoted = self.newsroom.write().await.articles.publish_due(now);

        if !promoted.is_empty() {
            tracing::info!(
                "Published {} scheduled article(s): {}",
                promoted.len(),
                promoted.join(", ")
            );
        }
        promoted
    }
}
