use anyhow::Result;
use log::{error, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

use crate::api::TennisClient;
use crate::domain::LiveUpdate;

/// Cooperative cancellation handle for a live subscription. `cancel`
/// is advisory: the loop observes it at the next iteration boundary,
/// so an in-flight poll may still deliver one update before stopping.
#[derive(Clone)]
pub struct SubscriptionHandle {
    cancelled: Arc<AtomicBool>,
}

impl SubscriptionHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Poll one match until cancelled: each tick fetches the live list and
/// the detail view concurrently, prefers the list's row for the match
/// (it carries the live flag), and invokes the callback. Per-tick
/// errors are logged and suppressed so one bad poll never kills the
/// subscription.
pub fn subscribe_live<F>(
    client: Arc<TennisClient>,
    match_key: String,
    interval: Duration,
    on_update: F,
) -> SubscriptionHandle
where
    F: Fn(LiveUpdate) + Send + Sync + 'static,
{
    let cancelled = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancelled);

    tokio::spawn(async move {
        info!("Live subscription started for match {}", match_key);

        while !flag.load(Ordering::Relaxed) {
            match poll_once(&client, &match_key).await {
                Ok(update) => on_update(update),
                Err(e) => error!("Live poll for match {} failed: {:?}", match_key, e),
            }

            sleep(interval).await;
        }

        info!("Live subscription stopped for match {}", match_key);
    });

    SubscriptionHandle { cancelled }
}

async fn poll_once(client: &TennisClient, match_key: &str) -> Result<LiveUpdate> {
    let (list, details) = tokio::try_join!(
        client.fetch_live_matches(),
        client.fetch_match_details(match_key),
    )?;

    let summary = list
        .into_iter()
        .find(|m| m.id == match_key)
        .unwrap_or(details.summary);

    Ok(LiveUpdate {
        summary,
        stats: details.stats,
    })
}
