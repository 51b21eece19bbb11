//! Runs simulated entity fetches through fetch-thunk and logs every action
//!
//! Each configured entity is loaded concurrently. Actions flow through a
//! logged, channel-backed dispatcher into the loop below, which stops
//! once every entity has settled.

mod config;
mod logger;

use anyhow::{Context, Result};
use config::DemoConfig;
use fetch_thunk::{Dispatcher, FetchAction, FetchPhase, Logged, load_entity};
use std::collections::BTreeMap;
use std::time::Duration;

type Records = Vec<String>;
type DemoAction = FetchAction<Records, String>;

/// Pretend to load an entity from a remote source
async fn simulate_fetch(entity: String, latency: Duration, fail: bool) -> Result<Records, String> {
    tokio::time::sleep(latency).await;
    if fail {
        Err(format!("{} backend unavailable", entity))
    } else {
        Ok((1..=3).map(|id| format!("{}-{}", entity, id)).collect())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    logger::init()?;

    let config = DemoConfig::load();
    log::info!(
        "Loading {} entities (silent: {})",
        config.entities.len(),
        config.fetch.silent
    );

    let (dispatcher, mut rx) = Dispatcher::<DemoAction>::channel();
    let dispatch = Logged::new(dispatcher);

    let mut handles = Vec::with_capacity(config.entities.len());
    for (idx, name) in config.entities.iter().enumerate() {
        let operation =
            simulate_fetch(name.clone(), config.latency_for(idx), config.should_fail(name));

        let thunk = load_entity(name, operation, config.fetch.silent)
            .with_context(|| format!("Invalid entity in config: {:?}", name))?;
        handles.push(thunk.spawn(dispatch.clone()));
    }
    // Only the spawned tasks hold senders now
    drop(dispatch);

    let mut outcomes: BTreeMap<String, FetchPhase> = BTreeMap::new();
    while let Some(action) = rx.recv().await {
        match &action {
            FetchAction::Request { entity } => {
                log::info!("{}: loading", entity);
            }
            FetchAction::Success {
                entity,
                data,
                timestamp,
            } => {
                log::info!("{}: loaded {} records at {}", entity, data.len(), timestamp);
                outcomes.insert(entity.to_string(), FetchPhase::Success);
            }
            FetchAction::Failure {
                entity,
                error,
                timestamp,
            } => {
                log::error!("{}: failed at {}: {}", entity, timestamp, error);
                outcomes.insert(entity.to_string(), FetchPhase::Failure);
            }
        }
    }

    for handle in handles {
        handle.await.context("Fetch task panicked")?;
    }

    let failed = outcomes
        .values()
        .filter(|phase| **phase == FetchPhase::Failure)
        .count();
    log::info!(
        "Done: {} loaded, {} failed",
        outcomes.len() - failed,
        failed
    );

    Ok(())
}
