//! # chronohubd — chronohub daemon
//!
//! Composition root that wires the adapters together and runs the
//! scheduler tick loop.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Construct the clock, snapshot store, and event bus adapters
//! - Construct the datetime service and trigger scheduler
//! - Restore the last snapshot, then tick until shutdown
//! - Save a snapshot on Ctrl-C
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::time::Duration;

use anyhow::Context;

use chronohub_adapter_virtual::{FileSnapshotStore, InMemorySnapshotStore, SystemClock};
use chronohub_app::event_bus::InProcessEventBus;
use chronohub_app::ports::SnapshotStore;
use chronohub_app::scheduler::TriggerScheduler;
use chronohub_app::services::DateTimeService;
use chronohub_app::share_entity;
use chronohub_domain::datetime::{DateTimeEntity, DateTimeValue};

use config::Config;

/// Store selected by configuration. One daemon uses exactly one.
enum Store {
    File(FileSnapshotStore),
    Memory(InMemorySnapshotStore),
}

impl SnapshotStore for Store {
    async fn load(&self) -> Result<Option<Vec<u8>>, chronohub_domain::error::ChronoHubError> {
        match self {
            Self::File(store) => store.load().await,
            Self::Memory(store) => store.load().await,
        }
    }

    async fn save(&self, bytes: &[u8]) -> Result<(), chronohub_domain::error::ChronoHubError> {
        match self {
            Self::File(store) => store.save(bytes).await,
            Self::Memory(store) => store.save(bytes).await,
        }
    }
}

// The whole system is a single cooperative execution context; one tick
// does a clock read and a few field comparisons, so a current-thread
// runtime is all it needs.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    let store = if config.snapshot.volatile {
        Store::Memory(InMemorySnapshotStore::new())
    } else {
        Store::File(FileSnapshotStore::new(&config.snapshot.path))
    };

    let entity = share_entity(DateTimeEntity::new(&config.entity.name));
    let bus = std::sync::Arc::new(InProcessEventBus::new(256));
    let service = DateTimeService::new(entity.clone(), bus.clone());
    let mut scheduler = TriggerScheduler::new(entity, SystemClock, bus.clone());
    scheduler.add_trigger();

    let restored = service
        .restore(&store)
        .await
        .context("restoring snapshot")?;
    let initial = if restored {
        None
    } else {
        config.entity.initial.as_deref()
    };
    if let Some(initial) = initial {
        // Text shape was checked during config load; the commit path still
        // owns the calendar rules.
        let value: DateTimeValue = initial
            .parse()
            .map_err(|err| anyhow::anyhow!("initial value: {err}"))?;
        service
            .apply(service.make_call().with_value(value))
            .await
            .context("applying initial value")?;
    }

    tracing::info!(
        entity = %config.entity.name,
        value = %service.value(),
        tick_ms = config.scheduler.tick_ms,
        "chronohubd running"
    );

    let mut events = bus.subscribe();
    let mut tick = tokio::time::interval(Duration::from_millis(config.scheduler.tick_ms));
    tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = tick.tick() => {
                if let Err(err) = scheduler.tick().await {
                    tracing::error!(%err, "scheduler tick failed");
                }
            }
            event = events.recv() => {
                if let Ok(event) = event {
                    tracing::debug!(event_type = %event.event_type, data = %event.data, "event");
                }
            }
            _ = tokio::signal::ctrl_c() => {
                break;
            }
        }
    }

    tracing::info!(value = %service.value(), "shutting down, saving snapshot");
    service.save(&store).await.context("saving snapshot")?;

    Ok(())
}
