//! Trigger scheduler — polls the clock and fires datetime triggers.
//!
//! One clock read per tick; every registered trigger is polled against the
//! entity's current value, and each fire publishes a `TriggerFired` event.
//! The scheduler never blocks: a tick is a handful of field comparisons.

use chronohub_domain::datetime::{AsCalendarTime, ScheduledTrigger};
use chronohub_domain::error::ChronoHubError;
use chronohub_domain::event::{Event, EventType};
use chronohub_domain::id::EntityId;
use chronohub_domain::time::CalendarTime;

use crate::ports::{ClockSource, EventPublisher};
use crate::{SharedEntity, lock_entity};

/// Polls [`ScheduledTrigger`]s against the shared datetime entity.
pub struct TriggerScheduler<C, P> {
    entity: SharedEntity,
    clock: C,
    publisher: P,
    triggers: Vec<ScheduledTrigger>,
}

impl<C, P> TriggerScheduler<C, P>
where
    C: ClockSource,
    P: EventPublisher,
{
    /// Create a scheduler with no triggers registered.
    pub fn new(entity: SharedEntity, clock: C, publisher: P) -> Self {
        Self {
            entity,
            clock,
            publisher,
            triggers: Vec::new(),
        }
    }

    /// Register a fresh (unarmed) trigger watching the entity.
    pub fn add_trigger(&mut self) {
        self.triggers.push(ScheduledTrigger::new());
    }

    /// Number of registered triggers.
    #[must_use]
    pub fn trigger_count(&self) -> usize {
        self.triggers.len()
    }

    /// Run one scheduler tick: read the clock once, poll every trigger,
    /// publish a `TriggerFired` event per fire. Returns how many fired.
    ///
    /// Ticks while the clock is not yet valid are skipped entirely — the
    /// watermarks stay untouched, so the first valid reading still only
    /// arms.
    ///
    /// # Errors
    ///
    /// This method currently cannot fail; the `Result` keeps the port
    /// signature uniform with the rest of the use-case layer.
    pub async fn tick(&mut self) -> Result<usize, ChronoHubError> {
        let Some(now) = self.clock.now() else {
            tracing::trace!("clock not valid yet, skipping tick");
            return Ok(0);
        };

        let (id, target) = {
            let entity = lock_entity(&self.entity);
            (entity.id(), entity.as_calendar_time())
        };

        let mut fired = 0;
        for trigger in &mut self.triggers {
            if trigger.poll(now, target) {
                fired += 1;
            }
        }

        for _ in 0..fired {
            self.publish_fire(id, now).await;
        }

        Ok(fired)
    }

    async fn publish_fire(&self, id: EntityId, now: CalendarTime) {
        tracing::info!(%now, "datetime trigger fired");
        let event = Event::new(
            EventType::TriggerFired,
            Some(id),
            serde_json::json!({"at": now.to_string()}),
        );
        let _ = self.publisher.publish(event).await;
    }
}
