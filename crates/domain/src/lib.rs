//! # chronohub-domain
//!
//! Pure domain model for the chronohub automation core.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the **datetime entity** — a settable wall-clock date/time value
//!   with transactional partial updates ([`datetime::DateTimeCall`])
//! - Define the clock-polling **scheduled trigger**
//!   ([`datetime::ScheduledTrigger`])
//! - Define the packed **snapshot** record used across power cycles
//!   ([`datetime::Snapshot`])
//! - Define **Events** (state-change records)
//! - Contain all invariant enforcement and calendar logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod datetime;
pub mod event;
