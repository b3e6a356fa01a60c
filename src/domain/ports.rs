//! Outbound ports
//!
//! Capabilities the domain consumes but does not implement. The remote
//! document store is an explicitly injected handle; connection setup is
//! the composition root's job, never a repository's.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::value_objects::{RushHours, Status};
use crate::domain::DomainResult;

/// A remote key-ordered document store reachable by path-like references
/// (e.g. `ratings`, `users`).
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read a full subtree as a key → document mapping, in store key order.
    async fn get_all(&self, path: &str) -> DomainResult<Map<String, Value>>;

    /// Append a document under a store-generated key; returns the key.
    async fn push(&self, path: &str, value: Value) -> DomainResult<String>;

    /// Write a document at an explicit key.
    async fn set(&self, path: &str, key: &str, value: Value) -> DomainResult<()>;
}

/// Source of station live data. The production portal has no telemetry
/// feed, so the default implementation simulates; a real feed can be
/// substituted without touching the repositories.
pub trait TelemetrySimulator: Send + Sync {
    fn station_status(&self) -> Status;

    fn rush_hours(&self, time_slots: &[&str]) -> DomainResult<RushHours>;
}
