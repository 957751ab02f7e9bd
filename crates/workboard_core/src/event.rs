//! Domain event seam.
//!
//! # Responsibility
//! - Define the closed event-kind sets and the fire-and-forget publish
//!   contract used by mutation services.
//! - Provide a log-backed publisher for in-process deployments.
//!
//! # Invariants
//! - Event payload is always the mutated entity as persisted.
//! - Publishing is advisory: callers swallow failures; there is no retry
//!   or dead-letter handling.

use log::info;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::project::Project;
use crate::model::task::Task;

/// Event kinds emitted for project mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectEventKind {
    Created,
    Active,
    Inactive,
    Deleted,
    Updated,
}

/// Event kinds emitted for task mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskEventKind {
    Created,
    Active,
    Inactive,
    Archived,
    Updated,
}

/// Structured event published after a successful persistence mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "topic", rename_all = "snake_case")]
pub enum DomainEvent {
    Project {
        kind: ProjectEventKind,
        payload: Project,
    },
    Task {
        kind: TaskEventKind,
        payload: Task,
    },
}

impl DomainEvent {
    pub fn project(kind: ProjectEventKind, payload: Project) -> Self {
        Self::Project { kind, payload }
    }

    pub fn task(kind: TaskEventKind, payload: Task) -> Self {
        Self::Task { kind, payload }
    }
}

/// Failure reported by an event publisher backend.
#[derive(Debug)]
pub enum EventError {
    Serialize(serde_json::Error),
    Backend(String),
}

impl Display for EventError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialize(err) => write!(f, "event serialization failed: {err}"),
            Self::Backend(message) => write!(f, "event backend failure: {message}"),
        }
    }
}

impl Error for EventError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Serialize(err) => Some(err),
            Self::Backend(_) => None,
        }
    }
}

/// Fire-and-forget publish contract for mutation services.
pub trait EventPublisher {
    fn publish(&self, event: &DomainEvent) -> Result<(), EventError>;
}

/// Publisher that writes serialized events to the structured log.
///
/// Stands in for an external broker producer; downstream consumers tail
/// the log stream instead of a topic.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogEventPublisher;

impl EventPublisher for LogEventPublisher {
    fn publish(&self, event: &DomainEvent) -> Result<(), EventError> {
        let payload = serde_json::to_string(event).map_err(EventError::Serialize)?;
        info!("event=domain_event module=event status=ok payload={payload}");
        Ok(())
    }
}
