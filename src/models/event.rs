//! Chronological simulation log.
//!
//! Events are appended in the order the simulation observes them. The
//! rendered text is a presentation concern; the event kinds and their
//! triggers are stable.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Stage;

/// Something noteworthy that happened during a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Simulated day the event refers to.
    pub time: f64,
    pub kind: EventKind,
}

/// Event classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// Project entered the active set.
    Activated { project_id: u32, name: String },
    /// First task of a project was bound.
    WorkStarted {
        project_id: u32,
        name: String,
        stage: Stage,
    },
    /// Project's finalize task completed.
    Completed { project_id: u32, name: String },
    /// Clock passed the time limit with work outstanding.
    TimedOut,
}

impl Event {
    pub fn new(time: f64, kind: EventKind) -> Self {
        Self { time, kind }
    }

    /// Project the event concerns, if any.
    pub fn project_id(&self) -> Option<u32> {
        match &self.kind {
            EventKind::Activated { project_id, .. }
            | EventKind::WorkStarted { project_id, .. }
            | EventKind::Completed { project_id, .. } => Some(*project_id),
            EventKind::TimedOut => None,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:>5.1} days] ", self.time)?;
        match &self.kind {
            EventKind::Activated { name, .. } => {
                write!(f, "{name} activated (eligible for work).")
            }
            EventKind::WorkStarted { name, stage, .. } => {
                write!(f, "Work has started on {name} (task: {stage}).")
            }
            EventKind::Completed { name, .. } => write!(f, "{name} is complete."),
            EventKind::TimedOut => {
                f.write_str("Error: simulation timed out. Check constraints.")
            }
        }
    }
}
