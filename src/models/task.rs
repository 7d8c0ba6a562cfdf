//! Task model.
//!
//! A task is the atomic unit of work: one stage of one page, or the
//! finalize step of one project. Tasks live in a dense arena and refer to
//! each other by index.

use serde::{Deserialize, Serialize};

use super::{Stage, UnitRef};

/// Position of a task in the plan arena.
pub type TaskIndex = usize;

/// Lifecycle of a task. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    InProgress,
    Complete,
}

/// What a task waits on before it may start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dependency {
    /// Ready as soon as its project is active.
    None,
    /// Ready once one predecessor completes.
    Single(TaskIndex),
    /// Ready once every listed predecessor completes.
    AllOf(Vec<TaskIndex>),
}

impl Dependency {
    /// Predecessor indices.
    pub fn indices(&self) -> &[TaskIndex] {
        match self {
            Dependency::None => &[],
            Dependency::Single(idx) => std::slice::from_ref(idx),
            Dependency::AllOf(all) => all,
        }
    }
}

/// A task in the plan arena.
///
/// Times are in simulated days from t=0 and stay `None` until the task is
/// bound to a resource unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Dense arena index (also the static priority rank).
    pub index: TaskIndex,
    /// Unique identifier derived from project, page and stage.
    pub id: String,
    /// Owning project id.
    pub project_id: u32,
    /// Page number (1-based). `None` for the finalize task.
    pub page: Option<u32>,
    pub stage: Stage,
    /// Effort in resource-days. May be infinite for a degenerate pool.
    pub effort: f64,
    pub status: TaskStatus,
    pub dependency: Dependency,
    pub start: Option<f64>,
    pub finish: Option<f64>,
    /// Unit the task was bound to.
    pub unit: Option<UnitRef>,
}

impl Task {
    /// Creates a pending task.
    pub fn new(
        index: TaskIndex,
        id: impl Into<String>,
        project_id: u32,
        page: Option<u32>,
        stage: Stage,
        effort: f64,
    ) -> Self {
        Self {
            index,
            id: id.into(),
            project_id,
            page,
            stage,
            effort,
            status: TaskStatus::Pending,
            dependency: Dependency::None,
            start: None,
            finish: None,
            unit: None,
        }
    }

    /// Sets the dependency.
    pub fn with_dependency(mut self, dependency: Dependency) -> Self {
        self.dependency = dependency;
        self
    }

    /// Identifier for a per-page task.
    pub fn page_task_id(project_id: u32, page: u32, stage: Stage) -> String {
        format!("P{project_id}-{page}-{}", stage.code())
    }

    /// Identifier for a project's finalize task.
    pub fn finalize_task_id(project_id: u32) -> String {
        format!("P{project_id}-{}", Stage::Finalize.code())
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == TaskStatus::Pending
    }

    /// Whether this is a project's finalize task.
    #[inline]
    pub fn is_finalize(&self) -> bool {
        self.stage == Stage::Finalize
    }
}
