//! Plan builder: expands projects into a task arena.
//!
//! # Layout
//!
//! Projects are sorted by id. Each project contributes, in order:
//!
//! ```text
//! page 1: Design → Content → PlatformBuild → FrontEndBuild
//! page 2: Design → Content → PlatformBuild → FrontEndBuild
//! ...
//! Finalize  (depends on every page's FrontEndBuild)
//! ```
//!
//! Arena order therefore equals dispatch priority (project id, page,
//! finalize last), and each project's tasks occupy one contiguous range.

use std::ops::Range;

use crate::models::{Dependency, Project, ResourceCounts, Stage, StageEfforts, Task, TaskIndex};

/// A project plus the arena range holding its tasks.
#[derive(Debug, Clone)]
pub struct PlannedProject {
    pub project: Project,
    pub tasks: Range<TaskIndex>,
    /// Arena index of the project's finalize task.
    pub finalize: TaskIndex,
}

/// The expanded task set.
#[derive(Debug, Clone, Default)]
pub struct Plan {
    /// Projects in ascending id order.
    pub projects: Vec<PlannedProject>,
    /// Tasks in priority order.
    pub tasks: Vec<Task>,
}

impl Plan {
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Finds a task by id.
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }
}

/// Builds a [`Plan`] from projects and effort tables.
#[derive(Debug, Clone)]
pub struct PlanBuilder {
    efforts: StageEfforts,
    resources: ResourceCounts,
}

impl PlanBuilder {
    /// `resources` is only consulted to size the finalize split.
    pub fn new(efforts: StageEfforts, resources: ResourceCounts) -> Self {
        Self { efforts, resources }
    }

    /// Expands `projects` into the full task set.
    ///
    /// Never fails. A project with zero pages gets a finalize task with an
    /// empty dependency set, which is ready immediately.
    pub fn build(&self, projects: &[Project]) -> Plan {
        let mut sorted: Vec<&Project> = projects.iter().collect();
        sorted.sort_by_key(|p| p.id);

        let finalize_effort = self.efforts.finalize_per_unit(&self.resources);
        let capacity = sorted.iter().map(|p| p.task_count()).sum();
        let mut tasks: Vec<Task> = Vec::with_capacity(capacity);
        let mut planned = Vec::with_capacity(sorted.len());

        for project in sorted {
            let first = tasks.len();
            let mut last_stage_tasks = Vec::with_capacity(project.pages as usize);

            for page in 1..=project.pages {
                let mut previous: Option<TaskIndex> = None;
                for stage in Stage::PAGE_CHAIN {
                    let index = tasks.len();
                    let dependency = match previous {
                        None => Dependency::None,
                        Some(prev) => Dependency::Single(prev),
                    };
                    tasks.push(
                        Task::new(
                            index,
                            Task::page_task_id(project.id, page, stage),
                            project.id,
                            Some(page),
                            stage,
                            self.efforts.get(stage),
                        )
                        .with_dependency(dependency),
                    );
                    previous = Some(index);
                }
                last_stage_tasks.extend(previous);
            }

            let finalize = tasks.len();
            tasks.push(
                Task::new(
                    finalize,
                    Task::finalize_task_id(project.id),
                    project.id,
                    None,
                    Stage::Finalize,
                    finalize_effort,
                )
                .with_dependency(Dependency::AllOf(last_stage_tasks)),
            );

            planned.push(PlannedProject {
                project: project.clone(),
                tasks: first..tasks.len(),
                finalize,
            });
        }

        Plan {
            projects: planned,
            tasks,
        }
    }
}
