//! Discrete-time greedy list scheduler.
//!
//! # Tick
//!
//! ```text
//! ① Activation  while fewer than `max_active_projects` are active, activate
//!                the lowest-id project that is neither active nor retired.
//! ② Dispatch    scan pending tasks of active projects in priority order;
//!                bind each ready task whose best unit can start by `clock`.
//! ③ Advance     clock = ticks × time_step.
//! ④ Retire      complete every bound task with finish <= clock; a finished
//!                finalize task retires its project.
//! ```
//!
//! The loop ends when every task is complete, or reports a timeout once
//! the clock exceeds `time_limit`.
//!
//! # Readiness
//! A task may start no earlier than the latest finish among its
//! dependencies and no earlier than its project's activation time.
//!
//! # Determinism
//! Activation order, dispatch order, and unit choice are all total orders
//! over integers, so identical inputs give identical forecasts.

use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use crate::config::{ForecastRequest, SimulationConfig};
use crate::error::{ForecastError, ForecastResult};
use crate::models::{
    Dependency, Event, EventKind, Forecast, ProjectTimeline, ResourceCounts, SimulationOutcome,
    Task, TaskIndex, TaskRecord, TaskStatus,
};
use crate::validation::{validate_config, validate_request};

use super::{NoopObserver, Plan, PlanBuilder, ResourceLedger, SimObserver};

/// Validates a request, plans it, and runs it to completion or timeout.
///
/// # Example
///
/// ```
/// use pipeline_forecast::config::ForecastRequest;
/// use pipeline_forecast::models::ResourceCounts;
///
/// let request = ForecastRequest::new(ResourceCounts::uniform(1), Vec::new()).with_sites(&[1]);
/// let forecast = pipeline_forecast::forecast(&request).unwrap();
/// assert!(forecast.is_completed());
/// assert_eq!(forecast.project(0).unwrap().finish, Some(11.0));
/// ```
pub fn forecast(request: &ForecastRequest) -> ForecastResult<Forecast> {
    Ok(Simulation::new(request)?.run())
}

/// Simulation state for one run.
///
/// All mutable state lives here, so independent simulations never interact.
/// Projects are addressed by their position in [`Plan::projects`].
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    plan: Plan,
    ledger: ResourceLedger,
    /// Completed ticks; `clock` is always `ticks * time_step`.
    ticks: u64,
    clock: f64,
    /// Positions of active projects (ascending position = ascending id).
    active: BTreeSet<usize>,
    activated_at: Vec<Option<f64>>,
    started_at: Vec<Option<f64>>,
    finished_at: Vec<Option<f64>>,
    /// Finish time of each completed task, by arena index.
    completed_at: Vec<Option<f64>>,
    completed_count: usize,
    /// Bound tasks awaiting retirement, with their finish times.
    in_progress: Vec<(TaskIndex, f64)>,
    /// Owning project position of each task.
    project_of: Vec<usize>,
    events: Vec<Event>,
}

impl Simulation {
    /// Validates the request and builds a ready-to-run simulation.
    pub fn new(request: &ForecastRequest) -> ForecastResult<Self> {
        validate_request(request).map_err(ForecastError::InvalidInput)?;
        let plan = PlanBuilder::new(request.efforts, request.resources).build(&request.projects);
        Self::from_plan(plan, &request.resources, request.config)
    }

    /// Builds a simulation from a hand-made plan.
    ///
    /// Only `config` is validated; resource counts may be zero, in which case
    /// the affected tasks never bind and the run times out.
    pub fn from_plan(
        plan: Plan,
        resources: &ResourceCounts,
        config: SimulationConfig,
    ) -> ForecastResult<Self> {
        validate_config(&config).map_err(ForecastError::InvalidInput)?;

        let mut project_of = vec![0; plan.tasks.len()];
        for (pos, planned) in plan.projects.iter().enumerate() {
            for idx in planned.tasks.clone() {
                project_of[idx] = pos;
            }
        }

        let project_count = plan.projects.len();
        let task_count = plan.tasks.len();
        Ok(Self {
            config,
            ledger: ResourceLedger::new(resources),
            ticks: 0,
            clock: 0.0,
            active: BTreeSet::new(),
            activated_at: vec![None; project_count],
            started_at: vec![None; project_count],
            finished_at: vec![None; project_count],
            completed_at: vec![None; task_count],
            completed_count: 0,
            in_progress: Vec::new(),
            project_of,
            events: Vec::new(),
            plan,
        })
    }

    /// Current simulated time.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub fn ledger(&self) -> &ResourceLedger {
        &self.ledger
    }

    /// Whether every task has completed.
    pub fn is_done(&self) -> bool {
        self.completed_count == self.plan.tasks.len()
    }

    /// Ids of currently active projects, ascending.
    pub fn active_project_ids(&self) -> Vec<u32> {
        self.active
            .iter()
            .map(|&pos| self.plan.projects[pos].project.id)
            .collect()
    }

    /// Events logged so far.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Runs to completion or timeout.
    pub fn run(self) -> Forecast {
        self.run_with(&mut NoopObserver)
    }

    /// Runs to completion or timeout, reporting progress to `observer`.
    pub fn run_with<O: SimObserver>(mut self, observer: &mut O) -> Forecast {
        info!(
            projects = self.plan.projects.len(),
            tasks = self.plan.tasks.len(),
            "starting forecast simulation"
        );

        let outcome = loop {
            if self.is_done() {
                break SimulationOutcome::Completed;
            }
            if self.clock > self.config.time_limit {
                warn!(
                    clock = self.clock,
                    completed = self.completed_count,
                    total = self.plan.tasks.len(),
                    "simulation timed out"
                );
                self.events.push(Event::new(self.clock, EventKind::TimedOut));
                break SimulationOutcome::TimedOut { at: self.clock };
            }

            observer.on_tick_start(self.clock);
            let bound = self.tick(observer);
            let active = self.active_project_ids();
            observer.on_tick_end(self.clock, bound, &active);
        };

        observer.on_sim_end(&outcome);
        let forecast = self.into_forecast(outcome);
        info!(
            completed = forecast.is_completed(),
            makespan = forecast.makespan(),
            "forecast simulation finished"
        );
        forecast
    }

    /// Runs a single tick. Returns the number of tasks bound.
    pub fn step(&mut self) -> usize {
        self.tick(&mut NoopObserver)
    }

    fn tick<O: SimObserver>(&mut self, observer: &mut O) -> usize {
        self.activate();
        let bound = self.dispatch(observer);
        self.ticks += 1;
        self.clock = self.ticks as f64 * self.config.time_step;
        self.retire();
        bound
    }

    // ── Activation ───────────────────────────────────────────────────────

    fn activate(&mut self) {
        while self.active.len() < self.config.max_active_projects {
            let candidate = (0..self.plan.projects.len())
                .find(|&pos| !self.active.contains(&pos) && self.finished_at[pos].is_none());
            let Some(pos) = candidate else {
                break;
            };

            self.active.insert(pos);
            self.activated_at[pos] = Some(self.clock);

            let project = &self.plan.projects[pos].project;
            info!(project = project.id, clock = self.clock, "project activated");
            self.events.push(Event::new(
                self.clock,
                EventKind::Activated {
                    project_id: project.id,
                    name: project.display_name(),
                },
            ));
        }
    }

    // ── Dispatch ─────────────────────────────────────────────────────────

    fn dispatch<O: SimObserver>(&mut self, observer: &mut O) -> usize {
        let active: Vec<usize> = self.active.iter().copied().collect();
        let mut bound = 0;

        for pos in active {
            for idx in self.plan.projects[pos].tasks.clone() {
                if self.try_bind(pos, idx) {
                    observer.on_bind(self.clock, &self.plan.tasks[idx]);
                    bound += 1;
                }
            }
        }

        bound
    }

    /// Binds task `idx` if it is pending, ready, and a unit can start it by now.
    fn try_bind(&mut self, pos: usize, idx: TaskIndex) -> bool {
        let task = &self.plan.tasks[idx];
        if !task.is_pending() {
            return false;
        }
        let Some(deps_done_at) = self.dependency_ready_at(&task.dependency) else {
            return false;
        };
        let not_before = deps_done_at.max(self.activated_at[pos].unwrap_or(0.0));
        let Some(slot) = self.ledger.earliest_start(task.stage.pool(), not_before) else {
            return false;
        };
        if slot.start > self.clock {
            return false;
        }

        let finish = slot.start + task.effort;
        self.ledger.commit(slot.unit, finish);

        let task = &mut self.plan.tasks[idx];
        task.status = TaskStatus::InProgress;
        task.start = Some(slot.start);
        task.finish = Some(finish);
        task.unit = Some(slot.unit);
        self.in_progress.push((idx, finish));

        debug!(
            task = %task.id,
            unit = %slot.unit,
            start = slot.start,
            finish,
            "task bound"
        );

        if self.started_at[pos].is_none() {
            self.started_at[pos] = Some(slot.start);
            let stage = task.stage;
            let project = &self.plan.projects[pos].project;
            info!(project = project.id, start = slot.start, "work started");
            self.events.push(Event::new(
                slot.start,
                EventKind::WorkStarted {
                    project_id: project.id,
                    name: project.display_name(),
                    stage,
                },
            ));
        }

        true
    }

    /// Latest finish among dependencies, or `None` if any is incomplete.
    fn dependency_ready_at(&self, dependency: &Dependency) -> Option<f64> {
        match dependency {
            Dependency::None => Some(0.0),
            Dependency::Single(dep) => self.completed_at[*dep],
            Dependency::AllOf(deps) => deps
                .iter()
                .try_fold(0.0_f64, |latest, &dep| Some(latest.max(self.completed_at[dep]?))),
        }
    }

    // ── Retirement ───────────────────────────────────────────────────────

    fn retire(&mut self) {
        let clock = self.clock;
        let mut done: Vec<(TaskIndex, f64)> = Vec::new();
        self.in_progress.retain(|&(idx, finish)| {
            if finish <= clock {
                done.push((idx, finish));
                false
            } else {
                true
            }
        });
        done.sort_unstable_by_key(|&(idx, _)| idx);

        for (idx, finish) in done {
            let task = &mut self.plan.tasks[idx];
            task.status = TaskStatus::Complete;
            self.completed_at[idx] = Some(finish);
            self.completed_count += 1;

            if task.is_finalize() {
                let pos = self.project_of[idx];
                self.finished_at[pos] = Some(finish);
                self.active.remove(&pos);

                let project = &self.plan.projects[pos].project;
                info!(project = project.id, finish, "project complete");
                self.events.push(Event::new(
                    finish,
                    EventKind::Completed {
                        project_id: project.id,
                        name: project.display_name(),
                    },
                ));
            }
        }
    }

    // ── Results ──────────────────────────────────────────────────────────

    fn into_forecast(self, outcome: SimulationOutcome) -> Forecast {
        let projects = self
            .plan
            .projects
            .iter()
            .enumerate()
            .map(|(pos, planned)| ProjectTimeline {
                id: planned.project.id,
                name: planned.project.display_name(),
                start: self.started_at[pos],
                finish: self.finished_at[pos],
            })
            .collect();

        let tasks = self
            .plan
            .tasks
            .iter()
            .filter_map(|t: &Task| {
                let name = self.plan.projects[self.project_of[t.index]]
                    .project
                    .display_name();
                TaskRecord::from_task(t, &name)
            })
            .collect();

        Forecast {
            outcome,
            projects,
            tasks,
            events: self.events,
            final_clock: self.clock,
        }
    }
}
