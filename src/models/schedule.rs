//! Forecast (solution) model.
//!
//! A forecast is the result of one simulation run: how it ended, when each
//! project started and finished, where every task ran, and the event log.
//! A timed-out run keeps whatever partial results it reached.

use serde::{Deserialize, Serialize};

use super::{Event, ResourceCategory, Stage, Task, UnitRef};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SimulationOutcome {
    /// Every task completed.
    Completed,
    /// The clock passed the time limit first.
    TimedOut {
        /// Clock value when the limit was detected.
        at: f64,
    },
}

/// Observed start and finish of one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectTimeline {
    pub id: u32,
    pub name: String,
    /// Start of the project's first bound task.
    pub start: Option<f64>,
    /// Finish of the project's finalize task.
    pub finish: Option<f64>,
}

impl ProjectTimeline {
    /// Elapsed days from first start to finalize finish.
    pub fn duration(&self) -> Option<f64> {
        Some(self.finish? - self.start?)
    }

    pub fn is_finished(&self) -> bool {
        self.finish.is_some()
    }
}

/// Where and when a task ran. Only bound tasks produce records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    pub project_id: u32,
    /// Project display name (denormalized for timeline rendering).
    pub project_name: String,
    pub page: Option<u32>,
    pub stage: Stage,
    /// Category of the unit that performed the task.
    pub category: ResourceCategory,
    pub unit: UnitRef,
    pub start: f64,
    pub finish: f64,
}

impl TaskRecord {
    /// Builds a record from a bound task. Returns `None` if it never bound.
    pub fn from_task(task: &Task, project_name: &str) -> Option<Self> {
        let unit = task.unit?;
        Some(Self {
            id: task.id.clone(),
            project_id: task.project_id,
            project_name: project_name.to_string(),
            page: task.page,
            stage: task.stage,
            category: unit.category,
            unit,
            start: task.start?,
            finish: task.finish?,
        })
    }

    /// Row label for timeline charts: `"<project> - <stage>"`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.project_name, self.stage)
    }

    #[inline]
    pub fn duration(&self) -> f64 {
        self.finish - self.start
    }
}

/// The complete result of a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub outcome: SimulationOutcome,
    /// One entry per project, ascending by id.
    pub projects: Vec<ProjectTimeline>,
    /// Bound tasks in plan priority order.
    pub tasks: Vec<TaskRecord>,
    /// Chronological event log.
    pub events: Vec<Event>,
    /// Clock value when the loop stopped.
    pub final_clock: f64,
}

impl Forecast {
    /// Whether every task completed.
    pub fn is_completed(&self) -> bool {
        self.outcome == SimulationOutcome::Completed
    }

    /// Whether the run hit the time limit.
    pub fn is_timed_out(&self) -> bool {
        matches!(self.outcome, SimulationOutcome::TimedOut { .. })
    }

    /// Latest project finish (0.0 if none finished).
    pub fn makespan(&self) -> f64 {
        self.projects
            .iter()
            .filter_map(|p| p.finish)
            .fold(0.0, f64::max)
    }

    /// Timeline of one project.
    pub fn project(&self, id: u32) -> Option<&ProjectTimeline> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Finds a task record by id.
    pub fn record(&self, task_id: &str) -> Option<&TaskRecord> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    /// All records of a project.
    pub fn records_for_project(&self, project_id: u32) -> Vec<&TaskRecord> {
        self.tasks
            .iter()
            .filter(|t| t.project_id == project_id)
            .collect()
    }

    /// All records served by one unit, sorted by start time.
    pub fn records_for_unit(&self, unit: UnitRef) -> Vec<&TaskRecord> {
        let mut records: Vec<&TaskRecord> =
            self.tasks.iter().filter(|t| t.unit == unit).collect();
        records.sort_by(|a, b| a.start.total_cmp(&b.start));
        records
    }

    /// Rendered event log lines.
    pub fn log_lines(&self) -> Vec<String> {
        self.events.iter().map(|e| e.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventKind;

    fn record(id: &str, project_id: u32, unit: UnitRef, start: f64, finish: f64) -> TaskRecord {
        TaskRecord {
            id: id.into(),
            project_id,
            project_name: format!("Website {}", project_id + 1),
            page: Some(1),
            stage: Stage::Design,
            category: unit.category,
            unit,
            start,
            finish,
        }
    }

    fn sample_forecast() -> Forecast {
        let d0 = UnitRef::new(ResourceCategory::Design, 0);
        let d1 = UnitRef::new(ResourceCategory::Design, 1);
        Forecast {
            outcome: SimulationOutcome::Completed,
            projects: vec![
                ProjectTimeline {
                    id: 0,
                    name: "Website 1".into(),
                    start: Some(0.0),
                    finish: Some(12.5),
                },
                ProjectTimeline {
                    id: 1,
                    name: "Website 2".into(),
                    start: Some(1.5),
                    finish: Some(20.0),
                },
            ],
            tasks: vec![
                record("a", 0, d0, 3.0, 4.5),
                record("b", 0, d0, 0.0, 1.5),
                record("c", 1, d1, 1.5, 3.0),
            ],
            events: vec![Event::new(
                0.0,
                EventKind::Activated {
                    project_id: 0,
                    name: "Website 1".into(),
                },
            )],
            final_clock: 20.0,
        }
    }

    #[test]
    fn test_makespan() {
        assert!((sample_forecast().makespan() - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_project_lookup_and_duration() {
        let f = sample_forecast();
        let p = f.project(1).unwrap();
        assert!((p.duration().unwrap() - 18.5).abs() < 1e-10);
        assert!(p.is_finished());
        assert!(f.project(9).is_none());
    }

    #[test]
    fn test_records_for_unit_sorted_by_start() {
        let f = sample_forecast();
        let recs = f.records_for_unit(UnitRef::new(ResourceCategory::Design, 0));
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].id, "b");
        assert_eq!(recs[1].id, "a");
    }

    #[test]
    fn test_records_for_project() {
        let f = sample_forecast();
        assert_eq!(f.records_for_project(0).len(), 2);
        assert_eq!(f.records_for_project(1).len(), 1);
        assert!(f.record("c").is_some());
        assert!(f.record("zzz").is_none());
    }

    #[test]
    fn test_record_label() {
        let f = sample_forecast();
        assert_eq!(f.record("c").unwrap().label(), "Website 2 - Design");
    }

    #[test]
    fn test_outcome_flags() {
        let mut f = sample_forecast();
        assert!(f.is_completed());
        f.outcome = SimulationOutcome::TimedOut { at: 1000.5 };
        assert!(f.is_timed_out());
        assert!(!f.is_completed());
    }

    #[test]
    fn test_unfinished_timeline_has_no_duration() {
        let p = ProjectTimeline {
            id: 0,
            name: String::new(),
            start: Some(2.0),
            finish: None,
        };
        assert!(p.duration().is_none());
    }

    #[test]
    fn test_log_lines() {
        let lines = sample_forecast().log_lines();
        assert_eq!(lines, vec!["[  0.0 days] Website 1 activated (eligible for work)."]);
    }
}
