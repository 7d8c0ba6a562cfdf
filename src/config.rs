//! Forecast request and simulation tunables.
//!
//! A [`ForecastRequest`] bundles everything a run consumes. It can be built
//! in code or loaded from JSON; any section left out of the JSON falls back
//! to the defaults below.
//!
//! ```
//! use pipeline_forecast::config::ForecastRequest;
//!
//! let request = ForecastRequest::from_json(r#"{
//!     "resources": { "design": 2, "front_end_build": 1 },
//!     "projects": [ { "id": 0, "name": "Shop", "pages": 4 } ]
//! }"#).unwrap();
//! assert_eq!(request.resources.design, 2);
//! assert_eq!(request.projects.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ForecastResult;
use crate::models::{Project, ResourceCounts, StageEfforts};

/// Loop parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Clock increment per tick, in days.
    pub time_step: f64,
    /// Safety bound: the run times out once the clock exceeds this.
    pub time_limit: f64,
    /// Portfolio concurrency cap on active projects.
    pub max_active_projects: usize,
}

impl SimulationConfig {
    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn with_time_limit(mut self, time_limit: f64) -> Self {
        self.time_limit = time_limit;
        self
    }

    pub fn with_max_active_projects(mut self, cap: usize) -> Self {
        self.max_active_projects = cap;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_step: 0.5,
            time_limit: 1000.0,
            max_active_projects: 2,
        }
    }
}

/// Input container for a forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastRequest {
    pub resources: ResourceCounts,
    pub efforts: StageEfforts,
    pub projects: Vec<Project>,
    pub config: SimulationConfig,
}

impl ForecastRequest {
    /// Creates a request with default efforts and config.
    pub fn new(resources: ResourceCounts, projects: Vec<Project>) -> Self {
        Self {
            resources,
            efforts: StageEfforts::default(),
            projects,
            config: SimulationConfig::default(),
        }
    }

    /// Loads a request from JSON.
    pub fn from_json(json: &str) -> ForecastResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replaces the project list with "Website N" projects, one per entry.
    pub fn with_sites(mut self, pages: &[u32]) -> Self {
        self.projects = pages
            .iter()
            .enumerate()
            .map(|(i, &p)| Project::website(i as u32, p))
            .collect();
        self
    }

    pub fn with_efforts(mut self, efforts: StageEfforts) -> Self {
        self.efforts = efforts;
        self
    }

    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }
}

impl Default for ForecastRequest {
    /// Three websites of 10, 15 and 20 pages on the default team.
    fn default() -> Self {
        Self::new(ResourceCounts::default(), Vec::new()).with_sites(&[10, 15, 20])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request() {
        let r = ForecastRequest::default();
        assert_eq!(r.projects.len(), 3);
        assert_eq!(r.projects[0].name, "Website 1");
        assert_eq!(r.projects[2].pages, 20);
        assert_eq!(r.resources, ResourceCounts::new(1, 1, 1, 2));
        assert_eq!(r.config.max_active_projects, 2);
        assert!((r.config.time_step - 0.5).abs() < 1e-10);
        assert!((r.config.time_limit - 1000.0).abs() < 1e-10);
    }

    #[test]
    fn test_from_json_partial() {
        let r = ForecastRequest::from_json(
            r#"{
                "efforts": { "finalize": 4.0 },
                "config": { "time_step": 0.25 }
            }"#,
        )
        .unwrap();
        assert!((r.efforts.finalize - 4.0).abs() < 1e-10);
        assert!((r.efforts.design - 1.5).abs() < 1e-10);
        assert!((r.config.time_step - 0.25).abs() < 1e-10);
        assert_eq!(r.config.max_active_projects, 2);
        // Omitted project list falls back to the default portfolio.
        assert_eq!(r.projects.len(), 3);
    }

    #[test]
    fn test_from_json_project_without_name() {
        let r = ForecastRequest::from_json(r#"{ "projects": [ { "id": 5, "pages": 2 } ] }"#)
            .unwrap();
        assert_eq!(r.projects[0].id, 5);
        assert_eq!(r.projects[0].display_name(), "Project 5");
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(ForecastRequest::from_json("{ not json").is_err());
    }

    #[test]
    fn test_with_sites() {
        let r = ForecastRequest::default().with_sites(&[1, 2]);
        assert_eq!(r.projects.len(), 2);
        assert_eq!(r.projects[1].id, 1);
        assert_eq!(r.projects[1].pages, 2);
        assert_eq!(r.projects[1].name, "Website 2");
    }

    #[test]
    fn test_config_builders() {
        let c = SimulationConfig::default()
            .with_time_step(1.0)
            .with_time_limit(50.0)
            .with_max_active_projects(3);
        assert!((c.time_step - 1.0).abs() < 1e-10);
        assert!((c.time_limit - 50.0).abs() < 1e-10);
        assert_eq!(c.max_active_projects, 3);
    }
}
