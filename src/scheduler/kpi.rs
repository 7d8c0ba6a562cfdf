//! Forecast summary metrics (KPIs).
//!
//! Computes the headline numbers of a forecast run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest project finish |
//! | Total Duration | Makespan rounded up to whole days |
//! | Project Duration | finish - first start, rounded up to whole days |
//! | Avg Flow Time | Mean of finish - first start over finished projects |
//! | Utilization | Busy unit-days / (units × makespan), per category |

use std::collections::HashMap;

use crate::models::{Forecast, ResourceCategory, ResourceCounts};

/// Forecast performance indicators.
///
/// All time values are in simulated days.
#[derive(Debug, Clone)]
pub struct ForecastKpi {
    /// Latest project finish.
    pub makespan: f64,
    /// Makespan rounded up to whole days.
    pub total_days: u64,
    /// Whole-day duration of each finished project, ascending by id.
    pub project_days: Vec<(u32, u64)>,
    /// Mean elapsed time of finished projects.
    pub avg_flow_time: f64,
    /// Busy fraction of each category's units over the makespan.
    pub utilization_by_category: HashMap<ResourceCategory, f64>,
    /// Mean of the per-category utilizations.
    pub avg_utilization: f64,
}

impl ForecastKpi {
    /// Computes KPIs from a forecast and the team that produced it.
    pub fn calculate(forecast: &Forecast, resources: &ResourceCounts) -> Self {
        let makespan = forecast.makespan();

        let mut project_days = Vec::new();
        let mut total_flow_time = 0.0;
        for timeline in &forecast.projects {
            if let Some(duration) = timeline.duration() {
                project_days.push((timeline.id, whole_days(duration)));
                total_flow_time += duration;
            }
        }
        let avg_flow_time = if project_days.is_empty() {
            0.0
        } else {
            total_flow_time / project_days.len() as f64
        };

        let mut utilization_by_category = HashMap::new();
        if makespan > 0.0 {
            for category in ResourceCategory::ALL {
                let units = resources.get(category);
                if units == 0 {
                    continue;
                }
                let busy: f64 = forecast
                    .tasks
                    .iter()
                    .filter(|r| r.category == category && r.finish.is_finite())
                    .map(|r| r.duration())
                    .sum();
                utilization_by_category.insert(category, busy / (units as f64 * makespan));
            }
        }
        let avg_utilization = if utilization_by_category.is_empty() {
            0.0
        } else {
            let sum: f64 = utilization_by_category.values().sum();
            sum / utilization_by_category.len() as f64
        };

        Self {
            makespan,
            total_days: whole_days(makespan),
            project_days,
            avg_flow_time,
            utilization_by_category,
            avg_utilization,
        }
    }

    /// Whether the forecast delivers within `max_days`.
    pub fn fits_within(&self, max_days: u64) -> bool {
        self.total_days <= max_days
    }
}

fn whole_days(days: f64) -> u64 {
    days.max(0.0).ceil() as u64
}
