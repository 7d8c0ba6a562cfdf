//! Completion forecasting for portfolios of multi-stage production pipelines.
//!
//! Models a team building several websites at once: every page passes
//! through design, content, platform build and front-end build, and every
//! site ends with a go-live step staffed by the developers. The forecast is
//! a deterministic simulation of who works on what, and when.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Project`, `Stage`, `Task`, `ResourceCounts`,
//!   `StageEfforts`, `Forecast`, `Event`
//! - **`scheduler`**: `PlanBuilder`, `ResourceLedger`, `Simulation`, `ForecastKpi`
//! - **`config`**: `ForecastRequest` and `SimulationConfig` (JSON-loadable)
//! - **`validation`**: Input integrity checks (counts, efforts, pages, ids)
//!
//! # Quick-start
//!
//! ```
//! use pipeline_forecast::config::ForecastRequest;
//! use pipeline_forecast::scheduler::ForecastKpi;
//!
//! let request = ForecastRequest::default();
//! let forecast = pipeline_forecast::forecast(&request).unwrap();
//! assert!(forecast.is_completed());
//!
//! let kpi = ForecastKpi::calculate(&forecast, &request.resources);
//! assert!(kpi.total_days > 0);
//! for line in forecast.log_lines() {
//!     println!("{line}");
//! }
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Kolisch (1996), "Serial and parallel resource-constrained project
//!   scheduling methods revisited"

pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{ForecastError, ForecastResult};
pub use scheduler::forecast;
