//! Forecasting domain models.
//!
//! Provides the data types for describing a portfolio of projects, the
//! labor that builds them, and the result of a forecast run.
//!
//! # Domain Mappings
//!
//! | pipeline-forecast | Web agency | Print shop | Game studio |
//! |-------------------|------------|------------|-------------|
//! | Project | Website | Book | Level pack |
//! | Page | Page | Chapter | Level |
//! | ResourceCategory | Designer/Writer/Developer | Editor/Typesetter | Artist/Scripter |
//! | Forecast | Delivery plan | Print schedule | Content roadmap |

mod event;
mod project;
mod resource;
mod schedule;
mod stage;
mod task;

pub use event::{Event, EventKind};
pub use project::Project;
pub use resource::{ResourceCounts, StageEfforts, UnitRef};
pub use schedule::{Forecast, ProjectTimeline, SimulationOutcome, TaskRecord};
pub use stage::{ResourceCategory, ResourcePool, Stage};
pub use task::{Dependency, Task, TaskIndex, TaskStatus};
