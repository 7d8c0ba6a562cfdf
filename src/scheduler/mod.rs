//! Plan builder, resource ledger, simulation loop, and KPI evaluation.
//!
//! # Algorithm
//!
//! `Simulation` is a discrete-time greedy list scheduler. Each tick it
//! activates projects up to the portfolio cap, binds every ready task to the
//! unit that can start it earliest, advances the clock, and retires finished
//! tasks. It is not optimal, but it is deterministic and mirrors how a team
//! actually pulls work.
//!
//! # KPI
//!
//! `ForecastKpi` summarizes a run: makespan, whole-day durations, flow
//! time, and per-category utilization.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Kolisch (1996), "Serial and parallel resource-constrained project
//!   scheduling methods revisited"

mod kpi;
mod ledger;
mod observer;
mod plan;
mod simulation;

pub use kpi::ForecastKpi;
pub use ledger::{ResourceLedger, Slot};
pub use observer::{NoopObserver, SimObserver};
pub use plan::{Plan, PlanBuilder, PlannedProject};
pub use simulation::{forecast, Simulation};
