//! Simulation observer trait for progress reporting and data collection.

use crate::models::{SimulationOutcome, Task};

/// Callbacks invoked by [`Simulation::run_with`][crate::scheduler::Simulation::run_with]
/// at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: sampling the active set
///
/// ```
/// use pipeline_forecast::scheduler::SimObserver;
///
/// #[derive(Default)]
/// struct PeakActive(usize);
///
/// impl SimObserver for PeakActive {
///     fn on_tick_end(&mut self, _clock: f64, _bound: usize, active: &[u32]) {
///         self.0 = self.0.max(active.len());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of each tick, before activation.
    fn on_tick_start(&mut self, _clock: f64) {}

    /// Called whenever a task is bound to a unit.
    fn on_bind(&mut self, _clock: f64, _task: &Task) {}

    /// Called at the end of each tick, after retirement.
    ///
    /// `clock` is the advanced clock, `bound` the number of tasks bound this
    /// tick and `active` the ids of projects still active.
    fn on_tick_end(&mut self, _clock: f64, _bound: usize, _active: &[u32]) {}

    /// Called once when the loop stops.
    fn on_sim_end(&mut self, _outcome: &SimulationOutcome) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
