//! Resource ledger: next-free marks per resource unit.
//!
//! Each unit's only state is the time it becomes free. A query asks which
//! unit of a pool can start a task earliest, given that the task itself
//! cannot start before `not_before`.
//!
//! # Tie-breaking
//! The feasible start of unit `u` is `max(u.free_at, not_before)`. The unit
//! with the smallest feasible start wins; ties go to the unit scanned first.
//! For a union pool, every unit of the first category is scanned before any
//! unit of the second.

use crate::models::{ResourceCategory, ResourceCounts, ResourcePool, UnitRef};

/// The best unit for a task and when it can start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub unit: UnitRef,
    pub start: f64,
}

/// Next-free marks for every resource unit.
#[derive(Debug, Clone)]
pub struct ResourceLedger {
    free_at: [Vec<f64>; 4],
}

impl ResourceLedger {
    /// Creates a ledger with every unit free at t=0.
    pub fn new(counts: &ResourceCounts) -> Self {
        let units = |c: ResourceCategory| vec![0.0; counts.get(c) as usize];
        Self {
            free_at: [
                units(ResourceCategory::Design),
                units(ResourceCategory::Content),
                units(ResourceCategory::PlatformBuild),
                units(ResourceCategory::FrontEndBuild),
            ],
        }
    }

    /// Finds the unit of `pool` that can start earliest.
    ///
    /// Returns `None` if the pool has no units.
    pub fn earliest_start(&self, pool: ResourcePool, not_before: f64) -> Option<Slot> {
        let mut best: Option<Slot> = None;

        for category in pool.categories() {
            for (i, &free_at) in self.free_at[category.index()].iter().enumerate() {
                let start = free_at.max(not_before);
                // Strict comparison keeps the earlier unit on ties.
                if best.map_or(true, |b| start < b.start) {
                    best = Some(Slot {
                        unit: UnitRef::new(category, i),
                        start,
                    });
                }
            }
        }

        best
    }

    /// Marks `unit` busy until `finish`.
    pub fn commit(&mut self, unit: UnitRef, finish: f64) {
        let mark = &mut self.free_at[unit.category.index()][unit.index];
        debug_assert!(finish >= *mark, "free-at mark must not move backward");
        *mark = finish;
    }

    /// Current free-at mark of a unit.
    pub fn free_at(&self, unit: UnitRef) -> Option<f64> {
        self.free_at[unit.category.index()].get(unit.index).copied()
    }

    /// Number of units in a category.
    pub fn unit_count(&self, category: ResourceCategory) -> usize {
        self.free_at[category.index()].len()
    }

    /// Number of units in a pool.
    pub fn pool_size(&self, pool: ResourcePool) -> usize {
        pool.categories().map(|c| self.unit_count(c)).sum()
    }
}
