//! Resource model.
//!
//! Resources are interchangeable units of labor grouped by category
//! (designers, writers, platform developers, front-end developers).
//! A unit is identified by its category and its position within it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ResourceCategory, Stage};

/// Number of units available per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceCounts {
    pub design: u32,
    pub content: u32,
    pub platform_build: u32,
    pub front_end_build: u32,
}

impl ResourceCounts {
    /// Creates a count table.
    pub fn new(design: u32, content: u32, platform_build: u32, front_end_build: u32) -> Self {
        Self {
            design,
            content,
            platform_build,
            front_end_build,
        }
    }

    /// Same count for every category.
    pub fn uniform(count: u32) -> Self {
        Self::new(count, count, count, count)
    }

    /// Units in one category.
    pub fn get(&self, category: ResourceCategory) -> u32 {
        match category {
            ResourceCategory::Design => self.design,
            ResourceCategory::Content => self.content,
            ResourceCategory::PlatformBuild => self.platform_build,
            ResourceCategory::FrontEndBuild => self.front_end_build,
        }
    }

    /// Units eligible for finalize work.
    pub fn finalize_pool(&self) -> u32 {
        self.platform_build + self.front_end_build
    }
}

impl Default for ResourceCounts {
    fn default() -> Self {
        Self::new(1, 1, 1, 2)
    }
}

/// Nominal effort per stage, in resource-days.
///
/// Page stages are per page; `finalize` is per project and is split across
/// every unit of the finalize pool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageEfforts {
    pub design: f64,
    pub content: f64,
    pub platform_build: f64,
    pub front_end_build: f64,
    pub finalize: f64,
}

impl StageEfforts {
    /// Creates an effort table.
    pub fn new(
        design: f64,
        content: f64,
        platform_build: f64,
        front_end_build: f64,
        finalize: f64,
    ) -> Self {
        Self {
            design,
            content,
            platform_build,
            front_end_build,
            finalize,
        }
    }

    /// Nominal effort for a stage, before any pool split.
    pub fn get(&self, stage: Stage) -> f64 {
        match stage {
            Stage::Design => self.design,
            Stage::Content => self.content,
            Stage::PlatformBuild => self.platform_build,
            Stage::FrontEndBuild => self.front_end_build,
            Stage::Finalize => self.finalize,
        }
    }

    /// Per-unit finalize effort: the project's finalize effort divided by
    /// the finalize pool size. An empty pool yields `f64::INFINITY`.
    pub fn finalize_per_unit(&self, counts: &ResourceCounts) -> f64 {
        let pool = counts.finalize_pool();
        if pool == 0 {
            f64::INFINITY
        } else {
            self.finalize / pool as f64
        }
    }
}

impl Default for StageEfforts {
    fn default() -> Self {
        Self::new(1.5, 1.5, 1.0, 2.0, 10.0)
    }
}

/// One concrete resource unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitRef {
    /// Owning category.
    pub category: ResourceCategory,
    /// Position within the category (0-indexed).
    pub index: usize,
}

impl UnitRef {
    pub fn new(category: ResourceCategory, index: usize) -> Self {
        Self { category, index }
    }
}

impl fmt::Display for UnitRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}", self.category, self.index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_lookup() {
        let c = ResourceCounts::new(1, 2, 3, 4);
        assert_eq!(c.get(ResourceCategory::Design), 1);
        assert_eq!(c.get(ResourceCategory::Content), 2);
        assert_eq!(c.get(ResourceCategory::PlatformBuild), 3);
        assert_eq!(c.get(ResourceCategory::FrontEndBuild), 4);
        assert_eq!(c.finalize_pool(), 7);
    }

    #[test]
    fn test_finalize_split_across_pool() {
        let e = StageEfforts::default();
        let per_unit = e.finalize_per_unit(&ResourceCounts::uniform(1));
        assert!((per_unit - 5.0).abs() < 1e-10);

        let per_unit = e.finalize_per_unit(&ResourceCounts::new(1, 1, 1, 2));
        assert!((per_unit - 10.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_finalize_empty_pool_is_unbounded() {
        let e = StageEfforts::default();
        let per_unit = e.finalize_per_unit(&ResourceCounts::new(1, 1, 0, 0));
        assert!(per_unit.is_infinite());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ResourceCounts::default(), ResourceCounts::new(1, 1, 1, 2));
        let e = StageEfforts::default();
        assert!((e.get(Stage::Design) - 1.5).abs() < 1e-10);
        assert!((e.get(Stage::FrontEndBuild) - 2.0).abs() < 1e-10);
        assert!((e.get(Stage::Finalize) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_unit_display() {
        let u = UnitRef::new(ResourceCategory::FrontEndBuild, 0);
        assert_eq!(u.to_string(), "Front-End-Build #1");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let c: ResourceCounts = serde_json::from_str(r#"{"design": 3}"#).unwrap();
        assert_eq!(c.design, 3);
        assert_eq!(c.front_end_build, 2);
    }
}
