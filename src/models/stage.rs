//! Pipeline stages and the resource categories that staff them.
//!
//! Every page flows through the same fixed chain:
//!
//! ```text
//! Design → Content → PlatformBuild → FrontEndBuild
//! ```
//!
//! and every project ends with one aggregate `Finalize` stage that waits on
//! all of its pages' front-end work.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter;

/// A stage of the production pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stage {
    /// Visual design of a page.
    Design,
    /// Copywriting for a page.
    Content,
    /// Platform (CMS) build of a page.
    PlatformBuild,
    /// Front-end (UI) build of a page.
    FrontEndBuild,
    /// Per-project go-live work, after every page is built.
    Finalize,
}

impl Stage {
    /// The per-page stages in precedence order.
    pub const PAGE_CHAIN: [Stage; 4] = [
        Stage::Design,
        Stage::Content,
        Stage::PlatformBuild,
        Stage::FrontEndBuild,
    ];

    /// Short code used when deriving task identifiers.
    pub fn code(self) -> &'static str {
        match self {
            Stage::Design => "design",
            Stage::Content => "content",
            Stage::PlatformBuild => "platform",
            Stage::FrontEndBuild => "frontend",
            Stage::Finalize => "finalize",
        }
    }

    /// Human-readable stage name.
    pub fn label(self) -> &'static str {
        match self {
            Stage::Design => "Design",
            Stage::Content => "Content",
            Stage::PlatformBuild => "Platform-Build",
            Stage::FrontEndBuild => "Front-End-Build",
            Stage::Finalize => "Finalize",
        }
    }

    /// The pool of resource units that can perform this stage.
    ///
    /// Finalize has no category of its own; developers from both build
    /// categories share it.
    pub fn pool(self) -> ResourcePool {
        match self {
            Stage::Design => ResourcePool::Single(ResourceCategory::Design),
            Stage::Content => ResourcePool::Single(ResourceCategory::Content),
            Stage::PlatformBuild => ResourcePool::Single(ResourceCategory::PlatformBuild),
            Stage::FrontEndBuild => ResourcePool::Single(ResourceCategory::FrontEndBuild),
            Stage::Finalize => ResourcePool::Union(
                ResourceCategory::PlatformBuild,
                ResourceCategory::FrontEndBuild,
            ),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A category of labor. Each category owns a fixed number of units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResourceCategory {
    Design,
    Content,
    PlatformBuild,
    FrontEndBuild,
}

impl ResourceCategory {
    /// All categories, in ledger order.
    pub const ALL: [ResourceCategory; 4] = [
        ResourceCategory::Design,
        ResourceCategory::Content,
        ResourceCategory::PlatformBuild,
        ResourceCategory::FrontEndBuild,
    ];

    /// Dense index into per-category arrays.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            ResourceCategory::Design => 0,
            ResourceCategory::Content => 1,
            ResourceCategory::PlatformBuild => 2,
            ResourceCategory::FrontEndBuild => 3,
        }
    }

    /// Human-readable category name.
    pub fn label(self) -> &'static str {
        match self {
            ResourceCategory::Design => "Design",
            ResourceCategory::Content => "Content",
            ResourceCategory::PlatformBuild => "Platform-Build",
            ResourceCategory::FrontEndBuild => "Front-End-Build",
        }
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The set of units a stage may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourcePool {
    /// Units of one category.
    Single(ResourceCategory),
    /// Units of the first category followed by units of the second.
    Union(ResourceCategory, ResourceCategory),
}

impl ResourcePool {
    /// Categories in scan order.
    pub fn categories(self) -> impl Iterator<Item = ResourceCategory> {
        let (first, second) = match self {
            ResourcePool::Single(c) => (c, None),
            ResourcePool::Union(a, b) => (a, Some(b)),
        };
        iter::once(first).chain(second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_chain_order() {
        assert_eq!(Stage::PAGE_CHAIN[0], Stage::Design);
        assert_eq!(Stage::PAGE_CHAIN[3], Stage::FrontEndBuild);
        assert!(!Stage::PAGE_CHAIN.contains(&Stage::Finalize));
    }

    #[test]
    fn test_finalize_pool_is_union_of_build_categories() {
        assert_eq!(
            Stage::Finalize.pool(),
            ResourcePool::Union(
                ResourceCategory::PlatformBuild,
                ResourceCategory::FrontEndBuild
            )
        );
        assert_eq!(
            Stage::Finalize.pool().categories().collect::<Vec<_>>(),
            vec![
                ResourceCategory::PlatformBuild,
                ResourceCategory::FrontEndBuild
            ]
        );
    }

    #[test]
    fn test_single_pool_has_one_category() {
        let pool = ResourcePool::Single(ResourceCategory::Design);
        assert_eq!(pool.categories().collect::<Vec<_>>(), vec![ResourceCategory::Design]);
    }

    #[test]
    fn test_page_stages_use_own_category() {
        assert_eq!(
            Stage::Content.pool(),
            ResourcePool::Single(ResourceCategory::Content)
        );
        assert_eq!(
            Stage::PlatformBuild.pool(),
            ResourcePool::Single(ResourceCategory::PlatformBuild)
        );
    }

    #[test]
    fn test_category_indices_are_dense() {
        for (i, c) in ResourceCategory::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Stage::FrontEndBuild.to_string(), "Front-End-Build");
        assert_eq!(ResourceCategory::PlatformBuild.to_string(), "Platform-Build");
        assert_eq!(Stage::Finalize.code(), "finalize");
    }
}
