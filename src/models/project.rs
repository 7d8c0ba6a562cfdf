//! Project (website) model.
//!
//! A project is one deliverable in the portfolio, decomposed into pages.
//! Projects are immutable once a simulation starts.

use serde::{Deserialize, Serialize};

/// A project to be forecast.
///
/// The `id` is a stable integer; activation order and task priority both
/// follow ascending `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable project identifier.
    pub id: u32,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Number of pages (callers guarantee at least one).
    pub pages: u32,
}

impl Project {
    /// Creates a project with an empty display name.
    pub fn new(id: u32, pages: u32) -> Self {
        Self {
            id,
            name: String::new(),
            pages,
        }
    }

    /// Creates a project named "Website N" (1-based, from the id).
    pub fn website(id: u32, pages: u32) -> Self {
        Self::new(id, pages).with_name(format!("Website {}", id + 1))
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Name used in logs: the display name, or `Project <id>` when blank.
    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            format!("Project {}", self.id)
        } else {
            self.name.clone()
        }
    }

    /// Number of tasks this project expands to (four per page plus finalize).
    pub fn task_count(&self) -> usize {
        self.pages as usize * 4 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_builder() {
        let p = Project::new(3, 14).with_name("Marketing site");
        assert_eq!(p.id, 3);
        assert_eq!(p.name, "Marketing site");
        assert_eq!(p.pages, 14);
    }

    #[test]
    fn test_website_naming_is_one_based() {
        let p = Project::website(0, 10);
        assert_eq!(p.name, "Website 1");
        assert_eq!(p.display_name(), "Website 1");
    }

    #[test]
    fn test_display_name_fallback() {
        assert_eq!(Project::new(7, 1).display_name(), "Project 7");
    }

    #[test]
    fn test_task_count() {
        assert_eq!(Project::new(0, 1).task_count(), 5);
        assert_eq!(Project::new(0, 10).task_count(), 41);
        assert_eq!(Project::new(0, 0).task_count(), 1);
    }
}
