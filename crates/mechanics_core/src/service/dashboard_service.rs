//! PMO dashboard summary.
//!
//! Aggregates are computed from a fresh scan on every call; nothing is cached.

use crate::model::program::ProgramStatus;
use crate::model::project::ProjectStatus;
use crate::repo::memory_store::MemoryStore;
use serde::Serialize;

/// Headline counters shown on the PMO dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_programs: usize,
    pub active_programs: usize,
    pub total_projects: usize,
    pub active_projects: usize,
    pub total_tasks: usize,
    /// Tasks not in `completed` status.
    pub open_tasks: usize,
    pub completed_tasks: usize,
    /// Mean project progress, rounded down; 0 when there are no projects.
    pub average_progress: u8,
    pub published_posts: usize,
}

pub struct DashboardService<'a> {
    store: &'a MemoryStore,
}

impl<'a> DashboardService<'a> {
    pub fn new(store: &'a MemoryStore) -> Self {
        Self { store }
    }

    pub fn summary(&self) -> DashboardSummary {
        let programs = self.store.programs().list();
        let projects = self.store.projects().list();
        let tasks = self.store.tasks().list();

        let open_tasks = tasks.iter().filter(|task| task.status.is_open()).count();
        let progress_total: usize = projects.iter().map(|p| usize::from(p.progress)).sum();
        let average_progress = if projects.is_empty() {
            0
        } else {
            u8::try_from(progress_total / projects.len()).unwrap_or(100)
        };

        DashboardSummary {
            total_programs: programs.len(),
            active_programs: programs
                .iter()
                .filter(|program| program.status == ProgramStatus::Active)
                .count(),
            total_projects: projects.len(),
            active_projects: projects
                .iter()
                .filter(|project| project.status == ProjectStatus::Active)
                .count(),
            total_tasks: tasks.len(),
            open_tasks,
            completed_tasks: tasks.len() - open_tasks,
            average_progress,
            published_posts: self.store.published_blog_posts().len(),
        }
    }
}
