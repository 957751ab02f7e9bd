//! Derived dashboard statistics.
//!
//! Pure data transformation over already-fetched collections; no
//! persistence, cache, or event involvement.

use std::collections::HashMap;

use crate::model::project::{Project, ProjectStatus};
use crate::model::task::{Task, TaskStatus};

/// Counts projects grouped by status.
pub fn project_status_counts(projects: &[Project]) -> HashMap<ProjectStatus, usize> {
    let mut counts = HashMap::new();
    for project in projects {
        *counts.entry(project.status).or_insert(0) += 1;
    }
    counts
}

/// Counts tasks grouped by status.
pub fn task_status_counts(tasks: &[Task]) -> HashMap<TaskStatus, usize> {
    let mut counts = HashMap::new();
    for task in tasks {
        *counts.entry(task.status).or_insert(0) += 1;
    }
    counts
}

/// Fraction of projects in `Completed`, in `[0, 1]`. Zero when empty.
pub fn project_completion_rate(projects: &[Project]) -> f64 {
    completion_rate(
        projects.len(),
        projects
            .iter()
            .filter(|project| project.status == ProjectStatus::Completed)
            .count(),
    )
}

/// Fraction of tasks in `Completed`, in `[0, 1]`. Zero when empty.
pub fn task_completion_rate(tasks: &[Task]) -> f64 {
    completion_rate(
        tasks.len(),
        tasks
            .iter()
            .filter(|task| task.status == TaskStatus::Completed)
            .count(),
    )
}

fn completion_rate(total: usize, completed: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    completed as f64 / total as f64
}
