//! Work-type lookup over a customer's task list.

use std::collections::{hash_map::Entry, HashMap};

use log::warn;

use crate::models::Task;

/// Maps each work type to the single task that represents it.
///
/// Built once per evaluation so per-step lookups are O(1). When several tasks
/// share a work type the most recently created one wins; a task without
/// `created_at` is older than any dated task, and on equal timestamps the one
/// later in the list wins.
#[derive(Debug, Clone, Default)]
pub struct TaskIndex<'c> {
    by_work_type: HashMap<&'c str, &'c Task>,
}

impl<'c> TaskIndex<'c> {
    pub fn build(tasks: &'c [Task]) -> Self {
        let mut by_work_type: HashMap<&'c str, &'c Task> = HashMap::with_capacity(tasks.len());

        for task in tasks {
            match by_work_type.entry(task.work_type.as_str()) {
                Entry::Vacant(entry) => {
                    entry.insert(task);
                }
                Entry::Occupied(mut entry) => {
                    warn!(
                        "Multiple tasks for work type '{}', keeping the most recent",
                        task.work_type
                    );
                    if supersedes(task, entry.get()) {
                        entry.insert(task);
                    }
                }
            }
        }

        Self { by_work_type }
    }

    pub fn get(&self, work_type: &str) -> Option<&'c Task> {
        self.by_work_type.get(work_type).copied()
    }

    /// Work types present in the index, in no particular order.
    pub fn work_types(&self) -> impl Iterator<Item = &'c str> + '_ {
        self.by_work_type.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.by_work_type.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_work_type.is_empty()
    }
}

fn supersedes(candidate: &Task, current: &Task) -> bool {
    candidate.created_at >= current.created_at
}
