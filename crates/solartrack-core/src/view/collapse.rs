//! Per-view collapse memory for phase sections.

use std::collections::BTreeSet;

use crate::{engine::ProgressSnapshot, pipeline::Pipeline};

/// Which phase sections are collapsed in one open customer view.
///
/// Seeded once from [`ProgressSnapshot::initial_collapse_set`] when the view
/// opens. After that only the user's toggles change it; re-evaluating the
/// customer's progress never does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollapseState {
    collapsed: BTreeSet<String>,
}

impl CollapseState {
    /// Seeds the state for a freshly opened view.
    pub fn initial(snapshot: &ProgressSnapshot<'_, '_>) -> Self {
        Self {
            collapsed: snapshot.initial_collapse_set(),
        }
    }

    /// Starts from an explicit set of collapsed phase ids.
    pub fn from_phases<I, S>(phase_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            collapsed: phase_ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_collapsed(&self, phase_id: &str) -> bool {
        self.collapsed.contains(phase_id)
    }

    /// Flips one phase and returns whether it is now collapsed.
    pub fn toggle(&mut self, phase_id: &str) -> bool {
        if self.collapsed.remove(phase_id) {
            false
        } else {
            self.collapsed.insert(phase_id.to_string());
            true
        }
    }

    pub fn expand_all(&mut self) {
        self.collapsed.clear();
    }

    pub fn collapse_all(&mut self, pipeline: &Pipeline) {
        self.collapsed = pipeline
            .phases()
            .iter()
            .map(|phase| phase.id.clone())
            .collect();
    }

    /// Collapsed phase ids in sorted order.
    pub fn collapsed(&self) -> impl Iterator<Item = &str> {
        self.collapsed.iter().map(String::as_str)
    }
}
