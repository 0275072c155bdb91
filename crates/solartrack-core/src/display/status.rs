//! Display implementations for statuses and progress counters.

use std::fmt;

use crate::models::{EffectiveStatus, PhaseProgress, TaskStatus};

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for EffectiveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formats as `completed/applicable`, e.g. `3/5`.
impl fmt::Display for PhaseProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.completed_count, self.applicable_count)
    }
}

/// Icon appended to a phase header: done, in progress, or nothing.
pub(crate) fn phase_marker(progress: &PhaseProgress) -> &'static str {
    if progress.all_done {
        " ✓"
    } else if progress.has_in_progress {
        " ➤"
    } else {
        ""
    }
}
