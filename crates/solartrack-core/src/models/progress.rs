//! Aggregated progress types.

use serde::{Deserialize, Serialize};

/// Progress of one phase for one customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseProgress {
    /// Phase id
    pub phase_id: String,
    /// Applicable steps whose status is completed
    pub completed_count: u32,
    /// Steps whose status is not `not_applicable`
    pub applicable_count: u32,
    /// Applicable steps exist and all of them are completed
    pub all_done: bool,
    /// Any step of the phase is in progress
    pub has_in_progress: bool,
    /// Rounded completion percentage, 0 when nothing is applicable
    pub percent: u8,
}

impl PhaseProgress {
    /// Builds the progress record from raw counts.
    pub fn from_counts(
        phase_id: impl Into<String>,
        completed_count: u32,
        applicable_count: u32,
        has_in_progress: bool,
    ) -> Self {
        Self {
            phase_id: phase_id.into(),
            completed_count,
            applicable_count,
            all_done: applicable_count > 0 && completed_count == applicable_count,
            has_in_progress,
            percent: completion_percent(completed_count, applicable_count),
        }
    }
}

/// Rounds `100 * completed / applicable` half up, returning 0 for an empty
/// denominator.
///
/// # Examples
///
/// ```rust
/// use solartrack_core::models::completion_percent;
///
/// assert_eq!(completion_percent(1, 3), 33);
/// assert_eq!(completion_percent(1, 8), 13);
/// assert_eq!(completion_percent(0, 0), 0);
/// ```
pub fn completion_percent(completed: u32, applicable: u32) -> u8 {
    if applicable == 0 {
        return 0;
    }
    let completed = u64::from(completed.min(applicable));
    let applicable = u64::from(applicable);
    // floor(100c/a + 1/2) without floating point
    let percent = (200 * completed + applicable) / (2 * applicable);
    u8::try_from(percent).unwrap_or(100)
}
