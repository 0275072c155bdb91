//! Customer summary types.

use serde::{Deserialize, Serialize};

use super::EffectiveStatus;
use crate::engine::ProgressSnapshot;

/// One-line progress summary of a customer, for list views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSummary {
    pub id: Option<String>,
    pub name: String,
    pub district: Option<String>,
    /// Overall completion percentage
    pub overall_progress: u8,
    /// Phases whose applicable steps are all completed
    pub phases_done: u32,
    pub phase_count: u32,
    /// Steps currently in progress
    pub steps_in_progress: u32,
}

impl From<&ProgressSnapshot<'_, '_>> for CustomerSummary {
    fn from(snapshot: &ProgressSnapshot<'_, '_>) -> Self {
        let customer = snapshot.customer();
        let phases = snapshot.phases_progress();
        let phases_done = phases.iter().filter(|phase| phase.all_done).count() as u32;
        let steps_in_progress = snapshot
            .steps()
            .filter(|view| view.status == EffectiveStatus::InProgress)
            .count() as u32;

        Self {
            id: customer.id.clone(),
            name: customer.name.clone(),
            district: customer.district.clone(),
            overall_progress: snapshot.overall_progress(),
            phases_done,
            phase_count: phases.len() as u32,
            steps_in_progress,
        }
    }
}
