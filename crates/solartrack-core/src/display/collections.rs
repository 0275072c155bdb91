//! Collection wrapper types for displaying groups of customers.

use std::fmt;

use crate::models::CustomerSummary;

/// Newtype wrapper for displaying a list of customer summaries.
///
/// # Examples
///
/// ```rust
/// use solartrack_core::{display::CustomerSummaries, models::CustomerSummary};
///
/// let summary = CustomerSummary {
///     id: Some("C-1".to_string()),
///     name: "Asha Patil".to_string(),
///     district: Some("Pune".to_string()),
///     overall_progress: 40,
///     phases_done: 2,
///     phase_count: 6,
///     steps_in_progress: 1,
/// };
///
/// let output = CustomerSummaries(vec![summary]).to_string();
/// assert!(output.contains("## Asha Patil (ID: C-1) 40%"));
/// assert!(output.contains("- **Phases done**: 2/6"));
/// ```
pub struct CustomerSummaries(pub Vec<CustomerSummary>);

impl CustomerSummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CustomerSummary> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a CustomerSummaries {
    type Item = &'a CustomerSummary;
    type IntoIter = std::slice::Iter<'a, CustomerSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for CustomerSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => writeln!(f, "## {} (ID: {id}) {}%", self.name, self.overall_progress)?,
            None => writeln!(f, "## {} {}%", self.name, self.overall_progress)?,
        }
        writeln!(f)?;

        if let Some(district) = &self.district {
            writeln!(f, "- **District**: {district}")?;
        }
        writeln!(
            f,
            "- **Phases done**: {}/{}",
            self.phases_done, self.phase_count
        )?;
        if self.steps_in_progress > 0 {
            writeln!(f, "- **In progress**: {}", self.steps_in_progress)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for CustomerSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No customers found.")
        } else {
            for summary in &self.0 {
                write!(f, "{summary}")?;
            }
            Ok(())
        }
    }
}
