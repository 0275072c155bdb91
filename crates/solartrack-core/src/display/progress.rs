//! Markdown rendering of one customer's collapsible stepper.

use std::fmt;

use super::{datetime::LocalDate, status::phase_marker};
use crate::{
    engine::{ProgressSnapshot, StepView},
    models::Customer,
    view::{CollapseState, StepFilter},
};

/// Wrapper rendering a customer's progress as a phase-grouped stepper.
///
/// Collapsed phases show only their header and counter. Expanded phases list
/// the steps accepted by the filter.
///
/// # Examples
///
/// ```rust
/// use solartrack_core::{
///     display::ProgressView,
///     engine::ProgressEngine,
///     models::{Customer, Task, TaskStatus},
///     pipeline::Pipeline,
///     view::{CollapseState, StepFilter},
/// };
///
/// let pipeline = Pipeline::standard().unwrap();
/// let engine = ProgressEngine::new(&pipeline);
/// let mut customer = Customer::new("Asha Patil");
/// customer.tasks.push(Task::new("site_survey", TaskStatus::InProgress));
///
/// let snapshot = engine.snapshot(&customer);
/// let collapse = CollapseState::initial(&snapshot);
/// let output = ProgressView::new(&snapshot, &collapse)
///     .with_filter(StepFilter::Outstanding)
///     .to_string();
///
/// assert!(output.contains("# Asha Patil"));
/// assert!(output.contains("## ▾ Site Assessment (0/3) ➤"));
/// assert!(output.contains("**Site Survey**: ➤ In Progress"));
/// ```
pub struct ProgressView<'a, 'p, 'c> {
    snapshot: &'a ProgressSnapshot<'p, 'c>,
    collapse: &'a CollapseState,
    filter: StepFilter,
}

impl<'a, 'p, 'c> ProgressView<'a, 'p, 'c> {
    pub fn new(snapshot: &'a ProgressSnapshot<'p, 'c>, collapse: &'a CollapseState) -> Self {
        Self {
            snapshot,
            collapse,
            filter: StepFilter::default(),
        }
    }

    pub fn with_filter(mut self, filter: StepFilter) -> Self {
        self.filter = filter;
        self
    }

    fn fmt_header(&self, f: &mut fmt::Formatter<'_>, customer: &Customer) -> fmt::Result {
        writeln!(f, "# {}", customer.name)?;
        writeln!(f)?;

        if let Some(id) = &customer.id {
            writeln!(f, "- ID: {id}")?;
        }
        if let Some(mobile) = &customer.mobile {
            writeln!(f, "- Mobile: {mobile}")?;
        }
        if let Some(district) = &customer.district {
            writeln!(f, "- District: {district}")?;
        }
        if let Some(mode) = &customer.payment_mode {
            writeln!(f, "- Payment mode: {mode}")?;
        }
        writeln!(
            f,
            "- Overall progress: {}%",
            self.snapshot.overall_progress()
        )
    }

    fn fmt_step(f: &mut fmt::Formatter<'_>, view: &StepView<'_, '_>) -> fmt::Result {
        write!(f, "- **{}**: {}", view.step.label, view.status.with_icon())?;

        if let Some(task) = view.task {
            match (&task.assigned_to_name, &task.assigned_to_role) {
                (Some(name), Some(role)) => write!(f, " (assigned to {name}, {role})")?,
                (Some(name), None) => write!(f, " (assigned to {name})")?,
                _ => {}
            }
            if let Some(created_at) = &task.created_at {
                write!(f, " _created {}_", LocalDate(created_at))?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for ProgressView<'_, '_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_header(f, self.snapshot.customer())?;

        let phases = self.snapshot.pipeline().phases();
        for (phase, progress) in phases.iter().zip(self.snapshot.phases_progress()) {
            let collapsed = self.collapse.is_collapsed(&phase.id);

            writeln!(f)?;
            writeln!(
                f,
                "## {} {} ({progress}){}",
                if collapsed { "▸" } else { "▾" },
                phase.label,
                phase_marker(&progress)
            )?;

            if collapsed {
                continue;
            }

            writeln!(f)?;
            let mut shown = 0;
            for view in self.snapshot.phase_steps(phase) {
                if self.filter.matches(view.status) {
                    Self::fmt_step(f, &view)?;
                    shown += 1;
                }
            }
            if shown == 0 {
                writeln!(f, "_No {} steps._", self.filter)?;
            }
        }

        Ok(())
    }
}
