//! Workflow progress engine.
//!
//! The engine turns a customer aggregate (attributes plus a sparse, unordered
//! task list) into a per-step [`EffectiveStatus`] for every step of a
//! [`Pipeline`], and rolls those up into phase and overall completion.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────────┐
//! │   Customer   │    │  TaskIndex   │    │ ProgressSnapshot │
//! │  + tasks[]   │───▶│ work_type →  │───▶│ status per step, │
//! │              │    │    task      │    │ phase / overall  │
//! └──────────────┘    └──────────────┘    └──────────────────┘
//! ```
//!
//! Everything here is a pure function of its inputs. Nothing is cached
//! between calls, so re-evaluating after the task list changes always
//! reflects the new data.
//!
//! # Status derivation
//!
//! 1. A task for the step exists: its status is reported as is, even when the
//!    step's conditional rule no longer holds for the customer.
//! 2. No task, unconditional step: `not_started`.
//! 3. No task, conditional step: `not_started` when the rule holds,
//!    `not_applicable` otherwise.
//!
//! # Examples
//!
//! ```rust
//! use solartrack_core::{
//!     engine::ProgressEngine,
//!     models::{Customer, EffectiveStatus, Task, TaskStatus},
//!     pipeline::Pipeline,
//! };
//!
//! let pipeline = Pipeline::standard().unwrap();
//! let engine = ProgressEngine::new(&pipeline);
//!
//! let mut customer = Customer::new("Asha Patil");
//! customer.payment_mode = Some("Cash".to_string());
//! customer.tasks.push(Task::new("site_survey", TaskStatus::Completed));
//!
//! assert_eq!(
//!     engine.effective_status(&customer, "site_survey").unwrap(),
//!     EffectiveStatus::Completed
//! );
//! assert_eq!(
//!     engine.effective_status(&customer, "finance_registration").unwrap(),
//!     EffectiveStatus::NotApplicable
//! );
//! assert!(engine.overall_progress(&customer) > 0);
//! ```

use std::collections::BTreeSet;

use log::debug;

pub mod index;

#[cfg(test)]
mod tests;

pub use index::TaskIndex;

use crate::{
    error::Result,
    models::{completion_percent, Customer, EffectiveStatus, PhaseProgress, Task},
    pipeline::{PhaseDef, Pipeline, StepDef},
};

/// Derives the effective status of one step from its task, if any.
pub fn derive_status(step: &StepDef, task: Option<&Task>, customer: &Customer) -> EffectiveStatus {
    match (task, step.rule) {
        (Some(task), _) => task.status.into(),
        (None, None) => EffectiveStatus::NotStarted,
        (None, Some(rule)) if rule.is_required(customer) => EffectiveStatus::NotStarted,
        (None, Some(_)) => EffectiveStatus::NotApplicable,
    }
}

/// Read-only query surface over a pipeline.
#[derive(Debug, Clone, Copy)]
pub struct ProgressEngine<'p> {
    pipeline: &'p Pipeline,
}

impl<'p> ProgressEngine<'p> {
    pub fn new(pipeline: &'p Pipeline) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &'p Pipeline {
        self.pipeline
    }

    /// Evaluates every step for a customer in one pass.
    pub fn snapshot<'c>(&self, customer: &'c Customer) -> ProgressSnapshot<'p, 'c> {
        ProgressSnapshot::evaluate(self.pipeline, customer)
    }

    /// Effective status of one step.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::UnknownStep` if the pipeline does not define
    /// `step_key`.
    pub fn effective_status(&self, customer: &Customer, step_key: &str) -> Result<EffectiveStatus> {
        let step = self.pipeline.step(step_key)?;
        let tasks = TaskIndex::build(&customer.tasks);
        Ok(derive_status(step, tasks.get(step_key), customer))
    }

    /// Rounded percentage of applicable steps that are completed.
    pub fn overall_progress(&self, customer: &Customer) -> u8 {
        self.snapshot(customer).overall_progress()
    }

    /// Progress of one phase.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::UnknownPhase` if the pipeline does not define
    /// `phase_id`.
    pub fn phase_progress(&self, customer: &Customer, phase_id: &str) -> Result<PhaseProgress> {
        self.snapshot(customer).phase_progress(phase_id)
    }

    /// Phases to show collapsed when the customer's view opens.
    pub fn initial_collapse_set(&self, customer: &Customer) -> BTreeSet<String> {
        self.snapshot(customer).initial_collapse_set()
    }
}

/// One step together with its derived state.
#[derive(Debug, Clone, Copy)]
pub struct StepView<'p, 'c> {
    pub step: &'p StepDef,
    pub status: EffectiveStatus,
    pub task: Option<&'c Task>,
}

/// Effective statuses of every step for one customer.
#[derive(Debug, Clone)]
pub struct ProgressSnapshot<'p, 'c> {
    pipeline: &'p Pipeline,
    customer: &'c Customer,
    tasks: TaskIndex<'c>,
    statuses: Vec<EffectiveStatus>,
}

impl<'p, 'c> ProgressSnapshot<'p, 'c> {
    fn evaluate(pipeline: &'p Pipeline, customer: &'c Customer) -> Self {
        let tasks = TaskIndex::build(&customer.tasks);

        for work_type in tasks.work_types() {
            if pipeline.step(work_type).is_err() {
                debug!(
                    "Ignoring task with work type '{work_type}' for customer '{}'",
                    customer.name
                );
            }
        }

        let statuses = pipeline
            .steps()
            .iter()
            .map(|step| derive_status(step, tasks.get(&step.key), customer))
            .collect();

        Self {
            pipeline,
            customer,
            tasks,
            statuses,
        }
    }

    pub fn pipeline(&self) -> &'p Pipeline {
        self.pipeline
    }

    pub fn customer(&self) -> &'c Customer {
        self.customer
    }

    /// Effective status of one step.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::UnknownStep` for an undefined step key.
    pub fn status(&self, step_key: &str) -> Result<EffectiveStatus> {
        let position = self.pipeline.step_position(step_key)?;
        Ok(self.statuses[position])
    }

    /// The task representing a step, if one exists.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::UnknownStep` for an undefined step key.
    pub fn task(&self, step_key: &str) -> Result<Option<&'c Task>> {
        self.pipeline.step(step_key)?;
        Ok(self.tasks.get(step_key))
    }

    /// All steps in canonical order.
    pub fn steps(&self) -> impl Iterator<Item = StepView<'p, 'c>> + '_ {
        self.pipeline
            .steps()
            .iter()
            .zip(&self.statuses)
            .map(move |(step, &status)| StepView {
                step,
                status,
                task: self.tasks.get(&step.key),
            })
    }

    /// Steps of one phase in pipeline order.
    pub fn phase_steps(&self, phase: &PhaseDef) -> impl Iterator<Item = StepView<'p, 'c>> + '_ {
        self.pipeline
            .phase_steps(phase)
            .iter()
            .zip(&self.statuses[phase.span.clone()])
            .map(move |(step, &status)| StepView {
                step,
                status,
                task: self.tasks.get(&step.key),
            })
    }

    /// Rounded percentage of applicable steps that are completed, 0 when no
    /// step is applicable.
    pub fn overall_progress(&self) -> u8 {
        let (completed, applicable) = count(&self.statuses);
        completion_percent(completed, applicable)
    }

    /// Progress of one phase.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::UnknownPhase` for an undefined phase id.
    pub fn phase_progress(&self, phase_id: &str) -> Result<PhaseProgress> {
        let phase = self.pipeline.phase(phase_id)?;
        Ok(self.progress_of(phase))
    }

    /// Progress of every phase in display order.
    pub fn phases_progress(&self) -> Vec<PhaseProgress> {
        self.pipeline
            .phases()
            .iter()
            .map(|phase| self.progress_of(phase))
            .collect()
    }

    /// Phases whose applicable steps are all completed.
    ///
    /// A phase with no applicable step is never included.
    pub fn initial_collapse_set(&self) -> BTreeSet<String> {
        self.pipeline
            .phases()
            .iter()
            .filter(|phase| self.progress_of(phase).all_done)
            .map(|phase| phase.id.clone())
            .collect()
    }

    fn progress_of(&self, phase: &PhaseDef) -> PhaseProgress {
        let statuses = &self.statuses[phase.span.clone()];
        let (completed, applicable) = count(statuses);
        let has_in_progress = statuses.contains(&EffectiveStatus::InProgress);
        PhaseProgress::from_counts(phase.id.as_str(), completed, applicable, has_in_progress)
    }
}

fn count(statuses: &[EffectiveStatus]) -> (u32, u32) {
    statuses
        .iter()
        .filter(|status| status.is_applicable())
        .fold((0, 0), |(completed, applicable), status| {
            (completed + u32::from(status.is_completed()), applicable + 1)
        })
}
