//! Static provisioning pipeline definition.
//!
//! A [`Pipeline`] is the ordered list of work-type steps a customer goes
//! through, grouped into phases, with [`ConditionalRule`]s attached to the
//! steps that only apply to some customers. It is immutable once built and
//! only obtainable through [`PipelineBuilder::build`], which rejects
//! inconsistent definitions.
//!
//! # Layout invariant
//!
//! Phases are contiguous, non-overlapping slices of the step sequence, in
//! phase order:
//!
//! ```text
//! steps:   s0 s1 s2 | s3 s4 s5 s6 s7 s8 | s9 ...
//! phases:  [ P0    ] [ P1               ] [ P2 ...
//! ```
//!
//! Re-concatenating the phases' step lists always reproduces the canonical
//! step order.
//!
//! # Examples
//!
//! ```rust
//! use solartrack_core::pipeline::Pipeline;
//!
//! let pipeline = Pipeline::standard().unwrap();
//! assert_eq!(pipeline.steps().len(), 25);
//! assert_eq!(pipeline.phases().len(), 6);
//! assert!(pipeline.is_conditional("cot_request").unwrap());
//! assert!(!pipeline.is_conditional("complete_registration").unwrap());
//! ```

use std::{collections::HashMap, ops::Range};

use serde::Serialize;

pub mod builder;
pub mod rules;
pub mod standard;


pub use builder::PipelineBuilder;
pub use rules::ConditionalRule;

use crate::error::{ProgressError, Result};

/// One named unit of work in the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepDef {
    /// Unique key, equal to the `work_type` of tasks created for this step
    pub key: String,
    /// Display name
    pub label: String,
    /// Id of the owning phase
    pub phase_id: String,
    /// Applicability rule, `None` for unconditional steps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<ConditionalRule>,
}

impl StepDef {
    pub fn is_conditional(&self) -> bool {
        self.rule.is_some()
    }
}

/// A group of consecutive steps rendered as one collapsible section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseDef {
    pub id: String,
    pub label: String,
    /// Step keys in pipeline order
    pub step_keys: Vec<String>,
    #[serde(skip)]
    pub(crate) span: Range<usize>,
}

/// Validated, immutable pipeline definition.
#[derive(Debug, Clone)]
pub struct Pipeline {
    steps: Vec<StepDef>,
    phases: Vec<PhaseDef>,
    step_index: HashMap<String, usize>,
    phase_index: HashMap<String, usize>,
}

impl Pipeline {
    /// Assembles a pipeline from already validated parts.
    pub(crate) fn from_parts(steps: Vec<StepDef>, phases: Vec<PhaseDef>) -> Self {
        let step_index = steps
            .iter()
            .enumerate()
            .map(|(position, step)| (step.key.clone(), position))
            .collect();
        let phase_index = phases
            .iter()
            .enumerate()
            .map(|(position, phase)| (phase.id.clone(), position))
            .collect();

        Self {
            steps,
            phases,
            step_index,
            phase_index,
        }
    }

    /// All steps in canonical order.
    pub fn steps(&self) -> &[StepDef] {
        &self.steps
    }

    /// All phases in display order.
    pub fn phases(&self) -> &[PhaseDef] {
        &self.phases
    }

    /// Looks up a step by key.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::UnknownStep` if the key is not defined.
    pub fn step(&self, key: &str) -> Result<&StepDef> {
        self.step_position(key).map(|position| &self.steps[position])
    }

    /// Position of a step in canonical order.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::UnknownStep` if the key is not defined.
    pub fn step_position(&self, key: &str) -> Result<usize> {
        self.step_index
            .get(key)
            .copied()
            .ok_or_else(|| ProgressError::unknown_step(key))
    }

    /// Looks up a phase by id.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::UnknownPhase` if the id is not defined.
    pub fn phase(&self, id: &str) -> Result<&PhaseDef> {
        self.phase_index
            .get(id)
            .map(|&position| &self.phases[position])
            .ok_or_else(|| ProgressError::unknown_phase(id))
    }

    /// Steps owned by a phase, in pipeline order.
    pub fn phase_steps<'a>(&'a self, phase: &PhaseDef) -> &'a [StepDef] {
        &self.steps[phase.span.clone()]
    }

    /// Whether the step's applicability depends on customer attributes.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::UnknownStep` if the key is not defined.
    pub fn is_conditional(&self, key: &str) -> Result<bool> {
        self.step(key).map(StepDef::is_conditional)
    }
}
