//! Builder for creating and validating Pipeline instances.

use std::collections::{HashMap, HashSet};

use log::debug;

use super::{ConditionalRule, PhaseDef, Pipeline, StepDef};
use crate::error::{ProgressError, Result};

/// Builder for creating and validating [`Pipeline`] instances.
///
/// Phases are displayed in declaration order and steps keep their append
/// order. Nothing is checked until [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct PipelineBuilder {
    phases: Vec<(String, String)>,
    steps: Vec<StepDef>,
}

impl PipelineBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a phase. Phases are displayed in declaration order.
    pub fn phase(mut self, id: impl Into<String>, label: impl Into<String>) -> Self {
        self.phases.push((id.into(), label.into()));
        self
    }

    /// Appends an unconditional step.
    pub fn step(
        self,
        key: impl Into<String>,
        label: impl Into<String>,
        phase_id: impl Into<String>,
    ) -> Self {
        self.push_step(key.into(), label.into(), phase_id.into(), None)
    }

    /// Appends a step that only applies when `rule` holds for the customer.
    pub fn conditional_step(
        self,
        key: impl Into<String>,
        label: impl Into<String>,
        phase_id: impl Into<String>,
        rule: ConditionalRule,
    ) -> Self {
        self.push_step(key.into(), label.into(), phase_id.into(), Some(rule))
    }

    fn push_step(
        mut self,
        key: String,
        label: String,
        phase_id: String,
        rule: Option<ConditionalRule>,
    ) -> Self {
        self.steps.push(StepDef {
            key,
            label,
            phase_id,
            rule,
        });
        self
    }

    /// Validates the definition and builds the pipeline.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Configuration` if
    /// - no phase is declared, or a phase id is declared twice
    /// - a step key is declared twice
    /// - a step references an undeclared phase
    /// - a step appears after a step of a later phase
    /// - a phase owns no step
    pub fn build(self) -> Result<Pipeline> {
        if self.phases.is_empty() {
            return Err(ProgressError::configuration("pipeline declares no phases"));
        }

        let mut phase_order = HashMap::with_capacity(self.phases.len());
        for (position, (id, _)) in self.phases.iter().enumerate() {
            if phase_order.insert(id.as_str(), position).is_some() {
                return Err(ProgressError::configuration(format!(
                    "phase '{id}' is declared more than once"
                )));
            }
        }

        let mut seen_keys = HashSet::with_capacity(self.steps.len());
        let mut spans = vec![None::<(usize, usize)>; self.phases.len()];
        let mut current_phase = 0;

        for (position, step) in self.steps.iter().enumerate() {
            if !seen_keys.insert(step.key.as_str()) {
                return Err(ProgressError::configuration(format!(
                    "step '{}' is declared more than once",
                    step.key
                )));
            }

            let Some(&phase) = phase_order.get(step.phase_id.as_str()) else {
                return Err(ProgressError::configuration(format!(
                    "step '{}' references undefined phase '{}'",
                    step.key, step.phase_id
                )));
            };

            if phase < current_phase {
                return Err(ProgressError::configuration(format!(
                    "step '{}' of phase '{}' appears after phase '{}' has started",
                    step.key, step.phase_id, self.phases[current_phase].0
                )));
            }
            current_phase = phase;

            spans[phase] = Some(match spans[phase] {
                None => (position, position + 1),
                Some((start, _)) => (start, position + 1),
            });
        }

        let mut phases = Vec::with_capacity(self.phases.len());
        for ((id, label), span) in self.phases.into_iter().zip(spans) {
            let Some((start, end)) = span else {
                return Err(ProgressError::configuration(format!(
                    "phase '{id}' owns no steps"
                )));
            };
            let step_keys = self.steps[start..end]
                .iter()
                .map(|step| step.key.clone())
                .collect();
            phases.push(PhaseDef {
                id,
                label,
                step_keys,
                span: start..end,
            });
        }

        debug!(
            "Built pipeline with {} steps in {} phases",
            self.steps.len(),
            phases.len()
        );

        Ok(Pipeline::from_parts(self.steps, phases))
    }
}
