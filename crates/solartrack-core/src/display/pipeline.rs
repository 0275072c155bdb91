//! Display implementation for the pipeline definition.

use std::fmt;

use crate::pipeline::Pipeline;

/// Lists phases and their steps in canonical order, numbering steps across
/// the whole pipeline and noting the rule of each conditional step.
impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Provisioning Pipeline")?;

        let mut number = 1;
        for phase in self.phases() {
            writeln!(f)?;
            writeln!(f, "## {} (`{}`)", phase.label, phase.id)?;
            writeln!(f)?;
            for step in self.phase_steps(phase) {
                write!(f, "{number}. {} (`{}`)", step.label, step.key)?;
                if let Some(rule) = step.rule {
                    write!(f, " _{}_", rule.describe())?;
                }
                writeln!(f)?;
                number += 1;
            }
        }

        Ok(())
    }
}
