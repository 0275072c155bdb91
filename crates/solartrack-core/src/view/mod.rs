//! View-session helpers for the collapsible, phase-grouped stepper.
//!
//! - [`CollapseState`]: mutable per-view memory of collapsed phases
//! - [`StepFilter`]: which steps a stepper shows

pub mod collapse;
pub mod filter;

pub use collapse::CollapseState;
pub use filter::StepFilter;
