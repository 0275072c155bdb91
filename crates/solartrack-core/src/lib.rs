//! Core library for the Solartrack workflow progress viewer.
//!
//! This crate derives, for one customer of a solar installation business,
//! the state of every step of the fixed provisioning pipeline, rolls it up
//! into phase and overall completion, and formats the result as a
//! collapsible, phase-grouped stepper. It performs no I/O: customers and
//! their tasks are supplied by the caller.
//!
//! # Layers
//!
//! - **Pipeline** ([`pipeline`]): the validated, immutable step and phase
//!   table with conditional applicability rules
//! - **Engine** ([`engine`]): pure status derivation and aggregation
//! - **View** ([`view`], [`display`]): collapse memory, step filters and
//!   markdown output
//!
//! # Quick Start
//!
//! ```rust
//! use solartrack_core::{
//!     CollapseState, CustomerDocument, Pipeline, ProgressEngine, ProgressView,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Built once at startup and passed around explicitly
//! let pipeline = Pipeline::standard()?;
//! let engine = ProgressEngine::new(&pipeline);
//!
//! let customers = CustomerDocument::from_json_str(
//!     r#"{
//!         "name": "Asha Patil",
//!         "payment_mode": "Finance",
//!         "tasks": [
//!             { "work_type": "complete_registration", "status": "completed" },
//!             { "work_type": "finance_registration", "status": "inprogress" }
//!         ]
//!     }"#,
//! )?
//! .into_customers();
//!
//! let snapshot = engine.snapshot(&customers[0]);
//! println!("Overall: {}%", snapshot.overall_progress());
//!
//! let collapse = CollapseState::initial(&snapshot);
//! println!("{}", ProgressView::new(&snapshot, &collapse));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod view;

// Re-export commonly used types
pub use display::{CustomerSummaries, ProgressView};
pub use engine::{ProgressEngine, ProgressSnapshot, StepView};
pub use error::{ProgressError, Result};
pub use models::{
    Customer, CustomerDocument, CustomerSummary, EffectiveStatus, PhaseProgress, Task, TaskStatus,
};
pub use pipeline::{ConditionalRule, PhaseDef, Pipeline, PipelineBuilder, StepDef};
pub use view::{CollapseState, StepFilter};
