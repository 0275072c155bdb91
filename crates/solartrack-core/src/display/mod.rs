//! Display wrappers producing markdown for terminal rendering.
//!
//! Domain types implement [`std::fmt::Display`] directly where a single
//! format makes sense (statuses, phase counters, the pipeline listing).
//! Context-dependent output goes through wrapper types:
//!
//! ```text
//! ┌──────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ ProgressSnapshot │    │  ProgressView   │    │    Markdown     │
//! │ + CollapseState  │───▶│ (filter, icons) │───▶│    (terminal)   │
//! └──────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`progress`]: the collapsible stepper for one customer
//! - [`collections`]: customer summary lists
//! - [`status`]: status and counter formatting
//! - [`datetime`]: timestamp formatting in the system timezone
//! - [`pipeline`]: the pipeline definition listing

pub mod collections;
pub mod datetime;
pub mod pipeline;
pub mod progress;
pub mod status;

pub use collections::CustomerSummaries;
pub use datetime::{LocalDate, LocalDateTime};
pub use progress::ProgressView;
