//! Data models consumed and produced by the progress engine.
//!
//! Input models ([`Customer`], [`Task`], [`TaskStatus`]) mirror the records
//! the remote API returns and derive serde with the API's snake_case field
//! names. Output models ([`EffectiveStatus`], [`PhaseProgress`],
//! [`CustomerSummary`]) are derived on demand and never persisted.
//!
//! Display implementations live in [`crate::display`].
//!
//! # Examples
//!
//! ```rust
//! use solartrack_core::models::{Customer, CustomerDocument, TaskStatus};
//!
//! let json = r#"{
//!     "name": "Asha Patil",
//!     "payment_mode": "Cash",
//!     "tasks": [{ "work_type": "site_survey", "status": "inprogress" }]
//! }"#;
//!
//! let customers = CustomerDocument::from_json_str(json).unwrap().into_customers();
//! assert_eq!(customers.len(), 1);
//! assert_eq!(customers[0].tasks[0].status, TaskStatus::InProgress);
//! ```

pub mod customer;
pub mod progress;
pub mod status;
pub mod summary;
pub mod task;


pub use customer::{Customer, CustomerDocument};
pub use progress::{completion_percent, PhaseProgress};
pub use status::{EffectiveStatus, TaskStatus};
pub use summary::CustomerSummary;
pub use task::Task;
