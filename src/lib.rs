//! # tasklist
//!
//! A Rust library providing an in-memory task list with schema-style
//! input validation. Built for callers that need an ordered task
//! collection with stable ids and descriptive validation errors.
//!
//! ## Features
//!
//! - **Ordered Store**: Tasks keep their insertion order, observable through `all()`
//! - **Monotonic Ids**: Ids strictly increase and are never reused, even after deletion
//! - **Schema Validation**: Field-by-field checks over untyped candidates, first violation wins
//! - **Serialization**: serde support for all task types
//!
//! ## Quick Start
//!
//! ```rust
//! use tasklist::tasks::{store::TaskStore, validator::TaskValidator};
//! use serde_json::json;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Validate a candidate before handing it to the store
//!     let draft = json!({ "name": "deploy", "priority": "high" });
//!     TaskValidator::validate_task(&draft).into_result()?;
//!
//!     let mut store = TaskStore::new();
//!     let task = store.create("deploy", "high");
//!     assert_eq!(task.id, 1);
//!     assert_eq!(store.get(1), Some(&task));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Store and Validator Compose by Convention
//!
//! The store never validates. `create` and `update` always accept whatever
//! strings they are given, so the store stays total over its input domain
//! and "not found" is a plain `None`. Callers that want the documented
//! constraints (3-20 alphanumeric characters, `low`/`normal`/`high`
//! priorities) run [`TaskValidator`](tasks::validator::TaskValidator)
//! first:
//!
//! ```rust
//! use tasklist::tasks::validator::TaskValidator;
//! use serde_json::json;
//!
//! let draft = json!({ "name": "x", "priority": "urgent" });
//! let checked = TaskValidator::validate_task(&draft);
//! assert!(checked.error.is_some());
//! // The candidate is echoed back for error reporting
//! assert_eq!(checked.value, draft);
//! ```
//!
//! ## Optional Features
//!
//! - `tracing`: Enable structured logging integration for store mutations
//!   and validation outcomes

pub mod tasks;
