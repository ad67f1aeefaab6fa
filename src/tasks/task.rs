use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::tasks::error::ValidationError;

/// A single task record.
///
/// Tasks are created only through
/// [`TaskStore::create`](crate::tasks::store::TaskStore::create), which
/// assigns the id. The store holds `name` and `priority` as given;
/// enforcing the documented constraints (3-20 alphanumeric characters,
/// known priority) is the job of
/// [`TaskValidator`](crate::tasks::validator::TaskValidator), invoked by
/// the caller before the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique id assigned by the store, never reused
    pub id: u64,

    /// Display name of the task
    pub name: String,

    /// Priority label, one of `low`/`normal`/`high` when validated
    pub priority: String,
}

impl Task {
    pub(crate) fn new(id: u64, name: impl Into<String>, priority: impl Into<String>) -> Self {
        Task {
            id,
            name: name.into(),
            priority: priority.into(),
        }
    }
}

/// Priority levels accepted by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low = 0,
    Normal = 1,
    High = 2,
}

impl Priority {
    /// All accepted levels, in the order they appear in error messages.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Normal, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Normal => "normal",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "normal" => Ok(Priority::Normal),
            "high" => Ok(Priority::High),
            other => Err(ValidationError::UnknownPriority(other.to_string())),
        }
    }
}
