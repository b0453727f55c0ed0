// ABOUTME: Task type definitions
// ABOUTME: Structures for task records and create/update inputs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A task record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Normalized input for inserting a task (already validated and trimmed)
#[derive(Debug, Clone)]
pub struct TaskCreateInput {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// Field updates applied to an existing task; `None` leaves the field unchanged
#[derive(Debug, Clone, Default)]
pub struct TaskUpdateInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}
