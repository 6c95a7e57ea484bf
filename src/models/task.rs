use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::models::TeamMember;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Open,
    InProgress,
    InReview,
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Open => "Open",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::InReview => "In Review",
            TaskStatus::Done => "Done",
        }
    }

    /// Stable column id, also the drag-and-drop wire value.
    pub fn as_id(&self) -> &'static str {
        match self {
            TaskStatus::Open => "open",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::InReview => "in-review",
            TaskStatus::Done => "done",
        }
    }

    pub fn from_id(id: &str) -> Option<TaskStatus> {
        match id {
            "open" => Some(TaskStatus::Open),
            "in-progress" => Some(TaskStatus::InProgress),
            "in-review" => Some(TaskStatus::InReview),
            "done" => Some(TaskStatus::Done),
            _ => None,
        }
    }

    pub fn all() -> Vec<TaskStatus> {
        vec![
            TaskStatus::Open,
            TaskStatus::InProgress,
            TaskStatus::InReview,
            TaskStatus::Done,
        ]
    }

    pub(crate) fn index(self) -> usize {
        match self {
            TaskStatus::Open => 0,
            TaskStatus::InProgress => 1,
            TaskStatus::InReview => 2,
            TaskStatus::Done => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    pub fn as_id(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn from_id(id: &str) -> Option<Priority> {
        match id {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }

    pub fn all() -> Vec<Priority> {
        vec![Priority::Low, Priority::Medium, Priority::High]
    }
}

/// A unit of work on the board. Serializes with kebab-case status and
/// camelCase date fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub assignee: TeamMember,
    pub priority: Priority,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Task {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(
            &self.title,
            &self.description,
            &self.assignee,
            self.start_date,
            self.end_date,
        )
    }
}

/// A task as submitted from the create form: everything but the id,
/// which the board assigns.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub assignee: TeamMember,
    pub priority: Priority,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl TaskDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(
            &self.title,
            &self.description,
            &self.assignee,
            self.start_date,
            self.end_date,
        )
    }

    pub(crate) fn into_task(self, id: String) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            status: self.status,
            assignee: self.assignee,
            priority: self.priority,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

fn validate_fields(
    title: &str,
    description: &str,
    assignee: &TeamMember,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyField("title"));
    }
    if description.trim().is_empty() {
        return Err(ValidationError::EmptyField("description"));
    }
    if assignee.name.trim().is_empty() {
        return Err(ValidationError::EmptyField("assignee"));
    }
    if end_date < start_date {
        return Err(ValidationError::EndBeforeStart {
            start: start_date,
            end: end_date,
        });
    }
    Ok(())
}
