use serde::{
  Deserialize,
  Deserializer,
  Serialize
};

pub type TaskId = i64;

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
  Todo,
  InProgress,
  Done,
  /// Anything the backend stores outside
  /// the three board lanes.
  #[serde(other)]
  Unrecognized
}

impl TaskStatus {
  pub const LANES: [TaskStatus; 3] = [
    TaskStatus::Todo,
    TaskStatus::InProgress,
    TaskStatus::Done
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      | TaskStatus::Todo => "todo",
      | TaskStatus::InProgress => {
        "in_progress"
      }
      | TaskStatus::Done => "done",
      | TaskStatus::Unrecognized => {
        "unrecognized"
      }
    }
  }

  pub fn parse(
    value: &str
  ) -> Option<TaskStatus> {
    match value {
      | "todo" => Some(TaskStatus::Todo),
      | "in_progress" => {
        Some(TaskStatus::InProgress)
      }
      | "done" => Some(TaskStatus::Done),
      | _ => None
    }
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
  High,
  Medium,
  Low,
  #[serde(other)]
  Unrecognized
}

impl TaskPriority {
  pub const ALL: [TaskPriority; 3] = [
    TaskPriority::High,
    TaskPriority::Medium,
    TaskPriority::Low
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      | TaskPriority::High => "high",
      | TaskPriority::Medium => "medium",
      | TaskPriority::Low => "low",
      | TaskPriority::Unrecognized => {
        "unrecognized"
      }
    }
  }

  pub fn parse(
    value: &str
  ) -> Option<TaskPriority> {
    match value {
      | "high" => Some(TaskPriority::High),
      | "medium" => {
        Some(TaskPriority::Medium)
      }
      | "low" => Some(TaskPriority::Low),
      | _ => None
    }
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct TaskDto {
  pub id:          TaskId,
  pub title:       String,
  #[serde(default)]
  pub description: Option<String>,
  pub status:      TaskStatus,
  pub priority:    TaskPriority,
  pub assignee:    String,
  /// Kept exactly as received, blank
  /// strings included; read it through
  /// [`TaskDto::due`].
  #[serde(default)]
  pub due_date:    Option<String>,
  #[serde(
    default,
    deserialize_with = "null_as_empty_tags"
  )]
  pub tags:        Vec<String>,
  #[serde(default)]
  pub created_at:  Option<String>,
  #[serde(default)]
  pub updated_at:  Option<String>
}

impl TaskDto {
  /// The due date, unless the backend
  /// stored a blank one.
  pub fn due(&self) -> Option<&str> {
    self
      .due_date
      .as_deref()
      .filter(|raw| !raw.trim().is_empty())
  }
}

/// Body of `POST /tasks` and
/// `PUT /tasks/{id}`.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct TaskDraft {
  pub title:       String,
  pub description: Option<String>,
  pub status:      TaskStatus,
  pub priority:    TaskPriority,
  pub assignee:    String,
  pub due_date:    Option<String>,
  pub tags:        Vec<String>
}

impl From<&TaskDto> for TaskDraft {
  fn from(task: &TaskDto) -> Self {
    TaskDraft {
      title:       task.title.clone(),
      description: task
        .description
        .clone(),
      status:      task.status,
      priority:    task.priority,
      assignee:    task.assignee.clone(),
      due_date:    task.due_date.clone(),
      tags:        task.tags.clone()
    }
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct TaskMoveArgs {
  pub status: TaskStatus
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct ActivityDto {
  pub id:         i64,
  pub task_id:    TaskId,
  #[serde(default)]
  pub author:     String,
  pub content:    String,
  #[serde(default)]
  pub created_at: String
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct ActivityCreate {
  pub task_id: TaskId,
  pub author:  String,
  pub content: String
}

fn null_as_empty_tags<'de, D>(
  deserializer: D
) -> Result<Vec<String>, D::Error>
where
  D: Deserializer<'de>
{
  let raw =
    Option::<Vec<String>>::deserialize(
      deserializer
    )?;
  Ok(raw.unwrap_or_default())
}
