//! State behind the create/edit modal.

use kanban_shared::{
  TaskDraft,
  TaskDto,
  TaskId,
  TaskPriority,
  TaskStatus
};

use crate::config::BoardConfig;
use crate::error::FormError;

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum FormMode {
  Create,
  Edit(TaskId)
}

/// Fields the task held as `""` rather
/// than absent. Left blank, they go back
/// the way they came.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq,
)]
pub struct BlankStrings {
  pub description: bool,
  pub due_date:    bool
}

/// Field values exactly as the form holds
/// them. `task_id` is the hidden field
/// that decides create vs update.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskForm {
  pub task_id:     Option<TaskId>,
  pub title:       String,
  pub description: String,
  pub status:      TaskStatus,
  pub priority:    TaskPriority,
  pub assignee:    String,
  pub due_date:    String,
  pub tags:        String,
  pub blanks:      BlankStrings
}

impl TaskForm {
  pub fn blank(
    config: &BoardConfig
  ) -> Self {
    TaskForm {
      task_id:     None,
      title:       String::new(),
      description: String::new(),
      status:      TaskStatus::Todo,
      priority:    TaskPriority::Medium,
      assignee:    config
        .default_assignee
        .clone(),
      due_date:    String::new(),
      tags:        String::new(),
      blanks:      BlankStrings::default()
    }
  }

  /// Populated from the cached task, not
  /// re-fetched.
  pub fn from_task(task: &TaskDto) -> Self {
    TaskForm {
      task_id:     Some(task.id),
      title:       task.title.clone(),
      description: task
        .description
        .clone()
        .unwrap_or_default(),
      status:      task.status,
      priority:    task.priority,
      assignee:    task.assignee.clone(),
      due_date:    task
        .due_date
        .clone()
        .unwrap_or_default(),
      tags:        join_tags(&task.tags),
      blanks:      BlankStrings {
        description: task.description.as_deref()
          == Some(""),
        due_date:    task.due_date.as_deref()
          == Some("")
      }
    }
  }

  pub fn mode(&self) -> FormMode {
    match self.task_id {
      | Some(id) => FormMode::Edit(id),
      | None => FormMode::Create
    }
  }

  pub fn heading(&self) -> &'static str {
    match self.mode() {
      | FormMode::Create => "新增任務",
      | FormMode::Edit(_) => "編輯任務"
    }
  }

  /// Builds the request body. Only the
  /// title and the two enums are checked;
  /// everything else is left to the
  /// backend.
  pub fn to_draft(
    &self
  ) -> Result<TaskDraft, FormError> {
    if self.title.trim().is_empty() {
      return Err(FormError::MissingTitle);
    }
    if self.status == TaskStatus::Unrecognized
    {
      return Err(
        FormError::UnrecognizedStatus
      );
    }
    if self.priority
      == TaskPriority::Unrecognized
    {
      return Err(
        FormError::UnrecognizedPriority
      );
    }

    Ok(TaskDraft {
      title:       self.title.clone(),
      description: optional_field(
        &self.description,
        self.blanks.description
      ),
      status:      self.status,
      priority:    self.priority,
      assignee:    self.assignee.clone(),
      due_date:    optional_field(
        &self.due_date,
        self.blanks.due_date
      ),
      tags:        parse_tags(&self.tags)
    })
  }
}

fn optional_field(
  value: &str,
  keep_blank: bool
) -> Option<String> {
  if !value.is_empty() {
    Some(value.to_string())
  } else if keep_blank {
    Some(String::new())
  } else {
    None
  }
}

#[must_use]
pub fn join_tags(tags: &[String]) -> String {
  tags.join(", ")
}

/// `"a, b ,, c"` -> `["a", "b", "c"]`.
#[must_use]
pub fn parse_tags(raw: &str) -> Vec<String> {
  raw
    .split(',')
    .map(str::trim)
    .filter(|tag| !tag.is_empty())
    .map(str::to_string)
    .collect()
}
