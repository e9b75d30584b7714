use chrono::NaiveDateTime;
use kanban_shared::{
  TaskDto,
  TaskId,
  TaskPriority,
  TaskStatus
};

use crate::config::BoardConfig;
use crate::format::{
  format_due_date,
  is_overdue,
  priority_label,
  truncate_chars
};

#[derive(Debug, Clone, PartialEq)]
pub struct DueBadge {
  pub label:   String,
  pub overdue: bool
}

/// Everything a task card shows, already
/// formatted. Text fields are plain text.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
  pub id:             TaskId,
  pub title:          String,
  pub description:    Option<String>,
  pub status:         TaskStatus,
  pub priority:       TaskPriority,
  pub priority_label: &'static str,
  pub assignee:       String,
  pub avatar:         String,
  pub assignee_name:  String,
  pub due:            Option<DueBadge>,
  pub tags:           Vec<String>,
  pub tag_overflow:   usize
}

impl CardView {
  pub fn build(
    task: &TaskDto,
    now: NaiveDateTime,
    config: &BoardConfig
  ) -> Self {
    let description = task
      .description
      .as_deref()
      .filter(|text| !text.is_empty())
      .map(|text| {
        truncate_chars(
          text,
          config
            .cards
            .description_preview_chars
        )
      });

    let due =
      task.due().map(|raw| {
        DueBadge {
          label:   format_due_date(raw),
          overdue: is_overdue(
            Some(raw),
            task.status,
            now
          )
        }
      });

    let preview = config.cards.tag_preview;
    let tags: Vec<String> = task
      .tags
      .iter()
      .take(preview)
      .cloned()
      .collect();
    let tag_overflow =
      task.tags.len().saturating_sub(preview);

    CardView {
      id: task.id,
      title: task.title.clone(),
      description,
      status: task.status,
      priority: task.priority,
      priority_label: priority_label(
        task.priority
      ),
      assignee: task.assignee.clone(),
      avatar: config
        .avatar_for(&task.assignee)
        .to_string(),
      assignee_name: config
        .display_name_for(&task.assignee)
        .to_string(),
      due,
      tags,
      tag_overflow
    }
  }
}
