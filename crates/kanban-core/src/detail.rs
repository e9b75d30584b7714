use chrono::NaiveDateTime;
use kanban_shared::{
  ActivityCreate,
  ActivityDto,
  TaskDto,
  TaskId,
  TaskPriority
};

use crate::card::DueBadge;
use crate::config::BoardConfig;
use crate::error::FormError;
use crate::format::{
  format_due_date,
  format_timestamp,
  is_overdue,
  priority_label
};

pub const NO_DESCRIPTION: &str = "無描述";
pub const FEED_LOADING: &str = "載入中...";
pub const FEED_EMPTY: &str = "暫無活動記錄";

/// Read-only detail modal content.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
  pub id:             TaskId,
  pub title:          String,
  pub description:    String,
  pub priority:       TaskPriority,
  pub priority_label: String,
  pub assignee:       String,
  pub avatar:         String,
  pub due:            Option<DueBadge>,
  pub tags:           Vec<String>
}

impl DetailView {
  pub fn build(
    task: &TaskDto,
    now: NaiveDateTime,
    config: &BoardConfig
  ) -> Self {
    let description = task
      .description
      .as_deref()
      .filter(|text| !text.is_empty())
      .unwrap_or(NO_DESCRIPTION)
      .to_string();

    DetailView {
      id: task.id,
      title: task.title.clone(),
      description,
      priority: task.priority,
      priority_label: format!(
        "{}優先級",
        priority_label(task.priority)
      ),
      assignee: task.assignee.clone(),
      avatar: config
        .avatar_for(&task.assignee)
        .to_string(),
      due: task.due().map(
        |raw| DueBadge {
          label:   format_due_date(raw),
          overdue: is_overdue(
            Some(raw),
            task.status,
            now
          )
        }
      ),
      tags: task.tags.clone()
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityView {
  pub id:      i64,
  pub author:  String,
  pub time:    String,
  pub content: String
}

impl ActivityView {
  pub fn build(
    activity: &ActivityDto,
    config: &BoardConfig
  ) -> Self {
    ActivityView {
      id:      activity.id,
      author:  config
        .display_name_for(&activity.author)
        .to_string(),
      time:    format_timestamp(
        &activity.created_at
      ),
      content: activity.content.clone()
    }
  }
}

/// Per-open activity feed. A failed load
/// leaves it in whatever state it was.
#[derive(Debug, Clone, PartialEq)]
pub enum ActivityFeed {
  Loading,
  Loaded(Vec<ActivityView>)
}

impl ActivityFeed {
  pub fn loaded(
    activities: &[ActivityDto],
    config: &BoardConfig
  ) -> Self {
    ActivityFeed::Loaded(
      activities
        .iter()
        .map(|activity| {
          ActivityView::build(
            activity, config
          )
        })
        .collect()
    )
  }

  /// Message shown instead of entries, if
  /// any.
  pub fn placeholder(
    &self
  ) -> Option<&'static str> {
    match self {
      | ActivityFeed::Loading => {
        Some(FEED_LOADING)
      }
      | ActivityFeed::Loaded(items)
        if items.is_empty() =>
      {
        Some(FEED_EMPTY)
      }
      | ActivityFeed::Loaded(_) => None
    }
  }
}

/// Validates a new comment against the
/// open task.
pub fn comment_body(
  open_task: Option<TaskId>,
  text: &str,
  author: &str
) -> Result<ActivityCreate, FormError> {
  let content = text.trim();
  if content.is_empty() {
    return Err(FormError::EmptyComment);
  }
  let task_id =
    open_task.ok_or(FormError::NoOpenTask)?;

  Ok(ActivityCreate {
    task_id,
    author: author.to_string(),
    content: content.to_string()
  })
}
