use chrono::NaiveDateTime;
use kanban_shared::{
  TaskDto,
  TaskStatus
};
use tracing::warn;

use crate::card::CardView;
use crate::config::BoardConfig;
use crate::format::status_label;

/// DOM id of a column's card list.
pub fn list_id(
  status: TaskStatus
) -> String {
  format!("{}-list", status.as_str())
}

/// DOM id of a column's counter badge.
pub fn count_id(
  status: TaskStatus
) -> String {
  format!("count-{}", status.as_str())
}

/// Maps a drop target back to a status.
/// Only the container matters, never the
/// position inside it.
pub fn status_for_list_id(
  id: &str
) -> Option<TaskStatus> {
  id.strip_suffix("-list")
    .and_then(TaskStatus::parse)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnView {
  pub status:   TaskStatus,
  pub title:    &'static str,
  pub list_id:  String,
  pub count_id: String,
  pub cards:    Vec<CardView>
}

impl ColumnView {
  pub fn count(&self) -> usize {
    self.cards.len()
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardView {
  pub columns: Vec<ColumnView>,
  /// Tasks whose status is none of the
  /// three lanes; not rendered.
  pub hidden:  usize
}

impl BoardView {
  pub fn build(
    tasks: &[TaskDto],
    now: NaiveDateTime,
    config: &BoardConfig
  ) -> Self {
    let mut columns: Vec<ColumnView> =
      TaskStatus::LANES
        .iter()
        .map(|status| {
          ColumnView {
            status:   *status,
            title:    status_label(*status),
            list_id:  list_id(*status),
            count_id: count_id(*status),
            cards:    vec![]
          }
        })
        .collect();

    let mut hidden = 0_usize;
    for task in tasks {
      match columns.iter_mut().find(
        |column| column.status == task.status
      ) {
        | Some(column) => {
          column.cards.push(
            CardView::build(
              task, now, config
            )
          );
        }
        | None => hidden += 1
      }
    }

    if hidden > 0 {
      warn!(
        hidden,
        "tasks with unrecognized status \
         left off the board"
      );
    }

    BoardView {
      columns,
      hidden
    }
  }

  pub fn rendered(&self) -> usize {
    self
      .columns
      .iter()
      .map(ColumnView::count)
      .sum()
  }

  pub fn column(
    &self,
    status: TaskStatus
  ) -> Option<&ColumnView> {
    self
      .columns
      .iter()
      .find(|column| column.status == status)
  }
}
