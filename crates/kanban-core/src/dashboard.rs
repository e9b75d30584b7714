use chrono::NaiveDateTime;
use kanban_shared::{
  TaskDto,
  TaskPriority,
  TaskStatus
};

use crate::card::CardView;
use crate::config::BoardConfig;
use crate::format::parse_calendar_date;

pub const HIGH_PRIORITY_PLACEHOLDER:
  &str = "暫無高優先級任務";
/// Hard ceiling on either highlight list,
/// whatever the config asks for.
pub const MAX_HIGHLIGHTS: usize = 3;

pub const UPCOMING_PLACEHOLDER: &str =
  "暫無即將到期任務";

#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq,
)]
pub struct StatusCounts {
  pub todo:        usize,
  pub in_progress: usize,
  pub done:        usize
}

impl StatusCounts {
  pub fn tally(tasks: &[TaskDto]) -> Self {
    let mut counts = StatusCounts::default();
    for task in tasks {
      match task.status {
        | TaskStatus::Todo => {
          counts.todo += 1;
        }
        | TaskStatus::InProgress => {
          counts.in_progress += 1;
        }
        | TaskStatus::Done => {
          counts.done += 1;
        }
        | TaskStatus::Unrecognized => {}
      }
    }
    counts
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct StatusPercentages {
  pub todo:        u32,
  pub in_progress: u32,
  pub done:        u32
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
  pub total:         usize,
  pub counts:        StatusCounts,
  /// Absent when there are no tasks.
  pub percentages:   Option<StatusPercentages>,
  pub high_priority: Vec<CardView>,
  pub upcoming:      Vec<CardView>
}

impl DashboardView {
  #[tracing::instrument(
    skip(tasks, config),
    fields(total = tasks.len())
  )]
  pub fn build(
    tasks: &[TaskDto],
    now: NaiveDateTime,
    config: &BoardConfig
  ) -> Self {
    let total = tasks.len();
    let counts = StatusCounts::tally(tasks);
    let percentages = (total > 0).then(|| {
      StatusPercentages {
        todo:        percent_of(
          counts.todo,
          total
        ),
        in_progress: percent_of(
          counts.in_progress,
          total
        ),
        done:        percent_of(
          counts.done,
          total
        )
      }
    });

    let limit = config
      .dashboard
      .highlight_limit
      .min(MAX_HIGHLIGHTS);
    let high_priority = select_high_priority(
      tasks, limit
    )
    .into_iter()
    .map(|task| {
      CardView::build(task, now, config)
    })
    .collect();
    let upcoming =
      select_upcoming(tasks, limit)
        .into_iter()
        .map(|task| {
          CardView::build(task, now, config)
        })
        .collect();

    DashboardView {
      total,
      counts,
      percentages,
      high_priority,
      upcoming
    }
  }
}

/// Rounds half up, like the counters
/// have always been shown.
fn percent_of(
  count: usize,
  total: usize
) -> u32 {
  let rounded =
    (count * 200 + total) / (total * 2);
  u32::try_from(rounded).unwrap_or(100)
}

/// Open high-priority tasks in collection
/// order.
pub fn select_high_priority(
  tasks: &[TaskDto],
  limit: usize
) -> Vec<&TaskDto> {
  tasks
    .iter()
    .filter(|task| {
      task.priority == TaskPriority::High
        && task.status != TaskStatus::Done
    })
    .take(limit)
    .collect()
}

/// Open tasks with a due date, earliest
/// first. Equal dates keep collection
/// order; unparseable dates go last.
pub fn select_upcoming(
  tasks: &[TaskDto],
  limit: usize
) -> Vec<&TaskDto> {
  let mut dated: Vec<_> = tasks
    .iter()
    .filter(|task| {
      task.due().is_some()
        && task.status != TaskStatus::Done
    })
    .map(|task| {
      let key =
        task.due().and_then(parse_calendar_date);
      (key.is_none(), key, task)
    })
    .collect();

  dated.sort_by_key(|(unparsed, key, _)| {
    (*unparsed, *key)
  });

  dated
    .into_iter()
    .take(limit)
    .map(|(_, _, task)| task)
    .collect()
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;

  fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
      .and_then(|d| d.and_hms_opt(9, 0, 0))
      .expect("valid now")
  }

  fn task(
    id: i64,
    status: TaskStatus,
    priority: TaskPriority,
    due: Option<&str>
  ) -> TaskDto {
    TaskDto {
      id,
      title: format!("task {id}"),
      description: None,
      status,
      priority,
      assignee: "user".to_string(),
      due_date: due.map(str::to_string),
      tags: vec![],
      created_at: None,
      updated_at: None
    }
  }

  #[test]
  fn empty_board_has_no_percentages() {
    let view = DashboardView::build(
      &[],
      now(),
      &BoardConfig::default()
    );
    assert_eq!(view.total, 0);
    assert_eq!(view.percentages, None);
    assert!(view.high_priority.is_empty());
    assert!(view.upcoming.is_empty());
  }

  #[test]
  fn percentages_round_and_sum_to_about_100()
  {
    let mix = [
      (1, 1, 1),
      (1, 1, 4),
      (2, 0, 1),
      (5, 3, 0),
      (7, 2, 2),
      (0, 0, 9)
    ];
    for (todo, doing, done) in mix {
      let mut tasks = vec![];
      let mut id = 0;
      for (n, status) in [
        (todo, TaskStatus::Todo),
        (doing, TaskStatus::InProgress),
        (done, TaskStatus::Done)
      ] {
        for _ in 0..n {
          id += 1;
          tasks.push(task(
            id,
            status,
            TaskPriority::Low,
            None
          ));
        }
      }

      let view = DashboardView::build(
        &tasks,
        now(),
        &BoardConfig::default()
      );
      let pct =
        view.percentages.expect("has pct");
      let sum =
        pct.todo + pct.in_progress + pct.done;
      assert!(
        (99..=101).contains(&sum),
        "{todo}/{doing}/{done} summed to {sum}"
      );
    }
  }

  #[test]
  fn thirds_round_down_sixths_round_up() {
    assert_eq!(percent_of(1, 3), 33);
    assert_eq!(percent_of(2, 3), 67);
    assert_eq!(percent_of(1, 8), 13);
    assert_eq!(percent_of(0, 5), 0);
    assert_eq!(percent_of(5, 5), 100);
  }

  #[test]
  fn high_priority_excludes_done_and_caps_at_three()
  {
    let tasks = vec![
      task(
        1,
        TaskStatus::Done,
        TaskPriority::High,
        None
      ),
      task(
        2,
        TaskStatus::Todo,
        TaskPriority::High,
        None
      ),
      task(
        3,
        TaskStatus::Todo,
        TaskPriority::Low,
        None
      ),
      task(
        4,
        TaskStatus::InProgress,
        TaskPriority::High,
        None
      ),
      task(
        5,
        TaskStatus::Todo,
        TaskPriority::High,
        None
      ),
      task(
        6,
        TaskStatus::Todo,
        TaskPriority::High,
        None
      ),
    ];

    let picked: Vec<i64> =
      select_high_priority(&tasks, 3)
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(picked, vec![2, 4, 5]);
  }

  #[test]
  fn upcoming_sorts_by_date_and_is_stable() {
    let tasks = vec![
      task(
        1,
        TaskStatus::Todo,
        TaskPriority::Low,
        Some("2024-07-01")
      ),
      task(
        2,
        TaskStatus::Todo,
        TaskPriority::Low,
        Some("2024-06-15")
      ),
      task(
        3,
        TaskStatus::Done,
        TaskPriority::Low,
        Some("2024-01-01")
      ),
      task(
        4,
        TaskStatus::Todo,
        TaskPriority::Low,
        None
      ),
      task(
        5,
        TaskStatus::InProgress,
        TaskPriority::Low,
        Some("2024-06-15")
      ),
      task(
        6,
        TaskStatus::Todo,
        TaskPriority::Low,
        Some("soon")
      ),
    ];

    let all: Vec<i64> =
      select_upcoming(&tasks, 10)
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(all, vec![2, 5, 1, 6]);

    let capped =
      select_upcoming(&tasks, 3);
    assert_eq!(capped.len(), 3);
  }

  #[test]
  fn blank_due_date_is_not_upcoming() {
    let tasks = vec![
      task(
        1,
        TaskStatus::Todo,
        TaskPriority::Low,
        Some("")
      ),
      task(
        2,
        TaskStatus::Todo,
        TaskPriority::Low,
        Some("2024-06-15")
      ),
    ];

    let picked: Vec<i64> =
      select_upcoming(&tasks, 3)
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(picked, vec![2]);
  }

  #[test]
  fn configured_limit_never_exceeds_three() {
    let mut config = BoardConfig::default();
    config.dashboard.highlight_limit = 5;
    let tasks: Vec<TaskDto> = (1..=6)
      .map(|id| {
        task(
          id,
          TaskStatus::Todo,
          TaskPriority::High,
          Some("2024-06-15")
        )
      })
      .collect();

    let view =
      DashboardView::build(&tasks, now(), &config);
    assert_eq!(view.high_priority.len(), 3);
    assert_eq!(view.upcoming.len(), 3);

    config.dashboard.highlight_limit = 2;
    let view =
      DashboardView::build(&tasks, now(), &config);
    assert_eq!(view.high_priority.len(), 2);
  }

  #[test]
  fn counts_ignore_unrecognized_status() {
    let tasks = vec![
      task(
        1,
        TaskStatus::Todo,
        TaskPriority::Low,
        None
      ),
      task(
        2,
        TaskStatus::Unrecognized,
        TaskPriority::Low,
        None
      ),
    ];
    let view = DashboardView::build(
      &tasks,
      now(),
      &BoardConfig::default()
    );
    assert_eq!(view.total, 2);
    assert_eq!(view.counts.todo, 1);
    assert_eq!(
      view.counts.in_progress
        + view.counts.done,
      0
    );
  }
}
