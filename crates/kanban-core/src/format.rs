//! Display formatting for raw task
//! fields. Everything here is pure and
//! takes "now" as an argument.

use chrono::{
  DateTime,
  Datelike,
  Local,
  NaiveDate,
  NaiveDateTime,
  Timelike
};
use kanban_shared::{
  TaskPriority,
  TaskStatus
};

const TIMESTAMP_FORMATS: [&str; 4] = [
  "%Y-%m-%d %H:%M:%S",
  "%Y-%m-%d %H:%M:%S%.f",
  "%Y-%m-%dT%H:%M:%S",
  "%Y-%m-%dT%H:%M:%S%.f"
];

/// Escapes text for inclusion in markup
/// built outside the virtual DOM.
#[must_use]
pub fn escape_html(text: &str) -> String {
  let mut out =
    String::with_capacity(text.len());
  for ch in text.chars() {
    match ch {
      | '&' => out.push_str("&amp;"),
      | '<' => out.push_str("&lt;"),
      | '>' => out.push_str("&gt;"),
      | '"' => out.push_str("&quot;"),
      | '\'' => out.push_str("&#39;"),
      | other => out.push(other)
    }
  }
  out
}

#[must_use]
pub fn parse_calendar_date(
  raw: &str
) -> Option<NaiveDate> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return None;
  }

  if let Ok(date) =
    NaiveDate::parse_from_str(
      trimmed, "%Y-%m-%d"
    )
  {
    return Some(date);
  }

  parse_timestamp(trimmed)
    .map(|ts| ts.date())
}

/// Backend timestamps are naive
/// `YYYY-MM-DD HH:MM:SS`; RFC 3339 values
/// are shifted into local time.
#[must_use]
pub fn parse_timestamp(
  raw: &str
) -> Option<NaiveDateTime> {
  let trimmed = raw.trim();
  for fmt in TIMESTAMP_FORMATS {
    if let Ok(ts) =
      NaiveDateTime::parse_from_str(
        trimmed, fmt
      )
    {
      return Some(ts);
    }
  }

  DateTime::parse_from_rfc3339(trimmed)
    .ok()
    .map(|dt| {
      dt.with_timezone(&Local)
        .naive_local()
    })
}

/// `2024-05-01` -> `5/1`.
#[must_use]
pub fn format_due_date(
  raw: &str
) -> String {
  match parse_calendar_date(raw) {
    | Some(date) => {
      format!(
        "{}/{}",
        date.month(),
        date.day()
      )
    }
    | None => raw.trim().to_string()
  }
}

/// `2024-05-01 09:05:00` ->
/// `2024/5/1 09:05`.
#[must_use]
pub fn format_timestamp(
  raw: &str
) -> String {
  match parse_timestamp(raw) {
    | Some(ts) => {
      format!(
        "{}/{}/{} {:02}:{:02}",
        ts.year(),
        ts.month(),
        ts.day(),
        ts.hour(),
        ts.minute()
      )
    }
    | None => raw.trim().to_string()
  }
}

/// A task is overdue once midnight of its
/// due date has passed, unless it is done.
#[must_use]
pub fn is_overdue(
  due_date: Option<&str>,
  status: TaskStatus,
  now: NaiveDateTime
) -> bool {
  if status == TaskStatus::Done {
    return false;
  }

  due_date
    .and_then(parse_calendar_date)
    .and_then(|date| {
      date.and_hms_opt(0, 0, 0)
    })
    .is_some_and(|due| due < now)
}

#[must_use]
pub fn truncate_chars(
  text: &str,
  max_chars: usize
) -> String {
  let mut chars = text.chars();
  let head: String = chars
    .by_ref()
    .take(max_chars)
    .collect();
  if chars.next().is_some() {
    format!("{head}...")
  } else {
    head
  }
}

#[must_use]
pub fn priority_label(
  priority: TaskPriority
) -> &'static str {
  match priority {
    | TaskPriority::High => "高",
    | TaskPriority::Medium => "中",
    | TaskPriority::Low => "低",
    | TaskPriority::Unrecognized => "?"
  }
}

#[must_use]
pub fn status_label(
  status: TaskStatus
) -> &'static str {
  match status {
    | TaskStatus::Todo => "待辦",
    | TaskStatus::InProgress => "進行中",
    | TaskStatus::Done => "已完成",
    | TaskStatus::Unrecognized => "未知"
  }
}
