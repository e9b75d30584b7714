pub mod board;
pub mod card;
pub mod config;
pub mod dashboard;
pub mod detail;
pub mod error;
pub mod form;
pub mod format;
pub mod gateway;
pub mod store;
pub mod sync;

pub use kanban_shared::{
  ActivityCreate,
  ActivityDto,
  TaskDraft,
  TaskDto,
  TaskId,
  TaskMoveArgs,
  TaskPriority,
  TaskStatus
};
