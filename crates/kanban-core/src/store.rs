use kanban_shared::{
  TaskDto,
  TaskId
};

#[derive(
  Debug, Clone, PartialEq, Eq, Hash,
)]
pub enum TaskFilter {
  Assignee(String)
}

impl TaskFilter {
  pub fn matches(
    &self,
    task: &TaskDto
  ) -> bool {
    match self {
      | TaskFilter::Assignee(value) => {
        task.assignee == *value
      }
    }
  }
}

/// Last fetched task list plus the
/// active board filter. Every view is
/// derived from this.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskStore {
  tasks:  Vec<TaskDto>,
  filter: Option<TaskFilter>,
  loaded: bool
}

impl TaskStore {
  pub fn tasks(&self) -> &[TaskDto] {
    &self.tasks
  }

  /// False until the first successful
  /// list call.
  pub fn is_loaded(&self) -> bool {
    self.loaded
  }

  pub fn replace_all(
    &mut self,
    tasks: Vec<TaskDto>
  ) {
    self.tasks = tasks;
    self.loaded = true;
  }

  pub fn get_by_id(
    &self,
    id: TaskId
  ) -> Option<&TaskDto> {
    self
      .tasks
      .iter()
      .find(|task| task.id == id)
  }

  pub fn filter(
    &self
  ) -> Option<&TaskFilter> {
    self.filter.as_ref()
  }

  pub fn set_filter(
    &mut self,
    filter: Option<TaskFilter>
  ) {
    self.filter = filter;
  }

  /// The collection the board renders:
  /// everything, or the filtered subset in
  /// collection order.
  pub fn visible_tasks(
    &self
  ) -> Vec<TaskDto> {
    match &self.filter {
      | Some(filter) => {
        self
          .tasks
          .iter()
          .filter(|task| {
            filter.matches(task)
          })
          .cloned()
          .collect()
      }
      | None => self.tasks.clone()
    }
  }
}
