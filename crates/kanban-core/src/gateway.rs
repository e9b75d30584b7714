//! Remote gateway contract. The browser
//! implementation lives in the UI crate;
//! routing, status and body decoding are
//! shared here.

use std::fmt;

use kanban_shared::{
  ActivityCreate,
  ActivityDto,
  TaskDraft,
  TaskDto,
  TaskId,
  TaskMoveArgs
};
use serde::de::DeserializeOwned;

use crate::error::GatewayError;

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum HttpMethod {
  Get,
  Post,
  Put,
  Delete
}

impl HttpMethod {
  pub fn as_str(self) -> &'static str {
    match self {
      | HttpMethod::Get => "GET",
      | HttpMethod::Post => "POST",
      | HttpMethod::Put => "PUT",
      | HttpMethod::Delete => "DELETE"
    }
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum ApiRoute {
  ListTasks,
  CreateTask,
  UpdateTask(TaskId),
  DeleteTask(TaskId),
  MoveTask(TaskId),
  ListActivities(TaskId),
  CreateActivity
}

impl ApiRoute {
  pub fn method(self) -> HttpMethod {
    match self {
      | ApiRoute::ListTasks
      | ApiRoute::ListActivities(_) => {
        HttpMethod::Get
      }
      | ApiRoute::CreateTask
      | ApiRoute::MoveTask(_)
      | ApiRoute::CreateActivity => {
        HttpMethod::Post
      }
      | ApiRoute::UpdateTask(_) => {
        HttpMethod::Put
      }
      | ApiRoute::DeleteTask(_) => {
        HttpMethod::Delete
      }
    }
  }

  pub fn path(self) -> String {
    match self {
      | ApiRoute::ListTasks
      | ApiRoute::CreateTask => {
        "/tasks".to_string()
      }
      | ApiRoute::UpdateTask(id)
      | ApiRoute::DeleteTask(id) => {
        format!("/tasks/{id}")
      }
      | ApiRoute::MoveTask(id) => {
        format!("/tasks/{id}/move")
      }
      | ApiRoute::ListActivities(
        task_id
      ) => {
        format!("/activities/{task_id}")
      }
      | ApiRoute::CreateActivity => {
        "/activities".to_string()
      }
    }
  }

  pub fn url(
    self,
    api_base: &str
  ) -> String {
    format!(
      "{}{}",
      api_base.trim_end_matches('/'),
      self.path()
    )
  }
}

impl fmt::Display for ApiRoute {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    write!(
      f,
      "{} {}",
      self.method().as_str(),
      self.path()
    )
  }
}

/// Any status outside 2xx is a failure;
/// the body is never inspected.
pub fn check_status(
  route: ApiRoute,
  status: u16
) -> Result<(), GatewayError> {
  if (200..300).contains(&status) {
    Ok(())
  } else {
    Err(GatewayError::Status {
      route: route.to_string(),
      status
    })
  }
}

pub fn decode_body<T>(
  route: ApiRoute,
  body: &str
) -> Result<T, GatewayError>
where
  T: DeserializeOwned
{
  serde_json::from_str(body).map_err(
    |err| {
      GatewayError::Decode(format!(
        "{route}: {err}"
      ))
    }
  )
}

#[allow(async_fn_in_trait)]
pub trait TaskGateway {
  async fn list_tasks(
    &self
  ) -> Result<Vec<TaskDto>, GatewayError>;

  async fn create_task(
    &self,
    draft: &TaskDraft
  ) -> Result<(), GatewayError>;

  async fn update_task(
    &self,
    id: TaskId,
    draft: &TaskDraft
  ) -> Result<(), GatewayError>;

  async fn delete_task(
    &self,
    id: TaskId
  ) -> Result<(), GatewayError>;

  async fn move_task(
    &self,
    id: TaskId,
    args: &TaskMoveArgs
  ) -> Result<(), GatewayError>;

  async fn list_activities(
    &self,
    task_id: TaskId
  ) -> Result<Vec<ActivityDto>, GatewayError>;

  async fn create_activity(
    &self,
    body: &ActivityCreate
  ) -> Result<(), GatewayError>;
}
