use gloo::net::http::{
  Request,
  RequestBuilder,
  Response
};
use kanban_core::error::GatewayError;
use kanban_core::gateway::{
  ApiRoute,
  HttpMethod,
  TaskGateway,
  check_status,
  decode_body
};
use kanban_shared::{
  ActivityCreate,
  ActivityDto,
  TaskDraft,
  TaskDto,
  TaskId,
  TaskMoveArgs
};
use serde::Serialize;
use wasm_bindgen::JsValue;

/// Browser `fetch` gateway rooted at the
/// configured API base.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpGateway {
  api_base: String
}

impl HttpGateway {
  pub fn new(api_base: &str) -> Self {
    HttpGateway {
      api_base: api_base.to_string()
    }
  }

  fn builder(
    &self,
    route: ApiRoute
  ) -> RequestBuilder {
    let url = route.url(&self.api_base);
    match route.method() {
      | HttpMethod::Get => Request::get(&url),
      | HttpMethod::Post => {
        Request::post(&url)
      }
      | HttpMethod::Put => Request::put(&url),
      | HttpMethod::Delete => {
        Request::delete(&url)
      }
    }
  }

  async fn send(
    &self,
    route: ApiRoute,
    body: Option<String>
  ) -> Result<Response, GatewayError> {
    tracing::debug!(%route, "sending request");
    let builder = self.builder(route);
    let sent = match body {
      | Some(json) => {
        builder
          .header(
            "Content-Type",
            "application/json"
          )
          .body(JsValue::from(json))
          .map_err(transport)?
          .send()
          .await
      }
      | None => builder.send().await
    };

    let response = sent.map_err(transport)?;
    check_status(route, response.status())?;
    Ok(response)
  }

  async fn send_json<B>(
    &self,
    route: ApiRoute,
    body: &B
  ) -> Result<(), GatewayError>
  where
    B: Serialize + ?Sized
  {
    let json = serde_json::to_string(body)
      .map_err(|err| {
        GatewayError::Decode(format!(
          "{route}: {err}"
        ))
      })?;
    self.send(route, Some(json)).await?;
    Ok(())
  }

  async fn fetch_list<T>(
    &self,
    route: ApiRoute
  ) -> Result<Vec<T>, GatewayError>
  where
    T: serde::de::DeserializeOwned
  {
    let response =
      self.send(route, None).await?;
    let text = response
      .text()
      .await
      .map_err(transport)?;
    decode_body(route, &text)
  }
}

fn transport(
  err: gloo::net::Error
) -> GatewayError {
  GatewayError::Transport(err.to_string())
}

impl TaskGateway for HttpGateway {
  async fn list_tasks(
    &self
  ) -> Result<Vec<TaskDto>, GatewayError> {
    self.fetch_list(ApiRoute::ListTasks).await
  }

  async fn create_task(
    &self,
    draft: &TaskDraft
  ) -> Result<(), GatewayError> {
    self
      .send_json(ApiRoute::CreateTask, draft)
      .await
  }

  async fn update_task(
    &self,
    id: TaskId,
    draft: &TaskDraft
  ) -> Result<(), GatewayError> {
    self
      .send_json(
        ApiRoute::UpdateTask(id),
        draft
      )
      .await
  }

  async fn delete_task(
    &self,
    id: TaskId
  ) -> Result<(), GatewayError> {
    self
      .send(ApiRoute::DeleteTask(id), None)
      .await?;
    Ok(())
  }

  async fn move_task(
    &self,
    id: TaskId,
    args: &TaskMoveArgs
  ) -> Result<(), GatewayError> {
    self
      .send_json(ApiRoute::MoveTask(id), args)
      .await
  }

  async fn list_activities(
    &self,
    task_id: TaskId
  ) -> Result<Vec<ActivityDto>, GatewayError>
  {
    self
      .fetch_list(ApiRoute::ListActivities(
        task_id
      ))
      .await
  }

  async fn create_activity(
    &self,
    body: &ActivityCreate
  ) -> Result<(), GatewayError> {
    self
      .send_json(ApiRoute::CreateActivity, body)
      .await
  }
}
