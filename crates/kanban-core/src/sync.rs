//! Keeps the task store in step with the
//! backend. Every mutation is followed by
//! a full reload; nothing is patched in
//! place.

use std::cell::{
  Ref,
  RefCell
};
use std::rc::Rc;

use kanban_shared::{
  ActivityDto,
  TaskDto,
  TaskId,
  TaskMoveArgs,
  TaskStatus
};
use tracing::{
  debug,
  error,
  info,
  warn
};

use crate::detail::comment_body;
use crate::error::{
  GatewayError,
  SyncError
};
use crate::form::{
  FormMode,
  TaskForm
};
use crate::gateway::TaskGateway;
use crate::store::{
  TaskFilter,
  TaskStore
};

pub struct BoardSync<G> {
  gateway: Rc<G>,
  store:   Rc<RefCell<TaskStore>>,
  notify:  Rc<dyn Fn()>
}

impl<G> Clone for BoardSync<G> {
  fn clone(&self) -> Self {
    BoardSync {
      gateway: Rc::clone(&self.gateway),
      store:   Rc::clone(&self.store),
      notify:  Rc::clone(&self.notify)
    }
  }
}

impl<G: TaskGateway> BoardSync<G> {
  /// `notify` runs whenever the store
  /// changed and views must re-render.
  pub fn new(
    gateway: G,
    notify: impl Fn() + 'static
  ) -> Self {
    BoardSync {
      gateway: Rc::new(gateway),
      store:   Rc::new(RefCell::new(
        TaskStore::default()
      )),
      notify:  Rc::new(notify)
    }
  }

  pub fn gateway(&self) -> &G {
    &self.gateway
  }

  pub fn store(&self) -> Ref<'_, TaskStore> {
    self.store.borrow()
  }

  pub fn task(
    &self,
    id: TaskId
  ) -> Option<TaskDto> {
    self.store.borrow().get_by_id(id).cloned()
  }

  pub fn set_filter(
    &self,
    filter: Option<TaskFilter>
  ) {
    debug!(?filter, "board filter changed");
    self.store.borrow_mut().set_filter(filter);
    (self.notify)();
  }

  /// Replaces the cached list. On failure
  /// the previous list stays in place.
  #[tracing::instrument(skip(self))]
  pub async fn refresh(
    &self
  ) -> Result<(), GatewayError> {
    match self.gateway.list_tasks().await {
      | Ok(tasks) => {
        info!(
          total = tasks.len(),
          "task list refreshed"
        );
        self
          .store
          .borrow_mut()
          .replace_all(tasks);
        (self.notify)();
        Ok(())
      }
      | Err(err) => {
        error!(
          error = %err,
          "loading tasks failed; keeping \
           cached list"
        );
        Err(err)
      }
    }
  }

  #[tracing::instrument(
    skip(self, form),
    fields(mode = ?form.mode())
  )]
  pub async fn save(
    &self,
    form: &TaskForm
  ) -> Result<(), SyncError> {
    let draft = form.to_draft()?;
    let result = match form.mode() {
      | FormMode::Create => {
        self
          .gateway
          .create_task(&draft)
          .await
      }
      | FormMode::Edit(id) => {
        self
          .gateway
          .update_task(id, &draft)
          .await
      }
    };

    if let Err(err) = result {
      error!(error = %err, "saving task failed");
      return Err(err.into());
    }

    let _ = self.refresh().await;
    Ok(())
  }

  #[tracing::instrument(skip(self))]
  pub async fn delete(
    &self,
    id: TaskId
  ) -> Result<(), SyncError> {
    if let Err(err) =
      self.gateway.delete_task(id).await
    {
      error!(
        error = %err,
        task_id = id,
        "deleting task failed"
      );
      return Err(err.into());
    }

    let _ = self.refresh().await;
    Ok(())
  }

  /// Issues the move for a drop. A failed
  /// move triggers no reload, so the card
  /// stays where the last render put it.
  #[tracing::instrument(skip(self))]
  pub async fn move_task(
    &self,
    id: TaskId,
    status: TaskStatus
  ) -> Result<(), SyncError> {
    let args = TaskMoveArgs {
      status
    };
    if let Err(err) =
      self.gateway.move_task(id, &args).await
    {
      warn!(
        error = %err,
        task_id = id,
        status = status.as_str(),
        "moving task failed"
      );
      return Err(err.into());
    }

    let _ = self.refresh().await;
    Ok(())
  }

  #[tracing::instrument(skip(self))]
  pub async fn activities(
    &self,
    task_id: TaskId
  ) -> Result<Vec<ActivityDto>, GatewayError>
  {
    self
      .gateway
      .list_activities(task_id)
      .await
      .inspect_err(|err| {
        error!(
          error = %err,
          task_id,
          "loading activities failed"
        );
      })
  }

  /// Posts a comment. The caller reloads
  /// only the feed afterwards, never the
  /// task list.
  #[tracing::instrument(skip(self, text))]
  pub async fn add_comment(
    &self,
    open_task: Option<TaskId>,
    text: &str,
    author: &str
  ) -> Result<(), SyncError> {
    let body =
      comment_body(open_task, text, author)?;
    self
      .gateway
      .create_activity(&body)
      .await
      .inspect_err(|err| {
        error!(
          error = %err,
          task_id = body.task_id,
          "adding comment failed"
        );
      })?;
    Ok(())
  }
}
