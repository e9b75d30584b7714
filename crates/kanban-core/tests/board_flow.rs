use std::cell::{
  Cell,
  RefCell
};
use std::rc::Rc;

use chrono::{
  NaiveDate,
  NaiveDateTime
};
use kanban_core::board::{
  BoardView,
  status_for_list_id
};
use kanban_core::config::BoardConfig;
use kanban_core::dashboard::DashboardView;
use kanban_core::error::{
  FormError,
  GatewayError,
  SyncError
};
use kanban_core::form::TaskForm;
use kanban_core::gateway::{
  ApiRoute,
  TaskGateway
};
use kanban_core::store::TaskFilter;
use kanban_core::sync::BoardSync;
use kanban_core::{
  ActivityCreate,
  ActivityDto,
  TaskDraft,
  TaskDto,
  TaskId,
  TaskMoveArgs,
  TaskPriority,
  TaskStatus
};

#[derive(Debug, Clone, PartialEq)]
enum Call {
  List,
  Create(TaskDraft),
  Update(TaskId, TaskDraft),
  Delete(TaskId),
  Move(TaskId, TaskStatus),
  ListActivities(TaskId),
  CreateActivity(ActivityCreate)
}

/// In-memory backend that records every
/// call it receives.
#[derive(Default)]
struct RecordingGateway {
  tasks:      RefCell<Vec<TaskDto>>,
  activities: RefCell<Vec<ActivityDto>>,
  calls:      RefCell<Vec<Call>>,
  next_id:    Cell<TaskId>,
  fail_list:  Cell<bool>,
  fail_write: Cell<bool>
}

impl RecordingGateway {
  fn seeded(tasks: Vec<TaskDto>) -> Self {
    let next = tasks
      .iter()
      .map(|t| t.id)
      .max()
      .unwrap_or(0);
    let gateway = RecordingGateway {
      tasks: RefCell::new(tasks),
      ..RecordingGateway::default()
    };
    gateway.next_id.set(next + 1);
    gateway
  }

  fn record(&self, call: Call) {
    self.calls.borrow_mut().push(call);
  }

  fn calls(&self) -> Vec<Call> {
    self.calls.borrow().clone()
  }

  fn write_guard(
    &self,
    route: ApiRoute
  ) -> Result<(), GatewayError> {
    if self.fail_write.get() {
      Err(GatewayError::Status {
        route:  route.to_string(),
        status: 500
      })
    } else {
      Ok(())
    }
  }
}

impl TaskGateway for RecordingGateway {
  async fn list_tasks(
    &self
  ) -> Result<Vec<TaskDto>, GatewayError> {
    self.record(Call::List);
    if self.fail_list.get() {
      return Err(GatewayError::Transport(
        "connection refused".to_string()
      ));
    }
    Ok(self.tasks.borrow().clone())
  }

  async fn create_task(
    &self,
    draft: &TaskDraft
  ) -> Result<(), GatewayError> {
    self.record(Call::Create(draft.clone()));
    self.write_guard(ApiRoute::CreateTask)?;
    let id = self.next_id.get();
    self.next_id.set(id + 1);
    self.tasks.borrow_mut().insert(
      0,
      TaskDto {
        id,
        title: draft.title.clone(),
        description: draft
          .description
          .clone(),
        status: draft.status,
        priority: draft.priority,
        assignee: draft.assignee.clone(),
        due_date: draft.due_date.clone(),
        tags: draft.tags.clone(),
        created_at: None,
        updated_at: None
      }
    );
    Ok(())
  }

  async fn update_task(
    &self,
    id: TaskId,
    draft: &TaskDraft
  ) -> Result<(), GatewayError> {
    self.record(Call::Update(
      id,
      draft.clone()
    ));
    self.write_guard(ApiRoute::UpdateTask(
      id
    ))?;
    if let Some(task) = self
      .tasks
      .borrow_mut()
      .iter_mut()
      .find(|t| t.id == id)
    {
      task.title = draft.title.clone();
      task.status = draft.status;
      task.priority = draft.priority;
    }
    Ok(())
  }

  async fn delete_task(
    &self,
    id: TaskId
  ) -> Result<(), GatewayError> {
    self.record(Call::Delete(id));
    self.write_guard(ApiRoute::DeleteTask(
      id
    ))?;
    self
      .tasks
      .borrow_mut()
      .retain(|t| t.id != id);
    Ok(())
  }

  async fn move_task(
    &self,
    id: TaskId,
    args: &TaskMoveArgs
  ) -> Result<(), GatewayError> {
    self.record(Call::Move(id, args.status));
    self.write_guard(ApiRoute::MoveTask(
      id
    ))?;
    if let Some(task) = self
      .tasks
      .borrow_mut()
      .iter_mut()
      .find(|t| t.id == id)
    {
      task.status = args.status;
    }
    Ok(())
  }

  async fn list_activities(
    &self,
    task_id: TaskId
  ) -> Result<Vec<ActivityDto>, GatewayError>
  {
    self.record(Call::ListActivities(
      task_id
    ));
    Ok(
      self
        .activities
        .borrow()
        .iter()
        .filter(|a| a.task_id == task_id)
        .cloned()
        .collect()
    )
  }

  async fn create_activity(
    &self,
    body: &ActivityCreate
  ) -> Result<(), GatewayError> {
    self.record(Call::CreateActivity(
      body.clone()
    ));
    self.write_guard(
      ApiRoute::CreateActivity
    )?;
    let id =
      self.activities.borrow().len() as i64
        + 1;
    self.activities.borrow_mut().push(
      ActivityDto {
        id,
        task_id: body.task_id,
        author: body.author.clone(),
        content: body.content.clone(),
        created_at: "2024-06-01 10:00:00"
          .to_string()
      }
    );
    Ok(())
  }
}

fn now() -> NaiveDateTime {
  NaiveDate::from_ymd_opt(2024, 6, 1)
    .and_then(|d| d.and_hms_opt(9, 0, 0))
    .expect("valid now")
}

fn task(
  id: TaskId,
  title: &str,
  status: TaskStatus
) -> TaskDto {
  TaskDto {
    id,
    title: title.to_string(),
    description: None,
    status,
    priority: TaskPriority::Medium,
    assignee: "user".to_string(),
    due_date: None,
    tags: vec![],
    created_at: None,
    updated_at: None
  }
}

fn sync_with(
  tasks: Vec<TaskDto>
) -> (BoardSync<RecordingGateway>, Rc<Cell<u32>>)
{
  let _ = tracing_subscriber::fmt()
    .with_test_writer()
    .with_env_filter("kanban_core=debug")
    .try_init();

  let renders = Rc::new(Cell::new(0_u32));
  let counter = Rc::clone(&renders);
  let sync = BoardSync::new(
    RecordingGateway::seeded(tasks),
    move || counter.set(counter.get() + 1)
  );
  (sync, renders)
}

#[tokio::test]
async fn refresh_replaces_store_and_redraws() {
  let (sync, renders) = sync_with(vec![
    task(1, "a", TaskStatus::Todo),
    task(2, "b", TaskStatus::Done),
  ]);

  sync.refresh().await.expect("refresh");

  assert!(sync.store().is_loaded());
  assert_eq!(sync.store().tasks().len(), 2);
  assert_eq!(renders.get(), 1);
  assert_eq!(
    sync.task(2).map(|t| t.title),
    Some("b".to_string())
  );
}

#[tokio::test]
async fn failed_refresh_keeps_stale_cache() {
  let (sync, renders) = sync_with(vec![
    task(1, "a", TaskStatus::Todo),
  ]);
  sync.refresh().await.expect("refresh");

  sync.gateway().fail_list.set(true);
  let result = sync.refresh().await;

  assert!(matches!(
    result,
    Err(GatewayError::Transport(_))
  ));
  assert_eq!(sync.store().tasks().len(), 1);
  assert_eq!(renders.get(), 1);
}

#[tokio::test]
async fn creating_high_priority_task_shows_on_board_and_dashboard()
{
  let (sync, _) = sync_with(vec![]);
  sync.refresh().await.expect("refresh");

  let mut form =
    TaskForm::blank(&BoardConfig::default());
  form.title = "Ship report".to_string();
  form.priority = TaskPriority::High;
  form.status = TaskStatus::Todo;
  sync.save(&form).await.expect("save");

  let config = BoardConfig::default();
  let store = sync.store();
  let board = BoardView::build(
    &store.visible_tasks(),
    now(),
    &config
  );
  let todo_titles: Vec<&str> = board
    .column(TaskStatus::Todo)
    .map(|column| {
      column
        .cards
        .iter()
        .map(|card| card.title.as_str())
        .collect()
    })
    .unwrap_or_default();
  assert_eq!(todo_titles, vec!["Ship report"]);

  let dashboard = DashboardView::build(
    store.tasks(),
    now(),
    &config
  );
  assert_eq!(dashboard.high_priority.len(), 1);
  assert_eq!(
    dashboard.high_priority[0].title,
    "Ship report"
  );
  assert!(dashboard.upcoming.is_empty());
}

#[tokio::test]
async fn drop_on_done_column_moves_once_and_reloads_once()
{
  let (sync, _) = sync_with(vec![
    task(1, "drag me", TaskStatus::Todo),
    task(2, "stay", TaskStatus::Todo),
  ]);
  sync.refresh().await.expect("refresh");
  sync.gateway().calls.borrow_mut().clear();

  let target = status_for_list_id("done-list")
    .expect("done column");
  sync
    .move_task(1, target)
    .await
    .expect("move");

  assert_eq!(sync.gateway().calls(), vec![
    Call::Move(1, TaskStatus::Done),
    Call::List
  ]);
  assert_eq!(
    sync.task(1).map(|t| t.status),
    Some(TaskStatus::Done)
  );
}

#[tokio::test]
async fn rejected_move_leaves_card_in_place() {
  let (sync, renders) = sync_with(vec![
    task(1, "drag me", TaskStatus::Todo),
  ]);
  sync.refresh().await.expect("refresh");
  sync.gateway().fail_write.set(true);

  let result =
    sync.move_task(1, TaskStatus::Done).await;

  assert!(matches!(
    result,
    Err(SyncError::Gateway(
      GatewayError::Status {
        status: 500,
        ..
      }
    ))
  ));
  assert_eq!(
    sync.task(1).map(|t| t.status),
    Some(TaskStatus::Todo)
  );
  assert!(
    !sync
      .gateway()
      .calls()
      .iter()
      .skip(1)
      .any(|call| *call == Call::List)
  );
  assert_eq!(renders.get(), 1);
}

#[tokio::test]
async fn unchanged_edit_submits_original_fields()
{
  let mut original =
    task(7, "Quarterly", TaskStatus::InProgress);
  original.description =
    Some("numbers".to_string());
  original.due_date =
    Some("2024-09-30".to_string());
  original.tags =
    vec!["finance".to_string(), "q3".to_string()];

  let (sync, _) =
    sync_with(vec![original.clone()]);
  sync.refresh().await.expect("refresh");

  let cached =
    sync.task(7).expect("cached task");
  let form = TaskForm::from_task(&cached);
  sync.save(&form).await.expect("save");

  let calls = sync.gateway().calls();
  assert_eq!(
    calls[1],
    Call::Update(7, TaskDraft::from(&original))
  );
  assert_eq!(calls[2], Call::List);
}

#[tokio::test]
async fn unchanged_edit_keeps_blank_strings() {
  let mut original =
    task(8, "Blank", TaskStatus::Todo);
  original.description = Some(String::new());
  original.due_date = Some(String::new());

  let (sync, _) =
    sync_with(vec![original.clone()]);
  sync.refresh().await.expect("refresh");

  let cached =
    sync.task(8).expect("cached task");
  sync
    .save(&TaskForm::from_task(&cached))
    .await
    .expect("save");

  assert_eq!(
    sync.gateway().calls()[1],
    Call::Update(8, TaskDraft::from(&original))
  );
}

#[tokio::test]
async fn unknown_priority_is_never_written_back()
{
  let mut odd = task(9, "Odd", TaskStatus::Todo);
  odd.priority = TaskPriority::Unrecognized;
  let (sync, _) = sync_with(vec![odd]);
  sync.refresh().await.expect("refresh");

  let cached =
    sync.task(9).expect("cached task");
  let result = sync
    .save(&TaskForm::from_task(&cached))
    .await;

  assert_eq!(
    result,
    Err(SyncError::Validation(
      FormError::UnrecognizedPriority
    ))
  );
  assert_eq!(sync.gateway().calls(), vec![
    Call::List
  ]);
}

#[tokio::test]
async fn invalid_form_never_reaches_backend() {
  let (sync, _) = sync_with(vec![]);
  let form =
    TaskForm::blank(&BoardConfig::default());

  let result = sync.save(&form).await;

  assert_eq!(
    result,
    Err(SyncError::Validation(
      FormError::MissingTitle
    ))
  );
  assert!(sync.gateway().calls().is_empty());
}

#[tokio::test]
async fn failed_save_leaves_store_untouched() {
  let (sync, _) = sync_with(vec![
    task(1, "a", TaskStatus::Todo),
  ]);
  sync.refresh().await.expect("refresh");
  let before = sync.store().clone();
  sync.gateway().fail_write.set(true);

  let mut form =
    TaskForm::blank(&BoardConfig::default());
  form.title = "new".to_string();
  assert!(sync.save(&form).await.is_err());

  assert_eq!(*sync.store(), before);
  assert_eq!(
    sync
      .gateway()
      .calls()
      .last()
      .cloned(),
    Some(Call::Create(
      form.to_draft().expect("valid form")
    ))
  );
}

#[tokio::test]
async fn delete_then_reload() {
  let (sync, _) = sync_with(vec![
    task(1, "a", TaskStatus::Todo),
    task(2, "b", TaskStatus::Todo),
  ]);
  sync.refresh().await.expect("refresh");

  sync.delete(1).await.expect("delete");

  assert!(sync.task(1).is_none());
  assert_eq!(sync.store().tasks().len(), 1);
}

#[tokio::test]
async fn filter_is_reapplied_after_reload() {
  let mut joe_task =
    task(2, "joe's", TaskStatus::Todo);
  joe_task.assignee = "joe".to_string();
  let (sync, renders) = sync_with(vec![
    task(1, "mine", TaskStatus::Todo),
    joe_task,
  ]);

  sync.set_filter(Some(TaskFilter::Assignee(
    "joe".to_string()
  )));
  sync.refresh().await.expect("refresh");

  let visible = sync.store().visible_tasks();
  assert_eq!(visible.len(), 1);
  assert_eq!(visible[0].id, 2);
  assert_eq!(sync.store().tasks().len(), 2);
  assert_eq!(renders.get(), 2);
}

#[tokio::test]
async fn comment_reloads_feed_not_task_list() {
  let (sync, _) = sync_with(vec![
    task(3, "discuss", TaskStatus::Todo),
  ]);
  sync.refresh().await.expect("refresh");
  sync.gateway().calls.borrow_mut().clear();

  assert_eq!(
    sync
      .add_comment(Some(3), "  ", "user")
      .await,
    Err(SyncError::Validation(
      FormError::EmptyComment
    ))
  );

  sync
    .add_comment(Some(3), " ship it ", "user")
    .await
    .expect("comment");
  let feed =
    sync.activities(3).await.expect("feed");

  assert_eq!(feed.len(), 1);
  assert_eq!(feed[0].content, "ship it");
  assert!(
    !sync
      .gateway()
      .calls()
      .contains(&Call::List)
  );
}
