use chrono::Local;
use gloo::dialogs::{
  alert,
  confirm
};
use kanban_core::board::BoardView;
use kanban_core::config::BoardConfig;
use kanban_core::dashboard::DashboardView;
use kanban_core::detail::{
  ActivityFeed,
  DetailView
};
use kanban_core::error::{
  FormError,
  SyncError
};
use kanban_core::form::TaskForm;
use kanban_core::store::TaskFilter;
use kanban_core::sync::BoardSync;
use kanban_shared::{
  TaskId,
  TaskStatus
};
use wasm_bindgen_futures::spawn_local;
use yew::{
  Callback,
  Html,
  function_component,
  html,
  use_effect_with,
  use_force_update,
  use_memo,
  use_state
};

use crate::api::HttpGateway;
use crate::components::{
  Dashboard,
  DetailModal,
  KanbanBoard,
  PageHeader,
  Sidebar,
  TaskModal
};
use crate::storage::{
  Page,
  load_page,
  save_page
};

const BOARD_CONFIG_TOML: &str =
  include_str!("../assets/board.toml");

const DELETE_CONFIRM: &str =
  "確定要刪除這個任務嗎？";
const SAVE_FAILED: &str = "儲存失敗";
const DELETE_FAILED: &str = "刪除失敗";
const TITLE_REQUIRED: &str =
  "請輸入任務標題";
const STATUS_REQUIRED: &str =
  "請選擇任務狀態";
const PRIORITY_REQUIRED: &str =
  "請選擇優先級";

type AppSync = BoardSync<HttpGateway>;

/// Activity feed tagged with the task it
/// was loaded for, so a slow response for
/// a closed modal is never shown.
#[derive(Clone, PartialEq)]
struct FeedState {
  task_id: TaskId,
  feed:    ActivityFeed
}

fn load_feed(
  sync: &AppSync,
  config: &BoardConfig,
  task_id: TaskId,
  feed_state: yew::UseStateHandle<
    Option<FeedState>
  >
) {
  let sync = sync.clone();
  let config = config.clone();
  spawn_local(async move {
    // A failed load leaves the feed as it
    // was; the error is already logged.
    if let Ok(activities) =
      sync.activities(task_id).await
    {
      feed_state.set(Some(FeedState {
        task_id,
        feed: ActivityFeed::loaded(
          &activities,
          &config
        )
      }));
    }
  });
}

#[function_component(App)]
pub fn app() -> Html {
  let config = use_memo((), |_| {
    BoardConfig::from_toml_or_default(
      BOARD_CONFIG_TOML
    )
  });
  let force_update = use_force_update();
  let sync = {
    let api_base = config.api_base.clone();
    use_memo((), move |_| {
      BoardSync::new(
        HttpGateway::new(&api_base),
        move || force_update.force_update()
      )
    })
  };

  let page = use_state(load_page);
  let task_form =
    use_state(|| None::<TaskForm>);
  let form_busy = use_state(|| false);
  let detail_task =
    use_state(|| None::<TaskId>);
  let feed_state =
    use_state(|| None::<FeedState>);
  let comment_draft =
    use_state(String::new);
  let dragging_task =
    use_state(|| None::<TaskId>);
  let drag_over_lane =
    use_state(|| None::<TaskStatus>);

  {
    let sync = sync.clone();
    use_effect_with((), move |_| {
      tracing::info!("initial task load");
      spawn_local(async move {
        let _ = sync.refresh().await;
      });
      || ()
    });
  }

  let on_nav = {
    let page = page.clone();
    Callback::from(move |next: Page| {
      tracing::debug!(?next, "navigating");
      save_page(next);
      page.set(next);
    })
  };

  let on_filter = {
    let sync = sync.clone();
    let page = page.clone();
    Callback::from(
      move |assignee: Option<String>| {
        match assignee {
          | Some(id) => {
            sync.set_filter(Some(
              TaskFilter::Assignee(id)
            ));
            // Filters only make sense on
            // the board.
            save_page(Page::Board);
            page.set(Page::Board);
          }
          | None => sync.set_filter(None)
        }
      }
    )
  };

  let on_add = {
    let task_form = task_form.clone();
    let form_busy = form_busy.clone();
    let config = config.clone();
    Callback::from(move |()| {
      form_busy.set(false);
      task_form
        .set(Some(TaskForm::blank(&config)));
    })
  };

  let on_edit = {
    let task_form = task_form.clone();
    let form_busy = form_busy.clone();
    let sync = sync.clone();
    Callback::from(move |id: TaskId| {
      match sync.task(id) {
        | Some(task) => {
          form_busy.set(false);
          task_form.set(Some(
            TaskForm::from_task(&task)
          ));
        }
        | None => {
          tracing::warn!(
            task_id = id,
            "edit requested for unknown task"
          );
        }
      }
    })
  };

  let on_delete = {
    let sync = sync.clone();
    Callback::from(move |id: TaskId| {
      if !confirm(DELETE_CONFIRM) {
        tracing::info!(
          task_id = id,
          "task deletion canceled"
        );
        return;
      }
      let sync = sync.clone();
      spawn_local(async move {
        if sync.delete(id).await.is_err() {
          alert(DELETE_FAILED);
        }
      });
    })
  };

  let on_move = {
    let sync = sync.clone();
    Callback::from(
      move |(id, status): (
        TaskId,
        TaskStatus
      )| {
        let sync = sync.clone();
        spawn_local(async move {
          // Failures are logged; the card
          // stays where it was rendered.
          let _ =
            sync.move_task(id, status).await;
        });
      }
    )
  };

  let on_drag_start = {
    let dragging_task =
      dragging_task.clone();
    Callback::from(move |id: TaskId| {
      dragging_task.set(Some(id));
    })
  };

  let on_drag_end = {
    let dragging_task =
      dragging_task.clone();
    let drag_over_lane =
      drag_over_lane.clone();
    Callback::from(move |()| {
      dragging_task.set(None);
      drag_over_lane.set(None);
    })
  };

  let on_drag_over_lane = {
    let drag_over_lane =
      drag_over_lane.clone();
    Callback::from(move |lane: TaskStatus| {
      if *drag_over_lane != Some(lane) {
        drag_over_lane.set(Some(lane));
      }
    })
  };

  let on_open = {
    let detail_task = detail_task.clone();
    let feed_state = feed_state.clone();
    let comment_draft =
      comment_draft.clone();
    let sync = sync.clone();
    let config = config.clone();
    Callback::from(move |id: TaskId| {
      detail_task.set(Some(id));
      comment_draft.set(String::new());
      feed_state.set(Some(FeedState {
        task_id: id,
        feed:    ActivityFeed::Loading
      }));
      load_feed(
        &sync,
        &config,
        id,
        feed_state.clone()
      );
    })
  };

  let on_close_detail = {
    let detail_task = detail_task.clone();
    let feed_state = feed_state.clone();
    let comment_draft =
      comment_draft.clone();
    Callback::from(move |()| {
      detail_task.set(None);
      feed_state.set(None);
      comment_draft.set(String::new());
    })
  };

  let on_comment_input = {
    let comment_draft =
      comment_draft.clone();
    Callback::from(move |text: String| {
      comment_draft.set(text);
    })
  };

  let on_comment_submit = {
    let sync = sync.clone();
    let config = config.clone();
    let detail_task = detail_task.clone();
    let comment_draft =
      comment_draft.clone();
    let feed_state = feed_state.clone();
    Callback::from(move |()| {
      let open_task = *detail_task;
      let text = (*comment_draft).clone();
      let sync = sync.clone();
      let config = config.clone();
      let comment_draft =
        comment_draft.clone();
      let feed_state = feed_state.clone();
      spawn_local(async move {
        match sync
          .add_comment(
            open_task,
            &text,
            &config.comment_author
          )
          .await
        {
          | Ok(()) => {
            comment_draft.set(String::new());
            if let Some(task_id) = open_task {
              load_feed(
                &sync,
                &config,
                task_id,
                feed_state
              );
            }
          }
          | Err(SyncError::Validation(
            reason
          )) => {
            tracing::debug!(
              %reason,
              "comment not sent"
            );
          }
          | Err(SyncError::Gateway(_)) => {}
        }
      });
    })
  };

  let on_form_change = {
    let task_form = task_form.clone();
    Callback::from(move |form: TaskForm| {
      task_form.set(Some(form));
    })
  };

  let on_form_close = {
    let task_form = task_form.clone();
    let form_busy = form_busy.clone();
    Callback::from(move |()| {
      form_busy.set(false);
      task_form.set(None);
    })
  };

  let on_form_submit = {
    let sync = sync.clone();
    let task_form = task_form.clone();
    let form_busy = form_busy.clone();
    Callback::from(move |form: TaskForm| {
      if *form_busy {
        tracing::debug!(
          "save already in flight"
        );
        return;
      }
      form_busy.set(true);
      let sync = sync.clone();
      let task_form = task_form.clone();
      let form_busy = form_busy.clone();
      spawn_local(async move {
        match sync.save(&form).await {
          | Ok(()) => task_form.set(None),
          | Err(SyncError::Validation(
            FormError::MissingTitle
          )) => alert(TITLE_REQUIRED),
          | Err(SyncError::Validation(
            FormError::UnrecognizedStatus
          )) => alert(STATUS_REQUIRED),
          | Err(SyncError::Validation(
            FormError::UnrecognizedPriority
          )) => alert(PRIORITY_REQUIRED),
          | Err(err) => {
            tracing::error!(
              error = %err,
              "task not saved"
            );
            alert(SAVE_FAILED);
          }
        }
        form_busy.set(false);
      });
    })
  };

  let now = Local::now().naive_local();
  let store = sync.store();
  let dashboard_view = DashboardView::build(
    store.tasks(),
    now,
    &config
  );
  let board_view = BoardView::build(
    &store.visible_tasks(),
    now,
    &config
  );
  let active_filter =
    store.filter().map(|filter| {
      match filter {
        | TaskFilter::Assignee(id) => {
          id.clone()
        }
      }
    });
  let detail_view = (*detail_task)
    .and_then(|id| store.get_by_id(id))
    .map(|task| {
      DetailView::build(task, now, &config)
    });
  let loaded = store.is_loaded();
  drop(store);

  let feed = match (&*feed_state, *detail_task) {
    | (Some(state), Some(open))
      if state.task_id == open =>
    {
      state.feed.clone()
    }
    | _ => ActivityFeed::Loading
  };

  html! {
      <div class="app-shell">
          <Sidebar
              page={*page}
              on_nav={on_nav}
              assignees={config.assignees.clone()}
              active_filter={active_filter}
              on_filter={on_filter}
          />
          <main class="main-content">
              <PageHeader page={*page} on_add={on_add} />
              {
                  if loaded {
                      html! {}
                  } else {
                      html! { <div class="loading-banner">{ "載入中..." }</div> }
                  }
              }
              <div id="dashboardPage" class="page" hidden={*page != Page::Dashboard}>
                  <Dashboard
                      view={dashboard_view}
                      on_edit={on_edit.clone()}
                      on_delete={on_delete.clone()}
                  />
              </div>
              <div id="boardPage" class="page" hidden={*page != Page::Board}>
                  <KanbanBoard
                      board={board_view}
                      dragging_task={*dragging_task}
                      drag_over_lane={*drag_over_lane}
                      on_move={on_move}
                      on_drag_start={on_drag_start}
                      on_drag_end={on_drag_end}
                      on_drag_over_lane={on_drag_over_lane}
                      on_open={on_open}
                      on_edit={on_edit}
                      on_delete={on_delete}
                  />
              </div>
          </main>
          {
              match (*task_form).clone() {
                  Some(form) => html! {
                      <TaskModal
                          form={form}
                          assignees={config.assignees.clone()}
                          busy={*form_busy}
                          on_change={on_form_change}
                          on_submit={on_form_submit}
                          on_close={on_form_close}
                      />
                  },
                  None => html! {},
              }
          }
          {
              match detail_view {
                  Some(view) => html! {
                      <DetailModal
                          view={view}
                          feed={feed}
                          comment={(*comment_draft).clone()}
                          on_comment_input={on_comment_input}
                          on_comment_submit={on_comment_submit}
                          on_close={on_close_detail}
                      />
                  },
                  None => html! {},
              }
          }
      </div>
  }
}
