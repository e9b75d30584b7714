use kanban_core::card::CardView;
use kanban_core::dashboard::{
  DashboardView,
  HIGH_PRIORITY_PLACEHOLDER,
  StatusPercentages,
  UPCOMING_PLACEHOLDER
};
use kanban_shared::TaskId;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskCardBody;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
  pub view:      DashboardView,
  pub on_edit:   Callback<TaskId>,
  pub on_delete: Callback<TaskId>
}

type PercentCell = Option<(&'static str, u32)>;

/// Percent badges for the three status
/// cards. No tasks means no badges at all.
fn percent_cells(
  percentages: Option<StatusPercentages>
) -> [PercentCell; 3] {
  match percentages {
    | Some(p) => [
      Some(("statTodoPercent", p.todo)),
      Some((
        "statInProgressPercent",
        p.in_progress
      )),
      Some(("statDonePercent", p.done))
    ],
    | None => [None, None, None]
  }
}

fn stat_card(
  label: &str,
  id: &'static str,
  value: usize,
  percent: PercentCell
) -> Html {
  html! {
      <div class="stat-card">
          <div class="stat-label">{ label }</div>
          <div class="stat-value" id={id}>{ value }</div>
          {
              match percent {
                  Some((percent_id, value)) => html! {
                      <div class="stat-percent" id={percent_id}>{ format!("{value}%") }</div>
                  },
                  None => html! {},
              }
          }
      </div>
  }
}

fn highlight_list(
  id: &'static str,
  cards: &[CardView],
  placeholder: &'static str,
  props: &DashboardProps
) -> Html {
  html! {
      <div class="highlight-list" id={id}>
          {
              if cards.is_empty() {
                  html! { <div class="empty-state">{ placeholder }</div> }
              } else {
                  html! {
                      <>
                          {
                              for cards.iter().map(|card| html! {
                                  <div class="task-card" key={card.id}>
                                      <TaskCardBody
                                          card={card.clone()}
                                          on_edit={props.on_edit.clone()}
                                          on_delete={props.on_delete.clone()}
                                      />
                                  </div>
                              })
                          }
                      </>
                  }
              }
          }
      </div>
  }
}

#[function_component(Dashboard)]
pub fn dashboard(
  props: &DashboardProps
) -> Html {
  let view = &props.view;
  let [todo_pct, doing_pct, done_pct] =
    percent_cells(view.percentages);

  html! {
      <section class="dashboard">
          <div class="stats-grid">
              { stat_card("總任務", "statTotal", view.total, None) }
              {
                  stat_card(
                      "待辦",
                      "statTodo",
                      view.counts.todo,
                      todo_pct,
                  )
              }
              {
                  stat_card(
                      "進行中",
                      "statInProgress",
                      view.counts.in_progress,
                      doing_pct,
                  )
              }
              {
                  stat_card(
                      "已完成",
                      "statDone",
                      view.counts.done,
                      done_pct,
                  )
              }
          </div>
          <div class="dashboard-panels">
              <div class="panel">
                  <div class="panel-title">{ "高優先級任務" }</div>
                  {
                      highlight_list(
                          "highPriorityTasks",
                          &view.high_priority,
                          HIGH_PRIORITY_PLACEHOLDER,
                          props,
                      )
                  }
              </div>
              <div class="panel">
                  <div class="panel-title">{ "即將到期" }</div>
                  {
                      highlight_list(
                          "upcomingTasks",
                          &view.upcoming,
                          UPCOMING_PLACEHOLDER,
                          props,
                      )
                  }
              </div>
          </div>
      </section>
  }
}
