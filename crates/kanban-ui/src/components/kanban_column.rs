use kanban_core::board::{
  ColumnView,
  status_for_list_id
};
use kanban_shared::{
  TaskId,
  TaskStatus
};
use web_sys::DragEvent;
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

use super::KanbanCard;

#[derive(Properties, PartialEq)]
pub struct KanbanColumnProps {
  pub column:            ColumnView,
  pub dragging_task:     Option<TaskId>,
  pub drag_over_lane:    Option<TaskStatus>,
  pub on_move: Callback<(TaskId, TaskStatus)>,
  pub on_drag_start:     Callback<TaskId>,
  pub on_drag_end:       Callback<()>,
  pub on_drag_over_lane:
    Callback<TaskStatus>,
  pub on_open:           Callback<TaskId>,
  pub on_edit:           Callback<TaskId>,
  pub on_delete:         Callback<TaskId>
}

#[function_component(KanbanColumn)]
pub fn kanban_column(
  props: &KanbanColumnProps
) -> Html {
  let column = &props.column;
  let lane = column.status;
  let is_drop_hint =
    props.drag_over_lane == Some(lane);

  let ondragover = {
    let on_drag_over_lane =
      props.on_drag_over_lane.clone();
    Callback::from(
      move |event: DragEvent| {
        event.prevent_default();
        event.stop_propagation();
        on_drag_over_lane.emit(lane);
      }
    )
  };

  let ondrop = {
    let on_move = props.on_move.clone();
    let on_drag_end =
      props.on_drag_end.clone();
    let list_id = column.list_id.clone();
    Callback::from(
      move |event: DragEvent| {
        event.prevent_default();
        event.stop_propagation();
        // The target lane comes from the
        // receiving list alone.
        let Some(status) =
          status_for_list_id(&list_id)
        else {
          tracing::warn!(
            list_id,
            "drop on unknown list"
          );
          on_drag_end.emit(());
          return;
        };
        if let Some(data_transfer) =
          event.data_transfer()
        {
          match data_transfer
            .get_data("text/plain")
          {
            | Ok(raw_id) => {
              match raw_id
                .trim()
                .parse::<TaskId>()
              {
                | Ok(task_id) => {
                  on_move
                    .emit((task_id, status));
                }
                | Err(_) => {
                  tracing::warn!(
                    raw_id,
                    "failed to parse \
                     dragged task id"
                  );
                }
              }
            }
            | Err(error) => {
              tracing::warn!(
                ?error,
                "failed reading drag data"
              );
            }
          }
        }
        on_drag_end.emit(());
      }
    )
  };

  html! {
      <div class={classes!("kanban-column", is_drop_hint.then_some("drop-hint"))}>
          <div class="column-header">
              <span class="column-title">{ column.title }</span>
              <span class="task-count" id={column.count_id.clone()}>{ column.count() }</span>
          </div>
          <div class="task-list" id={column.list_id.clone()} {ondragover} {ondrop}>
              {
                  for column.cards.iter().map(|card| {
                      html! {
                          <KanbanCard
                              key={card.id}
                              card={card.clone()}
                              is_dragging={props.dragging_task == Some(card.id)}
                              on_open={props.on_open.clone()}
                              on_edit={props.on_edit.clone()}
                              on_delete={props.on_delete.clone()}
                              on_drag_start={props.on_drag_start.clone()}
                              on_drag_end={props.on_drag_end.clone()}
                          />
                      }
                  })
              }
          </div>
      </div>
  }
}
