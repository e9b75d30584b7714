use kanban_core::card::CardView;
use kanban_shared::TaskId;
use web_sys::DragEvent;
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

use super::TaskCardBody;

#[derive(Properties, PartialEq)]
pub struct KanbanCardProps {
  pub card:          CardView,
  pub is_dragging:   bool,
  pub on_open:       Callback<TaskId>,
  pub on_edit:       Callback<TaskId>,
  pub on_delete:     Callback<TaskId>,
  pub on_drag_start: Callback<TaskId>,
  pub on_drag_end:   Callback<()>
}

#[function_component(KanbanCard)]
pub fn kanban_card(
  props: &KanbanCardProps
) -> Html {
  let task_id = props.card.id;
  let ondragstart = {
    let on_drag_start =
      props.on_drag_start.clone();
    Callback::from(
      move |event: DragEvent| {
        if let Some(data_transfer) =
          event.data_transfer()
        {
          if let Err(error) = data_transfer
            .set_data(
              "text/plain",
              &task_id.to_string()
            )
          {
            tracing::warn!(
              ?error,
              task_id,
              "failed writing drag data"
            );
          }
          data_transfer
            .set_effect_allowed("move");
        }
        on_drag_start.emit(task_id);
      }
    )
  };

  let ondragend = {
    let on_drag_end =
      props.on_drag_end.clone();
    Callback::from(move |_| {
      on_drag_end.emit(());
    })
  };

  let onclick = {
    let on_open = props.on_open.clone();
    Callback::from(move |_| {
      on_open.emit(task_id);
    })
  };

  html! {
      <div
          class={classes!("task-card", props.is_dragging.then_some("dragging"))}
          data-task-id={task_id.to_string()}
          draggable="true"
          {ondragstart}
          {ondragend}
          {onclick}
      >
          <TaskCardBody
              card={props.card.clone()}
              on_edit={props.on_edit.clone()}
              on_delete={props.on_delete.clone()}
          />
      </div>
  }
}
