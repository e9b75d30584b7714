use kanban_core::board::BoardView;
use kanban_shared::{
  TaskId,
  TaskStatus
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::KanbanColumn;

#[derive(Properties, PartialEq)]
pub struct KanbanBoardProps {
  pub board:             BoardView,
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

#[function_component(KanbanBoard)]
pub fn kanban_board(
  props: &KanbanBoardProps
) -> Html {
  html! {
      <div class="kanban-board">
          {
              if props.board.hidden > 0 {
                  html! {
                      <div class="board-warning">
                          { format!("{} 個任務的狀態無法辨識，未顯示於看板", props.board.hidden) }
                      </div>
                  }
              } else {
                  html! {}
              }
          }
          <div class="kanban-columns">
              {
                  for props.board.columns.iter().map(|column| {
                      html! {
                          <KanbanColumn
                              key={column.list_id.clone()}
                              column={column.clone()}
                              dragging_task={props.dragging_task}
                              drag_over_lane={props.drag_over_lane}
                              on_move={props.on_move.clone()}
                              on_drag_start={props.on_drag_start.clone()}
                              on_drag_end={props.on_drag_end.clone()}
                              on_drag_over_lane={props.on_drag_over_lane.clone()}
                              on_open={props.on_open.clone()}
                              on_edit={props.on_edit.clone()}
                              on_delete={props.on_delete.clone()}
                          />
                      }
                  })
              }
          </div>
      </div>
  }
}
