use kanban_core::card::CardView;
use kanban_shared::TaskId;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

use super::priority_class;

#[derive(Properties, PartialEq)]
pub struct TaskCardBodyProps {
  pub card:      CardView,
  pub on_edit:   Callback<TaskId>,
  pub on_delete: Callback<TaskId>
}

/// Card markup shared by the board and the
/// dashboard highlight lists.
#[function_component(TaskCardBody)]
pub fn task_card_body(
  props: &TaskCardBodyProps
) -> Html {
  let card = &props.card;
  let task_id = card.id;

  // Buttons must not open the detail view
  // of the card they sit on.
  let on_edit = {
    let on_edit = props.on_edit.clone();
    Callback::from(move |e: MouseEvent| {
      e.stop_propagation();
      on_edit.emit(task_id);
    })
  };
  let on_delete = {
    let on_delete = props.on_delete.clone();
    Callback::from(move |e: MouseEvent| {
      e.stop_propagation();
      on_delete.emit(task_id);
    })
  };

  html! {
      <>
          <div class="task-header">
              <div class="task-title">{ &card.title }</div>
              <div class="task-actions">
                  <button class="task-action-btn" title="編輯" onclick={on_edit}>{ "✎" }</button>
                  <button class="task-action-btn danger" title="刪除" onclick={on_delete}>{ "✕" }</button>
              </div>
          </div>
          {
              match &card.description {
                  Some(text) => html! { <div class="task-description">{ text }</div> },
                  None => html! {},
              }
          }
          <div class="task-footer">
              <div class="task-meta">
                  <span class={classes!("priority-badge", priority_class(card.priority))}>
                      { card.priority_label }
                  </span>
                  <span class="assignee-avatar" title={card.assignee_name.clone()}>
                      { &card.avatar }
                  </span>
              </div>
              {
                  match &card.due {
                      Some(due) => html! {
                          <span class={classes!("due-date", due.overdue.then_some("overdue"))}>
                              { &due.label }
                          </span>
                      },
                      None => html! {},
                  }
              }
          </div>
          {
              if card.tags.is_empty() {
                  html! {}
              } else {
                  html! {
                      <div class="task-tags">
                          { for card.tags.iter().map(|tag| html! { <span class="tag">{ tag }</span> }) }
                          {
                              if card.tag_overflow > 0 {
                                  html! { <span class="tag tag-more">{ format!("+{}", card.tag_overflow) }</span> }
                              } else {
                                  html! {}
                              }
                          }
                      </div>
                  }
              }
          }
      </>
  }
}
