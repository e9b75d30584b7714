use kanban_core::config::AssigneeDef;
use kanban_core::form::TaskForm;
use kanban_core::format::{
  priority_label,
  status_label
};
use kanban_shared::{
  TaskPriority,
  TaskStatus
};
use web_sys::{
  HtmlInputElement,
  HtmlSelectElement,
  HtmlTextAreaElement,
  InputEvent,
  SubmitEvent
};
use yew::{
  Callback,
  Event,
  Html,
  MouseEvent,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskModalProps {
  pub form:      TaskForm,
  pub assignees: Vec<AssigneeDef>,
  pub busy:      bool,
  pub on_change: Callback<TaskForm>,
  pub on_submit: Callback<TaskForm>,
  pub on_close:  Callback<()>
}

/// Emits a copy of the form with one field
/// replaced.
fn edit_field<E>(
  props: &TaskModalProps,
  read: fn(&E) -> String,
  apply: fn(&mut TaskForm, String)
) -> Callback<E>
where
  E: 'static
{
  let form = props.form.clone();
  let on_change = props.on_change.clone();
  Callback::from(move |event: E| {
    let mut next = form.clone();
    apply(&mut next, read(&event));
    on_change.emit(next);
  })
}

fn input_value(event: &InputEvent) -> String {
  let input: HtmlInputElement =
    event.target_unchecked_into();
  input.value()
}

fn textarea_value(
  event: &InputEvent
) -> String {
  let input: HtmlTextAreaElement =
    event.target_unchecked_into();
  input.value()
}

fn select_value(event: &Event) -> String {
  let select: HtmlSelectElement =
    event.target_unchecked_into();
  select.value()
}

/// Shown while the task carries a value
/// the board cannot send back; the user
/// has to pick a real one.
fn unknown_option(active: bool) -> Html {
  if active {
    html! {
        <option value="" selected=true disabled=true>{ "請選擇" }</option>
    }
  } else {
    html! {}
  }
}

#[function_component(TaskModal)]
pub fn task_modal(
  props: &TaskModalProps
) -> Html {
  let form = &props.form;

  let on_backdrop = {
    let on_close = props.on_close.clone();
    Callback::from(move |_: MouseEvent| {
      on_close.emit(());
    })
  };
  let on_cancel = on_backdrop.clone();

  let onsubmit = {
    let form = form.clone();
    let on_submit = props.on_submit.clone();
    Callback::from(move |e: SubmitEvent| {
      e.prevent_default();
      on_submit.emit(form.clone());
    })
  };

  let known_assignee = props
    .assignees
    .iter()
    .any(|assignee| assignee.id == form.assignee);

  html! {
      <div class="modal-backdrop active" id="taskModal" onclick={on_backdrop}>
          <div class="modal" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
              <div class="modal-header">
                  <h2 id="modalTitle">{ form.heading() }</h2>
                  <button class="modal-close" type="button" onclick={on_cancel.clone()}>{ "✕" }</button>
              </div>
              <form id="taskForm" {onsubmit}>
                  <input
                      type="hidden"
                      id="taskId"
                      value={form.task_id.map(|id| id.to_string()).unwrap_or_default()}
                  />
                  <div class="field">
                      <label for="taskTitle">{ "任務標題" }</label>
                      <input
                          id="taskTitle"
                          required=true
                          value={form.title.clone()}
                          oninput={edit_field(props, input_value, |form, value| form.title = value)}
                      />
                  </div>
                  <div class="field">
                      <label for="taskDescription">{ "描述" }</label>
                      <textarea
                          id="taskDescription"
                          value={form.description.clone()}
                          oninput={edit_field(props, textarea_value, |form, value| form.description = value)}
                      />
                  </div>
                  <div class="field-row">
                      <div class="field">
                          <label for="taskStatus">{ "狀態" }</label>
                          <select
                              id="taskStatus"
                              onchange={edit_field(props, select_value, |form, value| {
                                  if let Some(status) = TaskStatus::parse(&value) {
                                      form.status = status;
                                  }
                              })}
                          >
                              {
                                  unknown_option(form.status == TaskStatus::Unrecognized)
                              }
                              {
                                  for TaskStatus::LANES.iter().map(|status| html! {
                                      <option value={status.as_str()} selected={form.status == *status}>
                                          { status_label(*status) }
                                      </option>
                                  })
                              }
                          </select>
                      </div>
                      <div class="field">
                          <label for="taskPriority">{ "優先級" }</label>
                          <select
                              id="taskPriority"
                              onchange={edit_field(props, select_value, |form, value| {
                                  if let Some(priority) = TaskPriority::parse(&value) {
                                      form.priority = priority;
                                  }
                              })}
                          >
                              {
                                  unknown_option(form.priority == TaskPriority::Unrecognized)
                              }
                              {
                                  for TaskPriority::ALL.iter().map(|priority| html! {
                                      <option value={priority.as_str()} selected={form.priority == *priority}>
                                          { priority_label(*priority) }
                                      </option>
                                  })
                              }
                          </select>
                      </div>
                  </div>
                  <div class="field-row">
                      <div class="field">
                          <label for="taskAssignee">{ "負責人" }</label>
                          <select
                              id="taskAssignee"
                              onchange={edit_field(props, select_value, |form, value| form.assignee = value)}
                          >
                              {
                                  for props.assignees.iter().map(|assignee| html! {
                                      <option value={assignee.id.clone()} selected={form.assignee == assignee.id}>
                                          { &assignee.name }
                                      </option>
                                  })
                              }
                              {
                                  if known_assignee {
                                      html! {}
                                  } else {
                                      html! {
                                          <option value={form.assignee.clone()} selected=true>
                                              { &form.assignee }
                                          </option>
                                      }
                                  }
                              }
                          </select>
                      </div>
                      <div class="field">
                          <label for="taskDueDate">{ "截止日期" }</label>
                          <input
                              id="taskDueDate"
                              type="date"
                              value={form.due_date.clone()}
                              oninput={edit_field(props, input_value, |form, value| form.due_date = value)}
                          />
                      </div>
                  </div>
                  <div class="field">
                      <label for="taskTags">{ "標籤（以逗號分隔）" }</label>
                      <input
                          id="taskTags"
                          value={form.tags.clone()}
                          oninput={edit_field(props, input_value, |form, value| form.tags = value)}
                      />
                  </div>
                  <div class="modal-footer">
                      <button class="btn" type="button" onclick={on_cancel}>{ "取消" }</button>
                      <button class="btn btn-primary" type="submit" disabled={props.busy}>
                          { if props.busy { "儲存中..." } else { "儲存" } }
                      </button>
                  </div>
              </form>
          </div>
      </div>
  }
}
