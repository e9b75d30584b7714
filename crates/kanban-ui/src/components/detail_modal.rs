use kanban_core::detail::{
  ActivityFeed,
  DetailView
};
use web_sys::{
  HtmlTextAreaElement,
  InputEvent
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  TargetCast,
  classes,
  function_component,
  html
};

use super::priority_class;

#[derive(Properties, PartialEq)]
pub struct DetailModalProps {
  pub view:              DetailView,
  pub feed:              ActivityFeed,
  pub comment:           String,
  pub on_comment_input:  Callback<String>,
  pub on_comment_submit: Callback<()>,
  pub on_close:          Callback<()>
}

fn render_feed(feed: &ActivityFeed) -> Html {
  if let Some(placeholder) = feed.placeholder()
  {
    return html! {
        <div class="empty-state">{ placeholder }</div>
    };
  }
  let ActivityFeed::Loaded(items) = feed
  else {
    return html! {};
  };
  html! {
      <>
          {
              for items.iter().map(|item| html! {
                  <div class="activity-item" key={item.id}>
                      <div class="activity-meta">
                          <span class="activity-author">{ &item.author }</span>
                          <span class="activity-time">{ &item.time }</span>
                      </div>
                      <div class="activity-content">{ &item.content }</div>
                  </div>
              })
          }
      </>
  }
}

#[function_component(DetailModal)]
pub fn detail_modal(
  props: &DetailModalProps
) -> Html {
  let view = &props.view;

  let on_backdrop = {
    let on_close = props.on_close.clone();
    Callback::from(move |_: MouseEvent| {
      on_close.emit(());
    })
  };

  let oninput = {
    let on_comment_input =
      props.on_comment_input.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlTextAreaElement =
        e.target_unchecked_into();
      on_comment_input.emit(input.value());
    })
  };

  let on_submit = {
    let on_comment_submit =
      props.on_comment_submit.clone();
    Callback::from(move |_: MouseEvent| {
      on_comment_submit.emit(());
    })
  };

  html! {
      <div class="modal-backdrop active" id="detailModal" onclick={on_backdrop.clone()}>
          <div class="modal modal-lg" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
              <div class="modal-header">
                  <h2 id="detailTitle">{ &view.title }</h2>
                  <button class="modal-close" type="button" onclick={on_backdrop}>{ "✕" }</button>
              </div>
              <div id="detailContent" class="detail-content">
                  <div class="detail-description">{ &view.description }</div>
                  <div class="detail-meta">
                      <span class={classes!("priority-badge", priority_class(view.priority))}>
                          { &view.priority_label }
                      </span>
                      <span class="assignee-avatar">{ &view.avatar }</span>
                      {
                          match &view.due {
                              Some(due) => html! {
                                  <span class={classes!("due-date", due.overdue.then_some("overdue"))}>
                                      { format!("截止：{}", due.label) }
                                  </span>
                              },
                              None => html! {},
                          }
                      }
                  </div>
                  {
                      if view.tags.is_empty() {
                          html! {}
                      } else {
                          html! {
                              <div class="task-tags">
                                  { for view.tags.iter().map(|tag| html! { <span class="tag">{ tag }</span> }) }
                              </div>
                          }
                      }
                  }
              </div>
              <div class="activity-section">
                  <div class="panel-title">{ "活動記錄" }</div>
                  <div id="activitiesList" class="activity-list">
                      { render_feed(&props.feed) }
                  </div>
                  <div class="activity-form">
                      <textarea
                          id="newActivity"
                          placeholder="新增評論..."
                          value={props.comment.clone()}
                          {oninput}
                      />
                      <button class="btn btn-primary" type="button" onclick={on_submit}>
                          { "新增評論" }
                      </button>
                  </div>
              </div>
          </div>
      </div>
  }
}
