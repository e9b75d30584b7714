use kanban_core::config::AssigneeDef;
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

use crate::storage::Page;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
  pub page:          Page,
  pub on_nav:        Callback<Page>,
  pub assignees:     Vec<AssigneeDef>,
  pub active_filter: Option<String>,
  pub on_filter: Callback<Option<String>>
}

#[function_component(Sidebar)]
pub fn sidebar(
  props: &SidebarProps
) -> Html {
  let make_nav = |page: Page| {
    let on_nav = props.on_nav.clone();
    html! {
        <div
            class={classes!("nav-item", (props.page == page).then_some("active"))}
            onclick={move |_| on_nav.emit(page)}
        >
            { page.title() }
        </div>
    }
  };

  let reset = {
    let on_filter = props.on_filter.clone();
    Callback::from(move |_| {
      on_filter.emit(None);
    })
  };

  html! {
      <aside class="sidebar">
          <div class="sidebar-brand">{ "任務管理" }</div>
          <nav class="sidebar-nav">
              { make_nav(Page::Dashboard) }
              { make_nav(Page::Board) }
          </nav>
          <div class="sidebar-section">
              <div class="sidebar-section-title">{ "篩選" }</div>
              <div
                  class={classes!("filter-item", props.active_filter.is_none().then_some("active"))}
                  onclick={reset}
              >
                  { "全部任務" }
              </div>
              {
                  for props.assignees.iter().map(|assignee| {
                      let on_filter = props.on_filter.clone();
                      let id = assignee.id.clone();
                      let active = props.active_filter.as_deref() == Some(assignee.id.as_str());
                      html! {
                          <div
                              class={classes!("filter-item", active.then_some("active"))}
                              onclick={move |_| on_filter.emit(Some(id.clone()))}
                          >
                              <span class="assignee-avatar">{ &assignee.avatar }</span>
                              { &assignee.name }
                          </div>
                      }
                  })
              }
          </div>
      </aside>
  }
}
