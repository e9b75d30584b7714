use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use crate::storage::Page;

#[derive(Properties, PartialEq)]
pub struct PageHeaderProps {
  pub page:   Page,
  pub on_add: Callback<()>
}

#[function_component(PageHeader)]
pub fn page_header(
  props: &PageHeaderProps
) -> Html {
  let onclick = {
    let on_add = props.on_add.clone();
    Callback::from(move |_| on_add.emit(()))
  };

  html! {
      <header class="page-header">
          <div>
              <h1 id="pageTitle">{ props.page.title() }</h1>
              <div class="breadcrumb">
                  <span>{ "首頁" }</span>
                  <span class="breadcrumb-sep">{ "/" }</span>
                  <span id="breadcrumbCurrent">{ props.page.title() }</span>
              </div>
          </div>
          <button class="btn btn-primary" {onclick}>{ "＋ 新增任務" }</button>
      </header>
  }
}
