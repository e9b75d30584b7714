const PAGE_STORAGE_KEY: &str =
  "kanban.page";

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum Page {
  Dashboard,
  Board
}

impl Page {
  pub fn title(self) -> &'static str {
    match self {
      | Page::Dashboard => "儀表板",
      | Page::Board => "任務看板"
    }
  }

  fn storage_value(
    self
  ) -> &'static str {
    match self {
      | Page::Dashboard => "dashboard",
      | Page::Board => "board"
    }
  }
}

fn local_storage()
-> Option<web_sys::Storage> {
  web_sys::window().and_then(|window| {
    window.local_storage().ok().flatten()
  })
}

pub fn load_page() -> Page {
  let stored =
    local_storage().and_then(|storage| {
      storage
        .get_item(PAGE_STORAGE_KEY)
        .ok()
        .flatten()
    });

  match stored.as_deref() {
    | Some("board") => Page::Board,
    | _ => Page::Dashboard
  }
}

pub fn save_page(page: Page) {
  if let Some(storage) = local_storage()
    && let Err(error) = storage.set_item(
      PAGE_STORAGE_KEY,
      page.storage_value()
    )
  {
    tracing::warn!(
      ?error,
      "failed to persist active page"
    );
  }
}
