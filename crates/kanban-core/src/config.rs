use anyhow::Context;
use serde::Deserialize;
use tracing::{
  debug,
  warn
};

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct AssigneeDef {
  pub id:     String,
  pub name:   String,
  pub avatar: String
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct DashboardConfig {
  pub highlight_limit: usize
}

impl Default for DashboardConfig {
  fn default() -> Self {
    DashboardConfig {
      highlight_limit: 3
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct CardConfig {
  pub description_preview_chars: usize,
  pub tag_preview:               usize
}

impl Default for CardConfig {
  fn default() -> Self {
    CardConfig {
      description_preview_chars: 60,
      tag_preview:               2
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct BoardConfig {
  pub api_base:         String,
  /// Author stamped on new comments
  /// until a real session exists.
  pub comment_author:   String,
  pub default_assignee: String,
  pub fallback_avatar:  String,
  pub fallback_name:    String,
  pub dashboard:        DashboardConfig,
  pub cards:            CardConfig,
  pub assignees:        Vec<AssigneeDef>
}

impl Default for BoardConfig {
  fn default() -> Self {
    BoardConfig {
      api_base:         "/api"
        .to_string(),
      comment_author:   "user"
        .to_string(),
      default_assignee: "user"
        .to_string(),
      fallback_avatar:  "U".to_string(),
      fallback_name:    "用戶".to_string(),
      dashboard:
        DashboardConfig::default(),
      cards:            CardConfig::default(
      ),
      assignees:        vec![
        AssigneeDef {
          id:     "user".to_string(),
          name:   "用戶".to_string(),
          avatar: "U".to_string()
        },
        AssigneeDef {
          id:     "joe".to_string(),
          name:   "Joe".to_string(),
          avatar: "J".to_string()
        },
      ]
    }
  }
}

impl BoardConfig {
  pub fn from_toml_str(
    raw: &str
  ) -> anyhow::Result<Self> {
    let mut cfg: BoardConfig =
      toml::from_str(raw).context(
        "failed to parse board config"
      )?;
    cfg.api_base = cfg
      .api_base
      .trim_end_matches('/')
      .to_string();
    debug!(
      api_base = %cfg.api_base,
      assignees = cfg.assignees.len(),
      "loaded board config"
    );
    Ok(cfg)
  }

  /// Parses `raw`, falling back to the
  /// built-in defaults when it is broken.
  #[must_use]
  pub fn from_toml_or_default(
    raw: &str
  ) -> Self {
    match Self::from_toml_str(raw) {
      | Ok(cfg) => cfg,
      | Err(err) => {
        warn!(
          error = %format!("{err:#}"),
          "invalid board config; using \
           defaults"
        );
        BoardConfig::default()
      }
    }
  }

  pub fn assignee(
    &self,
    id: &str
  ) -> Option<&AssigneeDef> {
    self
      .assignees
      .iter()
      .find(|assignee| assignee.id == id)
  }

  pub fn avatar_for(
    &self,
    id: &str
  ) -> &str {
    self
      .assignee(id)
      .map_or(
        self.fallback_avatar.as_str(),
        |assignee| {
          assignee.avatar.as_str()
        }
      )
  }

  pub fn display_name_for(
    &self,
    id: &str
  ) -> &str {
    self.assignee(id).map_or(
      self.fallback_name.as_str(),
      |assignee| assignee.name.as_str()
    )
  }
}
