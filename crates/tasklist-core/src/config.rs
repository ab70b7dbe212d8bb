use anyhow::{
  Context,
  anyhow
};
use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  debug,
  warn
};

use crate::source::{
  DEFAULT_SOURCE_LIMIT,
  DEFAULT_SOURCE_URL
};

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(default)]
pub struct SourceConfig {
  pub url:   String,
  pub limit: usize
}

impl Default for SourceConfig {
  fn default() -> Self {
    Self {
      url:   DEFAULT_SOURCE_URL
        .to_string(),
      limit: DEFAULT_SOURCE_LIMIT
    }
  }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Default,
  Serialize,
  Deserialize,
)]
#[serde(default)]
pub struct Config {
  pub source: SourceConfig
}

impl Config {
  /// Missing tables and keys fall back to the defaults.
  #[tracing::instrument(skip(text))]
  pub fn from_toml_str(
    text: &str
  ) -> anyhow::Result<Self> {
    let cfg: Config = toml::from_str(text)
      .context(
        "failed to parse tasklist \
         config"
      )?;
    debug!(?cfg, "loaded config");
    Ok(cfg)
  }

  /// Applies `key=value` style overrides. Bad entries are logged and
  /// skipped.
  #[tracing::instrument(skip(
    self, overrides
  ))]
  pub fn apply_overrides<I>(
    &mut self,
    overrides: I
  ) where
    I: IntoIterator<
      Item = (String, String)
    >
  {
    for (key, v) in overrides {
      match self.set(&key, &v) {
        | Ok(()) => {
          debug!(key = %key, value = %v, "applying override");
        }
        | Err(err) => {
          warn!(key = %key, error = %err, "ignoring config override");
        }
      }
    }
  }

  pub fn set(
    &mut self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    let value = value.trim();
    match key {
      | "source.url" => {
        if value.is_empty() {
          return Err(anyhow!(
            "source.url cannot be empty"
          ));
        }
        self.source.url =
          value.to_string();
      }
      | "source.limit" => {
        self.source.limit = value
          .parse::<usize>()
          .with_context(|| {
            format!(
              "invalid source.limit: \
               {value}"
            )
          })?;
      }
      | other => {
        return Err(anyhow!(
          "unknown config key: {other}"
        ));
      }
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_text_gives_defaults() {
    let cfg = Config::from_toml_str("")
      .expect("parse empty config");
    assert_eq!(cfg, Config::default());
    assert_eq!(
      cfg.source.url,
      DEFAULT_SOURCE_URL
    );
    assert_eq!(cfg.source.limit, 5);
  }

  #[test]
  fn partial_tables_keep_other_defaults() {
    let cfg = Config::from_toml_str(
      "[source]\nlimit = 8\n"
    )
    .expect("parse config");
    assert_eq!(cfg.source.limit, 8);
    assert_eq!(
      cfg.source.url,
      DEFAULT_SOURCE_URL
    );
  }

  #[test]
  fn invalid_toml_is_an_error() {
    assert!(
      Config::from_toml_str(
        "[source\nurl="
      )
      .is_err()
    );
  }

  #[test]
  fn overrides_apply_and_skip_bad_entries(
  ) {
    let mut cfg = Config::default();
    cfg.apply_overrides(vec![
      (
        "source.limit".to_string(),
        "3".to_string(),
      ),
      (
        "source.url".to_string(),
        "http://localhost:8080/posts"
          .to_string(),
      ),
      (
        "source.limit".to_string(),
        "lots".to_string(),
      ),
      (
        "theme".to_string(),
        "night".to_string(),
      ),
    ]);

    assert_eq!(cfg.source.limit, 3);
    assert_eq!(
      cfg.source.url,
      "http://localhost:8080/posts"
    );
  }

  #[test]
  fn task_floor_is_not_configurable() {
    let mut cfg = Config::default();
    assert!(
      cfg.set("tasks.min_tasks", "0").is_err()
    );
    assert!(
      cfg.set("rc.source.limit", "9").is_err()
    );
    cfg.apply_overrides(vec![(
      "tasks.min_tasks".to_string(),
      "0".to_string()
    )]);
    assert_eq!(cfg, Config::default());

    let parsed = Config::from_toml_str(
      "[tasks]\nmin_tasks = 0\n"
    )
    .expect("unknown tables are ignored");
    assert_eq!(parsed, Config::default());
  }
}
