use std::collections::BTreeMap;

use tasklist_core::Config;

const CONFIG_OVERRIDES_STORAGE_KEY: &str =
  "tasklist.config.overrides";
const BUNDLED_CONFIG: &str =
  include_str!("../../tasklist.toml");

pub(super) fn load_config() -> Config {
  let mut config =
    match Config::from_toml_str(
      BUNDLED_CONFIG
    ) {
      | Ok(config) => config,
      | Err(error) => {
        tracing::error!(
          error = %format!("{error:#}"),
          "bundled config invalid; \
           using defaults"
        );
        Config::default()
      }
    };

  let overrides = load_config_overrides();
  if !overrides.is_empty() {
    tracing::info!(
      count = overrides.len(),
      "applying stored config \
       overrides"
    );
    config.apply_overrides(overrides);
  }
  config
}

fn load_config_overrides()
-> BTreeMap<String, String> {
  let stored = web_sys::window()
    .and_then(|window| {
      window
        .local_storage()
        .ok()
        .flatten()
    })
    .and_then(|storage| {
      storage
        .get_item(
          CONFIG_OVERRIDES_STORAGE_KEY
        )
        .ok()
        .flatten()
    });

  let Some(raw) = stored else {
    return BTreeMap::new();
  };

  match serde_json::from_str::<
    BTreeMap<String, String>
  >(&raw)
  {
    | Ok(map) => map,
    | Err(error) => {
      tracing::error!(
        %error,
        "failed parsing config \
         overrides from local storage"
      );
      BTreeMap::new()
    }
  }
}
