use std::time::Duration;

use anyhow::{
  Context,
  anyhow
};
use tracing::{
  debug,
  warn
};

pub const DEFAULT_THEME_KEY: &str = "theme";
pub const DEFAULT_ITEMS_KEY: &str =
  "todo-items";
pub const DEFAULT_DARK_CLASS: &str =
  "dark-theme";
pub const DEFAULT_DELETE_DELAY_MS: u64 =
  400;
pub const DEFAULT_CLEAR_PROMPT: &str =
  "Delete all tasks?";

/// Widget settings. Every field has a default; hosts override individual
/// keys with [`Config::apply_overrides`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  pub theme_key:    String,
  pub items_key:    String,
  pub dark_class:   String,
  pub delete_delay: Duration,
  pub clear_prompt: String
}

impl Default for Config {
  fn default() -> Self {
    Self {
      theme_key:    DEFAULT_THEME_KEY
        .to_string(),
      items_key:    DEFAULT_ITEMS_KEY
        .to_string(),
      dark_class:   DEFAULT_DARK_CLASS
        .to_string(),
      delete_delay: Duration::from_millis(
        DEFAULT_DELETE_DELAY_MS
      ),
      clear_prompt: DEFAULT_CLEAR_PROMPT
        .to_string()
    }
  }
}

impl Config {
  /// Applies `(key, value)` pairs. Keys may carry an `rc-` prefix. Unknown
  /// keys are skipped with a warning; a malformed value for a known key is
  /// an error.
  #[tracing::instrument(skip(
    self, overrides
  ))]
  pub fn apply_overrides<I>(
    &mut self,
    overrides: I
  ) -> anyhow::Result<()>
  where
    I: IntoIterator<
      Item = (String, String)
    >
  {
    for (k, v) in overrides {
      let key = k
        .strip_prefix("rc-")
        .unwrap_or(&k);
      let value = v.trim();
      debug!(key = %key, value = %value, "applying override");

      match key {
        | "theme-key" => {
          self.theme_key =
            non_empty(key, value)?;
        }
        | "items-key" => {
          self.items_key =
            non_empty(key, value)?;
        }
        | "dark-class" => {
          self.dark_class =
            non_empty(key, value)?;
        }
        | "delete-delay-ms" => {
          let ms = value
            .parse::<u64>()
            .with_context(|| {
              format!(
                "invalid {key}: \
                 {value:?}"
              )
            })?;
          self.delete_delay =
            Duration::from_millis(ms);
        }
        | "clear-prompt" => {
          self.clear_prompt =
            non_empty(key, value)?;
        }
        | _ => {
          warn!(key = %key, "unknown config key; ignoring");
        }
      }
    }

    if self.theme_key == self.items_key {
      return Err(anyhow!(
        "theme and items must use \
         different storage keys, both \
         are {:?}",
        self.theme_key
      ));
    }

    Ok(())
  }
}

fn non_empty(
  key: &str,
  value: &str
) -> anyhow::Result<String> {
  if value.is_empty() {
    Err(anyhow!("{key} must not be empty"))
  } else {
    Ok(value.to_string())
  }
}

#[cfg(test)]
mod tests {
  use std::time::Duration;

  use super::Config;

  fn pairs(
    raw: &[(&str, &str)]
  ) -> Vec<(String, String)> {
    raw
      .iter()
      .map(|(k, v)| {
        (k.to_string(), v.to_string())
      })
      .collect()
  }

  #[test]
  fn defaults_match_the_browser_layout() {
    let cfg = Config::default();
    assert_eq!(cfg.theme_key, "theme");
    assert_eq!(cfg.items_key, "todo-items");
    assert_eq!(cfg.dark_class, "dark-theme");
    assert_eq!(
      cfg.delete_delay,
      Duration::from_millis(400)
    );
  }

  #[test]
  fn overrides_accept_prefixed_and_bare_keys() {
    let mut cfg = Config::default();
    cfg
      .apply_overrides(pairs(&[
        ("rc-delete-delay-ms", " 250 "),
        ("items-key", "my-items"),
        ("rc-not-a-key", "whatever"),
      ]))
      .expect("overrides");

    assert_eq!(
      cfg.delete_delay,
      Duration::from_millis(250)
    );
    assert_eq!(cfg.items_key, "my-items");
  }

  #[test]
  fn malformed_values_are_rejected() {
    let mut cfg = Config::default();
    let err = cfg
      .apply_overrides(pairs(&[(
        "delete-delay-ms",
        "soon"
      )]))
      .expect_err("bad number");
    assert!(
      format!("{err:#}")
        .contains("delete-delay-ms")
    );

    assert!(
      Config::default()
        .apply_overrides(pairs(&[(
          "dark-class",
          "  "
        )]))
        .is_err()
    );
  }

  #[test]
  fn storage_keys_must_differ() {
    let mut cfg = Config::default();
    assert!(
      cfg
        .apply_overrides(pairs(&[(
          "theme-key",
          "todo-items"
        )]))
        .is_err()
    );
  }
}
