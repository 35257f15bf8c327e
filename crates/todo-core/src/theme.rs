use tracing::{
  debug,
  error,
  warn
};

use crate::config::Config;
use crate::storage::KeyValueStore;

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum Theme {
  Light,
  Dark
}

impl Theme {
  pub fn storage_value(
    self
  ) -> &'static str {
    match self {
      | Self::Light => "light",
      | Self::Dark => "dark"
    }
  }

  /// Anything other than `"dark"` reads back as light.
  pub fn from_stored(raw: &str) -> Self {
    match raw {
      | "dark" => Self::Dark,
      | _ => Self::Light
    }
  }
}

/// Where the dark marker lives, e.g. a class on the document body.
pub trait ThemeTarget {
  fn set_dark_marker(&self, on: bool);
}

pub struct ThemeToggle<S, T> {
  store:  S,
  target: T,
  key:    String
}

impl<S, T> ThemeToggle<S, T>
where
  S: KeyValueStore,
  T: ThemeTarget
{
  pub fn new(
    store: S,
    target: T,
    config: &Config
  ) -> Self {
    Self {
      store,
      target,
      key: config.theme_key.clone()
    }
  }

  pub fn target(&self) -> &T {
    &self.target
  }

  pub fn activate_dark(&self) {
    self.activate(Theme::Dark);
  }

  pub fn activate_light(&self) {
    self.activate(Theme::Light);
  }

  pub fn activate(&self, theme: Theme) {
    self
      .target
      .set_dark_marker(theme == Theme::Dark);

    if let Err(error) = self
      .store
      .set(&self.key, theme.storage_value())
    {
      error!(
        error = %format!("{error:#}"),
        theme = theme.storage_value(),
        "failed to persist theme"
      );
    }
    debug!(theme = theme.storage_value(), "theme applied");
  }

  /// Re-applies the saved theme. With nothing saved (or storage
  /// unreadable) the page keeps its default look and `None` is returned.
  #[tracing::instrument(skip(self), fields(key = %self.key))]
  pub fn restore_on_startup(
    &self
  ) -> Option<Theme> {
    let saved = match self.store.get(&self.key)
    {
      | Ok(saved) => saved?,
      | Err(error) => {
        warn!(
          error = %format!("{error:#}"),
          "failed reading saved theme"
        );
        return None;
      }
    };

    let theme = Theme::from_stored(&saved);
    self.activate(theme);
    Some(theme)
  }
}
