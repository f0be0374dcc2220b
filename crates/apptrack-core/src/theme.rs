use std::cell::RefCell;
use std::collections::HashMap;

use tracing::{
  debug,
  warn
};

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum Theme {
  Light,
  Dark
}

impl Theme {
  /// Anything but an explicit `dark`
  /// attribute counts as light.
  pub fn from_attribute(
    value: Option<&str>
  ) -> Self {
    match value {
      | Some("dark") => Self::Dark,
      | _ => Self::Light
    }
  }

  pub fn from_storage(
    value: &str
  ) -> Option<Self> {
    match value {
      | "dark" => Some(Self::Dark),
      | "light" => Some(Self::Light),
      | _ => None
    }
  }

  pub fn next(self) -> Self {
    match self {
      | Self::Light => Self::Dark,
      | Self::Dark => Self::Light
    }
  }

  pub fn storage_value(
    self
  ) -> &'static str {
    match self {
      | Self::Light => "light",
      | Self::Dark => "dark"
    }
  }

  /// Icon shown on the toggle: the theme
  /// a click would switch to.
  pub fn toggle_icon_html(
    self
  ) -> &'static str {
    match self {
      | Self::Light => {
        "<i class=\"fas fa-moon\"></i>"
      }
      | Self::Dark => {
        "<i class=\"fas fa-sun\"></i>"
      }
    }
  }
}

/// Key/value persistence behind the
/// theme preference. Browser local
/// storage in the page, a map in tests.
pub trait PreferenceStore {
  fn load(&self, key: &str)
  -> Option<String>;

  fn save(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
  values: RefCell<HashMap<String, String>>
}

impl MemoryStore {
  pub fn with_value(
    key: &str,
    value: &str
  ) -> Self {
    let store = Self::default();
    store.values.borrow_mut().insert(
      key.to_string(),
      value.to_string()
    );
    store
  }
}

impl PreferenceStore for MemoryStore {
  fn load(
    &self,
    key: &str
  ) -> Option<String> {
    self.values.borrow().get(key).cloned()
  }

  fn save(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    self.values.borrow_mut().insert(
      key.to_string(),
      value.to_string()
    );
    Ok(())
  }
}

pub struct ThemePreference<'a, S> {
  store: &'a S,
  key:   &'a str
}

impl<'a, S: PreferenceStore>
  ThemePreference<'a, S>
{
  pub fn new(
    store: &'a S,
    key: &'a str
  ) -> Self {
    Self { store, key }
  }

  /// Stored theme to apply before any
  /// interaction, if one was saved.
  pub fn restore(&self) -> Option<Theme> {
    let stored =
      self.store.load(self.key)?;
    let theme =
      Theme::from_storage(&stored);
    if theme.is_none() {
      warn!(
        key = self.key,
        value = %stored,
        "ignoring unknown stored theme"
      );
    }
    theme
  }

  /// Flips the theme read from the root
  /// attribute and persists the result.
  pub fn toggle(
    &self,
    current_attribute: Option<&str>
  ) -> Theme {
    let next = Theme::from_attribute(
      current_attribute
    )
    .next();
    if let Err(error) = self.store.save(
      self.key,
      next.storage_value()
    ) {
      warn!(
        %error,
        "failed persisting theme \
         preference"
      );
    }
    debug!(
      theme = next.storage_value(),
      "theme toggled"
    );
    next
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn toggling_light_persists_dark() {
    let store = MemoryStore::default();
    let pref =
      ThemePreference::new(&store, "theme");

    let next = pref.toggle(Some("light"));
    assert_eq!(next, Theme::Dark);
    assert_eq!(
      store.load("theme").as_deref(),
      Some("dark")
    );

    let back = pref.toggle(Some("dark"));
    assert_eq!(back, Theme::Light);
    assert_eq!(
      store.load("theme").as_deref(),
      Some("light")
    );
  }

  #[test]
  fn missing_attribute_counts_as_light() {
    let store = MemoryStore::default();
    let pref =
      ThemePreference::new(&store, "theme");
    assert_eq!(
      pref.toggle(None),
      Theme::Dark
    );
  }

  #[test]
  fn restore_reads_saved_value() {
    let store = MemoryStore::with_value(
      "theme", "dark"
    );
    let pref =
      ThemePreference::new(&store, "theme");
    assert_eq!(
      pref.restore(),
      Some(Theme::Dark)
    );

    let empty = MemoryStore::default();
    assert_eq!(
      ThemePreference::new(
        &empty, "theme"
      )
      .restore(),
      None
    );
  }

  #[test]
  fn restore_ignores_unknown_values() {
    let store = MemoryStore::with_value(
      "theme", "sepia"
    );
    assert_eq!(
      ThemePreference::new(
        &store, "theme"
      )
      .restore(),
      None
    );
  }

  #[test]
  fn icon_offers_the_other_theme() {
    assert!(
      Theme::Dark
        .toggle_icon_html()
        .contains("fa-sun")
    );
    assert!(
      Theme::Light
        .toggle_icon_html()
        .contains("fa-moon")
    );
  }
}
