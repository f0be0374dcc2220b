use std::rc::Rc;

use anyhow::anyhow;
use apptrack_core::config::PageContext;
use apptrack_core::theme::{
  PreferenceStore,
  Theme,
  ThemePreference
};
use gloo::events::EventListener;
use tracing::{
  info,
  warn
};
use web_sys::{
  Document,
  Element,
  Storage
};

/// Browser local storage. Unavailable
/// storage (privacy modes) reads as empty
/// and fails writes.
struct LocalPreferences;

impl LocalPreferences {
  fn storage() -> Option<Storage> {
    web_sys::window().and_then(|window| {
      window
        .local_storage()
        .ok()
        .flatten()
    })
  }
}

impl PreferenceStore for LocalPreferences {
  fn load(
    &self,
    key: &str
  ) -> Option<String> {
    Self::storage().and_then(|storage| {
      storage.get_item(key).ok().flatten()
    })
  }

  fn save(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    let storage = Self::storage()
      .ok_or_else(|| {
        anyhow!("local storage unavailable")
      })?;
    storage.set_item(key, value).map_err(
      |e| {
        anyhow!(
          "local storage write failed: \
           {e:?}"
        )
      }
    )
  }
}

pub fn attach(
  document: &Document,
  ctx: &Rc<PageContext>
) {
  let Some(toggle) = document
    .get_element_by_id(
      &ctx.config.theme_toggle_id
    )
  else {
    return;
  };
  let Some(root) =
    document.document_element()
  else {
    return;
  };

  {
    let icon = toggle.clone();
    let root = root.clone();
    let ctx = Rc::clone(ctx);
    EventListener::new(
      &toggle,
      "click",
      move |_| {
        let attribute =
          &ctx.config.theme_attribute;
        let current =
          root.get_attribute(attribute);
        let next = ThemePreference::new(
          &LocalPreferences,
          &ctx.config.theme_storage_key
        )
        .toggle(current.as_deref());
        apply(&root, &icon, attribute, next);
      }
    )
    .forget();
  }

  let restored = ThemePreference::new(
    &LocalPreferences,
    &ctx.config.theme_storage_key
  )
  .restore();
  if let Some(theme) = restored {
    info!(
      theme = theme.storage_value(),
      "restoring saved theme"
    );
    apply(
      &root,
      &toggle,
      &ctx.config.theme_attribute,
      theme
    );
  }
}

fn apply(
  root: &Element,
  toggle: &Element,
  attribute: &str,
  theme: Theme
) {
  if let Err(error) = root.set_attribute(
    attribute,
    theme.storage_value()
  ) {
    warn!(
      ?error,
      "failed setting theme attribute"
    );
  }
  toggle.set_inner_html(
    theme.toggle_icon_html()
  );
}
