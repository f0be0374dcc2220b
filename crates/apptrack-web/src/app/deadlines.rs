use apptrack_core::contract::{
  ATTR_DEADLINE,
  DEADLINE_CELLS
};
use apptrack_core::deadline::urgency_for_attribute;
use tracing::debug;
use web_sys::Document;

use super::dom;

/// Classifies every deadline cell once;
/// nothing is recomputed afterwards.
pub fn colorize(document: &Document) {
  let mut flagged = 0_usize;
  for cell in
    dom::query_all(document, DEADLINE_CELLS)
  {
    let Some(urgency) = cell
      .get_attribute(ATTR_DEADLINE)
      .as_deref()
      .and_then(urgency_for_attribute)
    else {
      continue;
    };

    let classes = urgency.css_classes();
    if !classes.is_empty() {
      flagged += 1;
    }
    for class in classes {
      dom::add_class(&cell, class);
    }
  }
  debug!(flagged, "deadline cells colored");
}
