use std::rc::Rc;

use gloo::events::EventListener;
use todo_core::anchors::Resolved;
use todo_core::{
  Config,
  ThemeToggle
};
use web_sys::Element;

use crate::browser::BodyClass;
use crate::storage::LocalStore;

/// Restores the saved theme and wires the two static theme buttons.
/// Listeners live as long as the page.
pub fn install(
  anchors: &Resolved<Element>,
  config: &Config
) {
  let toggle = Rc::new(ThemeToggle::new(
    LocalStore,
    BodyClass {
      body:  anchors.body.clone(),
      class: config.dark_class.clone()
    },
    config
  ));

  let restored = toggle.restore_on_startup();
  tracing::info!(theme = ?restored, "theme restored");

  {
    let toggle = toggle.clone();
    EventListener::new(
      &anchors.dark_button,
      "click",
      move |_| toggle.activate_dark()
    )
    .forget();
  }

  EventListener::new(
    &anchors.light_button,
    "click",
    move |_| toggle.activate_light()
  )
  .forget();
}
