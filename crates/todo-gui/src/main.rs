mod app;
mod browser;
mod components;
mod storage;
mod theme;

use std::rc::Rc;

use todo_core::Config;
use todo_core::anchors;

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  tracing::info!(
    "starting to-do widget"
  );

  let document = web_sys::window()
    .and_then(|window| {
      window.document()
    })
    .expect("missing document");

  let resolved =
    anchors::resolve(|selector| {
      document
        .query_selector(selector)
        .ok()
        .flatten()
    })
    .unwrap_or_else(|err| {
      panic!("{err:#}")
    });

  let mut config = Config::default();
  config
    .apply_overrides(
      browser::rc_overrides(
        &resolved.todo_root
      )
    )
    .unwrap_or_else(|err| {
      panic!(
        "invalid data-rc-* settings: \
         {err:#}"
      )
    });

  theme::install(&resolved, &config);

  yew::Renderer::<app::TodoApp>::with_root_and_props(
    resolved.todo_root,
    app::TodoAppProps {
      config: Rc::new(config)
    }
  )
  .render();
}
