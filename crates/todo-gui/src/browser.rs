use std::fmt::Debug;

use todo_core::{
  Confirm,
  ThemeTarget
};
use web_sys::Element;

/// Logs a failed DOM call. Returns whether `result` was ok.
pub fn warn_on_err<E: Debug>(
  action: &str,
  result: Result<(), E>
) -> bool {
  match result {
    | Ok(()) => true,
    | Err(err) => {
      tracing::warn!(
        error = ?err,
        action,
        "dom call failed"
      );
      false
    }
  }
}

/// Blocking `window.confirm`. A missing window counts as "no".
pub struct WindowConfirm;

impl Confirm for WindowConfirm {
  fn confirm(&self, prompt: &str) -> bool {
    web_sys::window()
      .and_then(|window| {
        window
          .confirm_with_message(prompt)
          .ok()
      })
      .unwrap_or(false)
  }
}

/// Toggles a class on the body element.
pub struct BodyClass {
  pub body:  Element,
  pub class: String
}

impl ThemeTarget for BodyClass {
  fn set_dark_marker(&self, on: bool) {
    let classes = self.body.class_list();
    let result = if on {
      classes.add_1(&self.class)
    } else {
      classes.remove_1(&self.class)
    };
    warn_on_err("update body class", result);
  }
}

/// Configuration overrides carried as `data-rc-*` attributes on `root`.
pub fn rc_overrides(
  root: &Element
) -> Vec<(String, String)> {
  let attrs = root.attributes();
  let pairs = (0..attrs.length())
    .filter_map(|idx| attrs.item(idx))
    .map(|attr| (attr.name(), attr.value()));
  rc_pairs(pairs)
}

fn rc_pairs(
  attrs: impl Iterator<Item = (String, String)>
) -> Vec<(String, String)> {
  attrs
    .filter_map(|(name, value)| {
      name
        .strip_prefix("data-")
        .filter(|rest| {
          rest.starts_with("rc-")
        })
        .map(|rest| {
          (rest.to_string(), value)
        })
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::{
    rc_pairs,
    warn_on_err
  };

  #[test]
  fn dom_failures_are_reported_not_raised() {
    assert!(warn_on_err::<&str>("focus", Ok(())));
    assert!(!warn_on_err("focus", Err("not focusable")));
  }

  #[test]
  fn only_data_rc_attributes_become_overrides() {
    let attrs = vec![
      ("data-js-todo".to_string(), String::new()),
      ("class".to_string(), "todo".to_string()),
      (
        "data-rc-delete-delay-ms".to_string(),
        "250".to_string()
      ),
      (
        "data-rc-items-key".to_string(),
        "my-list".to_string()
      ),
    ];

    assert_eq!(
      rc_pairs(attrs.into_iter()),
      vec![
        (
          "rc-delete-delay-ms".to_string(),
          "250".to_string()
        ),
        (
          "rc-items-key".to_string(),
          "my-list".to_string()
        ),
      ]
    );
  }
}
