//! Stable `data-js-*` markers the widget attaches to.
//!
//! Hosts resolve the [`Anchor::REQUIRED`] set once at startup through
//! [`resolve`] and stop right there if any marker is missing. The rest are
//! emitted by the rendered list itself.

use anyhow::anyhow;

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
)]
pub enum Anchor {
  Body,
  LightThemeButton,
  DarkThemeButton,
  TodoRoot,
  NewTaskForm,
  NewTaskInput,
  SearchForm,
  SearchInput,
  TotalCount,
  DeleteAllButton,
  List,
  Row,
  RowCheckbox,
  RowLabel,
  RowDeleteButton,
  EmptyMessage
}

impl Anchor {
  /// Present in the page before the widget starts.
  pub const REQUIRED: [Anchor; 4] = [
    Anchor::Body,
    Anchor::LightThemeButton,
    Anchor::DarkThemeButton,
    Anchor::TodoRoot
  ];

  /// Attribute name carried by the element; `None` for the body, which is
  /// addressed by tag.
  pub fn attribute(
    self
  ) -> Option<&'static str> {
    let name = match self {
      | Self::Body => return None,
      | Self::LightThemeButton => {
        "data-js-light-theme-button"
      }
      | Self::DarkThemeButton => {
        "data-js-dark-theme-button"
      }
      | Self::TodoRoot => "data-js-todo",
      | Self::NewTaskForm => {
        "data-js-todo-new-task-form"
      }
      | Self::NewTaskInput => {
        "data-js-todo-new-task-input"
      }
      | Self::SearchForm => {
        "data-js-todo-search-task-form"
      }
      | Self::SearchInput => {
        "data-js-todo-search-task-input"
      }
      | Self::TotalCount => {
        "data-js-todo-total-tasks"
      }
      | Self::DeleteAllButton => {
        "data-js-todo-delete-all-button"
      }
      | Self::List => "data-js-todo-list",
      | Self::Row => "data-js-todo-item",
      | Self::RowCheckbox => {
        "data-js-todo-item-checkbox"
      }
      | Self::RowLabel => {
        "data-js-todo-item-label"
      }
      | Self::RowDeleteButton => {
        "data-js-todo-item-delete-button"
      }
      | Self::EmptyMessage => {
        "data-js-todo-empty-message"
      }
    };
    Some(name)
  }

  /// CSS selector for a `querySelector` lookup.
  pub fn selector(self) -> String {
    match self.attribute() {
      | Some(attr) => format!("[{attr}]"),
      | None => "body".to_string()
    }
  }
}

/// Everything [`resolve`] found, one element per required anchor.
#[derive(Debug, Clone)]
pub struct Resolved<E> {
  pub body:         E,
  pub light_button: E,
  pub dark_button:  E,
  pub todo_root:    E
}

/// Looks up every required anchor with `lookup(selector)`. Reports all
/// missing markers at once.
pub fn resolve<E>(
  mut lookup: impl FnMut(&str) -> Option<E>
) -> anyhow::Result<Resolved<E>> {
  let mut found = Vec::with_capacity(
    Anchor::REQUIRED.len()
  );
  let mut missing = Vec::new();

  for anchor in Anchor::REQUIRED {
    let selector = anchor.selector();
    match lookup(&selector) {
      | Some(el) => found.push(el),
      | None => missing.push(selector)
    }
  }

  if !missing.is_empty() {
    return Err(anyhow!(
      "missing attachment point(s): {}",
      missing.join(", ")
    ));
  }

  let mut found = found.into_iter();
  match (
    found.next(),
    found.next(),
    found.next(),
    found.next()
  ) {
    | (
      Some(body),
      Some(light_button),
      Some(dark_button),
      Some(todo_root)
    ) => Ok(Resolved {
      body,
      light_button,
      dark_button,
      todo_root
    }),
    | _ => Err(anyhow!(
      "attachment point lookup returned \
       an incomplete set"
    ))
  }
}

#[cfg(test)]
mod tests {
  use std::collections::BTreeSet;

  use super::{
    Anchor,
    resolve
  };

  #[test]
  fn resolves_every_required_anchor() {
    let resolved = resolve(|selector| {
      Some(selector.to_string())
    })
    .expect("all present");

    assert_eq!(resolved.body, "body");
    assert_eq!(
      resolved.todo_root,
      "[data-js-todo]"
    );
    assert_eq!(
      resolved.dark_button,
      "[data-js-dark-theme-button]"
    );
  }

  #[test]
  fn missing_anchors_fail_fast_and_are_named() {
    let err = resolve(|selector| {
      (!selector.contains("theme-button"))
        .then_some(())
    })
    .expect_err("buttons missing");

    let msg = err.to_string();
    assert!(msg.contains("[data-js-light-theme-button]"));
    assert!(msg.contains("[data-js-dark-theme-button]"));
    assert!(!msg.contains("[data-js-todo]"));
  }

  #[test]
  fn attributes_are_distinct() {
    let all = [
      Anchor::LightThemeButton,
      Anchor::DarkThemeButton,
      Anchor::TodoRoot,
      Anchor::NewTaskForm,
      Anchor::NewTaskInput,
      Anchor::SearchForm,
      Anchor::SearchInput,
      Anchor::TotalCount,
      Anchor::DeleteAllButton,
      Anchor::List,
      Anchor::Row,
      Anchor::RowCheckbox,
      Anchor::RowLabel,
      Anchor::RowDeleteButton,
      Anchor::EmptyMessage
    ];
    let names: BTreeSet<&str> = all
      .iter()
      .filter_map(|a| a.attribute())
      .collect();
    assert_eq!(names.len(), all.len());
    assert_eq!(Anchor::Body.attribute(), None);
  }
}
