//! What the list should look like, computed from store state alone.

use crate::ids::IdSource;
use crate::storage::KeyValueStore;
use crate::todo::TaskListStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
  pub id:           String,
  pub title:        String,
  pub checked:      bool,
  pub disappearing: bool
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum EmptyMessage {
  NoTasks,
  NotFound
}

impl EmptyMessage {
  pub fn text(self) -> &'static str {
    match self {
      | Self::NoTasks => "No tasks yet",
      | Self::NotFound => "Tasks not found"
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
  pub rows:           Vec<RowView>,
  /// Unfiltered total, even while a filter is active.
  pub total:          usize,
  pub show_clear_all: bool,
  pub empty_message:  Option<EmptyMessage>
}

impl ListView {
  pub fn of<S, I>(
    tasks: &TaskListStore<S, I>
  ) -> Self
  where
    S: KeyValueStore,
    I: IdSource
  {
    let total = tasks.items().len();
    let rows: Vec<RowView> = tasks
      .displayed()
      .iter()
      .map(|item| RowView {
        id:           item.id.clone(),
        title:        item.title.clone(),
        checked:      item.is_checked,
        disappearing: tasks
          .is_disappearing(&item.id)
      })
      .collect();

    let empty_message = if total == 0 {
      Some(EmptyMessage::NoTasks)
    } else if tasks.filtered_items().is_some()
      && rows.is_empty()
    {
      Some(EmptyMessage::NotFound)
    } else {
      None
    };

    Self {
      rows,
      total,
      show_clear_all: total > 0,
      empty_message
    }
  }
}
