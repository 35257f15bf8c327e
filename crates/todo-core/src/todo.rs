//! The task list: canonical items, a transient search filter and rows that
//! are on their way out.
//!
//! Every mutating operation persists the full item list before returning.
//! Persistence is best effort: failures are logged and the in-memory list
//! stays authoritative for the rest of the session.

use std::collections::{
  BTreeMap,
  BTreeSet
};
use std::time::Duration;

use tracing::{
  debug,
  error,
  info,
  warn
};

use crate::config::Config;
use crate::confirm::Confirm;
use crate::ids::IdSource;
use crate::schedule::{
  CancelToken,
  ScheduledRemoval
};
use crate::storage::{
  KeyValueStore,
  load_json,
  save_json
};
use crate::task::{
  TaskItem,
  normalize_title
};

pub struct TaskListStore<S, I> {
  store:        S,
  ids:          I,
  items_key:    String,
  delete_delay: Duration,
  clear_prompt: String,

  items:        Vec<TaskItem>,
  filtered:     Option<Vec<TaskItem>>,
  search_query: String,
  pending:      BTreeMap<String, CancelToken>
}

impl<S, I> TaskListStore<S, I>
where
  S: KeyValueStore,
  I: IdSource
{
  /// Loads the saved items. Absent, unreadable or malformed data all
  /// start the session with an empty list.
  #[tracing::instrument(skip_all, fields(key = %config.items_key))]
  pub fn load(
    store: S,
    mut ids: I,
    config: &Config
  ) -> Self {
    let items = match load_json::<
      Vec<TaskItem>,
      _
    >(
      &store, &config.items_key
    ) {
      | Ok(Some(items)) => {
        dedupe_ids(items)
      }
      | Ok(None) => {
        debug!("no saved items");
        Vec::new()
      }
      | Err(error) => {
        warn!(
          error = %format!("{error:#}"),
          "failed loading saved items; starting empty"
        );
        Vec::new()
      }
    };

    for item in &items {
      ids.observe(&item.id);
    }
    info!(count = items.len(), "loaded items");

    Self {
      store,
      ids,
      items_key: config.items_key.clone(),
      delete_delay: config.delete_delay,
      clear_prompt: config
        .clear_prompt
        .clone(),
      items,
      filtered: None,
      search_query: String::new(),
      pending: BTreeMap::new()
    }
  }

  pub fn items(&self) -> &[TaskItem] {
    &self.items
  }

  /// `None` while no filter is active.
  pub fn filtered_items(
    &self
  ) -> Option<&[TaskItem]> {
    self.filtered.as_deref()
  }

  pub fn search_query(&self) -> &str {
    &self.search_query
  }

  /// The rows a view should show right now.
  pub fn displayed(&self) -> &[TaskItem] {
    self
      .filtered
      .as_deref()
      .unwrap_or(&self.items)
  }

  pub fn is_disappearing(
    &self,
    id: &str
  ) -> bool {
    self.pending.contains_key(id)
  }

  /// Appends a task and clears any filter so the new row is visible.
  /// Blank input is ignored.
  #[tracing::instrument(skip(self))]
  pub fn add_task(
    &mut self,
    raw_title: &str
  ) -> Option<TaskItem> {
    let Some(title) =
      normalize_title(raw_title)
    else {
      debug!("ignoring blank title");
      return None;
    };

    let mut id = self.ids.next_id();
    while self
      .items
      .iter()
      .any(|item| item.id == id)
    {
      id = self.ids.next_id();
    }

    let item = TaskItem::new(id, title);
    info!(id = %item.id, "adding task");
    self.items.push(item.clone());
    self.persist();
    self.clear_filter();
    Some(item)
  }

  /// First phase of a deletion: the row is marked as disappearing and
  /// the caller gets the removal to run once the exit animation is over.
  #[tracing::instrument(skip(self))]
  pub fn request_delete(
    &mut self,
    id: &str
  ) -> ScheduledRemoval {
    let token = self
      .pending
      .entry(id.to_string())
      .or_default()
      .clone();
    debug!(delay = ?self.delete_delay, "row disappearing");

    ScheduledRemoval::new(
      id.to_string(),
      self.delete_delay,
      token
    )
  }

  /// Second phase of a deletion. Returns whether an item was removed.
  #[tracing::instrument(skip(self, removal), fields(id = %removal.id))]
  pub fn complete_delete(
    &mut self,
    removal: &ScheduledRemoval
  ) -> bool {
    if self
      .pending
      .get(&removal.id)
      .is_some_and(|token| {
        token.same_as(removal.token())
      })
    {
      self.pending.remove(&removal.id);
    }

    if removal.is_cancelled() {
      debug!("removal was cancelled");
      return false;
    }

    let before = self.items.len();
    self
      .items
      .retain(|item| item.id != removal.id);
    if self.items.len() == before {
      debug!("no such task; nothing removed");
      return false;
    }

    info!("task deleted");
    self.persist();
    self.refresh_filter();
    true
  }

  /// Stops a pending deletion; the row stops disappearing.
  #[tracing::instrument(skip(self))]
  pub fn cancel_delete(
    &mut self,
    id: &str
  ) -> bool {
    match self.pending.remove(id) {
      | Some(token) => {
        token.cancel();
        debug!("deletion cancelled");
        true
      }
      | None => false
    }
  }

  #[tracing::instrument(skip(self))]
  pub fn toggle_checked(
    &mut self,
    id: &str
  ) -> bool {
    let Some(item) = self
      .items
      .iter_mut()
      .find(|item| item.id == id)
    else {
      debug!("no such task");
      return false;
    };

    item.is_checked = !item.is_checked;
    debug!(checked = item.is_checked, "toggled");
    self.persist();
    self.refresh_filter();
    true
  }

  /// Filters the displayed rows by case-insensitive substring match on
  /// the title. A blank query resets the filter.
  #[tracing::instrument(skip(self))]
  pub fn search(&mut self, query: &str) {
    let query = query.trim();
    if query.is_empty() {
      self.reset_filter();
      return;
    }

    self.search_query = query.to_lowercase();
    self.refresh_filter();
    debug!(
      matches = self.filtered.as_ref().map_or(0, Vec::len),
      "filter applied"
    );
  }

  pub fn reset_filter(&mut self) {
    self.clear_filter();
  }

  /// Empties the list after the user agrees to it.
  #[tracing::instrument(skip_all)]
  pub fn clear_all(
    &mut self,
    confirm: &impl Confirm
  ) -> bool {
    if !confirm.confirm(&self.clear_prompt) {
      info!("clear all declined");
      return false;
    }

    info!(count = self.items.len(), "clearing all tasks");
    self.items.clear();
    std::mem::take(&mut self.pending)
      .into_values()
      .for_each(|token| token.cancel());
    self.persist();
    self.refresh_filter();
    true
  }

  fn clear_filter(&mut self) {
    self.filtered = None;
    self.search_query.clear();
  }

  fn refresh_filter(&mut self) {
    if self.search_query.is_empty() {
      return;
    }
    let needle = &self.search_query;
    self.filtered = Some(
      self
        .items
        .iter()
        .filter(|item| item.matches(needle))
        .cloned()
        .collect()
    );
  }

  fn persist(&self) {
    if let Err(error) = save_json(
      &self.store,
      &self.items_key,
      &self.items
    ) {
      error!(
        error = %format!("{error:#}"),
        count = self.items.len(),
        "failed to persist items; keeping them in memory"
      );
    }
  }
}

fn dedupe_ids(
  items: Vec<TaskItem>
) -> Vec<TaskItem> {
  let mut seen = BTreeSet::new();
  items
    .into_iter()
    .filter(|item| {
      let fresh =
        seen.insert(item.id.clone());
      if !fresh {
        warn!(id = %item.id, "dropping saved task with duplicate id");
      }
      fresh
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use std::time::Duration;

  use super::TaskListStore;
  use crate::config::Config;
  use crate::ids::{
    ClockIds,
    SequenceIds
  };
  use crate::storage::MemoryStore;

  fn store_with(
    raw: &str
  ) -> TaskListStore<MemoryStore, SequenceIds>
  {
    TaskListStore::load(
      MemoryStore::with_entry("todo-items", raw),
      SequenceIds::new("n"),
      &Config::default()
    )
  }

  #[test]
  fn duplicate_saved_ids_keep_the_first() {
    let tasks = store_with(
      r#"[{"id":"a","title":"one","isChecked":false},
          {"id":"a","title":"two","isChecked":true}]"#
    );
    assert_eq!(tasks.items().len(), 1);
    assert_eq!(tasks.items()[0].title, "one");
  }

  #[test]
  fn non_array_data_loads_as_empty() {
    assert!(store_with(r#"{"id":"a"}"#).items().is_empty());
    assert!(store_with("null").items().is_empty());
    assert!(store_with("[1,2").items().is_empty());
  }

  #[test]
  fn generated_ids_skip_ones_already_in_use() {
    let mut tasks = store_with(
      r#"[{"id":"n1","title":"old","isChecked":false}]"#
    );
    let added =
      tasks.add_task("new").expect("added");
    assert_eq!(added.id, "n2");
  }

  #[test]
  fn filter_follows_toggles() {
    let mut tasks = store_with("[]");
    let id = tasks
      .add_task("Walk dog")
      .expect("added")
      .id;
    tasks.search("DOG");

    tasks.toggle_checked(&id);
    let shown =
      tasks.filtered_items().expect("filter");
    assert!(shown[0].is_checked);
    assert_eq!(tasks.search_query(), "dog");
  }

  #[test]
  fn adding_after_the_largest_numeric_id_does_not_overflow() {
    let mut tasks = TaskListStore::load(
      MemoryStore::with_entry(
        "todo-items",
        r#"[{"id":"9223372036854775807","title":"old","isChecked":false}]"#
      ),
      ClockIds::with_clock(|| 1_700_000_000_000),
      &Config::default()
    );

    let first = tasks.add_task("new").expect("added");
    let second = tasks.add_task("newer").expect("added");
    assert_eq!(first.id, "9223372036854775807-1");
    assert_eq!(second.id, "9223372036854775807-2");
    assert_eq!(tasks.items().len(), 3);
  }

  #[test]
  fn removal_carries_the_configured_delay() {
    let mut cfg = Config::default();
    cfg
      .apply_overrides([(
        "delete-delay-ms".to_string(),
        u64::MAX.to_string()
      )])
      .expect("override");
    let mut tasks = TaskListStore::load(
      MemoryStore::new(),
      SequenceIds::new("n"),
      &cfg
    );
    let id = tasks.add_task("slow").expect("added").id;

    let removal = tasks.request_delete(&id);
    assert_eq!(
      removal.delay,
      Duration::from_millis(u64::MAX)
    );
    assert!(tasks.is_disappearing(&id));
  }
}
