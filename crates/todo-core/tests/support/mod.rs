#![allow(dead_code)]

use std::cell::Cell;

use anyhow::anyhow;
use todo_core::{
  Config,
  KeyValueStore,
  MemoryStore,
  SequenceIds,
  TaskListStore
};
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
          EnvFilter::new("debug")
        })
    )
    .with_test_writer()
    .try_init();
}

pub type Tasks =
  TaskListStore<MemoryStore, SequenceIds>;

pub fn open(store: &MemoryStore) -> Tasks {
  TaskListStore::load(
    store.clone(),
    SequenceIds::new("t"),
    &Config::default()
  )
}

pub fn titles(items: &[todo_core::TaskItem]) -> Vec<&str> {
  items
    .iter()
    .map(|item| item.title.as_str())
    .collect()
}

/// Reads come from an inner store; writes fail while `broken` is set.
#[derive(Default)]
pub struct FlakyStore {
  pub inner:  MemoryStore,
  pub broken: Cell<bool>
}

impl KeyValueStore for FlakyStore {
  fn get(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    self.inner.get(key)
  }

  fn set(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    if self.broken.get() {
      return Err(anyhow!("quota exceeded"));
    }
    self.inner.set(key, value)
  }

  fn remove(
    &self,
    key: &str
  ) -> anyhow::Result<()> {
    self.inner.remove(key)
  }
}
