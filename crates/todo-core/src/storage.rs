//! String key-value persistence.
//!
//! Components never touch a concrete backend. The browser frontend plugs in
//! `localStorage`; tests use [`MemoryStore`].

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use anyhow::Context;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::trace;

pub trait KeyValueStore {
  fn get(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>>;

  fn set(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()>;

  fn remove(
    &self,
    key: &str
  ) -> anyhow::Result<()>;
}

/// Reads `key` and decodes it as JSON. `Ok(None)` means the key is absent.
pub fn load_json<T, S>(
  store: &S,
  key: &str
) -> anyhow::Result<Option<T>>
where
  T: DeserializeOwned,
  S: KeyValueStore + ?Sized
{
  let Some(raw) = store
    .get(key)
    .with_context(|| {
      format!("failed to read {key}")
    })?
  else {
    return Ok(None);
  };

  let value = serde_json::from_str(&raw)
    .with_context(|| {
      format!(
        "failed to parse {key} as JSON"
      )
    })?;
  Ok(Some(value))
}

/// Encodes `value` as JSON and writes it under `key` in one shot.
pub fn save_json<T, S>(
  store: &S,
  key: &str,
  value: &T
) -> anyhow::Result<()>
where
  T: Serialize + ?Sized,
  S: KeyValueStore + ?Sized
{
  let json = serde_json::to_string(value)
    .with_context(|| {
      format!("failed to encode {key}")
    })?;
  store.set(key, &json).with_context(
    || format!("failed to write {key}")
  )
}

/// In-memory backend. Cloning shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  entries: Rc<RefCell<BTreeMap<String, String>>>
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_entry(
    key: &str,
    value: &str
  ) -> Self {
    let store = Self::new();
    store
      .entries
      .borrow_mut()
      .insert(key.to_string(), value.to_string());
    store
  }

  pub fn snapshot(
    &self
  ) -> BTreeMap<String, String> {
    self.entries.borrow().clone()
  }
}

impl KeyValueStore for MemoryStore {
  fn get(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    Ok(self.entries.borrow().get(key).cloned())
  }

  fn set(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    trace!(key, bytes = value.len(), "memory store write");
    self
      .entries
      .borrow_mut()
      .insert(key.to_string(), value.to_string());
    Ok(())
  }

  fn remove(
    &self,
    key: &str
  ) -> anyhow::Result<()> {
    self.entries.borrow_mut().remove(key);
    Ok(())
  }
}
