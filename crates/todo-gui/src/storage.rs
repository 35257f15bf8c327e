use anyhow::anyhow;
use todo_core::KeyValueStore;

/// `window.localStorage`. Looked up on every call so a page that blocks
/// storage (private mode, sandboxed iframe) surfaces as ordinary errors.
#[derive(Clone, Copy, Default)]
pub struct LocalStore;

fn local_storage()
-> anyhow::Result<web_sys::Storage> {
  web_sys::window()
    .ok_or_else(|| anyhow!("no window"))?
    .local_storage()
    .map_err(|err| {
      anyhow!(
        "localStorage unavailable: \
         {err:?}"
      )
    })?
    .ok_or_else(|| {
      anyhow!("localStorage disabled")
    })
}

impl KeyValueStore for LocalStore {
  fn get(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    local_storage()?
      .get_item(key)
      .map_err(|err| {
        anyhow!(
          "getItem({key}) failed: \
           {err:?}"
        )
      })
  }

  fn set(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    local_storage()?
      .set_item(key, value)
      .map_err(|err| {
        anyhow!(
          "setItem({key}) failed: \
           {err:?}"
        )
      })
  }

  fn remove(
    &self,
    key: &str
  ) -> anyhow::Result<()> {
    local_storage()?
      .remove_item(key)
      .map_err(|err| {
        anyhow!(
          "removeItem({key}) failed: \
           {err:?}"
        )
      })
  }
}
