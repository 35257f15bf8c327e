use serde::{
  Deserialize,
  Serialize
};

/// A single to-do entry as it is stored under the items key.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct TaskItem {
  pub id:         String,
  pub title:      String,
  #[serde(default)]
  pub is_checked: bool
}

impl TaskItem {
  pub fn new(
    id: String,
    title: String
  ) -> Self {
    Self {
      id,
      title,
      is_checked: false
    }
  }

  /// Case-insensitive substring match against an already lower-cased
  /// query.
  pub fn matches(
    &self,
    needle: &str
  ) -> bool {
    self
      .title
      .to_lowercase()
      .contains(needle)
  }
}

/// Trims raw user input and rejects what is left if it is empty.
pub fn normalize_title(
  raw: &str
) -> Option<String> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    None
  } else {
    Some(trimmed.to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::{
    TaskItem,
    normalize_title
  };

  #[test]
  fn serializes_with_browser_field_names() {
    let item = TaskItem {
      id:         "1700000000000".to_string(),
      title:      "Buy milk".to_string(),
      is_checked: true
    };

    let json = serde_json::to_string(&item)
      .expect("serialize");
    assert_eq!(
      json,
      r#"{"id":"1700000000000","title":"Buy milk","isChecked":true}"#
    );
  }

  #[test]
  fn missing_checked_flag_defaults_to_false() {
    let item: TaskItem = serde_json::from_str(
      r#"{"id":"a","title":"Walk dog"}"#
    )
    .expect("deserialize");
    assert!(!item.is_checked);
  }

  #[test]
  fn title_normalization() {
    assert_eq!(normalize_title(""), None);
    assert_eq!(normalize_title(" \t\n "), None);
    assert_eq!(
      normalize_title("  Buy milk  ").as_deref(),
      Some("Buy milk")
    );
  }

  #[test]
  fn matching_ignores_case() {
    let item = TaskItem::new(
      "1".to_string(),
      "Walk DOG".to_string()
    );
    assert!(item.matches("dog"));
    assert!(item.matches("k d"));
    assert!(!item.matches("cat"));
  }
}
