//! State for the to-do widget: the task list, the theme toggle and the seams
//! (storage, confirmation, timers, ids) a host plugs in.

pub mod anchors;
pub mod config;
pub mod confirm;
pub mod ids;
pub mod schedule;
pub mod storage;
pub mod task;
pub mod theme;
pub mod todo;
pub mod view;

pub use config::Config;
pub use confirm::Confirm;
pub use ids::{
  ClockIds,
  IdSource,
  SequenceIds
};
pub use schedule::{
  CancelToken,
  ManualTimers,
  ScheduledRemoval
};
pub use storage::{
  KeyValueStore,
  MemoryStore
};
pub use task::TaskItem;
pub use theme::{
  Theme,
  ThemeTarget,
  ThemeToggle
};
pub use todo::TaskListStore;
pub use view::{
  EmptyMessage,
  ListView,
  RowView
};
