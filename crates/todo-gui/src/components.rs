mod task_list;
mod task_list_row;

pub use task_list::TaskList;
pub use task_list_row::TaskListRow;
