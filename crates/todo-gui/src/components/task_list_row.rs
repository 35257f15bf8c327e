use todo_core::RowView;
use yew::{
  Callback,
  Event,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub row:       RowView,
  pub on_toggle: Callback<String>,
  pub on_delete: Callback<String>
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let row = &props.row;
  let on_change = {
    let id = row.id.clone();
    let on_toggle =
      props.on_toggle.clone();
    move |_: Event| {
      on_toggle.emit(id.clone())
    }
  };
  let on_click = {
    let id = row.id.clone();
    let on_delete =
      props.on_delete.clone();
    move |_: MouseEvent| {
      on_delete.emit(id.clone())
    }
  };

  html! {
      <li
          class={classes!("todo-item", row.disappearing.then_some("is-disappearing"))}
          data-js-todo-item=""
      >
          <input
              class="todo-item__checkbox"
              id={row.id.clone()}
              type="checkbox"
              checked={row.checked}
              onchange={on_change}
              data-js-todo-item-checkbox=""
          />
          <label
              class="todo-item__label"
              for={row.id.clone()}
              data-js-todo-item-label=""
          >
              { &row.title }
          </label>
          <button
              class="todo-item__delete-button"
              type="button"
              aria-label="Delete"
              title="Delete"
              disabled={row.disappearing}
              onclick={on_click}
              data-js-todo-item-delete-button=""
          >
              { "×" }
          </button>
      </li>
  }
}
