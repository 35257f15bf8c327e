use std::rc::Rc;

use gloo::timers::callback::Timeout;
use todo_core::{
  ClockIds,
  Config,
  ListView,
  TaskListStore
};
use web_sys::{
  HtmlInputElement,
  InputEvent,
  SubmitEvent
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  TargetCast,
  function_component,
  html,
  use_force_update,
  use_mut_ref,
  use_node_ref,
  use_state
};

use crate::browser::{
  WindowConfirm,
  warn_on_err
};
use crate::components::TaskList;
use crate::storage::LocalStore;

#[derive(Properties, PartialEq)]
pub struct TodoAppProps {
  pub config: Rc<Config>
}

#[function_component(TodoApp)]
pub fn todo_app(
  props: &TodoAppProps
) -> Html {
  let config = props.config.clone();
  let tasks = use_mut_ref(move || {
    TaskListStore::load(
      LocalStore,
      ClockIds::new(),
      &config
    )
  });
  let redraw = use_force_update();
  let draft = use_state(String::new);
  let query = use_state(String::new);
  let new_task_input = use_node_ref();

  let on_draft_input = {
    let draft = draft.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      draft.set(input.value());
    })
  };

  let on_add = {
    let tasks = tasks.clone();
    let draft = draft.clone();
    let query = query.clone();
    let new_task_input =
      new_task_input.clone();
    let redraw = redraw.clone();
    Callback::from(move |e: SubmitEvent| {
      e.prevent_default();
      let added =
        tasks.borrow_mut().add_task(&draft);
      if added.is_some() {
        draft.set(String::new());
        query.set(String::new());
        if let Some(input) = new_task_input
          .cast::<HtmlInputElement>()
        {
          warn_on_err(
            "focus new task input",
            input.focus()
          );
        }
      }
      redraw.force_update();
    })
  };

  let on_search_input = {
    let tasks = tasks.clone();
    let query = query.clone();
    let redraw = redraw.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      let value = input.value();
      tasks.borrow_mut().search(&value);
      query.set(value);
      redraw.force_update();
    })
  };

  let on_search_submit =
    Callback::from(|e: SubmitEvent| {
      e.prevent_default();
    });

  let on_toggle = {
    let tasks = tasks.clone();
    let redraw = redraw.clone();
    Callback::from(move |id: String| {
      tasks.borrow_mut().toggle_checked(&id);
      redraw.force_update();
    })
  };

  let on_delete = {
    let tasks = tasks.clone();
    let redraw = redraw.clone();
    Callback::from(move |id: String| {
      let removal =
        tasks.borrow_mut().request_delete(&id);
      redraw.force_update();

      let delay_ms = u32::try_from(
        removal.delay.as_millis()
      )
      .unwrap_or(u32::MAX);
      let tasks = tasks.clone();
      let redraw = redraw.clone();
      Timeout::new(delay_ms, move || {
        tasks
          .borrow_mut()
          .complete_delete(&removal);
        redraw.force_update();
      })
      .forget();
    })
  };

  let on_clear_all = {
    let tasks = tasks.clone();
    let redraw = redraw.clone();
    Callback::from(move |_: MouseEvent| {
      if tasks
        .borrow_mut()
        .clear_all(&WindowConfirm)
      {
        redraw.force_update();
      }
    })
  };

  let view = ListView::of(&*tasks.borrow());
  let empty_text = view
    .empty_message
    .map(|msg| msg.text())
    .unwrap_or_default();

  html! {
      <div class="todo">
          <h1 class="todo__title">{ "To Do List" }</h1>
          <form class="todo__form" data-js-todo-new-task-form="" onsubmit={on_add}>
              <div class="field">
                  <label class="field__label" for="new-task">{ "New task title" }</label>
                  <input
                      class="field__input"
                      id="new-task"
                      placeholder=" "
                      autocomplete="off"
                      ref={new_task_input}
                      value={(*draft).clone()}
                      oninput={on_draft_input}
                      data-js-todo-new-task-input=""
                  />
              </div>
              <button class="button" type="submit">{ "Add" }</button>
          </form>
          <form class="todo__form" data-js-todo-search-task-form="" onsubmit={on_search_submit}>
              <div class="field">
                  <label class="field__label" for="search-task">{ "Search task" }</label>
                  <input
                      class="field__input"
                      id="search-task"
                      placeholder=" "
                      autocomplete="off"
                      type="search"
                      value={(*query).clone()}
                      oninput={on_search_input}
                      data-js-todo-search-task-input=""
                  />
              </div>
          </form>
          <div class="todo__info">
              <div class="todo__total-tasks">
                  { "Total tasks: " }
                  <span data-js-todo-total-tasks="">{ view.total.to_string() }</span>
              </div>
              {
                  if view.show_clear_all {
                      html! {
                          <button
                              class="todo__delete-all-button"
                              type="button"
                              onclick={on_clear_all}
                              data-js-todo-delete-all-button=""
                          >
                              { "Delete all" }
                          </button>
                      }
                  } else {
                      html! {}
                  }
              }
          </div>
          <TaskList
              rows={view.rows}
              on_toggle={on_toggle}
              on_delete={on_delete}
          />
          <div class="todo__empty-message" data-js-todo-empty-message="">{ empty_text }</div>
      </div>
  }
}
