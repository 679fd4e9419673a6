use fascia_core::task::{Column, Priority, Task};
use uuid::Uuid;
use web_sys::MouseEvent;
use yew::{
    Callback, Html, Properties, TargetCast, UseStateHandle, function_component, html,
};

use crate::app::ui_debug;

#[derive(Clone, PartialEq)]
pub enum TaskModalMode {
    Add,
    Edit(Uuid),
}

#[derive(Clone, PartialEq)]
pub struct TaskModalState {
    pub mode: TaskModalMode,
    pub draft_title: String,
    pub draft_priority: Priority,
    pub draft_assignee: String,
    pub draft_column: Column,
    pub error: Option<String>,
}

impl TaskModalState {
    pub fn add() -> Self {
        Self {
            mode: TaskModalMode::Add,
            draft_title: String::new(),
            draft_priority: Priority::Medium,
            draft_assignee: String::new(),
            draft_column: Column::Todo,
            error: None,
        }
    }

    pub fn edit(task: &Task, column: Column) -> Self {
        Self {
            mode: TaskModalMode::Edit(task.id),
            draft_title: task.title.clone(),
            draft_priority: task.priority,
            draft_assignee: task.assignee.clone(),
            draft_column: column,
            error: None,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TaskModalProps {
    pub modal_state: UseStateHandle<Option<TaskModalState>>,
    pub on_submit: Callback<TaskModalState>,
    pub on_cancel: Callback<MouseEvent>,
}

#[function_component(TaskModal)]
pub fn task_modal(props: &TaskModalProps) -> Html {
    let modal_state = props.modal_state.clone();
    let Some(state) = (*modal_state).clone() else {
        return html! {};
    };

    let is_edit = matches!(state.mode, TaskModalMode::Edit(_));
    let submit_state = state.clone();

    let on_save_click = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| {
            ui_debug("task-modal.save.click", "save click fired");
            on_submit.emit(submit_state.clone());
        })
    };

    let on_priority_change = {
        let modal_state = modal_state.clone();
        Callback::from(move |e: web_sys::Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            if let Some(mut current) = (*modal_state).clone() {
                current.draft_priority = Priority::from_key(&select.value()).unwrap_or_default();
                current.error = None;
                modal_state.set(Some(current));
            }
        })
    };

    let on_column_change = {
        let modal_state = modal_state.clone();
        Callback::from(move |e: web_sys::Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            if let Some(mut current) = (*modal_state).clone() {
                current.draft_column = Column::from_key(&select.value()).unwrap_or(Column::Todo);
                current.error = None;
                modal_state.set(Some(current));
            }
        })
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="header">
                    {
                        match state.mode {
                            TaskModalMode::Add => "Add New Task",
                            TaskModalMode::Edit(_) => "Edit Task",
                        }
                    }
                </div>
                <div class="content">
                    {
                        if let Some(err) = state.error.clone() {
                            html! { <div class="form-error">{ err }</div> }
                        } else {
                            html! {}
                        }
                    }
                    <div class="field">
                        <label>{ "Title" }</label>
                        <input
                            value={state.draft_title.clone()}
                            placeholder="Task title"
                            oninput={{
                                let modal_state = modal_state.clone();
                                Callback::from(move |e: web_sys::InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    if let Some(mut current) = (*modal_state).clone() {
                                        current.draft_title = input.value();
                                        current.error = None;
                                        modal_state.set(Some(current));
                                    }
                                })
                            }}
                        />
                    </div>
                    <div class="field">
                        <label>{ "Priority" }</label>
                        <select value={state.draft_priority.as_str()} onchange={on_priority_change}>
                            {
                                for Priority::all().iter().map(|priority| html! {
                                    <option value={priority.as_str()}>{ priority.label() }</option>
                                })
                            }
                        </select>
                    </div>
                    <div class="field">
                        <label>{ "Assignee" }</label>
                        <input
                            value={state.draft_assignee.clone()}
                            placeholder="Assignee"
                            oninput={{
                                let modal_state = modal_state.clone();
                                Callback::from(move |e: web_sys::InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    if let Some(mut current) = (*modal_state).clone() {
                                        current.draft_assignee = input.value();
                                        current.error = None;
                                        modal_state.set(Some(current));
                                    }
                                })
                            }}
                        />
                    </div>
                    {
                        // Edits never relocate the card; only drag and drop moves it.
                        if is_edit {
                            html! {}
                        } else {
                            html! {
                                <div class="field">
                                    <label>{ "Column" }</label>
                                    <select value={state.draft_column.as_str()} onchange={on_column_change}>
                                        {
                                            for Column::all().iter().map(|column| html! {
                                                <option value={column.as_str()}>{ column.label() }</option>
                                            })
                                        }
                                    </select>
                                </div>
                            }
                        }
                    }
                    <div class="footer">
                        <button type="button" class="btn" onclick={props.on_cancel.clone()}>
                            { "Cancel" }
                        </button>
                        <button type="button" class="btn btn-primary" onclick={on_save_click}>
                            { if is_edit { "Update" } else { "Add" } }
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
