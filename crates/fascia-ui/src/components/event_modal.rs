use chrono::{DateTime, NaiveDate, Utc};
use fascia_core::event::CalendarEvent;
use uuid::Uuid;
use web_sys::{MouseEvent, SubmitEvent};
use yew::{
    Callback, Html, Properties, TargetCast, UseStateHandle, function_component, html,
};

use crate::app::ui_debug;

#[derive(Clone, PartialEq)]
pub enum EventModalMode {
    Add,
    Edit(Uuid),
}

#[derive(Clone, PartialEq)]
pub struct EventModalState {
    pub mode: EventModalMode,
    pub date: DateTime<Utc>,
    pub draft_title: String,
    pub draft_description: String,
    pub error: Option<String>,
}

impl EventModalState {
    pub fn add(day: NaiveDate) -> Self {
        Self {
            mode: EventModalMode::Add,
            date: day.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc(),
            draft_title: String::new(),
            draft_description: String::new(),
            error: None,
        }
    }

    pub fn edit(event: &CalendarEvent) -> Self {
        Self {
            mode: EventModalMode::Edit(event.id),
            date: event.date,
            draft_title: event.title.clone(),
            draft_description: event.description.clone(),
            error: None,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct EventModalProps {
    pub modal_state: UseStateHandle<Option<EventModalState>>,
    pub on_submit: Callback<EventModalState>,
    pub on_delete: Callback<Uuid>,
    pub on_cancel: Callback<MouseEvent>,
}

#[function_component(EventModal)]
pub fn event_modal(props: &EventModalProps) -> Html {
    let modal_state = props.modal_state.clone();
    let Some(state) = (*modal_state).clone() else {
        return html! {};
    };

    let submit_state = state.clone();
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            ui_debug("event-modal.save.submit", "save submit fired");
            on_submit.emit(submit_state.clone());
        })
    };

    let delete_button = match state.mode {
        EventModalMode::Edit(event_id) => {
            let on_delete = props.on_delete.clone();
            let onclick = Callback::from(move |_: MouseEvent| {
                ui_debug("event-modal.delete.click", "delete click fired");
                on_delete.emit(event_id);
            });
            html! {
                <button type="button" class="btn btn-danger" onclick={onclick}>
                    { "Delete" }
                </button>
            }
        }
        EventModalMode::Add => html! {},
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="header">
                    {
                        match state.mode {
                            EventModalMode::Add => "Add Event",
                            EventModalMode::Edit(_) => "Edit Event",
                        }
                    }
                </div>
                <form {onsubmit}>
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
                                required={true}
                                value={state.draft_title.clone()}
                                placeholder="Event title"
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
                            <label>{ "Description" }</label>
                            <textarea
                                rows="3"
                                value={state.draft_description.clone()}
                                oninput={{
                                    let modal_state = modal_state.clone();
                                    Callback::from(move |e: web_sys::InputEvent| {
                                        let area: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                                        if let Some(mut current) = (*modal_state).clone() {
                                            current.draft_description = area.value();
                                            current.error = None;
                                            modal_state.set(Some(current));
                                        }
                                    })
                                }}
                            />
                        </div>
                        <div class="footer">
                            { delete_button }
                            <button type="button" class="btn" onclick={props.on_cancel.clone()}>
                                { "Cancel" }
                            </button>
                            <button type="submit" class="btn btn-primary">
                                { "Save" }
                            </button>
                        </div>
                    </div>
                </form>
            </div>
        </div>
    }
}
