use chrono::{NaiveDate, Utc};
use fascia_core::calendar::{self, ViewMode};
use fascia_core::event::{EventDraft, EventStore};
use uuid::Uuid;
use web_sys::MouseEvent;
use yew::{Callback, Html, classes, function_component, html, use_state};

use crate::app::ui_debug;
use crate::components::{EventModal, EventModalMode, EventModalState};
use crate::storage;

#[function_component(CalendarPage)]
pub fn calendar_page() -> Html {
    let events = use_state(storage::load_events);
    let view = use_state(|| ViewMode::Month);
    let anchor = use_state(|| Utc::now().date_naive());
    let modal_state = use_state(|| None::<EventModalState>);

    let on_previous = {
        let anchor = anchor.clone();
        Callback::from(move |_: MouseEvent| {
            // TODO: step by a whole month or week when those views are
            // active instead of a single day.
            anchor.set(calendar::add_days(*anchor, -1));
        })
    };

    let on_today = {
        let anchor = anchor.clone();
        Callback::from(move |_: MouseEvent| {
            anchor.set(Utc::now().date_naive());
        })
    };

    let on_next = {
        let anchor = anchor.clone();
        Callback::from(move |_: MouseEvent| {
            anchor.set(calendar::add_days(*anchor, 1));
        })
    };

    let on_day_click = {
        let modal_state = modal_state.clone();
        Callback::from(move |day: NaiveDate| {
            ui_debug("calendar.day.click", &day.to_string());
            modal_state.set(Some(EventModalState::add(day)));
        })
    };

    let on_event_click = {
        let events = events.clone();
        let modal_state = modal_state.clone();
        Callback::from(move |event_id: Uuid| {
            let Some(event) = events.find_event(event_id) else {
                tracing::warn!(%event_id, "clicked event is not in the store");
                return;
            };
            ui_debug("calendar.event.click", &event_id.to_string());
            modal_state.set(Some(EventModalState::edit(event)));
        })
    };

    let on_modal_cancel = {
        let modal_state = modal_state.clone();
        Callback::from(move |_: MouseEvent| {
            ui_debug("calendar.modal.cancel", "discarding draft");
            modal_state.set(None);
        })
    };

    let on_modal_delete = {
        let events = events.clone();
        let modal_state = modal_state.clone();
        Callback::from(move |event_id: Uuid| {
            let mut next = (*events).clone();
            if next.delete_event(event_id) {
                storage::save_events(&next);
                events.set(next);
            }
            modal_state.set(None);
        })
    };

    let on_modal_submit = {
        let events = events.clone();
        let modal_state = modal_state.clone();
        Callback::from(move |state: EventModalState| {
            let draft = EventDraft {
                date: state.date,
                title: state.draft_title.clone(),
                description: state.draft_description.clone(),
            };
            let mut next = (*events).clone();
            let outcome = match state.mode {
                EventModalMode::Add => next.add_event(draft).map(|_| ()),
                EventModalMode::Edit(event_id) => next.edit_event(event_id, draft).map(|_| ()),
            };
            match outcome {
                Ok(()) => {
                    storage::save_events(&next);
                    events.set(next);
                    modal_state.set(None);
                }
                Err(error) => {
                    let mut current = state.clone();
                    current.error = Some(error.to_string());
                    modal_state.set(Some(current));
                }
            }
        })
    };

    let body = match *view {
        ViewMode::Month => render_month_view(&events, *anchor, &on_day_click, &on_event_click),
        ViewMode::Week => render_week_view(&events, *anchor, &on_day_click, &on_event_click),
        ViewMode::Day => render_day_view(&events, *anchor, &on_event_click),
    };

    html! {
        <section class="page">
            <div class="calendar-toolbar">
                <div class="calendar-nav">
                    <button type="button" class="btn" onclick={on_previous}>{ "Previous" }</button>
                    <button type="button" class="btn" onclick={on_today}>{ "Today" }</button>
                    <button type="button" class="btn" onclick={on_next}>{ "Next" }</button>
                </div>
                <h2 class="calendar-title">{ calendar::month_title(*anchor) }</h2>
                <div class="calendar-views">
                    {
                        for ViewMode::all().iter().map(|&mode| {
                            let onclick = {
                                let view = view.clone();
                                Callback::from(move |_: MouseEvent| {
                                    ui_debug("calendar.view.change", mode.as_key());
                                    view.set(mode);
                                })
                            };
                            html! {
                                <button
                                    type="button"
                                    class={classes!("btn", (*view == mode).then_some("active"))}
                                    {onclick}
                                >
                                    { mode.label() }
                                </button>
                            }
                        })
                    }
                </div>
            </div>
            <div class="calendar-body">
                { body }
            </div>
            <EventModal
                modal_state={modal_state.clone()}
                on_submit={on_modal_submit}
                on_delete={on_modal_delete}
                on_cancel={on_modal_cancel}
            />
        </section>
    }
}

fn event_chips(
    events: &EventStore,
    day: NaiveDate,
    on_event_click: &Callback<Uuid>,
) -> Html {
    html! {
        <>
            {
                for events.events_on(day).into_iter().map(|event| {
                    let onclick = {
                        let on_event_click = on_event_click.clone();
                        let event_id = event.id;
                        Callback::from(move |click: MouseEvent| {
                            click.stop_propagation();
                            on_event_click.emit(event_id);
                        })
                    };
                    html! {
                        <div key={event.id.to_string()} class="calendar-chip" {onclick}>
                            { &event.title }
                        </div>
                    }
                })
            }
        </>
    }
}

fn render_month_view(
    events: &EventStore,
    anchor: NaiveDate,
    on_day_click: &Callback<NaiveDate>,
    on_event_click: &Callback<Uuid>,
) -> Html {
    html! {
        <div class="calendar-grid">
            {
                for calendar::WEEKDAY_LABELS.iter().map(|label| html! {
                    <div class="calendar-weekday">{ *label }</div>
                })
            }
            {
                for calendar::month_grid(anchor).into_iter().map(|day| {
                    let onclick = {
                        let on_day_click = on_day_click.clone();
                        Callback::from(move |_: MouseEvent| {
                            on_day_click.emit(day);
                        })
                    };
                    html! {
                        <div
                            key={day.to_string()}
                            class={classes!(
                                "calendar-cell",
                                (!calendar::in_month(day, anchor)).then_some("outside")
                            )}
                            {onclick}
                        >
                            <div class="calendar-day-number">{ day.format("%-d").to_string() }</div>
                            { event_chips(events, day, on_event_click) }
                        </div>
                    }
                })
            }
        </div>
    }
}

fn render_week_view(
    events: &EventStore,
    anchor: NaiveDate,
    on_day_click: &Callback<NaiveDate>,
    on_event_click: &Callback<Uuid>,
) -> Html {
    html! {
        <div class="calendar-grid calendar-week">
            {
                for calendar::week_days(anchor).into_iter().map(|day| {
                    let onclick = {
                        let on_day_click = on_day_click.clone();
                        Callback::from(move |_: MouseEvent| {
                            on_day_click.emit(day);
                        })
                    };
                    html! {
                        <div key={day.to_string()} class="calendar-cell calendar-week-cell" {onclick}>
                            <div class="calendar-weekday">{ calendar::week_cell_label(day) }</div>
                            { event_chips(events, day, on_event_click) }
                        </div>
                    }
                })
            }
        </div>
    }
}

fn render_day_view(
    events: &EventStore,
    anchor: NaiveDate,
    on_event_click: &Callback<Uuid>,
) -> Html {
    html! {
        <div class="calendar-day">
            <div class="calendar-day-title">{ calendar::day_title(anchor) }</div>
            {
                for events.events_on(anchor).into_iter().map(|event| {
                    let onclick = {
                        let on_event_click = on_event_click.clone();
                        let event_id = event.id;
                        Callback::from(move |_: MouseEvent| {
                            on_event_click.emit(event_id);
                        })
                    };
                    html! {
                        <div key={event.id.to_string()} class="calendar-day-event" {onclick}>
                            <div class="calendar-event-title">{ &event.title }</div>
                            <div class="calendar-event-desc">{ &event.description }</div>
                        </div>
                    }
                })
            }
        </div>
    }
}
