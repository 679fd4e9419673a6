use fascia_core::task::{Column, Task};
use uuid::Uuid;
use web_sys::DragEvent;
use yew::{Callback, Html, Properties, classes, function_component, html};

use super::KanbanCard;

#[derive(Properties, PartialEq)]
pub struct KanbanColumnProps {
    pub column: Column,
    pub tasks: Vec<Task>,
    pub dragging_task: Option<Uuid>,
    pub drag_over_column: Option<Column>,
    pub on_drag_start: Callback<Uuid>,
    pub on_drag_end: Callback<()>,
    pub on_drag_over_column: Callback<Column>,
    pub on_drop: Callback<(Uuid, Column, Option<usize>)>,
    pub on_edit: Callback<Uuid>,
    pub on_delete: Callback<Uuid>,
}

#[function_component(KanbanColumn)]
pub fn kanban_column(props: &KanbanColumnProps) -> Html {
    let column = props.column;
    let is_drop_hint = props.drag_over_column == Some(column);

    let ondragover = {
        let on_drag_over_column = props.on_drag_over_column.clone();
        Callback::from(move |event: DragEvent| {
            event.prevent_default();
            event.stop_propagation();
            on_drag_over_column.emit(column);
        })
    };

    let ondragenter = {
        let on_drag_over_column = props.on_drag_over_column.clone();
        Callback::from(move |event: DragEvent| {
            event.prevent_default();
            event.stop_propagation();
            on_drag_over_column.emit(column);
        })
    };

    let ondrop = {
        let on_drop = props.on_drop.clone();
        let on_drag_end = props.on_drag_end.clone();
        Callback::from(move |event: DragEvent| {
            event.prevent_default();
            event.stop_propagation();
            if let Some(data_transfer) = event.data_transfer() {
                match data_transfer.get_data("text/plain") {
                    Ok(raw_uuid) => {
                        if let Ok(uuid) = Uuid::parse_str(raw_uuid.trim()) {
                            on_drop.emit((uuid, column, None));
                        } else {
                            tracing::warn!(raw_uuid, "failed to parse dragged task uuid");
                        }
                    }
                    Err(error) => {
                        tracing::warn!(?error, "failed reading drag data");
                    }
                }
            }
            on_drag_end.emit(());
        })
    };

    let card_drop = {
        let on_drop = props.on_drop.clone();
        Callback::from(move |(uuid, index): (Uuid, usize)| {
            on_drop.emit((uuid, column, Some(index)));
        })
    };

    html! {
        <div
            class={classes!("kanban-column", is_drop_hint.then_some("drop-hint"))}
            {ondragover}
            {ondragenter}
            {ondrop}
        >
            <div class="kanban-column-header">
                <span>{ column.label() }</span>
                <span class="badge">{ props.tasks.len() }</span>
            </div>
            <div class="kanban-column-body">
                {
                    if props.tasks.is_empty() {
                        html! { <div class="kanban-empty">{ "No tasks" }</div> }
                    } else {
                        html! {
                            <>
                                {
                                    for props.tasks.iter().cloned().enumerate().map(|(index, task)| {
                                        let task_id = task.id;
                                        html! {
                                            <KanbanCard
                                                key={task_id.to_string()}
                                                task={task}
                                                index={index}
                                                is_dragging={props.dragging_task == Some(task_id)}
                                                on_drag_start={props.on_drag_start.clone()}
                                                on_drag_end={props.on_drag_end.clone()}
                                                on_drop={card_drop.clone()}
                                                on_edit={props.on_edit.clone()}
                                                on_delete={props.on_delete.clone()}
                                            />
                                        }
                                    })
                                }
                            </>
                        }
                    }
                }
            </div>
        </div>
    }
}
