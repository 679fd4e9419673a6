use fascia_core::task::Task;
use uuid::Uuid;
use web_sys::{DragEvent, MouseEvent};
use yew::{Callback, Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct KanbanCardProps {
    pub task: Task,
    pub index: usize,
    pub is_dragging: bool,
    pub on_drag_start: Callback<Uuid>,
    pub on_drag_end: Callback<()>,
    pub on_drop: Callback<(Uuid, usize)>,
    pub on_edit: Callback<Uuid>,
    pub on_delete: Callback<Uuid>,
}

#[function_component(KanbanCard)]
pub fn kanban_card(props: &KanbanCardProps) -> Html {
    let task_id = props.task.id;

    let ondragstart = {
        let on_drag_start = props.on_drag_start.clone();
        Callback::from(move |event: DragEvent| {
            if let Some(data_transfer) = event.data_transfer() {
                let _ = data_transfer.set_data("text/plain", &task_id.to_string());
                data_transfer.set_drop_effect("move");
            }
            on_drag_start.emit(task_id);
        })
    };

    let ondragend = {
        let on_drag_end = props.on_drag_end.clone();
        Callback::from(move |_| {
            on_drag_end.emit(());
        })
    };

    let ondragover = Callback::from(|event: DragEvent| {
        event.prevent_default();
    });

    // A drop on a card inserts at the card's slot; the column body
    // handles drops past the last card.
    let ondrop = {
        let on_drop = props.on_drop.clone();
        let on_drag_end = props.on_drag_end.clone();
        let index = props.index;
        Callback::from(move |event: DragEvent| {
            event.prevent_default();
            event.stop_propagation();
            if let Some(data_transfer) = event.data_transfer() {
                match data_transfer.get_data("text/plain") {
                    Ok(raw_uuid) => {
                        if let Ok(uuid) = Uuid::parse_str(raw_uuid.trim()) {
                            on_drop.emit((uuid, index));
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

    let onclick_edit = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |_: MouseEvent| {
            on_edit.emit(task_id);
        })
    };

    let onclick_delete = {
        let on_delete = props.on_delete.clone();
        Callback::from(move |_: MouseEvent| {
            on_delete.emit(task_id);
        })
    };

    html! {
        <div
            class={classes!("kanban-card", props.is_dragging.then_some("dragging"))}
            draggable="true"
            {ondragstart}
            {ondragend}
            {ondragover}
            {ondrop}
        >
            <div class="kanban-card-head">
                <h3 class="kanban-card-title">{ &props.task.title }</h3>
                <span class={classes!("priority-badge", props.task.priority.as_str())}>
                    { props.task.priority.as_str() }
                </span>
            </div>
            <p class="kanban-card-assignee">{ format!("Assigned to: {}", props.task.assignee) }</p>
            <div class="kanban-card-actions">
                <button type="button" class="card-action" onclick={onclick_edit}>
                    { "Edit" }
                </button>
                <button type="button" class="card-action danger" onclick={onclick_delete}>
                    { "Delete" }
                </button>
            </div>
        </div>
    }
}
