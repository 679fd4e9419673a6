use fascia_core::task::{Column, TaskCreate, TaskPatch};
use uuid::Uuid;
use web_sys::MouseEvent;
use yew::{Callback, Html, function_component, html, use_state};

use crate::app::ui_debug;
use crate::components::{KanbanColumn, TaskModal, TaskModalMode, TaskModalState};
use crate::storage;

#[function_component(KanbanPage)]
pub fn kanban_page() -> Html {
    let board = use_state(storage::load_board);
    let dragging_task = use_state(|| None::<Uuid>);
    let drag_over_column = use_state(|| None::<Column>);
    let modal_state = use_state(|| None::<TaskModalState>);

    let on_add_click = {
        let modal_state = modal_state.clone();
        Callback::from(move |_: MouseEvent| {
            ui_debug("kanban.add.click", "opening add modal");
            modal_state.set(Some(TaskModalState::add()));
        })
    };

    let on_edit = {
        let board = board.clone();
        let modal_state = modal_state.clone();
        Callback::from(move |task_id: Uuid| {
            let Some((column, index)) = board.find_task(task_id) else {
                tracing::warn!(%task_id, "edit requested for unknown task");
                return;
            };
            let Some(task) = board.tasks(column).get(index) else {
                return;
            };
            ui_debug("kanban.card.edit", &task_id.to_string());
            modal_state.set(Some(TaskModalState::edit(task, column)));
        })
    };

    let on_delete = {
        let board = board.clone();
        Callback::from(move |task_id: Uuid| {
            let Some((column, _)) = board.find_task(task_id) else {
                return;
            };
            let mut next = (*board).clone();
            if next.delete_task(task_id, column) {
                ui_debug("kanban.card.delete", &task_id.to_string());
                storage::save_board(&next);
                board.set(next);
            }
        })
    };

    let on_drag_start = {
        let dragging_task = dragging_task.clone();
        Callback::from(move |task_id: Uuid| {
            ui_debug("kanban.drag.start", &task_id.to_string());
            dragging_task.set(Some(task_id));
        })
    };

    let on_drag_end = {
        let dragging_task = dragging_task.clone();
        let drag_over_column = drag_over_column.clone();
        Callback::from(move |_| {
            dragging_task.set(None);
            drag_over_column.set(None);
        })
    };

    let on_drag_over_column = {
        let drag_over_column = drag_over_column.clone();
        Callback::from(move |column: Column| {
            if *drag_over_column != Some(column) {
                drag_over_column.set(Some(column));
            }
        })
    };

    let on_drop = {
        let board = board.clone();
        Callback::from(move |(task_id, dest, slot): (Uuid, Column, Option<usize>)| {
            let Some((source, source_index)) = board.find_task(task_id) else {
                tracing::warn!(%task_id, "dropped task is not on the board");
                return;
            };
            let dest_index = resolve_drop_index(source, dest, slot, board.tasks(dest).len());
            let mut next = (*board).clone();
            if next.move_task(source, source_index, dest, dest_index) {
                ui_debug("kanban.card.drop", dest.as_str());
                storage::save_board(&next);
                board.set(next);
            }
        })
    };

    let on_modal_cancel = {
        let modal_state = modal_state.clone();
        Callback::from(move |_: MouseEvent| {
            ui_debug("kanban.modal.cancel", "discarding draft");
            modal_state.set(None);
        })
    };

    let on_modal_submit = {
        let board = board.clone();
        let modal_state = modal_state.clone();
        Callback::from(move |state: TaskModalState| {
            let mut next = (*board).clone();
            let outcome = match state.mode {
                TaskModalMode::Add => {
                    let create = TaskCreate {
                        title: state.draft_title.clone(),
                        priority: state.draft_priority,
                        assignee: state.draft_assignee.clone(),
                    };
                    next.add_task(state.draft_column, create).map(|_| ())
                }
                TaskModalMode::Edit(task_id) => {
                    let Some((column, _)) = next.find_task(task_id) else {
                        tracing::warn!(%task_id, "edited task vanished from the board");
                        modal_state.set(None);
                        return;
                    };
                    let patch = TaskPatch {
                        title: Some(state.draft_title.clone()),
                        priority: Some(state.draft_priority),
                        assignee: Some(state.draft_assignee.clone()),
                    };
                    next.edit_task(task_id, column, patch).map(|_| ())
                }
            };
            match outcome {
                Ok(()) => {
                    storage::save_board(&next);
                    board.set(next);
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

    html! {
        <section class="page">
            <div class="page-head">
                <h1>{ "Kanban Board" }</h1>
                <button type="button" class="btn btn-primary" onclick={on_add_click}>
                    { "Add Task" }
                </button>
            </div>
            <div class="kanban-board">
                {
                    for Column::all().iter().map(|&column| html! {
                        <KanbanColumn
                            key={column.as_str()}
                            column={column}
                            tasks={board.tasks(column).to_vec()}
                            dragging_task={*dragging_task}
                            drag_over_column={*drag_over_column}
                            on_drag_start={on_drag_start.clone()}
                            on_drag_end={on_drag_end.clone()}
                            on_drag_over_column={on_drag_over_column.clone()}
                            on_drop={on_drop.clone()}
                            on_edit={on_edit.clone()}
                            on_delete={on_delete.clone()}
                        />
                    })
                }
            </div>
            <TaskModal
                modal_state={modal_state.clone()}
                on_submit={on_modal_submit}
                on_cancel={on_modal_cancel}
            />
        </section>
    }
}

// Card drops carry the target card's rendered index, which move_task
// already reads against the post-removal list. A drop on the column
// body lands after the last card.
fn resolve_drop_index(
    source: Column,
    dest: Column,
    slot: Option<usize>,
    dest_len: usize,
) -> usize {
    match slot {
        Some(index) => index,
        None if source == dest => dest_len.saturating_sub(1),
        None => dest_len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_drops_keep_the_rendered_index() {
        assert_eq!(
            resolve_drop_index(Column::Todo, Column::Todo, Some(2), 3),
            2
        );
        assert_eq!(
            resolve_drop_index(Column::Todo, Column::Done, Some(0), 4),
            0
        );
    }

    #[test]
    fn body_drops_land_after_the_last_card() {
        assert_eq!(resolve_drop_index(Column::Todo, Column::Done, None, 4), 4);
        assert_eq!(resolve_drop_index(Column::Todo, Column::Todo, None, 3), 2);
        assert_eq!(resolve_drop_index(Column::Todo, Column::Todo, None, 0), 0);
    }
}
