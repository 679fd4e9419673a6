use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::task::{Column, Priority, RequestError, Task, TaskCreate, TaskPatch};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskBoard {
    todo: Vec<Task>,
    in_progress: Vec<Task>,
    done: Vec<Task>,
}

impl TaskBoard {
    pub fn seed() -> Self {
        let task = |title: &str, priority: Priority, assignee: &str| Task {
            id: Uuid::new_v4(),
            title: title.to_string(),
            priority,
            assignee: assignee.to_string(),
        };

        Self {
            todo: vec![
                task("Design new dashboard layout", Priority::High, "John Doe"),
                task("Implement user authentication", Priority::Medium, "Jane Smith"),
                task("Create API documentation", Priority::Low, "Bob Johnson"),
            ],
            in_progress: vec![
                task("Setup database schema", Priority::High, "Alice Brown"),
                task("Write unit tests", Priority::Medium, "Charlie Wilson"),
            ],
            done: vec![
                task("Setup project structure", Priority::High, "Diana Miller"),
                task("Configure CI/CD pipeline", Priority::Medium, "Edward Davis"),
            ],
        }
    }

    pub fn tasks(&self, column: Column) -> &[Task] {
        match column {
            Column::Todo => &self.todo,
            Column::InProgress => &self.in_progress,
            Column::Done => &self.done,
        }
    }

    fn tasks_mut(&mut self, column: Column) -> &mut Vec<Task> {
        match column {
            Column::Todo => &mut self.todo,
            Column::InProgress => &mut self.in_progress,
            Column::Done => &mut self.done,
        }
    }

    pub fn task_count(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.done.len()
    }

    pub fn find_task(&self, id: Uuid) -> Option<(Column, usize)> {
        for column in Column::all() {
            if let Some(index) = self.tasks(column).iter().position(|task| task.id == id) {
                return Some((column, index));
            }
        }
        None
    }

    #[tracing::instrument(skip(self, create), fields(column = column.as_str()))]
    pub fn add_task(&mut self, column: Column, create: TaskCreate) -> Result<Uuid, RequestError> {
        create.validate()?;
        let task = Task {
            id: Uuid::new_v4(),
            title: create.title,
            priority: create.priority,
            assignee: create.assignee,
        };
        let id = task.id;
        self.tasks_mut(column).push(task);
        debug!(%id, "added task");
        Ok(id)
    }

    #[tracing::instrument(skip(self, patch), fields(column = column.as_str(), id = %id))]
    pub fn edit_task(
        &mut self,
        id: Uuid,
        column: Column,
        patch: TaskPatch,
    ) -> Result<bool, RequestError> {
        patch.validate()?;
        let Some(task) = self
            .tasks_mut(column)
            .iter_mut()
            .find(|task| task.id == id)
        else {
            debug!("edit target not found");
            return Ok(false);
        };
        patch.apply(task);
        debug!("edited task");
        Ok(true)
    }

    #[tracing::instrument(skip(self), fields(column = column.as_str(), id = %id))]
    pub fn delete_task(&mut self, id: Uuid, column: Column) -> bool {
        let tasks = self.tasks_mut(column);
        let Some(index) = tasks.iter().position(|task| task.id == id) else {
            debug!("delete target not found");
            return false;
        };
        tasks.remove(index);
        debug!("deleted task");
        true
    }

    // Removal happens before insertion, so a same-column dest_index
    // addresses the already-shortened list.
    #[tracing::instrument(skip(self))]
    pub fn move_task(
        &mut self,
        source: Column,
        source_index: usize,
        dest: Column,
        dest_index: usize,
    ) -> bool {
        if source == dest && source_index == dest_index {
            return false;
        }

        let source_len = self.tasks(source).len();
        if source_index >= source_len {
            warn!(source_len, "move source index out of range");
            return false;
        }

        let dest_len = if source == dest {
            source_len - 1
        } else {
            self.tasks(dest).len()
        };
        if dest_index > dest_len {
            warn!(dest_len, "move destination index out of range");
            return false;
        }

        let task = self.tasks_mut(source).remove(source_index);
        debug!(id = %task.id, "moved task");
        self.tasks_mut(dest).insert(dest_index, task);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(board: &TaskBoard, column: Column) -> Vec<&str> {
        board
            .tasks(column)
            .iter()
            .map(|task| task.title.as_str())
            .collect()
    }

    fn board_abc() -> TaskBoard {
        let mut board = TaskBoard::default();
        for title in ["A", "B", "C"] {
            board
                .add_task(
                    Column::Todo,
                    TaskCreate {
                        title: title.to_string(),
                        priority: Priority::Medium,
                        assignee: String::new(),
                    },
                )
                .expect("add task");
        }
        board
    }

    #[test]
    fn seed_has_expected_shape() {
        let board = TaskBoard::seed();
        assert_eq!(board.tasks(Column::Todo).len(), 3);
        assert_eq!(board.tasks(Column::InProgress).len(), 2);
        assert_eq!(board.tasks(Column::Done).len(), 2);
        assert_eq!(
            board.tasks(Column::Todo)[0].title,
            "Design new dashboard layout"
        );
        assert_eq!(board.tasks(Column::Done)[1].assignee, "Edward Davis");
    }

    #[test]
    fn add_appends_to_end_of_column() {
        let mut board = TaskBoard::seed();
        let id = board
            .add_task(
                Column::InProgress,
                TaskCreate {
                    title: "Review pull requests".to_string(),
                    priority: Priority::Low,
                    assignee: "Fiona Clark".to_string(),
                },
            )
            .expect("add task");
        let lane = board.tasks(Column::InProgress);
        assert_eq!(lane.len(), 3);
        assert_eq!(lane[2].id, id);
    }

    #[test]
    fn add_rejects_blank_title() {
        let mut board = TaskBoard::default();
        let result = board.add_task(
            Column::Todo,
            TaskCreate {
                title: " ".to_string(),
                priority: Priority::High,
                assignee: "John Doe".to_string(),
            },
        );
        assert_eq!(result, Err(RequestError::BlankTitle));
        assert_eq!(board.task_count(), 0);
    }

    #[test]
    fn edit_replaces_fields_in_place() {
        let mut board = board_abc();
        let id = board.tasks(Column::Todo)[1].id;
        let edited = board
            .edit_task(
                id,
                Column::Todo,
                TaskPatch {
                    title: Some("B2".to_string()),
                    priority: Some(Priority::High),
                    assignee: None,
                },
            )
            .expect("edit task");
        assert!(edited);
        assert_eq!(titles(&board, Column::Todo), vec!["A", "B2", "C"]);
        assert_eq!(board.tasks(Column::Todo)[1].id, id);
    }

    #[test]
    fn edit_missing_id_is_noop() {
        let mut board = board_abc();
        let edited = board
            .edit_task(
                Uuid::new_v4(),
                Column::Todo,
                TaskPatch {
                    title: Some("ghost".to_string()),
                    ..TaskPatch::default()
                },
            )
            .expect("edit task");
        assert!(!edited);
        assert_eq!(titles(&board, Column::Todo), vec!["A", "B", "C"]);
    }

    #[test]
    fn delete_removes_only_the_target() {
        let mut board = board_abc();
        let id = board.tasks(Column::Todo)[1].id;
        assert!(board.delete_task(id, Column::Todo));
        assert_eq!(titles(&board, Column::Todo), vec!["A", "C"]);
        assert!(!board.delete_task(id, Column::Todo));
    }

    #[test]
    fn move_within_column_lands_after_later_cards() {
        let mut board = board_abc();
        assert!(board.move_task(Column::Todo, 0, Column::Todo, 2));
        assert_eq!(titles(&board, Column::Todo), vec!["B", "C", "A"]);
    }

    #[test]
    fn move_to_empty_column() {
        let mut board = TaskBoard::default();
        for title in ["A", "B"] {
            board
                .add_task(
                    Column::Todo,
                    TaskCreate {
                        title: title.to_string(),
                        priority: Priority::Medium,
                        assignee: String::new(),
                    },
                )
                .expect("add task");
        }
        assert!(board.move_task(Column::Todo, 0, Column::InProgress, 0));
        assert_eq!(titles(&board, Column::Todo), vec!["B"]);
        assert_eq!(titles(&board, Column::InProgress), vec!["A"]);
    }

    #[test]
    fn move_to_same_position_is_noop() {
        let mut board = board_abc();
        assert!(!board.move_task(Column::Todo, 1, Column::Todo, 1));
        assert_eq!(titles(&board, Column::Todo), vec!["A", "B", "C"]);
    }

    #[test]
    fn move_out_of_range_is_noop() {
        let mut board = board_abc();
        assert!(!board.move_task(Column::Todo, 3, Column::Done, 0));
        assert!(!board.move_task(Column::Todo, 0, Column::Done, 1));
        assert_eq!(board.task_count(), 3);
        assert_eq!(titles(&board, Column::Todo), vec!["A", "B", "C"]);
        assert!(board.tasks(Column::Done).is_empty());
    }

    #[test]
    fn moves_conserve_task_count_and_identity() {
        let mut board = TaskBoard::seed();
        let before = board.task_count();
        let id = board.tasks(Column::Todo)[2].id;

        assert!(board.move_task(Column::Todo, 2, Column::Done, 0));
        assert!(board.move_task(Column::Done, 0, Column::InProgress, 2));
        assert_eq!(board.task_count(), before);
        assert_eq!(board.find_task(id), Some((Column::InProgress, 2)));
    }

    #[test]
    fn board_serializes_with_camel_case_keys() {
        let board = TaskBoard::seed();
        let value = serde_json::to_value(&board).expect("serialize board");
        let object = value.as_object().expect("board is a json object");
        let keys: Vec<&str> = object.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["todo", "inProgress", "done"]);
    }

    #[test]
    fn board_roundtrip_preserves_membership_and_order() {
        let mut board = TaskBoard::seed();
        board.move_task(Column::Todo, 0, Column::InProgress, 1);
        let raw = serde_json::to_string(&board).expect("serialize board");
        let back: TaskBoard = serde_json::from_str(&raw).expect("deserialize board");
        assert_eq!(back, board);
    }

    #[test]
    fn blob_missing_a_column_fails_to_parse() {
        let raw = r#"{"todo": [], "done": []}"#;
        assert!(serde_json::from_str::<TaskBoard>(raw).is_err());
    }
}
