use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("title must not be blank")]
    BlankTitle,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn all() -> [Priority; 3] {
        [Priority::High, Priority::Medium, Priority::Low]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High Priority",
            Priority::Medium => "Medium Priority",
            Priority::Low => "Low Priority",
        }
    }

    pub fn from_key(key: &str) -> Option<Priority> {
        match key {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Column {
    Todo,
    InProgress,
    Done,
}

impl Column {
    pub fn all() -> [Column; 3] {
        [Column::Todo, Column::InProgress, Column::Done]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Column::Todo => "todo",
            Column::InProgress => "inProgress",
            Column::Done => "done",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Column::Todo => "To Do",
            Column::InProgress => "In Progress",
            Column::Done => "Done",
        }
    }

    pub fn from_key(key: &str) -> Option<Column> {
        match key {
            "todo" => Some(Column::Todo),
            "inProgress" => Some(Column::InProgress),
            "done" => Some(Column::Done),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub priority: Priority,
    pub assignee: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCreate {
    pub title: String,
    pub priority: Priority,
    pub assignee: String,
}

impl TaskCreate {
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.title.trim().is_empty() {
            return Err(RequestError::BlankTitle);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub priority: Option<Priority>,
    pub assignee: Option<String>,
}

impl TaskPatch {
    pub fn validate(&self) -> Result<(), RequestError> {
        if let Some(title) = &self.title
            && title.trim().is_empty()
        {
            return Err(RequestError::BlankTitle);
        }
        Ok(())
    }

    pub fn apply(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(assignee) = &self.assignee {
            task.assignee = assignee.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_serializes_lowercase() {
        let json = serde_json::to_string(&Priority::High).expect("serialize priority");
        assert_eq!(json, "\"high\"");
        let back: Priority = serde_json::from_str("\"medium\"").expect("deserialize priority");
        assert_eq!(back, Priority::Medium);
    }

    #[test]
    fn column_keys_are_camel_case() {
        assert_eq!(Column::Todo.as_str(), "todo");
        assert_eq!(Column::InProgress.as_str(), "inProgress");
        assert_eq!(Column::Done.as_str(), "done");
        for column in Column::all() {
            let json = serde_json::to_string(&column).expect("serialize column");
            assert_eq!(json, format!("\"{}\"", column.as_str()));
            assert_eq!(Column::from_key(column.as_str()), Some(column));
        }
    }

    #[test]
    fn blank_title_is_rejected() {
        let create = TaskCreate {
            title: "   ".to_string(),
            priority: Priority::Medium,
            assignee: String::new(),
        };
        assert_eq!(create.validate(), Err(RequestError::BlankTitle));

        let patch = TaskPatch {
            title: Some(String::new()),
            ..TaskPatch::default()
        };
        assert_eq!(patch.validate(), Err(RequestError::BlankTitle));
    }

    #[test]
    fn patch_only_touches_present_fields() {
        let mut task = Task {
            id: Uuid::new_v4(),
            title: "Design new dashboard layout".to_string(),
            priority: Priority::High,
            assignee: "John Doe".to_string(),
        };
        let patch = TaskPatch {
            title: None,
            priority: Some(Priority::Low),
            assignee: None,
        };
        patch.apply(&mut task);
        assert_eq!(task.title, "Design new dashboard layout");
        assert_eq!(task.priority, Priority::Low);
        assert_eq!(task.assignee, "John Doe");
    }
}
