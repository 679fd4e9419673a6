use chrono::{NaiveDate, TimeZone, Utc};
use fascia_core::board::TaskBoard;
use fascia_core::event::{EventDraft, EventStore};
use fascia_core::task::{Column, Priority, TaskCreate, TaskPatch};

#[test]
fn board_session_roundtrip() {
    let mut board = TaskBoard::seed();
    assert_eq!(board.task_count(), 7);

    let id = board
        .add_task(
            Column::Todo,
            TaskCreate {
                title: "Ship release notes".to_string(),
                priority: Priority::Low,
                assignee: "Fiona Clark".to_string(),
            },
        )
        .expect("add task");
    assert_eq!(board.task_count(), 8);
    assert_eq!(board.find_task(id), Some((Column::Todo, 3)));

    assert!(board.move_task(Column::Todo, 3, Column::InProgress, 0));
    assert_eq!(board.find_task(id), Some((Column::InProgress, 0)));

    let edited = board
        .edit_task(
            id,
            Column::InProgress,
            TaskPatch {
                title: None,
                priority: Some(Priority::High),
                assignee: None,
            },
        )
        .expect("edit task");
    assert!(edited);
    assert_eq!(board.task_count(), 8);

    let raw = serde_json::to_string(&board).expect("serialize board");
    let reloaded: TaskBoard = serde_json::from_str(&raw).expect("reload board");
    assert_eq!(reloaded, board);
    assert_eq!(reloaded.tasks(Column::InProgress)[0].priority, Priority::High);

    let mut board = reloaded;
    assert!(board.delete_task(id, Column::InProgress));
    assert_eq!(board.task_count(), 7);
}

#[test]
fn event_session_roundtrip() {
    let mut events = EventStore::default();
    let day = NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date");

    let standup = events
        .add_event(EventDraft {
            date: Utc
                .with_ymd_and_hms(2024, 3, 15, 9, 0, 0)
                .single()
                .expect("valid timestamp"),
            title: "Standup".to_string(),
            description: String::new(),
        })
        .expect("add event");
    events
        .add_event(EventDraft {
            date: Utc
                .with_ymd_and_hms(2024, 3, 15, 16, 30, 0)
                .single()
                .expect("valid timestamp"),
            title: "Retro".to_string(),
            description: "sprint 12".to_string(),
        })
        .expect("add event");

    assert_eq!(events.events_on(day).len(), 2);
    assert!(
        events
            .events_on(NaiveDate::from_ymd_opt(2024, 3, 16).expect("valid date"))
            .is_empty()
    );

    let moved = events
        .edit_event(
            standup,
            EventDraft {
                date: Utc
                    .with_ymd_and_hms(2024, 3, 16, 9, 0, 0)
                    .single()
                    .expect("valid timestamp"),
                title: "Standup".to_string(),
                description: "moved a day".to_string(),
            },
        )
        .expect("edit event");
    assert!(moved);
    assert_eq!(events.events_on(day).len(), 1);

    let raw = serde_json::to_string(&events).expect("serialize events");
    assert!(raw.starts_with('['));
    let reloaded: EventStore = serde_json::from_str(&raw).expect("reload events");
    assert_eq!(reloaded, events);
}
