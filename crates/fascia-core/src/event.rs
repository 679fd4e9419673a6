use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::task::RequestError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarEvent {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub date: DateTime<Utc>,
    pub title: String,
    pub description: String,
}

impl EventDraft {
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.title.trim().is_empty() {
            return Err(RequestError::BlankTitle);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct EventStore {
    events: Vec<CalendarEvent>,
}

impl EventStore {
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CalendarEvent> {
        self.events.iter()
    }

    pub fn find_event(&self, id: Uuid) -> Option<&CalendarEvent> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn events_on(&self, day: NaiveDate) -> Vec<&CalendarEvent> {
        self.events
            .iter()
            .filter(|event| event.date.date_naive() == day)
            .collect()
    }

    #[tracing::instrument(skip(self, draft), fields(date = %draft.date))]
    pub fn add_event(&mut self, draft: EventDraft) -> Result<Uuid, RequestError> {
        draft.validate()?;
        let event = CalendarEvent {
            id: Uuid::new_v4(),
            date: draft.date,
            title: draft.title,
            description: draft.description,
        };
        let id = event.id;
        self.events.push(event);
        debug!(%id, "added event");
        Ok(id)
    }

    #[tracing::instrument(skip(self, draft), fields(id = %id))]
    pub fn edit_event(&mut self, id: Uuid, draft: EventDraft) -> Result<bool, RequestError> {
        draft.validate()?;
        let Some(event) = self.events.iter_mut().find(|event| event.id == id) else {
            debug!("edit target not found");
            return Ok(false);
        };
        event.date = draft.date;
        event.title = draft.title;
        event.description = draft.description;
        debug!("edited event");
        Ok(true)
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    pub fn delete_event(&mut self, id: Uuid) -> bool {
        let Some(index) = self.events.iter().position(|event| event.id == id) else {
            debug!("delete target not found");
            return false;
        };
        self.events.remove(index);
        debug!("deleted event");
        true
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn at(y: i32, m: u32, d: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, hour, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    fn draft(date: DateTime<Utc>, title: &str, description: &str) -> EventDraft {
        EventDraft {
            date,
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn added_event_is_queryable_by_day() {
        let mut store = EventStore::default();
        let id = store
            .add_event(draft(at(2024, 3, 15, 9), "Standup", ""))
            .expect("add event");

        let hits = store.events_on(date(2024, 3, 15));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, id);
        assert_eq!(hits[0].title, "Standup");
        assert!(store.events_on(date(2024, 3, 16)).is_empty());
    }

    #[test]
    fn same_day_different_times_share_a_bucket() {
        let mut store = EventStore::default();
        store
            .add_event(draft(at(2024, 3, 15, 9), "Standup", ""))
            .expect("add event");
        store
            .add_event(draft(at(2024, 3, 15, 16), "Retro", "sprint 12"))
            .expect("add event");

        let hits = store.events_on(date(2024, 3, 15));
        let titles: Vec<&str> = hits.iter().map(|event| event.title.as_str()).collect();
        assert_eq!(titles, vec!["Standup", "Retro"]);
    }

    #[test]
    fn edit_replaces_every_field_in_place() {
        let mut store = EventStore::default();
        store
            .add_event(draft(at(2024, 3, 15, 9), "Standup", ""))
            .expect("add event");
        let id = store
            .add_event(draft(at(2024, 3, 15, 12), "Lunch", ""))
            .expect("add event");
        store
            .add_event(draft(at(2024, 3, 15, 16), "Retro", ""))
            .expect("add event");

        let edited = store
            .edit_event(id, draft(at(2024, 3, 16, 12), "Team lunch", "bring slides"))
            .expect("edit event");
        assert!(edited);

        let order: Vec<&str> = store.iter().map(|event| event.title.as_str()).collect();
        assert_eq!(order, vec!["Standup", "Team lunch", "Retro"]);
        assert!(store.events_on(date(2024, 3, 16)).len() == 1);
    }

    #[test]
    fn edit_missing_id_is_noop() {
        let mut store = EventStore::default();
        let edited = store
            .edit_event(Uuid::new_v4(), draft(at(2024, 3, 15, 9), "Ghost", ""))
            .expect("edit event");
        assert!(!edited);
        assert!(store.is_empty());
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut store = EventStore::default();
        let result = store.add_event(draft(at(2024, 3, 15, 9), "  ", "details"));
        assert_eq!(result, Err(RequestError::BlankTitle));
        assert!(store.is_empty());
    }

    #[test]
    fn delete_event_by_id() {
        let mut store = EventStore::default();
        let id = store
            .add_event(draft(at(2024, 3, 15, 9), "Standup", ""))
            .expect("add event");
        assert!(store.delete_event(id));
        assert!(store.is_empty());
        assert!(!store.delete_event(id));
    }

    #[test]
    fn store_serializes_as_a_bare_array() {
        let mut store = EventStore::default();
        store
            .add_event(draft(at(2024, 3, 15, 9), "Standup", ""))
            .expect("add event");
        let value = serde_json::to_value(&store).expect("serialize events");
        assert!(value.is_array());
        let back: EventStore =
            serde_json::from_value(value).expect("deserialize events");
        assert_eq!(back, store);
    }
}
