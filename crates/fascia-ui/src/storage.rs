use fascia_core::board::TaskBoard;
use fascia_core::event::EventStore;
use fascia_core::theme::Theme;

const THEME_STORAGE_KEY: &str = "fascia.theme";
const BOARD_STORAGE_KEY: &str = "fascia.kanban.tasks";
const EVENTS_STORAGE_KEY: &str = "fascia.calendar.events";

pub fn load_theme() -> Theme {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten());

    match stored {
        Some(value) => Theme::from_storage_value(&value),
        None => Theme::default(),
    }
}

pub fn save_theme(theme: Theme) {
    if let Some(storage) = web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.storage_value());
    }
}

pub fn load_board() -> TaskBoard {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(BOARD_STORAGE_KEY).ok().flatten());

    if let Some(raw) = stored {
        match serde_json::from_str::<TaskBoard>(&raw) {
            Ok(board) => return board,
            Err(error) => {
                tracing::error!(%error, "failed parsing kanban tasks from storage; reseeding");
            }
        }
    }

    TaskBoard::seed()
}

pub fn save_board(board: &TaskBoard) {
    let raw = match serde_json::to_string(board) {
        Ok(raw) => raw,
        Err(error) => {
            tracing::error!(%error, "failed serializing kanban tasks");
            return;
        }
    };

    if let Some(storage) = web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    {
        let _ = storage.set_item(BOARD_STORAGE_KEY, &raw);
    }
}

pub fn load_events() -> EventStore {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(EVENTS_STORAGE_KEY).ok().flatten());

    if let Some(raw) = stored {
        match serde_json::from_str::<EventStore>(&raw) {
            Ok(events) => return events,
            Err(error) => {
                tracing::error!(%error, "failed parsing calendar events from storage; starting empty");
            }
        }
    }

    EventStore::default()
}

pub fn save_events(events: &EventStore) {
    let raw = match serde_json::to_string(events) {
        Ok(raw) => raw,
        Err(error) => {
            tracing::error!(%error, "failed serializing calendar events");
            return;
        }
    };

    if let Some(storage) = web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    {
        let _ = storage.set_item(EVENTS_STORAGE_KEY, &raw);
    }
}
