mod calendar;
mod charts;
mod home;
mod kanban;
mod table;

pub use calendar::CalendarPage;
pub use charts::ChartsPage;
pub use home::HomePage;
pub use kanban::KanbanPage;
pub use table::TablePage;
