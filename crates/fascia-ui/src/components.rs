mod area_chart;
mod bar_chart;
mod chart_axes;
mod event_modal;
mod kanban_card;
mod kanban_column;
mod line_chart;
mod pie_chart;
mod task_modal;
mod theme_toggle;

pub use area_chart::AreaChart;
pub use bar_chart::BarChart;
pub use event_modal::{EventModal, EventModalMode, EventModalState};
pub use kanban_card::KanbanCard;
pub use kanban_column::KanbanColumn;
pub use line_chart::LineChart;
pub use pie_chart::PieChart;
pub use task_modal::{TaskModal, TaskModalMode, TaskModalState};
pub use theme_toggle::ThemeToggle;
