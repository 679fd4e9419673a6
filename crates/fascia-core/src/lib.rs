pub mod board;
pub mod calendar;
pub mod chart;
pub mod event;
pub mod table;
pub mod task;
pub mod theme;
