use chrono::{Datelike, Duration, NaiveDate};

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub const MONTH_GRID_CELLS: i64 = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Month,
    Week,
    Day,
}

impl ViewMode {
    pub fn all() -> [ViewMode; 3] {
        [ViewMode::Month, ViewMode::Week, ViewMode::Day]
    }

    pub fn as_key(self) -> &'static str {
        match self {
            ViewMode::Month => "month",
            ViewMode::Week => "week",
            ViewMode::Day => "day",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Month => "Month",
            ViewMode::Week => "Week",
            ViewMode::Day => "Day",
        }
    }

    pub fn from_key(key: &str) -> Option<ViewMode> {
        match key {
            "month" => Some(ViewMode::Month),
            "week" => Some(ViewMode::Week),
            "day" => Some(ViewMode::Day),
            _ => None,
        }
    }
}

pub fn first_day_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
}

pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days)).unwrap_or(date)
}

pub fn start_of_week(day: NaiveDate) -> NaiveDate {
    let back = day.weekday().num_days_from_sunday() as i64;
    add_days(day, -back)
}

pub fn month_grid(focus: NaiveDate) -> Vec<NaiveDate> {
    let first = first_day_of_month(focus.year(), focus.month());
    let grid_start = start_of_week(first);
    (0..MONTH_GRID_CELLS)
        .map(|offset| add_days(grid_start, offset))
        .collect()
}

pub fn week_days(focus: NaiveDate) -> Vec<NaiveDate> {
    let week_start = start_of_week(focus);
    (0..7).map(|offset| add_days(week_start, offset)).collect()
}

pub fn in_month(day: NaiveDate, focus: NaiveDate) -> bool {
    day.year() == focus.year() && day.month() == focus.month()
}

pub fn month_title(focus: NaiveDate) -> String {
    focus.format("%B %Y").to_string()
}

pub fn week_cell_label(day: NaiveDate) -> String {
    day.format("%a %-d").to_string()
}

pub fn day_title(day: NaiveDate) -> String {
    day.format("%A, %B %-d, %Y").to_string()
}
