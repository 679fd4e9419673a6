use std::cmp::Ordering;

use chrono::NaiveDate;

pub const PAGE_SIZES: [usize; 6] = [5, 10, 20, 30, 40, 50];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
    Editor,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::User => "User",
            Role::Editor => "Editor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountStatus {
    Active,
    Inactive,
}

impl AccountStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AccountStatus::Active => "Active",
            AccountStatus::Inactive => "Inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: AccountStatus,
    pub last_login: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Email,
    Role,
    Status,
    LastLogin,
}

impl SortKey {
    pub fn all() -> [SortKey; 5] {
        [
            SortKey::Name,
            SortKey::Email,
            SortKey::Role,
            SortKey::Status,
            SortKey::LastLogin,
        ]
    }

    pub fn header(self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Email => "Email",
            SortKey::Role => "Role",
            SortKey::Status => "Status",
            SortKey::LastLogin => "Last Login",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

pub fn next_sort(
    current: Option<(SortKey, SortDir)>,
    clicked: SortKey,
) -> Option<(SortKey, SortDir)> {
    match current {
        Some((key, SortDir::Asc)) if key == clicked => Some((clicked, SortDir::Desc)),
        Some((key, SortDir::Desc)) if key == clicked => None,
        _ => Some((clicked, SortDir::Asc)),
    }
}

// Re-derives the page index across a page-size change so the row at
// the top of the old page stays visible on the new one.
pub fn rescale_page(page: usize, old_size: usize, new_size: usize) -> usize {
    (page * old_size) / new_size.max(1)
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableQuery {
    pub filter: String,
    pub sort: Option<(SortKey, SortDir)>,
    pub page: usize,
    pub page_size: usize,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self {
            filter: String::new(),
            sort: None,
            page: 0,
            page_size: PAGE_SIZES[0],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub rows: Vec<Person>,
    pub page: usize,
    pub page_count: usize,
    pub total: usize,
}

pub fn cell_text(person: &Person, key: SortKey) -> String {
    match key {
        SortKey::Name => person.name.clone(),
        SortKey::Email => person.email.clone(),
        SortKey::Role => person.role.as_str().to_string(),
        SortKey::Status => person.status.as_str().to_string(),
        SortKey::LastLogin => person.last_login.format("%Y-%m-%d").to_string(),
    }
}

fn matches_filter(person: &Person, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    SortKey::all()
        .iter()
        .any(|key| cell_text(person, *key).to_lowercase().contains(needle))
}

fn compare(a: &Person, b: &Person, key: SortKey) -> Ordering {
    match key {
        SortKey::LastLogin => a.last_login.cmp(&b.last_login),
        _ => cell_text(a, key)
            .to_lowercase()
            .cmp(&cell_text(b, key).to_lowercase()),
    }
}

pub fn run_query(people: &[Person], query: &TableQuery) -> TableView {
    let needle = query.filter.to_lowercase();
    let mut rows: Vec<Person> = people
        .iter()
        .filter(|person| matches_filter(person, &needle))
        .cloned()
        .collect();

    if let Some((key, dir)) = query.sort {
        rows.sort_by(|a, b| {
            let ordering = compare(a, b, key);
            match dir {
                SortDir::Asc => ordering,
                SortDir::Desc => ordering.reverse(),
            }
        });
    }

    let total = rows.len();
    let page_size = query.page_size.max(1);
    let page_count = total.div_ceil(page_size).max(1);
    let page = query.page.min(page_count - 1);
    let rows = rows
        .into_iter()
        .skip(page * page_size)
        .take(page_size)
        .collect();

    TableView {
        rows,
        page,
        page_count,
        total,
    }
}

pub fn sample_people() -> Vec<Person> {
    let person = |id: u32,
                  name: &str,
                  email: &str,
                  role: Role,
                  status: AccountStatus,
                  last_login: (i32, u32, u32)| Person {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role,
        status,
        last_login: NaiveDate::from_ymd_opt(last_login.0, last_login.1, last_login.2)
            .unwrap_or(NaiveDate::MIN),
    };

    vec![
        person(
            1,
            "John Doe",
            "john@example.com",
            Role::Admin,
            AccountStatus::Active,
            (2024, 3, 15),
        ),
        person(
            2,
            "Jane Smith",
            "jane@example.com",
            Role::User,
            AccountStatus::Active,
            (2024, 3, 14),
        ),
        person(
            3,
            "Bob Johnson",
            "bob@example.com",
            Role::Editor,
            AccountStatus::Inactive,
            (2024, 3, 13),
        ),
        person(
            4,
            "Alice Brown",
            "alice@example.com",
            Role::User,
            AccountStatus::Active,
            (2024, 3, 12),
        ),
        person(
            5,
            "Charlie Wilson",
            "charlie@example.com",
            Role::Editor,
            AccountStatus::Active,
            (2024, 3, 11),
        ),
        person(
            6,
            "Diana Miller",
            "diana@example.com",
            Role::User,
            AccountStatus::Inactive,
            (2024, 3, 10),
        ),
        person(
            7,
            "Edward Davis",
            "edward@example.com",
            Role::Admin,
            AccountStatus::Active,
            (2024, 3, 9),
        ),
        person(
            8,
            "Fiona Clark",
            "fiona@example.com",
            Role::User,
            AccountStatus::Active,
            (2024, 3, 8),
        ),
        person(
            9,
            "George White",
            "george@example.com",
            Role::Editor,
            AccountStatus::Inactive,
            (2024, 3, 7),
        ),
        person(
            10,
            "Hannah Lee",
            "hannah@example.com",
            Role::User,
            AccountStatus::Active,
            (2024, 3, 6),
        ),
    ]
}
