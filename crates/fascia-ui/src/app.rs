use fascia_core::theme::Theme;
use gloo::console::log;
use web_sys::MouseEvent;
use yew::{Callback, ContextProvider, Html, classes, function_component, html, use_state};
use yew_router::components::{Link, Redirect};
use yew_router::{BrowserRouter, Routable, Switch};

use crate::components::ThemeToggle;
use crate::pages::{CalendarPage, ChartsPage, HomePage, KanbanPage, TablePage};
use crate::storage;

#[derive(Clone, Copy, Routable, PartialEq)]
enum Route {
    #[at("/")]
    Home,
    #[at("/charts")]
    Charts,
    #[at("/table")]
    Table,
    #[at("/kanban")]
    Kanban,
    #[at("/calendar")]
    Calendar,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Charts => html! { <ChartsPage /> },
        Route::Table => html! { <TablePage /> },
        Route::Kanban => html! { <KanbanPage /> },
        Route::Calendar => html! { <CalendarPage /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let theme = use_state(storage::load_theme);

    let on_theme_toggle = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = theme.toggled();
            ui_debug("theme.toggle.click", next.storage_value());
            storage::save_theme(next);
            theme.set(next);
        })
    };

    html! {
        <ContextProvider<Theme> context={*theme}>
            <BrowserRouter>
                <div class={classes!("app-shell", theme.as_class())}>
                    <header class="app-header">
                        <Link<Route> to={Route::Home} classes="brand">{ "Fascia" }</Link<Route>>
                        <div class="header-actions">
                            <ThemeToggle on_toggle={on_theme_toggle} />
                            <button type="button" class="btn">{ "Login" }</button>
                            <button type="button" class="btn btn-primary">{ "Get Started" }</button>
                        </div>
                    </header>
                    <main class="app-main">
                        <Switch<Route> render={switch} />
                    </main>
                    { feature_section() }
                </div>
            </BrowserRouter>
        </ContextProvider<Theme>>
    }
}

fn feature_section() -> Html {
    let features = [
        (
            Route::Charts,
            charts_icon(),
            "Interactive Charts",
            "Visualize your data with customizable charts.",
        ),
        (
            Route::Table,
            table_icon(),
            "Dynamic Tables",
            "View and manage data in flexible tables.",
        ),
        (
            Route::Kanban,
            kanban_icon(),
            "Kanban Boards",
            "Organize tasks with a drag-and-drop Kanban board",
        ),
        (
            Route::Calendar,
            calendar_icon(),
            "Calendar",
            "Manage events or tasks by date",
        ),
    ];

    html! {
        <section class="features">
            <h2>{ "Features" }</h2>
            <div class="feature-grid">
                {
                    for features.into_iter().map(|(route, icon, title, blurb)| html! {
                        <Link<Route> to={route} classes="feature-card">
                            <div class="feature-icon">{ icon }</div>
                            <div>
                                <div class="feature-title">{ title }</div>
                                <div class="feature-blurb">{ blurb }</div>
                            </div>
                        </Link<Route>>
                    })
                }
            </div>
        </section>
    }
}

fn charts_icon() -> Html {
    html! {
        <svg width="28" height="28" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24">
            <path d="M3 17l6-6 4 4 8-8" />
            <path d="M14 7h7v7" />
        </svg>
    }
}

fn table_icon() -> Html {
    html! {
        <svg width="28" height="28" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24">
            <rect x="3" y="3" width="7" height="7" />
            <rect x="14" y="3" width="7" height="7" />
            <rect x="14" y="14" width="7" height="7" />
            <rect x="3" y="14" width="7" height="7" />
        </svg>
    }
}

fn kanban_icon() -> Html {
    html! {
        <svg width="28" height="28" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24">
            <rect x="3" y="3" width="7" height="7" />
            <rect x="3" y="14" width="7" height="7" />
            <rect x="14" y="14" width="7" height="7" />
        </svg>
    }
}

fn calendar_icon() -> Html {
    html! {
        <svg width="28" height="28" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24">
            <circle cx="12" cy="12" r="10" />
            <circle cx="12" cy="12" r="4" />
        </svg>
    }
}

pub(crate) fn ui_debug(event: &str, detail: &str) {
    tracing::debug!(event, detail, "ui-debug");
    log!(format!("[ui-debug] {event}: {detail}"));
}
