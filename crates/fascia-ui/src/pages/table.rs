use fascia_core::table::{self, AccountStatus, PAGE_SIZES, SortDir, SortKey, TableQuery};
use web_sys::MouseEvent;
use yew::{Callback, Html, TargetCast, classes, function_component, html, use_state};

use crate::app::ui_debug;

#[function_component(TablePage)]
pub fn table_page() -> Html {
    let query = use_state(TableQuery::default);
    let people = table::sample_people();
    let view = table::run_query(&people, &query);
    let view_page = view.page;
    let page_count = view.page_count;

    let on_filter_input = {
        let query = query.clone();
        Callback::from(move |e: web_sys::InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*query).clone();
            next.filter = input.value();
            next.page = 0;
            query.set(next);
        })
    };

    let on_page_size_change = {
        let query = query.clone();
        Callback::from(move |e: web_sys::Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let Ok(size) = select.value().parse::<usize>() else {
                return;
            };
            let mut next = (*query).clone();
            next.page = table::rescale_page(next.page, next.page_size, size);
            next.page_size = size;
            ui_debug("table.page-size.change", &size.to_string());
            query.set(next);
        })
    };

    let go_first = {
        let query = query.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*query).clone();
            next.page = 0;
            query.set(next);
        })
    };

    let go_previous = {
        let query = query.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*query).clone();
            next.page = view_page.saturating_sub(1);
            query.set(next);
        })
    };

    let go_next = {
        let query = query.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*query).clone();
            next.page = (view_page + 1).min(page_count - 1);
            query.set(next);
        })
    };

    let go_last = {
        let query = query.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*query).clone();
            next.page = page_count - 1;
            query.set(next);
        })
    };

    html! {
        <section class="page">
            <h1>{ "Dynamic Tables" }</h1>
            <div class="table-controls">
                <input
                    class="table-search"
                    value={query.filter.clone()}
                    placeholder="Search all columns..."
                    oninput={on_filter_input}
                />
                <select value={query.page_size.to_string()} onchange={on_page_size_change}>
                    {
                        for PAGE_SIZES.iter().map(|size| html! {
                            <option value={size.to_string()}>{ format!("Show {size}") }</option>
                        })
                    }
                </select>
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        {
                            for SortKey::all().iter().map(|&key| {
                                let indicator = match query.sort {
                                    Some((active, SortDir::Asc)) if active == key => " ↑",
                                    Some((active, SortDir::Desc)) if active == key => " ↓",
                                    _ => "",
                                };
                                let onclick = {
                                    let query = query.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        let mut next = (*query).clone();
                                        next.sort = table::next_sort(next.sort, key);
                                        ui_debug("table.sort.click", key.header());
                                        query.set(next);
                                    })
                                };
                                html! {
                                    <th {onclick}>{ format!("{}{indicator}", key.header()) }</th>
                                }
                            })
                        }
                    </tr>
                </thead>
                <tbody>
                    {
                        for view.rows.iter().map(|person| html! {
                            <tr key={person.id.to_string()}>
                                {
                                    for SortKey::all().iter().map(|&key| {
                                        if key == SortKey::Status {
                                            let status_class = match person.status {
                                                AccountStatus::Active => "active",
                                                AccountStatus::Inactive => "inactive",
                                            };
                                            html! {
                                                <td>
                                                    <span class={classes!("status-badge", status_class)}>
                                                        { person.status.as_str() }
                                                    </span>
                                                </td>
                                            }
                                        } else {
                                            html! { <td>{ table::cell_text(person, key) }</td> }
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </tbody>
            </table>
            <div class="table-pagination">
                <button type="button" onclick={go_first} disabled={view_page == 0}>
                    { "<<" }
                </button>
                <button type="button" onclick={go_previous} disabled={view_page == 0}>
                    { "<" }
                </button>
                <button type="button" onclick={go_next} disabled={view_page + 1 >= page_count}>
                    { ">" }
                </button>
                <button type="button" onclick={go_last} disabled={view_page + 1 >= page_count}>
                    { ">>" }
                </button>
                <span class="page-report">
                    { "Page " }
                    <strong>{ format!("{} of {}", view_page + 1, page_count) }</strong>
                </span>
            </div>
        </section>
    }
}
