use yew::{Html, function_component, html};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <section class="hero">
            <h1 class="hero-title">
                { "Powerful Admin Dashboard" }
                <br />
                { "for Your Business" }
            </h1>
            <p class="hero-blurb">
                { "Manage your data with interactive charts, dynamic tables, Kanban boards, and more – all in one place." }
            </p>
            <button type="button" class="btn btn-hero">{ "Get Started" }</button>
        </section>
    }
}
