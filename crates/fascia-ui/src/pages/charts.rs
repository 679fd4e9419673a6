use fascia_core::chart::Dataset;
use yew::{Callback, Html, TargetCast, function_component, html, use_state};

use crate::app::ui_debug;
use crate::components::{AreaChart, BarChart, LineChart, PieChart};

#[function_component(ChartsPage)]
pub fn charts_page() -> Html {
    let dataset = use_state(|| Dataset::Sales);

    let on_dataset_change = {
        let dataset = dataset.clone();
        Callback::from(move |e: web_sys::Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let next = Dataset::from_key(&select.value()).unwrap_or(Dataset::Sales);
            ui_debug("charts.dataset.change", next.as_key());
            dataset.set(next);
        })
    };

    let values = dataset.values().to_vec();
    let name = dataset.label().to_string();

    html! {
        <section class="page">
            <h1>{ "Interactive Charts" }</h1>
            <div class="chart-picker">
                <select value={dataset.as_key()} onchange={on_dataset_change}>
                    {
                        for Dataset::all().iter().map(|entry| html! {
                            <option value={entry.as_key()}>{ entry.label() }</option>
                        })
                    }
                </select>
            </div>
            <div class="chart-grid">
                <div class="chart-card">
                    <h2>{ "Line Chart" }</h2>
                    <LineChart values={values.clone()} name={name.clone()} />
                </div>
                <div class="chart-card">
                    <h2>{ "Bar Chart" }</h2>
                    <BarChart values={values.clone()} name={name.clone()} />
                </div>
                <div class="chart-card">
                    <h2>{ "Pie Chart" }</h2>
                    <PieChart />
                </div>
                <div class="chart-card">
                    <h2>{ "Area Chart" }</h2>
                    <AreaChart values={values.clone()} name={name.clone()} />
                </div>
            </div>
        </section>
    }
}
