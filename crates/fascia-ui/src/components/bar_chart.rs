use fascia_core::chart::{self, Frame};
use yew::{Html, Properties, function_component, html};

use super::chart_axes::{month_axis, series_legend, value_axis};

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub values: Vec<f64>,
    pub name: String,
}

#[function_component(BarChart)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    let frame = Frame::default();
    let max = props.values.iter().copied().fold(0.0_f64, f64::max);
    let ceiling = chart::nice_ceiling(max);
    let count = props.values.len();

    html! {
        <div class="chart">
            <svg viewBox={format!("0 0 {} {}", frame.width, frame.height)} class="chart-svg">
                { value_axis(ceiling, &frame) }
                { month_axis(&frame, true) }
                {
                    for props.values.iter().enumerate().map(|(index, value)| {
                        let rect = chart::bar_rect(index, count, *value, ceiling, &frame);
                        let month = chart::MONTHS.get(index).copied().unwrap_or("");
                        html! {
                            <rect
                                x={format!("{:.1}", rect.x)}
                                y={format!("{:.1}", rect.y)}
                                width={format!("{:.1}", rect.width)}
                                height={format!("{:.1}", rect.height)}
                                fill={chart::SERIES_COLOR}
                            >
                                <title>{ format!("{month}: {value}") }</title>
                            </rect>
                        }
                    })
                }
            </svg>
            { series_legend(&props.name, chart::SERIES_COLOR) }
        </div>
    }
}
