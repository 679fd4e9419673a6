use fascia_core::chart::{self, Frame};
use yew::{Html, Properties, function_component, html};

use super::chart_axes::{month_axis, series_legend, value_axis};

#[derive(Properties, PartialEq)]
pub struct LineChartProps {
    pub values: Vec<f64>,
    pub name: String,
}

#[function_component(LineChart)]
pub fn line_chart(props: &LineChartProps) -> Html {
    let frame = Frame::default();
    let max = props.values.iter().copied().fold(0.0_f64, f64::max);
    let ceiling = chart::nice_ceiling(max);
    let points = chart::polyline_points(&props.values, ceiling, &frame);
    let count = props.values.len();

    html! {
        <div class="chart">
            <svg viewBox={format!("0 0 {} {}", frame.width, frame.height)} class="chart-svg">
                { value_axis(ceiling, &frame) }
                { month_axis(&frame, false) }
                <polyline
                    points={points}
                    fill="none"
                    stroke={chart::SERIES_COLOR}
                    stroke-width="2"
                />
                {
                    for props.values.iter().enumerate().map(|(index, value)| {
                        let x = chart::x_position(index, count, &frame);
                        let y = chart::y_position(*value, ceiling, &frame);
                        let month = chart::MONTHS.get(index).copied().unwrap_or("");
                        html! {
                            <circle
                                cx={format!("{x:.1}")}
                                cy={format!("{y:.1}")}
                                r="4"
                                fill={chart::SERIES_COLOR}
                            >
                                <title>{ format!("{month}: {value}") }</title>
                            </circle>
                        }
                    })
                }
            </svg>
            { series_legend(&props.name, chart::SERIES_COLOR) }
        </div>
    }
}
