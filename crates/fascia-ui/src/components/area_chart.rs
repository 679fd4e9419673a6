use fascia_core::chart::{self, Frame};
use yew::{Html, Properties, function_component, html};

use super::chart_axes::{month_axis, series_legend, value_axis};

#[derive(Properties, PartialEq)]
pub struct AreaChartProps {
    pub values: Vec<f64>,
    pub name: String,
}

#[function_component(AreaChart)]
pub fn area_chart(props: &AreaChartProps) -> Html {
    let frame = Frame::default();
    let max = props.values.iter().copied().fold(0.0_f64, f64::max);
    let ceiling = chart::nice_ceiling(max);
    let area = chart::area_points(&props.values, ceiling, &frame);
    let line = chart::polyline_points(&props.values, ceiling, &frame);

    html! {
        <div class="chart">
            <svg viewBox={format!("0 0 {} {}", frame.width, frame.height)} class="chart-svg">
                { value_axis(ceiling, &frame) }
                { month_axis(&frame, false) }
                <polygon points={area} fill={chart::SERIES_COLOR} fill-opacity="0.3" />
                <polyline
                    points={line}
                    fill="none"
                    stroke={chart::SERIES_COLOR}
                    stroke-width="2"
                />
            </svg>
            { series_legend(&props.name, chart::SERIES_COLOR) }
        </div>
    }
}
