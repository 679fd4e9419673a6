use fascia_core::chart::{self, Frame};
use yew::{Html, html};

pub(crate) fn value_axis(ceiling: f64, frame: &Frame) -> Html {
    html! {
        <>
            {
                for chart::tick_values(ceiling, 5).into_iter().map(|tick| {
                    let y = chart::y_position(tick, ceiling, frame);
                    html! {
                        <>
                            <line
                                x1={format!("{:.1}", frame.plot_left())}
                                y1={format!("{y:.1}")}
                                x2={format!("{:.1}", frame.plot_right())}
                                y2={format!("{y:.1}")}
                                stroke={chart::GRID_COLOR}
                                stroke-dasharray="3 3"
                            />
                            <text
                                x={format!("{:.1}", frame.plot_left() - 8.0)}
                                y={format!("{:.1}", y + 4.0)}
                                text-anchor="end"
                                fill={chart::AXIS_COLOR}
                                class="axis-label"
                            >
                                { chart::tick_label(tick) }
                            </text>
                        </>
                    }
                })
            }
        </>
    }
}

// Point-scale charts label months under the data points, band-scale
// charts under the middle of each slot.
pub(crate) fn month_axis(frame: &Frame, centered: bool) -> Html {
    let count = chart::MONTHS.len();
    html! {
        <>
            {
                for chart::MONTHS.iter().enumerate().map(|(index, month)| {
                    let x = if centered {
                        chart::band_center(index, count, frame)
                    } else {
                        chart::x_position(index, count, frame)
                    };
                    html! {
                        <text
                            x={format!("{x:.1}")}
                            y={format!("{:.1}", frame.plot_bottom() + 20.0)}
                            text-anchor="middle"
                            fill={chart::AXIS_COLOR}
                            class="axis-label"
                        >
                            { *month }
                        </text>
                    }
                })
            }
        </>
    }
}

pub(crate) fn series_legend(name: &str, color: &'static str) -> Html {
    html! {
        <div class="chart-legend">
            <span class="legend-item">
                <span class="legend-swatch" style={format!("background: {color}")}></span>
                { name.to_string() }
            </span>
        </div>
    }
}
