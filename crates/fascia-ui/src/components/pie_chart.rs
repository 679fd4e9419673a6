use fascia_core::chart;
use yew::{Html, function_component, html};

const PIE_SIZE: f64 = 300.0;
const PIE_RADIUS: f64 = 80.0;

#[function_component(PieChart)]
pub fn pie_chart() -> Html {
    let slices = chart::pie_data();
    let total: f64 = slices.iter().map(|slice| slice.value).sum();
    let fractions = chart::pie_fractions(&slices);
    let center = PIE_SIZE / 2.0;

    html! {
        <div class="chart">
            <svg viewBox={format!("0 0 {PIE_SIZE} {PIE_SIZE}")} class="chart-svg chart-pie">
                {
                    for slices.iter().zip(fractions.iter()).enumerate().map(|(index, (slice, &(start, end)))| {
                        let color = chart::PIE_COLORS[index % chart::PIE_COLORS.len()];
                        let path = chart::pie_slice_path(center, center, PIE_RADIUS, start, end);
                        let (label_x, label_y) = chart::pie_label_anchor(center, center, PIE_RADIUS, start, end);
                        html! {
                            <>
                                <path d={path} fill={color}>
                                    <title>{ format!("{}: {}", slice.name, slice.value) }</title>
                                </path>
                                <text
                                    x={format!("{label_x:.1}")}
                                    y={format!("{label_y:.1}")}
                                    text-anchor={chart::pie_label_align(start, end)}
                                    fill={color}
                                    class="pie-label"
                                >
                                    { chart::percent_label(slice.name, slice.value, total) }
                                </text>
                            </>
                        }
                    })
                }
            </svg>
            <div class="chart-legend">
                {
                    for slices.iter().enumerate().map(|(index, slice)| {
                        let color = chart::PIE_COLORS[index % chart::PIE_COLORS.len()];
                        html! {
                            <span class="legend-item">
                                <span class="legend-swatch" style={format!("background: {color}")}></span>
                                { slice.name }
                            </span>
                        }
                    })
                }
            </div>
        </div>
    }
}
