pub const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

pub const SERIES_COLOR: &str = "#8884d8";
pub const GRID_COLOR: &str = "#374151";
pub const AXIS_COLOR: &str = "#6B7280";
pub const PIE_COLORS: [&str; 5] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884d8"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    Sales,
    Traffic,
    Users,
}

impl Dataset {
    pub fn all() -> [Dataset; 3] {
        [Dataset::Sales, Dataset::Traffic, Dataset::Users]
    }

    pub fn as_key(self) -> &'static str {
        match self {
            Dataset::Sales => "sales",
            Dataset::Traffic => "traffic",
            Dataset::Users => "users",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Dataset::Sales => "Sales Data",
            Dataset::Traffic => "Traffic Data",
            Dataset::Users => "User Data",
        }
    }

    pub fn from_key(key: &str) -> Option<Dataset> {
        match key {
            "sales" => Some(Dataset::Sales),
            "traffic" => Some(Dataset::Traffic),
            "users" => Some(Dataset::Users),
            _ => None,
        }
    }

    pub fn values(self) -> [f64; 6] {
        match self {
            Dataset::Sales => [4000.0, 3000.0, 2000.0, 2780.0, 1890.0, 2390.0],
            Dataset::Traffic => [2400.0, 1398.0, 9800.0, 3908.0, 4800.0, 3800.0],
            Dataset::Users => [1000.0, 2000.0, 3000.0, 4000.0, 5000.0, 6000.0],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSlice {
    pub name: &'static str,
    pub value: f64,
}

pub fn pie_data() -> [PieSlice; 4] {
    [
        PieSlice {
            name: "Group A",
            value: 400.0,
        },
        PieSlice {
            name: "Group B",
            value: 300.0,
        },
        PieSlice {
            name: "Group C",
            value: 300.0,
        },
        PieSlice {
            name: "Group D",
            value: 200.0,
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            width: 520.0,
            height: 300.0,
            margin_left: 48.0,
            margin_right: 16.0,
            margin_top: 16.0,
            margin_bottom: 32.0,
        }
    }
}

impl Frame {
    pub fn plot_left(&self) -> f64 {
        self.margin_left
    }

    pub fn plot_right(&self) -> f64 {
        self.width - self.margin_right
    }

    pub fn plot_top(&self) -> f64 {
        self.margin_top
    }

    pub fn plot_bottom(&self) -> f64 {
        self.height - self.margin_bottom
    }

    pub fn plot_width(&self) -> f64 {
        self.plot_right() - self.plot_left()
    }

    pub fn plot_height(&self) -> f64 {
        self.plot_bottom() - self.plot_top()
    }
}

pub fn nice_ceiling(max: f64) -> f64 {
    if max <= 0.0 {
        return 1.0;
    }
    let step = 10_f64.powf(max.log10().floor());
    (max / step).ceil() * step
}

pub fn tick_values(ceiling: f64, count: usize) -> Vec<f64> {
    let count = count.max(2);
    (0..count)
        .map(|i| ceiling * i as f64 / (count - 1) as f64)
        .collect()
}

pub fn tick_label(value: f64) -> String {
    format!("{value:.0}")
}

pub fn x_position(index: usize, count: usize, frame: &Frame) -> f64 {
    if count <= 1 {
        return frame.plot_left() + frame.plot_width() / 2.0;
    }
    frame.plot_left() + frame.plot_width() * index as f64 / (count - 1) as f64
}

pub fn y_position(value: f64, ceiling: f64, frame: &Frame) -> f64 {
    let ceiling = if ceiling <= 0.0 { 1.0 } else { ceiling };
    frame.plot_bottom() - frame.plot_height() * (value / ceiling)
}

pub fn polyline_points(values: &[f64], ceiling: f64, frame: &Frame) -> String {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let x = x_position(index, values.len(), frame);
            let y = y_position(*value, ceiling, frame);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn area_points(values: &[f64], ceiling: f64, frame: &Frame) -> String {
    if values.is_empty() {
        return String::new();
    }
    let line = polyline_points(values, ceiling, frame);
    let right = x_position(values.len() - 1, values.len(), frame);
    let left = x_position(0, values.len(), frame);
    let bottom = frame.plot_bottom();
    format!("{line} {right:.1},{bottom:.1} {left:.1},{bottom:.1}")
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

pub fn bar_rect(index: usize, count: usize, value: f64, ceiling: f64, frame: &Frame) -> BarRect {
    let count = count.max(1);
    let slot = frame.plot_width() / count as f64;
    let width = slot * 0.6;
    let x = frame.plot_left() + slot * index as f64 + (slot - width) / 2.0;
    let y = y_position(value, ceiling, frame);
    BarRect {
        x,
        y,
        width,
        height: frame.plot_bottom() - y,
    }
}

pub fn band_center(index: usize, count: usize, frame: &Frame) -> f64 {
    let count = count.max(1);
    let slot = frame.plot_width() / count as f64;
    frame.plot_left() + slot * index as f64 + slot / 2.0
}

// Pie angles are expressed as turns in [0, 1], starting at twelve o'clock
// and sweeping clockwise.
pub fn pie_fractions(slices: &[PieSlice]) -> Vec<(f64, f64)> {
    let total: f64 = slices.iter().map(|slice| slice.value).sum();
    if total <= 0.0 {
        return slices.iter().map(|_| (0.0, 0.0)).collect();
    }
    let mut cursor = 0.0;
    slices
        .iter()
        .map(|slice| {
            let start = cursor;
            cursor += slice.value / total;
            (start, cursor)
        })
        .collect()
}

fn pie_point(cx: f64, cy: f64, radius: f64, turn: f64) -> (f64, f64) {
    let angle = turn * std::f64::consts::TAU - std::f64::consts::FRAC_PI_2;
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

pub fn pie_slice_path(cx: f64, cy: f64, radius: f64, start: f64, end: f64) -> String {
    let (x0, y0) = pie_point(cx, cy, radius, start);
    let (x1, y1) = pie_point(cx, cy, radius, end);
    let large_arc = if end - start > 0.5 { 1 } else { 0 };
    format!(
        "M {cx:.1} {cy:.1} L {x0:.1} {y0:.1} A {radius:.1} {radius:.1} 0 {large_arc} 1 {x1:.1} {y1:.1} Z"
    )
}

pub fn pie_label_anchor(cx: f64, cy: f64, radius: f64, start: f64, end: f64) -> (f64, f64) {
    let mid = (start + end) / 2.0;
    pie_point(cx, cy, radius * 1.25, mid)
}

pub fn pie_label_align(start: f64, end: f64) -> &'static str {
    let mid = (start + end) / 2.0;
    if mid < 0.5 { "start" } else { "end" }
}

pub fn percent_label(name: &str, value: f64, total: f64) -> String {
    if total <= 0.0 {
        return name.to_string();
    }
    format!("{name} {:.0}%", value / total * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceilings_round_up_to_clean_steps() {
        assert_eq!(nice_ceiling(9800.0), 10000.0);
        assert_eq!(nice_ceiling(4000.0), 4000.0);
        assert_eq!(nice_ceiling(6000.0), 6000.0);
        assert_eq!(nice_ceiling(950.0), 1000.0);
        assert_eq!(nice_ceiling(0.0), 1.0);
    }

    #[test]
    fn ticks_span_zero_to_ceiling() {
        assert_eq!(
            tick_values(4000.0, 5),
            vec![0.0, 1000.0, 2000.0, 3000.0, 4000.0]
        );
    }

    #[test]
    fn values_scale_into_the_plot_area() {
        let frame = Frame::default();
        assert_eq!(y_position(0.0, 4000.0, &frame), frame.plot_bottom());
        assert_eq!(y_position(4000.0, 4000.0, &frame), frame.plot_top());

        let points = polyline_points(&Dataset::Sales.values(), 4000.0, &frame);
        assert_eq!(points.split(' ').count(), 6);
        assert!(points.starts_with("48.0,"));
    }

    #[test]
    fn area_polygon_closes_along_the_baseline() {
        let frame = Frame::default();
        let points = area_points(&[1.0, 2.0], 2.0, &frame);
        let pairs: Vec<&str> = points.split(' ').collect();
        assert_eq!(pairs.len(), 4);
        let bottom = format!("{:.1}", frame.plot_bottom());
        assert!(pairs[2].ends_with(&bottom));
        assert!(pairs[3].ends_with(&bottom));
    }

    #[test]
    fn bars_sit_inside_their_slots() {
        let frame = Frame::default();
        let rect = bar_rect(0, 6, 4000.0, 4000.0, &frame);
        assert!(rect.x >= frame.plot_left());
        assert_eq!(rect.y, frame.plot_top());
        assert_eq!(rect.height, frame.plot_height());

        let last = bar_rect(5, 6, 100.0, 4000.0, &frame);
        assert!(last.x + last.width <= frame.plot_right() + 0.001);
    }

    #[test]
    fn pie_fractions_cover_the_whole_circle() {
        let fractions = pie_fractions(&pie_data());
        assert_eq!(fractions.len(), 4);
        assert_eq!(fractions[0].0, 0.0);
        assert!((fractions[3].1 - 1.0).abs() < 1e-9);
        for window in fractions.windows(2) {
            assert_eq!(window[0].1, window[1].0);
        }
    }

    #[test]
    fn slice_paths_flag_the_large_arc() {
        let small = pie_slice_path(150.0, 150.0, 80.0, 0.0, 0.25);
        assert!(small.contains(" 0 1 "));
        let large = pie_slice_path(150.0, 150.0, 80.0, 0.0, 0.75);
        assert!(large.contains(" 1 1 "));
        assert!(small.starts_with("M 150.0 150.0 L 150.0 70.0 A 80.0 80.0"));
    }

    #[test]
    fn labels_round_percentages_like_the_legend() {
        let total = 1200.0;
        assert_eq!(percent_label("Group A", 400.0, total), "Group A 33%");
        assert_eq!(percent_label("Group D", 200.0, total), "Group D 17%");
    }
}
