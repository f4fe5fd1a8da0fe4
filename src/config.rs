// ---------------------------------------------------------------------------
// Chart and window configuration
// ---------------------------------------------------------------------------

/// Styling knobs for one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    /// Title of the category / x axis.
    pub axis_label: String,
    /// Rotation of category tick labels in degrees; negative turns them
    /// counter-clockwise.
    pub tick_angle_deg: f32,
    pub legend_title: String,
    /// Fraction of each category slot left empty between bars.
    pub bar_gap: f64,
    /// Extra space, in slot units, inserted between bars of different
    /// countries.
    pub group_gap: f64,
}

impl ChartStyle {
    fn plain(axis_label: &str, legend_title: &str) -> Self {
        ChartStyle {
            axis_label: axis_label.to_string(),
            tick_angle_deg: 0.0,
            legend_title: legend_title.to_string(),
            bar_gap: 0.0,
            group_gap: 0.0,
        }
    }

    /// Tick rotation in radians.
    pub fn tick_angle_rad(&self) -> f32 {
        self.tick_angle_deg.to_radians()
    }
}

/// Per-chart styling.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub bar: ChartStyle,
    pub pie: ChartStyle,
    pub line: ChartStyle,
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            bar: ChartStyle {
                tick_angle_deg: -45.0,
                bar_gap: 0.2,
                group_gap: 0.1,
                ..ChartStyle::plain("Country (Year)", "Country")
            },
            pie: ChartStyle::plain("", "Country"),
            line: ChartStyle::plain("Year", "Country"),
        }
    }
}

/// Native window settings.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: &'static str,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "IT Industry Dashboard",
            inner_size: [1280.0, 900.0],
            min_inner_size: [700.0, 500.0],
        }
    }
}
