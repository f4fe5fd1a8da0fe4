use std::f64::consts::TAU;

use eframe::egui::epaint::{Mesh, TextShape};
use eframe::egui::{self, Align2, Color32, FontId, Pos2, RichText, Sense, Stroke, Ui, Vec2};
use egui_plot::{
    uniform_grid_spacer, Bar, BarChart, Legend, Line, Plot, PlotPoint, PlotPoints, Points, Text,
};

use crate::color::CountryColors;
use crate::config::ChartStyle;
use crate::dashboard::bar::BarView;
use crate::dashboard::format_value;
use crate::dashboard::line::LineView;
use crate::dashboard::pie::PieView;
use crate::data::metric::Metric;

const CHART_HEIGHT: f32 = 340.0;
const LEGEND_WIDTH: f32 = 160.0;
const LABEL_PADDING: f32 = 4.0;

// ---------------------------------------------------------------------------
// Grouped bar chart
// ---------------------------------------------------------------------------

/// Bar per country/year with value labels above and rotated category labels.
pub fn bar_chart(
    ui: &mut Ui,
    bars: &BarView,
    metric: Metric,
    colors: &CountryColors,
    style: &ChartStyle,
) {
    if bars.entries.is_empty() {
        ui.label(RichText::new("No rows match the current filters.").weak());
        return;
    }

    // Countries in the order their first bar appears.
    let mut countries: Vec<&str> = Vec::new();
    for e in &bars.entries {
        if !countries.contains(&e.country.as_str()) {
            countries.push(&e.country);
        }
    }

    let response = Plot::new("bar_chart")
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .y_axis_label(metric.label())
        .x_axis_formatter(|_, _| String::new())
        .include_y(0.0)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for country in &countries {
                let color = colors.color_for(country);
                let country_bars: Vec<Bar> = bars
                    .drawn()
                    .filter(|(e, _)| e.country == *country)
                    .map(|(e, v)| {
                        Bar::new(e.position, v)
                            .width(bars.bar_width)
                            .name(&e.label)
                            .fill(color)
                    })
                    .collect();
                plot_ui.bar_chart(BarChart::new(country_bars).name(country).color(color));
            }

            for (e, v) in bars.drawn() {
                let anchor = if v >= 0.0 {
                    Align2::CENTER_BOTTOM
                } else {
                    Align2::CENTER_TOP
                };
                plot_ui.text(
                    Text::new(PlotPoint::new(e.position, v), RichText::new(format_value(v)).small())
                        .anchor(anchor),
                );
            }
        });

    // Category labels, rotated, in a strip under the plot frame.
    let transform = response.transform;
    let frame = *transform.frame();
    let text_color = ui.visuals().text_color();
    let angle = style.tick_angle_rad();
    let labels: Vec<_> = bars
        .entries
        .iter()
        .map(|e| {
            let font = FontId::proportional(11.0);
            let galley = ui.painter().layout_no_wrap(e.label.clone(), font, text_color);
            (e.position, galley)
        })
        .collect();
    let strip_height = labels
        .iter()
        .map(|(_, galley)| rotated_height(galley.size(), angle))
        .fold(0.0, f32::max)
        + 2.0 * LABEL_PADDING;
    let strip_width = ui.available_width();
    let (strip, _) = ui.allocate_exact_size(Vec2::new(strip_width, strip_height), Sense::hover());
    let painter = ui.painter_at(strip);
    for (position, galley) in labels {
        let x = transform.position_from_point(&PlotPoint::new(position, 0.0)).x;
        if x < frame.left() || x > frame.right() {
            continue;
        }
        let anchor = Pos2::new(x, strip.top() + LABEL_PADDING);
        let pivot = label_pivot(anchor, galley.size(), angle);
        painter.add(TextShape::new(pivot, galley, text_color).with_angle(angle));
    }
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(&style.axis_label).small());
    });
}

/// Vertical extent of a `size` label once rotated by `angle` radians.
fn rotated_height(size: Vec2, angle: f32) -> f32 {
    size.x * angle.sin().abs() + size.y * angle.cos().abs()
}

/// Top-left pivot for a label hung below `anchor`, so that once rotated by
/// `angle` it never rises above the anchor. Counter-clockwise labels end at
/// the anchor, clockwise ones start there, level ones are centred on it.
fn label_pivot(anchor: Pos2, size: Vec2, angle: f32) -> Pos2 {
    let (sin, cos) = angle.sin_cos();
    if angle == 0.0 {
        anchor - Vec2::new(size.x / 2.0, 0.0)
    } else if sin < 0.0 {
        anchor - Vec2::new(cos, sin) * size.x
    } else {
        anchor
    }
}

/// Swatch + text row used by the hand-drawn legends.
fn legend_entry(ui: &mut Ui, text: &str, color: Color32) {
    ui.horizontal(|ui: &mut Ui| {
        let (swatch, _) = ui.allocate_exact_size(Vec2::splat(12.0), Sense::hover());
        ui.painter().rect_filled(swatch, 2.0, color);
        ui.label(text);
    });
}

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

/// Single-year distribution drawn as triangle fans, legend on the right.
pub fn pie_chart(ui: &mut Ui, pie: &PieView, colors: &CountryColors, style: &ChartStyle) {
    ui.horizontal(|ui: &mut Ui| {
        let diameter = CHART_HEIGHT.min(ui.available_width() * 0.6);
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(diameter), Sense::hover());
        let painter = ui.painter_at(rect);
        let center = rect.center();
        let radius = diameter * 0.45;

        for slice in &pie.slices {
            let color = colors.color_for(&slice.country);
            painter.add(egui::Shape::mesh(sector_mesh(
                center,
                radius,
                slice.start_angle,
                slice.sweep,
                color,
            )));
        }

        // Separators and percentage labels on top of the fill.
        let separator = Stroke::new(1.5, ui.visuals().extreme_bg_color);
        for slice in &pie.slices {
            if pie.slices.len() > 1 {
                painter.line_segment([center, polar(center, radius, slice.start_angle)], separator);
            }
            if slice.fraction >= 0.04 {
                let mid = slice.start_angle + slice.sweep / 2.0;
                painter.text(
                    polar(center, radius * 0.65, mid),
                    Align2::CENTER_CENTER,
                    format!("{:.1}%", slice.fraction * 100.0),
                    FontId::proportional(12.0),
                    Color32::WHITE,
                );
            }
        }

        let hovered = response.hover_pos().and_then(|pos| {
            let d = pos - center;
            if d.length() > radius {
                return None;
            }
            pie.slice_at((d.y as f64).atan2(d.x as f64))
        });
        if let Some(slice) = hovered {
            response.on_hover_ui_at_pointer(|ui: &mut Ui| {
                ui.strong(&slice.country);
                ui.label(format!(
                    "{} ({:.1}%)",
                    format_value(slice.value),
                    slice.fraction * 100.0
                ));
            });
        }

        ui.vertical(|ui: &mut Ui| {
            ui.strong(&style.legend_title);
            ui.label(RichText::new(format!("Total: {}", format_value(pie.total))).weak());
            for slice in &pie.slices {
                legend_entry(
                    ui,
                    &format!("{}: {}", slice.country, format_value(slice.value)),
                    colors.color_for(&slice.country),
                );
            }
        });
    });
}

fn polar(center: Pos2, radius: f32, angle: f64) -> Pos2 {
    center + Vec2::new(angle.cos() as f32, angle.sin() as f32) * radius
}

/// Filled circular sector as a fan of triangles around `center`.
fn sector_mesh(center: Pos2, radius: f32, start: f64, sweep: f64, color: Color32) -> Mesh {
    let steps = ((sweep / (TAU / 180.0)).ceil() as u32).max(1);
    let mut mesh = Mesh::default();
    mesh.colored_vertex(center, color);
    for k in 0..=steps {
        let angle = start + sweep * k as f64 / steps as f64;
        mesh.colored_vertex(polar(center, radius, angle), color);
    }
    for k in 0..steps {
        mesh.add_triangle(0, k + 1, k + 2);
    }
    mesh
}

// ---------------------------------------------------------------------------
// Time-series line chart
// ---------------------------------------------------------------------------

/// One line per country over every year, markers on each point, legend on
/// the right.
pub fn line_chart(
    ui: &mut Ui,
    line: &LineView,
    metric: Metric,
    colors: &CountryColors,
    style: &ChartStyle,
) {
    if line.series.is_empty() {
        ui.label(RichText::new("No numeric values for the selected countries.").weak());
        return;
    }

    let mut plot = Plot::new("line_chart")
        .height(CHART_HEIGHT)
        .x_axis_label(style.axis_label.clone())
        .y_axis_label(metric.label())
        .x_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .x_axis_formatter(|mark, _| {
            if mark.value.fract() == 0.0 {
                format!("{:.0}", mark.value)
            } else {
                String::new()
            }
        })
        .allow_scroll(false);
    if let Some((first, last)) = line.year_range() {
        plot = plot.include_x(first as f64 - 0.5).include_x(last as f64 + 0.5);
    }

    ui.horizontal_top(|ui: &mut Ui| {
        let plot_width = (ui.available_width() - LEGEND_WIDTH).max(200.0);
        plot.width(plot_width).show(ui, |plot_ui| {
            for series in &line.series {
                let color = colors.color_for(&series.country);
                let points: Vec<[f64; 2]> = series
                    .points
                    .iter()
                    .map(|&(year, value)| [year as f64, value])
                    .collect();

                plot_ui.line(
                    Line::new(PlotPoints::from(points.clone()))
                        .name(&series.country)
                        .color(color)
                        .width(2.0),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from(points))
                        .name(&series.country)
                        .color(color)
                        .radius(3.5),
                );
            }
        });

        ui.vertical(|ui: &mut Ui| {
            ui.strong(&style.legend_title);
            for (country, color) in line_legend(line, colors) {
                legend_entry(ui, country, color);
            }
        });
    });
}

/// Legend rows for the line chart, in series order.
fn line_legend<'a>(line: &'a LineView, colors: &CountryColors) -> Vec<(&'a str, Color32)> {
    line.series
        .iter()
        .map(|s| (s.country.as_str(), colors.color_for(&s.country)))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;
    use crate::dashboard::line::LineSeries;

    /// Corners of a `size` rectangle rotated by `angle` around `pivot`.
    fn rotated_corners(pivot: Pos2, size: Vec2, angle: f32) -> [Pos2; 4] {
        let dir = Vec2::angled(angle);
        let down = Vec2::new(-angle.sin(), angle.cos());
        [
            pivot,
            pivot + dir * size.x,
            pivot + down * size.y,
            pivot + dir * size.x + down * size.y,
        ]
    }

    #[test]
    fn rotated_labels_hang_below_their_anchor() {
        let anchor = Pos2::new(100.0, 50.0);
        let size = Vec2::new(80.0, 12.0);

        for degrees in [-90.0_f32, -45.0, -10.0, 0.0, 30.0, 90.0] {
            let angle = degrees.to_radians();
            let corners = rotated_corners(label_pivot(anchor, size, angle), size, angle);
            let top = corners.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
            let bottom = corners.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);

            assert!((top - anchor.y).abs() < 1e-3, "{degrees}: top {top}");
            assert!(
                (bottom - top - rotated_height(size, angle)).abs() < 1e-3,
                "{degrees}: height {}",
                bottom - top
            );
        }
    }

    #[test]
    fn counter_clockwise_labels_end_at_the_tick() {
        let anchor = Pos2::new(100.0, 50.0);
        let size = Vec2::new(80.0, 12.0);
        let angle = -FRAC_PI_2 / 2.0;
        let end = label_pivot(anchor, size, angle) + Vec2::angled(angle) * size.x;
        assert!((end - anchor).length() < 1e-3);
    }

    #[test]
    fn line_legend_follows_series_order_and_colours() {
        let countries = ["Ukraine".to_string(), "Poland".to_string()];
        let colors = CountryColors::new(&countries);
        let line = LineView {
            series: vec![
                LineSeries {
                    country: "Poland".into(),
                    points: vec![(2022, 1.0)],
                },
                LineSeries {
                    country: "Ukraine".into(),
                    points: vec![(2021, 2.0)],
                },
            ],
        };

        let legend = line_legend(&line, &colors);
        assert_eq!(
            legend,
            vec![
                ("Poland", colors.color_for("Poland")),
                ("Ukraine", colors.color_for("Ukraine")),
            ]
        );
    }
}
