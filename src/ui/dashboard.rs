use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::{charts, table};

// ---------------------------------------------------------------------------
// Central panel: header, charts, summary
// ---------------------------------------------------------------------------

/// Render the central panel.
pub fn central_panel(ui: &mut Ui, state: &AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Comparative analysis of the IT industry: India, Poland, Israel, Ukraine");
            ui.label("Analyse the key IT industry indicators across countries and years.");
            ui.separator();

            if let Some(msg) = &state.status_message {
                ui.label(RichText::new(msg).color(Color32::RED));
                return;
            }

            let (Some(table), Some(view)) = (&state.table, &state.view) else {
                ui.add_space(24.0);
                ui.vertical_centered(|ui: &mut Ui| {
                    ui.label(
                        RichText::new("Please open a CSV file with the data to analyse  (File → Open CSV… or drop a file here)")
                            .size(16.0),
                    );
                });
                return;
            };

            let label = view.metric.label();
            let config = &state.chart_config;

            if view.missing_values > 0 {
                ui.label(
                    RichText::new(format!(
                        "{} selected row(s) have a non-numeric {} value and are left out of the charts.",
                        view.missing_values,
                        view.metric.key()
                    ))
                    .color(Color32::from_rgb(220, 160, 40)),
                );
            }

            // ---- Bar chart ----
            ui.add_space(8.0);
            ui.heading(format!("Comparison: {label} for the selected years"));
            let years: Vec<String> = view.years.iter().map(|y| y.to_string()).collect();
            ui.strong(format!("{label} for {}", years.join(", ")));
            charts::bar_chart(ui, &view.bars, view.metric, &state.colors, &config.bar);

            // ---- Pie chart (first selected year only) ----
            if let Some(pie) = &view.pie {
                ui.add_space(12.0);
                ui.heading(format!("Distribution: {label} in {}", pie.year));
                ui.strong(format!("Distribution of {label} in {}", pie.year));
                charts::pie_chart(ui, pie, &state.colors, &config.pie);
            }

            // ---- Line chart (all years) ----
            ui.add_space(12.0);
            ui.heading(format!("Trend: {label} over time"));
            ui.strong(format!("Change in {label} over time"));
            charts::line_chart(ui, &view.line, view.metric, &state.colors, &config.line);

            // ---- Summary ----
            if let Some(lines) = &view.summary {
                ui.add_space(12.0);
                ui.heading("Conclusions");
                for line in lines {
                    ui.label(line.to_string());
                }
            }

            // ---- Data preview ----
            ui.add_space(12.0);
            egui::CollapsingHeader::new(format!("Selected rows ({})", view.subset.len()))
                .id_salt("preview")
                .default_open(false)
                .show(ui, |ui: &mut Ui| {
                    table::preview_table(ui, table, &view.subset, view.metric);
                });
        });
}
