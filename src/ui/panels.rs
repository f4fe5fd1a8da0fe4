use std::path::Path;

use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::data::metric::Metric;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(table) = &state.table else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone the options so we can mutate state inside the loops.
    let countries = table.countries.clone();
    let years = table.years.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Metric selector ----
            ui.strong("Metric");
            let current = state.metric;
            egui::ComboBox::from_id_salt("metric")
                .selected_text(current.label())
                .width(ui.available_width())
                .show_ui(ui, |ui: &mut Ui| {
                    for metric in Metric::ALL {
                        if ui
                            .selectable_label(current == metric, metric.label())
                            .on_hover_text(metric.key())
                            .clicked()
                        {
                            state.set_metric(metric);
                        }
                    }
                });
            ui.separator();

            // ---- Countries ----
            let header = format!(
                "Countries  ({}/{})",
                state.selection.countries.len(),
                countries.len()
            );
            egui::CollapsingHeader::new(RichText::new(header).strong())
                .id_salt("countries")
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    ui.horizontal(|ui: &mut Ui| {
                        if ui.small_button("All").clicked() {
                            state.select_all_countries();
                        }
                        if ui.small_button("None").clicked() {
                            state.select_no_countries();
                        }
                    });

                    for country in &countries {
                        let mut checked = state.selection.countries.contains(country);
                        let text = RichText::new(country).color(state.colors.color_for(country));
                        if ui.checkbox(&mut checked, text).changed() {
                            state.toggle_country(country);
                        }
                    }
                });

            // ---- Years ----
            let header = format!("Years  ({}/{})", state.selection.years.len(), years.len());
            egui::CollapsingHeader::new(RichText::new(header).strong())
                .id_salt("years")
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    ui.horizontal(|ui: &mut Ui| {
                        if ui.small_button("All").clicked() {
                            state.select_all_years();
                        }
                        if ui.small_button("None").clicked() {
                            state.select_no_years();
                        }
                    });

                    for &year in &years {
                        let mut checked = state.selection.years.contains(&year);
                        if ui.checkbox(&mut checked, year.to_string()).changed() {
                            state.toggle_year(year);
                        }
                    }

                    if let Some(first) = state.selection.first_year() {
                        ui.add_space(4.0);
                        ui.label(
                            RichText::new(format!("Pie chart year: {first}"))
                                .small()
                                .weak(),
                        );
                    }
                });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open CSV…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let (Some(table), Some(view)) = (&state.table, &state.view) {
            ui.label(format!(
                "{} rows loaded, {} selected",
                table.len(),
                view.subset.len()
            ));
        }
    });
}

// ---------------------------------------------------------------------------
// File loading
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open IT metrics CSV")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        load_path(state, &path);
    }
}

/// Load a file into the state, replacing any previous table.
pub fn load_path(state: &mut AppState, path: &Path) {
    match crate::data::loader::load_file(path) {
        Ok(table) => {
            if table.is_empty() {
                log::warn!("{} has a header but no rows", path.display());
            }
            log::info!(
                "Loaded {} rows from {} ({} countries, years {:?})",
                table.len(),
                path.display(),
                table.countries.len(),
                table.years
            );
            state.set_table(table);
        }
        Err(e) => {
            log::error!("Failed to load file: {e:#}");
            state.set_load_error(format!("Error: {e:#}"));
        }
    }
}
