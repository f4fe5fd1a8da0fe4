use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::metric::Metric;
use crate::data::model::Table;

/// Working-subset rows with every column; the selected metric is shown as its
/// numeric value, or `-` when the cell is not a number.
pub fn preview_table(ui: &mut Ui, table: &Table, subset: &[usize], selected: Metric) {
    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .max_scroll_height(240.0)
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(50.0))
        .columns(Column::auto().at_least(80.0), Metric::ALL.len())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Country");
            });
            header.col(|ui| {
                ui.strong("Year");
            });
            for metric in Metric::ALL {
                header.col(|ui| {
                    let text = RichText::new(metric.key()).strong();
                    ui.label(if metric == selected { text.underline() } else { text });
                });
            }
        })
        .body(|body| {
            body.rows(18.0, subset.len(), |mut row| {
                let rec = &table.records[subset[row.index()]];
                row.col(|ui| {
                    ui.label(&rec.country);
                });
                row.col(|ui| {
                    ui.label(rec.year.to_string());
                });
                for metric in Metric::ALL {
                    row.col(|ui| {
                        if metric == selected {
                            let shown = metric
                                .value_of(rec)
                                .map(crate::dashboard::format_value)
                                .unwrap_or_else(|| "-".to_string());
                            ui.strong(shown);
                        } else {
                            ui.label(metric.raw(rec));
                        }
                    });
                }
            });
        });
}
