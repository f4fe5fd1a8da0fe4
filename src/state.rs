use crate::color::CountryColors;
use crate::config::ChartConfig;
use crate::dashboard::DashboardView;
use crate::data::filter::Selection;
use crate::data::metric::Metric;
use crate::data::model::Table;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded table (None until user loads a file).
    pub table: Option<Table>,

    /// Countries and years currently selected.
    pub selection: Selection,

    /// Metric being visualised.
    pub metric: Metric,

    /// Derived charts and summary for the current selection (cached).
    pub view: Option<DashboardView>,

    /// Colour per country of the loaded table.
    pub colors: CountryColors,

    pub chart_config: ChartConfig,

    /// Error from the last load attempt, shown instead of the dashboard.
    pub status_message: Option<String>,
}

impl AppState {
    /// Ingest a newly loaded table and reset filters to their defaults.
    pub fn set_table(&mut self, table: Table) {
        self.selection = Selection::default_for(&table);
        self.colors = CountryColors::new(&table.countries);
        self.table = Some(table);
        self.status_message = None;
        self.recompute();
    }

    /// Drop the current table and remember why.
    pub fn set_load_error(&mut self, message: String) {
        self.table = None;
        self.view = None;
        self.selection = Selection::default();
        self.status_message = Some(message);
    }

    /// Rebuild the derived view from the table and current selection.
    pub fn recompute(&mut self) {
        self.view = self.table.as_ref().map(|table| {
            let view = DashboardView::build(table, &self.selection, self.metric, &self.chart_config);
            log::debug!(
                "Recomputed dashboard: {} of {} rows selected, metric {}",
                view.subset.len(),
                table.len(),
                self.metric.key()
            );
            if view.missing_values > 0 {
                log::warn!(
                    "{} selected row(s) have a non-numeric {} value",
                    view.missing_values,
                    self.metric.key()
                );
            }
            view
        });
    }

    pub fn set_metric(&mut self, metric: Metric) {
        if self.metric != metric {
            self.metric = metric;
            self.recompute();
        }
    }

    pub fn toggle_country(&mut self, country: &str) {
        self.selection.toggle_country(country);
        self.recompute();
    }

    pub fn toggle_year(&mut self, year: i64) {
        self.selection.toggle_year(year);
        self.recompute();
    }

    /// Select every country in option order.
    pub fn select_all_countries(&mut self) {
        if let Some(table) = &self.table {
            self.selection.countries = table.countries.clone();
            self.recompute();
        }
    }

    pub fn select_no_countries(&mut self) {
        self.selection.countries.clear();
        self.recompute();
    }

    /// Select every year, ascending.
    pub fn select_all_years(&mut self) {
        if let Some(table) = &self.table {
            self.selection.years = table.years.clone();
            self.recompute();
        }
    }

    pub fn select_no_years(&mut self) {
        self.selection.years.clear();
        self.recompute();
    }
}
