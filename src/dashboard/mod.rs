//! Derived views: everything the charts and summary need, computed from a
//! [`Table`] and the current selection in one pass.
//!
//! The UI never derives data itself; it only draws a [`DashboardView`].

pub mod bar;
pub mod line;
pub mod pie;
pub mod summary;

use crate::config::ChartConfig;
use crate::data::filter::{working_subset, Selection};
use crate::data::metric::Metric;
use crate::data::model::Table;

use self::bar::BarView;
use self::line::LineView;
use self::pie::PieView;
use self::summary::SummaryLine;

/// Everything rendered for one table + selection + metric.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardView {
    pub metric: Metric,
    /// Years in selection order, echoed for titles.
    pub years: Vec<i64>,
    /// Table row indices of the working subset.
    pub subset: Vec<usize>,
    /// Working-subset rows whose metric cell is not a number.
    pub missing_values: usize,
    pub bars: BarView,
    pub pie: Option<PieView>,
    pub line: LineView,
    pub summary: Option<Vec<SummaryLine>>,
}

impl DashboardView {
    /// Run the full pipeline from scratch.
    pub fn build(table: &Table, selection: &Selection, metric: Metric, config: &ChartConfig) -> Self {
        let subset = working_subset(table, selection);
        let missing_values = subset
            .iter()
            .filter(|&&i| metric.value_of(&table.records[i]).is_none())
            .count();

        DashboardView {
            metric,
            years: selection.years.clone(),
            bars: bar::build(table, &subset, metric, &config.bar),
            pie: pie::build(table, &subset, selection.first_year(), metric),
            line: line::build(table, &selection.countries, metric),
            summary: summary::build(table, &subset, &selection.years, metric),
            missing_values,
            subset,
        }
    }
}

/// Print integral values without a fractional part, anything else in the
/// shortest form that round-trips.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::data::model::fixtures::{record, scenario_table};

    fn scenario_selection() -> Selection {
        Selection {
            countries: vec!["Ukraine".into(), "Poland".into()],
            years: vec![2022],
        }
    }

    #[test]
    fn scenario_end_to_end() {
        let table = scenario_table();
        let view = DashboardView::build(
            &table,
            &scenario_selection(),
            Metric::ItSpecialists,
            &ChartConfig::default(),
        );

        assert_eq!(view.subset, vec![1, 2]);
        assert_eq!(view.bars.entries.len(), 2);
        let pie = view.pie.as_ref().unwrap();
        let slice_values: Vec<f64> = pie.slices.iter().map(|s| s.value).collect();
        assert_eq!(slice_values, vec![150.0, 200.0]);
        let summary: Vec<String> = view
            .summary
            .unwrap()
            .iter()
            .map(|l| l.to_string())
            .collect();
        assert_eq!(summary, vec!["Poland has the highest IT_Specialists value in 2022: 200."]);
        assert_eq!(view.missing_values, 0);
    }

    #[test]
    fn empty_year_selection_skips_pie_without_failing() {
        let table = scenario_table();
        let selection = Selection {
            years: Vec::new(),
            ..scenario_selection()
        };
        let view = DashboardView::build(&table, &selection, Metric::ItSpecialists, &ChartConfig::default());

        assert!(view.subset.is_empty());
        assert!(view.bars.entries.is_empty());
        assert_eq!(view.pie, None);
        assert_eq!(view.summary, None);
        assert_eq!(view.line.series.len(), 2);
    }

    #[test]
    fn line_ignores_year_selection() {
        let table = scenario_table();
        let config = ChartConfig::default();
        let mut selection = scenario_selection();
        let with_2022 = DashboardView::build(&table, &selection, Metric::ItSpecialists, &config);
        selection.years = vec![2021];
        let with_2021 = DashboardView::build(&table, &selection, Metric::ItSpecialists, &config);
        selection.years.clear();
        let with_none = DashboardView::build(&table, &selection, Metric::ItSpecialists, &config);

        assert_eq!(with_2022.line, with_2021.line);
        assert_eq!(with_2022.line, with_none.line);
    }

    #[test]
    fn non_numeric_cell_is_missing_but_still_a_row() {
        let table = Table::from_records(vec![
            record("Ukraine", 2022, "lots"),
            record("Poland", 2022, "200"),
        ]);
        let selection = Selection::default_for(&table);
        let view = DashboardView::build(&table, &selection, Metric::ItSpecialists, &ChartConfig::default());

        assert_eq!(view.subset, vec![0, 1]);
        assert_eq!(view.missing_values, 1);
        assert_eq!(view.bars.entries.len(), 2);
        let pie = view.pie.unwrap();
        assert_eq!(pie.slices.len(), 1);
        assert_eq!(pie.slices[0].country, "Poland");
        let line_countries: Vec<&str> = view.line.series.iter().map(|s| s.country.as_str()).collect();
        assert_eq!(line_countries, vec!["Poland"]);
    }

    #[test]
    fn value_formatting() {
        assert_eq!(format_value(200.0), "200");
        assert_eq!(format_value(-3.0), "-3");
        assert_eq!(format_value(12.5), "12.5");
        assert_eq!(format_value(0.1), "0.1");
    }
}
