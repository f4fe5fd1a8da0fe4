use crate::config::ChartStyle;
use crate::data::metric::Metric;
use crate::data::model::Table;

/// One category on the bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarEntry {
    pub country: String,
    /// Category label, e.g. `Ukraine (2022)`.
    pub label: String,
    /// Coerced metric value; `None` keeps the slot but draws no bar.
    pub value: Option<f64>,
    /// Centre of the bar on the category axis.
    pub position: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BarView {
    pub entries: Vec<BarEntry>,
    pub bar_width: f64,
}

impl BarView {
    /// Bars that actually have a value.
    pub fn drawn(&self) -> impl Iterator<Item = (&BarEntry, f64)> {
        self.entries
            .iter()
            .filter_map(|e| e.value.map(|v| (e, v)))
    }
}

/// Lay out one bar per working-subset row, in subset order.
pub fn build(table: &Table, subset: &[usize], metric: Metric, style: &ChartStyle) -> BarView {
    let mut entries = Vec::with_capacity(subset.len());
    let mut position = 0.0;
    let mut previous_country: Option<&str> = None;

    for &idx in subset {
        let rec = &table.records[idx];
        if let Some(prev) = previous_country {
            position += 1.0;
            if prev != rec.country {
                position += style.group_gap;
            }
        }
        previous_country = Some(&rec.country);

        entries.push(BarEntry {
            country: rec.country.clone(),
            label: rec.display_label(),
            value: metric.value_of(rec),
            position,
        });
    }

    BarView {
        entries,
        bar_width: (1.0 - style.bar_gap).clamp(0.05, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::ChartConfig;
    use crate::data::model::fixtures::{record, scenario_table};

    #[test]
    fn scenario_has_two_bars() {
        let table = scenario_table();
        let style = ChartConfig::default().bar;
        let view = build(&table, &[1, 2], Metric::ItSpecialists, &style);

        let labels: Vec<&str> = view.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Ukraine (2022)", "Poland (2022)"]);
        let values: Vec<f64> = view.drawn().map(|(_, v)| v).collect();
        assert_eq!(values, vec![150.0, 200.0]);
        assert!((view.bar_width - 0.8).abs() < 1e-9);
    }

    #[test]
    fn country_changes_add_group_gap() {
        let table = Table::from_records(vec![
            record("Ukraine", 2021, "1"),
            record("Ukraine", 2022, "2"),
            record("Poland", 2021, "3"),
        ]);
        let style = ChartStyle {
            group_gap: 0.5,
            ..ChartConfig::default().bar
        };
        let view = build(&table, &[0, 1, 2], Metric::ItSpecialists, &style);
        let positions: Vec<f64> = view.entries.iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![0.0, 1.0, 2.5]);
    }

    #[test]
    fn missing_values_keep_their_slot() {
        let table = Table::from_records(vec![
            record("India", 2020, "abc"),
            record("Israel", 2020, "40"),
        ]);
        let view = build(&table, &[0, 1], Metric::ItSpecialists, &ChartConfig::default().bar);
        assert_eq!(view.entries.len(), 2);
        assert_eq!(view.entries[0].value, None);
        assert_eq!(view.drawn().count(), 1);
    }
}
