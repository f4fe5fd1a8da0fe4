use std::fmt;

use super::format_value;
use crate::data::metric::Metric;
use crate::data::model::Table;

/// "Which country leads in this year" sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryLine {
    pub year: i64,
    pub country: String,
    pub value: f64,
    pub metric: Metric,
}

impl fmt::Display for SummaryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} has the highest {} value in {}: {}.",
            self.country,
            self.metric.key(),
            self.year,
            format_value(self.value)
        )
    }
}

/// One line per selected year (selection order) that has a numeric value in
/// the working subset. `None` when the working subset is empty.
pub fn build(
    table: &Table,
    subset: &[usize],
    years: &[i64],
    metric: Metric,
) -> Option<Vec<SummaryLine>> {
    if subset.is_empty() {
        return None;
    }

    let lines = years
        .iter()
        .filter_map(|&year| {
            let mut best: Option<(&str, f64)> = None;
            for &idx in subset {
                let rec = &table.records[idx];
                if rec.year != year {
                    continue;
                }
                let Some(value) = metric.value_of(rec) else {
                    continue;
                };
                // Strict comparison: ties stay with the earlier row.
                if best.map_or(true, |(_, max)| value > max) {
                    best = Some((rec.country.as_str(), value));
                }
            }
            best.map(|(country, value)| SummaryLine {
                year,
                country: country.to_string(),
                value,
                metric,
            })
        })
        .collect();

    Some(lines)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::data::model::fixtures::{record, scenario_table};

    fn sentences(lines: &[SummaryLine]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn scenario_sentence() {
        let table = scenario_table();
        let lines = build(&table, &[1, 2], &[2022], Metric::ItSpecialists).unwrap();
        assert_eq!(
            sentences(&lines),
            vec!["Poland has the highest IT_Specialists value in 2022: 200."]
        );
    }

    #[test]
    fn empty_subset_hides_the_summary() {
        let table = scenario_table();
        assert_eq!(build(&table, &[], &[2022], Metric::ItSpecialists), None);
    }

    #[test]
    fn years_without_rows_are_skipped() {
        let table = scenario_table();
        let lines = build(&table, &[1, 2], &[2019, 2022, 2030], Metric::ItSpecialists).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].year, 2022);
    }

    #[test]
    fn follows_selection_order() {
        let table = scenario_table();
        let lines = build(&table, &[0, 1, 2], &[2022, 2021], Metric::ItSpecialists).unwrap();
        let years: Vec<i64> = lines.iter().map(|l| l.year).collect();
        assert_eq!(years, vec![2022, 2021]);
        assert_eq!(lines[1].country, "Ukraine");
    }

    #[test]
    fn ties_go_to_the_first_row() {
        let table = Table::from_records(vec![
            record("Israel", 2020, "50"),
            record("India", 2020, "50"),
        ]);
        let lines = build(&table, &[0, 1], &[2020], Metric::ItSpecialists).unwrap();
        assert_eq!(lines[0].country, "Israel");
    }

    #[test]
    fn missing_values_never_win() {
        let table = Table::from_records(vec![
            record("India", 2020, "oops"),
            record("Israel", 2020, "12.5"),
            record("Poland", 2021, ""),
        ]);
        let lines = build(&table, &[0, 1, 2], &[2020, 2021], Metric::ItSpecialists).unwrap();
        assert_eq!(
            sentences(&lines),
            vec!["Israel has the highest IT_Specialists value in 2020: 12.5."]
        );
    }

    #[test]
    fn never_mentions_a_year_outside_the_subset() {
        let table = Table::from_records(vec![
            record("India", 2019, "1"),
            record("India", 2020, "2"),
            record("Israel", 2021, "3"),
        ]);
        let subset = [0, 2];
        let lines = build(&table, &subset, &[2019, 2020, 2021], Metric::ItSpecialists).unwrap();
        for line in &lines {
            assert!(subset.iter().any(|&i| table.records[i].year == line.year));
        }
        assert_eq!(lines.len(), 2);
    }
}
