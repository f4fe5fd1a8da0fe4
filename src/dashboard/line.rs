use crate::data::metric::Metric;
use crate::data::model::Table;

/// One country's time series.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub country: String,
    /// `(year, value)` pairs sorted by year.
    pub points: Vec<(i64, f64)>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineView {
    pub series: Vec<LineSeries>,
}

impl LineView {
    /// Smallest and largest year plotted.
    pub fn year_range(&self) -> Option<(i64, i64)> {
        let mut years = self.series.iter().flat_map(|s| s.points.iter().map(|p| p.0));
        let first = years.next()?;
        Some(years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }
}

/// Build the time series from the whole table. Only the country selection
/// applies; every year is shown regardless of the year selection.
pub fn build(table: &Table, countries: &[String], metric: Metric) -> LineView {
    let mut series: Vec<LineSeries> = Vec::new();

    for rec in &table.records {
        if !countries.contains(&rec.country) {
            continue;
        }
        let Some(value) = metric.value_of(rec) else {
            continue;
        };
        match series.iter_mut().find(|s| s.country == rec.country) {
            Some(s) => s.points.push((rec.year, value)),
            None => series.push(LineSeries {
                country: rec.country.clone(),
                points: vec![(rec.year, value)],
            }),
        }
    }

    for s in &mut series {
        s.points.sort_by_key(|p| p.0);
    }

    LineView { series }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::data::model::fixtures::{record, scenario_table};

    fn names(countries: &[&str]) -> Vec<String> {
        countries.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn one_series_per_selected_country() {
        let table = scenario_table();
        let view = build(&table, &names(&["Poland", "Ukraine"]), Metric::ItSpecialists);

        assert_eq!(
            view.series,
            vec![
                LineSeries {
                    country: "Ukraine".into(),
                    points: vec![(2021, 100.0), (2022, 150.0)],
                },
                LineSeries {
                    country: "Poland".into(),
                    points: vec![(2022, 200.0)],
                },
            ]
        );
        assert_eq!(view.year_range(), Some((2021, 2022)));
    }

    #[test]
    fn unselected_countries_are_left_out() {
        let table = scenario_table();
        let view = build(&table, &names(&["Poland"]), Metric::ItSpecialists);
        assert_eq!(view.series.len(), 1);
        assert_eq!(view.series[0].country, "Poland");
    }

    #[test]
    fn missing_values_are_dropped_and_points_sorted() {
        let table = Table::from_records(vec![
            record("Israel", 2022, "30"),
            record("Israel", 2020, "x"),
            record("Israel", 2019, "10"),
        ]);
        let view = build(&table, &names(&["Israel"]), Metric::ItSpecialists);
        assert_eq!(view.series[0].points, vec![(2019, 10.0), (2022, 30.0)]);
    }

    #[test]
    fn no_countries_means_no_series() {
        let view = build(&scenario_table(), &[], Metric::ItSpecialists);
        assert!(view.series.is_empty());
        assert_eq!(view.year_range(), None);
    }
}
