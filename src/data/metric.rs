use super::model::Record;

// ---------------------------------------------------------------------------
// Metric – the four numeric columns a user can visualise
// ---------------------------------------------------------------------------

/// One of the metric columns of the input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Metric {
    #[default]
    ItSpecialists,
    ItExportMillionUsd,
    Startups,
    InvestmentsMillionUsd,
}

impl Metric {
    /// All metrics in the order they are offered in the selector.
    pub const ALL: [Metric; 4] = [
        Metric::ItSpecialists,
        Metric::ItExportMillionUsd,
        Metric::Startups,
        Metric::InvestmentsMillionUsd,
    ];

    /// Column name in the CSV header.
    pub fn key(self) -> &'static str {
        match self {
            Metric::ItSpecialists => "IT_Specialists",
            Metric::ItExportMillionUsd => "IT_Export_Million_USD",
            Metric::Startups => "Startups",
            Metric::InvestmentsMillionUsd => "Investments_Million_USD",
        }
    }

    /// Human-readable label used for titles and axes.
    pub fn label(self) -> &'static str {
        match self {
            Metric::ItSpecialists => "Number of IT specialists",
            Metric::ItExportMillionUsd => "IT services export (million USD)",
            Metric::Startups => "Number of startups",
            Metric::InvestmentsMillionUsd => "Investments (million USD)",
        }
    }

    /// Raw cell text of this metric for a record.
    pub fn raw<'a>(self, record: &'a Record) -> &'a str {
        match self {
            Metric::ItSpecialists => &record.it_specialists,
            Metric::ItExportMillionUsd => &record.it_export_million_usd,
            Metric::Startups => &record.startups,
            Metric::InvestmentsMillionUsd => &record.investments_million_usd,
        }
    }

    /// Numeric value of this metric for a record, `None` when the cell is
    /// not a number.
    pub fn value_of(self, record: &Record) -> Option<f64> {
        coerce(self.raw(record))
    }
}

/// Convert a cell to a number. Anything unparseable is missing, never an error.
pub fn coerce(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_metric_has_a_distinct_key_and_label() {
        let keys: HashSet<_> = Metric::ALL.iter().map(|m| m.key()).collect();
        let labels: HashSet<_> = Metric::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(keys.len(), Metric::ALL.len());
        assert_eq!(labels.len(), Metric::ALL.len());
    }

    #[test]
    fn default_is_first_listed() {
        assert_eq!(Metric::default(), Metric::ALL[0]);
    }

    #[test]
    fn coerce_parses_numbers_with_surrounding_whitespace() {
        assert_eq!(coerce("150"), Some(150.0));
        assert_eq!(coerce(" 12.5 "), Some(12.5));
        assert_eq!(coerce("-3e2"), Some(-300.0));
    }

    #[test]
    fn coerce_turns_garbage_into_missing() {
        for raw in ["", "  ", "n/a", "12 000", "NaN", "1,5", "abc"] {
            assert_eq!(coerce(raw), None, "{raw:?}");
        }
    }

    #[test]
    fn value_of_reads_the_selected_column() {
        let record = Record {
            country: "Israel".into(),
            year: 2020,
            it_specialists: "300".into(),
            it_export_million_usd: "12.5".into(),
            startups: "oops".into(),
            investments_million_usd: "".into(),
        };
        assert_eq!(Metric::ItSpecialists.value_of(&record), Some(300.0));
        assert_eq!(Metric::ItExportMillionUsd.value_of(&record), Some(12.5));
        assert_eq!(Metric::Startups.value_of(&record), None);
        assert_eq!(Metric::InvestmentsMillionUsd.value_of(&record), None);
    }
}
