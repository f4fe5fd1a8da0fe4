use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Record – one row of the uploaded file
// ---------------------------------------------------------------------------

/// A single country/year row.
///
/// Metric cells are kept exactly as they appear in the file; numeric
/// interpretation happens later through [`super::metric::Metric::value_of`].
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub country: String,
    /// Year after rounding to the nearest integer.
    pub year: i64,
    pub it_specialists: String,
    pub it_export_million_usd: String,
    pub startups: String,
    pub investments_million_usd: String,
}

impl Record {
    /// Category label used on the bar chart axis, e.g. `Ukraine (2022)`.
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.country, self.year)
    }
}

// ---------------------------------------------------------------------------
// Table – the complete loaded file
// ---------------------------------------------------------------------------

/// All rows in file order plus the filter options derived from them.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub records: Vec<Record>,
    /// Distinct countries in order of first appearance.
    pub countries: Vec<String>,
    /// Distinct years, ascending.
    pub years: Vec<i64>,
}

impl Table {
    /// Build the option lists from the loaded rows.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut countries: Vec<String> = Vec::new();
        let mut years: BTreeSet<i64> = BTreeSet::new();

        for rec in &records {
            if !countries.contains(&rec.country) {
                countries.push(rec.country.clone());
            }
            years.insert(rec.year);
        }

        Table {
            records,
            countries,
            years: years.into_iter().collect(),
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest year present, if any.
    pub fn earliest_year(&self) -> Option<i64> {
        self.years.first().copied()
    }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::fixtures::record;
    use super::*;

    #[test]
    fn options_are_derived_from_rows() {
        let table = Table::from_records(vec![
            record("Ukraine", 2022, "1"),
            record("India", 2019, "1"),
            record("Ukraine", 2019, "1"),
            record("Poland", 2021, "1"),
        ]);
        assert_eq!(table.countries, vec!["Ukraine", "India", "Poland"]);
        assert_eq!(table.years, vec![2019, 2021, 2022]);
        assert_eq!(table.earliest_year(), Some(2019));
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn empty_table_has_no_options() {
        let table = Table::from_records(Vec::new());
        assert!(table.is_empty());
        assert!(table.countries.is_empty());
        assert_eq!(table.earliest_year(), None);
    }

    #[test]
    fn display_label_combines_country_and_year() {
        assert_eq!(record("Ukraine", 2022, "1").display_label(), "Ukraine (2022)");
    }
}
