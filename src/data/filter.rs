use super::model::Table;

// ---------------------------------------------------------------------------
// Selection: which countries and years the user picked
// ---------------------------------------------------------------------------

/// Selected countries and years, each in the order the user picked them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub countries: Vec<String>,
    pub years: Vec<i64>,
}

impl Selection {
    /// Default selection for a freshly loaded table: every country, and only
    /// the earliest year.
    pub fn default_for(table: &Table) -> Self {
        Selection {
            countries: table.countries.clone(),
            years: table.earliest_year().into_iter().collect(),
        }
    }

    /// Add the country if absent, remove it otherwise.
    pub fn toggle_country(&mut self, country: &str) {
        toggle(&mut self.countries, country.to_string());
    }

    /// Add the year if absent, remove it otherwise.
    pub fn toggle_year(&mut self, year: i64) {
        toggle(&mut self.years, year);
    }

    /// Year used for single-year views: the first one selected.
    pub fn first_year(&self) -> Option<i64> {
        self.years.first().copied()
    }
}

fn toggle<T: PartialEq>(selected: &mut Vec<T>, value: T) {
    match selected.iter().position(|v| *v == value) {
        Some(pos) => {
            selected.remove(pos);
        }
        None => selected.push(value),
    }
}

/// Return indices of rows whose country and year are both selected, in table
/// order.
///
/// An empty country or year selection matches nothing.
pub fn working_subset(table: &Table, selection: &Selection) -> Vec<usize> {
    table
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            selection.countries.contains(&rec.country) && selection.years.contains(&rec.year)
        })
        .map(|(i, _)| i)
        .collect()
}
