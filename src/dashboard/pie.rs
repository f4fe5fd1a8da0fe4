use std::f64::consts::{FRAC_PI_2, TAU};

use crate::data::metric::Metric;
use crate::data::model::Table;

/// A country's wedge of the pie.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub country: String,
    pub value: f64,
    /// Share of the total, 0..=1.
    pub fraction: f64,
    /// Start angle in radians, screen orientation (y down), so increasing
    /// angles run clockwise. The first slice starts at twelve o'clock.
    pub start_angle: f64,
    pub sweep: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieView {
    pub year: i64,
    pub total: f64,
    pub slices: Vec<PieSlice>,
}

impl PieView {
    /// Slice under a screen angle (radians, y down), e.g. for hover.
    pub fn slice_at(&self, angle: f64) -> Option<&PieSlice> {
        let first = self.slices.first()?;
        let offset = (angle - first.start_angle).rem_euclid(TAU);
        self.slices
            .iter()
            .find(|s| offset < s.start_angle - first.start_angle + s.sweep)
            .or(self.slices.last())
    }
}

/// Build the single-year pie from the working subset.
///
/// Returns `None` when no year is selected or nothing in that year has a
/// positive value; callers skip the chart in that case.
pub fn build(table: &Table, subset: &[usize], year: Option<i64>, metric: Metric) -> Option<PieView> {
    let year = year?;

    // Countries in first-appearance order, duplicate rows summed.
    let mut totals: Vec<(String, f64)> = Vec::new();
    for &idx in subset {
        let rec = &table.records[idx];
        if rec.year != year {
            continue;
        }
        let Some(value) = metric.value_of(rec).filter(|v| *v > 0.0 && v.is_finite()) else {
            continue;
        };
        match totals.iter_mut().find(|(c, _)| *c == rec.country) {
            Some((_, sum)) => *sum += value,
            None => totals.push((rec.country.clone(), value)),
        }
    }

    let total: f64 = totals.iter().map(|(_, v)| v).sum();
    if totals.is_empty() || total <= 0.0 {
        return None;
    }

    Some(PieView {
        year,
        total,
        slices: layout(totals, total),
    })
}

fn layout(totals: Vec<(String, f64)>, total: f64) -> Vec<PieSlice> {
    let mut start_angle = -FRAC_PI_2;
    totals
        .into_iter()
        .map(|(country, value)| {
            let fraction = value / total;
            let sweep = fraction * TAU;
            let slice = PieSlice {
                country,
                value,
                fraction,
                start_angle,
                sweep,
            };
            start_angle += sweep;
            slice
        })
        .collect()
}
