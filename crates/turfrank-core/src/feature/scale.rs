//! Min-max scaling of the numeric attribute row
//!
//! Statistics are captured once at fit time and frozen. Transform is a
//! pass-through linear map: inference values outside the fit-time range
//! are NOT clamped and scale to values outside [0, 1]. Clamping here
//! would shift the model's input distribution relative to the fit.

use serde::{Deserialize, Serialize};

use super::schema::NUMERIC_FIELDS;

/// A fitted per-column min-max scaler over the five numeric fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinMaxScaler {
    /// Per-column minimum observed at fit time
    min: [f64; NUMERIC_FIELDS],
    /// Per-column maximum observed at fit time
    max: [f64; NUMERIC_FIELDS],
}

impl MinMaxScaler {
    /// Fit a scaler from numeric rows. An empty fit produces the
    /// identity-offset scaler (all zeros), which maps every input to
    /// itself minus zero.
    pub fn fit(rows: &[[f64; NUMERIC_FIELDS]]) -> Self {
        let mut min = [f64::INFINITY; NUMERIC_FIELDS];
        let mut max = [f64::NEG_INFINITY; NUMERIC_FIELDS];

        for row in rows {
            for (col, &value) in row.iter().enumerate() {
                min[col] = min[col].min(value);
                max[col] = max[col].max(value);
            }
        }

        if rows.is_empty() {
            min = [0.0; NUMERIC_FIELDS];
            max = [0.0; NUMERIC_FIELDS];
        }

        MinMaxScaler { min, max }
    }

    /// Scale a row using the frozen fit-time statistics.
    ///
    /// Zero-range columns yield `x - min` (0 for in-range input), as the
    /// original fitting library does.
    pub fn transform(&self, row: &[f64; NUMERIC_FIELDS]) -> [f64; NUMERIC_FIELDS] {
        let mut scaled = [0.0; NUMERIC_FIELDS];
        for col in 0..NUMERIC_FIELDS {
            let range = self.max[col] - self.min[col];
            let shifted = row[col] - self.min[col];
            scaled[col] = if range == 0.0 { shifted } else { shifted / range };
        }
        scaled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fit_two_rows() -> MinMaxScaler {
        MinMaxScaler::fit(&[
            [0.0, 0.0, 0.0, 50.0, 1.0],
            [10.0, 20.0, 4.0, 150.0, 5.0],
        ])
    }

    #[test]
    fn test_fit_rows_scale_into_unit_interval() {
        let scaler = fit_two_rows();
        let lo = scaler.transform(&[0.0, 0.0, 0.0, 50.0, 1.0]);
        let hi = scaler.transform(&[10.0, 20.0, 4.0, 150.0, 5.0]);
        assert_eq!(lo, [0.0; NUMERIC_FIELDS]);
        assert_eq!(hi, [1.0; NUMERIC_FIELDS]);
    }

    #[test]
    fn test_hand_computed_midpoint() {
        let scaler = fit_two_rows();
        let out = scaler.transform(&[5.0, 5.0, 1.0, 100.0, 3.0]);
        assert_eq!(out, [0.5, 0.25, 0.25, 0.5, 0.5]);
    }

    #[test]
    fn test_out_of_range_is_not_clamped() {
        let scaler = fit_two_rows();
        let out = scaler.transform(&[20.0, -20.0, 8.0, 250.0, 9.0]);
        assert_eq!(out[0], 2.0);
        assert_eq!(out[1], -1.0);
        assert_eq!(out[2], 2.0);
        assert_eq!(out[3], 2.0);
        assert_eq!(out[4], 2.0);
    }

    #[test]
    fn test_transform_is_linear() {
        let scaler = fit_two_rows();
        let a = scaler.transform(&[2.0, 4.0, 1.0, 60.0, 2.0]);
        let b = scaler.transform(&[4.0, 8.0, 2.0, 70.0, 3.0]);
        let mid = scaler.transform(&[3.0, 6.0, 1.5, 65.0, 2.5]);
        for col in 0..NUMERIC_FIELDS {
            assert!((mid[col] - (a[col] + b[col]) / 2.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_zero_range_column_maps_to_offset() {
        let scaler = MinMaxScaler::fit(&[
            [3.0, 0.0, 0.0, 100.0, 4.0],
            [3.0, 5.0, 2.0, 200.0, 5.0],
        ]);
        assert_eq!(scaler.transform(&[3.0, 0.0, 0.0, 100.0, 4.0])[0], 0.0);
        assert_eq!(scaler.transform(&[7.0, 0.0, 0.0, 100.0, 4.0])[0], 4.0);
    }

    #[test]
    fn test_serde_round_trip() {
        let scaler = fit_two_rows();
        let json = serde_json::to_string(&scaler).unwrap();
        let restored: MinMaxScaler = serde_json::from_str(&json).unwrap();
        let row = [5.0, 5.0, 1.0, 100.0, 3.0];
        assert_eq!(restored.transform(&row), scaler.transform(&row));
    }
}
