//! Common utilities shared across indicator modules
//!
//! Precondition checks run before every native call, plus the alignment
//! helpers the engine uses to line outputs up with their inputs.

use serde_json::Value;

use crate::error::{Error, Result};

/// Initialize a result vector with NaN values
#[inline]
pub fn nan_vec(len: usize) -> Vec<f64> {
    vec![f64::NAN; len]
}

/// Reject an empty series.
///
/// Absent and non-sequence series cannot be expressed through `&[f64]`;
/// JSON callers go through [`series_from_json`] first.
#[inline]
pub fn validate_prices(prices: &[f64]) -> Result<()> {
    if prices.is_empty() {
        return Err(Error::invalid("Prices array cannot be empty"));
    }
    Ok(())
}

/// Reject non-positive periods and periods longer than the data.
#[inline]
pub fn validate_period(period: i32, data_size: usize) -> Result<()> {
    if period <= 0 {
        return Err(Error::invalid("Period must be positive"));
    }
    if period as usize > data_size {
        return Err(Error::invalid(format!(
            "Period ({period}) cannot exceed data size ({data_size})"
        )));
    }
    Ok(())
}

/// Length of the shortest series; the reference size for period checks.
#[inline]
pub fn shortest(series: &[&[f64]]) -> usize {
    series.iter().map(|s| s.len()).min().unwrap_or(0)
}

/// Validate every series, then every period against the shortest one.
pub fn validate_all(series: &[&[f64]], periods: &[i32]) -> Result<()> {
    for s in series {
        validate_prices(s)?;
    }
    let size = shortest(series);
    for &period in periods {
        validate_period(period, size)?;
    }
    Ok(())
}

/// Convert an untyped JSON value into a series, applying the same checks
/// as [`validate_prices`] plus the nil/array checks that typed callers get
/// for free.
pub fn series_from_json(value: &Value, name: &str) -> Result<Vec<f64>> {
    let items = match value {
        Value::Null => return Err(Error::invalid(format!("{name} array cannot be nil"))),
        Value::Array(items) => items,
        _ => return Err(Error::invalid(format!("{name} must be an array"))),
    };
    if items.is_empty() {
        return Err(Error::invalid(format!("{name} array cannot be empty")));
    }
    items
        .iter()
        .map(|v| {
            v.as_f64()
                .ok_or_else(|| Error::invalid(format!("{name} must contain only numbers")))
        })
        .collect()
}

/// Place `computed` at `begin..` of a `len`-long vector padded with `fill`.
pub fn align<T: Copy>(computed: &[T], begin: usize, len: usize, fill: T) -> Vec<T> {
    let mut result = vec![fill; len];
    for (slot, value) in result.iter_mut().skip(begin).zip(computed) {
        *slot = *value;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nan_vec() {
        let v = nan_vec(5);
        assert_eq!(v.len(), 5);
        assert!(v.iter().all(|x| x.is_nan()));
    }

    #[test]
    fn test_validate_prices() {
        assert!(validate_prices(&[1.0]).is_ok());
        assert!(matches!(
            validate_prices(&[]),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_validate_period() {
        assert!(validate_period(3, 3).is_ok());
        assert!(validate_period(1, 10).is_ok());
        assert!(matches!(validate_period(0, 10), Err(Error::InvalidParameter(_))));
        assert!(matches!(validate_period(-5, 10), Err(Error::InvalidParameter(_))));
        let err = validate_period(10, 3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid parameter: Period (10) cannot exceed data size (3)"
        );
    }

    #[test]
    fn test_shortest() {
        let a = [1.0, 2.0, 3.0];
        let b = [1.0, 2.0];
        assert_eq!(shortest(&[&a, &b]), 2);
        assert_eq!(shortest(&[]), 0);
    }

    #[test]
    fn test_validate_all_uses_shortest_series() {
        let a = [1.0; 10];
        let b = [1.0; 4];
        assert!(validate_all(&[&a, &b], &[4]).is_ok());
        assert!(validate_all(&[&a, &b], &[5]).is_err());
        assert!(validate_all(&[&a, &[]], &[]).is_err());
    }

    #[test]
    fn test_series_from_json() {
        assert_eq!(
            series_from_json(&json!([1, 2.5, 3]), "close").unwrap(),
            vec![1.0, 2.5, 3.0]
        );
        let nil = series_from_json(&Value::Null, "close").unwrap_err();
        assert!(nil.to_string().contains("cannot be nil"));
        let scalar = series_from_json(&json!(42), "close").unwrap_err();
        assert!(scalar.to_string().contains("must be an array"));
        let empty = series_from_json(&json!([]), "close").unwrap_err();
        assert!(empty.to_string().contains("cannot be empty"));
        let mixed = series_from_json(&json!([1, "x"]), "close").unwrap_err();
        assert!(matches!(mixed, Error::InvalidParameter(_)));
    }

    #[test]
    fn test_align() {
        let v = align(&[1.0, 2.0], 3, 5, f64::NAN);
        assert!(v[0].is_nan() && v[1].is_nan() && v[2].is_nan());
        assert_eq!(&v[3..], &[1.0, 2.0]);

        let ints = align(&[100, -100], 1, 3, 0);
        assert_eq!(ints, vec![0, 100, -100]);
    }
}
