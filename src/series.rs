use crate::error::ChartError;
use serde::Deserialize;
use std::path::Path;

/// One labeled sample of the series.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DataPoint {
    pub label: String,
    #[serde(rename = "totalValue")]
    pub value: f64,
}

impl DataPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Ordered, non-empty sequence of points. Order is display order on the x axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    points: Vec<DataPoint>,
}

impl Series {
    pub fn new(points: Vec<DataPoint>) -> Result<Self, ChartError> {
        if points.is_empty() {
            return Err(ChartError::EmptySeries);
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn value_range(&self) -> ValueRange {
        let mut iter = self.points.iter().map(|p| p.value);
        // non-empty by construction
        let first = iter.next().unwrap_or_default();
        let (min, max) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        ValueRange { min, max }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn is_flat(&self) -> bool {
        self.max - self.min == 0.0
    }

    /// `max - min`, or 1 when every value is equal.
    pub fn span(&self) -> f64 {
        if self.is_flat() { 1.0 } else { self.max - self.min }
    }
}

#[derive(Debug, Deserialize)]
struct SeriesFile {
    points: Vec<DataPoint>,
}

pub fn parse_series(input: &str) -> Result<Series, ChartError> {
    let parsed: SeriesFile = serde_json::from_str(input)?;
    Series::new(parsed.points)
}

pub fn load_series(path: &Path) -> Result<Series, ChartError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ChartError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let series = parse_series(&contents)?;
    tracing::info!("loaded {} points from {}", series.len(), path.display());
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_points_in_order() {
        let series = parse_series(
            r#"{"points":[{"label":"W1","totalValue":1000},{"label":"W2","totalValue":1500.5}]}"#,
        )
        .unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.points()[0], DataPoint::new("W1", 1000.0));
        assert_eq!(series.points()[1].value, 1500.5);
    }

    #[test]
    fn ignores_extra_keys() {
        let series = parse_series(
            r#"{"generatedAt":"2024-01-01","points":[{"label":"Mon","totalValue":3,"trades":7}]}"#,
        )
        .unwrap();
        assert_eq!(series.points()[0].label, "Mon");
    }

    #[test]
    fn rejects_empty_points() {
        let err = parse_series(r#"{"points":[]}"#).unwrap_err();
        assert!(matches!(err, ChartError::EmptySeries));
    }

    #[test]
    fn rejects_missing_total_value() {
        let err = parse_series(r#"{"points":[{"label":"W1","value":10}]}"#).unwrap_err();
        assert!(matches!(err, ChartError::Parse(_)));
    }

    #[test]
    fn rejects_missing_points_key() {
        let err = parse_series(r#"{"series":[]}"#).unwrap_err();
        assert!(matches!(err, ChartError::Parse(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_series(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, ChartError::Read { .. }));
    }

    #[test]
    fn value_range_substitutes_one_when_flat() {
        let series = Series::new(vec![DataPoint::new("a", 5.0), DataPoint::new("b", 5.0)]).unwrap();
        let range = series.value_range();
        assert!(range.is_flat());
        assert_eq!(range.span(), 1.0);

        let series = Series::new(vec![DataPoint::new("a", -2.0), DataPoint::new("b", 8.0)]).unwrap();
        let range = series.value_range();
        assert_eq!(range.min, -2.0);
        assert_eq!(range.max, 8.0);
        assert_eq!(range.span(), 10.0);
    }
}
