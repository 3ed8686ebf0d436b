use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::series::{Series, ValueRange};

/// Horizontal gridlines drawn across the usable vertical span.
pub const GRIDLINE_COUNT: usize = 5;

/// Gap between a marker's centre and the baseline of its value label.
const VALUE_LABEL_OFFSET: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartDimensions {
    pub width: f32,
    pub height: f32,
    pub padding: f32,
}

impl Default for ChartDimensions {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 420.0,
            padding: 60.0,
        }
    }
}

impl ChartDimensions {
    pub fn usable_width(&self) -> f32 {
        self.width - 2.0 * self.padding
    }

    pub fn usable_height(&self) -> f32 {
        self.height - 2.0 * self.padding
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        let finite = self.width.is_finite() && self.height.is_finite() && self.padding.is_finite();
        if !finite || self.padding < 0.0 || self.usable_width() <= 0.0 || self.usable_height() <= 0.0
        {
            return Err(ChartError::InvalidDimensions {
                width: self.width,
                height: self.height,
                padding: self.padding,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlottedPoint {
    pub position: ScaledPoint,
    pub label: String,
    pub value: f64,
    pub value_label_y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Gridline {
    pub x1: f64,
    pub x2: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TitleLayout {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub width: f32,
    pub height: f32,
    pub gridlines: Vec<Gridline>,
    pub points: Vec<PlottedPoint>,
    /// Baseline shared by every x-axis label.
    pub label_baseline: f64,
    pub title: TitleLayout,
}

impl ChartLayout {
    pub fn scaled_points(&self) -> impl Iterator<Item = ScaledPoint> + '_ {
        self.points.iter().map(|p| p.position)
    }
}

/// Maps each point of the series to pixel coordinates.
///
/// Points spread evenly across the usable width in series order; a lone point
/// sits in the horizontal centre. Larger values map to smaller `y`. A series
/// whose values are all equal lies on the vertical mid-line of the usable area.
pub fn scale_series(series: &Series, dims: &ChartDimensions) -> Vec<ScaledPoint> {
    let range = series.value_range();
    let count = series.len();
    series
        .points()
        .iter()
        .enumerate()
        .map(|(idx, point)| ScaledPoint {
            x: scale_x(idx, count, dims),
            y: scale_y(point.value, &range, dims),
        })
        .collect()
}

fn scale_x(idx: usize, count: usize, dims: &ChartDimensions) -> f64 {
    let padding = f64::from(dims.padding);
    let usable = f64::from(dims.usable_width());
    if count > 1 {
        padding + usable * idx as f64 / (count - 1) as f64
    } else {
        padding + usable / 2.0
    }
}

fn scale_y(value: f64, range: &ValueRange, dims: &ChartDimensions) -> f64 {
    let ratio = if range.is_flat() {
        0.5
    } else {
        (value - range.min) / range.span()
    };
    f64::from(dims.padding) + f64::from(dims.usable_height()) * (1.0 - ratio)
}

pub fn gridlines(dims: &ChartDimensions) -> Vec<Gridline> {
    let padding = f64::from(dims.padding);
    let usable = f64::from(dims.usable_height());
    let steps = (GRIDLINE_COUNT - 1) as f64;
    (0..GRIDLINE_COUNT)
        .map(|idx| Gridline {
            x1: padding,
            x2: f64::from(dims.width) - padding,
            y: padding + usable * idx as f64 / steps,
        })
        .collect()
}

pub fn compute_layout(series: &Series, config: &ChartConfig) -> Result<ChartLayout, ChartError> {
    let dims = &config.dimensions;
    dims.validate()?;

    let points: Vec<PlottedPoint> = scale_series(series, dims)
        .into_iter()
        .zip(series.points())
        .map(|(position, point)| PlottedPoint {
            position,
            label: point.label.clone(),
            value: point.value,
            value_label_y: position.y - VALUE_LABEL_OFFSET,
        })
        .collect();

    let range = series.value_range();
    tracing::debug!(
        "laid out {} points on {}x{} canvas (min {}, max {})",
        points.len(),
        dims.width,
        dims.height,
        range.min,
        range.max
    );

    Ok(ChartLayout {
        width: dims.width,
        height: dims.height,
        gridlines: gridlines(dims),
        points,
        label_baseline: f64::from(dims.height) - f64::from(dims.padding) / 2.0,
        title: TitleLayout {
            x: f64::from(dims.width) / 2.0,
            y: f64::from(dims.padding) / 2.0,
            text: config.title.clone(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::DataPoint;

    fn series(values: &[f64]) -> Series {
        Series::new(
            values
                .iter()
                .enumerate()
                .map(|(idx, v)| DataPoint::new(format!("P{}", idx + 1), *v))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn one_scaled_point_per_data_point() {
        let dims = ChartDimensions::default();
        for len in 1..12 {
            let values: Vec<f64> = (0..len).map(|i| (i * 37 % 11) as f64).collect();
            assert_eq!(scale_series(&series(&values), &dims).len(), len);
        }
    }

    #[test]
    fn single_point_is_centred() {
        let dims = ChartDimensions::default();
        let points = scale_series(&series(&[42.0]), &dims);
        assert_eq!(points[0].x, f64::from(dims.padding + dims.usable_width() / 2.0));
        assert_eq!(points[0].x, 450.0);
    }

    #[test]
    fn flat_series_sits_on_mid_line() {
        let dims = ChartDimensions::default();
        let mid = f64::from(dims.padding + dims.usable_height() / 2.0);
        for point in scale_series(&series(&[7.0, 7.0, 7.0, 7.0]), &dims) {
            assert_eq!(point.y, mid);
        }
        assert_eq!(scale_series(&series(&[3.5]), &dims)[0].y, mid);
    }

    #[test]
    fn maximum_value_is_highest_on_canvas() {
        let dims = ChartDimensions::default();
        let values = [1000.0, 1500.0, 1200.0, -40.0, 1499.0];
        let points = scale_series(&series(&values), &dims);
        let top = points
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.y.total_cmp(&b.1.y))
            .map(|(idx, _)| idx);
        assert_eq!(top, Some(1));
        assert_eq!(points[1].y, 60.0);
        assert_eq!(points[3].y, 360.0);
    }

    #[test]
    fn x_spreads_from_padding_to_far_edge() {
        let dims = ChartDimensions::default();
        let points = scale_series(&series(&[1.0, 2.0, 3.0]), &dims);
        assert_eq!(points[0].x, 60.0);
        assert_eq!(points[1].x, 450.0);
        assert_eq!(points[2].x, 840.0);
    }

    #[test]
    fn gridlines_cover_usable_span() {
        let dims = ChartDimensions::default();
        let lines = gridlines(&dims);
        assert_eq!(lines.len(), GRIDLINE_COUNT);
        assert_eq!(lines[0].y, 60.0);
        assert_eq!(lines[2].y, 210.0);
        assert_eq!(lines[4].y, 360.0);
        assert!(lines.iter().all(|l| l.x1 == 60.0 && l.x2 == 840.0));
    }

    #[test]
    fn layout_places_labels() {
        let config = ChartConfig::default();
        let layout = compute_layout(&series(&[1.0, 3.0]), &config).unwrap();
        assert_eq!(layout.label_baseline, 390.0);
        assert_eq!(layout.title.x, 450.0);
        assert_eq!(layout.title.y, 30.0);
        assert_eq!(layout.points[1].value_label_y, layout.points[1].position.y - 12.0);
        assert_eq!(layout.points[0].label, "P1");
    }

    #[test]
    fn rejects_dimensions_without_usable_area() {
        let config = ChartConfig {
            dimensions: ChartDimensions {
                width: 100.0,
                height: 420.0,
                padding: 50.0,
            },
            ..ChartConfig::default()
        };
        let err = compute_layout(&series(&[1.0]), &config).unwrap_err();
        assert!(matches!(err, ChartError::InvalidDimensions { .. }));

        let nan = ChartDimensions {
            width: f32::NAN,
            ..ChartDimensions::default()
        };
        assert!(nan.validate().is_err());
    }
}
