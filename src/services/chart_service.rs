use thiserror::Error;

use crate::models::ChartGeometry;

/// Drawing surface dimensions, shared with the dashboard layout.
pub const CHART_WIDTH: f64 = 600.0;
pub const CHART_HEIGHT: f64 = 170.0;
pub const CHART_PADDING: f64 = 8.0;

/// Number of horizontal axis labels, max down to min.
pub const AXIS_LABEL_COUNT: usize = 5;

#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    #[error("Cannot chart an empty price series")]
    EmptySeries,
}

/// Build the drawing description for an ordered price series.
///
/// Samples map onto a fixed 600x170 surface with an 8px vertical padding
/// band. Higher prices render higher on screen (top-left origin). A
/// zero-range series has no vertical scale and draws flat at the
/// midpoint; a lone sample degrades to the same flat line across the
/// full width.
pub fn render_chart(samples: &[f64], color: &str) -> Result<ChartGeometry, ChartError> {
    if samples.is_empty() {
        return Err(ChartError::EmptySeries);
    }

    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    let labels = axis_labels(min, max);

    let points = if range == 0.0 {
        flat_points(samples.len())
    } else {
        scale_points(samples, min, range)
    };

    let line_path = polyline(&points);
    let area_path = close_to_baseline(&line_path);

    Ok(ChartGeometry {
        line_path,
        area_path,
        labels,
        color: color.to_string(),
    })
}

/// Interpolated labels at fractions i/4 between max (top) and min
/// (bottom), two decimal places.
fn axis_labels(min: f64, max: f64) -> Vec<String> {
    let range = max - min;
    let steps = (AXIS_LABEL_COUNT - 1) as f64;
    (0..AXIS_LABEL_COUNT)
        .map(|i| format!("{:.2}", max - range * (i as f64 / steps)))
        .collect()
}

/// Zero-range fallback: every point sits at the vertical midpoint. A
/// single sample cannot be spread along the x axis (the even-spacing
/// divisor would be zero), so it becomes a two-point line across the
/// full width.
fn flat_points(n: usize) -> Vec<(f64, f64)> {
    let y = CHART_HEIGHT / 2.0;
    if n < 2 {
        return vec![(0.0, y), (CHART_WIDTH, y)];
    }
    (0..n)
        .map(|i| (i as f64 / (n - 1) as f64 * CHART_WIDTH, y))
        .collect()
}

/// Normalize each sample into surface coordinates: x spread evenly over
/// the width, y inverted into the padded band so that max lands at
/// `CHART_PADDING` and min at `CHART_HEIGHT - CHART_PADDING`.
fn scale_points(samples: &[f64], min: f64, range: f64) -> Vec<(f64, f64)> {
    let n = samples.len();
    samples
        .iter()
        .enumerate()
        .map(|(i, &sample)| {
            let x = i as f64 / (n - 1) as f64 * CHART_WIDTH;
            let y = CHART_HEIGHT
                - CHART_PADDING
                - ((sample - min) / range) * (CHART_HEIGHT - CHART_PADDING * 2.0);
            (x, y)
        })
        .collect()
}

fn polyline(points: &[(f64, f64)]) -> String {
    let joined = points
        .iter()
        .map(|(x, y)| format!("{},{}", x, y))
        .collect::<Vec<_>>()
        .join(" L ");
    format!("M {}", joined)
}

/// The area path is the polyline extended down to the baseline at the
/// right edge, across to the left edge, then closed.
fn close_to_baseline(line_path: &str) -> String {
    format!(
        "{} L {},{} L 0,{} Z",
        line_path, CHART_WIDTH, CHART_HEIGHT, CHART_HEIGHT
    )
}
