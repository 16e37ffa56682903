//! Chart geometry models

/// Declarative drawing description for the price chart: SVG path data for
/// the stroked line and the filled area, axis labels ordered top to
/// bottom, and the trend color for stroke and gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub line_path: String,
    pub area_path: String,
    /// Exactly five labels interpolated from max down to min.
    pub labels: Vec<String>,
    pub color: String,
}
