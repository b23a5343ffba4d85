//! SVG geometry for the history line charts.

pub(crate) const CHART_WIDTH: f64 = 600.0;
pub(crate) const CHART_HEIGHT: f64 = 240.0;
const CHART_PADDING: f64 = 24.0;

/// Maps series indices and scores into the chart's viewBox. Scores are
/// assumed to live in `[0, 1]`; the axis stretches when a value exceeds it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ChartGeometry {
    points: usize,
    y_max: f64,
}

impl ChartGeometry {
    pub(crate) fn new(values: &[Option<f64>]) -> Self {
        let y_max = values
            .iter()
            .flatten()
            .copied()
            .fold(1.0_f64, f64::max);
        Self {
            points: values.len(),
            y_max,
        }
    }

    pub(crate) fn y_max(&self) -> f64 {
        self.y_max
    }

    pub(crate) fn x(&self, index: usize) -> f64 {
        let span = CHART_WIDTH - 2.0 * CHART_PADDING;
        if self.points <= 1 {
            return CHART_PADDING + span / 2.0;
        }
        CHART_PADDING + span * index as f64 / (self.points - 1) as f64
    }

    pub(crate) fn y(&self, value: f64) -> f64 {
        let span = CHART_HEIGHT - 2.0 * CHART_PADDING;
        let clamped = value.clamp(0.0, self.y_max);
        CHART_HEIGHT - CHART_PADDING - span * clamped / self.y_max
    }

    /// Baseline and top gridlines as `(y, label)`.
    pub(crate) fn gridlines(&self) -> [(f64, String); 2] {
        [
            (self.y(0.0), "0".to_string()),
            (self.y(self.y_max), format!("{}", self.y_max)),
        ]
    }
}

/// `points` attribute for one gap-free run.
pub(crate) fn polyline_points(run: &[(usize, f64)], geometry: &ChartGeometry) -> String {
    run.iter()
        .map(|(index, value)| format!("{:.1},{:.1}", geometry.x(*index), geometry.y(*value)))
        .collect::<Vec<_>>()
        .join(" ")
}
