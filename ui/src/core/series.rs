//! Chart-ready series derived from the stored history.
//!
//! History is stored newest-first; charts read left to right, oldest-first.
//! Every vector in [`ChartSeries`] is reversed together so index `i` always
//! refers to the same source record. Labels are a positional axis: `Entry 1`
//! is the oldest point on the chart.

use api::AnalysisRecord;

use super::score::parse_gibberish;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub toxicity: Vec<f64>,
    /// `None` marks a gap: the stored value could not be parsed.
    pub gibberish: Vec<Option<f64>>,
    /// Index of each point's record in the slice passed to [`build_series`].
    pub source_index: Vec<usize>,
}

pub fn build_series(records: &[AnalysisRecord]) -> ChartSeries {
    let mut series = ChartSeries {
        labels: Vec::with_capacity(records.len()),
        toxicity: Vec::with_capacity(records.len()),
        gibberish: Vec::with_capacity(records.len()),
        source_index: Vec::with_capacity(records.len()),
    };

    for (position, (index, record)) in records.iter().enumerate().rev().enumerate() {
        series.labels.push(format!("Entry {}", position + 1));
        series.toxicity.push(record.toxicity);
        series.gibberish.push(parse_gibberish(&record.gibberish));
        series.source_index.push(index);
    }

    series
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn gap_count(&self) -> usize {
        self.gibberish.iter().filter(|value| value.is_none()).count()
    }

    pub fn mean_toxicity(&self) -> Option<f64> {
        mean(self.toxicity.iter().copied().filter(|v| v.is_finite()))
    }

    pub fn mean_gibberish(&self) -> Option<f64> {
        mean(self.gibberish.iter().flatten().copied())
    }

    pub fn toxicity_points(&self) -> Vec<Option<f64>> {
        self.toxicity
            .iter()
            .map(|value| value.is_finite().then_some(*value))
            .collect()
    }
}

/// Split a gap-bearing series into runs of consecutive `(index, value)`
/// points. Each run is drawn as its own polyline.
pub fn segments(values: &[Option<f64>]) -> Vec<Vec<(usize, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for (index, value) in values.iter().enumerate() {
        match value {
            Some(v) => current.push((index, *v)),
            None if !current.is_empty() => runs.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}
