//! Score normalization. Resolves the number-or-labeled-string gibberish field
//! into a plain number, or `None` when a chart point has to be left out.

use api::GibberishScore;

pub fn parse_gibberish(value: &GibberishScore) -> Option<f64> {
    match value {
        GibberishScore::Numeric(number) => finite(*number),
        GibberishScore::Labeled(text) => parse_gibberish_str(text),
    }
}

/// `"clean : 0.87"` → `0.87`, `"0.87"` → `0.87`, `"clean : n/a"` → `None`.
pub fn parse_gibberish_str(raw: &str) -> Option<f64> {
    let numeric_part = match raw.split_once(':') {
        Some((_, rest)) => rest,
        None => raw,
    };
    numeric_part.trim().parse::<f64>().ok().and_then(finite)
}

/// Label preceding the colon (`"clean"`), when the service sent one.
pub fn gibberish_label(value: &GibberishScore) -> Option<&str> {
    match value {
        GibberishScore::Numeric(_) => None,
        GibberishScore::Labeled(text) => text
            .split_once(':')
            .map(|(label, _)| label.trim())
            .filter(|label| !label.is_empty()),
    }
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
