//! Property-based invariant tests for chart series derivation.
//!
//! For any stored history (newest-first):
//!
//! 1. Every series vector has one entry per record.
//! 2. Point `i` comes from record `len - 1 - i` (the list is reversed).
//! 3. Toxicity and gibberish at `i` both belong to `source_index[i]`.
//! 4. Labels run `Entry 1..=n` left to right.
//! 5. Gaps appear exactly where the stored gibberish does not parse.
//! 6. Segments cover every parsed point once, in order, never spanning a gap.
//! 7. Score parsing never panics and only yields finite values.

use api::{AnalysisRecord, GibberishScore, RecordTimestamp};
use proptest::prelude::*;
use ui::core::build_series;
use ui::core::score::{parse_gibberish, parse_gibberish_str};
use ui::core::series::segments;

// ── Helpers ─────────────────────────────────────────────────────────────

fn gibberish_strategy() -> impl Strategy<Value = GibberishScore> {
    prop_oneof![
        (0.0f64..=1.0).prop_map(GibberishScore::Numeric),
        ("[a-z ]{0,8}", 0.0f64..=1.0)
            .prop_map(|(label, value)| GibberishScore::Labeled(format!("{label}: {value}"))),
        "[a-z ]{0,12}".prop_map(GibberishScore::Labeled),
    ]
}

fn record_strategy() -> impl Strategy<Value = AnalysisRecord> {
    ("[a-zA-Z ]{0,24}", 0.0f64..=1.0, gibberish_strategy(), any::<u32>()).prop_map(
        |(text, toxicity, gibberish, millis)| AnalysisRecord {
            text,
            toxicity,
            gibberish,
            timestamp: RecordTimestamp::Epoch(i64::from(millis)),
        },
    )
}

fn history_strategy() -> impl Strategy<Value = Vec<AnalysisRecord>> {
    prop::collection::vec(record_strategy(), 0..40)
}

// ═════════════════════════════════════════════════════════════════════════
// 1–4. Shape and alignment
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn series_lengths_match_history(records in history_strategy()) {
        let series = build_series(&records);
        prop_assert_eq!(series.len(), records.len());
        prop_assert_eq!(series.toxicity.len(), records.len());
        prop_assert_eq!(series.gibberish.len(), records.len());
        prop_assert_eq!(series.source_index.len(), records.len());
    }

    #[test]
    fn points_are_reversed_and_aligned(records in history_strategy()) {
        let series = build_series(&records);
        let n = records.len();
        for i in 0..n {
            let source = series.source_index[i];
            prop_assert_eq!(source, n - 1 - i);
            prop_assert_eq!(series.toxicity[i], records[source].toxicity);
            prop_assert_eq!(series.gibberish[i], parse_gibberish(&records[source].gibberish));
        }
    }

    #[test]
    fn labels_are_ordinal(records in history_strategy()) {
        let series = build_series(&records);
        for (i, label) in series.labels.iter().enumerate() {
            prop_assert_eq!(label, &format!("Entry {}", i + 1));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Gaps
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn gaps_mark_unparseable_values(records in history_strategy()) {
        let series = build_series(&records);
        let expected = records
            .iter()
            .filter(|record| parse_gibberish(&record.gibberish).is_none())
            .count();
        prop_assert_eq!(series.gap_count(), expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Segments
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn segments_partition_parsed_points(values in prop::collection::vec(prop::option::of(0.0f64..=1.0), 0..60)) {
        let runs = segments(&values);

        let flattened: Vec<(usize, f64)> = runs.iter().flatten().copied().collect();
        let expected: Vec<(usize, f64)> = values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|v| (i, v)))
            .collect();
        prop_assert_eq!(flattened, expected);

        for run in &runs {
            prop_assert!(!run.is_empty(), "empty run in {:?}", runs);
            for pair in run.windows(2) {
                prop_assert_eq!(pair[1].0, pair[0].0 + 1, "run spans a gap: {:?}", run);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Parsing
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn parsing_never_panics(raw in ".{0,40}") {
        if let Some(value) = parse_gibberish_str(&raw) {
            prop_assert!(value.is_finite());
        }
    }

    #[test]
    fn labeled_values_parse_back(label in "[a-z]{1,10}", value in 0.0f64..=1.0) {
        let parsed = parse_gibberish_str(&format!("{label} : {value}"));
        prop_assert_eq!(parsed, Some(value));
    }
}
