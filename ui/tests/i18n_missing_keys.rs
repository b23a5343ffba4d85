//! Translation completeness checks for `textlens-ui.ftl`.
//!
//! - every `t!("…")` key referenced under `src/` exists in the fallback (en-US)
//! - every other locale defines every fallback key, without duplicates
//! - every translated message uses the same `$variables` as its fallback
//!
//! The parser is a line heuristic: a message starts with `id =` at column 0,
//! and the indented lines below it (select arms, continuations) belong to it.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "textlens-ui.ftl";
const FALLBACK: &str = "en-US";

const EN_US: &str = include_str!("../i18n/en-US/textlens-ui.ftl");
const ES_ES: &str = include_str!("../i18n/es-ES/textlens-ui.ftl");

/// Message id -> variables referenced in its body.
type Messages = BTreeMap<String, BTreeSet<String>>;

fn is_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

fn parse_messages(src: &str, locale: &str) -> Messages {
    let mut messages = Messages::new();
    let mut current: Option<String> = None;

    for line in src.lines() {
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        let indented = line.starts_with(' ') || line.starts_with('\t');
        let body = if indented {
            line
        } else {
            let Some((id, body)) = line.split_once('=') else {
                current = None;
                continue;
            };
            let id = id.trim();
            if id.is_empty() || !id.chars().all(is_key_char) {
                current = None;
                continue;
            }
            assert!(
                !messages.contains_key(id),
                "duplicate message `{id}` in {locale}"
            );
            messages.insert(id.to_string(), BTreeSet::new());
            current = Some(id.to_string());
            body
        };

        if let Some(id) = &current {
            let vars = messages.entry(id.clone()).or_default();
            vars.extend(variables(body));
        }
    }
    messages
}

fn variables(body: &str) -> impl Iterator<Item = String> + '_ {
    body.split('$').skip(1).filter_map(|rest| {
        let name: String = rest
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect();
        (!name.is_empty()).then_some(name)
    })
}

/// Literal first arguments of `t!(…)` calls in the crate sources.
fn referenced_keys(root: &Path) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(path) = stack.pop() {
        if path.is_dir() {
            for entry in fs::read_dir(&path).into_iter().flatten().flatten() {
                stack.push(entry.path());
            }
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        for chunk in content.split("t!(\"").skip(1) {
            if let Some(end) = chunk.find('"') {
                let key = &chunk[..end];
                if !key.is_empty() && key.chars().all(is_key_char) {
                    keys.insert(key.to_string());
                }
            }
        }
    }
    keys
}

#[test]
fn sources_only_reference_fallback_keys() {
    let fallback = parse_messages(EN_US, FALLBACK);
    let src = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let referenced = referenced_keys(&src);

    assert!(
        referenced.contains("nav-analysis"),
        "source scan found no translation calls"
    );
    let missing: Vec<_> = referenced
        .iter()
        .filter(|key| !fallback.contains_key(*key))
        .cloned()
        .collect();
    assert!(
        missing.is_empty(),
        "keys used in src/ but missing from {FALLBACK}/{FTL_FILENAME}:\n  {}",
        missing.join("\n  ")
    );
}

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback = parse_messages(EN_US, FALLBACK);
    assert!(!fallback.is_empty(), "fallback ({FALLBACK}) contains no keys");

    // Register new locales here.
    let locales: &[(&str, &str)] = &[("es-ES", ES_ES)];

    let mut failures = Vec::new();
    for (locale, src) in locales {
        let messages = parse_messages(src, locale);
        for (id, vars) in &fallback {
            match messages.get(id) {
                None => failures.push(format!("{locale}: missing `{id}`")),
                Some(found) if found != vars => failures.push(format!(
                    "{locale}: `{id}` uses {found:?}, fallback uses {vars:?}"
                )),
                Some(_) => {}
            }
        }
        for id in messages.keys().filter(|id| !fallback.contains_key(*id)) {
            failures.push(format!("{locale}: `{id}` is not in the fallback"));
        }
    }

    assert!(
        failures.is_empty(),
        "translation check failed:\n  {}\n\nHint: copy the keys from {FALLBACK}, then translate.",
        failures.join("\n  ")
    );
}

#[test]
fn every_locale_directory_is_registered() {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("i18n");
    let mut dirs: Vec<String> = fs::read_dir(&root)
        .into_iter()
        .flatten()
        .flatten()
        .filter(|entry| entry.path().join(FTL_FILENAME).is_file())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_owned))
        .collect();
    dirs.sort();
    assert_eq!(dirs, vec!["en-US".to_string(), "es-ES".to_string()]);
}

#[test]
fn select_expressions_keep_their_variable() {
    let fallback = parse_messages(EN_US, FALLBACK);
    let count_vars = |id: &str| fallback.get(id).cloned().unwrap_or_default();
    assert_eq!(count_vars("history-count"), BTreeSet::from(["count".to_string()]));
    assert_eq!(count_vars("chart-gaps"), BTreeSet::from(["count".to_string()]));
    assert_eq!(count_vars("config-error-detail"), BTreeSet::from(["var".to_string()]));
}
