//! Every dictionary key the pages and components pass to `t`/`tr` must
//! exist in every locale.

use cppnet_core::{Dictionary, Locale};
use std::collections::BTreeSet;
use std::path::Path;

fn is_key_like(literal: &str) -> bool {
    literal.contains('.')
        && literal.split('.').all(|segment| !segment.is_empty())
        && literal
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == '_' || c == '.')
}

/// Dotted lowercase string literals in `source`. Escapes inside literals
/// are skipped so `\"` never ends one early.
fn keys_in(source: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    let mut chars = source.chars();
    let mut literal: Option<String> = None;
    while let Some(c) = chars.next() {
        match literal.as_mut() {
            None => {
                if c == '"' {
                    literal = Some(String::new());
                }
            }
            Some(text) => match c {
                '\\' => {
                    chars.next();
                }
                '"' => {
                    if is_key_like(text) {
                        keys.insert(text.clone());
                    }
                    literal = None;
                }
                _ => text.push(c),
            },
        }
    }
    keys
}

fn collect_keys(dir: &Path, keys: &mut BTreeSet<String>) {
    let entries = std::fs::read_dir(dir).expect("source directory should be readable");
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_keys(&path, keys);
        } else if path.extension().is_some_and(|ext| ext == "rs")
            && path.file_name().is_some_and(|name| name != "i18n_tests.rs")
        {
            let source = std::fs::read_to_string(&path).expect("source file should be readable");
            keys.extend(keys_in(&source));
        }
    }
}

#[test]
fn key_scanner_finds_lookup_literals() {
    let source = r#"
        html! { <p>{ t(locale, "footer.rights") }</p> }
        let label = tr(p.locale, "modal.offer_id", &[("id", id.as_str())]);
        const KEYS: [&str; 1] = ["modal.traffic.seo"];
        let css = format!("{:.1}%", rate);
        let testid = "view-landing";
        assert!(html.contains("data-testid=\"nav.fake\""));
    "#;
    let keys = keys_in(source);
    let expected: BTreeSet<String> = ["footer.rights", "modal.offer_id", "modal.traffic.seo"]
        .into_iter()
        .map(str::to_string)
        .collect();
    assert_eq!(keys, expected);
}

#[test]
fn rendered_keys_exist_in_every_locale() {
    let mut keys = BTreeSet::new();
    collect_keys(Path::new("src"), &mut keys);
    assert!(keys.len() > 100, "expected the scan to find the page keys, got {}", keys.len());
    assert!(keys.contains("sidebar.toggle"));
    assert!(keys.contains("modal.rules.brand"));
    assert!(keys.contains("home.feature_support_title"));

    let dictionary = Dictionary::shared();
    let mut missing = Vec::new();
    for locale in Locale::ALL {
        for key in &keys {
            if dictionary.get(locale, key).is_none() {
                missing.push(format!("{locale}: {key}"));
            }
        }
    }
    assert!(missing.is_empty(), "missing translations: {missing:?}");
}
