use crate::i18n::locale::Locale;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::BTreeMap;

const LOCALE_TABLE: &[(Locale, &str)] = &[
    (Locale::En, include_str!("../../i18n/en.json")),
    (Locale::Ar, include_str!("../../i18n/ar.json")),
];

static SHARED: Lazy<Dictionary> = Lazy::new(Dictionary::load_from_static);

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("JSON parsing error in locale '{locale}': {source}")]
    Json {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },
    #[error("locale '{0}' table must be a JSON object")]
    NotAnObject(Locale),
    #[error("key '{key}' in locale '{locale}' is not a string")]
    NonStringLeaf { locale: Locale, key: String },
}

type Table = BTreeMap<String, String>;

/// Flat `dotted.key -> text` tables, one per locale.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    tables: BTreeMap<Locale, Table>,
}

fn flatten(
    locale: Locale,
    prefix: &str,
    value: &Value,
    out: &mut Table,
) -> Result<(), DictionaryError> {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                let next = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                flatten(locale, &next, v, out)?;
            }
            Ok(())
        }
        Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
            Ok(())
        }
        _ => Err(DictionaryError::NonStringLeaf {
            locale,
            key: prefix.to_string(),
        }),
    }
}

impl Dictionary {
    /// Parse one JSON document per locale.
    ///
    /// # Errors
    ///
    /// Returns an error if a document is not valid JSON, is not an object, or
    /// holds a leaf that is not a string.
    pub fn from_sources(sources: &[(Locale, &str)]) -> Result<Self, DictionaryError> {
        let mut tables = BTreeMap::new();
        for (locale, raw) in sources {
            let value: Value = serde_json::from_str(raw).map_err(|source| DictionaryError::Json {
                locale: *locale,
                source,
            })?;
            if !value.is_object() {
                return Err(DictionaryError::NotAnObject(*locale));
            }
            let mut table = Table::new();
            flatten(*locale, "", &value, &mut table)?;
            tables.insert(*locale, table);
        }
        Ok(Self { tables })
    }

    /// Embedded tables. A broken table is logged and replaced by an empty
    /// dictionary, so every lookup renders its raw key.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_sources(LOCALE_TABLE).unwrap_or_else(|err| {
            log::error!("failed to load dictionary: {err}");
            Self::default()
        })
    }

    /// Process-wide instance backed by the embedded tables.
    #[must_use]
    pub fn shared() -> &'static Self {
        &SHARED
    }

    #[must_use]
    pub fn get(&self, locale: Locale, key: &str) -> Option<&str> {
        self.tables
            .get(&locale)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    /// Text for `key`, or the key itself when the table has no entry.
    ///
    /// There is no fallback to another locale: a miss is a data defect and is
    /// shown verbatim so it stands out.
    #[must_use]
    pub fn lookup<'a>(&'a self, locale: Locale, key: &'a str) -> &'a str {
        self.get(locale, key).unwrap_or_else(|| {
            log::warn!("missing translation '{key}' for locale '{locale}'");
            key
        })
    }

    pub fn keys(&self, locale: Locale) -> impl Iterator<Item = &str> {
        self.tables
            .get(&locale)
            .into_iter()
            .flat_map(|table| table.keys().map(String::as_str))
    }

    /// Keys present in the default locale but absent from `locale`.
    #[must_use]
    pub fn missing_keys(&self, locale: Locale) -> Vec<&str> {
        self.keys(Locale::default())
            .filter(|key| self.get(locale, key).is_none())
            .collect()
    }
}

fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut text = template.to_string();
    for (name, value) in args {
        text = text.replace(&format!("{{{name}}}"), value);
    }
    text
}

/// Translate `key` for `locale` using the shared dictionary.
#[must_use]
pub fn t(locale: Locale, key: &str) -> String {
    Dictionary::shared().lookup(locale, key).to_string()
}

/// Translate with `{name}` placeholder substitution.
#[must_use]
pub fn tr(locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
    interpolate(Dictionary::shared().lookup(locale, key), args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_objects_flatten_to_dotted_keys() {
        let dict = Dictionary::from_sources(&[(
            Locale::En,
            r#"{"nav": {"home": "Home"}, "login": {"title": "Sign in"}}"#,
        )])
        .unwrap();
        assert_eq!(dict.get(Locale::En, "nav.home"), Some("Home"));
        assert_eq!(dict.get(Locale::En, "login.title"), Some("Sign in"));
        assert_eq!(dict.keys(Locale::En).count(), 2);
    }

    #[test]
    fn miss_renders_raw_key_without_cross_locale_fallback() {
        let dict = Dictionary::from_sources(&[
            (Locale::En, r#"{"nav": {"home": "Home"}}"#),
            (Locale::Ar, r#"{"nav": {}}"#),
        ])
        .unwrap();
        assert_eq!(dict.lookup(Locale::Ar, "nav.home"), "nav.home");
        assert_eq!(dict.missing_keys(Locale::Ar), vec!["nav.home"]);
        assert!(dict.missing_keys(Locale::En).is_empty());
    }

    #[test]
    fn malformed_tables_are_rejected() {
        let err = Dictionary::from_sources(&[(Locale::En, "[1, 2]")]).unwrap_err();
        assert!(matches!(err, DictionaryError::NotAnObject(Locale::En)));

        let err = Dictionary::from_sources(&[(Locale::Ar, r#"{"count": 3}"#)]).unwrap_err();
        assert!(matches!(err, DictionaryError::NonStringLeaf { ref key, .. } if key == "count"));

        let err = Dictionary::from_sources(&[(Locale::En, "{")]).unwrap_err();
        assert!(err.to_string().contains("locale 'en'"));
    }

    #[test]
    fn interpolation_replaces_named_placeholders() {
        assert_eq!(
            interpolate("ID: #{id} ({id})", &[("id", "3")]),
            "ID: #3 (3)"
        );
        assert_eq!(interpolate("no args", &[]), "no args");
    }

    #[test]
    fn embedded_tables_load() {
        let dict = Dictionary::load_from_static();
        assert_eq!(dict.get(Locale::En, "nav.dashboard"), Some("Dashboard"));
        assert_eq!(dict.get(Locale::Ar, "nav.dashboard"), Some("لوحة التحكم"));
    }
}
