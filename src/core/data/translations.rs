use indexmap::{IndexMap, IndexSet};

/// Flat key → value mapping for one locale.
///
/// Keys are dot-delimited paths (e.g. `"Common.submit"`). An empty value means
/// the key exists but is untranslated. Iteration follows insertion order.
pub type LocaleDict = IndexMap<String, String>;

/// All locale dictionaries of one snapshot (current load or previous export).
///
/// Locale insertion order decides display column order and the order in which
/// the canonical key set is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationMap {
    locales: IndexMap<String, LocaleDict>,
}

impl TranslationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) the dictionary of a locale.
    pub fn insert_locale(&mut self, locale: impl Into<String>, dict: LocaleDict) {
        self.locales.insert(locale.into(), dict);
    }

    /// Set one value, creating the locale dictionary if needed.
    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.locales
            .entry(locale.into())
            .or_default()
            .insert(key.into(), value.into());
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    pub fn locale_count(&self) -> usize {
        self.locales.len()
    }

    pub fn contains_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    pub fn get(&self, locale: &str) -> Option<&LocaleDict> {
        self.locales.get(locale)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LocaleDict)> {
        self.locales.iter().map(|(locale, dict)| (locale.as_str(), dict))
    }

    /// Value of `key` in `locale`, `None` when the locale or the key is absent.
    pub fn value(&self, locale: &str, key: &str) -> Option<&str> {
        self.locales
            .get(locale)
            .and_then(|dict| dict.get(key))
            .map(String::as_str)
    }

    /// Deduplicated union of keys across all locales, in first-seen order.
    ///
    /// Locales are walked in insertion order, keys in their own insertion order.
    /// This order governs row order in every rendered artifact.
    pub fn canonical_keys(&self) -> IndexSet<&str> {
        self.locales
            .values()
            .flat_map(|dict| dict.keys().map(String::as_str))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

impl<L, K, V> FromIterator<(L, Vec<(K, V)>)> for TranslationMap
where
    L: Into<String>,
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (L, Vec<(K, V)>)>>(iter: I) -> Self {
        let mut map = TranslationMap::new();
        for (locale, entries) in iter {
            let dict = entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect();
            map.insert_locale(locale, dict);
        }
        map
    }
}
