//! Country-name normalization and the free-tier allow-list.

use serde::{Deserialize, Serialize};

use crate::CompareError;

/// Countries available to free-tier API keys.
pub const DEFAULT_ALLOWED_COUNTRIES: &[&str] = &["Sweden", "Mexico", "New Zealand", "Thailand"];

/// Normalize a user-supplied country name.
///
/// Surrounding whitespace is trimmed, the first character is upper-cased and
/// the remainder lower-cased: `"sWEDEN"` becomes `"Sweden"` and
/// `"new zealand"` becomes `"New zealand"`.
#[must_use]
pub fn normalize_country(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

/// Render a list of names as an English enumeration ("A, B, and C").
#[must_use]
pub fn allowed_phrase(names: &[String]) -> String {
    match names {
        [] => "no countries".to_string(),
        [only] => only.clone(),
        [a, b] => format!("{a} and {b}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}

/// Ordered set of countries a comparison may reference.
///
/// Entries keep their canonical spelling (what the provider expects). Lookups
/// compare normalized forms, so `"NEW ZEALAND"` resolves to `"New Zealand"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllowList(Vec<String>);

impl Default for AllowList {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_COUNTRIES.iter().copied())
    }
}

impl AllowList {
    /// Build an allow-list from canonical names. Blank entries and
    /// normalized duplicates are dropped; first spelling wins.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            let key = normalize_country(name);
            if !out.iter().any(|existing| normalize_country(existing) == key) {
                out.push(name.to_string());
            }
        }
        Self(out)
    }

    /// Canonical entries in configuration order.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.0
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when no country is allowed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Normalize `raw` and return the canonical allow-list spelling.
    ///
    /// # Errors
    /// Returns `CompareError::InvalidCountry` when no entry matches.
    pub fn resolve(&self, raw: &str) -> Result<&str, CompareError> {
        let key = normalize_country(raw);
        if key.is_empty() {
            return Err(CompareError::invalid_country(raw, self.0.iter().cloned()));
        }
        self.0
            .iter()
            .find(|entry| normalize_country(entry) == key)
            .map(String::as_str)
            .ok_or_else(|| CompareError::invalid_country(raw, self.0.iter().cloned()))
    }

    /// Returns true when `raw` resolves to an entry.
    #[must_use]
    pub fn contains(&self, raw: &str) -> bool {
        self.resolve(raw).is_ok()
    }
}
