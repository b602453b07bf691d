/// The closed set of subject groupings the app ships topic rules for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKey {
    Agriculture,
    Economy,
    Gk,
    History,
    Geography,
    English,
    Aptitude,
}

/// Ordered identifier hints; resolution takes the first hit.
const CATEGORY_HINTS: &[(CategoryKey, &str)] = &[
    (CategoryKey::Agriculture, "agri"),
    (CategoryKey::Economy, "econom"),
    (CategoryKey::Gk, "gk"),
    (CategoryKey::History, "histor"),
    (CategoryKey::Geography, "geograph"),
    (CategoryKey::English, "english"),
    (CategoryKey::Aptitude, "aptitude"),
];

impl CategoryKey {
    /// Resolves a content source identifier (a bank file name, or a store
    /// category's slug or display name) to a canonical key.
    ///
    /// Matching is case-insensitive substring search over an ordered hint
    /// list. `None` means unresolved; downstream consumers treat that as
    /// "use the generic default rules" rather than an error.
    pub fn resolve(identifier: &str) -> Option<CategoryKey> {
        let lowered = identifier.to_lowercase();
        CATEGORY_HINTS
            .iter()
            .find(|(_, hint)| lowered.contains(hint))
            .map(|(key, _)| *key)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKey::Agriculture => "agriculture",
            CategoryKey::Economy => "economy",
            CategoryKey::Gk => "gk",
            CategoryKey::History => "history",
            CategoryKey::Geography => "geography",
            CategoryKey::English => "english",
            CategoryKey::Aptitude => "aptitude",
        }
    }
}
