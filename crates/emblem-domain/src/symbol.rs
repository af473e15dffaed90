//! Symbol module - the catalogued entity being ranked and verified

use std::fmt;

/// Namespace used to derive stable symbol ids from names
const SYMBOL_NAMESPACE: uuid::Uuid = uuid::Uuid::NAMESPACE_OID;

/// Unique identifier for a symbol based on UUIDv7
///
/// UUIDv7 provides:
/// - Chronological sortability for temporal queries
/// - 128-bit uniqueness
/// - RFC 9562-standard format with broad ecosystem support
/// - No coordination required for distributed generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolId(u128);

impl SymbolId {
    /// Generate a new UUIDv7-based SymbolId
    ///
    /// # Examples
    ///
    /// ```
    /// use emblem_domain::SymbolId;
    ///
    /// let id = SymbolId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Derive a stable id from a symbol name (UUIDv5)
    ///
    /// The same name always produces the same id, which lets verification
    /// records recorded in one process be found again in another.
    ///
    /// # Examples
    ///
    /// ```
    /// use emblem_domain::SymbolId;
    ///
    /// let a = SymbolId::from_name("Ouroboros");
    /// let b = SymbolId::from_name("Ouroboros");
    /// assert_eq!(a, b);
    /// ```
    pub fn from_name(name: &str) -> Self {
        Self(uuid::Uuid::new_v5(&SYMBOL_NAMESPACE, name.as_bytes()).as_u128())
    }

    /// Create a new SymbolId from a raw u128 value
    ///
    /// This is primarily for storage layer deserialization.
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a SymbolId from a UUID string
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid UUID string: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for SymbolId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// The five documentation fields tracked by the completeness evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolField {
    /// At least one non-placeholder image
    Media,
    /// Free-text description
    Description,
    /// Cultural significance text
    Significance,
    /// Historical context text
    HistoricalContext,
    /// Non-empty tag list
    Tags,
}

impl SymbolField {
    /// Get the field name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolField::Media => "media",
            SymbolField::Description => "description",
            SymbolField::Significance => "significance",
            SymbolField::HistoricalContext => "historical_context",
            SymbolField::Tags => "tags",
        }
    }
}

impl fmt::Display for SymbolField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalogued cultural symbol
///
/// Symbols are created by the contribution workflow and are read-only for
/// this core: completeness, visibility, and consensus values are recomputed
/// on every request and never written back.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    /// Unique identifier
    pub id: SymbolId,

    /// Display name (e.g. "Ouroboros")
    pub name: String,

    /// Culture or category of origin (e.g. "Ancient Egypt")
    pub culture: String,

    /// Historical period, if known
    pub period: Option<String>,

    /// Position in the recency-ordered listing (0 = most recent)
    pub base_rank: u32,

    /// Whether at least one non-placeholder image is attached
    pub has_media: bool,

    /// Free-text description
    pub description: Option<String>,

    /// Cultural significance
    pub significance: Option<String>,

    /// Historical context
    pub historical_context: Option<String>,

    /// Free-form tags
    pub tags: Vec<String>,
}

impl Symbol {
    /// Create a new symbol with the minimum required fields
    ///
    /// The id is derived from the name so that verification history
    /// recorded for a symbol can be found again across processes.
    pub fn new(name: impl Into<String>, culture: impl Into<String>, base_rank: u32) -> Self {
        let name = name.into();
        Self {
            id: SymbolId::from_name(&name),
            name,
            culture: culture.into(),
            period: None,
            base_rank,
            has_media: false,
            description: None,
            significance: None,
            historical_context: None,
            tags: Vec::new(),
        }
    }

    /// Attach media presence
    pub fn with_media(mut self, has_media: bool) -> Self {
        self.has_media = has_media;
        self
    }

    /// Set the historical period
    pub fn with_period(mut self, period: impl Into<String>) -> Self {
        self.period = Some(period.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the significance text
    pub fn with_significance(mut self, significance: impl Into<String>) -> Self {
        self.significance = Some(significance.into());
        self
    }

    /// Set the historical context text
    pub fn with_historical_context(mut self, context: impl Into<String>) -> Self {
        self.historical_context = Some(context.into());
        self
    }

    /// Set the tag list
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Whether a documentation field counts as present
    ///
    /// Text fields count only when non-blank after trimming; tags count
    /// only when the list is non-empty.
    pub fn has_field(&self, field: SymbolField) -> bool {
        fn filled(text: &Option<String>) -> bool {
            text.as_deref().is_some_and(|t| !t.trim().is_empty())
        }

        match field {
            SymbolField::Media => self.has_media,
            SymbolField::Description => filled(&self.description),
            SymbolField::Significance => filled(&self.significance),
            SymbolField::HistoricalContext => filled(&self.historical_context),
            SymbolField::Tags => !self.tags.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_id_ordering() {
        let id1 = SymbolId::from_value(1000);
        let id2 = SymbolId::from_value(2000);

        assert!(id1 < id2);
        assert!(id2 > id1);
    }

    #[test]
    fn test_symbol_id_from_name_stable() {
        let a = SymbolId::from_name("Yin and Yang");
        let b = SymbolId::from_name("Yin and Yang");
        let c = SymbolId::from_name("Ankh");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_symbol_id_display_and_parse() {
        let id = SymbolId::new();
        let id_str = id.to_string();

        // UUID strings are 36 characters (8-4-4-4-12 with hyphens)
        assert_eq!(id_str.len(), 36);

        let parsed = SymbolId::from_string(&id_str).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_symbol_id_invalid_string() {
        assert!(SymbolId::from_string("not-a-valid-uuid").is_err());
        assert!(SymbolId::from_string("").is_err());
    }

    #[test]
    fn test_field_presence() {
        let symbol = Symbol::new("Ankh", "Ancient Egypt", 0)
            .with_media(true)
            .with_description("Symbol of life")
            .with_tags(vec!["egypt".to_string()]);

        assert!(symbol.has_field(SymbolField::Media));
        assert!(symbol.has_field(SymbolField::Description));
        assert!(symbol.has_field(SymbolField::Tags));
        assert!(!symbol.has_field(SymbolField::Significance));
        assert!(!symbol.has_field(SymbolField::HistoricalContext));
    }

    #[test]
    fn test_blank_text_counts_as_absent() {
        let symbol = Symbol::new("Ankh", "Ancient Egypt", 0).with_description("   ");
        assert!(!symbol.has_field(SymbolField::Description));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: UUID ordering matches u128 ordering
        #[test]
        fn test_id_ordering_property(a: u128, b: u128) {
            let id_a = SymbolId::from_value(a);
            let id_b = SymbolId::from_value(b);

            prop_assert_eq!(id_a < id_b, a < b);
            prop_assert_eq!(id_a == id_b, a == b);
            prop_assert_eq!(id_a > id_b, a > b);
        }

        /// Property: Round-trip through string representation preserves ID
        #[test]
        fn test_id_string_roundtrip(value: u128) {
            let id = SymbolId::from_value(value);
            let id_str = id.to_string();

            match SymbolId::from_string(&id_str) {
                Ok(parsed) => prop_assert_eq!(id, parsed),
                Err(e) => return Err(TestCaseError::fail(e)),
            }
        }

        /// Property: Name-derived ids are deterministic
        #[test]
        fn test_name_derivation_stable(name in "\\PC{1,40}") {
            prop_assert_eq!(SymbolId::from_name(&name), SymbolId::from_name(&name));
        }
    }
}
