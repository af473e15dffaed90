//! Static fallback data
//!
//! A conservative built-in symbol set served when the live symbol source is
//! unreachable, so the ranked view renders degraded rather than broken.

use emblem_domain::Symbol;

/// The built-in fallback symbol set, recency-ordered
pub fn default_symbols() -> Vec<Symbol> {
    vec![
        Symbol::new("Yin and Yang", "Chinese", 0)
            .with_media(true)
            .with_period("Zhou dynasty")
            .with_description("Interlocking light and dark halves expressing complementary duality")
            .with_significance("Core concept of Taoist cosmology")
            .with_historical_context("Attested in the Yijing commentaries")
            .with_tags(vec!["taoism".to_string(), "duality".to_string()]),
        Symbol::new("Ankh", "Ancient Egypt", 1)
            .with_media(true)
            .with_period("Old Kingdom")
            .with_description("Cross with a loop, carried by deities in tomb reliefs")
            .with_significance("Hieroglyph for life and a funerary emblem of immortality")
            .with_historical_context("Ubiquitous in dynastic iconography from the third millennium BCE")
            .with_tags(vec!["egypt".to_string(), "life".to_string()]),
        Symbol::new("Ouroboros", "Ancient Egypt", 2)
            .with_description("Serpent devouring its own tail")
            .with_significance("Cyclic renewal and self-reference")
            .with_tags(vec!["alchemy".to_string(), "cycle".to_string()]),
        Symbol::new("Triskelion", "Celtic", 3)
            .with_description("Three interlocked spirals radiating from a center")
            .with_tags(vec!["celtic".to_string()]),
        Symbol::new("Hamsa", "Middle Eastern", 4),
    ]
}
