//! # Tag Filter
//!
//! Free-text tag matching for animals and products.
//!
//! ## Matching Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Tag Filter                                      │
//! │                                                                         │
//! │  Input tags: ["  dog ", "", "karma"]                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Normalize: trim, drop blanks, lowercase ──► ["dog", "karma"]          │
//! │       │                                                                 │
//! │       ├── nothing left? ──► every entity matches                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Entity matches if ANY tag matches ANY field                           │
//! │                                                                         │
//! │  Animal:  name ⊇ tag | description ⊇ tag | species == tag | status == tag│
//! │  Product: name ⊇ tag | description ⊇ tag                               │
//! │                                                                         │
//! │  (⊇ substring, == exact; both case-insensitive)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::{Animal, Product};

/// Case-insensitive equality (Unicode lowercase).
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Something a [`TagFilter`] can be matched against.
pub trait Searchable {
    /// Returns true if the already-lowercased `tag` matches any field.
    fn matches_tag(&self, tag: &str) -> bool;
}

impl Searchable for Animal {
    fn matches_tag(&self, tag: &str) -> bool {
        self.name.to_lowercase().contains(tag)
            || self.description.to_lowercase().contains(tag)
            || self.species.as_str() == tag
            || self.status.as_str() == tag
    }
}

impl Searchable for Product {
    fn matches_tag(&self, tag: &str) -> bool {
        self.name.to_lowercase().contains(tag) || self.description.to_lowercase().contains(tag)
    }
}

/// A normalized set of search tags.
///
/// ## Example
/// ```rust
/// use menagerie_core::filter::TagFilter;
///
/// let filter = TagFilter::new([" Dog ", "", "   "]);
/// assert_eq!(filter.tags(), ["dog"]);
///
/// assert!(TagFilter::new(["", " "]).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilter {
    tags: Vec<String>,
}

impl TagFilter {
    /// Trims every tag, drops blank ones and lowercases the rest.
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tags = tags
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        TagFilter { tags }
    }

    /// True when no usable tag remains. An empty filter matches everything.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// The normalized (trimmed, lowercased) tags.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns true if any tag matches any field of `item`.
    pub fn matches<T: Searchable>(&self, item: &T) -> bool {
        self.is_empty() || self.tags.iter().any(|tag| item.matches_tag(tag))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnimalStatus, Gender, Species};
    use chrono::Utc;

    fn animal(name: &str, species: Species, status: AnimalStatus, description: &str) -> Animal {
        Animal {
            id: 1,
            name: name.to_string(),
            age: 1,
            price: 0.0,
            status,
            species,
            gender: Gender::Unknown,
            description: description.to_string(),
            photo: None,
            intake_date: Utc::now(),
        }
    }

    fn product(name: &str, description: &str) -> Product {
        Product {
            id: 1,
            name: name.to_string(),
            description: description.to_string(),
            price: 1.0,
            discount: None,
            volume: 1,
            sold_volume: 0,
        }
    }

    #[test]
    fn test_normalization_drops_blanks() {
        let filter = TagFilter::new(vec!["  Cat ", "", "\t", "BIRD"]);
        assert_eq!(filter.tags(), ["cat", "bird"]);
        assert!(TagFilter::new(Vec::<String>::new()).is_empty());
        assert!(TagFilter::new([" ", ""]).is_empty());
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = TagFilter::new([" "]);
        assert!(filter.matches(&product("Anything", "")));
    }

    #[test]
    fn test_animal_species_is_exact_match() {
        let rocky = animal("Rocky", Species::Dog, AnimalStatus::Available, "Energetic");
        assert!(TagFilter::new(["DOG"]).matches(&rocky));
        // "do" is neither a name/description substring nor an exact species
        assert!(!TagFilter::new(["do"]).matches(&rocky));
    }

    #[test]
    fn test_animal_status_is_exact_match() {
        let kiwi = animal("Kiwi", Species::Bird, AnimalStatus::Pending, "Parrot");
        assert!(TagFilter::new(["pending"]).matches(&kiwi));
        assert!(!TagFilter::new(["available"]).matches(&kiwi));
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let luna = animal("Luna", Species::Cat, AnimalStatus::Available, "Nieśmiała kotka");
        assert!(TagFilter::new(["UNA"]).matches(&luna));
        assert!(TagFilter::new(["NIEŚMIAŁA"]).matches(&luna));
    }

    #[test]
    fn test_any_tag_matches() {
        let drapak = product("Drapak XXL", "Stabilny drapak z legowiskiem");
        assert!(TagFilter::new(["nothing", "legowisk"]).matches(&drapak));
        assert!(!TagFilter::new(["nothing", "else"]).matches(&drapak));
    }

    #[test]
    fn test_product_ignores_enum_text() {
        // products have no species/status; "dog" must appear in the text
        assert!(!TagFilter::new(["dog"]).matches(&product("Karma", "dla psów")));
        assert!(TagFilter::new(["dog"]).matches(&product("Dog food", "")));
    }

    #[test]
    fn test_eq_ignore_case() {
        assert!(eq_ignore_case("Cancelled", "CANCELLED"));
        assert!(!eq_ignore_case("cancelled", "cancel"));
    }
}
