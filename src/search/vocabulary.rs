// src/search/vocabulary.rs

/// Location tokens the query parser recognizes. Matching is plain substring
/// containment on the lowercased query, so every token that appears is
/// collected; order here only fixes the order they are reported in.
const LOCATIONS: [&str; 10] = [
    "south delhi",
    "north delhi",
    "east delhi",
    "west delhi",
    "vasant kunj",
    "dwarka",
    "greater kailash",
    "rohini",
    "saket",
    "mayur vihar",
];

/// Feature/amenity keywords the query parser recognizes.
const FEATURE_KEYWORDS: [&str; 8] = [
    "pool", "gym", "garden", "parking", "security", "balcony", "terrace", "furnished",
];

/// The closed sets of tokens the constraint extractor matches against.
/// Tokens are stored lowercased; the defaults are the product contract.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    locations: Vec<String>,
    feature_keywords: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(LOCATIONS.iter().copied(), FEATURE_KEYWORDS.iter().copied())
    }
}

impl Vocabulary {
    pub fn new<'a>(
        locations: impl IntoIterator<Item = &'a str>,
        feature_keywords: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            locations: locations.into_iter().map(str::to_lowercase).collect(),
            feature_keywords: feature_keywords.into_iter().map(str::to_lowercase).collect(),
        }
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    pub fn feature_keywords(&self) -> &[String] {
        &self.feature_keywords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_vocabulary_matches_contract() {
        let vocab = Vocabulary::default();
        assert_eq!(vocab.locations().len(), 10);
        assert_eq!(vocab.locations()[0], "south delhi");
        assert_eq!(vocab.locations()[9], "mayur vihar");
        assert_eq!(vocab.feature_keywords().len(), 8);
        assert_eq!(vocab.feature_keywords()[7], "furnished");
    }

    #[test]
    fn custom_tokens_are_lowercased() {
        let vocab = Vocabulary::new(["Noida", "Gurgaon"], ["Lift"]);
        assert_eq!(vocab.locations(), ["noida", "gurgaon"]);
        assert_eq!(vocab.feature_keywords(), ["lift"]);
    }
}
