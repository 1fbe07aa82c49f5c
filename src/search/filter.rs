// src/search/filter.rs

use crate::catalog::Property;
use crate::search::query::Constraints;
use crate::search::vocabulary::Vocabulary;

/// Behavior toggles for the two search surfaces: the full chat/search widget
/// matches feature keywords, the compact search bar does not.
#[derive(Debug, Clone, Copy)]
pub struct FilterOptions {
    pub match_features: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            match_features: true,
        }
    }
}

/// A vocabulary plus options, bundled so every caller filters the same way.
///
/// Filtering is a pure function of (query, catalog): no I/O, no state, safe
/// to call from any number of request threads.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    vocabulary: Vocabulary,
    options: FilterOptions,
}

impl SearchEngine {
    pub fn new(vocabulary: Vocabulary, options: FilterOptions) -> Self {
        Self {
            vocabulary,
            options,
        }
    }

    /// The compact search-bar variant: no feature keyword matching.
    pub fn compact() -> Self {
        Self::new(
            Vocabulary::default(),
            FilterOptions {
                match_features: false,
            },
        )
    }

    /// Returns the ordered subsequence of `catalog` satisfying every
    /// constraint the query expresses. An empty or whitespace-only query
    /// returns the whole catalog.
    pub fn filter<'a>(&self, query: &str, catalog: &'a [Property]) -> Vec<&'a Property> {
        if query.trim().is_empty() {
            return catalog.iter().collect();
        }

        let constraints = Constraints::parse(query, &self.vocabulary, self.options.match_features);

        catalog
            .iter()
            .filter(|property| passes(property, &constraints))
            .collect()
    }
}

/// Filters with the default full-variant engine.
pub fn filter_properties<'a>(query: &str, catalog: &'a [Property]) -> Vec<&'a Property> {
    SearchEngine::default().filter(query, catalog)
}

/// A property is kept iff it passes every constraint category the query
/// actually triggered. Untriggered categories impose nothing.
fn passes(property: &Property, constraints: &Constraints) -> bool {
    if let Some(bedrooms) = constraints.bedrooms {
        if property.bedrooms != bedrooms {
            return false;
        }
    }

    if !constraints.locations.is_empty() {
        let location = property.location.to_lowercase();
        if !constraints
            .locations
            .iter()
            .any(|token| location.contains(token.as_str()))
        {
            return false;
        }
    }

    if let Some(ceiling) = constraints.max_price {
        if property.price_value as f64 > ceiling {
            return false;
        }
    }

    if !constraints.features.is_empty() {
        let listed: Vec<String> = property
            .features
            .iter()
            .chain(property.amenities.iter())
            .map(|f| f.to_lowercase())
            .collect();

        let satisfied = |keyword: &str| {
            listed.iter().any(|f| f.contains(keyword))
                || (keyword == "furnished" && property.furnished)
        };

        if !constraints.features.iter().all(|kw| satisfied(kw)) {
            return false;
        }
    }

    true
}
