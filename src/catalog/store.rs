// src/catalog/store.rs

use crate::catalog::models::Property;
use crate::errors::ServerError;
use std::collections::HashSet;

/// The property dataset shipped with the binary. Loaded once at startup;
/// there are no create/update/delete operations anywhere in the app.
static EMBEDDED_PROPERTIES: &str = include_str!("../../data/properties.json");

/// Immutable, ordered collection of properties. The order here is the order
/// every search result preserves.
#[derive(Debug, Clone)]
pub struct Catalog {
    properties: Vec<Property>,
}

impl Catalog {
    /// Parses the embedded dataset.
    pub fn embedded() -> Result<Self, ServerError> {
        Self::from_json(EMBEDDED_PROPERTIES)
    }

    /// Builds a catalog from a JSON array of properties, rejecting duplicate ids.
    pub fn from_json(json: &str) -> Result<Self, ServerError> {
        let properties: Vec<Property> = serde_json::from_str(json)
            .map_err(|e| ServerError::CatalogError(format!("Failed to parse property data: {e}")))?;

        let mut seen = HashSet::new();
        for property in &properties {
            if !seen.insert(property.id.as_str()) {
                return Err(ServerError::CatalogError(format!(
                    "Duplicate property id: {}",
                    property.id
                )));
            }
        }

        Ok(Self { properties })
    }

    pub fn as_slice(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_loads() {
        let catalog = Catalog::embedded().expect("embedded catalog should parse");
        assert_eq!(catalog.len(), 6);

        let first = &catalog.as_slice()[0];
        assert_eq!(first.id, "prop1");
        assert_eq!(first.bedrooms, 3);
        assert_eq!(first.price_value, 12_500_000);
        assert_eq!(first.property_type, "Apartment");
        assert!(first.furnished);
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.get("prop4").map(|p| p.bedrooms), Some(1));
        assert!(catalog.get("nope").is_none());
    }

    #[test]
    fn duplicate_ids_rejected() {
        let json = r#"[
            {"id":"a","name":"A","location":"X","area":"1 sq.ft","price":"₹1 Lakh",
             "priceValue":100000,"image":"","description":"","features":[],
             "amenities":[],"bedrooms":1,"bathrooms":1,"type":"Flat",
             "yearBuilt":2000,"furnished":false},
            {"id":"a","name":"B","location":"Y","area":"1 sq.ft","price":"₹1 Lakh",
             "priceValue":100000,"image":"","description":"","features":[],
             "amenities":[],"bedrooms":1,"bathrooms":1,"type":"Flat",
             "yearBuilt":2000,"furnished":false}
        ]"#;

        let err = Catalog::from_json(json).unwrap_err();
        assert!(err.to_string().contains("Duplicate property id"));
    }

    #[test]
    fn malformed_json_is_a_catalog_error() {
        let err = Catalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ServerError::CatalogError(_)));
    }
}
