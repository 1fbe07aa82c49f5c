use serde::Deserialize;

/// A listing in the property catalog.
///
/// `price_value` is the authoritative numeric price in whole rupees; the
/// display `price` string is independent and never parsed back.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub name: String,
    pub location: String,
    pub area: String,

    pub price: String,
    pub price_value: i64,

    pub image: String,
    pub description: String,

    pub features: Vec<String>,
    pub amenities: Vec<String>,

    pub bedrooms: u32,
    pub bathrooms: u32,

    #[serde(rename = "type")]
    pub property_type: String,
    pub year_built: i32,
    pub furnished: bool,
}
