use crate::catalog::Property;
use maud::{html, Markup};

/// Listing card used on the search results and chat pages.
pub fn property_card(property: &Property) -> Markup {
    html! {
        article class="property-card" {
            img src=(property.image) alt=(property.name);
            div class="property-body" {
                h3 { (property.name) }
                span class="price" { (property.price) }
                p class="location" { (property.location) }
                p class="specs" {
                    (property.bedrooms) " Bed | "
                    (property.bathrooms) " Bath | "
                    (property.area) " | "
                    (property.property_type)
                    " | Built " (property.year_built)
                }
                div class="tags" {
                    @for feature in property.features.iter().take(3) {
                        span { (feature) }
                    }
                    @if property.furnished {
                        span { "Furnished" }
                    }
                }
            }
        }
    }
}
