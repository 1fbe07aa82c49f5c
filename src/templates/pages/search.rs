// templates/pages/search.rs

use crate::assistant::replies;
use crate::catalog::Property;
use crate::templates::{property_card, site_layout};
use maud::{html, Markup};

pub fn search_page(query: &str, results: &[&Property]) -> Markup {
    let noun = if results.len() == 1 {
        "property"
    } else {
        "properties"
    };

    site_layout(
        "Search",
        html! {
            form class="search-form" action="/search" method="get" {
                input
                    type="text"
                    name="q"
                    value=(query)
                    placeholder="Search for properties, e.g. '3BHK in South Delhi'";
                button type="submit" { "Search" }
            }

            div class="results-header" {
                h2 { (results.len()) " " (noun) " found" }
                @if !query.trim().is_empty() {
                    p { "for \"" (query) "\"" }
                }
            }

            @if results.is_empty() && !query.trim().is_empty() {
                p { (replies::search_no_matches_reply(query)) }
            } @else if !query.trim().is_empty() {
                p { (replies::search_match_count_reply(results.len(), query)) }
            }

            @for property in results {
                (property_card(property))
            }

            div class="prompts" {
                a href="/chat" { "Need more help? Chat with Ayra" }
            }
        },
    )
}
