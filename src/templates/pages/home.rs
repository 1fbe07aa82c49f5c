// templates/pages/home.rs

use crate::templates::site_layout;
use maud::{html, Markup};

const EXAMPLE_PROMPTS: [&str; 4] = [
    "3BHK in South Delhi",
    "2bhk with pool under 90 lakh",
    "Furnished apartments in Saket",
    "Under 80 lakh in East Delhi",
];

pub fn home_page() -> Markup {
    site_layout(
        "Find your next home",
        html! {
            section class="hero" {
                h1 { "Find your next home with Ayra" }
                p class="hint" {
                    "Need help? Try \"Find a 3BHK under ₹1Cr in Delhi\""
                }

                form class="search-form" action="/search" method="get" {
                    input
                        type="text"
                        name="q"
                        placeholder="Search for properties, e.g. '3BHK in South Delhi'";
                    button type="submit" { "Search" }
                }

                div class="prompts" {
                    @for prompt in EXAMPLE_PROMPTS {
                        a href=(search_link(prompt)) { (prompt) }
                    }
                }
            }
        },
    )
}

fn search_link(query: &str) -> String {
    let encoded = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("q", query)
        .finish();
    format!("/search?{encoded}")
}
