// templates/pages/chat.rs

use crate::assistant::{AssistantReply, Role};
use crate::templates::{chat_bubble, market_trends_widget, property_card, site_layout};
use maud::{html, Markup};

const STARTER_PROMPTS: [&str; 4] = [
    "Show me 2BHK apartments in Delhi",
    "What are the market trends for Delhi?",
    "Help me calculate my home loan EMI",
    "Properties near metro stations",
];

/// Chat page. Without a turn it shows the empty state with starter prompts;
/// with one it shows the user message, the reply, and whatever the reply
/// brought along (matched listings, the trends widget).
pub fn chat_page(turn: Option<(&str, &AssistantReply<'_>)>) -> Markup {
    site_layout(
        "Chat with Ayra",
        html! {
            @match turn {
                None => {
                    section class="hero" {
                        h2 { "How can I help you today?" }
                        p class="hint" {
                            "Ask me about properties in Delhi, like \"Show me 2BHK apartments\" "
                            "or \"Properties under 1 Cr in South Delhi\""
                        }
                        div class="prompts" {
                            @for prompt in STARTER_PROMPTS {
                                a href=(chat_link(prompt)) { (prompt) }
                            }
                        }
                    }
                }
                Some((message, reply)) => {
                    div class="chat-log" {
                        (chat_bubble(Role::User, message))
                        (chat_bubble(Role::Assistant, &reply.content))
                    }

                    @if reply.show_market_trends {
                        (market_trends_widget())
                    }

                    @for property in &reply.matches {
                        (property_card(property))
                    }
                }
            }

            form class="search-form" action="/chat" method="get" {
                input type="text" name="message" placeholder="Type your message...";
                button type="submit" { "Send" }
            }
        },
    )
}

fn chat_link(message: &str) -> String {
    let encoded = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("message", message)
        .finish();
    format!("/chat?{encoded}")
}
