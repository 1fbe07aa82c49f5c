// src/assistant/replies.rs
//
// Canned assistant copy. Replies are fixed template strings picked by simple
// keyword cues; there is no language model behind any of this.

/// Cues that route a message to the market-trends reply instead of a search
/// summary.
const MARKET_CUES: [&str; 4] = ["market", "trend", "forecast", "price"];

pub const MARKET_TRENDS_REPLY: &str = "Here are the latest market trends for Delhi NCR. \
    Prices have increased by 8.2% year-over-year, with South Delhi showing the strongest \
    growth at 12.3%. The forecast indicates continued appreciation over the next 6 months.";

pub const NO_MATCHES_REPLY: &str = "I couldn't find any properties matching your criteria. \
    Could you try a different search or be more specific?";

pub fn match_count_reply(count: usize) -> String {
    format!("I found {count} properties that match your criteria:")
}

/// Variants used by the inline search widget, which echoes the query back.
pub fn search_no_matches_reply(query: &str) -> String {
    format!("I couldn't find any properties matching \"{query}\". Would you like to try a different search?")
}

pub fn search_match_count_reply(count: usize, query: &str) -> String {
    format!("I found {count} properties matching \"{query}\". Here are the results:")
}

pub fn is_market_query(message: &str) -> bool {
    let m = message.to_lowercase();
    MARKET_CUES.iter().any(|cue| m.contains(cue))
}
