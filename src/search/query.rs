// src/search/query.rs

use crate::search::vocabulary::Vocabulary;
use regex::Regex;
use std::sync::OnceLock;

/// Bedroom-count pattern: "2bhk", "3 BHK" (query is lowercased first).
fn bhk_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)\s*bhk").unwrap())
}

/// Price pattern: "1.5 cr", "45 lakh", "2crore".
fn price_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+(\.\d+)?)\s*(cr|crore|lakh)").unwrap())
}

const LAKH: f64 = 100_000.0;
const CRORE: f64 = 10_000_000.0;

/// Structured constraints extracted from one free-text query.
///
/// Each field is independent; a field left at its "not detected" state
/// imposes no restriction when filtering. Extraction never fails: anything
/// unrecognizable simply does not become a constraint.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Constraints {
    /// Required bedroom count, from the first BHK mention.
    pub bedrooms: Option<u32>,
    /// Known location tokens found in the query.
    pub locations: Vec<String>,
    /// Price ceiling in rupees. Only set when both an "under" cue and a
    /// parseable amount+unit are present.
    pub max_price: Option<f64>,
    /// Known feature keywords found in the query. Always empty when feature
    /// matching is disabled (the compact search-bar variant).
    pub features: Vec<String>,
}

impl Constraints {
    pub fn parse(query: &str, vocab: &Vocabulary, match_features: bool) -> Self {
        let q = query.to_lowercase();

        let bedrooms = bhk_regex()
            .captures(&q)
            .and_then(|caps| caps[1].parse::<u32>().ok());

        let locations: Vec<String> = vocab
            .locations()
            .iter()
            .filter(|loc| q.contains(loc.as_str()))
            .cloned()
            .collect();

        // The cue word alone has no effect, and neither does an amount
        // without the cue. That looseness is part of the contract.
        let under_cue = q.contains("under") || q.contains("less than");
        let max_price = if under_cue { parse_price_ceiling(&q) } else { None };

        let features: Vec<String> = if match_features {
            vocab
                .feature_keywords()
                .iter()
                .filter(|kw| q.contains(kw.as_str()))
                .cloned()
                .collect()
        } else {
            Vec::new()
        };

        Self {
            bedrooms,
            locations,
            max_price,
            features,
        }
    }

    /// True when the query triggered no constraint category at all.
    pub fn is_empty(&self) -> bool {
        self.bedrooms.is_none()
            && self.locations.is_empty()
            && self.max_price.is_none()
            && self.features.is_empty()
    }
}

fn parse_price_ceiling(q: &str) -> Option<f64> {
    let caps = price_regex().captures(q)?;
    let amount: f64 = caps[1].parse().ok()?;

    match &caps[3] {
        "cr" | "crore" => Some(amount * CRORE),
        "lakh" => Some(amount * LAKH),
        _ => None,
    }
}
