use std::collections::HashMap;

use super::TrendingItem;

/// Items reported per snapshot.
pub const MAX_ITEMS: usize = 5;

/// Tokens this short or shorter never trend.
const MIN_TOKEN_CHARS: usize = 3;

/// Picks the most repeated headline tokens.
///
/// Headlines are lowercased and split on whitespace only, so "wide-leg" stays one
/// token. Each item scores ten points per occurrence, capped at 100.
pub fn score_headlines(headings: &[String]) -> Vec<TrendingItem> {
    let mut counts: HashMap<String, u32> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for heading in headings {
        for token in heading.to_lowercase().split_whitespace() {
            if token.chars().count() <= MIN_TOKEN_CHARS { continue; }

            let count = counts.entry(token.to_string()).or_insert(0);
            if *count == 0 { order.push(token.to_string()); }
            *count += 1;
        }
    }

    let mut ranked: Vec<(String, u32)> = order
        .into_iter()
        .map(|token| {
            let count = counts[&token];
            (token, count)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(MAX_ITEMS)
        .map(|(token, count)| TrendingItem {
            name: title_case(&token),
            trend_score: count.saturating_mul(10).min(100) as u8,
        })
        .collect()
}

fn title_case(token: &str) -> String {
    token
        .split_whitespace()
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
