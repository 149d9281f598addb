//! Word-cloud style frequency weighting.

use std::collections::HashMap;

/// Most words a summary keeps.
pub const MAX_WORDS: usize = 200;

const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "else",
    "ever", "few", "for", "from", "further", "get", "had", "has", "have", "having", "he", "her",
    "here", "hers", "herself", "him", "himself", "his", "how", "however", "i", "if", "in",
    "into", "is", "it", "its", "itself", "just", "like", "me", "more", "most", "my", "myself",
    "no", "nor", "not", "of", "off", "on", "once", "only", "or", "other", "otherwise", "ought",
    "our", "ours", "ourselves", "out", "over", "own", "same", "shall", "she", "should", "since",
    "so", "some", "such", "than", "that", "the", "their", "theirs", "them", "themselves",
    "then", "there", "these", "they", "this", "those", "through", "to", "too", "under",
    "until", "up", "very", "was", "we", "were", "what", "when", "where", "which", "while",
    "who", "whom", "why", "with", "would", "you", "your", "yours", "yourself", "yourselves",
];

/// A word and its weight relative to the most frequent word.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedWord {
    pub word: String,
    pub weight: f64,
}

/// Ranks the words of `text`, heaviest first.
///
/// The most frequent word weighs 1.0 and every other word is scaled by its count
/// against that one. Equal counts keep the order in which the words first appeared.
pub fn summarize(text: &str) -> Vec<WeightedWord> {
    let mut counts: HashMap<String, u32> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for token in tokenize(text) {
        let count = counts.entry(token.clone()).or_insert(0);
        if *count == 0 { order.push(token); }
        *count += 1;
    }

    fold_plurals(&mut counts, &mut order);

    let mut ranked: Vec<(String, u32)> = order
        .into_iter()
        .map(|word| {
            let count = counts[&word];
            (word, count)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(MAX_WORDS);

    let Some(max) = ranked.first().map(|(_, count)| *count as f64) else {
        return Vec::new();
    };

    ranked
        .into_iter()
        .map(|(word, count)| WeightedWord { word, weight: count as f64 / max })
        .collect()
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|raw| raw.trim_start_matches('\'').to_lowercase())
        .map(|word| {
            let word = word.strip_suffix("'s").unwrap_or(word.as_str()).trim_end_matches('\'');
            word.to_string()
        })
        .filter(|word| word.chars().count() >= 2)
        .filter(|word| !word.chars().all(|c| c.is_numeric()))
        .filter(|word| !STOPWORDS.contains(&word.as_str()))
}

/// Merges "blazers" into "blazer" when both were seen.
fn fold_plurals(counts: &mut HashMap<String, u32>, order: &mut Vec<String>) {
    let plurals: Vec<(String, String)> = order
        .iter()
        .filter_map(|word| {
            let singular = word.strip_suffix('s')?;
            if singular.ends_with('s') || !counts.contains_key(singular) {
                return None;
            }
            Some((word.clone(), singular.to_string()))
        })
        .collect();

    for (plural, singular) in plurals {
        if let Some(count) = counts.remove(&plural) {
            *counts.entry(singular).or_insert(0) += count;
        }
    }

    order.retain(|word| counts.contains_key(word));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(summary: &[WeightedWord]) -> Vec<&str> {
        summary.iter().map(|w| w.word.as_str()).collect()
    }

    #[test]
    fn empty_text_gives_empty_summary() {
        assert!(summarize("").is_empty());
        assert!(summarize("   \n\t").is_empty());
    }

    #[test]
    fn most_frequent_word_weighs_one() {
        let summary = summarize("Denim denim DENIM linen linen silk");

        assert_eq!(words(&summary), vec!["denim", "linen", "silk"]);
        assert_eq!(summary[0].weight, 1.0);
        assert!((summary[1].weight - 2.0 / 3.0).abs() < 1e-9);
        assert!((summary[2].weight - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let summary = summarize("velvet tweed satin");
        assert_eq!(words(&summary), vec!["velvet", "tweed", "satin"]);
    }

    #[test]
    fn stopwords_numbers_and_single_letters_are_dropped() {
        let summary = summarize("The 2024 collection is a hit and x marks it");
        assert_eq!(words(&summary), vec!["collection", "hit", "marks"]);
    }

    #[test]
    fn possessives_and_plurals_fold_together() {
        let summary = summarize("Vogue's blazer, blazers and more blazers");

        assert_eq!(words(&summary), vec!["blazer", "vogue"]);
        assert_eq!(summary[0].weight, 1.0);
        assert_eq!(summary[1].weight, 1.0 / 3.0);
    }

    #[test]
    fn summary_is_capped() {
        let text: String = (0..(MAX_WORDS + 50)).map(|i| format!("word{} ", i)).collect();
        assert_eq!(summarize(&text).len(), MAX_WORDS);
    }
}
