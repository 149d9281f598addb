use super::wordfreq::WeightedWord;

/// Style buckets, in the order they are reported.
pub const CATEGORIES: [&str; 6] =
    ["Streetwear", "Formal", "Casual", "Athletic", "Vintage", "Sustainable"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryScores {
    pub categories: Vec<String>,
    pub popularity: Vec<u8>,
}

/// Scores each category by the summed weight of the words containing its name.
///
/// Matching is substring containment on lowercase text, so "streetwears" and
/// "informal" count toward Streetwear and Formal respectively.
pub fn score_categories(words: &[WeightedWord]) -> CategoryScores {
    let lowered: Vec<(String, f64)> =
        words.iter().map(|w| (w.word.to_lowercase(), w.weight)).collect();

    let popularity = CATEGORIES
        .iter()
        .map(|category| {
            let needle = category.to_lowercase();
            let total: f64 = lowered
                .iter()
                .filter(|(word, _)| word.contains(&needle))
                .map(|(_, weight)| weight * 100.0)
                .sum();
            // `as` truncates toward zero after clamping.
            total.clamp(0.0, 100.0) as u8
        })
        .collect();

    CategoryScores {
        categories: CATEGORIES.iter().map(|c| c.to_string()).collect(),
        popularity,
    }
}
