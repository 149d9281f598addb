use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

/// A seasonal palette; `colors[i]` has popularity `popularity[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTrend {
    pub colors: Vec<String>,
    pub popularity: Vec<u8>,
}

/// Maps a calendar month (1-12) to its season. Anything outside spring to fall is winter.
pub fn season_for(month: u32) -> Season {
    match month {
        3..=5 => Season::Spring,
        6..=8 => Season::Summer,
        9..=11 => Season::Fall,
        _ => Season::Winter,
    }
}

pub fn colors_for(season: Season) -> ColorTrend {
    let (colors, popularity): ([&str; 5], [u8; 5]) = match season {
        Season::Spring => (
            ["#FF9ECD", "#87CEEB", "#98FB98", "#DDA0DD", "#F0E68C"],
            [92, 88, 85, 80, 75],
        ),
        Season::Summer => (
            ["#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEEAD"],
            [90, 85, 80, 75, 70],
        ),
        Season::Fall => (
            ["#8B4513", "#DAA520", "#CD853F", "#D2691E", "#B8860B"],
            [88, 85, 82, 78, 75],
        ),
        Season::Winter => (
            ["#483D8B", "#2F4F4F", "#800000", "#4B0082", "#000080"],
            [90, 85, 80, 75, 70],
        ),
    };

    ColorTrend {
        colors: colors.iter().map(|c| c.to_string()).collect(),
        popularity: popularity.to_vec(),
    }
}

/// Palette for today's date on the local clock.
pub fn current_colors() -> ColorTrend {
    colors_for(season_for(Local::now().month()))
}
