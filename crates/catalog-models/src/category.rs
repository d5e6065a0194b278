use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed set of listing categories offered by the catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Trending,
    IndonesianMovies,
    IndonesianDrama,
    Kdrama,
    ShortTv,
    Anime,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Trending,
        Category::IndonesianMovies,
        Category::IndonesianDrama,
        Category::Kdrama,
        Category::ShortTv,
        Category::Anime,
    ];

    /// Value of the `action` query parameter
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Trending => "trending",
            Category::IndonesianMovies => "indonesian-movies",
            Category::IndonesianDrama => "indonesian-drama",
            Category::Kdrama => "kdrama",
            Category::ShortTv => "short-tv",
            Category::Anime => "anime",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Trending => "Trending Now",
            Category::IndonesianMovies => "Indonesian Movies",
            Category::IndonesianDrama => "Indo Drama",
            Category::Kdrama => "K-Drama",
            Category::ShortTv => "Short TV",
            Category::Anime => "Anime",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Trending
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.slug() == wanted)
            .ok_or_else(|| {
                let valid: Vec<&str> = Category::ALL.iter().map(|c| c.slug()).collect();
                format!("Unknown category '{}'. Valid categories: {}", s, valid.join(", "))
            })
    }
}
