use serde::{Deserialize, Serialize};

/// News categories supported by the provider's top-headlines endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    General,
    World,
    Business,
    Technology,
    Entertainment,
    Sports,
    Science,
    Health,
    Nation,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::General,
        Category::World,
        Category::Business,
        Category::Technology,
        Category::Entertainment,
        Category::Sports,
        Category::Science,
        Category::Health,
        Category::Nation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::World => "world",
            Category::Business => "business",
            Category::Technology => "technology",
            Category::Entertainment => "entertainment",
            Category::Sports => "sports",
            Category::Science => "science",
            Category::Health => "health",
            Category::Nation => "nation",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::General
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "general" => Ok(Category::General),
            "world" => Ok(Category::World),
            "business" => Ok(Category::Business),
            "technology" => Ok(Category::Technology),
            "entertainment" => Ok(Category::Entertainment),
            "sports" => Ok(Category::Sports),
            "science" => Ok(Category::Science),
            "health" => Ok(Category::Health),
            "nation" => Ok(Category::Nation),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
