use serde::{Deserialize, Serialize};

/// Image reference used when a provider article carries no image of its own.
pub const PLACEHOLDER_IMAGE: &str = "assets/no-img.png";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image: String,
    #[serde(rename = "publishedAt", default)]
    pub published_at: String,
    #[serde(default)]
    pub source: Source,
}

impl Article {
    pub fn new(url: String, title: String) -> Self {
        Self {
            url,
            title,
            description: String::new(),
            content: String::new(),
            image: String::new(),
            published_at: String::new(),
            source: Source::default(),
        }
    }

    pub fn with_image(mut self, image: String) -> Self {
        self.image = image;
        self
    }

    pub fn with_published(mut self, published_at: String) -> Self {
        self.published_at = published_at;
        self
    }

    /// Assign the placeholder image when the provider supplied none.
    /// Runs once at ingestion, before the article is cached or published.
    pub fn normalize_image(&mut self) {
        if self.image.trim().is_empty() {
            self.image = PLACEHOLDER_IMAGE.to_string();
        }
    }
}
