//! Topic interests: ranked themes, a weighted tag cloud and named clusters.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub score: u8,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub text: String,
    /// Weight in `[0, 100]`
    pub value: u8,
}

impl Tag {
    pub fn size(&self) -> TagSize {
        TagSize::from_value(self.value)
    }

    /// Opacity used when drawing the tag, proportional to its weight.
    pub fn opacity(&self) -> f64 {
        f64::from(self.value.min(100)) / 100.0
    }
}

/// Display tier of a tag in the cloud
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TagSize {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl TagSize {
    pub fn from_value(value: u8) -> Self {
        match value {
            v if v > 85 => TagSize::ExtraLarge,
            v if v > 70 => TagSize::Large,
            v if v > 55 => TagSize::Medium,
            _ => TagSize::Small,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            TagSize::Small => "tag-sm",
            TagSize::Medium => "tag-md",
            TagSize::Large => "tag-lg",
            TagSize::ExtraLarge => "tag-xl",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub name: String,
    pub items: Vec<String>,
    /// Relative bubble size
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interests {
    pub top_themes: Vec<Theme>,
    pub tag_cloud: Vec<Tag>,
    pub clusters: Vec<Cluster>,
    pub summary: String,
}

impl Interests {
    /// Highest-scoring theme; the first one wins ties.
    pub fn top_theme(&self) -> Option<&Theme> {
        self.top_themes
            .iter()
            .fold(None, |best: Option<&Theme>, theme| match best {
                Some(b) if b.score >= theme.score => Some(b),
                _ => Some(theme),
            })
    }

    /// Tags ordered by weight, heaviest first.
    pub fn tags_by_weight(&self) -> Vec<&Tag> {
        let mut tags: Vec<&Tag> = self.tag_cloud.iter().collect();
        tags.sort_by(|a, b| b.value.cmp(&a.value));
        tags
    }

    /// Cluster listing an item, if any.
    pub fn cluster_for(&self, item: &str) -> Option<&Cluster> {
        self.clusters
            .iter()
            .find(|c| c.items.iter().any(|i| i == item))
    }
}
