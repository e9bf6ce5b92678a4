//! The static mock dataset every dashboard view renders.
//!
//! Nothing here is computed from real accounts. The fixture ships inside the
//! crate (`fixtures/mock_dataset.json`) and is parsed once at start-up; the
//! views only ever read it.
//!
//! ```
//! use doppel_core::MockDataset;
//!
//! let data = MockDataset::seed().unwrap();
//! assert_eq!(data.mood.weekly.len(), 7);
//! assert!(data.social.node("alice").is_some());
//! ```

mod interests;
mod mood;
mod social;

pub use interests::{Cluster, Interests, Tag, TagSize, Theme};
pub use mood::{
    sentiment_percent, DayMood, MoodData, SentimentRow, TimeOfDay, TimelineEntry, WeekMood,
};
pub use social::{NodeKind, NodePosition, SelectedNode, SocialEdge, SocialGraph, SocialNode};

use serde::{Deserialize, Serialize};

use crate::chat::Sender;
use crate::error::{DoppelError, DoppelResult};

const EMBEDDED_FIXTURE: &str = include_str!("../../fixtures/mock_dataset.json");

/// Big Five personality scores, each in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BigFive {
    pub openness: u8,
    pub conscientiousness: u8,
    pub extraversion: u8,
    pub agreeableness: u8,
    pub neuroticism: u8,
}

impl BigFive {
    /// Named scores in conventional OCEAN order.
    pub fn entries(&self) -> [(&'static str, u8); 5] {
        [
            ("Openness", self.openness),
            ("Conscientiousness", self.conscientiousness),
            ("Extraversion", self.extraversion),
            ("Agreeableness", self.agreeableness),
            ("Neuroticism", self.neuroticism),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityTrait {
    pub name: String,
    pub score: u8,
    /// Accent colour key used by the trait bar
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityProfile {
    pub big_five: BigFive,
    pub summary: String,
    pub traits: Vec<PersonalityTrait>,
}

impl PersonalityProfile {
    /// Traits sorted by descending score.
    pub fn strongest_traits(&self) -> Vec<&PersonalityTrait> {
        let mut traits: Vec<&PersonalityTrait> = self.traits.iter().collect();
        traits.sort_by(|a, b| b.score.cmp(&a.score));
        traits
    }
}

/// Headline metric with a qualitative label and a trend string like `+8%`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub value: u8,
    pub label: String,
    pub trend: String,
}

/// Top item in some category with its count (videos watched, plays...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranked {
    pub value: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlights {
    pub mood_today: Metric,
    pub top_category: Ranked,
    pub top_artist: Ranked,
    pub energy_level: Metric,
    pub summary: String,
}

/// One line of the seed chat transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedMessage {
    pub sender: Sender,
    pub body: String,
    /// How long before session start the message is dated
    pub seconds_ago: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSeed {
    pub transcript: Vec<SeedMessage>,
    /// Canned replies the twin picks from
    pub responses: Vec<String>,
    pub style_markers: Vec<String>,
}

/// Everything the dashboard renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MockDataset {
    pub personality: PersonalityProfile,
    pub mood: MoodData,
    pub interests: Interests,
    pub social: SocialGraph,
    pub highlights: Highlights,
    pub chat: ChatSeed,
}

impl MockDataset {
    /// Parse and validate the fixture embedded in the crate.
    pub fn seed() -> DoppelResult<Self> {
        Self::from_json(EMBEDDED_FIXTURE)
    }

    /// Parse and validate a dataset from JSON text.
    pub fn from_json(json: &str) -> DoppelResult<Self> {
        let dataset: MockDataset = serde_json::from_str(json)?;
        dataset.validate()?;
        tracing::debug!(
            nodes = dataset.social.nodes.len(),
            edges = dataset.social.edges.len(),
            tags = dataset.interests.tag_cloud.len(),
            "Mock dataset loaded"
        );
        Ok(dataset)
    }

    /// Check the invariants the views rely on.
    pub fn validate(&self) -> DoppelResult<()> {
        for (name, score) in self.personality.big_five.entries() {
            check_percent(name, score)?;
        }
        for t in &self.personality.traits {
            check_percent(&t.name, t.score)?;
        }
        for day in &self.mood.weekly {
            check_percent(&format!("{} mood", day.day), day.mood)?;
            check_percent(&format!("{} energy", day.day), day.energy)?;
            check_percent(&format!("{} stress", day.day), day.stress)?;
        }
        for row in &self.mood.sentiment {
            for tod in TimeOfDay::ALL {
                let value = row.get(tod);
                if !(0.0..=1.0).contains(&value) {
                    return Err(invalid(format!(
                        "sentiment {} {} is {}, expected 0..=1",
                        row.day,
                        tod.label(),
                        value
                    )));
                }
            }
        }
        for theme in &self.interests.top_themes {
            check_percent(&theme.name, theme.score)?;
        }
        for tag in &self.interests.tag_cloud {
            check_percent(&tag.text, tag.value)?;
        }
        self.social.validate()?;
        if self.chat.responses.is_empty() {
            return Err(invalid("chat needs at least one canned response"));
        }
        Ok(())
    }
}

fn check_percent(name: &str, value: u8) -> DoppelResult<()> {
    if value > 100 {
        return Err(invalid(format!("{} score is {}, expected 0..=100", name, value)));
    }
    Ok(())
}

pub(crate) fn invalid(message: impl Into<String>) -> DoppelError {
    DoppelError::InvalidDataset(message.into())
}
