//! Mood, energy and sentiment series.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayMood {
    pub day: String,
    pub mood: u8,
    pub energy: u8,
    pub stress: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekMood {
    pub week: String,
    pub mood: u8,
    pub energy: u8,
}

/// Part of the day a sentiment cell covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 3] = [TimeOfDay::Morning, TimeOfDay::Afternoon, TimeOfDay::Evening];

    pub fn label(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
        }
    }
}

/// Sentiment for one day, each cell in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentRow {
    pub day: String,
    pub morning: f64,
    pub afternoon: f64,
    pub evening: f64,
}

impl SentimentRow {
    pub fn get(&self, tod: TimeOfDay) -> f64 {
        match tod {
            TimeOfDay::Morning => self.morning,
            TimeOfDay::Afternoon => self.afternoon,
            TimeOfDay::Evening => self.evening,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Relative time label, e.g. "2 hours ago"
    pub time: String,
    pub event: String,
    pub mood: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodData {
    pub weekly: Vec<DayMood>,
    pub monthly: Vec<WeekMood>,
    pub sentiment: Vec<SentimentRow>,
    pub timeline: Vec<TimelineEntry>,
}

impl MoodData {
    /// Mean of the weekly mood series, 0 when empty.
    pub fn average_mood(&self) -> f64 {
        mean(self.weekly.iter().map(|d| d.mood))
    }

    pub fn average_energy(&self) -> f64 {
        mean(self.weekly.iter().map(|d| d.energy))
    }

    pub fn average_stress(&self) -> f64 {
        mean(self.weekly.iter().map(|d| d.stress))
    }

    /// Day with the highest mood; the first one wins ties.
    pub fn peak_day(&self) -> Option<&DayMood> {
        self.weekly
            .iter()
            .fold(None, |best: Option<&DayMood>, day| match best {
                Some(b) if b.mood >= day.mood => Some(b),
                _ => Some(day),
            })
    }

    pub fn sentiment_at(&self, day: &str, tod: TimeOfDay) -> Option<f64> {
        self.sentiment
            .iter()
            .find(|row| row.day == day)
            .map(|row| row.get(tod))
    }
}

/// Sentiment as a whole percentage for heatmap labels.
pub fn sentiment_percent(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 100.0).round() as u8
}

fn mean(values: impl Iterator<Item = u8>) -> f64 {
    let (sum, count) = values.fold((0u32, 0u32), |(s, c), v| (s + v as u32, c + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockDataset;

    #[test]
    fn test_averages() {
        let mood = MockDataset::seed().unwrap().mood;
        // 72 + 68 + 75 + 82 + 88 + 90 + 78 = 553
        assert!((mood.average_mood() - 553.0 / 7.0).abs() < 1e-9);
        assert!(mood.average_stress() < mood.average_energy());
    }

    #[test]
    fn test_peak_day() {
        let mood = MockDataset::seed().unwrap().mood;
        assert_eq!(mood.peak_day().unwrap().day, "Sat");
    }

    #[test]
    fn test_sentiment_lookup() {
        let mood = MockDataset::seed().unwrap().mood;
        assert_eq!(mood.sentiment_at("Fri", TimeOfDay::Evening), Some(0.85));
        assert_eq!(mood.sentiment_at("Someday", TimeOfDay::Morning), None);
    }

    #[test]
    fn test_sentiment_percent() {
        assert_eq!(sentiment_percent(0.85), 85);
        assert_eq!(sentiment_percent(0.0), 0);
        assert_eq!(sentiment_percent(1.2), 100);
    }

    #[test]
    fn test_empty_series() {
        let mood = MoodData {
            weekly: vec![],
            monthly: vec![],
            sentiment: vec![],
            timeline: vec![],
        };
        assert_eq!(mood.average_mood(), 0.0);
        assert!(mood.peak_day().is_none());
    }
}
