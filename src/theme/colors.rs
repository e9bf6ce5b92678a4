//! Colour constants shared by inline SVG charts.
//!
//! The stylesheet carries the same values as CSS custom properties; charts
//! draw SVG strokes and fills directly, so they read them from here.

// === CHART CHROME ===
pub const GRID_LINE: &str = "rgba(148, 163, 184, 0.15)";

// === ACCENTS ===
pub const VIOLET: &str = "#8b5cf6";
pub const CYAN: &str = "#22d3ee";
pub const PINK: &str = "#ec4899";
pub const BLUE: &str = "#3b82f6";
pub const AMBER: &str = "#f59e0b";
pub const EMERALD: &str = "#34d399";

// === TEXT ===
pub const TEXT_MUTED: &str = "rgba(226, 232, 240, 0.55)";

/// Accent for a trait's colour key from the dataset.
pub fn accent(key: &str) -> &'static str {
    match key {
        "cyan" => CYAN,
        "pink" => PINK,
        "blue" => BLUE,
        _ => VIOLET,
    }
}

/// Heatmap cell colour for a sentiment in `[0, 1]`.
pub fn sentiment_fill(value: f64) -> String {
    let alpha = 0.15 + value.clamp(0.0, 1.0) * 0.85;
    format!("rgba(34, 211, 238, {:.2})", alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_fallback() {
        assert_eq!(accent("cyan"), CYAN);
        assert_eq!(accent("blue"), BLUE);
        assert_eq!(accent("purple"), VIOLET);
        assert_eq!(accent(""), VIOLET);
    }

    #[test]
    fn test_sentiment_fill_range() {
        assert_eq!(sentiment_fill(0.0), "rgba(34, 211, 238, 0.15)");
        assert_eq!(sentiment_fill(1.0), "rgba(34, 211, 238, 1.00)");
        assert_eq!(sentiment_fill(7.0), sentiment_fill(1.0));
    }
}
