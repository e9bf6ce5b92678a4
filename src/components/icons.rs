//! Glyphs for the symbolic icon keys used by accounts and the dataset.

/// Glyph for an icon key; unknown keys get a neutral dot.
pub fn glyph(key: &str) -> &'static str {
    match key {
        "mail" => "✉",
        "music" => "♫",
        "video" | "tv" => "▶",
        "camera" => "◉",
        "cpu" => "⌬",
        "flask" => "⚗",
        "gamepad" => "✚",
        "palette" => "✎",
        "user" => "☺",
        _ => "•",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_account_icons_have_glyphs() {
        for account in doppel_core::AccountRegistry::seeded().iter() {
            assert_ne!(glyph(&account.icon), "•", "no glyph for {}", account.icon);
        }
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(glyph("hologram"), "•");
    }
}
