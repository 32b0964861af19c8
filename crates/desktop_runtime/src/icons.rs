//! Icon glyph lookup for dock items, desktop icons, and mobile list entries.
//!
//! Glyphs are derived from the app id alone so registry documents never carry presentation data.

use crate::model::AppId;

/// Glyph used for ids without a dedicated entry.
pub const DEFAULT_GLYPH: &str = "📁";

const GLYPHS: &[(&str, &str)] = &[
    ("about", "👤"),
    ("contact", "✉️"),
    ("education", "🎓"),
    ("experience", "💼"),
    ("projects", "🗂️"),
    ("publications", "📚"),
    ("research", "🔬"),
    ("resume", "📄"),
    ("skills", "🛠️"),
    ("terminal", "🖥️"),
];

pub fn glyph_for(app_id: &AppId) -> &'static str {
    GLYPHS
        .iter()
        .find(|(id, _)| *id == app_id.as_str())
        .map(|(_, glyph)| *glyph)
        .unwrap_or(DEFAULT_GLYPH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_map_to_dedicated_glyphs() {
        assert_eq!(glyph_for(&AppId::from("research")), "🔬");
        assert_eq!(glyph_for(&AppId::from("about")), "👤");
    }

    #[test]
    fn unknown_ids_fall_back_to_default() {
        assert_eq!(glyph_for(&AppId::from("guestbook")), DEFAULT_GLYPH);
        assert_eq!(glyph_for(&AppId::from("About")), DEFAULT_GLYPH);
    }
}
