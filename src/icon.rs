// SPDX-FileCopyrightText: The linkfolio authors
// SPDX-License-Identifier: MPL-2.0

//! Icon resolution

use std::collections::HashMap;

use once_cell::sync::OnceCell;

/// Glyph returned for absent and unknown icon tokens.
pub const DEFAULT_GLYPH: &str = "🔗";

// Tokens longer than this are never treated as literal glyph input.
const MAX_LITERAL_GLYPH_CHARS: usize = 3;

/// Check if the character falls into one of the pictographic blocks
/// recognized for literal glyph input.
///
/// Regional indicators are outside these blocks, so flag sequences fall
/// through to the token lookup.
#[must_use]
pub const fn is_pictographic(ch: char) -> bool {
    matches!(ch as u32,
        0x2600..=0x27BF         // miscellaneous symbols and dingbats
        | 0x1F300..=0x1F5FF     // symbols and pictographs
        | 0x1F600..=0x1F64F     // emoticons
        | 0x1F680..=0x1F6FF     // transport and map symbols
        | 0x1F900..=0x1FAFF     // supplemental symbols and pictographs
    )
}

/// Check if the token is direct glyph input rather than a symbolic name.
#[must_use]
pub fn is_literal_glyph(token: &str) -> bool {
    token.chars().count() <= MAX_LITERAL_GLYPH_CHARS && token.chars().any(is_pictographic)
}

static TOKEN_MAP: OnceCell<HashMap<&'static str, &'static str>> = OnceCell::new();

fn token_map() -> &'static HashMap<&'static str, &'static str> {
    TOKEN_MAP.get_or_init(|| {
        HashMap::from([
            ("github", "🐙"),
            ("gitlab", "🦊"),
            ("linkedin", "💼"),
            ("twitter", "🐦"),
            ("x", "🐦"),
            ("mastodon", "🐘"),
            ("facebook", "📘"),
            ("instagram", "📷"),
            ("youtube", "📺"),
            ("twitch", "🎮"),
            ("tiktok", "🎬"),
            ("discord", "🎧"),
            ("slack", "💬"),
            ("telegram", "✈️"),
            ("whatsapp", "📱"),
            ("email", "✉️"),
            ("mail", "✉️"),
            ("phone", "📞"),
            ("website", "🌐"),
            ("web", "🌐"),
            ("blog", "✍️"),
            ("rss", "📡"),
            ("podcast", "🎙️"),
            ("spotify", "🎵"),
            ("music", "🎵"),
            ("calendar", "📅"),
            ("resume", "📄"),
            ("cv", "📄"),
            ("store", "🛍️"),
            ("donate", "💖"),
        ])
    })
}

/// Resolve an optional icon token to a glyph.
///
/// An absent token yields [`DEFAULT_GLYPH`]. Tokens of at most 3 characters
/// containing a pictographic character are returned unchanged (literal
/// glyph passthrough). Everything else is trimmed, lowercased and looked up
/// in the static token map; unknown tokens yield [`DEFAULT_GLYPH`].
///
/// Total and deterministic: every input yields exactly one glyph.
#[must_use]
pub fn resolve(token: Option<&str>) -> &str {
    let Some(token) = token else {
        return DEFAULT_GLYPH;
    };
    if is_literal_glyph(token) {
        return token;
    }
    let normalized = token.trim().to_lowercase();
    token_map()
        .get(normalized.as_str())
        .copied()
        .unwrap_or(DEFAULT_GLYPH)
}
