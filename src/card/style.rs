//! Accent bar style derivation
//!
//! Maps a primary token id onto a design-token color reference. The result is
//! a plain value that renderers apply declaratively.

/// Highest `--ddd-primary-N` index the design system defines
pub const PALETTE_MAX: u8 = 25;

/// Token index the bar uses when no override resolves
pub const DEFAULT_ACCENT: u8 = 2;

/// CSS reference to a primary palette token. The token is escaped so the
/// reference stays a single custom property name whatever it contains.
pub fn token_var(token: &str) -> String {
    format!("var(--ddd-primary-{})", escape_ident(token))
}

/// Escape everything outside `[A-Za-z0-9_-]` as a CSS hex escape
fn escape_ident(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' => out.push(c),
            // NUL is not allowed in CSS, even escaped
            '\0' => out.push_str("\\fffd "),
            other => out.push_str(&format!("\\{:x} ", other as u32)),
        }
    }
    out
}

/// Parse a palette token id. Only canonical decimal ids ("0" to "25") count.
pub fn recognized_token(primary: &str) -> Option<u8> {
    // u8 parsing alone would accept "+1"
    if !primary.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if primary.len() > 1 && primary.starts_with('0') {
        return None;
    }
    primary.parse::<u8>().ok().filter(|index| *index <= PALETTE_MAX)
}

/// Every recognized token id
pub fn palette() -> impl Iterator<Item = String> {
    (0..=PALETTE_MAX).map(|index| index.to_string())
}

/// Inline style override for the accent bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarStyle {
    pub background_color: String,
}

impl BarStyle {
    pub fn to_inline(&self) -> String {
        format!("background-color: {};", self.background_color)
    }
}

/// Override for the given primary value, `None` when it is empty.
///
/// Unrecognized tokens still produce an override. The reference resolves to
/// nothing and the bar shows its default color.
pub fn accent_bar_style(primary: &str) -> Option<BarStyle> {
    if primary.is_empty() {
        return None;
    }
    Some(BarStyle {
        background_color: token_var(primary),
    })
}

/// Palette index the bar color actually resolves to
pub fn effective_accent(primary: &str) -> u8 {
    recognized_token(primary).unwrap_or(DEFAULT_ACCENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_palette_token_overrides() {
        for token in palette() {
            let style = accent_bar_style(&token).unwrap();
            assert_eq!(style.background_color, format!("var(--ddd-primary-{})", token));
            assert_eq!(effective_accent(&token).to_string(), token);
        }
    }

    #[test]
    fn test_empty_primary_has_no_override() {
        assert!(accent_bar_style("").is_none());
        assert_eq!(effective_accent(""), DEFAULT_ACCENT);
    }

    #[test]
    fn test_unrecognized_token_falls_back_silently() {
        let style = accent_bar_style("99").unwrap();
        assert_eq!(style.to_inline(), "background-color: var(--ddd-primary-99);");
        assert_eq!(effective_accent("99"), DEFAULT_ACCENT);
        assert_eq!(effective_accent("blue"), DEFAULT_ACCENT);
        assert_eq!(effective_accent("02"), DEFAULT_ACCENT);
    }

    #[test]
    fn test_token_cannot_break_out_of_reference() {
        let style = accent_bar_style("1); x").unwrap();
        assert_eq!(style.background_color, r"var(--ddd-primary-1\29 \3b \20 x)");

        let inline = accent_bar_style("1); display: none; --x: (").unwrap().to_inline();
        assert!(!inline.contains("display: none"));
        assert_eq!(inline.matches(';').count(), 1);
        assert!(inline.ends_with(");"));
        assert_eq!(effective_accent("1); display: none; --x: ("), DEFAULT_ACCENT);
    }

    #[test]
    fn test_token_escaping_covers_non_ascii_and_nul() {
        assert_eq!(token_var("é"), r"var(--ddd-primary-\e9 )");
        assert_eq!(token_var("a\0b"), r"var(--ddd-primary-a\fffd b)");
        assert_eq!(token_var("primary_2-x"), "var(--ddd-primary-primary_2-x)");
    }

    #[test]
    fn test_recognized_token_bounds() {
        assert_eq!(recognized_token("0"), Some(0));
        assert_eq!(recognized_token("25"), Some(25));
        assert_eq!(recognized_token("26"), None);
        assert_eq!(recognized_token("-1"), None);
        assert_eq!(recognized_token("+1"), None);
    }
}
