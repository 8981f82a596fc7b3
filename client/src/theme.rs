//! Design tokens: palette, type scale, and the CSS custom properties that
//! expose them to the stylesheet.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

pub mod colors {
    pub const BLACK: &str = "#171717";
    pub const RED: &str = "#B3232E";
    pub const WHITE: &str = "#FFFFFF";
    pub const LIGHT: &str = "#EFEFEF";
    pub const MEDIUM: &str = "#CACACA";

    pub const RED_HOVER: &str = "#9A1F28";
    pub const RED_ACTIVE: &str = "#821B23";
    pub const BLACK_HOVER: &str = "#2A2A2A";
    pub const BLACK_ACTIVE: &str = "#3D3D3D";

    pub const SUCCESS: &str = "#22C55E";
    pub const WARNING: &str = "#F59E0B";
    pub const ERROR: &str = "#EF4444";
    pub const INFO: &str = "#3B82F6";
}

pub mod fonts {
    /// Display face for headings.
    pub const PRIMARY: &str = "Coanda";
    /// Body face.
    pub const SECONDARY: &str = "Poppins";
    pub const FALLBACK: &str = "Arial, sans-serif";
}

pub const FONT_WEIGHTS: &[(&str, u16)] = &[
    ("light", 300),
    ("regular", 400),
    ("medium", 500),
    ("semibold", 600),
    ("bold", 700),
    ("extrabold", 800),
    ("black", 900),
];

pub const FONT_SIZES: &[(&str, &str)] = &[
    ("xs", "0.75rem"),
    ("sm", "0.875rem"),
    ("base", "1rem"),
    ("lg", "1.125rem"),
    ("xl", "1.25rem"),
    ("2xl", "1.5rem"),
    ("3xl", "1.875rem"),
    ("4xl", "2.25rem"),
    ("5xl", "3rem"),
    ("6xl", "3.75rem"),
    ("7xl", "4.5rem"),
    ("8xl", "6rem"),
    ("9xl", "8rem"),
];

pub const LINE_HEIGHTS: &[(&str, &str)] = &[
    ("none", "1"),
    ("tight", "1.25"),
    ("snug", "1.375"),
    ("normal", "1.5"),
    ("relaxed", "1.625"),
    ("loose", "2"),
];

pub const LETTER_SPACING: &[(&str, &str)] = &[
    ("tighter", "-0.05em"),
    ("tight", "-0.025em"),
    ("normal", "0em"),
    ("wide", "0.025em"),
    ("wider", "0.05em"),
    ("widest", "0.1em"),
];

/// Custom properties set on `<html>` and read by `style/musea.css`.
pub const CSS_VARIABLES: &[(&str, &str)] = &[
    ("--color-primary-black", colors::BLACK),
    ("--color-primary-red", colors::RED),
    ("--color-primary-white", colors::WHITE),
    ("--color-neutral-light", colors::LIGHT),
    ("--color-neutral-medium", colors::MEDIUM),
    ("--color-text-primary", colors::BLACK),
    ("--color-text-secondary", colors::MEDIUM),
    ("--color-text-inverse", colors::WHITE),
    ("--color-text-accent", colors::RED),
    ("--color-interactive-primary", colors::RED),
    ("--color-interactive-primary-hover", colors::RED_HOVER),
    ("--color-interactive-primary-active", colors::RED_ACTIVE),
    ("--color-interactive-secondary", colors::BLACK),
    ("--color-interactive-secondary-hover", colors::BLACK_HOVER),
    ("--color-interactive-secondary-active", colors::BLACK_ACTIVE),
    ("--color-status-error", colors::ERROR),
    ("--color-status-success", colors::SUCCESS),
    ("--color-status-warning", colors::WARNING),
    ("--color-status-info", colors::INFO),
    ("--font-coanda", fonts::PRIMARY),
    ("--font-poppins", fonts::SECONDARY),
    ("--font-fallback", fonts::FALLBACK),
];

/// Inline `style` value for `<html>`: every entry of [`CSS_VARIABLES`],
/// the type scale as `--font-size-*` / `--font-weight-*` / `--line-height-*`
/// / `--letter-spacing-*`, and a translucent accent tint.
#[must_use]
pub fn root_style() -> String {
    let mut decls: Vec<String> = CSS_VARIABLES.iter().map(|(name, value)| format!("{name}: {value};")).collect();
    decls.extend(FONT_SIZES.iter().map(|(k, v)| format!("--font-size-{k}: {v};")));
    decls.extend(FONT_WEIGHTS.iter().map(|(k, v)| format!("--font-weight-{k}: {v};")));
    decls.extend(LINE_HEIGHTS.iter().map(|(k, v)| format!("--line-height-{k}: {v};")));
    decls.extend(LETTER_SPACING.iter().map(|(k, v)| format!("--letter-spacing-{k}: {v};")));
    if let Some(tint) = with_opacity(colors::RED, 0.1) {
        decls.push(format!("--color-accent-tint: {tint};"));
    }
    decls.join(" ")
}

/// Convert `#RRGGBB` to `rgba(r, g, b, opacity)`.
///
/// Returns `None` for anything other than six hex digits.
#[must_use]
pub fn with_opacity(hex: &str, opacity: f32) -> Option<String> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    let (r, g, b) = (channel(0..2)?, channel(2..4)?, channel(4..6)?);
    Some(format!("rgba({r}, {g}, {b}, {opacity})"))
}
