//! Utility-class lookup tables (Tailwind naming) shared by the typography
//! and color analyzers.

use std::sync::OnceLock;

use regex::Regex;

/// `text-*` size classes in px.
pub(crate) const FONT_SIZE_CLASSES: &[(&str, f64)] = &[
    ("text-xs", 12.0),
    ("text-sm", 14.0),
    ("text-base", 16.0),
    ("text-lg", 18.0),
    ("text-xl", 20.0),
    ("text-2xl", 24.0),
    ("text-3xl", 30.0),
    ("text-4xl", 36.0),
    ("text-5xl", 48.0),
    ("text-6xl", 60.0),
    ("text-7xl", 72.0),
    ("text-8xl", 96.0),
];

/// `font-*` weight classes mapped onto the four weight buckets.
pub(crate) const FONT_WEIGHT_CLASSES: &[(&str, &str)] = &[
    ("font-thin", "light"),
    ("font-extralight", "light"),
    ("font-light", "light"),
    ("font-normal", "regular"),
    ("font-medium", "medium"),
    ("font-semibold", "medium"),
    ("font-bold", "bold"),
    ("font-extrabold", "bold"),
    ("font-black", "bold"),
];

/// `leading-*` classes as line-height multipliers.
pub(crate) const LINE_HEIGHT_CLASSES: &[(&str, f64)] = &[
    ("leading-none", 1.0),
    ("leading-tight", 1.25),
    ("leading-snug", 1.375),
    ("leading-normal", 1.5),
    ("leading-relaxed", 1.625),
    ("leading-loose", 2.0),
];

/// Color utility classes with their literal hex value.
pub(crate) const COLOR_CLASSES: &[(&str, &str)] = &[
    ("text-white", "#ffffff"),
    ("text-black", "#000000"),
    ("text-gray-400", "#9ca3af"),
    ("text-gray-500", "#6b7280"),
    ("text-gray-700", "#374151"),
    ("text-gray-900", "#111827"),
    ("text-blue-600", "#2563eb"),
    ("text-red-600", "#dc2626"),
    ("text-green-600", "#16a34a"),
    ("bg-white", "#ffffff"),
    ("bg-black", "#000000"),
    ("bg-gray-50", "#f9fafb"),
    ("bg-gray-100", "#f3f4f6"),
    ("bg-blue-500", "#3b82f6"),
    ("bg-blue-600", "#2563eb"),
    ("bg-red-100", "#fee2e2"),
    ("bg-green-100", "#dcfce7"),
    ("bg-yellow-100", "#fef3c7"),
    ("border-gray-200", "#e5e7eb"),
    ("border-gray-300", "#d1d5db"),
    ("border-red-500", "#ef4444"),
    ("border-blue-500", "#3b82f6"),
];

fn class_regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex literal")
}

fn regex_class_token() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // tokens made of class-name characters, including arbitrary values `text-[18px]`
    RE.get_or_init(|| class_regex(r#"[A-Za-z0-9:_\-\[\]#().,/%]+"#))
}

fn regex_arbitrary_size() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| class_regex(r#"^text-\[(\d+(?:\.\d+)?)(px|rem)\]$"#))
}

fn regex_leading_step() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| class_regex(r#"^leading-(?:(\d+)|\[(\d+(?:\.\d+)?)px\])$"#))
}

/// Class-like tokens of a markup fragment, with responsive/state prefixes
/// (`md:`, `hover:`) stripped.
pub(crate) fn utility_tokens(markup: &str) -> Vec<&str> {
    regex_class_token()
        .find_iter(markup)
        .map(|m| m.as_str())
        .map(|token| token.rsplit(':').next().unwrap_or(token))
        .collect()
}

/// Font size from `text-*` classes or `text-[18px]`.
pub(crate) fn lookup_font_size(markup: &str) -> Option<f64> {
    utility_tokens(markup).into_iter().find_map(|token| {
        if let Some(caps) = regex_arbitrary_size().captures(token) {
            let value: f64 = caps.get(1)?.as_str().parse().ok()?;
            let unit = caps.get(2).map(|m| m.as_str());
            return Some(super::to_px(value, unit));
        }
        FONT_SIZE_CLASSES
            .iter()
            .find(|(class, _)| *class == token)
            .map(|(_, px)| *px)
    })
}

pub(crate) fn lookup_font_weight(markup: &str) -> Option<&'static str> {
    utility_tokens(markup).into_iter().find_map(|token| {
        FONT_WEIGHT_CLASSES
            .iter()
            .find(|(class, _)| *class == token)
            .map(|(_, weight)| *weight)
    })
}

/// Line height in px for a given font size.
pub(crate) fn lookup_line_height(markup: &str, font_size: f64) -> Option<f64> {
    utility_tokens(markup).into_iter().find_map(|token| {
        if let Some(caps) = regex_leading_step().captures(token) {
            if let Some(step) = caps.get(1) {
                return step.as_str().parse::<f64>().ok().map(|s| s * 4.0);
            }
            return caps.get(2)?.as_str().parse::<f64>().ok();
        }
        LINE_HEIGHT_CLASSES
            .iter()
            .find(|(class, _)| *class == token)
            .map(|(_, ratio)| ratio * font_size)
    })
}

/// Hex literals from color utility classes whose prefix is one of `prefixes`
/// (`text`, `bg`, `border`), in markup order.
pub(crate) fn lookup_colors(markup: &str, prefixes: &[&str]) -> Vec<(&'static str, &'static str)> {
    utility_tokens(markup)
        .into_iter()
        .filter_map(|token| {
            COLOR_CLASSES
                .iter()
                .find(|(class, _)| *class == token)
                .copied()
        })
        .filter(|(class, _)| {
            prefixes
                .iter()
                .any(|p| class.split('-').next() == Some(*p))
        })
        .collect()
}
