//! Typography inference: font size, weight, line height and color of one
//! element, bucketed onto the ten-level text scale.

use std::fmt;

use serde::{Serialize, Serializer};

use super::color_tokens::normalize_color;
use super::regexes::{
    regex_bracket_color_class, regex_font_size, regex_font_weight, regex_line_height,
    regex_text_color,
};
use super::to_px;
use super::utility::{lookup_colors, lookup_font_size, lookup_font_weight, lookup_line_height};

pub const DEFAULT_FONT_SIZE: f64 = 16.0;
const DEFAULT_LINE_HEIGHT_RATIO: f64 = 1.5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Medium,
    Bold,
}

impl FontWeight {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Regular => "regular",
            Self::Medium => "medium",
            Self::Bold => "bold",
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position on the text scale, `text1` (largest) to `text10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextLevel(u8);

impl TextLevel {
    pub const MAX: u8 = 10;

    pub fn new(level: u8) -> Option<Self> {
        (1..=Self::MAX).contains(&level).then_some(Self(level))
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// Design-token name, e.g. `text-preset-3/bold`.
    pub fn token(self, weight: FontWeight) -> String {
        format!("text-preset-{}/{}", self.0, weight)
    }
}

impl fmt::Display for TextLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "text{}", self.0)
    }
}

impl Serialize for TextLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Declared px range (inclusive) and allowed weights of one text level.
#[derive(Debug, Clone, Copy)]
pub struct LevelSpec {
    pub level: u8,
    pub min_px: f64,
    pub max_px: f64,
    pub weights: &'static [FontWeight],
}

impl LevelSpec {
    pub fn contains(&self, size: f64) -> bool {
        size >= self.min_px && size <= self.max_px
    }

    pub fn allows(&self, weight: FontWeight) -> bool {
        self.weights.contains(&weight)
    }
}

use FontWeight::{Bold, Light, Medium, Regular};

pub const LEVEL_TABLE: &[LevelSpec] = &[
    LevelSpec { level: 1, min_px: 56.0, max_px: 72.0, weights: &[Bold] },
    LevelSpec { level: 2, min_px: 44.0, max_px: 52.0, weights: &[Bold, Medium] },
    LevelSpec { level: 3, min_px: 32.0, max_px: 40.0, weights: &[Bold, Medium] },
    LevelSpec { level: 4, min_px: 28.0, max_px: 30.0, weights: &[Bold, Medium] },
    LevelSpec { level: 5, min_px: 24.0, max_px: 26.0, weights: &[Bold, Medium, Regular] },
    LevelSpec { level: 6, min_px: 20.0, max_px: 22.0, weights: &[Medium, Regular] },
    LevelSpec { level: 7, min_px: 18.0, max_px: 18.0, weights: &[Medium, Regular] },
    LevelSpec { level: 8, min_px: 16.0, max_px: 16.0, weights: &[Regular, Medium, Bold] },
    LevelSpec { level: 9, min_px: 14.0, max_px: 15.0, weights: &[Regular, Medium] },
    LevelSpec { level: 10, min_px: 10.0, max_px: 13.0, weights: &[Regular, Light] },
];

/// Lower bounds of the fallback staircase, largest first.
const STAIRCASE: &[(f64, u8)] = &[
    (56.0, 1),
    (44.0, 2),
    (32.0, 3),
    (28.0, 4),
    (24.0, 5),
    (20.0, 6),
    (18.0, 7),
    (16.0, 8),
    (14.0, 9),
];

pub fn level_spec(level: TextLevel) -> &'static LevelSpec {
    &LEVEL_TABLE[usize::from(level.0 - 1)]
}

/// Level whose declared range holds `size`; sizes between or beyond the
/// ranges fall down a non-increasing staircase.
pub fn determine_text_level(size: f64) -> TextLevel {
    if let Some(spec) = LEVEL_TABLE.iter().find(|spec| spec.contains(size)) {
        return TextLevel(spec.level);
    }
    let level = STAIRCASE
        .iter()
        .find(|(min, _)| size >= *min)
        .map(|(_, level)| *level)
        .unwrap_or(TextLevel::MAX);
    TextLevel(level)
}

const BOLD_KEYWORDS: &[&str] = &["bold", "bolder", "700", "800", "900", "heavy", "black", "extrabold", "extra-bold"];
const MEDIUM_KEYWORDS: &[&str] = &["medium", "semibold", "semi-bold", "demibold", "500", "600"];
const LIGHT_KEYWORDS: &[&str] = &["light", "lighter", "thin", "extralight", "extra-light", "100", "200", "300"];
const REGULAR_KEYWORDS: &[&str] = &["regular", "normal", "book", "400"];

/// Weight bucket of a CSS font-weight value. Unparsable values are regular.
pub fn infer_weight(raw: &str) -> FontWeight {
    let value = raw.trim().trim_matches(|c| c == '"' || c == '\'').to_lowercase();
    let keyword_buckets = [
        (BOLD_KEYWORDS, Bold),
        (MEDIUM_KEYWORDS, Medium),
        (LIGHT_KEYWORDS, Light),
        (REGULAR_KEYWORDS, Regular),
    ];
    if let Some((_, weight)) = keyword_buckets
        .iter()
        .find(|(keywords, _)| keywords.contains(&value.as_str()))
    {
        return *weight;
    }
    match value.parse::<f64>() {
        Ok(n) if n <= 300.0 => Light,
        Ok(n) if n <= 400.0 => Regular,
        Ok(n) if n <= 600.0 => Medium,
        Ok(_) => Bold,
        Err(_) => Regular,
    }
}

fn weight_from_bucket(bucket: &str) -> FontWeight {
    match bucket {
        "light" => Light,
        "medium" => Medium,
        "bold" => Bold,
        _ => Regular,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypographySignal {
    pub text_level: TextLevel,
    pub weight: FontWeight,
    pub size_px: f64,
    pub line_height_px: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub confidence: f64,
}

impl TypographySignal {
    pub fn token(&self) -> String {
        self.text_level.token(self.weight)
    }
}

/// Line height as written: a px length, a multiplier or a percentage.
enum LineHeight {
    Px(f64),
    Ratio(f64),
}

impl LineHeight {
    fn resolve(&self, size: f64) -> f64 {
        match self {
            Self::Px(px) => *px,
            Self::Ratio(ratio) => ratio * size,
        }
    }
}

fn style_font_size(style: &str) -> Option<f64> {
    let caps = regex_font_size().captures(style)?;
    let value: f64 = caps.get(1)?.as_str().parse().ok()?;
    Some(to_px(value, caps.get(2).map(|m| m.as_str())))
}

fn style_line_height(style: &str) -> Option<LineHeight> {
    let caps = regex_line_height().captures(style)?;
    let value: f64 = caps.get(1)?.as_str().parse().ok()?;
    let unit = caps.get(2).map(|m| m.as_str().to_ascii_lowercase());
    Some(match unit.as_deref() {
        Some("%") => LineHeight::Ratio(value / 100.0),
        Some(unit) => LineHeight::Px(to_px(value, Some(unit))),
        None => LineHeight::Ratio(value),
    })
}

fn style_color(style: &str) -> Option<String> {
    let caps = regex_text_color().captures(style)?;
    Some(normalize_color(caps.get(1)?.as_str()))
}

fn class_color(markup: &str) -> Option<String> {
    let bracketed = regex_bracket_color_class()
        .captures_iter(markup)
        .find(|caps| caps.get(1).is_some_and(|p| p.as_str().eq_ignore_ascii_case("text")))
        .and_then(|caps| caps.get(2))
        .map(|m| normalize_color(m.as_str()));
    bracketed.or_else(|| {
        lookup_colors(markup, &["text"])
            .first()
            .map(|(_, hex)| normalize_color(hex))
    })
}

/// Typography of one element from its style text, with utility classes
/// from the element markup taking precedence when they carry a
/// non-default value.
pub fn analyze(style: &str, markup: Option<&str>) -> TypographySignal {
    let utility_size = markup.and_then(lookup_font_size);
    let utility_weight = markup.and_then(lookup_font_weight).map(weight_from_bucket);
    let utility_color = markup.and_then(class_color);

    let mut size = style_font_size(style)
        .or(utility_size)
        .unwrap_or(DEFAULT_FONT_SIZE);
    let mut weight = regex_font_weight()
        .captures(style)
        .and_then(|caps| caps.get(1))
        .map(|m| infer_weight(m.as_str()))
        .or(utility_weight)
        .unwrap_or_default();
    let mut color = style_color(style).or_else(|| utility_color.clone());

    // utility classes win over inline style when they say something
    if let Some(utility) = utility_size.filter(|s| *s != DEFAULT_FONT_SIZE) {
        size = utility;
    }
    if let Some(utility) = utility_weight.filter(|w| *w != Regular) {
        weight = utility;
    }
    if let Some(utility) = utility_color.filter(|c| !c.is_empty()) {
        color = Some(utility);
    }

    let line_height_px = markup
        .and_then(|m| lookup_line_height(m, size))
        .or_else(|| style_line_height(style).map(|lh| lh.resolve(size)))
        .unwrap_or(size * DEFAULT_LINE_HEIGHT_RATIO);

    let text_level = determine_text_level(size);
    let spec = level_spec(text_level);
    let mut confidence: f64 = 0.5;
    if spec.contains(size) {
        confidence += 0.3;
    }
    if spec.allows(weight) {
        confidence += 0.2;
    }

    TypographySignal {
        text_level,
        weight,
        size_px: size,
        line_height_px,
        color,
        confidence: ((confidence.min(1.0)) * 100.0).round() / 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_style_32px_bold() {
        let signal = analyze("font-size: 32px; font-weight: 700", None);
        assert_eq!(signal.text_level.to_string(), "text3");
        assert_eq!(signal.weight, Bold);
        assert_eq!(signal.confidence, 1.0);
        assert_eq!(signal.line_height_px, 48.0);
        assert_eq!(signal.token(), "text-preset-3/bold");
    }

    #[test]
    fn test_defaults_when_nothing_declared() {
        let signal = analyze("", None);
        assert_eq!(signal.size_px, 16.0);
        assert_eq!(signal.weight, Regular);
        assert_eq!(signal.text_level.number(), 8);
        assert_eq!(signal.color, None);
        assert_eq!(signal.confidence, 1.0);
    }

    #[test]
    fn test_inside_range_with_allowed_weight_is_confident() {
        for spec in LEVEL_TABLE {
            let size = (spec.min_px + spec.max_px) / 2.0;
            for weight in spec.weights {
                let style = format!("font-size: {size}px; font-weight: {weight}");
                let signal = analyze(&style, None);
                assert_eq!(signal.text_level.number(), spec.level, "size {size}");
                assert!(signal.confidence >= 0.8, "{style} -> {}", signal.confidence);
            }
        }
    }

    #[test]
    fn test_gap_sizes_use_staircase() {
        assert_eq!(determine_text_level(53.0).number(), 2);
        assert_eq!(determine_text_level(41.0).number(), 3);
        assert_eq!(determine_text_level(100.0).number(), 1);
        assert_eq!(determine_text_level(8.0).number(), 10);
        assert_eq!(determine_text_level(15.5).number(), 9);
    }

    #[test]
    fn test_staircase_is_monotonic() {
        let mut previous = determine_text_level(200.0);
        let mut size = 200.0;
        while size > 0.0 {
            let level = determine_text_level(size);
            assert!(level >= previous, "level went up at {size}px");
            previous = level;
            size -= 0.5;
        }
    }

    #[test]
    fn test_out_of_range_size_lowers_confidence() {
        // 41px falls between text3 and text2 ranges
        let signal = analyze("font-size: 41px; font-weight: bold", None);
        assert_eq!(signal.text_level.number(), 3);
        assert_eq!(signal.confidence, 0.7);
    }

    #[test]
    fn test_weight_inference() {
        assert_eq!(infer_weight("600"), Medium);
        assert_eq!(infer_weight("800"), Bold);
        assert_eq!(infer_weight("semibold"), Medium);
        assert_eq!(infer_weight("'300'"), Light);
        assert_eq!(infer_weight("350"), Regular);
        assert_eq!(infer_weight("650"), Bold);
        assert_eq!(infer_weight("inherit"), Regular);
    }

    #[test]
    fn test_utility_classes_override_style() {
        let markup = r#"<h2 class="text-3xl font-bold text-gray-900">Title</h2>"#;
        let signal = analyze("font-size: 12px; font-weight: 400; color: #ff0000", Some(markup));
        assert_eq!(signal.size_px, 30.0);
        assert_eq!(signal.weight, Bold);
        assert_eq!(signal.color.as_deref(), Some("#111827"));
        assert_eq!(signal.text_level.number(), 4);
    }

    #[test]
    fn test_default_utility_values_do_not_override() {
        let markup = r#"<p class="text-base font-normal">x</p>"#;
        let signal = analyze("font-size: 20px; font-weight: 500", Some(markup));
        assert_eq!(signal.size_px, 20.0);
        assert_eq!(signal.weight, Medium);
    }

    #[test]
    fn test_line_height_forms() {
        assert_eq!(analyze("font-size: 20px; line-height: 28px", None).line_height_px, 28.0);
        assert_eq!(analyze("font-size: 20px; line-height: 1.2", None).line_height_px, 24.0);
        assert_eq!(analyze("font-size: 20px; line-height: 150%", None).line_height_px, 30.0);
        let markup = r#"<p class="leading-tight">x</p>"#;
        assert_eq!(analyze("font-size: 16px", Some(markup)).line_height_px, 20.0);
    }

    #[test]
    fn test_style_color_normalized() {
        let signal = analyze("color: rgb(0, 102, 204)", None);
        assert_eq!(signal.color.as_deref(), Some("#0066cc"));
        let signal = analyze("", Some(r#"<span class="text-[#333]">x</span>"#));
        assert_eq!(signal.color.as_deref(), Some("#333333"));
    }

    #[test]
    fn test_text_level_serializes_as_name() {
        let level = TextLevel::new(5).expect("valid level");
        assert_eq!(serde_json::to_string(&level).unwrap(), "\"text5\"");
        assert!(TextLevel::new(0).is_none());
        assert!(TextLevel::new(11).is_none());
    }
}
