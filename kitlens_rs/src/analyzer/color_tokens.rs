//! Literal color values mapped onto semantic design tokens.
//!
//! Colors are collected from CSS properties (`color`, `background-color`,
//! `border-color`, `background`, `border`), bracketed utility literals
//! (`bg-[#0066cc]`) and a small utility-class table, normalized, then looked
//! up in a static token table. The usage context (text / background /
//! border / control) comes from the CSS property when there is one and from
//! the element type otherwise.

use serde::Serialize;

use super::regexes::{regex_bracket_color_class, regex_color_literal, regex_color_property};
use super::utility::lookup_colors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorCategory {
    Text,
    Background,
    Border,
    Brand,
    Neutral,
}

/// Top-level group of the token table, also used as usage context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenGroup {
    Text,
    Background,
    Border,
    Control,
}

impl TokenGroup {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Background => "background",
            Self::Border => "border",
            Self::Control => "control",
        }
    }

    /// Context implied by a CSS property name.
    fn from_property(property: &str) -> Self {
        let property = property.to_lowercase();
        if property.starts_with("background") {
            Self::Background
        } else if property.starts_with("border") {
            Self::Border
        } else {
            Self::Text
        }
    }

    /// Context implied by an element type when no property says otherwise.
    pub fn from_element_type(element_type: &str) -> Self {
        let element = element_type.to_lowercase();
        if element.contains("button") || element.contains("touchable") {
            Self::Control
        } else if ["div", "container", "view", "section", "card", "box"]
            .iter()
            .any(|k| element.contains(k))
        {
            Self::Background
        } else {
            Self::Text
        }
    }
}

struct ColorToken {
    group: TokenGroup,
    role: &'static str,
    category: ColorCategory,
    literals: &'static [&'static str],
}

/// Declaration order is the tie-break order.
const COLOR_TABLE: &[ColorToken] = &[
    ColorToken { group: TokenGroup::Text, role: "primary", category: ColorCategory::Text, literals: &["#1a1a1a", "#111827", "#000000"] },
    ColorToken { group: TokenGroup::Text, role: "secondary", category: ColorCategory::Text, literals: &["#666666", "#6b7280", "#374151"] },
    ColorToken { group: TokenGroup::Text, role: "disabled", category: ColorCategory::Neutral, literals: &["#999999", "#9ca3af"] },
    ColorToken { group: TokenGroup::Text, role: "inverse", category: ColorCategory::Text, literals: &["#ffffff"] },
    ColorToken { group: TokenGroup::Text, role: "link", category: ColorCategory::Brand, literals: &["#0066cc", "#2563eb"] },
    ColorToken { group: TokenGroup::Text, role: "error", category: ColorCategory::Text, literals: &["#d32f2f", "#dc2626"] },
    ColorToken { group: TokenGroup::Text, role: "success", category: ColorCategory::Text, literals: &["#2e7d32", "#16a34a"] },
    ColorToken { group: TokenGroup::Background, role: "primary", category: ColorCategory::Background, literals: &["#ffffff"] },
    ColorToken { group: TokenGroup::Background, role: "secondary", category: ColorCategory::Neutral, literals: &["#f5f5f5", "#f9fafb", "#f3f4f6"] },
    ColorToken { group: TokenGroup::Background, role: "brand", category: ColorCategory::Brand, literals: &["#0066cc", "#3b82f6"] },
    ColorToken { group: TokenGroup::Background, role: "error", category: ColorCategory::Background, literals: &["#fdecea", "#fee2e2"] },
    ColorToken { group: TokenGroup::Background, role: "success", category: ColorCategory::Background, literals: &["#e8f5e9", "#dcfce7"] },
    ColorToken { group: TokenGroup::Background, role: "warning", category: ColorCategory::Background, literals: &["#fff8e1", "#fef3c7"] },
    ColorToken { group: TokenGroup::Background, role: "overlay", category: ColorCategory::Neutral, literals: &["rgba(0,0,0,0.5)"] },
    ColorToken { group: TokenGroup::Border, role: "default", category: ColorCategory::Border, literals: &["#e0e0e0", "#e5e7eb", "#d1d5db"] },
    ColorToken { group: TokenGroup::Border, role: "focus", category: ColorCategory::Brand, literals: &["#0066cc", "#3b82f6"] },
    ColorToken { group: TokenGroup::Border, role: "error", category: ColorCategory::Border, literals: &["#d32f2f", "#ef4444"] },
    ColorToken { group: TokenGroup::Control, role: "primary", category: ColorCategory::Brand, literals: &["#0066cc", "#2563eb"] },
    ColorToken { group: TokenGroup::Control, role: "secondary", category: ColorCategory::Neutral, literals: &["#ffffff"] },
    ColorToken { group: TokenGroup::Control, role: "disabled", category: ColorCategory::Neutral, literals: &["#cccccc"] },
    ColorToken { group: TokenGroup::Control, role: "danger", category: ColorCategory::Brand, literals: &["#d32f2f", "#dc2626"] },
];

const BASE_CONFIDENCE: f64 = 0.7;
const CONTEXT_BONUS: f64 = 0.2;
const LITERAL_BONUS: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorMapping {
    /// Literal as written in the markup
    pub source_color: String,
    pub normalized: String,
    /// `colors.<group>.<role>`
    pub token_name: String,
    pub category: ColorCategory,
    pub confidence: f64,
    pub context: TokenGroup,
}

/// Canonical form of a color literal: lowercase 6-digit hex for `#rgb`,
/// `rgb()` and fully opaque `rgba()`; `white` / `black` as hex; anything
/// else lowercased without whitespace. Idempotent.
pub fn normalize_color(raw: &str) -> String {
    let compact: String = raw
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();

    match compact.as_str() {
        "white" => return "#ffffff".to_string(),
        "black" => return "#000000".to_string(),
        _ => {}
    }

    if let Some(hex) = compact.strip_prefix('#') {
        if hex.len() == 3 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return hex.chars().fold(String::from("#"), |mut out, c| {
                out.push(c);
                out.push(c);
                out
            });
        }
        return compact;
    }

    if let Some(hex) = rgb_to_hex(&compact) {
        return hex;
    }
    compact
}

/// `rgb(r,g,b)` or `rgba(r,g,b,1)` as hex; translucent colors stay functional.
fn rgb_to_hex(compact: &str) -> Option<String> {
    let inner = compact
        .strip_prefix("rgba(")
        .or_else(|| compact.strip_prefix("rgb("))?
        .strip_suffix(')')?;
    let parts: Vec<&str> = inner.split(',').collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }
    if let Some(alpha) = parts.get(3) {
        let alpha: f64 = alpha.parse().ok()?;
        if alpha < 1.0 {
            return None;
        }
    }
    let mut hex = String::from("#");
    for part in &parts[..3] {
        let channel: f64 = part.parse().ok()?;
        hex.push_str(&format!("{:02x}", channel.round().clamp(0.0, 255.0) as u8));
    }
    Some(hex)
}

/// Best token for one literal in one context; first declared wins ties.
pub fn match_color(source: &str, context: TokenGroup) -> Option<ColorMapping> {
    let normalized = normalize_color(source);
    let mut best: Option<(f64, &ColorToken)> = None;

    for token in COLOR_TABLE {
        for literal in token.literals {
            if normalize_color(literal) != normalized {
                continue;
            }
            let mut confidence = BASE_CONFIDENCE;
            if token.group == context {
                confidence += CONTEXT_BONUS;
            }
            if *literal == source {
                confidence += LITERAL_BONUS;
            }
            let confidence = confidence.min(1.0);
            if best.is_none_or(|(score, _)| confidence > score) {
                best = Some((confidence, token));
            }
        }
    }

    best.map(|(confidence, token)| ColorMapping {
        source_color: source.to_string(),
        normalized: normalized.clone(),
        token_name: format!("colors.{}.{}", token.group.as_str(), token.role),
        category: token.category,
        confidence: round2(confidence),
        context,
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Map every color used by a style block (and optionally the element's own
/// markup, for utility classes) onto design tokens.
pub fn analyze(style: &str, element_type: &str, markup: Option<&str>) -> Vec<ColorMapping> {
    let fallback_context = TokenGroup::from_element_type(element_type);
    let mut literals: Vec<(String, TokenGroup)> = Vec::new();

    for caps in regex_color_property().captures_iter(style) {
        let (Some(property), Some(value)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let context = match property.as_str().to_lowercase().as_str() {
            "color" => match fallback_context {
                TokenGroup::Control => TokenGroup::Control,
                _ => TokenGroup::Text,
            },
            other => TokenGroup::from_property(other),
        };
        for literal in regex_color_literal().find_iter(value.as_str()) {
            literals.push((literal.as_str().to_string(), context));
        }
    }

    let class_sources = [Some(style), markup];
    for source in class_sources.into_iter().flatten() {
        for caps in regex_bracket_color_class().captures_iter(source) {
            let (Some(prefix), Some(value)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            literals.push((value.as_str().to_string(), prefix_context(prefix.as_str())));
        }
    }
    if let Some(markup) = markup {
        for (class, hex) in lookup_colors(markup, &["text", "bg", "border"]) {
            let prefix = class.split('-').next().unwrap_or_default();
            literals.push((hex.to_string(), prefix_context(prefix)));
        }
    }

    let mut mappings: Vec<ColorMapping> = Vec::new();
    for (literal, context) in literals {
        let Some(mapping) = match_color(&literal, context) else {
            continue;
        };
        let duplicate = mappings
            .iter()
            .any(|m| m.normalized == mapping.normalized && m.context == mapping.context);
        if !duplicate {
            mappings.push(mapping);
        }
    }
    mappings
}

fn prefix_context(prefix: &str) -> TokenGroup {
    match prefix.to_lowercase().as_str() {
        "bg" => TokenGroup::Background,
        "border" => TokenGroup::Border,
        _ => TokenGroup::Text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_rgb_and_short_hex() {
        assert_eq!(normalize_color("rgb(0,102,204)"), "#0066cc");
        assert_eq!(normalize_color("RGB( 0, 102, 204 )"), "#0066cc");
        assert_eq!(normalize_color("rgba(0,102,204,1)"), "#0066cc");
        assert_eq!(normalize_color("#FFF"), "#ffffff");
        assert_eq!(normalize_color("White"), "#ffffff");
        assert_eq!(normalize_color("transparent"), "transparent");
        assert_eq!(normalize_color("rgba(0, 0, 0, 0.5)"), "rgba(0,0,0,0.5)");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in [
            "rgb(0,102,204)",
            "#ABC",
            "#0066CC",
            "black",
            "rgba(10,20,30,0.4)",
            "hsl(10, 20%, 30%)",
            "#12345678",
            "currentColor",
        ] {
            let once = normalize_color(raw);
            assert_eq!(normalize_color(&once), once, "not idempotent for {raw}");
        }
    }

    #[test]
    fn test_brand_color_in_background_context() {
        let mappings = analyze("background-color: rgb(0,102,204);", "div", None);
        assert_eq!(mappings.len(), 1);
        let mapping = &mappings[0];
        assert_eq!(mapping.normalized, "#0066cc");
        assert_eq!(mapping.token_name, "colors.background.brand");
        assert_eq!(mapping.category, ColorCategory::Brand);
        assert_eq!(mapping.confidence, 0.9);
    }

    #[test]
    fn test_exact_literal_adds_bonus() {
        let mapping = match_color("#0066cc", TokenGroup::Text).expect("table hit");
        assert_eq!(mapping.token_name, "colors.text.link");
        assert_eq!(mapping.confidence, 1.0);
    }

    #[test]
    fn test_tie_break_is_declaration_order() {
        // equal scores keep the earlier entry (text.link before control.primary)
        let mapping = match_color("rgb(0,102,204)", TokenGroup::Border);
        assert_eq!(
            mapping.map(|m| m.token_name),
            Some("colors.border.focus".to_string())
        );
        let mapping = match_color("#0066CC", TokenGroup::Control).expect("table hit");
        assert_eq!(mapping.token_name, "colors.control.primary");
        let mapping = match_color("#2563eb", TokenGroup::Background).expect("table hit");
        assert_eq!(mapping.token_name, "colors.text.link");
        assert_eq!(mapping.confidence, 0.8);
    }

    #[test]
    fn test_color_property_context_for_buttons() {
        let mappings = analyze("color: #ffffff; background: #0066cc", "button", None);
        let names: Vec<_> = mappings.iter().map(|m| m.token_name.as_str()).collect();
        assert_eq!(names, vec!["colors.control.secondary", "colors.background.brand"]);
    }

    #[test]
    fn test_border_shorthand() {
        let mappings = analyze("border: 1px solid #E5E7EB", "div", None);
        assert_eq!(mappings[0].token_name, "colors.border.default");
        assert_eq!(mappings[0].confidence, 0.9);
    }

    #[test]
    fn test_utility_and_bracket_classes() {
        let markup = r#"<p class="text-gray-900 bg-[#0066cc]">x</p>"#;
        let mappings = analyze("", "p", Some(markup));
        let names: Vec<_> = mappings.iter().map(|m| m.token_name.as_str()).collect();
        assert_eq!(names, vec!["colors.background.brand", "colors.text.primary"]);
    }

    #[test]
    fn test_unknown_colors_produce_nothing() {
        assert!(analyze("color: #123456", "span", None).is_empty());
        assert!(analyze("", "div", None).is_empty());
    }
}
