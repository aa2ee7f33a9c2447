//! Spacing detection: padding / margin / gap values and semantic spacing tokens.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::analyzer::regexes::regex;
use crate::analyzer::{push_unique, to_px};

fn regex_spacing_keyword() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)padding|margin|\bgap\b|\bspace|spacing"))
}

fn regex_spacing_property() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r#"(?i)\b(padding|margin|gap|row-?gap|column-?gap)(?:-?(?:top|bottom|left|right|horizontal|vertical|inline|block|start|end))?\s*[:=]\s*["'{]?\s*([^;"'}\n,]+)"#)
    })
}

fn regex_numeric_value() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)(\d+(?:\.\d+)?)\s*(px|rem|em|%|pt|vh|vw|dp|sp)?"))
}

fn regex_utility_spacing() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r"(?:^|[\s\x22'`:])-?(p|m|gap|space)(?:[xytblrse]|-[xy])?-(\d+(?:\.5)?)\b")
    })
}

fn regex_spacing_token() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r"(?i)\b(?:space|spacing|gap|padding|margin)[-.](?:xxs|xs|sm|md|lg|xl|xxl|2xl|3xl)\b")
    })
}

/// Common 4/8-point grid values.
const GRID_VALUES: &[f64] = &[4.0, 8.0, 12.0, 16.0, 20.0, 24.0, 32.0, 40.0, 48.0, 56.0, 64.0];

/// Overall consistency of the spacing values in a markup blob.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpacingPattern {
    #[default]
    None,
    /// exactly one distinct value
    Consistent,
    /// two or three distinct values, or semantic tokens only
    DesignSystem,
    /// four or more distinct values
    Mixed,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpacingSignal {
    pub found: bool,
    /// Distinct numeric values, in px where the unit allows it
    pub values: Vec<f64>,
    pub tokens: Vec<String>,
    pub properties: Vec<String>,
    pub pattern: SpacingPattern,
    pub design_system_aligned: bool,
}

pub fn extract_spacing(markup: &str) -> SpacingSignal {
    let mut tokens = Vec::new();
    for token in regex_spacing_token().find_iter(markup) {
        push_unique(&mut tokens, token.as_str().to_lowercase());
    }
    if !regex_spacing_keyword().is_match(markup)
        && tokens.is_empty()
        && !regex_utility_spacing().is_match(markup)
    {
        return SpacingSignal::default();
    }

    let mut values: Vec<f64> = Vec::new();
    let mut properties = Vec::new();

    for caps in regex_spacing_property().captures_iter(markup) {
        if let Some(property) = caps.get(1) {
            push_unique(&mut properties, property.as_str().to_lowercase().replace('-', ""));
        }
        let Some(raw) = caps.get(2) else { continue };
        for value in regex_numeric_value().captures_iter(raw.as_str()) {
            let Some(number) = value.get(1).and_then(|m| m.as_str().parse::<f64>().ok()) else {
                continue;
            };
            push_value(&mut values, to_px(number, value.get(2).map(|u| u.as_str())));
        }
    }

    for caps in regex_utility_spacing().captures_iter(markup) {
        let (Some(prefix), Some(step)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let property = match prefix.as_str() {
            "p" => "padding",
            "m" => "margin",
            "gap" => "gap",
            _ => "space",
        };
        push_unique(&mut properties, property);
        if let Ok(step) = step.as_str().parse::<f64>() {
            push_value(&mut values, step * 4.0);
        }
    }

    let pattern = match values.len() {
        0 if tokens.is_empty() => SpacingPattern::None,
        0 => SpacingPattern::DesignSystem,
        1 => SpacingPattern::Consistent,
        2 | 3 => SpacingPattern::DesignSystem,
        _ => SpacingPattern::Mixed,
    };
    let design_system_aligned = values.iter().any(|v| GRID_VALUES.contains(v));

    // a bare keyword such as `<Spacer />` still counts, with no pattern
    SpacingSignal {
        found: true,
        values,
        tokens,
        properties,
        pattern,
        design_system_aligned,
    }
}

/// Zero carries no spacing intent and is skipped.
fn push_value(values: &mut Vec<f64>, value: f64) {
    if value > 0.0 && !values.contains(&value) {
        values.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_value_is_consistent_and_aligned() {
        let signal = extract_spacing(r#"<div style="padding: 16px; margin: 16px">x</div>"#);
        assert!(signal.found);
        assert_eq!(signal.values, vec![16.0]);
        assert_eq!(signal.properties, vec!["padding", "margin"]);
        assert_eq!(signal.pattern, SpacingPattern::Consistent);
        assert!(signal.design_system_aligned);
    }

    #[test]
    fn test_utility_classes_use_four_point_steps() {
        let signal = extract_spacing(r#"<div class="p-4 mt-2 gap-6">x</div>"#);
        assert_eq!(signal.values, vec![16.0, 8.0, 24.0]);
        assert_eq!(signal.pattern, SpacingPattern::DesignSystem);
        assert!(signal.design_system_aligned);
    }

    #[test]
    fn test_many_values_are_mixed() {
        let signal = extract_spacing(".a { padding: 3px 7px 11px 13px; }");
        assert_eq!(signal.values.len(), 4);
        assert_eq!(signal.pattern, SpacingPattern::Mixed);
        assert!(!signal.design_system_aligned);
    }

    #[test]
    fn test_rem_values_convert() {
        let signal = extract_spacing("{ margin: 1.5rem }");
        assert_eq!(signal.values, vec![24.0]);
    }

    #[test]
    fn test_tokens_only() {
        let signal = extract_spacing(r#"<Stack gap="space-md" padding="spacing.lg" />"#);
        assert!(signal.found);
        assert_eq!(signal.tokens, vec!["space-md", "spacing.lg"]);
        assert!(signal.values.is_empty());
        assert_eq!(signal.pattern, SpacingPattern::DesignSystem);
    }

    #[test]
    fn test_off_grid_single_value() {
        let signal = extract_spacing("{ paddingHorizontal: 13 }");
        assert_eq!(signal.pattern, SpacingPattern::Consistent);
        assert!(!signal.design_system_aligned);
    }

    #[test]
    fn test_keyword_alone_is_found_without_pattern() {
        for markup in ["<Spacer />", r#"<div class="gap"></div>"#] {
            let signal = extract_spacing(markup);
            assert!(signal.found, "{markup}");
            assert_eq!(signal.pattern, SpacingPattern::None);
            assert!(signal.values.is_empty());
            assert!(signal.tokens.is_empty());
            assert!(!signal.design_system_aligned);
        }
    }

    #[test]
    fn test_no_spacing() {
        assert_eq!(extract_spacing("<p>text</p>"), SpacingSignal::default());
    }
}
