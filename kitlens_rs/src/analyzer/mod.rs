pub mod color_tokens;
pub mod elements;
pub mod figma;
pub mod patterns;
pub mod regexes;
pub mod typography;
mod utility;

use regex::Regex;

use self::regexes::{regex_class_attr, regex_style_attr, regex_style_object};

pub use figma::{CombinedAnalysis, MarkupMetadata, analyze_markup};

pub(crate) fn count_matches(re: &Regex, text: &str) -> usize {
    re.find_iter(text).count()
}

/// True when any of the probes matches.
pub(crate) fn any_match(probes: &[&Regex], text: &str) -> bool {
    probes.iter().any(|re| re.is_match(text))
}

/// Push `value` unless already present (keeps first-seen order).
pub(crate) fn push_unique(list: &mut Vec<String>, value: impl Into<String>) {
    let value = value.into();
    if !list.contains(&value) {
        list.push(value);
    }
}

/// Inline style bodies (`style="..."`, `style={{...}}`) found in the markup.
pub(crate) fn style_attributes(markup: &str) -> Vec<&str> {
    regex_style_attr()
        .captures_iter(markup)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)))
        .map(|m| m.as_str())
        .collect()
}

/// Candidate style declaration blocks: inline style attributes plus every
/// innermost `{ ... }` body (CSS rules, StyleSheet entries, style objects).
pub(crate) fn style_blocks(markup: &str) -> Vec<&str> {
    let mut blocks = style_attributes(markup);
    for caps in regex_style_object().captures_iter(markup) {
        if let Some(body) = caps.get(1) {
            let text = body.as_str();
            if !blocks.contains(&text) {
                blocks.push(text);
            }
        }
    }
    blocks
}

/// Class/id tokens from `class=`, `className=` and `id=` attributes.
pub(crate) fn class_tokens(markup: &str) -> Vec<&str> {
    regex_class_attr()
        .captures_iter(markup)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)))
        .flat_map(|m| m.as_str().split_whitespace())
        .collect()
}

/// Convert a CSS length to pixels (rem/em against a 16px root, pt at 96dpi).
pub(crate) fn to_px(value: f64, unit: Option<&str>) -> f64 {
    match unit.map(|u| u.to_ascii_lowercase()).as_deref() {
        Some("rem") | Some("em") => value * 16.0,
        Some("pt") => value * 4.0 / 3.0,
        _ => value,
    }
}
