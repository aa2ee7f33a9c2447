//! Text elements, text hierarchy and figma text-preset extraction.
//!
//! Text presets are found by three independent strategies, most to least
//! trustworthy:
//!
//! 1. explicit `text-preset-N/variant` naming (confidence 1.0)
//! 2. CSS inference from font-size / font-weight declarations (0.7)
//! 3. semantic context such as heading tags or caption classes (0.6 - 0.4)
//!
//! Results are consolidated per `(preset, variant)` keeping the most
//! confident entry.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::analyzer::regexes::{
    regex, regex_explicit_preset, regex_font_size, regex_font_weight, regex_heading_tag,
};
use crate::analyzer::{count_matches, push_unique, style_blocks, to_px};

fn regex_text_presence() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r"(?i)<\s*(?:h[1-6]|p|span|label|text|typography|title|heading|subtitle|caption)\b|text-preset|font-?size")
    })
}

fn regex_text_count() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r"(?i)<\s*(?:h[1-6]|p|span|label|text|typography|title|heading|subtitle|caption)\b")
    })
}

fn regex_text_content() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r"(?is)<\s*(?:h[1-6]|p|span|label|text|typography|title|heading|subtitle|caption)\b[^>]*>([^<{]+)<")
    })
}

fn regex_preset_level() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)text-preset-(10|[1-9])\b"))
}

fn regex_weight_variant() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)(?:[/-]|\b)(regular|medium|bold|light)\b"))
}

fn regex_caption_context() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)\b(?:caption|helper|hint|footnote|small)\b"))
}

/// Which strategy produced a text preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresetSource {
    Explicit,
    CssInference,
    SemanticContext,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextPreset {
    /// `text1` .. `text10`
    pub preset: String,
    /// regular | medium | bold | light
    pub variant: String,
    pub confidence_score: f64,
    pub source: PresetSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
}

impl TextPreset {
    /// Numeric level parsed from `preset` (`text3` -> 3).
    pub fn level(&self) -> u8 {
        self.preset
            .trim_start_matches("text")
            .parse()
            .unwrap_or(u8::MAX)
    }

    /// Design-token style name, e.g. `text-preset-3/bold`.
    pub fn token(&self) -> String {
        format!("text-preset-{}/{}", self.level(), self.variant)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextSignal {
    pub found: bool,
    pub count: usize,
    /// Preset and heading levels, lowest number first
    pub hierarchy: Vec<String>,
    /// Weight-variant tokens seen next to presets
    pub variants: Vec<String>,
    pub presets: Vec<TextPreset>,
    pub contents: Vec<String>,
}

pub fn extract_texts(markup: &str) -> TextSignal {
    if !regex_text_presence().is_match(markup) {
        return TextSignal::default();
    }

    let mut contents = Vec::new();
    for caps in regex_text_content().captures_iter(markup) {
        if let Some(text) = caps.get(1).map(|m| m.as_str().trim()).filter(|t| !t.is_empty()) {
            push_unique(&mut contents, text);
        }
    }

    let (hierarchy, variants) = extract_text_hierarchy(markup);
    TextSignal {
        found: true,
        count: count_matches(regex_text_count(), markup).max(1),
        hierarchy,
        variants,
        presets: extract_figma_text_presets(markup),
        contents,
    }
}

/// Preset levels (`text-preset-N`) and legacy headings (`hN`), ordered by
/// number with presets before headings of the same number, plus the
/// weight variants attached to preset names.
pub fn extract_text_hierarchy(markup: &str) -> (Vec<String>, Vec<String>) {
    let mut levels: Vec<(u8, u8, String)> = Vec::new();

    for caps in regex_preset_level().captures_iter(markup) {
        if let Some(n) = caps.get(1).and_then(|m| m.as_str().parse::<u8>().ok()) {
            let label = format!("text-preset-{n}");
            if !levels.iter().any(|(_, _, l)| *l == label) {
                levels.push((n, 0, label));
            }
        }
    }
    for caps in regex_heading_tag().captures_iter(markup) {
        if let Some(n) = caps.get(1).and_then(|m| m.as_str().parse::<u8>().ok()) {
            let label = format!("h{n}");
            if !levels.iter().any(|(_, _, l)| *l == label) {
                levels.push((n, 1, label));
            }
        }
    }
    levels.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));

    let mut variants = Vec::new();
    for preset in regex_preset_level().find_iter(markup) {
        let tail = &markup[preset.end()..];
        let cut = tail.char_indices().nth(12).map_or(tail.len(), |(i, _)| i);
        let tail = &tail[..cut];
        if let Some(variant) = regex_weight_variant()
            .captures(tail)
            .and_then(|c| c.get(1))
        {
            push_unique(&mut variants, variant.as_str().to_lowercase());
        }
    }

    (levels.into_iter().map(|(_, _, l)| l).collect(), variants)
}

// ----------------------------------------------------------------------------
// Figma text presets
// ----------------------------------------------------------------------------

const EXPLICIT_CONFIDENCE: f64 = 1.0;
const CSS_CONFIDENCE: f64 = 0.7;

/// Six-range scale used by CSS inference: (preset, min px inclusive,
/// max px exclusive, allowed weights - first one is the fallback).
const CSS_PRESET_RANGES: &[(&str, f64, f64, &[&str])] = &[
    ("text1", 36.0, f64::INFINITY, &["bold", "medium"]),
    ("text2", 28.0, 36.0, &["bold", "medium"]),
    ("text3", 22.0, 28.0, &["bold", "medium", "regular"]),
    ("text4", 18.0, 22.0, &["medium", "regular"]),
    ("text5", 15.0, 18.0, &["regular", "medium"]),
    ("text6", 0.0, 15.0, &["regular", "light"]),
];

/// Semantic hints: (probe, preset, variant, confidence). Evaluated in order.
fn semantic_hints() -> &'static [(Regex, &'static str, &'static str, f64)] {
    static RULES: OnceLock<Vec<(Regex, &'static str, &'static str, f64)>> = OnceLock::new();
    RULES.get_or_init(|| {
        vec![
            (regex(r"(?i)<h1\b"), "text1", "bold", 0.6),
            (regex(r"(?i)<h2\b"), "text2", "bold", 0.55),
            (regex(r"(?i)<h3\b"), "text3", "medium", 0.5),
            (regex(r"(?i)<h[4-6]\b"), "text4", "medium", 0.45),
        ]
    })
}

const CAPTION_CONFIDENCE: f64 = 0.4;

/// Run all three preset strategies and consolidate.
pub fn extract_figma_text_presets(markup: &str) -> Vec<TextPreset> {
    let mut candidates = explicit_presets(markup);
    candidates.extend(css_presets(markup));
    candidates.extend(semantic_presets(markup));
    consolidate_presets(candidates)
}

fn explicit_presets(markup: &str) -> Vec<TextPreset> {
    regex_explicit_preset()
        .captures_iter(markup)
        .filter_map(|caps| {
            let level: u8 = caps.get(1)?.as_str().parse().ok()?;
            let variant = caps.get(2)?.as_str().to_lowercase();
            Some(TextPreset {
                preset: format!("text{level}"),
                variant,
                confidence_score: EXPLICIT_CONFIDENCE,
                source: PresetSource::Explicit,
                font_size: None,
                font_weight: None,
            })
        })
        .collect()
}

fn css_presets(markup: &str) -> Vec<TextPreset> {
    let mut presets = Vec::new();
    for block in style_blocks(markup) {
        let Some(caps) = regex_font_size().captures(block) else {
            continue;
        };
        let Some(size) = caps
            .get(1)
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .map(|v| to_px(v, caps.get(2).map(|u| u.as_str())))
        else {
            continue;
        };
        let weight = regex_font_weight()
            .captures(block)
            .and_then(|c| c.get(1))
            .map(|m| css_weight_class(m.as_str()))
            .unwrap_or("regular");

        let Some((preset, allowed)) = CSS_PRESET_RANGES
            .iter()
            .find(|(_, min, max, _)| size >= *min && size < *max)
            .map(|(preset, _, _, allowed)| (*preset, *allowed))
        else {
            continue;
        };
        let variant = if allowed.contains(&weight) {
            weight
        } else {
            allowed[0]
        };

        presets.push(TextPreset {
            preset: preset.to_string(),
            variant: variant.to_string(),
            confidence_score: CSS_CONFIDENCE,
            source: PresetSource::CssInference,
            font_size: Some(size),
            font_weight: Some(weight.to_string()),
        });
    }
    presets
}

/// Weight bucket for a CSS font-weight value; unparsable values are regular.
fn css_weight_class(raw: &str) -> &'static str {
    match raw.to_lowercase().as_str() {
        "bold" | "bolder" | "extrabold" | "black" => "bold",
        "semibold" | "medium" => "medium",
        "light" | "lighter" | "thin" => "light",
        "normal" | "regular" => "regular",
        other => match other.parse::<u32>() {
            Ok(n) if n <= 300 => "light",
            Ok(n) if n <= 400 => "regular",
            Ok(n) if n <= 600 => "medium",
            Ok(_) => "bold",
            Err(_) => "regular",
        },
    }
}

fn semantic_presets(markup: &str) -> Vec<TextPreset> {
    let mut presets: Vec<TextPreset> = semantic_hints()
        .iter()
        .filter(|(re, ..)| re.is_match(markup))
        .map(|(_, preset, variant, confidence)| TextPreset {
            preset: preset.to_string(),
            variant: variant.to_string(),
            confidence_score: *confidence,
            source: PresetSource::SemanticContext,
            font_size: None,
            font_weight: None,
        })
        .collect();

    if regex_caption_context().is_match(markup) {
        presets.push(TextPreset {
            preset: "text5".to_string(),
            variant: "regular".to_string(),
            confidence_score: CAPTION_CONFIDENCE,
            source: PresetSource::SemanticContext,
            font_size: None,
            font_weight: None,
        });
    }
    presets
}

/// Keep the most confident entry per `(preset, variant)`; sort by confidence
/// descending, then by level and variant for a deterministic order.
fn consolidate_presets(candidates: Vec<TextPreset>) -> Vec<TextPreset> {
    let mut kept: Vec<TextPreset> = Vec::new();
    for candidate in candidates {
        match kept
            .iter_mut()
            .find(|p| p.preset == candidate.preset && p.variant == candidate.variant)
        {
            Some(existing) if candidate.confidence_score > existing.confidence_score => {
                *existing = candidate;
            }
            Some(_) => {}
            None => kept.push(candidate),
        }
    }
    kept.sort_by(|a, b| {
        b.confidence_score
            .total_cmp(&a.confidence_score)
            .then_with(|| a.level().cmp(&b.level()))
            .then_with(|| a.variant.cmp(&b.variant))
    });
    kept
}
