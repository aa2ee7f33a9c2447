//! One-call analysis of a design export: element signals, patterns,
//! structure, per-element typography and color tokens.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use super::color_tokens::{self, ColorMapping};
use super::elements::{self, ElementSignals};
use super::patterns::{self, Complexity, PatternSignals, StructureAnalysis};
use super::regexes::{regex, regex_text_fragment};
use super::style_attributes;
use super::typography::{self, TypographySignal};

fn regex_react_components() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r#"<[A-Z][A-Za-z0-9]*[\s/>]|className\s*=|import\s+React|from\s+['"]react['"]"#)
    })
}

fn regex_typescript() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r"\binterface\s+\w+\s*\{|:\s*React\.FC\b|\btype\s+\w+\s*=|:\s*(?:string|number|boolean)\b|<\w+Props>")
    })
}

fn regex_css() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r#"(?i)style\s*=|StyleSheet\.create|\bclass(?:Name)?\s*=|[.#][\w-]+\s*\{[^{}]*:[^{}]*\}|<style\b"#)
    })
}

fn regex_images() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r"(?i)<\s*(?:img|image|svg|picture)\b|\.(?:png|jpe?g|svg|webp|gif)\b|background-image")
    })
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MarkupMetadata {
    pub has_react_components: bool,
    pub has_typescript: bool,
    pub has_css: bool,
    pub has_images: bool,
}

impl MarkupMetadata {
    pub fn detect(markup: &str) -> Self {
        Self {
            has_react_components: regex_react_components().is_match(markup),
            has_typescript: regex_typescript().is_match(markup),
            has_css: regex_css().is_match(markup),
            has_images: regex_images().is_match(markup),
        }
    }
}

/// Typography of one text-bearing element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementTypography {
    pub tag: String,
    pub text: String,
    #[serde(flatten)]
    pub typography: TypographySignal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextAnalysis {
    /// Distinct text levels in use, largest first (`text1`, `text3`, ...)
    pub hierarchy: Vec<String>,
    pub typography: Vec<ElementTypography>,
    pub colors: Vec<ColorMapping>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CombinedAnalysis {
    pub elements: ElementSignals,
    pub patterns: PatternSignals,
    pub structure: StructureAnalysis,
    pub text_analysis: TextAnalysis,
    pub metadata: MarkupMetadata,
    pub complexity: Complexity,
}

/// Run every analyzer over `markup` and merge the results.
pub fn analyze_markup(markup: &str) -> CombinedAnalysis {
    let elements = elements::extract(markup);
    let patterns = patterns::detect_patterns(markup);
    let structure = patterns::analyze_structure(markup);
    let text_analysis = analyze_text(markup);
    let complexity = patterns.complexity;

    debug!(
        families = ?elements.found_families(),
        patterns = ?patterns.active(),
        complexity = complexity.as_str(),
        "analyzed markup"
    );

    CombinedAnalysis {
        elements,
        patterns,
        structure,
        text_analysis,
        metadata: MarkupMetadata::detect(markup),
        complexity,
    }
}

/// Feed every text fragment's own style through the typography and color
/// analyzers.
fn analyze_text(markup: &str) -> TextAnalysis {
    let mut typography_list = Vec::new();
    let mut colors: Vec<ColorMapping> = Vec::new();

    for caps in regex_text_fragment().captures_iter(markup) {
        let tag = caps.get(1).map(|m| m.as_str().to_lowercase()).unwrap_or_default();
        let attributes = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
        let text = caps.get(3).map(|m| m.as_str().trim()).unwrap_or_default();
        let style = style_attributes(attributes).join("; ");

        typography_list.push(ElementTypography {
            tag: tag.clone(),
            text: text.to_string(),
            typography: typography::analyze(&style, Some(attributes)),
        });
        for mapping in color_tokens::analyze(&style, &tag, Some(attributes)) {
            if !colors.contains(&mapping) {
                colors.push(mapping);
            }
        }
    }

    let mut levels: Vec<u8> = typography_list
        .iter()
        .map(|t| t.typography.text_level.number())
        .collect();
    levels.sort_unstable();
    levels.dedup();

    TextAnalysis {
        hierarchy: levels.into_iter().map(|l| format!("text{l}")).collect(),
        typography: typography_list,
        colors,
    }
}
