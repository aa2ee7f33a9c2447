//! Coarse structural patterns of a markup blob and its overall complexity.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use super::elements::extract_spacing;
use super::regexes::{regex, regex_attribute, regex_opening_tag, regex_tag_token};
use super::{any_match, count_matches};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    #[default]
    Low,
    Medium,
    High,
}

impl Complexity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    fn from_score(score: usize) -> Self {
        if score > 50 {
            Self::High
        } else if score > 20 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PatternSignals {
    pub list: bool,
    pub card: bool,
    pub form: bool,
    pub navigation: bool,
    pub modal: bool,
    pub table: bool,
    pub header: bool,
    pub footer: bool,
    pub complexity: Complexity,
}

impl PatternSignals {
    /// Names of the patterns that are present.
    pub fn active(&self) -> Vec<&'static str> {
        [
            ("list", self.list),
            ("card", self.card),
            ("form", self.form),
            ("navigation", self.navigation),
            ("modal", self.modal),
            ("table", self.table),
            ("header", self.header),
            ("footer", self.footer),
        ]
        .into_iter()
        .filter_map(|(name, on)| on.then_some(name))
        .collect()
    }
}

fn regex_iteration() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"\.map\(|\.forEach\(|v-for\s*=|\*ngFor|\{#each\b|\bfor\s*\("))
}

fn regex_list_container() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r"(?i)<\s*(?:ul|ol)\b|flatlist|sectionlist|listview|recyclerview|virtualizedlist")
    })
}

fn regex_list_keyword() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)row|item|list|<\s*li\b"))
}

fn regex_card_keyword() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)card|shadow|elevation"))
}

fn regex_box_decoration() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)padding|border"))
}

fn regex_form() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r#"(?i)<\s*(?:form|input|textarea|select|textinput|textfield)\b|onsubmit|type\s*=\s*["']submit"#)
    })
}

fn regex_navigation() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r"(?i)<\s*nav\b|navbar|nav-bar|tab-?bar|breadcrumb|\bmenu\b|navigation|drawer|\btabs?\b")
    })
}

fn regex_modal() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)modal|dialog|overlay|popup|bottom-?sheet|backdrop"))
}

fn regex_table() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r"(?i)<\s*(?:table|thead|tbody|tr|td|th)\b|datatable|data-?grid|\btable\b")
    })
}

fn regex_header() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)<\s*header\b|header|app-?bar|top-?bar|toolbar"))
}

fn regex_footer() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)<\s*footer\b|footer|bottom-?bar"))
}

/// Independent probes for every pattern plus the complexity bucket.
pub fn detect_patterns(markup: &str) -> PatternSignals {
    PatternSignals {
        list: has_list_pattern(markup),
        card: regex_card_keyword().is_match(markup)
            || (max_tag_depth(markup) > 4 && regex_box_decoration().is_match(markup)),
        form: regex_form().is_match(markup),
        navigation: regex_navigation().is_match(markup),
        modal: regex_modal().is_match(markup),
        table: regex_table().is_match(markup),
        header: regex_header().is_match(markup),
        footer: regex_footer().is_match(markup),
        complexity: complexity(markup),
    }
}

/// Repetition (same tag three times, an iteration construct or a list
/// container) together with a list-like keyword.
fn has_list_pattern(markup: &str) -> bool {
    let repeated = has_repeated_tag(markup)
        || any_match(&[regex_iteration(), regex_list_container()], markup);
    repeated && regex_list_keyword().is_match(markup)
}

fn has_repeated_tag(markup: &str) -> bool {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for caps in regex_opening_tag().captures_iter(markup) {
        if let Some(tag) = caps.get(1) {
            *counts.entry(tag.as_str().to_lowercase()).or_default() += 1;
        }
    }
    counts
        .iter()
        .any(|(tag, count)| *count >= 3 && !matches!(tag.as_str(), "div" | "span" | "view" | "br"))
}

const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Deepest element nesting, from opening/closing tags.
pub fn max_tag_depth(markup: &str) -> usize {
    let mut stack: Vec<String> = Vec::new();
    let mut deepest = 0;
    for caps in regex_tag_token().captures_iter(markup) {
        let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
        let self_closing = caps.get(3).is_some_and(|m| !m.as_str().is_empty());
        let Some(name) = caps.get(2).map(|m| m.as_str().to_lowercase()) else {
            continue;
        };

        if closing {
            if let Some(pos) = stack.iter().rposition(|open| *open == name) {
                stack.truncate(pos);
            }
        } else if !self_closing && !VOID_TAGS.contains(&name.as_str()) {
            stack.push(name);
            deepest = deepest.max(stack.len());
        } else {
            deepest = deepest.max(stack.len() + 1);
        }
    }
    deepest
}

/// Deepest indentation, two spaces or one tab per level.
pub fn max_indent_level(markup: &str) -> usize {
    markup
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let mut spaces = 0;
            let mut tabs = 0;
            for c in line.chars() {
                match c {
                    ' ' => spaces += 1,
                    '\t' => tabs += 1,
                    _ => break,
                }
            }
            spaces / 2 + tabs
        })
        .max()
        .unwrap_or(0)
}

/// `2 x tags + deepest indentation + attributes`, bucketed at 20 and 50.
pub fn complexity_score(markup: &str) -> usize {
    2 * count_matches(regex_opening_tag(), markup)
        + max_indent_level(markup)
        + count_matches(regex_attribute(), markup)
}

pub fn complexity(markup: &str) -> Complexity {
    Complexity::from_score(complexity_score(markup))
}

// ----------------------------------------------------------------------------
// Structure analysis
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StructureLayout {
    Grid,
    Row,
    Column,
    Absolute,
    #[default]
    Block,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    Center,
    Start,
    End,
    SpaceBetween,
    Stretch,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacingDensity {
    #[default]
    None,
    Tight,
    Normal,
    Loose,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StructureAnalysis {
    pub has_nested_elements: bool,
    pub layout_type: StructureLayout,
    pub repetitive_elements: bool,
    /// Buttons, links, inputs and press/click handlers
    pub interaction_elements: usize,
    pub spacing: SpacingDensity,
    pub alignment: Alignment,
}

fn layout_rules() -> &'static [(Regex, StructureLayout)] {
    static RULES: OnceLock<Vec<(Regex, StructureLayout)>> = OnceLock::new();
    RULES.get_or_init(|| {
        vec![
            (
                regex(r"(?i)display\s*:\s*['\x22]?grid|\bgrid-cols|\bgrid\b"),
                StructureLayout::Grid,
            ),
            (
                regex(r"(?i)flex-row\b|flex-?direction\s*:\s*['\x22]?row|<\s*hstack\b|<\s*row\b|display\s*:\s*['\x22]?flex"),
                StructureLayout::Row,
            ),
            (
                regex(r"(?i)flex-col\b|flex-?direction\s*:\s*['\x22]?column|<\s*vstack\b|<\s*column\b|<\s*stack\b"),
                StructureLayout::Column,
            ),
            (
                regex(r"(?i)position\s*:\s*['\x22]?absolute|\babsolute\b"),
                StructureLayout::Absolute,
            ),
        ]
    })
}

fn alignment_rules() -> &'static [(Regex, Alignment)] {
    static RULES: OnceLock<Vec<(Regex, Alignment)>> = OnceLock::new();
    RULES.get_or_init(|| {
        vec![
            (
                regex(r"(?i)space-between|justify-between"),
                Alignment::SpaceBetween,
            ),
            (
                regex(r"(?i)(?:justify|items|content|align|text)-center|(?:justify-?content|align-?items|text-?align)\s*:\s*['\x22]?center"),
                Alignment::Center,
            ),
            (
                regex(r"(?i)flex-start|justify-start|items-start|text-left|text-?align\s*:\s*['\x22]?left"),
                Alignment::Start,
            ),
            (
                regex(r"(?i)flex-end|justify-end|items-end|text-right|text-?align\s*:\s*['\x22]?right"),
                Alignment::End,
            ),
            (regex(r"(?i)stretch"), Alignment::Stretch),
        ]
    })
}

fn regex_interaction() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r"(?i)<\s*(?:button|a|input|select|textarea|[\w.]*touchable\w*|pressable)\b|\bon(?:click|press|change|submit)\s*=")
    })
}

/// First matching rule in a priority list.
fn first_rule<T: Copy>(rules: &[(Regex, T)], markup: &str) -> Option<T> {
    rules
        .iter()
        .find(|(probe, _)| probe.is_match(markup))
        .map(|(_, value)| *value)
}

pub fn analyze_structure(markup: &str) -> StructureAnalysis {
    let values = extract_spacing(markup).values;
    let spacing = if values.is_empty() {
        SpacingDensity::None
    } else {
        let average = values.iter().sum::<f64>() / values.len() as f64;
        if average <= 8.0 {
            SpacingDensity::Tight
        } else if average <= 20.0 {
            SpacingDensity::Normal
        } else {
            SpacingDensity::Loose
        }
    };

    StructureAnalysis {
        has_nested_elements: max_tag_depth(markup) > 1,
        layout_type: first_rule(layout_rules(), markup).unwrap_or_default(),
        repetitive_elements: has_repeated_tag(markup) || regex_iteration().is_match(markup),
        interaction_elements: count_matches(regex_interaction(), markup),
        spacing,
        alignment: first_rule(alignment_rules(), markup).unwrap_or_default(),
    }
}
