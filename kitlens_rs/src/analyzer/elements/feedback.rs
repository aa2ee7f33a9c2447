//! Feedback screens and named design-tool components.
//!
//! Design exports usually keep layer names around as `data-name`
//! attributes, class/id tokens or comment annotations. Those names are the
//! most direct hint about which catalog component a fragment was built
//! from, so they are collected, typed and expanded into the usual casing
//! variants for fuzzy matching downstream.

use std::sync::OnceLock;

use heck::{ToKebabCase, ToLowerCamelCase, ToSnakeCase, ToUpperCamelCase};
use regex::Regex;
use serde::Serialize;

use crate::analyzer::class_tokens;
use crate::analyzer::regexes::{regex, regex_data_name};

// ----------------------------------------------------------------------------
// Component names
// ----------------------------------------------------------------------------

fn regex_named_suffix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)screen|feedback|button|card|modal"))
}

fn regex_pascal_with_suffix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r"\b[A-Z][a-z0-9]+(?:[A-Z][a-z0-9]+)*(?:Screen|Feedback|Button|Card|Modal)\b")
    })
}

fn regex_comment_annotation() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r"(?is)(?:<!--|/\*)\s*@?(?:component|figma|frame|layer)\s*[:=]?\s*([A-Za-z][\w .-]{1,48}?)\s*(?:-->|\*/)")
    })
}

/// Ordered type rules; the first matching rule names the type.
fn type_rules() -> &'static [(Regex, ComponentType)] {
    static RULES: OnceLock<Vec<(Regex, ComponentType)>> = OnceLock::new();
    RULES.get_or_init(|| {
        vec![
            (
                regex(r"(?i)feedback|success|error|warning|alert|toast|snackbar"),
                ComponentType::Feedback,
            ),
            (
                regex(r"(?i)button|\bbtn|cta|touchable"),
                ComponentType::Button,
            ),
            (regex(r"(?i)card|tile"), ComponentType::Card),
            (
                regex(r"(?i)modal|dialog|sheet|popup|overlay"),
                ComponentType::Modal,
            ),
            (
                regex(r"(?i)text|title|heading|label|caption|typography|paragraph"),
                ComponentType::Text,
            ),
            (
                regex(r"(?i)nav|tab|menu|header|breadcrumb|drawer"),
                ComponentType::Navigation,
            ),
            (
                regex(r"(?i)input|field|textarea|select|checkbox|radio|switch|pin|otp"),
                ComponentType::Input,
            ),
        ]
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentType {
    Feedback,
    Button,
    Card,
    Modal,
    Text,
    Navigation,
    Input,
    Unknown,
}

impl ComponentType {
    /// Confidence attached to a name typed by this rule.
    pub fn confidence(self) -> f64 {
        match self {
            Self::Feedback => 0.9,
            Self::Button => 0.85,
            Self::Card | Self::Modal => 0.8,
            Self::Text | Self::Navigation | Self::Input => 0.7,
            Self::Unknown => 0.3,
        }
    }

    /// Best guess from the name alone.
    pub fn infer(name: &str) -> Self {
        type_rules()
            .iter()
            .find(|(rule, _)| rule.is_match(name))
            .map(|(_, kind)| *kind)
            .unwrap_or(Self::Unknown)
    }
}

/// Casing variants of a component name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NameVariants {
    pub no_space: String,
    pub camel_case: String,
    pub pascal_case: String,
    pub kebab_case: String,
    pub snake_case: String,
}

impl NameVariants {
    pub fn of(name: &str) -> Self {
        Self {
            no_space: name.split_whitespace().collect(),
            camel_case: name.to_lower_camel_case(),
            pascal_case: name.to_upper_camel_case(),
            kebab_case: name.to_kebab_case(),
            snake_case: name.to_snake_case(),
        }
    }

    /// True when `candidate` equals any variant, ignoring case.
    pub fn matches(&self, candidate: &str) -> bool {
        [
            &self.no_space,
            &self.camel_case,
            &self.pascal_case,
            &self.kebab_case,
            &self.snake_case,
        ]
        .iter()
        .any(|variant| variant.eq_ignore_ascii_case(candidate))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FigmaComponent {
    pub name: String,
    pub component_type: ComponentType,
    pub confidence_score: f64,
    pub variants: NameVariants,
}

impl FigmaComponent {
    fn from_name(name: &str) -> Self {
        let component_type = ComponentType::infer(name);
        Self {
            name: name.to_string(),
            component_type,
            confidence_score: component_type.confidence(),
            variants: NameVariants::of(name),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenericComponentSignal {
    pub found: bool,
    pub components: Vec<FigmaComponent>,
}

/// Literal component names from `data-name`, class/id tokens, comment
/// annotations and suffixed PascalCase identifiers, first occurrence kept.
pub fn extract_figma_component_names(markup: &str) -> Vec<FigmaComponent> {
    let mut names: Vec<String> = Vec::new();
    let mut add = |raw: &str| {
        let name = raw.trim();
        if !name.is_empty() && !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    };

    for caps in regex_data_name().captures_iter(markup) {
        if let Some(m) = caps.get(1) {
            add(m.as_str());
        }
    }
    for token in class_tokens(markup) {
        if regex_named_suffix().is_match(token) {
            add(token);
        }
    }
    for caps in regex_comment_annotation().captures_iter(markup) {
        if let Some(m) = caps.get(1) {
            add(m.as_str());
        }
    }
    for m in regex_pascal_with_suffix().find_iter(markup) {
        add(m.as_str());
    }

    names
        .iter()
        .map(|name| FigmaComponent::from_name(name))
        .filter(|c| !(c.name.chars().count() < 3 && c.component_type == ComponentType::Unknown))
        .collect()
}

pub fn extract_generic_components(markup: &str) -> GenericComponentSignal {
    let components = extract_figma_component_names(markup);
    if components.is_empty() {
        return GenericComponentSignal::default();
    }
    GenericComponentSignal {
        found: true,
        components,
    }
}

// ----------------------------------------------------------------------------
// Feedback screens
// ----------------------------------------------------------------------------

fn regex_feedback_screen() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r"(?i)(?:error|success|info|warning)[\s_-]*(?:feedback|screen)|(?:feedback|screen)[\s_-]*(?:error|success|info|warning)")
    })
}

fn regex_feedback_name() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)feedback|success|error|warning|\binfo|alert|toast"))
}

fn regex_illustration() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r"(?i)illustration|lottie|animation|<\s*img\b|<\s*svg\b|<\s*image\b|\bicon")
    })
}

fn regex_feedback_action() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)button|\bbtn|\bcta\b|onpress|onclick|href\s*="))
}

/// Sentiment probes in priority order.
fn feedback_kinds() -> &'static [(Regex, FeedbackKind)] {
    static RULES: OnceLock<Vec<(Regex, FeedbackKind)>> = OnceLock::new();
    RULES.get_or_init(|| {
        vec![
            (regex(r"(?i)error|fail|\berro\b"), FeedbackKind::Error),
            (regex(r"(?i)success|sucesso|\bdone\b"), FeedbackKind::Success),
            (regex(r"(?i)\binfo"), FeedbackKind::Info),
            (regex(r"(?i)warning|\bwarn\b|aviso"), FeedbackKind::Warning),
        ]
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedbackKind {
    #[default]
    Generic,
    Error,
    Success,
    Info,
    Warning,
}

impl FeedbackKind {
    /// Title-case label used in component names (`ErrorFeedback`).
    pub fn label(self) -> &'static str {
        match self {
            Self::Generic => "Generic",
            Self::Error => "Error",
            Self::Success => "Success",
            Self::Info => "Info",
            Self::Warning => "Warning",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeedbackSignal {
    pub found: bool,
    pub kind: FeedbackKind,
    /// Named components that look like feedback
    pub components: Vec<String>,
    pub has_illustration: bool,
    pub has_action: bool,
}

pub fn extract_feedback(markup: &str) -> FeedbackSignal {
    let components: Vec<String> = extract_figma_component_names(markup)
        .into_iter()
        .filter(|c| {
            c.component_type == ComponentType::Feedback || regex_feedback_name().is_match(&c.name)
        })
        .map(|c| c.name)
        .collect();
    if !regex_feedback_screen().is_match(markup) && components.is_empty() {
        return FeedbackSignal::default();
    }

    let kind = feedback_kinds()
        .iter()
        .find(|(probe, _)| probe.is_match(markup))
        .map(|(_, kind)| *kind)
        .unwrap_or_default();

    FeedbackSignal {
        found: true,
        kind,
        components,
        has_illustration: regex_illustration().is_match(markup),
        has_action: regex_feedback_action().is_match(markup),
    }
}
