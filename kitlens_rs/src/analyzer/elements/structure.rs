//! Structural element families: containers, lists, navigation, screen
//! layouts and forms.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::analyzer::regexes::regex;
use crate::analyzer::{count_matches, push_unique};

// ----------------------------------------------------------------------------
// Containers
// ----------------------------------------------------------------------------

fn regex_container_presence() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r"(?i)<\s*(?:div|view|section|article|aside|main|box|stack|card|container|paper|surface)\b|\b(?:container|wrapper|card|box|stack|panel|surface)\b")
    })
}

fn regex_container_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r"(?i)<\s*(?:div|view|section|article|aside|main|[\w.]*box|[\w.]*stack|[\w.]*card|[\w.]*container|paper|surface)\b")
    })
}

fn container_kinds() -> &'static [(&'static str, Regex)] {
    static RULES: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
    RULES.get_or_init(|| {
        vec![
            ("card", regex(r"(?i)card")),
            ("box", regex(r"(?i)\bbox\b|<\s*box\b")),
            ("stack", regex(r"(?i)stack|\bflex-col\b|\bvstack\b|\bhstack\b")),
            ("grid", regex(r"(?i)\bgrid\b|display\s*:\s*grid")),
            ("section", regex(r"(?i)<\s*section\b")),
            ("panel", regex(r"(?i)panel|paper|surface")),
            ("view", regex(r"(?i)<\s*view\b")),
        ]
    })
}

fn regex_shadow() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)shadow|elevation|drop-?shadow"))
}

fn regex_border() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)border|outline\s*:"))
}

fn regex_padding() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)padding|\bp[xytblr]?-\d+\b"))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContainerSignal {
    pub found: bool,
    pub count: usize,
    pub kinds: Vec<String>,
    pub has_shadow: bool,
    pub has_border: bool,
    pub has_padding: bool,
}

pub fn extract_containers(markup: &str) -> ContainerSignal {
    if !regex_container_presence().is_match(markup) {
        return ContainerSignal::default();
    }

    let mut kinds = Vec::new();
    for (kind, probe) in container_kinds().iter() {
        if probe.is_match(markup) {
            push_unique(&mut kinds, *kind);
        }
    }

    ContainerSignal {
        found: true,
        count: count_matches(regex_container_tag(), markup).max(1),
        kinds,
        has_shadow: regex_shadow().is_match(markup),
        has_border: regex_border().is_match(markup),
        has_padding: regex_padding().is_match(markup),
    }
}

// ----------------------------------------------------------------------------
// Lists
// ----------------------------------------------------------------------------

fn regex_list_presence() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r"(?i)<\s*(?:ul|ol|li|flatlist|sectionlist|virtualizedlist)\b|(?:^|[^\w-])(?:list|row)(?:-?item)?\b|(?-i:[a-z](?:List|Row))\b|list-?item|\.map\(")
    })
}

fn regex_list_item() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)<\s*(?:li|[\w.]*row|[\w.]*item|[\w.]*listitem)\b"))
}

fn list_types() -> &'static [(&'static str, Regex)] {
    static RULES: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
    RULES.get_or_init(|| {
        vec![
            ("unordered", regex(r"(?i)<\s*ul\b")),
            ("ordered", regex(r"(?i)<\s*ol\b")),
            (
                "virtualized",
                regex(r"(?i)flatlist|sectionlist|virtualizedlist|recyclerview"),
            ),
            ("mapped", regex(r"\.map\(|v-for|\*ngFor")),
            ("rows", regex(r"(?:^|[^\w-])(?i:row)(?:-?item)?\b|[a-z]Row\b")),
        ]
    })
}

fn regex_list_icons() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)icon|<svg\b|chevron|avatar"))
}

fn regex_list_navigation() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r"(?i)chevron|arrow-?right|caret-?right|onpress|onclick|href\s*=|navigate|›")
    })
}

fn regex_list_dividers() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)divider|separator|<\s*hr\b|border-b\b|border-bottom"))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListSignal {
    pub found: bool,
    pub count: usize,
    pub item_count: usize,
    pub list_types: Vec<String>,
    pub has_icons: bool,
    /// Rows lead somewhere (chevrons, press handlers, links)
    pub has_navigation: bool,
    pub has_dividers: bool,
}

pub fn extract_lists(markup: &str) -> ListSignal {
    if !regex_list_presence().is_match(markup) {
        return ListSignal::default();
    }

    let mut found_types = Vec::new();
    for (kind, probe) in list_types().iter() {
        if probe.is_match(markup) {
            push_unique(&mut found_types, *kind);
        }
    }

    ListSignal {
        found: true,
        count: count_matches(regex_list_presence(), markup).max(1),
        item_count: count_matches(regex_list_item(), markup),
        list_types: found_types,
        has_icons: regex_list_icons().is_match(markup),
        has_navigation: regex_list_navigation().is_match(markup),
        has_dividers: regex_list_dividers().is_match(markup),
    }
}

// ----------------------------------------------------------------------------
// Navigation
// ----------------------------------------------------------------------------

fn nav_kinds() -> &'static [(&'static str, Regex)] {
    static RULES: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
    RULES.get_or_init(|| {
        vec![
            ("navbar", regex(r"(?i)<\s*nav\b|nav-?bar|navigation-?bar|app-?bar|top-?bar")),
            ("tabs", regex(r"(?i)tab-?bar|\btabs?\b|<\s*tabs?\b|bottom-?tab")),
            ("breadcrumb", regex(r"(?i)breadcrumb")),
            ("menu", regex(r"(?i)\bmenu\b|<\s*menu|dropdown-?menu")),
            ("drawer", regex(r"(?i)drawer|sidebar|side-?nav")),
            ("header", regex(r"(?i)<\s*header\b|\bheader\b")),
        ]
    })
}

fn regex_nav_item() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)<\s*(?:a|navlink|link|tab|menuitem|[\w.]*navitem)\b"))
}

fn regex_back_button() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r"(?i)back-?button|btn-back|arrow-?back|arrow-?left|chevron-?left|go-?back|\bvoltar\b")
    })
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NavigationSignal {
    pub found: bool,
    pub kinds: Vec<String>,
    pub item_count: usize,
    pub has_back_button: bool,
}

pub fn extract_navigation(markup: &str) -> NavigationSignal {
    let mut kinds = Vec::new();
    for (kind, probe) in nav_kinds().iter() {
        if probe.is_match(markup) {
            push_unique(&mut kinds, *kind);
        }
    }
    let has_back_button = regex_back_button().is_match(markup);
    if kinds.is_empty() && !has_back_button {
        return NavigationSignal::default();
    }

    NavigationSignal {
        found: true,
        kinds,
        item_count: count_matches(regex_nav_item(), markup),
        has_back_button,
    }
}

// ----------------------------------------------------------------------------
// Layouts
// ----------------------------------------------------------------------------

fn regex_fixed_footer() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r"(?i)(?:fixed|sticky)[\s_-]*(?:footer|bottom)|(?:footer|bottom)[\s_-]*(?:fixed|sticky)|position\s*:\s*['\x22]?(?:fixed|sticky|absolute)['\x22]?[^{}]{0,80}?\bbottom\s*:")
    })
}

fn regex_fixed_header() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r"(?i)(?:fixed|sticky)[\s_-]*(?:header|top)|(?:header|top)[\s_-]*(?:fixed|sticky)|position\s*:\s*['\x22]?(?:fixed|sticky)['\x22]?[^{}]{0,80}?\btop\s*:")
    })
}

fn regex_modal() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)modal|overlay|dialog|bottom-?sheet|popup|backdrop"))
}

fn regex_any_button() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)button|\bbtn\b|\bbtn-|touchable|pressable"))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutType {
    FixedFooterWithButton,
    FixedFooter,
    FixedHeader,
    Modal,
    #[default]
    Standard,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LayoutSignal {
    pub found: bool,
    pub has_fixed_footer: bool,
    pub has_fixed_header: bool,
    pub has_modal: bool,
    pub has_button_in_footer: bool,
    pub layout_type: LayoutType,
}

pub fn extract_layouts(markup: &str) -> LayoutSignal {
    let has_fixed_footer = regex_fixed_footer().is_match(markup);
    let has_fixed_header = regex_fixed_header().is_match(markup);
    let has_modal = regex_modal().is_match(markup);
    if !(has_fixed_footer || has_fixed_header || has_modal) {
        return LayoutSignal::default();
    }
    let has_button_in_footer = has_fixed_footer && regex_any_button().is_match(markup);

    // first match wins
    let chain = [
        (has_button_in_footer, LayoutType::FixedFooterWithButton),
        (has_fixed_footer, LayoutType::FixedFooter),
        (has_fixed_header, LayoutType::FixedHeader),
        (has_modal, LayoutType::Modal),
    ];
    let layout_type = chain
        .into_iter()
        .find_map(|(hit, layout)| hit.then_some(layout))
        .unwrap_or_default();

    LayoutSignal {
        found: true,
        has_fixed_footer,
        has_fixed_header,
        has_modal,
        has_button_in_footer,
        layout_type,
    }
}

// ----------------------------------------------------------------------------
// Forms
// ----------------------------------------------------------------------------

fn regex_form_keyword() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r#"(?i)<\s*form\b|\bform\b|onsubmit|handlesubmit|type\s*=\s*["']submit["']"#)
    })
}

fn regex_form_field() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)<\s*(?:input|textarea|select|textinput|textfield|[\w.]*input)\b"))
}

fn regex_form_submit() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r#"(?i)type\s*=\s*["']submit["']|onsubmit|handlesubmit|\bsubmit\b|\bsend\b|\bsave\b|\benviar\b|\bsalvar\b"#)
    })
}

fn regex_form_validation() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r"(?i)\brequired\b|pattern\s*=|aria-invalid|validat|error-?message|helper-?text")
    })
}

fn regex_form_label() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?is)<\s*label\b[^>]*>([^<]+)<"))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormSignal {
    pub found: bool,
    pub field_count: usize,
    pub has_submit: bool,
    pub has_validation: bool,
    pub labels: Vec<String>,
}

/// A form is an explicit form construct or two or more fields together.
pub fn extract_forms(markup: &str) -> FormSignal {
    let field_count = count_matches(regex_form_field(), markup);
    if !regex_form_keyword().is_match(markup) && field_count < 2 {
        return FormSignal::default();
    }

    let mut labels = Vec::new();
    for caps in regex_form_label().captures_iter(markup) {
        if let Some(label) = caps.get(1).map(|m| m.as_str().trim()).filter(|l| !l.is_empty()) {
            push_unique(&mut labels, label);
        }
    }

    FormSignal {
        found: true,
        field_count,
        has_submit: regex_form_submit().is_match(markup),
        has_validation: regex_form_validation().is_match(markup),
        labels,
    }
}
