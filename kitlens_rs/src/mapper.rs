//! Ranking catalog components against a markup analysis.
//!
//! Suggestions come from four sources, merged and ranked together:
//!
//! 1. fixed high-confidence cases (fixed footer with a button, PIN / code
//!    fields) matched by keyword against name and description
//! 2. per-family candidate names, scored from the family's sub-signals and
//!    adjusted by category, spacing, complexity and naming rules
//! 3. design-tool layer names that equal a catalog name
//! 4. canonical components for each detected structural pattern
//!
//! The merged list is sorted by score (stable), deduplicated by name and
//! truncated to at most [`MAX_SUGGESTIONS`].

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::analyzer::CombinedAnalysis;
use crate::analyzer::elements::{
    ButtonPosition, ButtonVariant, ElementSignals, FeedbackKind, LayoutType, SpacingPattern,
};
use crate::analyzer::patterns::{Complexity, PatternSignals, StructureAnalysis, StructureLayout};
use crate::catalog::{CatalogComponent, Category, find_by_name};

pub const MAX_SUGGESTIONS: usize = 10;

const FIXED_FOOTER_SCORE: i32 = 95;
const SECURITY_SCORE: i32 = 90;
const FIXED_FOOTER_KEYWORDS: &[&str] = &["layout", "footer", "fixed", "button"];
const SECURITY_KEYWORDS: &[&str] = &["pin", "code", "security", "otp", "verification"];

const FAMILY_KEYWORD_BONUS: i32 = 30;
const SPACING_KEYWORDS: &[&str] = &["stack", "box", "container", "grid", "flex"];

/// Where a suggestion came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionSource {
    SpecialCase,
    Family,
    NamedComponent,
    Pattern,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentSuggestion {
    pub component: CatalogComponent,
    pub score: u32,
    pub reason: String,
    pub source: SuggestionSource,
}

/// Element family a candidate was proposed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Buttons,
    Texts,
    Lists,
    Containers,
    Icons,
    Inputs,
    Navigation,
    Feedback,
}

impl Family {
    fn as_str(self) -> &'static str {
        match self {
            Self::Buttons => "buttons",
            Self::Texts => "texts",
            Self::Lists => "lists",
            Self::Containers => "containers",
            Self::Icons => "icons",
            Self::Inputs => "inputs",
            Self::Navigation => "navigation",
            Self::Feedback => "feedback",
        }
    }

    fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Buttons => &["button"],
            Self::Texts => &["text"],
            Self::Lists => &["list", "row"],
            Self::Containers => &["box", "container", "card", "stack"],
            Self::Icons => &["icon"],
            Self::Inputs => &["input", "field"],
            Self::Navigation => &["nav", "tab", "header"],
            Self::Feedback => &["feedback"],
        }
    }
}

/// A catalog name proposed by a family rule, before resolution.
struct Candidate {
    family: Family,
    name: String,
    base: i32,
    reason: &'static str,
}

impl Candidate {
    fn new(family: Family, name: impl Into<String>, base: i32, reason: &'static str) -> Self {
        Self {
            family,
            name: name.into(),
            base,
            reason,
        }
    }
}

/// Catalog components whose name or description mentions any keyword.
pub fn find_components_by_pattern<'a>(
    catalog: &'a [CatalogComponent],
    keywords: &[&str],
) -> Vec<&'a CatalogComponent> {
    catalog
        .iter()
        .filter(|component| {
            let name = component.name.to_lowercase();
            let description = component.description.to_lowercase();
            keywords
                .iter()
                .any(|k| name.contains(k) || description.contains(k))
        })
        .collect()
}

/// Complexity a component is expected to carry, judged by its name.
fn expected_complexity(name: &str) -> Complexity {
    const HIGH: &[&str] = &["list", "layout", "form", "table", "modal", "screen", "page", "navigation"];
    const MEDIUM: &[&str] = &["card", "row", "field", "input", "tab", "header", "footer", "box", "stack"];
    let name = name.to_lowercase();
    if HIGH.iter().any(|k| name.contains(k)) {
        Complexity::High
    } else if MEDIUM.iter().any(|k| name.contains(k)) {
        Complexity::Medium
    } else {
        Complexity::Low
    }
}

fn complexity_bonus(actual: Complexity, expected: Complexity) -> i32 {
    match (expected, actual) {
        (Complexity::High, Complexity::High) => 20,
        (Complexity::Medium, Complexity::Medium) => 15,
        (Complexity::Low, Complexity::Low) => 10,
        (Complexity::Medium, Complexity::Low) => 5,
        (Complexity::High, _) => -10,
        _ => 0,
    }
}

/// Maps analysis signals onto a catalog.
#[derive(Debug, Clone, Copy)]
pub struct ComponentMapper<'a> {
    catalog: &'a [CatalogComponent],
    limit: usize,
}

impl<'a> ComponentMapper<'a> {
    pub fn new(catalog: &'a [CatalogComponent]) -> Self {
        Self {
            catalog,
            limit: MAX_SUGGESTIONS,
        }
    }

    /// Result size, clamped to `1..=MAX_SUGGESTIONS`.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.clamp(1, MAX_SUGGESTIONS);
        self
    }

    pub fn map(
        &self,
        elements: &ElementSignals,
        structure: &StructureAnalysis,
        patterns: &PatternSignals,
    ) -> Vec<ComponentSuggestion> {
        let mut suggestions = self.special_cases(elements);
        suggestions.extend(self.family_suggestions(elements, structure, patterns));
        suggestions.extend(self.named_component_suggestions(elements));
        suggestions.extend(self.pattern_suggestions(patterns));

        suggestions.sort_by(|a, b| b.score.cmp(&a.score));
        let mut seen = HashSet::new();
        suggestions.retain(|s| seen.insert(s.component.name.to_lowercase()));
        suggestions.truncate(self.limit);

        debug!(
            count = suggestions.len(),
            top = suggestions.first().map(|s| s.component.name.as_str()),
            "mapped components"
        );
        suggestions
    }

    fn special_cases(&self, elements: &ElementSignals) -> Vec<ComponentSuggestion> {
        let mut suggestions = Vec::new();

        if elements.layouts.layout_type == LayoutType::FixedFooterWithButton {
            for component in find_components_by_pattern(self.catalog, FIXED_FOOTER_KEYWORDS) {
                suggestions.push(ComponentSuggestion {
                    component: component.clone(),
                    score: FIXED_FOOTER_SCORE as u32,
                    reason: "fixed footer layout with an action button".to_string(),
                    source: SuggestionSource::SpecialCase,
                });
            }
        }

        let security = &elements.security;
        if security.has_pin_input || security.has_code_input || security.has_otp {
            for component in find_components_by_pattern(self.catalog, SECURITY_KEYWORDS) {
                suggestions.push(ComponentSuggestion {
                    component: component.clone(),
                    score: SECURITY_SCORE as u32,
                    reason: "PIN / security code input".to_string(),
                    source: SuggestionSource::SpecialCase,
                });
            }
        }
        suggestions
    }

    fn family_suggestions(
        &self,
        elements: &ElementSignals,
        structure: &StructureAnalysis,
        patterns: &PatternSignals,
    ) -> Vec<ComponentSuggestion> {
        family_candidates(elements, structure)
            .into_iter()
            .filter_map(|candidate| {
                let component = find_by_name(self.catalog, &candidate.name)?;
                let score = self.adjusted_score(&candidate, component, elements, patterns);
                Some(ComponentSuggestion {
                    component: component.clone(),
                    score,
                    reason: format!("{}: {}", candidate.family.as_str(), candidate.reason),
                    source: SuggestionSource::Family,
                })
            })
            .collect()
    }

    fn adjusted_score(
        &self,
        candidate: &Candidate,
        component: &CatalogComponent,
        elements: &ElementSignals,
        patterns: &PatternSignals,
    ) -> u32 {
        let name = component.name.to_lowercase();
        let mut score = candidate.base;

        if candidate.family.keywords().iter().any(|k| name.contains(k)) {
            score += FAMILY_KEYWORD_BONUS;
        }
        score += component.category.mapping_bonus();
        score += spacing_bonus(candidate.family, component, elements);
        score += complexity_bonus(patterns.complexity, expected_complexity(&name));

        match candidate.family {
            Family::Lists if !(name.contains("list") || name.contains("row")) => score -= 20,
            Family::Buttons if !(name.contains("button") || name.contains("touchable")) => {
                score -= 15
            }
            _ => {}
        }

        score.max(0) as u32
    }

    fn named_component_suggestions(&self, elements: &ElementSignals) -> Vec<ComponentSuggestion> {
        let mut suggestions = Vec::new();
        for named in &elements.generic_components.components {
            let Some(component) = self
                .catalog
                .iter()
                .find(|c| named.variants.matches(&c.name))
            else {
                continue;
            };
            let score = (named.confidence_score * 100.0).round().clamp(60.0, 92.0) as u32;
            suggestions.push(ComponentSuggestion {
                component: component.clone(),
                score,
                reason: format!("layer named \"{}\"", named.name),
                source: SuggestionSource::NamedComponent,
            });
        }
        suggestions
    }

    fn pattern_suggestions(&self, patterns: &PatternSignals) -> Vec<ComponentSuggestion> {
        let table: [(bool, &str, &[(&str, u32)]); 5] = [
            (patterns.list, "list", &[("List", 85)]),
            (patterns.card, "card", &[("Card", 85), ("Box", 80)]),
            (patterns.form, "form", &[("Form", 85), ("TextField", 80)]),
            (patterns.navigation, "navigation", &[("NavBar", 85), ("Tabs", 80)]),
            (
                patterns.modal,
                "modal",
                &[("Modal", 90), ("Dialog", 85), ("BottomSheet", 85)],
            ),
        ];

        let mut suggestions = Vec::new();
        for (active, pattern, names) in table {
            if !active {
                continue;
            }
            for (name, score) in names {
                if let Some(component) = find_by_name(self.catalog, name) {
                    suggestions.push(ComponentSuggestion {
                        component: component.clone(),
                        score: *score,
                        reason: format!("{pattern} pattern"),
                        source: SuggestionSource::Pattern,
                    });
                }
            }
        }
        suggestions
    }
}

fn spacing_bonus(family: Family, component: &CatalogComponent, elements: &ElementSignals) -> i32 {
    let spacing = &elements.spacing;
    if !spacing.found {
        return 0;
    }
    let name = component.name.to_lowercase();
    let spacing_named = SPACING_KEYWORDS.iter().any(|k| name.contains(k));
    let layout_ish = component.category == Category::Layout || spacing_named;

    let mut bonus = 0;
    if layout_ish {
        if spacing.design_system_aligned {
            bonus += 25;
        } else if spacing.pattern == SpacingPattern::Consistent {
            bonus += 15;
        }
    }
    if spacing_named {
        bonus += 20;
    }
    if spacing.pattern == SpacingPattern::Mixed
        && (family == Family::Containers || component.category == Category::Layout)
    {
        bonus -= 10;
    }
    bonus
}

/// Candidate names per detected family, most specific first.
fn family_candidates(elements: &ElementSignals, structure: &StructureAnalysis) -> Vec<Candidate> {
    use Family::*;
    let mut out = Vec::new();

    let buttons = &elements.buttons;
    if buttons.found {
        if buttons.has_variant(ButtonVariant::Icon) {
            out.push(Candidate::new(Buttons, "IconButton", 90, "icon button"));
        }
        if buttons.has_variant(ButtonVariant::Primary) {
            out.push(Candidate::new(Buttons, "ButtonPrimary", 85, "primary button"));
        }
        if buttons.has_variant(ButtonVariant::Secondary) {
            out.push(Candidate::new(Buttons, "ButtonSecondary", 80, "secondary button"));
        }
        if buttons.has_variant(ButtonVariant::Danger) {
            out.push(Candidate::new(Buttons, "ButtonDanger", 80, "destructive button"));
        }
        if buttons.has_variant(ButtonVariant::Link) {
            out.push(Candidate::new(Buttons, "ButtonLink", 75, "link-styled button"));
            out.push(Candidate::new(Buttons, "Link", 65, "link-styled button"));
        }
        if buttons.has_position(ButtonPosition::Footer) {
            out.push(Candidate::new(Buttons, "ButtonGroup", 60, "buttons in a footer"));
        }
        out.push(Candidate::new(Buttons, "Button", 80, "button"));
        out.push(Candidate::new(Buttons, "Touchable", 45, "pressable element"));
    }

    let texts = &elements.texts;
    if texts.found {
        let has_heading = texts
            .hierarchy
            .iter()
            .any(|h| matches!(h.as_str(), "h1" | "h2" | "text-preset-1" | "text-preset-2" | "text-preset-3"));
        if has_heading {
            out.push(Candidate::new(Texts, "Heading", 85, "heading text"));
            out.push(Candidate::new(Texts, "Title", 75, "heading text"));
        }
        out.push(Candidate::new(Texts, "Text", 80, "text content"));
        out.push(Candidate::new(Texts, "Typography", 60, "text content"));
    }

    let lists = &elements.lists;
    if lists.found {
        if lists.has_navigation && lists.has_icons {
            out.push(Candidate::new(Lists, "BoxedRowList", 95, "navigable rows with icons"));
            out.push(Candidate::new(Lists, "BoxedRow", 90, "navigable rows with icons"));
        } else if lists.has_navigation {
            out.push(Candidate::new(Lists, "NavigationList", 85, "navigable rows"));
        }
        out.push(Candidate::new(Lists, "List", 80, "list"));
        out.push(Candidate::new(Lists, "ListItem", 75, "list items"));
        out.push(Candidate::new(Lists, "Row", 70, "rows"));
        if lists.has_dividers {
            out.push(Candidate::new(Lists, "Divider", 55, "separated rows"));
        }
    }

    let containers = &elements.containers;
    if containers.found {
        let has_kind = |kind: &str| containers.kinds.iter().any(|k| k == kind);
        if has_kind("card") || containers.has_shadow {
            out.push(Candidate::new(Containers, "Card", 85, "elevated container"));
        }
        if has_kind("grid") || structure.layout_type == StructureLayout::Grid {
            out.push(Candidate::new(Containers, "Grid", 75, "grid layout"));
        }
        if has_kind("stack")
            || matches!(structure.layout_type, StructureLayout::Row | StructureLayout::Column)
        {
            out.push(Candidate::new(Containers, "Stack", 75, "stacked layout"));
        }
        out.push(Candidate::new(Containers, "Box", 70, "container"));
        out.push(Candidate::new(Containers, "Container", 65, "container"));
    }

    if elements.icons.found {
        out.push(Candidate::new(Icons, "Icon", 85, "icon"));
        out.push(Candidate::new(Icons, "Svg", 40, "vector graphic"));
    }

    let inputs = &elements.inputs;
    if inputs.found {
        if inputs.has_type("password") {
            out.push(Candidate::new(Inputs, "PasswordInput", 85, "password field"));
        }
        if inputs.has_type("checkbox") {
            out.push(Candidate::new(Inputs, "Checkbox", 80, "checkbox"));
        }
        out.push(Candidate::new(Inputs, "TextField", 85, "text field"));
        out.push(Candidate::new(Inputs, "Input", 80, "text field"));
        out.push(Candidate::new(Inputs, "TextInput", 75, "text field"));
        if inputs.has_validation || inputs.has_labels {
            out.push(Candidate::new(Inputs, "FormField", 70, "labelled field"));
        }
    }

    let navigation = &elements.navigation;
    if navigation.found {
        let has_kind = |kind: &str| navigation.kinds.iter().any(|k| k == kind);
        if has_kind("tabs") {
            out.push(Candidate::new(Navigation, "Tabs", 85, "tabs"));
            out.push(Candidate::new(Navigation, "TabBar", 80, "tabs"));
        }
        if has_kind("navbar") {
            out.push(Candidate::new(Navigation, "NavBar", 85, "navigation bar"));
        }
        if has_kind("header") || has_kind("navbar") {
            out.push(Candidate::new(Navigation, "Header", 80, "screen header"));
        }
        if navigation.has_back_button {
            out.push(Candidate::new(Navigation, "BackButton", 80, "back navigation"));
        }
        if has_kind("breadcrumb") {
            out.push(Candidate::new(Navigation, "Breadcrumb", 80, "breadcrumb"));
        }
        if has_kind("menu") {
            out.push(Candidate::new(Navigation, "Menu", 75, "menu"));
        }
        if has_kind("drawer") {
            out.push(Candidate::new(Navigation, "Drawer", 75, "drawer"));
        }
    }

    let feedback = &elements.feedback;
    if feedback.found {
        if feedback.kind != FeedbackKind::Generic {
            out.push(Candidate::new(
                Feedback,
                format!("{}Feedback", feedback.kind.label()),
                90,
                "feedback screen",
            ));
        }
        out.push(Candidate::new(Feedback, "FeedbackScreen", 85, "feedback screen"));
        out.push(Candidate::new(Feedback, "Alert", 70, "feedback message"));
        out.push(Candidate::new(Feedback, "Toast", 60, "feedback message"));
    }

    out
}

/// Rank catalog components for a full markup analysis.
pub fn map_to_components(
    analysis: &CombinedAnalysis,
    catalog: &[CatalogComponent],
) -> Vec<ComponentSuggestion> {
    ComponentMapper::new(catalog).map(&analysis.elements, &analysis.structure, &analysis.patterns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze_markup;
    use crate::analyzer::elements::SpacingSignal;

    fn component(name: &str, category: Category, description: &str) -> CatalogComponent {
        CatalogComponent::new(name, category, description)
    }

    fn catalog() -> Vec<CatalogComponent> {
        vec![
            component("Button", Category::Components, "Standard button"),
            component("ButtonPrimary", Category::Components, "Primary action"),
            component("IconButton", Category::Components, "Icon-only action"),
            component("FixedFooter", Category::Layout, "Fixed footer layout"),
            component("PinInput", Category::Components, "Digit entry"),
            component("BoxedRowList", Category::Components, "Grouped rows"),
            component("BoxedRow", Category::Components, "Single grouped row"),
            component("Divider", Category::Components, "Horizontal rule"),
            component("Icon", Category::Icons, "Vector icon"),
            component("Stack", Category::Layout, "Vertical stack"),
            component("Card", Category::Components, "Elevated surface"),
            component("ProductCard", Category::Patterns, "Product tile"),
            component("ErrorFeedback", Category::Feedback, "Error screen"),
            component("FeedbackScreen", Category::Feedback, "Generic result screen"),
            component("Modal", Category::Components, "Overlay"),
        ]
    }

    fn names(suggestions: &[ComponentSuggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.component.name.as_str()).collect()
    }

    #[test]
    fn test_fixed_footer_with_button_special_case() {
        let catalog = catalog();
        let analysis = analyze_markup(
            r#"<footer class="fixed-footer"><button class="btn-primary">Continuar</button></footer>"#,
        );
        let suggestions = map_to_components(&analysis, &catalog);
        let footer = suggestions
            .iter()
            .find(|s| s.component.name == "FixedFooter")
            .expect("fixed footer suggested");
        assert_eq!(footer.score, 95);
        assert_eq!(footer.source, SuggestionSource::SpecialCase);
    }

    #[test]
    fn test_pin_special_case() {
        let catalog = catalog();
        let analysis = analyze_markup(r#"<View><Text>Digite seu PIN</Text><PinField length={4} /></View>"#);
        let suggestions = map_to_components(&analysis, &catalog);
        let pin = suggestions
            .iter()
            .find(|s| s.component.name == "PinInput")
            .expect("pin input suggested");
        assert_eq!(pin.score, 90);
    }

    #[test]
    fn test_boxed_rows_for_navigable_icon_lists() {
        let catalog = catalog();
        let analysis = analyze_markup(
            r#"<BoxedRowList>
  <BoxedRow icon="user" onPress={openProfile}>Perfil</BoxedRow>
  <BoxedRow icon="lock" onPress={openSecurity}>Seguranca</BoxedRow>
</BoxedRowList>"#,
        );
        let suggestions = map_to_components(&analysis, &catalog);
        let score_of = |name: &str| {
            suggestions
                .iter()
                .find(|s| s.component.name == name)
                .map(|s| (s.score, s.source))
        };
        // list: 95 + 30 + 25 - 10 (expects high complexity); row: 90 + 30 + 25 + 5
        assert_eq!(score_of("BoxedRowList"), Some((140, SuggestionSource::Family)));
        assert_eq!(score_of("BoxedRow"), Some((150, SuggestionSource::Family)));
    }

    #[test]
    fn test_icon_score_arithmetic() {
        let catalog = catalog();
        let analysis = analyze_markup(r#"<Icon name="home" />"#);
        let suggestions = map_to_components(&analysis, &catalog);
        let icon = suggestions
            .iter()
            .find(|s| s.component.name == "Icon")
            .expect("icon suggested");
        // 85 base + 30 keyword + 15 icons category + 10 low complexity
        assert_eq!(icon.score, 140);
        assert_eq!(icon.reason, "icons: icon");
    }

    #[test]
    fn test_list_penalty_for_non_list_names() {
        let catalog = catalog();
        let analysis = analyze_markup("<ul><li>a</li><li>b</li></ul><hr/>");
        let suggestions = map_to_components(&analysis, &catalog);
        let divider = suggestions
            .iter()
            .find(|s| s.component.name == "Divider")
            .expect("divider suggested");
        // 55 base + 25 components category + 10 low complexity - 20 penalty
        assert_eq!(divider.score, 70);
    }

    #[test]
    fn test_named_layer_matches_catalog_name() {
        let catalog = catalog();
        let analysis = analyze_markup(r#"<div data-name="Product Card"></div>"#);
        let suggestions = map_to_components(&analysis, &catalog);
        let product = suggestions
            .iter()
            .find(|s| s.component.name == "ProductCard")
            .expect("named layer suggested");
        assert_eq!(product.source, SuggestionSource::NamedComponent);
        assert_eq!(product.score, 80);
    }

    #[test]
    fn test_feedback_family() {
        let catalog = catalog();
        let analysis = analyze_markup(r#"<div class="error-screen"><h1>Ops</h1></div>"#);
        let ranked = map_to_components(&analysis, &catalog);
        let ranked = names(&ranked);
        assert!(ranked.contains(&"ErrorFeedback"), "{ranked:?}");
        assert!(ranked.contains(&"FeedbackScreen"), "{ranked:?}");
    }

    #[test]
    fn test_bounded_unique_and_non_negative() {
        let mut catalog = catalog();
        for i in 0..30 {
            catalog.push(component(&format!("Button{i}"), Category::Components, "button variant"));
        }
        let analysis = analyze_markup(
            r#"<footer class="fixed-footer"><button>Ok</button><Modal/><Card/><ul><li>x</li></ul></footer>"#,
        );
        let suggestions = map_to_components(&analysis, &catalog);
        assert!(suggestions.len() <= MAX_SUGGESTIONS);
        let unique: HashSet<_> = suggestions.iter().map(|s| s.component.name.to_lowercase()).collect();
        assert_eq!(unique.len(), suggestions.len());
        assert!(suggestions.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_limit_is_clamped() {
        let catalog = catalog();
        let analysis = analyze_markup(r#"<button class="btn-primary"><Icon name="x"/></button>"#);
        let elements = &analysis.elements;
        let one = ComponentMapper::new(&catalog)
            .with_limit(1)
            .map(elements, &analysis.structure, &analysis.patterns);
        assert_eq!(one.len(), 1);
        let zero = ComponentMapper::new(&catalog)
            .with_limit(0)
            .map(elements, &analysis.structure, &analysis.patterns);
        assert_eq!(zero.len(), 1);
    }

    #[test]
    fn test_empty_catalog_yields_nothing() {
        let analysis = analyze_markup(r#"<button>Ok</button>"#);
        assert!(map_to_components(&analysis, &[]).is_empty());
    }

    fn spaced(pattern: SpacingPattern, design_system_aligned: bool) -> ElementSignals {
        let mut elements = ElementSignals::default();
        elements.spacing = SpacingSignal {
            found: true,
            values: vec![8.0],
            pattern,
            design_system_aligned,
            ..SpacingSignal::default()
        };
        elements
    }

    #[test]
    fn test_spacing_bonus_by_pattern() {
        let stack = component("Stack", Category::Layout, "Vertical stack");
        let boxed = component("Box", Category::Components, "Generic container");
        let card = component("Card", Category::Components, "Elevated surface");
        let icon_button = component("IconButton", Category::Components, "Icon-only action");

        // aligned layout (25) plus spacing name (20)
        let aligned = spaced(SpacingPattern::DesignSystem, true);
        assert_eq!(spacing_bonus(Family::Containers, &stack, &aligned), 45);
        assert_eq!(spacing_bonus(Family::Containers, &card, &aligned), 0);

        // consistent but off grid (15), layout-ish through the name alone
        let consistent = spaced(SpacingPattern::Consistent, false);
        assert_eq!(spacing_bonus(Family::Containers, &stack, &consistent), 35);
        assert_eq!(spacing_bonus(Family::Containers, &boxed, &consistent), 35);
        assert_eq!(spacing_bonus(Family::Containers, &card, &consistent), 0);

        // mixed penalises containers and layout components only
        let mixed = spaced(SpacingPattern::Mixed, false);
        assert_eq!(spacing_bonus(Family::Containers, &stack, &mixed), 10);
        assert_eq!(spacing_bonus(Family::Containers, &card, &mixed), -10);
        assert_eq!(spacing_bonus(Family::Buttons, &icon_button, &mixed), 0);
        let mixed_aligned = spaced(SpacingPattern::Mixed, true);
        assert_eq!(spacing_bonus(Family::Containers, &stack, &mixed_aligned), 35);

        assert_eq!(spacing_bonus(Family::Containers, &stack, &ElementSignals::default()), 0);
    }

    #[test]
    fn test_mixed_spacing_penalty_floors_at_zero() {
        let mapper = ComponentMapper::new(&[]);
        let divider = component("Divider", Category::Layout, "Separator line");
        let candidate = Candidate::new(Family::Lists, "Divider", 5, "separator");
        let patterns = PatternSignals {
            complexity: Complexity::High,
            ..PatternSignals::default()
        };

        // 5 base + 20 layout category - 20 non-list name
        let none = ElementSignals::default();
        let plain = mapper.adjusted_score(&candidate, &divider, &none, &patterns);
        assert_eq!(plain, 5);
        // the extra -10 would reach -5
        let mixed = spaced(SpacingPattern::Mixed, false);
        assert_eq!(mapper.adjusted_score(&candidate, &divider, &mixed, &patterns), 0);
    }

    #[test]
    fn test_complexity_bonus_table() {
        assert_eq!(complexity_bonus(Complexity::High, Complexity::High), 20);
        assert_eq!(complexity_bonus(Complexity::Medium, Complexity::Medium), 15);
        assert_eq!(complexity_bonus(Complexity::Low, Complexity::Low), 10);
        assert_eq!(complexity_bonus(Complexity::Low, Complexity::Medium), 5);
        assert_eq!(complexity_bonus(Complexity::Medium, Complexity::High), -10);
        assert_eq!(complexity_bonus(Complexity::High, Complexity::Low), 0);
        assert_eq!(expected_complexity("BoxedRowList"), Complexity::High);
        assert_eq!(expected_complexity("Card"), Complexity::Medium);
        assert_eq!(expected_complexity("Icon"), Complexity::Low);
    }
}
