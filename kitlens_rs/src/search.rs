//! Catalog search with name matching, synonym expansion and contextual
//! keyword boosting.
//!
//! Scoring rules per component (query lowercased and trimmed):
//!
//! - name equal to the whole query: 100, nothing else is computed
//! - per search term: +90 equal name, else +80 prefix / +70 suffix / +60 contains
//! - per synonym of a term: +50 in name, +30 in description
//! - per contextual keyword: +40 in name, +25 in description, +20 in category
//! - per term naming the category (singular or plural): +35
//! - functionality hints for a few well-known multi-word intents
//!
//! Exact names form their own first tier. Everything else ranks by the
//! uncapped accumulated total, and the reported score is capped at 99.

use std::collections::HashMap;

use serde::Serialize;

use crate::catalog::CatalogComponent;

const EXACT_SCORE: u32 = 100;
const ACCUMULATED_CAP: u32 = 99;

/// Term expansions. Terms without an entry expand to themselves.
const SYNONYMS: &[(&str, &[&str])] = &[
    ("button", &["button", "btn", "action", "cta", "touchable", "pressable"]),
    ("btn", &["btn", "button"]),
    ("input", &["input", "field", "textfield", "textinput", "entry"]),
    ("field", &["field", "input", "textfield"]),
    ("text", &["text", "typography", "label", "paragraph"]),
    ("typography", &["typography", "text", "heading"]),
    ("heading", &["heading", "title", "header"]),
    ("title", &["title", "heading"]),
    ("list", &["list", "row", "items", "collection"]),
    ("row", &["row", "item", "list"]),
    ("card", &["card", "tile", "surface", "panel"]),
    ("modal", &["modal", "dialog", "popup", "overlay", "sheet"]),
    ("dialog", &["dialog", "modal"]),
    ("icon", &["icon", "glyph", "symbol", "svg"]),
    ("image", &["image", "picture", "photo", "avatar"]),
    ("avatar", &["avatar", "image", "profile"]),
    ("navigation", &["navigation", "nav", "navbar", "menu", "tabs"]),
    ("nav", &["nav", "navigation", "navbar"]),
    ("tab", &["tab", "tabs", "tabbar"]),
    ("header", &["header", "navbar", "appbar", "topbar"]),
    ("footer", &["footer", "bottom", "bottombar"]),
    ("layout", &["layout", "grid", "stack", "box", "container"]),
    ("container", &["container", "box", "wrapper", "view"]),
    ("stack", &["stack", "column", "row"]),
    ("feedback", &["feedback", "alert", "toast", "snackbar", "message"]),
    ("alert", &["alert", "feedback", "warning", "banner"]),
    ("pin", &["pin", "code", "otp", "password"]),
    ("security", &["security", "pin", "code", "otp"]),
    ("loading", &["loading", "spinner", "skeleton", "progress"]),
    ("checkbox", &["checkbox", "check", "toggle"]),
    ("switch", &["switch", "toggle"]),
];

/// (trigger substrings, keywords added to the search context)
const CONTEXT_RULES: &[(&[&str], &[&str])] = &[
    (&["modal"], &["overlay", "dialog", "popup"]),
    (&["button", "btn"], &["action", "click", "press"]),
    (&["input", "field", "form"], &["form", "entry", "value"]),
    (&["list"], &["row", "item", "collection"]),
    (&["nav", "menu"], &["navigation", "tab", "header"]),
    (&["card"], &["surface", "container", "tile"]),
    (&["icon"], &["svg", "symbol", "glyph"]),
    (&["layout", "grid"], &["stack", "box", "container"]),
    (&["text", "typography", "font"], &["heading", "title", "label"]),
    (&["feedback", "error", "success"], &["alert", "toast", "message"]),
    (&["pin", "password", "otp"], &["security", "code", "verification"]),
    (&["image", "avatar", "photo"], &["picture", "media"]),
];

/// Known intents: (query triggers, name hints, description hints). Each
/// side adds 50 when any of its hints is present.
const FUNCTIONALITY_RULES: &[(&[&str], &[&str], &[&str])] = &[
    (
        &["pin field", "pin input", "security", "senha", "password", "otp"],
        &["pin", "code", "otp"],
        &["digit", "pin", "code", "security", "senha"],
    ),
    (
        &["fixed footer", "footer button", "bottom bar"],
        &["footer"],
        &["fixed", "bottom", "sticky"],
    ),
    (
        &["boxed row", "row list", "settings list"],
        &["boxed", "row"],
        &["row", "list", "group"],
    ),
    (
        &["feedback screen", "error screen", "success screen"],
        &["feedback", "screen"],
        &["error", "success", "feedback", "result"],
    ),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredComponent {
    pub component: CatalogComponent,
    pub score: u32,
}

fn synonyms(term: &str) -> Vec<&str> {
    SYNONYMS
        .iter()
        .find(|(key, _)| *key == term)
        .map(|(_, expansions)| expansions.to_vec())
        .unwrap_or_else(|| vec![term])
}

fn search_terms(query: &str) -> Vec<String> {
    let mut terms = vec![query.to_string()];
    for token in query.split(|c: char| c.is_whitespace() || c == '-' || c == '_') {
        if token.chars().count() > 1 && !terms.iter().any(|t| t == token) {
            terms.push(token.to_string());
        }
    }
    terms
}

fn contextual_keywords(query: &str) -> Vec<&'static str> {
    let mut keywords: Vec<&'static str> = Vec::new();
    for (triggers, added) in CONTEXT_RULES {
        if triggers.iter().any(|t| query.contains(t)) {
            for keyword in *added {
                if !keywords.contains(keyword) {
                    keywords.push(*keyword);
                }
            }
        }
    }
    keywords
}

fn functionality_score(query: &str, name: &str, description: &str) -> u32 {
    FUNCTIONALITY_RULES
        .iter()
        .filter(|(triggers, _, _)| triggers.iter().any(|t| query.contains(t)))
        .map(|(_, name_hints, description_hints)| {
            let mut score = 0;
            if name_hints.iter().any(|h| name.contains(h)) {
                score += 50;
            }
            if description_hints.iter().any(|h| description.contains(h)) {
                score += 50;
            }
            score
        })
        .sum()
}

/// Naive singular / plural match of a term against a category name.
fn names_category(term: &str, category: &str) -> bool {
    term == category
        || format!("{term}s") == category
        || term.strip_suffix('s') == Some(category)
        || category.strip_suffix('s') == Some(term)
}

/// Uncapped relevance of `component` for a query that is not its exact name.
fn accumulated_score(
    component: &CatalogComponent,
    query: &str,
    terms: &[String],
    context: &[&str],
) -> u32 {
    let name = component.name.to_lowercase();
    let description = component.description.to_lowercase();
    let category = component.category.as_str();
    let mut score = 0u32;

    for term in terms {
        let term = term.as_str();
        if name == term {
            score += 90;
        } else if name.starts_with(term) {
            score += 80;
        } else if name.ends_with(term) {
            score += 70;
        } else if name.contains(term) {
            score += 60;
        }

        for expansion in synonyms(term) {
            if name.contains(expansion) {
                score += 50;
            }
            if description.contains(expansion) {
                score += 30;
            }
        }

        if names_category(term, category) {
            score += 35;
        }
    }

    for keyword in context {
        if name.contains(keyword) {
            score += 40;
        }
        if description.contains(keyword) {
            score += 25;
        }
        if category.contains(keyword) {
            score += 20;
        }
    }

    score + functionality_score(query, &name, &description)
}

/// Score every component; zero-score components are dropped and ties keep
/// catalog order. A blank query returns the whole catalog unscored.
///
/// Ranking uses `(exact, total)` so strong partial matches stay ahead of
/// weak ones even when both report the capped 99.
pub fn search_scored(catalog: &[CatalogComponent], query: &str) -> Vec<ScoredComponent> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return catalog
            .iter()
            .map(|component| ScoredComponent {
                component: component.clone(),
                score: 0,
            })
            .collect();
    }

    let terms = search_terms(&query);
    let context = contextual_keywords(&query);
    let mut ranked: Vec<(bool, u32, &CatalogComponent)> = catalog
        .iter()
        .filter_map(|component| {
            if component.name.to_lowercase() == query {
                return Some((true, EXACT_SCORE, component));
            }
            let total = accumulated_score(component, &query, &terms, &context);
            (total > 0).then_some((false, total, component))
        })
        .collect();
    ranked.sort_by(|a, b| (b.0, b.1).cmp(&(a.0, a.1)));
    ranked
        .into_iter()
        .map(|(exact, total, component)| ScoredComponent {
            component: component.clone(),
            score: if exact {
                EXACT_SCORE
            } else {
                total.min(ACCUMULATED_CAP)
            },
        })
        .collect()
}

/// Ranked components for `query`.
pub fn search(catalog: &[CatalogComponent], query: &str) -> Vec<CatalogComponent> {
    search_scored(catalog, query)
        .into_iter()
        .map(|s| s.component)
        .collect()
}

/// Run one search per term and rank components by positional bonus
/// (`max(0, 50 - 5 x rank)`) accumulated across terms.
pub fn search_multiple_terms(catalog: &[CatalogComponent], terms: &[&str]) -> Vec<ScoredComponent> {
    let mut order: Vec<CatalogComponent> = Vec::new();
    let mut totals: HashMap<String, u32> = HashMap::new();

    for term in terms.iter().filter(|t| !t.trim().is_empty()) {
        for (rank, component) in search(catalog, term).into_iter().enumerate() {
            let bonus = 50u32.saturating_sub(5 * rank as u32);
            let key = component.name.to_lowercase();
            if !totals.contains_key(&key) {
                order.push(component);
            }
            *totals.entry(key).or_default() += bonus;
        }
    }

    let mut ranked: Vec<ScoredComponent> = order
        .into_iter()
        .map(|component| {
            let score = totals
                .get(&component.name.to_lowercase())
                .copied()
                .unwrap_or_default();
            ScoredComponent { component, score }
        })
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn component(name: &str, category: Category, description: &str) -> CatalogComponent {
        CatalogComponent::new(name, category, description)
    }

    #[test]
    fn test_prefix_match_scores_high_but_not_exact() {
        let catalog = vec![component("ButtonPrimary", Category::Components, "Botão principal")];
        let results = search_scored(&catalog, "button");
        assert_eq!(results.len(), 1);
        assert!(results[0].score >= 90, "score {}", results[0].score);
        assert!(results[0].score < 100);
    }

    #[test]
    fn test_exact_name_ranks_first() {
        let catalog = vec![
            component("ButtonPrimary", Category::Components, "Primary button"),
            component("IconButton", Category::Components, "Button with icon"),
            component("Button", Category::Components, "Basic button"),
        ];
        let results = search_scored(&catalog, "  Button ");
        assert_eq!(results[0].component.name, "Button");
        assert_eq!(results[0].score, 100);
        assert!(results[1..].iter().all(|r| r.score <= 99));
    }

    #[test]
    fn test_blank_query_returns_catalog_unchanged() {
        let catalog = vec![
            component("Zeta", Category::Lab, ""),
            component("Alpha", Category::Components, ""),
        ];
        assert_eq!(search(&catalog, "   "), catalog);
        assert_eq!(search(&catalog, ""), catalog);
    }

    #[test]
    fn test_no_match_is_filtered() {
        let catalog = vec![component("Card", Category::Components, "Surface")];
        assert!(search(&catalog, "qqq").is_empty());
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = vec![
            component("Spinner", Category::Feedback, "Shows loading"),
            component("Skeleton", Category::Feedback, "Shows loading"),
        ];
        let names: Vec<_> = search(&catalog, "loading")
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Spinner", "Skeleton"]);
    }

    #[test]
    fn test_synonyms_reach_description() {
        let catalog = vec![
            component("Sheet", Category::Components, "Bottom overlay"),
            component("Avatar", Category::Components, "User picture"),
        ];
        let results = search_scored(&catalog, "modal");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].component.name, "Sheet");
        // "sheet" in name (50), "overlay" in description as synonym (30) and
        // as context keyword (25), capped
        assert_eq!(results[0].score, 99);
    }

    #[test]
    fn test_category_terms() {
        assert!(names_category("icon", "icons"));
        assert!(names_category("icons", "icons"));
        assert!(names_category("hook", "hooks"));
        assert!(!names_category("lab", "layout"));
        let catalog = vec![component("Glyph", Category::Icons, "")];
        let results = search_scored(&catalog, "icons");
        // category (35), plus context keyword "glyph" in name (40)
        assert_eq!(results[0].score, 75);
    }

    #[test]
    fn test_functionality_score_for_pin_intent() {
        let catalog = vec![
            component("CodeField", Category::Components, "Digit entry for security codes"),
            component("Badge", Category::Components, "Small label"),
        ];
        let names: Vec<_> = search(&catalog, "pin field").into_iter().map(|c| c.name).collect();
        assert_eq!(names.first().map(String::as_str), Some("CodeField"));
    }

    fn raw_total(component: &CatalogComponent, query: &str) -> u32 {
        accumulated_score(
            component,
            query,
            &search_terms(query),
            &contextual_keywords(query),
        )
    }

    #[test]
    fn test_stronger_partial_match_ranks_first() {
        let catalog = vec![
            component("ButtonIcon", Category::Components, ""),
            component("ButtonPrimary", Category::Components, "Primary button action cta"),
        ];
        // prefix (80) and synonym "button" in name (50)
        assert_eq!(raw_total(&catalog[0], "button"), 130);
        // plus "button", "action" and "cta" in description (3 x 30) and
        // context keyword "action" in description (25)
        assert_eq!(raw_total(&catalog[1], "button"), 245);

        let results = search_scored(&catalog, "button");
        let names: Vec<_> = results.iter().map(|r| r.component.name.as_str()).collect();
        assert_eq!(names, vec!["ButtonPrimary", "ButtonIcon"]);
        assert!(results.iter().all(|r| r.score == 99));
    }

    #[test]
    fn test_partial_matches_sort_by_total() {
        let catalog = vec![
            component("Glyph", Category::Components, ""),
            component("IconButton", Category::Components, "Button with icon"),
        ];
        let results = search_scored(&catalog, "icon");
        let ranked: Vec<_> = results
            .iter()
            .map(|r| (r.component.name.as_str(), r.score))
            .collect();
        // IconButton: prefix (80), "icon" in name (50) and description (30)
        // Glyph: synonym in name (50), context keyword in name (40)
        assert_eq!(ranked, vec![("IconButton", 99), ("Glyph", 90)]);
    }

    #[test]
    fn test_functionality_hints_add_fifty_per_side() {
        assert_eq!(functionality_score("security", "pinpad", "numeric keypad"), 50);
        assert_eq!(functionality_score("otp", "badge", "six digit code"), 50);
        assert_eq!(functionality_score("otp", "otpfield", "digit entry"), 100);
        assert_eq!(functionality_score("button", "pinpad", "digit entry"), 0);
        // security rule (name "pin") and settings list rule (name "boxed",
        // description "row")
        assert_eq!(
            functionality_score("security settings list", "boxedrowpin", "row group"),
            150
        );
    }

    #[test]
    fn test_otp_total_includes_functionality_tier() {
        let otp = component("OtpCode", Category::Components, "Six digit security code");
        // prefix (80), "otp" in name (50), context "code" in name (40),
        // "security" and "code" in description (2 x 25), functionality (100)
        assert_eq!(raw_total(&otp, "otp"), 320);

        let catalog = vec![
            component("Badge", Category::Components, "Security badge"),
            otp,
        ];
        let results = search_scored(&catalog, "otp");
        assert_eq!(results[0].component.name, "OtpCode");
        assert_eq!(results[0].score, 99);
        // context "security" in description (25), functionality description hint (50)
        assert_eq!(results[1].component.name, "Badge");
        assert_eq!(results[1].score, 75);
    }

    #[test]
    fn test_search_terms_split() {
        assert_eq!(
            search_terms("icon-button primary_x a"),
            vec!["icon-button primary_x a", "icon", "button", "primary"]
        );
    }

    #[test]
    fn test_multiple_terms_accumulate_positional_bonus() {
        let catalog = vec![
            component("Icon", Category::Icons, "Vector icon"),
            component("IconButton", Category::Components, "Button with an icon"),
            component("Button", Category::Components, "Basic button"),
        ];
        let ranked = search_multiple_terms(&catalog, &["button", "icon"]);
        assert_eq!(ranked[0].component.name, "IconButton");
        // second for "button" (45) and second for "icon" (45)
        assert_eq!(ranked[0].score, 90);
        assert!(ranked.iter().all(|r| r.score <= 100));
    }
}
