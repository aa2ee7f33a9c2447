//! Code snippet generation from analysis results and catalog entries.
//!
//! Output is JSX text meant as a starting point for a refactor, not a
//! compilable module.

use crate::analyzer::CombinedAnalysis;
use crate::analyzer::elements::LayoutType;
use crate::catalog::{CatalogComponent, PropInfo};
use crate::mapper::ComponentSuggestion;

pub const DEFAULT_PACKAGE: &str = "@design-system/react";

const MAX_TOKEN_COMMENTS: usize = 12;
const PREVIEW_CHARS: usize = 24;

fn import_line(names: &[&str], package: &str) -> String {
    format!("import {{ {} }} from '{}';\n", names.join(", "), package)
}

fn preview(text: &str) -> String {
    let mut out: String = text.chars().take(PREVIEW_CHARS).collect();
    if text.chars().count() > PREVIEW_CHARS {
        out.push_str("...");
    }
    out
}

/// Wrapper keywords for each layout type, most specific first.
fn wrapper_keywords(layout: LayoutType) -> &'static [&'static str] {
    match layout {
        LayoutType::FixedFooterWithButton | LayoutType::FixedFooter => &["footer", "layout"],
        LayoutType::FixedHeader => &["header", "navbar", "layout"],
        LayoutType::Modal => &["modal", "dialog", "sheet"],
        LayoutType::Standard => &["layout", "screen", "container"],
    }
}

fn pick_wrapper<'a>(names: &[&'a str], layout: LayoutType) -> Option<&'a str> {
    wrapper_keywords(layout).iter().find_map(|keyword| {
        names
            .iter()
            .find(|name| name.to_lowercase().contains(keyword))
            .copied()
    })
}

fn token_comments(analysis: &CombinedAnalysis) -> String {
    let mut out = String::new();
    let text = &analysis.text_analysis;

    if !text.typography.is_empty() {
        out.push_str("// Typography tokens\n");
        for element in text.typography.iter().take(MAX_TOKEN_COMMENTS) {
            out.push_str(&format!(
                "//   <{}> \"{}\": {}\n",
                element.tag,
                preview(&element.text),
                element.typography.token()
            ));
        }
    }

    if !text.colors.is_empty() {
        out.push_str("// Color tokens\n");
        for color in text.colors.iter().take(MAX_TOKEN_COMMENTS) {
            out.push_str(&format!(
                "//   {}: {} ({:.2})\n",
                color.source_color, color.token_name, color.confidence
            ));
        }
    }

    out
}

/// Imports plus a JSX skeleton built from the ranked suggestions, shaped
/// by the detected layout type and annotated with typography and color
/// tokens.
pub fn generate_refactored_code(
    analysis: &CombinedAnalysis,
    suggestions: &[ComponentSuggestion],
    package: &str,
) -> String {
    let mut out = String::new();
    let names: Vec<&str> = suggestions
        .iter()
        .map(|s| s.component.name.as_str())
        .collect();

    if names.is_empty() {
        out.push_str("// No catalog components matched this markup.\n");
        out.push_str(&token_comments(analysis));
        return out;
    }

    out.push_str(&import_line(&names, package));
    out.push('\n');

    let comments = token_comments(analysis);
    if !comments.is_empty() {
        out.push_str(&comments);
        out.push('\n');
    }

    let layout = analysis.elements.layouts.layout_type;
    let wrapper = pick_wrapper(&names, layout);
    let body: Vec<&str> = names
        .iter()
        .copied()
        .filter(|name| Some(*name) != wrapper)
        .collect();

    out.push_str("export function RefactoredScreen() {\n");
    out.push_str("  return (\n");
    let (open, close) = match (wrapper, layout) {
        (Some(w), LayoutType::Modal) => (format!("<{w} visible onClose={{() => {{}}}}>"), format!("</{w}>")),
        (Some(w), _) => (format!("<{w}>"), format!("</{w}>")),
        (None, _) => ("<>".to_string(), "</>".to_string()),
    };
    out.push_str(&format!("    {open}\n"));
    for name in &body {
        out.push_str(&format!("      <{name} />\n"));
    }
    out.push_str(&format!("    {close}\n"));
    out.push_str("  );\n");
    out.push_str("}\n");
    out
}

fn placeholder(prop: &PropInfo) -> String {
    if let Some(default) = prop.default.as_deref().filter(|d| !d.is_empty()) {
        return if default.starts_with('"') || default.starts_with('\'') {
            default.to_string()
        } else {
            format!("{{{default}}}")
        };
    }
    let kind = prop.prop_type.to_lowercase();
    if kind.contains("=>") || kind.contains("function") || prop.name.starts_with("on") {
        "{() => {}}".to_string()
    } else if kind.contains("bool") {
        "{true}".to_string()
    } else if kind.contains("number") {
        "{0}".to_string()
    } else if kind.contains("string") {
        format!("\"{}\"", prop.name)
    } else if prop.name == "children" || kind.contains("node") {
        "{null}".to_string()
    } else {
        "{undefined}".to_string()
    }
}

/// Minimal usage of a catalog component: its required props with
/// placeholder values, otherwise its first documented example.
pub fn generate_usage_example(component: &CatalogComponent, package: &str) -> String {
    let mut out = import_line(&[component.name.as_str()], package);
    out.push('\n');

    let required: Vec<&PropInfo> = component.required_props().collect();
    if !required.is_empty() {
        let props: Vec<String> = required
            .iter()
            .map(|prop| format!("{}={}", prop.name, placeholder(prop)))
            .collect();
        out.push_str(&format!("<{} {} />\n", component.name, props.join(" ")));
    } else if let Some(example) = component.examples.first() {
        out.push_str(example.trim_end());
        out.push('\n');
    } else {
        out.push_str(&format!("<{} />\n", component.name));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze_markup;
    use crate::catalog::Category;
    use crate::mapper::SuggestionSource;

    fn suggestion(name: &str, score: u32) -> ComponentSuggestion {
        ComponentSuggestion {
            component: CatalogComponent::new(name, Category::Components, ""),
            score,
            reason: String::new(),
            source: SuggestionSource::Family,
        }
    }

    fn prop(name: &str, prop_type: &str, required: bool) -> PropInfo {
        PropInfo {
            name: name.to_string(),
            prop_type: prop_type.to_string(),
            required,
            default: None,
            description: String::new(),
        }
    }

    #[test]
    fn test_fixed_footer_wraps_body() {
        let analysis = analyze_markup(
            r#"<footer class="fixed-footer"><button class="btn-primary">Continuar</button></footer>"#,
        );
        let suggestions = vec![
            suggestion("FixedFooterLayout", 95),
            suggestion("ButtonPrimary", 90),
        ];
        let code = generate_refactored_code(&analysis, &suggestions, DEFAULT_PACKAGE);
        assert!(code.starts_with(
            "import { FixedFooterLayout, ButtonPrimary } from '@design-system/react';"
        ));
        assert!(code.contains("    <FixedFooterLayout>\n      <ButtonPrimary />\n    </FixedFooterLayout>\n"));
    }

    #[test]
    fn test_modal_wrapper_gets_visibility_props() {
        let analysis = analyze_markup(r#"<div class="modal-overlay"><p>Tem certeza?</p></div>"#);
        let suggestions = vec![suggestion("Modal", 90), suggestion("Text", 60)];
        let code = generate_refactored_code(&analysis, &suggestions, "ui-kit");
        assert!(code.contains("from 'ui-kit';"));
        assert!(code.contains("<Modal visible onClose={() => {}}>"), "{code}");
        assert!(code.contains("<Text />"));
    }

    #[test]
    fn test_fragment_without_wrapper_and_token_comments() {
        let analysis = analyze_markup(
            r#"<h1 style="font-size: 32px; font-weight: 700; color: #1a1a1a">Bem-vindo</h1>"#,
        );
        let code = generate_refactored_code(&analysis, &[suggestion("Heading", 70)], DEFAULT_PACKAGE);
        assert!(code.contains("    <>\n      <Heading />\n    </>\n"));
        assert!(code.contains("// Typography tokens"));
        assert!(code.contains("<h1> \"Bem-vindo\": text-preset-3/bold"));
        assert!(code.contains("#1a1a1a: colors.text.primary"));
    }

    #[test]
    fn test_no_suggestions() {
        let analysis = analyze_markup("");
        let code = generate_refactored_code(&analysis, &[], DEFAULT_PACKAGE);
        assert_eq!(code, "// No catalog components matched this markup.\n");
    }

    #[test]
    fn test_usage_with_required_props() {
        let component = CatalogComponent::new("PinField", Category::Components, "PIN entry")
            .with_props(vec![
                prop("length", "number", true),
                prop("onComplete", "(pin: string) => void", true),
                prop("secure", "boolean", false),
                prop("label", "string", true),
            ])
            .with_examples(vec!["<PinField length={4} />".to_string()]);
        let usage = generate_usage_example(&component, DEFAULT_PACKAGE);
        assert_eq!(
            usage,
            "import { PinField } from '@design-system/react';\n\n\
             <PinField length={0} onComplete={() => {}} label=\"label\" />\n"
        );
    }

    #[test]
    fn test_usage_falls_back_to_example_then_bare_tag() {
        let with_example = CatalogComponent::new("Badge", Category::Components, "")
            .with_examples(vec!["<Badge tone=\"info\">Novo</Badge>\n".to_string()]);
        assert!(
            generate_usage_example(&with_example, "kit").ends_with("<Badge tone=\"info\">Novo</Badge>\n")
        );

        let bare = CatalogComponent::new("Divider", Category::Layout, "");
        assert_eq!(
            generate_usage_example(&bare, "kit"),
            "import { Divider } from 'kit';\n\n<Divider />\n"
        );
    }

    #[test]
    fn test_placeholder_uses_default() {
        let mut size = prop("size", "'sm' | 'md'", true);
        size.default = Some("'md'".to_string());
        assert_eq!(placeholder(&size), "'md'");
        let mut count = prop("count", "number", true);
        count.default = Some("3".to_string());
        assert_eq!(placeholder(&count), "{3}");
        assert_eq!(placeholder(&prop("children", "ReactNode", true)), "{null}");
    }

    #[test]
    fn test_preview_is_char_safe() {
        assert_eq!(preview("curto"), "curto");
        let long = "ação ".repeat(10);
        assert_eq!(preview(&long).chars().count(), PREVIEW_CHARS + 3);
    }
}
