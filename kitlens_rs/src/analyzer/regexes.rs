use std::sync::OnceLock;

use regex::Regex;

pub(crate) fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex literal")
}

pub(crate) fn regex_style_attr() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // style="..." | style='...' | style={{ ... }}
    RE.get_or_init(|| regex(r#"(?is)style\s*=\s*(?:"([^"]*)"|'([^']*)'|\{\{(.*?)\}\})"#))
}

pub(crate) fn regex_style_object() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // innermost `{ ... }` blocks: CSS rules, StyleSheet entries, inline objects
    RE.get_or_init(|| regex(r#"\{([^{}]*)\}"#))
}

pub(crate) fn regex_font_size() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r#"(?i)font-?size\s*[:=]\s*["'{]?\s*(\d+(?:\.\d+)?)\s*(px|rem|em|pt)?"#)
    })
}

pub(crate) fn regex_font_weight() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"(?i)font-?weight\s*[:=]\s*["'{]?\s*([a-z0-9-]+)"#))
}

pub(crate) fn regex_line_height() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r#"(?i)line-?height\s*[:=]\s*["'{]?\s*(\d+(?:\.\d+)?)\s*(px|rem|em|%)?"#)
    })
}

pub(crate) fn regex_text_color() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // bare `color` only; background-color / border-color are excluded by the prefix class
    RE.get_or_init(|| {
        regex(
            r#"(?i)(?:^|[\s;{,"'])color\s*[:=]\s*["'{]?\s*(#[0-9a-f]{3,8}\b|rgba?\([^)]*\)|[a-z]+)"#,
        )
    })
}

pub(crate) fn regex_color_property() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(
            r#"(?i)\b(background-?color|border-?color|background|border|color)\s*[:=]\s*["'{]?\s*([^;"'}\n]+)"#,
        )
    })
}

pub(crate) fn regex_color_literal() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"(?i)#[0-9a-f]{3,8}\b|rgba?\([^)]*\)|\b(?:white|black|transparent)\b"#))
}

pub(crate) fn regex_bracket_color_class() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Tailwind arbitrary values: text-[#333], bg-[rgb(0,0,0)], border-[#e5e7eb]
    RE.get_or_init(|| regex(r#"(?i)\b(text|bg|border)-\[(#[0-9a-f]{3,8}|rgba?\([^\]]*\))\]"#))
}

pub(crate) fn regex_text_fragment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(
            r#"(?is)<(h[1-6]|p|span|label|text|typography|title|heading|subtitle|caption)\b([^>]*)>([^<]*)"#,
        )
    })
}

pub(crate) fn regex_opening_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"<([A-Za-z][\w.-]*)"#))
}

pub(crate) fn regex_tag_token() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // opening, closing and self-closing tags for nesting depth
    RE.get_or_init(|| regex(r#"(?s)<(/?)([A-Za-z][\w.-]*)(?:[^<>]*?)(/?)>"#))
}

pub(crate) fn regex_attribute() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"\s[A-Za-z_:@][\w:.-]*\s*=\s*(?:"[^"]*"|'[^']*'|\{)"#))
}

pub(crate) fn regex_class_attr() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r#"\b(?:class|className|id)\s*=\s*(?:"([^"]*)"|'([^']*)'|\{\s*["'`]([^"'`]*)["'`]\s*\})"#)
    })
}

pub(crate) fn regex_data_name() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"data-name\s*=\s*["']([^"']+)["']"#))
}

pub(crate) fn regex_explicit_preset() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // levels 1..=10 only
    RE.get_or_init(|| regex(r#"(?i)text-preset-(10|[1-9])[/-](regular|medium|bold|light)\b"#))
}

pub(crate) fn regex_heading_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"(?i)<h([1-6])\b"#))
}
