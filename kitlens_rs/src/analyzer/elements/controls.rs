//! Interactive and media element families: buttons, inputs, icons, images and
//! security-code (PIN / OTP) fields.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::analyzer::regexes::regex;
use crate::analyzer::{any_match, count_matches, push_unique};

// ----------------------------------------------------------------------------
// Buttons
// ----------------------------------------------------------------------------

fn regex_button_presence() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)button|\bbtn\b|\bbtn-|touchable|pressable|\bcta\b"))
}

fn regex_button_count() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r#"(?i)<\s*(?:[\w.]*button|touchable\w*|pressable)\b|\bbtn\b|role\s*=\s*["']button["']"#)
    })
}

fn regex_button_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r"(?is)<\s*(?:[\w.]*button|touchable\w*|pressable)\b([^>]*?)/?>([^<]*)")
    })
}

fn regex_button_label_attr() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"(?i)\b(?:title|label|text|aria-label)\s*=\s*["']([^"']+)["']"#))
}

fn regex_variant_primary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r#"(?i)primary|\bcta\b|variant\s*=\s*["'{]?\s*["']?(?:solid|filled|contained)"#)
    })
}

fn regex_variant_secondary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)secondary|outline|ghost|tertiary"))
}

fn regex_variant_danger() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r#"(?i)danger|destructive|\bdelete\b|\bremove\b|btn-error|variant\s*=\s*["']?error"#)
    })
}

fn regex_variant_link() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r#"(?i)\blink\b|btn-link|text-?button|variant\s*=\s*["'{]?\s*["']?(?:text|link)\b"#)
    })
}

fn regex_variant_icon() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)icon|<svg\b"))
}

fn regex_position_footer() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)footer|bottom-?(?:bar|sheet|actions)|fixed-bottom|sticky-bottom"))
}

fn regex_position_header() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)header|top-?bar|toolbar|app-?bar|navbar"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Danger,
    Link,
    Icon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonPosition {
    Footer,
    Header,
    Inline,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ButtonSignal {
    pub found: bool,
    pub count: usize,
    pub variants: Vec<ButtonVariant>,
    pub positions: Vec<ButtonPosition>,
    pub has_icon: bool,
    /// Visible labels (`<button>Label</button>`, `title="Label"`)
    pub labels: Vec<String>,
}

impl ButtonSignal {
    pub fn has_variant(&self, variant: ButtonVariant) -> bool {
        self.variants.contains(&variant)
    }

    pub fn has_position(&self, position: ButtonPosition) -> bool {
        self.positions.contains(&position)
    }
}

pub fn extract_buttons(markup: &str) -> ButtonSignal {
    if !regex_button_presence().is_match(markup) {
        return ButtonSignal::default();
    }

    let variants: Vec<ButtonVariant> = [
        (ButtonVariant::Primary, regex_variant_primary()),
        (ButtonVariant::Secondary, regex_variant_secondary()),
        (ButtonVariant::Danger, regex_variant_danger()),
        (ButtonVariant::Link, regex_variant_link()),
        (ButtonVariant::Icon, regex_variant_icon()),
    ]
    .into_iter()
    .filter(|(_, re)| re.is_match(markup))
    .map(|(variant, _)| variant)
    .collect();

    let mut positions = Vec::new();
    if regex_position_footer().is_match(markup) {
        positions.push(ButtonPosition::Footer);
    }
    if regex_position_header().is_match(markup) {
        positions.push(ButtonPosition::Header);
    }
    if positions.is_empty() {
        positions.push(ButtonPosition::Inline);
    }

    let mut labels = Vec::new();
    for caps in regex_button_tag().captures_iter(markup) {
        let text = caps.get(2).map(|m| m.as_str().trim()).unwrap_or("");
        if !text.is_empty() && !text.starts_with('{') {
            push_unique(&mut labels, text);
            continue;
        }
        let attrs = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        if let Some(label) = regex_button_label_attr()
            .captures(attrs)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim())
            .filter(|l| !l.is_empty())
        {
            push_unique(&mut labels, label);
        }
    }

    let has_icon = variants.contains(&ButtonVariant::Icon);
    ButtonSignal {
        found: true,
        count: count_matches(regex_button_count(), markup).max(1),
        variants,
        positions,
        has_icon,
        labels,
    }
}

// ----------------------------------------------------------------------------
// Inputs
// ----------------------------------------------------------------------------

fn regex_input_presence() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r"(?i)<\s*(?:textarea|select|[\w.]*input|[\w.]*field)\b|textinput|textfield|placeholder\s*=")
    })
}

fn regex_input_count() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)<\s*(?:textarea|select|[\w.]*input|[\w.]*field)\b"))
}

fn regex_input_type() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r#"(?i)\btype\s*=\s*["'{]?\s*["']?(text|email|password|number|tel|search|checkbox|radio|date|url)\b"#)
    })
}

fn regex_keyboard_type() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"(?i)keyboardType\s*=\s*["'{]?\s*["']?([\w-]+)"#))
}

fn regex_textarea() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)<\s*textarea\b|multiline"))
}

fn regex_select() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)<\s*select\b|<\s*[\w.]*(?:picker|dropdown)\b"))
}

fn regex_secure_entry() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)secureTextEntry"))
}

fn regex_input_label() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)<\s*label\b|\blabel\s*=|aria-label"))
}

fn regex_input_placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)placeholder"))
}

fn regex_input_validation() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r"(?i)\brequired\b|pattern\s*=|min-?length|max-?length|\berror\b|invalid|validat")
    })
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InputSignal {
    pub found: bool,
    pub count: usize,
    /// Input kinds: text, email, password, number, tel, search, checkbox,
    /// radio, date, url, textarea, select
    pub types: Vec<String>,
    pub has_labels: bool,
    pub has_placeholder: bool,
    pub has_validation: bool,
}

impl InputSignal {
    pub fn has_type(&self, kind: &str) -> bool {
        self.types.iter().any(|t| t == kind)
    }
}

pub fn extract_inputs(markup: &str) -> InputSignal {
    if !regex_input_presence().is_match(markup) {
        return InputSignal::default();
    }

    let mut types = Vec::new();
    for caps in regex_input_type().captures_iter(markup) {
        if let Some(kind) = caps.get(1) {
            push_unique(&mut types, kind.as_str().to_lowercase());
        }
    }
    for caps in regex_keyboard_type().captures_iter(markup) {
        let mapped = match caps.get(1).map(|m| m.as_str().to_lowercase()).as_deref() {
            Some("numeric") | Some("number-pad") | Some("decimal-pad") => "number",
            Some("email-address") => "email",
            Some("phone-pad") => "tel",
            _ => continue,
        };
        push_unique(&mut types, mapped);
    }
    if regex_secure_entry().is_match(markup) {
        push_unique(&mut types, "password");
    }
    if regex_textarea().is_match(markup) {
        push_unique(&mut types, "textarea");
    }
    if regex_select().is_match(markup) {
        push_unique(&mut types, "select");
    }
    if types.is_empty() {
        types.push("text".to_string());
    }

    InputSignal {
        found: true,
        count: count_matches(regex_input_count(), markup).max(1),
        types,
        has_labels: regex_input_label().is_match(markup),
        has_placeholder: regex_input_placeholder().is_match(markup),
        has_validation: regex_input_validation().is_match(markup),
    }
}

// ----------------------------------------------------------------------------
// Icons
// ----------------------------------------------------------------------------

fn regex_icon_presence() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r"(?i)<svg\b|icon|\bfa-[a-z]|material-symbols|lucide|heroicons|feather")
    })
}

fn regex_icon_count() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r"(?i)<svg\b|<\s*[\w.]*icon\b|\bfa-[a-z][\w-]*|material-icons|material-symbols")
    })
}

fn regex_icon_component_name() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"<\s*([A-Z][A-Za-z0-9]*?)Icon\b"))
}

fn regex_icon_prop_name() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"(?i)\b(?:icon|name|iconName)\s*=\s*["'{]\s*["']?([A-Za-z][\w-]*)"#))
}

fn regex_fa_name() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"\bfa-([a-z][\w-]*)"))
}

const FA_MODIFIERS: &[&str] = &[
    "solid", "regular", "light", "brands", "lg", "xs", "sm", "2x", "3x", "fw", "spin",
];

const ICON_LIBRARIES: &[(&str, &str)] = &[
    ("fontawesome", r"(?i)\bfa-[a-z]|font-?awesome|\bfa[srlb]\b"),
    ("material", r"(?i)material-icons|material-symbols|@mui/icons|MaterialIcons"),
    ("lucide", r"(?i)lucide"),
    ("heroicons", r"(?i)heroicons"),
    ("ionicons", r"(?i)ionicons"),
    ("feather", r"(?i)feather"),
    ("svg", r"(?i)<svg\b"),
];

fn icon_library_probes() -> &'static [(&'static str, Regex)] {
    static RULES: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
    RULES.get_or_init(|| {
        ICON_LIBRARIES
            .iter()
            .map(|(name, pattern)| (*name, regex(pattern)))
            .collect()
    })
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IconSignal {
    pub found: bool,
    pub count: usize,
    pub names: Vec<String>,
    pub libraries: Vec<String>,
}

pub fn extract_icons(markup: &str) -> IconSignal {
    if !regex_icon_presence().is_match(markup) {
        return IconSignal::default();
    }

    let mut names = Vec::new();
    for caps in regex_icon_component_name().captures_iter(markup) {
        if let Some(name) = caps.get(1).filter(|m| !m.as_str().is_empty()) {
            push_unique(&mut names, name.as_str());
        }
    }
    // only icon-ish tags carry meaningful `name=` props
    if markup.to_lowercase().contains("icon") {
        for caps in regex_icon_prop_name().captures_iter(markup) {
            if let Some(name) = caps.get(1) {
                push_unique(&mut names, name.as_str());
            }
        }
    }
    for caps in regex_fa_name().captures_iter(markup) {
        if let Some(name) = caps.get(1)
            && !FA_MODIFIERS.contains(&name.as_str())
        {
            push_unique(&mut names, name.as_str());
        }
    }

    let libraries = icon_library_probes()
        .iter()
        .filter(|(_, re)| re.is_match(markup))
        .map(|(name, _)| name.to_string())
        .collect();

    IconSignal {
        found: true,
        count: count_matches(regex_icon_count(), markup).max(1),
        names,
        libraries,
    }
}

// ----------------------------------------------------------------------------
// Images
// ----------------------------------------------------------------------------

fn regex_image_presence() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r"(?i)<\s*(?:img|picture|[\w.]*image)\b|background-?image|avatar|illustration|\.(?:png|jpe?g|webp|gif)\b")
    })
}

fn regex_image_count() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r"(?i)<\s*(?:img|picture|[\w.]*image|[\w.]*avatar)\b|background-?image")
    })
}

fn regex_image_src() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"(?i)\bsrc\s*=\s*["'{]\s*["']?([^"'}\s]+)|url\(\s*["']?([^"')]+)"#))
}

fn regex_image_alt() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)\balt\s*=|accessibilityLabel"))
}

fn regex_kind_img() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)<\s*(?:img|image|picture)\b"))
}

fn regex_kind_background() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)background-?image|imagebackground"))
}

fn regex_kind_avatar() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)avatar"))
}

fn regex_kind_illustration() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)illustration|lottie"))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImageSignal {
    pub found: bool,
    pub count: usize,
    pub sources: Vec<String>,
    pub has_alt: bool,
    /// img, background, avatar, illustration
    pub kinds: Vec<String>,
}

pub fn extract_images(markup: &str) -> ImageSignal {
    if !regex_image_presence().is_match(markup) {
        return ImageSignal::default();
    }

    let mut sources = Vec::new();
    for caps in regex_image_src().captures_iter(markup) {
        if let Some(src) = caps.get(1).or_else(|| caps.get(2)) {
            push_unique(&mut sources, src.as_str().trim());
        }
    }

    let kinds = [
        ("img", regex_kind_img()),
        ("background", regex_kind_background()),
        ("avatar", regex_kind_avatar()),
        ("illustration", regex_kind_illustration()),
    ]
    .into_iter()
    .filter(|(_, re)| re.is_match(markup))
    .map(|(kind, _)| kind.to_string())
    .collect();

    ImageSignal {
        found: true,
        count: count_matches(regex_image_count(), markup).max(1),
        sources,
        has_alt: regex_image_alt().is_match(markup),
        kinds,
    }
}

// ----------------------------------------------------------------------------
// Security codes (PIN / verification code / OTP)
// ----------------------------------------------------------------------------

fn regex_pin_keyword() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)\bpin\b|\bpin[-_]|pincode|passcode|\bsenha\b"))
}
// PinField, pinInput: camel/Pascal compounds need a case-sensitive probe
fn regex_pin_compound() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"\b[Pp]in[A-Z]"))
}

fn regex_code_keyword() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r"(?i)code-?input|security-?code|verification-?code|confirmation-?code|sms-?code|\bc[óo]digo\b")
    })
}

fn regex_otp_keyword() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)\botp|one[\s_-]?time[\s_-]?(?:password|code)"))
}

fn regex_digit_phrase() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)\b(\d)\s*-?\s*(?:digits?|d[íi]gitos?)\b"))
}

fn regex_single_char_input() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"(?i)max-?length\s*=\s*["'{]?\s*1\b"#))
}

fn regex_length_prop() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r#"(?i)\b(?:length|digits|cellCount|numberOfDigits|codeLength)\s*=\s*["'{]?\s*(\d)\b"#)
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SecurityLevel {
    #[default]
    None,
    Medium,
    High,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SecuritySignal {
    pub found: bool,
    pub has_pin_input: bool,
    pub has_code_input: bool,
    pub has_otp: bool,
    /// Expected number of digits, 0 when unknown
    pub digit_count: u32,
    pub security_level: SecurityLevel,
}

pub fn extract_security(markup: &str) -> SecuritySignal {
    let has_pin_input = any_match(&[regex_pin_keyword(), regex_pin_compound()], markup);
    let has_code_input = regex_code_keyword().is_match(markup);
    let has_otp = regex_otp_keyword().is_match(markup);

    if !(has_pin_input || has_code_input || has_otp) {
        return SecuritySignal::default();
    }

    let mut security_level = SecurityLevel::None;
    if has_pin_input || has_code_input {
        security_level = SecurityLevel::Medium;
    }
    if has_otp {
        security_level = SecurityLevel::High;
    }

    SecuritySignal {
        found: true,
        has_pin_input,
        has_code_input,
        has_otp,
        digit_count: detect_digit_count(markup),
        security_level,
    }
}

fn detect_digit_count(markup: &str) -> u32 {
    if let Some(n) = regex_digit_phrase()
        .captures(markup)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
    {
        return n;
    }
    let single_cells = count_matches(regex_single_char_input(), markup);
    if single_cells >= 4 {
        return single_cells as u32;
    }
    regex_length_prop()
        .captures(markup)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_variants_and_labels() {
        let markup = r#"
<div class="actions">
  <button class="btn btn-primary">Confirmar</button>
  <Button variant="outline" title="Cancelar" />
</div>"#;
        let signal = extract_buttons(markup);
        assert!(signal.found);
        assert!(signal.count >= 2);
        assert!(signal.has_variant(ButtonVariant::Primary));
        assert!(signal.has_variant(ButtonVariant::Secondary));
        assert!(!signal.has_variant(ButtonVariant::Danger));
        assert_eq!(signal.labels, vec!["Confirmar", "Cancelar"]);
    }

    #[test]
    fn test_button_position_defaults_to_inline() {
        let signal = extract_buttons("<button>Ok</button>");
        assert_eq!(signal.positions, vec![ButtonPosition::Inline]);
    }

    #[test]
    fn test_button_positions_are_independent() {
        let signal = extract_buttons(r#"<header><button/></header><footer><button>Go</button></footer>"#);
        assert!(signal.has_position(ButtonPosition::Footer));
        assert!(signal.has_position(ButtonPosition::Header));
        assert!(!signal.has_position(ButtonPosition::Inline));
    }

    #[test]
    fn test_icon_button_sets_has_icon() {
        let signal = extract_buttons(r#"<IconButton icon="close" />"#);
        assert!(signal.has_icon);
        assert!(signal.has_variant(ButtonVariant::Icon));
    }

    #[test]
    fn test_no_buttons() {
        let signal = extract_buttons("<p>Hello</p>");
        assert_eq!(signal, ButtonSignal::default());
    }

    #[test]
    fn test_inputs_types() {
        let markup = r#"
<label>Email</label>
<input type="email" placeholder="you@example.com" required />
<TextInput secureTextEntry keyboardType="numeric" />
<select><option>A</option></select>"#;
        let signal = extract_inputs(markup);
        assert!(signal.found);
        assert!(signal.has_type("email"));
        assert!(signal.has_type("password"));
        assert!(signal.has_type("number"));
        assert!(signal.has_type("select"));
        assert!(signal.has_labels);
        assert!(signal.has_placeholder);
        assert!(signal.has_validation);
        assert!(signal.count >= 3);
    }

    #[test]
    fn test_plain_input_defaults_to_text() {
        let signal = extract_inputs("<input />");
        assert_eq!(signal.types, vec!["text"]);
    }

    #[test]
    fn test_icons_names_and_libraries() {
        let markup = r#"<ChevronRightIcon /><i class="fa fa-solid fa-house"></i><svg></svg>"#;
        let signal = extract_icons(markup);
        assert!(signal.found);
        assert!(signal.names.contains(&"ChevronRight".to_string()));
        assert!(signal.names.contains(&"house".to_string()));
        assert!(!signal.names.contains(&"solid".to_string()));
        assert!(signal.libraries.contains(&"fontawesome".to_string()));
        assert!(signal.libraries.contains(&"svg".to_string()));
    }

    #[test]
    fn test_images() {
        let markup = r#"<img src="/hero.png" alt="Hero" /><div style="background-image: url('bg.jpg')"></div>"#;
        let signal = extract_images(markup);
        assert!(signal.found);
        assert!(signal.has_alt);
        assert_eq!(signal.sources, vec!["/hero.png", "bg.jpg"]);
        assert!(signal.kinds.contains(&"img".to_string()));
        assert!(signal.kinds.contains(&"background".to_string()));
    }

    #[test]
    fn test_security_pin_is_medium() {
        let signal = extract_security(r#"<PinField length={4} />"#);
        assert!(signal.found);
        assert!(signal.has_pin_input);
        assert_eq!(signal.security_level, SecurityLevel::Medium);
        assert_eq!(signal.digit_count, 4);
    }

    #[test]
    fn test_security_otp_forces_high() {
        let signal = extract_security("Enter the one-time password sent to your phone (6 digits)");
        assert!(signal.has_otp);
        assert!(!signal.has_pin_input);
        assert_eq!(signal.security_level, SecurityLevel::High);
        assert_eq!(signal.digit_count, 6);

        let both = extract_security("<PinInput/> <OtpInput/>");
        assert_eq!(both.security_level, SecurityLevel::High);
    }

    #[test]
    fn test_security_counts_single_char_cells() {
        let cell = r#"<input maxlength="1" />"#;
        let markup = format!("<div class=\"code-input\">{}</div>", cell.repeat(5));
        let signal = extract_security(&markup);
        assert!(signal.has_code_input);
        assert_eq!(signal.digit_count, 5);
    }

    #[test]
    fn test_security_ignores_unrelated_words() {
        let signal = extract_security("<p>Spinner and pink pineapple</p>");
        assert_eq!(signal, SecuritySignal::default());
    }
}
