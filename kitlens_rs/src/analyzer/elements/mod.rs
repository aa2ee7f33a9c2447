//! UI element extraction from free-form markup.
//!
//! Every family detector is an independent set of case-insensitive probes over
//! the raw text. Families never exclude each other: a `button` inside a footer
//! sets both the button and the layout signals. A family that is not found is
//! returned as its `Default` value, so `found == false` always comes with zero
//! counts and empty lists.

mod controls;
mod feedback;
mod spacing;
mod structure;
mod text;

use serde::Serialize;

pub use controls::{
    ButtonPosition, ButtonSignal, ButtonVariant, IconSignal, ImageSignal, InputSignal,
    SecurityLevel, SecuritySignal, extract_buttons, extract_icons, extract_images, extract_inputs,
    extract_security,
};
pub use feedback::{
    ComponentType, FeedbackKind, FeedbackSignal, FigmaComponent, GenericComponentSignal,
    NameVariants, extract_feedback, extract_figma_component_names, extract_generic_components,
};
pub use spacing::{SpacingPattern, SpacingSignal, extract_spacing};
pub use structure::{
    ContainerSignal, FormSignal, LayoutSignal, LayoutType, ListSignal, NavigationSignal,
    extract_containers, extract_forms, extract_layouts, extract_lists, extract_navigation,
};
pub use text::{
    PresetSource, TextPreset, TextSignal, extract_figma_text_presets, extract_text_hierarchy,
    extract_texts,
};

/// All element-family signals for one markup blob.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ElementSignals {
    pub buttons: ButtonSignal,
    pub texts: TextSignal,
    pub lists: ListSignal,
    pub containers: ContainerSignal,
    pub icons: IconSignal,
    pub inputs: InputSignal,
    pub images: ImageSignal,
    pub navigation: NavigationSignal,
    pub layouts: LayoutSignal,
    pub security: SecuritySignal,
    pub forms: FormSignal,
    pub spacing: SpacingSignal,
    pub feedback: FeedbackSignal,
    pub generic_components: GenericComponentSignal,
}

impl ElementSignals {
    /// Names of the families that were found, in declaration order.
    pub fn found_families(&self) -> Vec<&'static str> {
        [
            ("buttons", self.buttons.found),
            ("texts", self.texts.found),
            ("lists", self.lists.found),
            ("containers", self.containers.found),
            ("icons", self.icons.found),
            ("inputs", self.inputs.found),
            ("images", self.images.found),
            ("navigation", self.navigation.found),
            ("layouts", self.layouts.found),
            ("security", self.security.found),
            ("forms", self.forms.found),
            ("spacing", self.spacing.found),
            ("feedback", self.feedback.found),
            ("generic_components", self.generic_components.found),
        ]
        .into_iter()
        .filter_map(|(name, found)| found.then_some(name))
        .collect()
    }
}

/// Run every family detector over `markup`.
pub fn extract(markup: &str) -> ElementSignals {
    ElementSignals {
        buttons: extract_buttons(markup),
        texts: extract_texts(markup),
        lists: extract_lists(markup),
        containers: extract_containers(markup),
        icons: extract_icons(markup),
        inputs: extract_inputs(markup),
        images: extract_images(markup),
        navigation: extract_navigation(markup),
        layouts: extract_layouts(markup),
        security: extract_security(markup),
        forms: extract_forms(markup),
        spacing: extract_spacing(markup),
        feedback: extract_feedback(markup),
        generic_components: extract_generic_components(markup),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_finds_nothing() {
        let signals = extract("");
        assert_eq!(signals, ElementSignals::default());
        assert!(signals.found_families().is_empty());
    }

    #[test]
    fn test_binary_looking_input_is_total() {
        let junk = "\u{0}\u{1}\u{fffd}<<<>>>{{}}}}##rgb(((";
        let signals = extract(junk);
        assert!(!signals.buttons.found);
        assert!(!signals.texts.found);
    }

    #[test]
    fn test_families_overlap_freely() {
        let markup = r#"
<footer class="fixed-footer">
  <button class="btn-primary">Continuar</button>
</footer>
"#;
        let signals = extract(markup);
        assert!(signals.buttons.found);
        assert!(signals.layouts.found);
        assert_eq!(signals.layouts.layout_type, LayoutType::FixedFooterWithButton);
        let families = signals.found_families();
        assert!(families.contains(&"buttons"));
        assert!(families.contains(&"layouts"));
    }
}
