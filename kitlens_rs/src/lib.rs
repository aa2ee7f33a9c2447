//! # kitlens
//!
//! **Design-system catalog intelligence for AI agents** - query a component
//! catalog and map pasted design exports (Figma code, JSX, HTML) onto the
//! components you already ship.
//!
//! ## Features
//!
//! - **Catalog search** - Name matching, synonyms and contextual boosting
//! - **Markup analysis** - Element families, layout patterns, structure
//! - **Typography tokens** - Pixel sizes and weights mapped to text presets
//! - **Color tokens** - Literals normalized and matched to semantic tokens
//! - **Component mapping** - Ranked, explained catalog suggestions
//! - **Snippets** - Refactoring skeletons and usage examples
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust
//! use kitlens::{CatalogComponent, Category, analyze_markup, map_to_components};
//!
//! let catalog = vec![
//!     CatalogComponent::new("FixedFooter", Category::Layout, "Layout with a fixed footer"),
//!     CatalogComponent::new("ButtonPrimary", Category::Components, "Primary button"),
//! ];
//! let analysis = analyze_markup(
//!     r#"<footer class="fixed-footer"><button class="btn-primary">Ok</button></footer>"#,
//! );
//! let suggestions = map_to_components(&analysis, &catalog);
//! assert!(suggestions.iter().any(|s| s.component.name == "FixedFooter"));
//! ```
//!
//! ## Sessions
//!
//! ```rust,no_run
//! use kitlens::{Kitlens, KitlensConfig};
//! use std::path::Path;
//!
//! let config = KitlensConfig::load(Path::new("."));
//! let session = Kitlens::load(config, None).unwrap();
//! let report = session.figma_to_components("<Button>Ok</Button>", Some(5)).unwrap();
//! println!("{}", report.refactored_code);
//! ```

// ============================================================================
// Core Modules
// ============================================================================

/// Markup analyzers: element families, typography, colors, patterns.
///
/// # Submodules
///
/// - [`analyzer::elements`] - Per-family element signals
/// - [`analyzer::typography`] - Text level and weight inference
/// - [`analyzer::color_tokens`] - Color normalization and token matching
/// - [`analyzer::patterns`] - Structural patterns and complexity
/// - [`analyzer::figma`] - Combined analysis of one export
pub mod analyzer;

/// Component catalog model and providers.
pub mod catalog;

/// `.kitlens/config.toml` support.
pub mod config;

/// Ranking catalog components against an analysis.
pub mod mapper;

/// Catalog search.
pub mod search;

/// Catalog-backed session used by the tool server.
pub mod session;

/// Refactoring and usage snippet generation.
pub mod snippets;

// ============================================================================
// Re-exports
// ============================================================================

pub use analyzer::{CombinedAnalysis, analyze_markup};
pub use catalog::{
    CatalogComponent, CatalogError, CatalogProvider, Category, JsonCatalog, PropInfo,
    StaticCatalog,
};
pub use config::KitlensConfig;
pub use mapper::{ComponentMapper, ComponentSuggestion, MAX_SUGGESTIONS, map_to_components};
pub use search::{ScoredComponent, search, search_multiple_terms, search_scored};
pub use session::{Kitlens, MappingReport};
pub use snippets::{generate_refactored_code, generate_usage_example};
