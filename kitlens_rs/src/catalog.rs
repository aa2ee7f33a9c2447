//! Design-system catalog model.
//!
//! The catalog is supplied by an external provider (scraper, cache, JSON file)
//! and treated as read-only input by every analysis pass.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Fixed set of catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Components,
    Layout,
    Icons,
    Utilities,
    Hooks,
    Feedback,
    Community,
    Lab,
    Patterns,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Components,
        Category::Layout,
        Category::Icons,
        Category::Utilities,
        Category::Hooks,
        Category::Feedback,
        Category::Community,
        Category::Lab,
        Category::Patterns,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Components => "components",
            Self::Layout => "layout",
            Self::Icons => "icons",
            Self::Utilities => "utilities",
            Self::Hooks => "hooks",
            Self::Feedback => "feedback",
            Self::Community => "community",
            Self::Lab => "lab",
            Self::Patterns => "patterns",
        }
    }

    /// Score bonus applied by the component mapper.
    pub fn mapping_bonus(&self) -> i32 {
        match self {
            Self::Components => 25,
            Self::Layout => 20,
            Self::Icons => 15,
            Self::Utilities => 10,
            Self::Hooks => 5,
            _ => 0,
        }
    }

    /// Parse a category name, accepting the naive singular form ("icon").
    pub fn parse(raw: &str) -> Option<Self> {
        let lowered = raw.trim().to_lowercase();
        Self::ALL.into_iter().find(|c| {
            let name = c.as_str();
            name == lowered || name.trim_end_matches('s') == lowered
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single documented prop of a catalog component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub prop_type: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default)]
    pub description: String,
}

/// One entry of the design-system inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogComponent {
    pub id: String,
    pub name: String,
    pub category: Category,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub props: Vec<PropInfo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story_url: Option<String>,
}

impl CatalogComponent {
    /// Minimal constructor used by in-memory catalogs and tests.
    pub fn new(name: &str, category: Category, description: &str) -> Self {
        Self {
            id: format!("{}-{}", category.as_str(), name.to_lowercase()),
            name: name.to_string(),
            category,
            description: description.to_string(),
            props: Vec::new(),
            examples: Vec::new(),
            story_url: None,
        }
    }

    pub fn with_props(mut self, props: Vec<PropInfo>) -> Self {
        self.props = props;
        self
    }

    pub fn with_examples(mut self, examples: Vec<String>) -> Self {
        self.examples = examples;
        self
    }

    pub fn required_props(&self) -> impl Iterator<Item = &PropInfo> {
        self.props.iter().filter(|p| p.required)
    }
}

/// Catalog acquisition errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The caller asked for catalog-backed work without supplying a catalog.
    #[error("component catalog not loaded (configure catalog.path or pass --catalog)")]
    NotLoaded,
}

/// Source of catalog components.
pub trait CatalogProvider {
    fn components(&self) -> Result<Vec<CatalogComponent>, CatalogError>;
}

/// In-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    components: Vec<CatalogComponent>,
}

impl StaticCatalog {
    pub fn new(components: Vec<CatalogComponent>) -> Self {
        Self { components }
    }
}

impl CatalogProvider for StaticCatalog {
    fn components(&self) -> Result<Vec<CatalogComponent>, CatalogError> {
        Ok(self.components.clone())
    }
}

/// Catalog stored as a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogProvider for JsonCatalog {
    fn components(&self) -> Result<Vec<CatalogComponent>, CatalogError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;
        let parsed: Vec<CatalogComponent> =
            serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
                path: self.path.clone(),
                source,
            })?;
        let total = parsed.len();
        let components = dedup_catalog(parsed);
        debug!(
            "Loaded {} catalog components from {} ({} raw)",
            components.len(),
            self.path.display(),
            total
        );
        Ok(components)
    }
}

/// Drop later entries that repeat `(category, lowercase name)`.
pub fn dedup_catalog(components: Vec<CatalogComponent>) -> Vec<CatalogComponent> {
    let mut seen: HashSet<(Category, String)> = HashSet::new();
    components
        .into_iter()
        .filter(|c| {
            let fresh = seen.insert((c.category, c.name.to_lowercase()));
            if !fresh {
                warn!(
                    "Duplicate catalog entry {}/{} dropped",
                    c.category.as_str(),
                    c.name
                );
            }
            fresh
        })
        .collect()
}

/// Case-insensitive exact name lookup.
pub fn find_by_name<'a>(catalog: &'a [CatalogComponent], name: &str) -> Option<&'a CatalogComponent> {
    let wanted = name.trim().to_lowercase();
    catalog.iter().find(|c| c.name.to_lowercase() == wanted)
}

pub fn by_category(catalog: &[CatalogComponent], category: Category) -> Vec<&CatalogComponent> {
    catalog.iter().filter(|c| c.category == category).collect()
}

/// Component count per category, in `Category::ALL` order, skipping empty ones.
pub fn category_summary(catalog: &[CatalogComponent]) -> Vec<(Category, usize)> {
    Category::ALL
        .into_iter()
        .filter_map(|cat| {
            let count = catalog.iter().filter(|c| c.category == cat).count();
            (count > 0).then_some((cat, count))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn sample() -> Vec<CatalogComponent> {
        vec![
            CatalogComponent::new("ButtonPrimary", Category::Components, "Botão principal"),
            CatalogComponent::new("Stack", Category::Layout, "Vertical stack"),
            CatalogComponent::new("IconArrow", Category::Icons, "Arrow icon"),
        ]
    }

    #[test]
    fn test_category_bonus_table() {
        assert_eq!(Category::Components.mapping_bonus(), 25);
        assert_eq!(Category::Layout.mapping_bonus(), 20);
        assert_eq!(Category::Icons.mapping_bonus(), 15);
        assert_eq!(Category::Utilities.mapping_bonus(), 10);
        assert_eq!(Category::Hooks.mapping_bonus(), 5);
        assert_eq!(Category::Lab.mapping_bonus(), 0);
        assert_eq!(Category::Patterns.mapping_bonus(), 0);
    }

    #[test]
    fn test_category_parse_accepts_singular() {
        assert_eq!(Category::parse("icon"), Some(Category::Icons));
        assert_eq!(Category::parse(" Layout "), Some(Category::Layout));
        assert_eq!(Category::parse("lab"), Some(Category::Lab));
        assert_eq!(Category::parse("widgets"), None);
    }

    #[test]
    fn test_find_by_name_is_case_insensitive() {
        let catalog = sample();
        let found = find_by_name(&catalog, "buttonprimary").expect("component");
        assert_eq!(found.name, "ButtonPrimary");
        assert!(find_by_name(&catalog, "Button").is_none());
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let mut catalog = sample();
        catalog.push(CatalogComponent::new(
            "buttonprimary",
            Category::Components,
            "duplicate",
        ));
        catalog.push(CatalogComponent::new("Stack", Category::Lab, "lab stack"));
        let deduped = dedup_catalog(catalog);
        assert_eq!(deduped.len(), 4, "same name in another category survives");
        assert_eq!(deduped[0].description, "Botão principal");
    }

    #[test]
    fn test_category_summary_skips_empty() {
        let summary = category_summary(&sample());
        assert_eq!(
            summary,
            vec![
                (Category::Components, 1),
                (Category::Layout, 1),
                (Category::Icons, 1)
            ]
        );
    }

    #[test]
    fn test_json_catalog_roundtrip_fields() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("catalog.json");
        let mut file = std::fs::File::create(&path).expect("create catalog");
        writeln!(
            file,
            r#"[
  {{
    "id": "components-pinfield",
    "name": "PinField",
    "category": "components",
    "description": "Campo de PIN de segurança",
    "props": [{{"name": "length", "type": "number", "required": true}}],
    "storyUrl": "https://storybook.example/pinfield"
  }}
]"#
        )
        .expect("write catalog");

        let components = JsonCatalog::new(&path).components().expect("load catalog");
        assert_eq!(components.len(), 1);
        let pin = &components[0];
        assert_eq!(pin.category, Category::Components);
        assert_eq!(pin.props[0].prop_type, "number");
        assert!(pin.props[0].required);
        assert_eq!(
            pin.story_url.as_deref(),
            Some("https://storybook.example/pinfield")
        );
    }

    #[test]
    fn test_json_catalog_missing_file_is_io_error() {
        let temp = TempDir::new().expect("temp dir");
        let err = JsonCatalog::new(temp.path().join("nope.json"))
            .components()
            .unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_json_catalog_invalid_json_is_parse_error() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("bad.json");
        std::fs::write(&path, "{ not json").expect("write");
        let err = JsonCatalog::new(&path).components().unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }
}
