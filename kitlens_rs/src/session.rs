//! Catalog-backed entry point shared by the tool server and library users.
//!
//! A [`Kitlens`] owns an optional catalog plus configuration. Every
//! catalog-dependent operation fails with [`CatalogError::NotLoaded`] when
//! no catalog was supplied, instead of answering from an empty list.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::analyzer::{CombinedAnalysis, analyze_markup};
use crate::catalog::{
    CatalogComponent, CatalogError, CatalogProvider, Category, JsonCatalog, by_category,
    category_summary, find_by_name,
};
use crate::config::KitlensConfig;
use crate::mapper::{ComponentMapper, ComponentSuggestion};
use crate::search::{ScoredComponent, search_multiple_terms, search_scored};
use crate::snippets::{generate_refactored_code, generate_usage_example};

/// Result of mapping one markup export onto the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappingReport {
    pub analysis: CombinedAnalysis,
    pub suggestions: Vec<ComponentSuggestion>,
    pub refactored_code: String,
}

#[derive(Debug, Clone, Default)]
pub struct Kitlens {
    catalog: Option<Vec<CatalogComponent>>,
    config: KitlensConfig,
}

impl Kitlens {
    /// Session without a catalog; only markup analysis is available.
    pub fn new(config: KitlensConfig) -> Self {
        Self {
            catalog: None,
            config,
        }
    }

    pub fn with_catalog(config: KitlensConfig, catalog: Vec<CatalogComponent>) -> Self {
        Self {
            catalog: Some(catalog),
            config,
        }
    }

    pub fn from_provider(
        config: KitlensConfig,
        provider: &dyn CatalogProvider,
    ) -> Result<Self, CatalogError> {
        Ok(Self::with_catalog(config, provider.components()?))
    }

    /// Load the catalog from `catalog_path`, falling back to the configured
    /// `catalog.path`. With neither, the session starts without a catalog.
    pub fn load(config: KitlensConfig, catalog_path: Option<&Path>) -> Result<Self, CatalogError> {
        let path = catalog_path
            .map(Path::to_path_buf)
            .or_else(|| config.catalog.path.clone());
        match path {
            Some(path) => Self::from_provider(config, &JsonCatalog::new(path)),
            None => {
                debug!("No catalog configured");
                Ok(Self::new(config))
            }
        }
    }

    pub fn config(&self) -> &KitlensConfig {
        &self.config
    }

    pub fn catalog(&self) -> Result<&[CatalogComponent], CatalogError> {
        self.catalog.as_deref().ok_or(CatalogError::NotLoaded)
    }

    pub fn list(&self, category: Option<Category>) -> Result<Vec<&CatalogComponent>, CatalogError> {
        let catalog = self.catalog()?;
        Ok(match category {
            Some(category) => by_category(catalog, category),
            None => catalog.iter().collect(),
        })
    }

    pub fn categories(&self) -> Result<Vec<(Category, usize)>, CatalogError> {
        Ok(category_summary(self.catalog()?))
    }

    pub fn component(&self, name: &str) -> Result<Option<&CatalogComponent>, CatalogError> {
        Ok(find_by_name(self.catalog()?, name))
    }

    pub fn search(
        &self,
        query: &str,
        limit: Option<usize>,
    ) -> Result<Vec<ScoredComponent>, CatalogError> {
        let mut results = search_scored(self.catalog()?, query);
        if let Some(limit) = limit {
            results.truncate(limit);
        }
        Ok(results)
    }

    pub fn search_multi(
        &self,
        terms: &[&str],
        limit: Option<usize>,
    ) -> Result<Vec<ScoredComponent>, CatalogError> {
        let mut results = search_multiple_terms(self.catalog()?, terms);
        if let Some(limit) = limit {
            results.truncate(limit);
        }
        Ok(results)
    }

    /// Analyze `markup`, rank catalog components and draft refactored code.
    /// `limit` defaults to the configured `mapping.max_suggestions`.
    pub fn figma_to_components(
        &self,
        markup: &str,
        limit: Option<usize>,
    ) -> Result<MappingReport, CatalogError> {
        let catalog = self.catalog()?;
        let analysis = analyze_markup(markup);
        let limit = limit.unwrap_or_else(|| self.config.max_suggestions());
        let suggestions = ComponentMapper::new(catalog).with_limit(limit).map(
            &analysis.elements,
            &analysis.structure,
            &analysis.patterns,
        );
        let refactored_code =
            generate_refactored_code(&analysis, &suggestions, &self.config.snippets.package);
        Ok(MappingReport {
            analysis,
            suggestions,
            refactored_code,
        })
    }

    pub fn usage(&self, name: &str) -> Result<Option<String>, CatalogError> {
        Ok(self
            .component(name)?
            .map(|component| generate_usage_example(component, &self.config.snippets.package)))
    }
}
