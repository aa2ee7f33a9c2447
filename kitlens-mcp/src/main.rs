//! # kitlens-mcp
//!
//! MCP server for kitlens - design-system catalog search and
//! markup-to-component mapping over stdio.
//!
//! ## Architecture
//!
//! - **Catalog once**: The component catalog is loaded at startup and kept in RAM
//! - **Thin dispatch**: Every tool forwards to the `kitlens` library
//! - **Fail loud**: Catalog-backed tools answer with an error when no catalog is loaded
//!
//! ## Usage
//!
//! ```bash
//! # Catalog from the command line
//! kitlens-mcp --catalog design/catalog.json
//!
//! # Catalog from .kitlens/config.toml in the working directory
//! kitlens-mcp
//! ```

use std::panic;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::ServerInfo;
use rmcp::{ServerHandler, ServiceExt, tool, tool_handler, tool_router};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use kitlens::{Category, Kitlens, KitlensConfig, MAX_SUGGESTIONS, analyze_markup};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "kitlens-mcp")]
#[command(about = "MCP server for kitlens - design-system catalog intelligence")]
#[command(version)]
struct Args {
    /// Component catalog (JSON array); overrides catalog.path from config
    #[arg(long, env = "KITLENS_CATALOG")]
    catalog: Option<PathBuf>,

    /// Directory holding .kitlens/config.toml
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

// ============================================================================
// Tool Parameter Types
// ============================================================================

fn default_limit() -> usize {
    MAX_SUGGESTIONS
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
struct ListParams {
    /// Category filter (components, layout, icons, utilities, hooks, feedback,
    /// community, lab, patterns). Omit to list everything.
    #[serde(default)]
    category: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
struct ComponentParams {
    /// Component name (case-insensitive)
    name: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
struct SearchParams {
    /// Free-text query, e.g. 'primary button' or 'pin field'
    query: String,
    /// Maximum results to return (default: 10)
    #[serde(default = "default_limit")]
    limit: usize,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
struct MultiSearchParams {
    /// Independent search terms; components ranking well for several terms win
    terms: Vec<String>,
    /// Maximum results to return (default: 10)
    #[serde(default = "default_limit")]
    limit: usize,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
struct MarkupParams {
    /// Exported design code (Figma export, JSX or HTML)
    markup: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
struct MappingParams {
    /// Exported design code (Figma export, JSX or HTML)
    markup: String,
    /// Maximum suggestions, 1-10 (default: mapping.max_suggestions from config)
    #[serde(default)]
    limit: Option<usize>,
}

// ============================================================================
// Server State
// ============================================================================

#[derive(Clone)]
struct KitlensServer {
    /// Catalog and configuration, loaded once at startup
    session: Arc<Kitlens>,
    /// Tool router (generated by macro)
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl KitlensServer {
    fn new(session: Kitlens) -> Self {
        Self {
            session: Arc::new(session),
            tool_router: Self::tool_router(),
        }
    }

    fn to_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("Serialization error: {}", e))
    }
}

fn parse_category(raw: &str) -> Result<Category, String> {
    Category::parse(raw).ok_or_else(|| {
        let known: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        format!("unknown category '{}' (expected one of: {})", raw, known.join(", "))
    })
}

// ============================================================================
// MCP Tool Implementations
// ============================================================================

#[tool_router]
impl KitlensServer {
    /// List catalog components, optionally for one category
    #[tool(
        name = "list_components",
        description = "List design-system components with their category and description. Pass 'category' to narrow the list. Includes a per-category count."
    )]
    async fn list_components(&self, Parameters(params): Parameters<ListParams>) -> String {
        let category = match params.category.as_deref().map(parse_category).transpose() {
            Ok(c) => c,
            Err(e) => return format!("Error: {}", e),
        };
        let components = match self.session.list(category) {
            Ok(c) => c,
            Err(e) => return format!("Error: {}", e),
        };
        let categories = self.session.categories().unwrap_or_default();

        let result = serde_json::json!({
            "count": components.len(),
            "categories": categories
                .iter()
                .map(|(c, n)| serde_json::json!({ "category": c, "count": n }))
                .collect::<Vec<_>>(),
            "components": components
                .iter()
                .map(|c| serde_json::json!({
                    "name": c.name,
                    "category": c.category,
                    "description": c.description
                }))
                .collect::<Vec<_>>()
        });
        Self::to_json(&result)
    }

    /// Full catalog entry for one component
    #[tool(
        name = "get_component",
        description = "Get one component's full catalog entry: description, props (type, required, default) and examples. Name lookup is case-insensitive."
    )]
    async fn get_component(&self, Parameters(params): Parameters<ComponentParams>) -> String {
        match self.session.component(&params.name) {
            Ok(Some(component)) => Self::to_json(component),
            Ok(None) => format!("Error: component '{}' not found", params.name),
            Err(e) => format!("Error: {}", e),
        }
    }

    /// Ranked catalog search
    #[tool(
        name = "search_components",
        description = "Search the component catalog. Matches names, synonyms and descriptions; an exact name scores 100. USE THIS BEFORE writing a new component."
    )]
    async fn search_components(&self, Parameters(params): Parameters<SearchParams>) -> String {
        match self.session.search(&params.query, Some(params.limit)) {
            Ok(results) => {
                debug!(query = %params.query, hits = results.len(), "search");
                Self::to_json(&serde_json::json!({
                    "query": params.query,
                    "count": results.len(),
                    "results": results
                }))
            }
            Err(e) => format!("Error: {}", e),
        }
    }

    /// Search with several terms at once
    #[tool(
        name = "search_components_multi",
        description = "Search with several independent terms (e.g. ['button', 'icon']) and rank components by how well they place across all of them."
    )]
    async fn search_components_multi(
        &self,
        Parameters(params): Parameters<MultiSearchParams>,
    ) -> String {
        let terms: Vec<&str> = params.terms.iter().map(String::as_str).collect();
        match self.session.search_multi(&terms, Some(params.limit)) {
            Ok(results) => Self::to_json(&serde_json::json!({
                "terms": params.terms,
                "count": results.len(),
                "results": results
            })),
            Err(e) => format!("Error: {}", e),
        }
    }

    /// Structural analysis of a design export
    #[tool(
        name = "analyze_markup",
        description = "Analyze exported design code without touching the catalog: element families, layout type, patterns, structure, typography presets and color tokens."
    )]
    async fn analyze_markup(&self, Parameters(params): Parameters<MarkupParams>) -> String {
        Self::to_json(&analyze_markup(&params.markup))
    }

    /// Map a design export onto catalog components
    #[tool(
        name = "figma_to_components",
        description = "Map exported design code (Figma, JSX, HTML) to catalog components. Returns up to 10 ranked suggestions with reasons, the full analysis and a refactored code skeleton."
    )]
    async fn figma_to_components(&self, Parameters(params): Parameters<MappingParams>) -> String {
        match self.session.figma_to_components(&params.markup, params.limit) {
            Ok(report) => {
                debug!(suggestions = report.suggestions.len(), "figma_to_components");
                Self::to_json(&report)
            }
            Err(e) => format!("Error: {}", e),
        }
    }

    /// Usage snippet for one component
    #[tool(
        name = "component_usage",
        description = "Get a ready-to-paste usage example for a component: import line plus its required props, or its first documented example."
    )]
    async fn component_usage(&self, Parameters(params): Parameters<ComponentParams>) -> String {
        match self.session.usage(&params.name) {
            Ok(Some(usage)) => Self::to_json(&serde_json::json!({
                "name": params.name,
                "usage": usage
            })),
            Ok(None) => format!("Error: component '{}' not found", params.name),
            Err(e) => format!("Error: {}", e),
        }
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler(router = self.tool_router)]
impl ServerHandler for KitlensServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: rmcp::model::ServerCapabilities {
                tools: Some(rmcp::model::ToolsCapability::default()),
                ..Default::default()
            },
            server_info: rmcp::model::Implementation {
                name: "kitlens".to_string(),
                title: Some("Kitlens MCP Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: None,
                icons: None,
                website_url: Some("https://github.com/kitlens/kitlens".to_string()),
            },
            instructions: Some(
                "Design-system catalog for this project. Reuse catalog components instead of \
                 writing new ones.\n\n\
                 CATALOG TOOLS:\n\
                 - search_components(query) - Start here. Ranked components for a need.\n\
                 - search_components_multi(terms) - Several needs at once.\n\
                 - list_components(category?) - Browse the inventory.\n\
                 - get_component(name) - Props and examples.\n\
                 - component_usage(name) - Paste-ready snippet.\n\n\
                 DESIGN EXPORT TOOLS:\n\
                 - figma_to_components(markup) - Suggested components + refactored skeleton.\n\
                 - analyze_markup(markup) - Raw analysis (typography, colors, patterns)."
                    .into(),
            ),
        }
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

/// Client hang-ups surface as EPIPE, either as a panic or as a serve error.
fn is_broken_pipe(message: &str) -> bool {
    message.contains("Broken pipe") || message.contains("os error 32")
}

/// Log panics to stderr and exit with status 1.
fn install_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        let msg = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        if is_broken_pipe(&msg) {
            eprintln!("[kitlens-mcp] Client disconnected (broken pipe), shutting down");
        } else {
            let location = panic_info
                .location()
                .map(|loc| format!(" at {}:{}:{}", loc.file(), loc.line(), loc.column()))
                .unwrap_or_default();
            eprintln!("[kitlens-mcp] Panic{}: {}", location, msg);
        }

        std::process::exit(1);
    }));
}

/// Ignore SIGPIPE so writes to a closed pipe fail with EPIPE instead of
/// terminating the process.
#[cfg(unix)]
fn ignore_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_IGN);
    }
}

#[cfg(not(unix))]
fn ignore_sigpipe() {}

fn load_session(args: &Args) -> Result<Kitlens> {
    let config = KitlensConfig::load(&args.root);
    let session = Kitlens::load(config, args.catalog.as_deref())
        .context("Failed to load component catalog")?;
    match session.catalog() {
        Ok(catalog) => info!("Catalog loaded: {} components", catalog.len()),
        Err(_) => warn!("No catalog configured; only analyze_markup will answer"),
    }
    Ok(session)
}

async fn run_server() -> Result<()> {
    let args = Args::parse();

    // stdout carries JSON-RPC
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("Starting kitlens-mcp v{}", env!("CARGO_PKG_VERSION"));

    let server = KitlensServer::new(load_session(&args)?);

    info!("Server ready. Listening on stdio...");

    server
        .serve(rmcp::transport::stdio())
        .await?
        .waiting()
        .await?;

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    ignore_sigpipe();
    install_panic_hook();

    match run_server().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if is_broken_pipe(&format!("{e:?}")) {
                eprintln!("[kitlens-mcp] Client disconnected, shutting down");
                ExitCode::SUCCESS
            } else {
                eprintln!("[kitlens-mcp] Error: {:#}", e);
                ExitCode::FAILURE
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kitlens::CatalogComponent;
    use std::io::Write;
    use tempfile::TempDir;

    fn server() -> KitlensServer {
        KitlensServer::new(Kitlens::with_catalog(
            KitlensConfig::default(),
            vec![
                CatalogComponent::new("ButtonPrimary", Category::Components, "Botão principal"),
                CatalogComponent::new("Icon", Category::Icons, "Vector icon"),
            ],
        ))
    }

    #[test]
    fn test_broken_pipe_detection() {
        assert!(is_broken_pipe("failed to write: Broken pipe (os error 32)"));
        assert!(is_broken_pipe("Io(Os { code: 32 }) os error 32"));
        assert!(!is_broken_pipe("Failed to load component catalog"));
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category("Icons"), Ok(Category::Icons));
        assert_eq!(parse_category("hook"), Ok(Category::Hooks));
        let err = parse_category("widgets").unwrap_err();
        assert!(err.contains("unknown category 'widgets'"));
        assert!(err.contains("components, layout"));
    }

    #[tokio::test]
    async fn test_tools_without_catalog_report_error() {
        let server = KitlensServer::new(Kitlens::new(KitlensConfig::default()));
        let out = server
            .search_components(Parameters(SearchParams {
                query: "button".to_string(),
                limit: 10,
            }))
            .await;
        assert!(out.starts_with("Error: component catalog not loaded"), "{out}");

        let analysis = server
            .analyze_markup(Parameters(MarkupParams {
                markup: "<button>Ok</button>".to_string(),
            }))
            .await;
        assert!(analysis.contains("\"buttons\""), "analysis needs no catalog");
    }

    #[tokio::test]
    async fn test_search_and_lookup() {
        let server = server();
        let out = server
            .search_components(Parameters(SearchParams {
                query: "button".to_string(),
                limit: 10,
            }))
            .await;
        let json: serde_json::Value = serde_json::from_str(&out).expect("json");
        assert_eq!(json["count"], 1);
        assert_eq!(json["results"][0]["component"]["name"], "ButtonPrimary");

        let missing = server
            .get_component(Parameters(ComponentParams {
                name: "Nope".to_string(),
            }))
            .await;
        assert_eq!(missing, "Error: component 'Nope' not found");
    }

    #[tokio::test]
    async fn test_list_with_bad_category() {
        let out = server()
            .list_components(Parameters(ListParams {
                category: Some("widgets".to_string()),
            }))
            .await;
        assert!(out.starts_with("Error: unknown category"));
    }

    #[test]
    fn test_load_session_from_flag() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("catalog.json");
        let mut file = std::fs::File::create(&path).expect("create catalog");
        writeln!(
            file,
            r#"[{{"id":"icons-icon","name":"Icon","category":"icons"}}]"#
        )
        .expect("write catalog");

        let args = Args {
            catalog: Some(path),
            root: temp.path().to_path_buf(),
            log_level: "info".to_string(),
        };
        let session = load_session(&args).expect("session");
        assert_eq!(session.catalog().expect("catalog").len(), 1);
    }
}
