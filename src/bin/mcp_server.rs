//! Pokemon Atlas MCP Server
//!
//! A Model Context Protocol server (rmcp) that exposes the type ranking,
//! counter search, evolution chains and set notation as tools over stdio.

use std::borrow::Cow;
use std::sync::Arc;

use pokemon_atlas::mcp_interface::*;
use pokemon_atlas::{AtlasConfig, CounterSearchOptions, PokeApiClient};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ErrorData as McpError, *},
    schemars, tool, tool_handler, tool_router, ServerHandler, ServiceExt,
};
use serde::Deserialize;
use tokio::io::{stdin, stdout};
use tracing::info;

const DEFAULT_SEARCH_LIMIT: usize = 20;

#[derive(Debug, Clone)]
pub struct PokemonAtlasService {
    tool_router: ToolRouter<PokemonAtlasService>,
    client: Arc<PokeApiClient>,
    counters: CounterSearchOptions,
}

// Tool request structures
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RankRequest {
    #[schemars(description = "One or two defending type names, e.g. [\"rock\", \"ground\"]")]
    pub types: Vec<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CountersRequest {
    #[schemars(description = "One or two defending type names")]
    pub types: Vec<String>,
    #[schemars(description = "Minimum number of super-effective types a counter must cover (default 2)")]
    pub min_match_types: Option<usize>,
    #[schemars(description = "Maximum number of counters to return (default 24)")]
    pub max_results: Option<usize>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EvolutionRequest {
    #[schemars(description = "Species name, e.g. \"ivysaur\"")]
    pub species: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchRequest {
    #[schemars(description = "Case-insensitive substring of a creature name")]
    pub query: String,
    #[schemars(description = "Maximum number of names to return (default 20)")]
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ExportSetRequest {
    #[schemars(description = "Creature name or id to build a starting set for")]
    pub name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ImportSetRequest {
    #[schemars(description = "One or more set blocks separated by blank lines")]
    pub text: String,
}

fn check_type_count(types: &[String]) -> Result<(), McpError> {
    if types.is_empty() || types.len() > 2 {
        return Err(McpError {
            code: ErrorCode(-32602),
            message: Cow::from(format!(
                "Expected one or two defending types, got {}",
                types.len()
            )),
            data: None,
        });
    }
    Ok(())
}

#[tool_router]
impl PokemonAtlasService {
    pub fn new(client: PokeApiClient, counters: CounterSearchOptions) -> Self {
        Self {
            tool_router: Self::tool_router(),
            client: Arc::new(client),
            counters,
        }
    }

    #[tool(description = "Rank all 18 attacking types by damage multiplier against a defender")]
    async fn rank_attack_types(
        &self,
        Parameters(request): Parameters<RankRequest>,
    ) -> Result<CallToolResult, McpError> {
        check_type_count(&request.types)?;
        let text = rank_display(&request.types);
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Find creatures whose own types cover several super-effective attacking types")]
    async fn find_counters(
        &self,
        Parameters(request): Parameters<CountersRequest>,
    ) -> Result<CallToolResult, McpError> {
        check_type_count(&request.types)?;
        let mut options = self.counters;
        if let Some(min_match) = request.min_match_types {
            options = options.with_min_match_types(min_match);
        }
        if let Some(max) = request.max_results {
            options = options.with_max_results(max);
        }
        let text = counters_display(self.client.as_ref(), &request.types, &options).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Show the evolution chain of a species as stages, with transition conditions")]
    async fn evolution_chain(
        &self,
        Parameters(request): Parameters<EvolutionRequest>,
    ) -> Result<CallToolResult, McpError> {
        let text = evolution_display(self.client.as_ref(), &request.species).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Search creature names by substring")]
    async fn search_names(
        &self,
        Parameters(request): Parameters<SearchRequest>,
    ) -> Result<CallToolResult, McpError> {
        let limit = request.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
        let text = search_display(self.client.as_ref(), &request.query, limit).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Build a starting set for a creature in plain-text set notation")]
    async fn export_set(
        &self,
        Parameters(request): Parameters<ExportSetRequest>,
    ) -> Result<CallToolResult, McpError> {
        let text = export_set_display(self.client.as_ref(), &request.name).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Parse pasted set blocks (up to six) and return them normalized")]
    async fn import_set(
        &self,
        Parameters(request): Parameters<ImportSetRequest>,
    ) -> Result<CallToolResult, McpError> {
        let text = import_set_display(&request.text);
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler]
impl ServerHandler for PokemonAtlasService {}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stdout carries the protocol; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = AtlasConfig::from_env()?;
    info!(base_url = %config.base_url, "Pokemon Atlas MCP server starting");

    let client = PokeApiClient::new(&config)?;
    let service = PokemonAtlasService::new(client, config.counters);
    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;
    info!("server running, waiting for shutdown");

    let quit_reason = server.waiting().await?;
    info!(?quit_reason, "Pokemon Atlas MCP server exiting");
    Ok(())
}
