//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::cli::server::{serve, ServerConfig};
use crate::config::ClientSettings;
use crate::endpoints::{
    fetch, fetch_raw, BoxScoreTraditionalRequest, CommonAllPlayersRequest,
    CommonPlayerInfoRequest, Endpoint, LeagueLeadersRequest, PlayerGameLogRequest,
    ScoreboardRequest,
};
use crate::error::{Error, Result};
use crate::http::{HttpClient, StatsTransport};
use crate::params::{QueryParams, Season};
use crate::players::PlayerDirectory;
use crate::teams;
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its output
    pub async fn run(&self) -> Result<()> {
        let output = match &self.cli.command {
            Commands::Teams { search } => teams_output(search.as_deref())?,
            Commands::Serve { port, host } => {
                let client = HttpClient::with_config(self.settings()?.into_http_config()?)?;
                let config = ServerConfig {
                    host: *host,
                    port: *port,
                };
                return serve(config, Arc::new(client)).await;
            }
            _ => {
                let client = HttpClient::with_config(self.settings()?.into_http_config()?)?;
                self.execute(&client).await?
            }
        };
        self.output(&output)
    }

    /// Merge the settings file with command-line overrides
    pub fn settings(&self) -> Result<ClientSettings> {
        let settings = match &self.cli.config {
            Some(path) => {
                debug!("Loading client settings from {}", path.display());
                ClientSettings::from_file(path)?
            }
            None => ClientSettings::default(),
        };
        Ok(settings
            .override_base_url(self.cli.base_url.clone())
            .override_timeout(self.cli.timeout))
    }

    /// Execute the command against `transport` and return its JSON output
    pub async fn execute<T>(&self, transport: &T) -> Result<Value>
    where
        T: StatsTransport + ?Sized,
    {
        match &self.cli.command {
            Commands::BoxScore {
                game_id,
                start_period,
                end_period,
            } => {
                let request = BoxScoreTraditionalRequest {
                    game_id: game_id.clone(),
                    start_period: *start_period,
                    end_period: *end_period,
                    ..BoxScoreTraditionalRequest::default()
                };
                call(transport, &request).await
            }
            Commands::Scoreboard {
                date,
                day_offset,
                league,
            } => {
                let game_date = date
                    .clone()
                    .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());
                let request = ScoreboardRequest {
                    game_date,
                    league_id: *league,
                    day_offset: *day_offset,
                };
                call(transport, &request).await
            }
            Commands::Leaders {
                season,
                per_mode,
                season_type,
                stat,
                active,
            } => {
                let mut request = LeagueLeadersRequest::new()
                    .per_mode(*per_mode)
                    .season_type(*season_type)
                    .stat_category(*stat);
                request.season = season.clone();
                if *active {
                    request = request.active_only();
                }
                call(transport, &request).await
            }
            Commands::GameLog {
                player_id,
                season,
                season_type,
                from,
                to,
            } => {
                let request = PlayerGameLogRequest {
                    player_id: player_id.clone(),
                    season: season.clone(),
                    season_type: *season_type,
                    date_from: from.clone(),
                    date_to: to.clone(),
                    league_id: None,
                };
                call(transport, &request).await
            }
            Commands::PlayerInfo { player_id } => {
                call(transport, &CommonPlayerInfoRequest::new(player_id)).await
            }
            Commands::Players {
                season,
                current_only,
                search,
            } => {
                let season = season.clone().unwrap_or_else(Season::current);
                let mut request = CommonAllPlayersRequest::new(season);
                if *current_only {
                    request = request.only_current_season(true);
                }
                match search {
                    None => call(transport, &request).await,
                    Some(query) => {
                        let response = fetch(transport, &request).await?;
                        let directory = PlayerDirectory::from(&response.data);
                        let matches = directory.search(query);
                        info!("{} of {} players match '{query}'", matches.len(), directory.len());
                        Ok(serde_json::to_value(matches)?)
                    }
                }
            }
            Commands::Teams { search } => teams_output(search.as_deref()),
            Commands::Serve { .. } => Err(Error::config("serve runs a server and has no output")),
            Commands::Raw { endpoint, params } => {
                let params: QueryParams = params.iter().cloned().collect();
                let response = fetch_raw(transport, endpoint, &params).await?;
                info!(
                    "Fetched {} result set(s) from {}",
                    response.data.result_sets.len(),
                    response.url
                );

                let mut sets = Map::new();
                for set in &response.data.result_sets {
                    sets.insert(set.name.clone(), json!(set.to_objects()));
                }
                Ok(json!({
                    "resource": response.data.resource,
                    "url": response.url,
                    "result_sets": sets,
                }))
            }
        }
    }

    fn output(&self, value: &Value) -> Result<()> {
        let text = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{text}");
        Ok(())
    }
}

pub(crate) async fn call<E, T>(transport: &T, request: &E) -> Result<Value>
where
    E: Endpoint,
    E::Output: Serialize,
    T: StatsTransport + ?Sized,
{
    let response = fetch(transport, request).await?;
    info!("{} returned {}", E::PATH, response.status_code);
    Ok(serde_json::to_value(response.data)?)
}

fn teams_output(search: Option<&str>) -> Result<Value> {
    let matches: Vec<&teams::Team> = match search {
        Some(query) => teams::search(query),
        None => teams::all().iter().collect(),
    };
    Ok(serde_json::to_value(matches)?)
}
