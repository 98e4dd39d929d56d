pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod domain;
pub mod http;
pub mod services;

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;

use crate::api::TennisClient;
use crate::cli::{Cli, Command};
use crate::config::AppConfig;
use crate::domain::{LiveUpdate, MatchSummary, Tour};
use crate::services::server::ServerService;
use crate::services::subscription::subscribe_live;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_live() -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let client = TennisClient::new(&AppConfig::new())?;
        let matches = client.fetch_live_matches().await?;

        if matches.is_empty() {
            println!("No live matches right now.");
            return Ok(());
        }
        for summary in &matches {
            print_match(summary);
        }
        Ok(())
    })
}

pub fn handle_watch(match_key: &str) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let client = Arc::new(TennisClient::new(&config)?);
        let interval = Duration::from_secs(config.polling.live_interval_secs);

        let handle = subscribe_live(client, match_key.to_string(), interval, print_update);

        tokio::signal::ctrl_c().await?;
        handle.cancel();
        Ok(())
    })
}

pub fn handle_rankings(tour: &str, discipline: &str) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let client = TennisClient::new(&AppConfig::new())?;
        let tour = parse_tour(tour)?;
        let rankings = client.fetch_rankings(tour, discipline).await?;

        for item in &rankings {
            println!(
                "{:>4}  {:<30} {:<16} {}",
                item.rank,
                item.name,
                item.country.as_deref().unwrap_or("-"),
                item.points.map_or("-".to_string(), |p| p.to_string()),
            );
        }
        Ok(())
    })
}

pub fn handle_h2h(first_player_key: &str, second_player_key: &str) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let client = TennisClient::new(&AppConfig::new())?;
        let items = client.fetch_h2h(first_player_key, second_player_key).await?;

        println!("{}", serde_json::to_string_pretty(&items)?);
        Ok(())
    })
}

pub fn handle_player(player_key: &str) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let client = TennisClient::new(&AppConfig::new())?;
        let rows = client.fetch_player_profile(player_key).await?;

        println!("{}", serde_json::to_string_pretty(&rows)?);
        Ok(())
    })
}

fn parse_tour(raw: &str) -> Result<Tour> {
    match raw.to_uppercase().as_str() {
        "ATP" => Ok(Tour::Atp),
        "WTA" => Ok(Tour::Wta),
        other => anyhow::bail!("Unknown tour {other:?}, expected ATP or WTA"),
    }
}

fn print_match(summary: &MatchSummary) {
    let sets: Vec<String> = summary
        .sets
        .iter()
        .map(|s| format!("{}-{}", s.p1, s.p2))
        .collect();

    println!(
        "[{}] {} ({}): {} vs {}  {}",
        summary.status.as_str(),
        summary.tournament,
        summary.tour.as_str(),
        summary.player1.name,
        summary.player2.name,
        sets.join(" "),
    );
}

fn print_update(update: LiveUpdate) {
    print_match(&update.summary);
    println!(
        "  points won: {} - {}  (momentum samples: {})",
        update.stats.total_pts_won_p1,
        update.stats.total_pts_won_p2,
        update.stats.momentum.len(),
    );
}
