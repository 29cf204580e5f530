use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::time::timeout;

use newsdesk::cli::{Cli, Commands};
use newsdesk::clock::{Clock, SystemClock};
use newsdesk::config::Config;
use newsdesk::domain::{Category, NewsState};
use newsdesk::errors::{NewsError, NewsResult};
use newsdesk::provider::GnewsProvider;
use newsdesk::services::{FeedOptions, NewsFeedService, RefreshOutcome};
use newsdesk::storage::{CacheStore, JsonSnapshotStore};

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Categories => cmd_categories()?,
        Commands::Cache { clear } => {
            let config = Config::from_env().context("could not load configuration")?;
            cmd_cache(&config, clear)?;
        }
        Commands::Headlines { category, refresh } => {
            let config = Config::from_env().context("could not load configuration")?;
            cmd_fetch(&config, category, "", refresh).await?;
        }
        Commands::Search { term, refresh } => {
            let config = Config::from_env().context("could not load configuration")?;
            cmd_fetch(&config, Category::default(), &term, refresh).await?;
        }
    }

    Ok(())
}

async fn cmd_fetch(
    config: &Config,
    category: Category,
    query: &str,
    refresh: bool,
) -> NewsResult<()> {
    let provider = GnewsProvider::with_base_url(config.api_key.clone(), config.api_url.clone());
    let store = JsonSnapshotStore::new(&config.cache_path);
    let service = NewsFeedService::new(provider, store, SystemClock, FeedOptions::default());

    let mut rx = service.subscribe();

    if refresh {
        if service.refresh(category, query).await == RefreshOutcome::Throttled {
            println!("Refresh throttled; try again in a few seconds.");
            return Ok(());
        }
    } else {
        service.request(category, query);
        timeout(Duration::from_secs(60), rx.changed())
            .await
            .map_err(|_| NewsError::Provider("timed out waiting for news".to_string()))?
            .map_err(|_| NewsError::Provider("state channel closed".to_string()))?;
    }

    let state = rx.borrow().clone();
    print_state(&state, category, query);

    Ok(())
}

fn print_state(state: &NewsState, category: Category, query: &str) {
    let label = if query.is_empty() {
        category.to_string()
    } else {
        format!("\"{}\"", query)
    };

    if let Some(error) = state.error {
        println!("{}", error);
        return;
    }

    match &state.headline {
        Some(headline) => {
            println!("Headline [{}]:", label);
            println!("  {}", headline.title);
            if headline.source.name.is_empty() {
                println!("  {}", headline.url);
            } else {
                println!("  {} ({})", headline.source.name, headline.url);
            }
        }
        None => {
            println!("No headlines for {}.", label);
            return;
        }
    }

    if state.articles.is_empty() {
        return;
    }

    println!();
    for (i, article) in state.articles.iter().enumerate() {
        println!("{}. {}", i + 1, article.title);
        println!("   {}", article.url);
    }
}

fn cmd_categories() -> NewsResult<()> {
    println!("Available categories:\n");
    for category in Category::ALL {
        println!("  {}", category);
    }

    Ok(())
}

fn cmd_cache(config: &Config, clear: bool) -> NewsResult<()> {
    let store = JsonSnapshotStore::new(&config.cache_path);

    if clear {
        if store.path().exists() {
            std::fs::remove_file(store.path())?;
            println!("Cache cleared.");
        } else {
            println!("No cache snapshot to clear.");
        }
        return Ok(());
    }

    let cache = store.load()?;
    if cache.is_empty() {
        println!("Cache is empty.");
        return Ok(());
    }

    let now = SystemClock.now_millis();
    let mut entries: Vec<_> = cache.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    println!("Cached queries:\n");
    for (key, entry) in entries {
        let count = entry.articles.len() + entry.headline.is_some() as usize;
        println!(
            "  {}  ({} articles, {} min old)",
            key,
            count,
            entry.age_ms(now) / 60_000
        );
    }

    Ok(())
}
