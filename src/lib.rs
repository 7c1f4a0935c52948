// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod notify;
pub mod probe;
pub mod server;
pub mod types;
pub mod watch;

use std::path::Path;

use anyhow::Result;
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::config::{ConfigFile, HttpSettings, resolve_config};
use crate::engine::{PollCycle, PollOptions, TokioTicker};
use crate::notify::{HttpTransport, Notifier};
use crate::probe::HttpProber;
use crate::watch::{ChangeCache, WatchRegistry};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - the shared registry and change cache
/// - the background poll cycle (prober + notifier)
/// - the registration API
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let mut cfg = resolve_config(args.config.as_deref().map(Path::new))?;
    if let Some(port) = args.port {
        cfg.server.port = port;
    }

    if args.dry_run {
        print_dry_run(&cfg);
        return Ok(());
    }

    let addr = cfg.server.socket_addr()?;
    let client = build_http_client(&cfg.http)?;

    let registry = WatchRegistry::new();
    let cache = ChangeCache::new();

    let notifier = Notifier::new(
        registry.clone(),
        cache.clone(),
        HttpTransport::new(client.clone()),
        cfg.http.route_header.clone(),
    );
    let cycle = PollCycle::new(
        registry.clone(),
        cache,
        HttpProber::new(client),
        notifier,
        TokioTicker,
        PollOptions::from(&cfg.poll),
    );
    let poller = tokio::spawn(cycle.run());

    let served = server::serve(addr, registry, shutdown_signal()).await;

    poller.abort();
    info!("playwatch exiting");
    served.map_err(Into::into)
}

/// One client for probes and webhooks so connections are pooled.
pub fn build_http_client(http: &HttpSettings) -> errors::Result<Client> {
    let mut builder = Client::builder();
    if let Some(ref ua) = http.user_agent {
        builder = builder.user_agent(ua.clone());
    }
    if let Some(timeout) = http.request_timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Without a signal handler, run until killed.
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}

/// Simple dry-run output: print the effective configuration.
fn print_dry_run(cfg: &ConfigFile) {
    println!("playwatch dry-run");
    println!("  server.bind = {}", cfg.server.bind);
    println!("  server.port = {}", cfg.server.port);
    println!("  poll.sweep_delay = {:?}", cfg.poll.sweep_delay);
    println!("  poll.target_delay = {:?}", cfg.poll.target_delay);
    println!("  http.route_header = {}", cfg.http.route_header);
    if let Some(ref ua) = cfg.http.user_agent {
        println!("  http.user_agent = {ua}");
    }
    match cfg.http.request_timeout {
        Some(timeout) => println!("  http.request_timeout = {timeout:?}"),
        None => println!("  http.request_timeout = (transport default)"),
    }

    debug!("dry-run complete (nothing started)");
}
