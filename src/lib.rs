pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod logging;

use std::time::Duration;

use anyhow::{Context, Result};
use app::{
    dashboard::DashboardSnapshot,
    report::render_text,
    settings::{RuntimeSettings, load_runtime_settings, save_runtime_settings},
};
use cli::Cli;
use data::HkoClient;
use tokio::time::MissedTickBehavior;
use tracing::info;

pub async fn run(cli: Cli) -> Result<()> {
    cli.validate()?;

    let (settings, settings_path) = load_runtime_settings(&cli, true);
    if cli.save_settings {
        let path = settings_path
            .context("no settings location; set HOME or HK_WEATHER_CONFIG_DIR")?;
        save_runtime_settings(&path, &settings)?;
        info!(path = %path.display(), "settings saved");
    }

    let client = HkoClient::new(settings.hko.clone()).context("building weather client failed")?;

    match cli.watch {
        Some(secs) => watch(&client, &settings, cli.json, Duration::from_secs(secs)).await,
        None => print_snapshot(&client, &settings, cli.json).await,
    }
}

/// Text report, or pretty JSON when `json` is set.
pub fn render(
    snapshot: &DashboardSnapshot,
    settings: &RuntimeSettings,
    json: bool,
) -> Result<String> {
    if json {
        serde_json::to_string_pretty(snapshot).context("serializing snapshot failed")
    } else {
        Ok(render_text(snapshot, settings))
    }
}

async fn print_snapshot(client: &HkoClient, settings: &RuntimeSettings, json: bool) -> Result<()> {
    let snapshot = DashboardSnapshot::fetch(client).await;
    println!("{}", render(&snapshot, settings, json)?);
    Ok(())
}

async fn watch(
    client: &HkoClient,
    settings: &RuntimeSettings,
    json: bool,
    period: Duration,
) -> Result<()> {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => print_snapshot(client, settings, json).await?,
            result = &mut shutdown => {
                result.context("listening for Ctrl-C failed")?;
                info!("watch stopped");
                return Ok(());
            }
        }
    }
}
