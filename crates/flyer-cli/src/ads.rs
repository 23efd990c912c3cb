//! The `ads` subcommand: one full aggregation cycle printed to stdout.

use anyhow::Context;
use chrono::Local;
use flyer_client::{aggregate, AdClient, FetchSession, StoreSelection};
use flyer_core::week::{filter_by_date, normalize_partial_date_input, resolve_week};
use flyer_core::{load_stores, AppConfig};

pub async fn run(
    config: &AppConfig,
    store: &str,
    week_input: &str,
    date_filter: &str,
    json: bool,
) -> anyhow::Result<()> {
    let stores = load_stores(&config.stores_path).with_context(|| {
        format!(
            "loading store roster from {}",
            config.stores_path.display()
        )
    })?;
    let client = AdClient::with_base_url(
        config.request_timeout_secs,
        &config.user_agent,
        &config.api_base,
    )?;

    let selection = StoreSelection::parse(store);
    let week = resolve_week(
        &normalize_partial_date_input(week_input),
        Local::now().date_naive(),
    );
    tracing::info!(week = %week, roster = stores.stores.len(), "fetching weekly ads");

    let mut session = FetchSession::new();
    let token = session.begin();
    let ads = aggregate(&client, &stores.stores, &selection, &week).await;
    session.complete(token, ads);

    let ads = filter_by_date(
        session.ads().to_vec(),
        &normalize_partial_date_input(date_filter),
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&ads)?);
        return Ok(());
    }

    if ads.is_empty() {
        println!("No ads for the selected store/week.");
        return Ok(());
    }

    for ad in &ads {
        let image = if ad.image_uri.is_some() {
            "image"
        } else {
            "no image"
        };
        println!(
            "{:<10} {:<12} {:<32} {:<12} [{image}]",
            ad.store,
            ad.date.as_deref().unwrap_or("-"),
            ad.product,
            ad.price.to_string(),
        );
    }
    println!("{} ads for week {week}", ads.len());

    Ok(())
}
