//! The `image` subcommand: fetches a single ad image, the diagnostic
//! counterpart of the resolver.

use flyer_client::AdClient;
use flyer_core::AppConfig;

pub async fn run(
    config: &AppConfig,
    store: &str,
    week: &str,
    filename: &str,
) -> anyhow::Result<()> {
    let client = AdClient::with_base_url(
        config.request_timeout_secs,
        &config.user_agent,
        &config.api_base,
    )?;

    let image = client
        .fetch_image_bytes(&store.to_lowercase(), week, filename)
        .await?;
    tracing::info!(mime = image.mime, bytes = image.base64.len(), "image fetched");
    println!("{}", image.to_data_uri());

    Ok(())
}
