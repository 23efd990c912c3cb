//! Best-effort resolution of an ad's image reference.

use flyer_core::Ad;

use crate::client::AdClient;

/// Resolves an ad's image to a displayable `data:` URI.
///
/// An inline base64 payload on the record resolves immediately without a
/// request (the backend's database-backed endpoint embeds PNG bytes
/// directly). Otherwise the filename, when present, is fetched through
/// [`AdClient::fetch_image_bytes`]. Every failure path degrades to `None`
/// with a warning; a missing image must never abort the batch.
pub async fn resolve_image(
    client: &AdClient,
    store_slug: &str,
    week: &str,
    ad: &Ad,
) -> Option<String> {
    if let Some(base64) = ad.image_base64.as_deref() {
        return Some(format!("data:image/png;base64,{base64}"));
    }

    let filename = ad.image_filename.as_deref()?;
    match client.fetch_image_bytes(store_slug, week, filename).await {
        Ok(image) => Some(image.to_data_uri()),
        Err(e) => {
            tracing::warn!(
                store = %store_slug,
                filename = %filename,
                error = %e,
                "image resolution failed; continuing without image"
            );
            None
        }
    }
}
