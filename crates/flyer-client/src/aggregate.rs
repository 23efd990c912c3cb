//! Aggregation of weekly ads across the store roster.
//!
//! Stores are queried sequentially and failures are isolated at two
//! granularities: a store whose listing fetch fails is skipped whole, and a
//! record that fails normalization is skipped alone. Neither surfaces an
//! error to the caller; the assembled list simply contains what could be
//! fetched, in roster order and source record order.

use flyer_core::{Ad, StoreConfig};

use crate::client::AdClient;
use crate::image::resolve_image;
use crate::normalize::normalize_record;

/// Which stores an aggregation cycle should query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreSelection {
    /// Union over the full roster.
    All,
    /// A single store, matched against the roster by display name.
    One(String),
}

impl StoreSelection {
    /// Parses a UI selection string: the pseudo-selector `"All"`
    /// (case-insensitive) or a store name.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            StoreSelection::All
        } else {
            StoreSelection::One(trimmed.to_owned())
        }
    }
}

/// Fetches and assembles the ad list for `selection` and `week`.
///
/// Per-store and per-record failures are logged and skipped; image
/// resolution failures leave `image_uri` unset. A store name that does not
/// match the roster yields an empty store set and therefore an empty result.
pub async fn aggregate(
    client: &AdClient,
    roster: &[StoreConfig],
    selection: &StoreSelection,
    week: &str,
) -> Vec<Ad> {
    let stores: Vec<&StoreConfig> = match selection {
        StoreSelection::All => roster.iter().collect(),
        StoreSelection::One(name) => roster
            .iter()
            .filter(|s| s.name.eq_ignore_ascii_case(name))
            .collect(),
    };

    let mut results = Vec::new();
    for store in stores {
        let slug = store.slug();
        let records = match client.fetch_ads(&slug, week).await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(
                    store = %store.name,
                    week = %week,
                    error = %e,
                    "skipping store; weekly ad fetch failed"
                );
                continue;
            }
        };

        for raw in &records {
            let mut ad = match normalize_record(raw, &store.name) {
                Ok(ad) => ad,
                Err(e) => {
                    tracing::warn!(
                        store = %store.name,
                        error = %e,
                        "skipping record; normalization failed"
                    );
                    continue;
                }
            };
            ad.image_uri = resolve_image(client, &slug, week, &ad).await;
            results.push(ad);
        }
    }

    results
}
