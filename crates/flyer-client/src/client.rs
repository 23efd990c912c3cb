//! HTTP client for the weekly-ad backend.
//!
//! Wraps `reqwest` with typed error handling for the two endpoints the
//! workflow consumes: the per-store weekly ad listing and the image-bytes
//! lookup. The client performs no retries; a refresh is always an explicit
//! caller action.

use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;

use crate::error::AdClientError;
use crate::mime::ext_to_mime;

const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// A fetched ad image: base64 payload plus the MIME type derived from the
/// filename extension.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub mime: &'static str,
    pub base64: String,
}

impl EncodedImage {
    /// Renders the image as a displayable `data:` URI.
    #[must_use]
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.base64)
    }
}

/// Client for the weekly-ad backend.
///
/// Use [`AdClient::new`] for the default local backend or
/// [`AdClient::with_base_url`] to point at a configured deployment or a mock
/// server in tests. The base URL is explicit construction-time configuration;
/// the client never consults the process environment itself.
pub struct AdClient {
    client: Client,
    ads_url: Url,
    image_url: Url,
}

impl AdClient {
    /// Creates a client pointed at the default local backend.
    ///
    /// # Errors
    ///
    /// Returns [`AdClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, AdClientError> {
        Self::with_base_url(timeout_secs, user_agent, DEFAULT_API_BASE)
    }

    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`AdClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`AdClientError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL base.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, AdClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: ensure the base ends with exactly one slash so joining
        // endpoint paths appends rather than replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let invalid = |e: &dyn std::fmt::Display| AdClientError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        };
        let base = Url::parse(&normalised).map_err(|e| invalid(&e))?;
        let ads_url = base.join("weeklyadfromfile/").map_err(|e| invalid(&e))?;
        let image_url = base.join("getimagebytes/").map_err(|e| invalid(&e))?;

        Ok(Self {
            client,
            ads_url,
            image_url,
        })
    }

    /// Fetches a store's weekly ad collection.
    ///
    /// The backend may return a single ad object or an array; a single object
    /// is wrapped into a one-element list, and a `null` body yields an empty
    /// list. Records are returned raw for the caller to normalize one by one.
    ///
    /// # Errors
    ///
    /// - [`AdClientError::MissingParameter`] if `store_slug` or `week` is
    ///   empty (no request is issued).
    /// - [`AdClientError::UnexpectedStatus`] on a non-2xx response, carrying
    ///   the status and body text.
    /// - [`AdClientError::Http`] on network failure.
    /// - [`AdClientError::Deserialize`] if the body is not valid JSON.
    pub async fn fetch_ads(
        &self,
        store_slug: &str,
        week: &str,
    ) -> Result<Vec<Value>, AdClientError> {
        if store_slug.is_empty() {
            return Err(AdClientError::MissingParameter { name: "storename" });
        }
        if week.is_empty() {
            return Err(AdClientError::MissingParameter { name: "week" });
        }

        let url = self.ads_request_url(store_slug, week);
        let body = self.get_json(&url).await?;
        Ok(match body {
            Value::Null => Vec::new(),
            Value::Array(records) => records,
            single => vec![single],
        })
    }

    /// Fetches the encoded bytes for one ad image.
    ///
    /// # Errors
    ///
    /// - [`AdClientError::MissingParameter`] if any argument is empty (no
    ///   request is issued).
    /// - [`AdClientError::UnexpectedStatus`] on a non-2xx response.
    /// - [`AdClientError::MissingImagePayload`] if the success response lacks
    ///   a non-empty `image_bytes` field.
    /// - [`AdClientError::Http`] on network failure.
    /// - [`AdClientError::Deserialize`] if the body is not valid JSON.
    pub async fn fetch_image_bytes(
        &self,
        store_slug: &str,
        week: &str,
        image_filename: &str,
    ) -> Result<EncodedImage, AdClientError> {
        if store_slug.is_empty() {
            return Err(AdClientError::MissingParameter { name: "storename" });
        }
        if week.is_empty() {
            return Err(AdClientError::MissingParameter { name: "week" });
        }
        if image_filename.is_empty() {
            return Err(AdClientError::MissingParameter {
                name: "image_filename",
            });
        }

        let url = self.image_request_url(store_slug, week, image_filename);
        let body = self.get_json(&url).await?;

        let base64 = body
            .get("image_bytes")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AdClientError::MissingImagePayload {
                filename: image_filename.to_owned(),
            })?;

        Ok(EncodedImage {
            mime: ext_to_mime(image_filename),
            base64: base64.to_owned(),
        })
    }

    fn ads_request_url(&self, store_slug: &str, week: &str) -> Url {
        let mut url = self.ads_url.clone();
        url.query_pairs_mut()
            .append_pair("storename", store_slug)
            .append_pair("week", week);
        url
    }

    fn image_request_url(&self, store_slug: &str, week: &str, image_filename: &str) -> Url {
        let mut url = self.image_url.clone();
        url.query_pairs_mut()
            .append_pair("storename", store_slug)
            .append_pair("week", week)
            .append_pair("image_filename", image_filename);
        url
    }

    /// Sends a GET request, asserts a 2xx status, and parses the body as JSON.
    async fn get_json(&self, url: &Url) -> Result<Value, AdClientError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AdClientError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| AdClientError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }
}
