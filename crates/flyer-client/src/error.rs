use thiserror::Error;

/// Errors returned by the weekly-ad request layer.
#[derive(Debug, Error)]
pub enum AdClientError {
    /// A required identifier/week/filename argument was empty. Raised before
    /// any request is issued.
    #[error("missing required parameter: {name}")]
    MissingParameter { name: &'static str },

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend responded with a non-success status.
    #[error("unexpected HTTP status {status} from {url}: {body}")]
    UnexpectedStatus {
        status: u16,
        url: String,
        body: String,
    },

    /// The backend responded successfully but without the expected
    /// `image_bytes` field.
    #[error("no image_bytes in response for {filename}")]
    MissingImagePayload { filename: String },

    /// The response body could not be parsed as JSON.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// An individual ad record could not be normalized. Isolated to that
    /// record by the aggregator.
    #[error("malformed ad record from {store}: {reason}")]
    MalformedRecord { store: String, reason: String },

    /// The configured API base is not a usable URL.
    #[error("invalid API base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
