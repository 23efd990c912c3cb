//! Request layer and aggregation workflow for weekly grocery ads.
//!
//! [`AdClient`] wraps the backend's two endpoints with typed errors;
//! [`aggregate`] fans a store selection out over the roster, normalizes raw
//! records, resolves images, and assembles the display-ready list while
//! isolating failures per store and per record. [`FetchSession`] guards
//! consumers against stale in-flight cycles overwriting newer results.

pub mod aggregate;
pub mod client;
pub mod error;
pub mod image;
pub mod mime;
pub mod normalize;
pub mod session;

pub use aggregate::{aggregate, StoreSelection};
pub use client::{AdClient, EncodedImage};
pub use error::AdClientError;
pub use image::resolve_image;
pub use mime::ext_to_mime;
pub use normalize::normalize_record;
pub use session::{CycleToken, FetchSession, FetchState};
