//! HTTP client module
//!
//! Performs single GET requests against the API.
//!
//! # Features
//!
//! - **Auth**: `X-Api-Key` header when a key is configured
//! - **Typed failures**: non-2xx responses become [`Error::HttpStatus`](crate::Error::HttpStatus)
//!   carrying the exact request URL
//! - **Envelope parsing**: page and data envelopes decoded with serde
//!
//! There is no retry at this layer. One call is one request.

mod client;

pub use client::{HttpClient, API_KEY_HEADER};
