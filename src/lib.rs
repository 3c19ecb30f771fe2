//! shopnav - Stateless product search CLI and API client
//!
//! A thin client for a product-search backend: one `POST /api/search`
//! round trip per call, with result price strings sanitized for display.

pub mod api;
pub mod commands;
pub mod config;
pub mod format;

pub use api::{ApiError, SearchApi, SearchClient, SearchRequest, SearchResponse, UIProduct};
pub use config::Config;
