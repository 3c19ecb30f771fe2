//! Client, wire types, and response normalization for the search backend.

pub mod client;
pub mod error;
pub mod models;
pub mod normalize;
pub mod sites;

pub use client::{SearchApi, SearchClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use models::{SearchRequest, SearchResponse, UIProduct};
