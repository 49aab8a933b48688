//! Fetch layer: HTTP client for pulling design documents from the Figma API.

pub mod http;

pub use http::{ApiError, FigmaClient, extract_file_key};
