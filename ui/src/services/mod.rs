//! Infrastructure Services
//!
//! - **client**: HTTP client for the video processing and question answering endpoints
//! - **config**: Endpoint configuration
//!
//! The services are designed to be WASM-first, using async traits without
//! Send/Sync bounds for compatibility.

pub mod client;
pub mod config;
