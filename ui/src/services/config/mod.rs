//! Configuration for the video Q&A client

pub mod client_config;

pub use client_config::*;
