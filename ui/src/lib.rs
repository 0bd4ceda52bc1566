//! This crate contains the UI components and client logic for the video Q&A page.

pub mod app;
pub use app::VideoQaService;

pub mod components;
pub mod qa;
pub mod services;
pub mod utils;
