//! User Interface Components
//!
//! Reusable Dioxus components for the video Q&A page:
//!
//! - **forms**: The video submission and question forms
//! - **display**: Loader, status and answer elements
//! - **inputs**: Controlled input fields
//!
//! Components read everything they render from [`crate::qa::QaState`].

pub mod display;
pub mod forms;
pub mod inputs;
