//! MiMuni - a terminal client for the MiMuni municipal services backend
//!
//! This library provides the screens and backend client for managing a
//! citizen's registered service listings: browsing and deleting existing
//! professional/commerce listings, and submitting new ones.

// Core modules
pub mod api;
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod keymap;
pub mod screens;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use api::{CommerceListing, PhotoAttachment, ProfessionalListing, ServiceApi, ServiceForm, ServiceKind};
pub use config::Config;

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
