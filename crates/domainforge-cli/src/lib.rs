//! Terminal editor for domainforge prompt settings.
//!
//! The `domainforge` binary owns the committed settings: it loads them from a
//! JSON file, opens the prompt settings dialog from `domainforge-tui`, and
//! writes the result back when the dialog closes.
//!
//! ```sh
//! # Edit the settings in ./domainforge.json
//! domainforge
//!
//! # Start from a given style and print the result without opening the dialog
//! domainforge --style abstract --print
//! ```

pub mod config;

pub use config::{DEFAULT_SETTINGS_PATH, SettingsOverrides, resolve_settings};
