//! The authoritative prompt settings and the capability to commit them.
//!
//! A [`SettingsOwner`] holds the committed values that domain generation
//! reads. Frontends never write those values directly; they go through the
//! two setters, which replace the stored value with exactly the argument.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

use crate::instructions::validate_instructions;
use crate::style::DomainStyle;

/// Read access to committed settings plus the two commit capabilities.
pub trait SettingsOwner {
    fn custom_instructions(&self) -> String;
    fn set_custom_instructions(&self, value: &str);
    /// Raw committed style tag. May be outside the known set.
    fn domain_style(&self) -> String;
    fn set_domain_style(&self, value: &str);
}

impl<O: SettingsOwner + ?Sized> SettingsOwner for &O {
    fn custom_instructions(&self) -> String {
        (**self).custom_instructions()
    }
    fn set_custom_instructions(&self, value: &str) {
        (**self).set_custom_instructions(value);
    }
    fn domain_style(&self) -> String {
        (**self).domain_style()
    }
    fn set_domain_style(&self, value: &str) {
        (**self).set_domain_style(value);
    }
}

/// Committed prompt settings, as persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptSettings {
    /// Free-text guidance for the generator (at most 280 chars).
    pub custom_instructions: String,
    /// Style tag, normally one of [`DomainStyle::ALL`].
    pub domain_style: String,
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self {
            custom_instructions: String::new(),
            domain_style: DomainStyle::default().tag().to_string(),
        }
    }
}

impl PromptSettings {
    /// Check the instruction length cap.
    ///
    /// The style tag is not checked: an unknown tag is tolerated and simply
    /// has no description.
    pub fn validate(&self) -> Result<(), String> {
        validate_instructions(&self.custom_instructions)
    }

    /// Load settings from a JSON file, or fall back to defaults if it doesn't exist.
    pub fn load_or_default(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read settings: {e}"))?;
        let settings: PromptSettings =
            serde_json::from_str(&data).map_err(|e| format!("failed to parse settings: {e}"))?;
        settings
            .validate()
            .map_err(|e| format!("invalid settings in {}: {e}", path.display()))?;
        debug!(
            "Loaded settings from {} (style '{}')",
            path.display(),
            settings.domain_style
        );
        Ok(settings)
    }

    /// Save the settings to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let data = serde_json::to_string_pretty(self)
            .map_err(|e| format!("failed to serialize settings: {e}"))?;
        std::fs::write(path, data).map_err(|e| format!("failed to write settings: {e}"))?;
        debug!("Saved settings to {}", path.display());
        Ok(())
    }
}

/// Shared, in-memory settings owner.
///
/// Clones share the same state, so a frontend and the application that
/// eventually persists the settings can each hold one.
#[derive(Clone, Default)]
pub struct SettingsStore(Arc<Mutex<PromptSettings>>);

impl SettingsStore {
    pub fn new(settings: PromptSettings) -> Self {
        Self(Arc::new(Mutex::new(settings)))
    }

    /// Copy of the committed settings.
    pub fn snapshot(&self) -> PromptSettings {
        self.lock().clone()
    }

    // Setters only assign whole Strings, so a poisoned guard still holds valid data.
    fn lock(&self) -> MutexGuard<'_, PromptSettings> {
        self.0.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SettingsOwner for SettingsStore {
    fn custom_instructions(&self) -> String {
        self.lock().custom_instructions.clone()
    }

    fn set_custom_instructions(&self, value: &str) {
        self.lock().custom_instructions = value.to_string();
        debug!(chars = value.chars().count(), "custom instructions committed");
    }

    fn domain_style(&self) -> String {
        self.lock().domain_style.clone()
    }

    fn set_domain_style(&self, value: &str) {
        self.lock().domain_style = value.to_string();
        debug!(style = value, "domain style committed");
    }
}
