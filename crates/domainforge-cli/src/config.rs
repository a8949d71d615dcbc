//! Resolution of the settings the dialog starts from.
//!
//! The persisted file supplies the base values; command-line overrides are
//! validated and layered on top before the dialog opens.

use std::path::Path;

use domainforge::instructions::validate_instructions;
use domainforge::owner::PromptSettings;
use domainforge::style::DomainStyle;
use tracing::info;

/// Settings file used when `--settings` is not given.
pub const DEFAULT_SETTINGS_PATH: &str = "domainforge.json";

/// Values given on the command line that replace the persisted ones.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    /// Style tag; must be one of the known styles.
    pub style: Option<String>,
    /// Custom instructions; must fit the length cap.
    pub instructions: Option<String>,
}

impl SettingsOverrides {
    /// Layer the overrides onto `settings`.
    pub fn apply(&self, mut settings: PromptSettings) -> Result<PromptSettings, String> {
        if let Some(ref tag) = self.style {
            let style: DomainStyle = tag.parse()?;
            settings.domain_style = style.tag().to_string();
        }
        if let Some(ref text) = self.instructions {
            validate_instructions(text).map_err(|e| format!("--instructions: {e}"))?;
            settings.custom_instructions = text.clone();
        }
        Ok(settings)
    }

    pub fn is_empty(&self) -> bool {
        self.style.is_none() && self.instructions.is_none()
    }
}

/// Load the settings file (or defaults) and apply `overrides`.
pub fn resolve_settings(
    path: &Path,
    overrides: &SettingsOverrides,
) -> Result<PromptSettings, String> {
    let base = PromptSettings::load_or_default(path)?;
    if overrides.is_empty() {
        return Ok(base);
    }
    let settings = overrides.apply(base)?;
    info!(
        "Applied command-line overrides (style '{}')",
        settings.domain_style
    );
    Ok(settings)
}
