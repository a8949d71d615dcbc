//! Convenience re-exports for common `domainforge` types.
//!
//! ```ignore
//! use domainforge::prelude::*;
//! ```

pub use crate::instructions::{InstructionDraft, MAX_INSTRUCTION_CHARS, validate_instructions};
pub use crate::mirror::SettingsMirror;
pub use crate::notify::{
    NOTIFICATION_DURATION, NoNotifier, Notification, Notifier, Toast, ToastQueue,
};
pub use crate::owner::{PromptSettings, SettingsOwner, SettingsStore};
pub use crate::style::{DomainStyle, style_description};
pub use crate::ui::tracing::{LogBuffer, UiTracingLayer};
pub use crate::ui::{LogLevel, LogLine};
