//! Prompt settings for the domainforge domain-name generator.
//!
//! Two values steer generation: a [`DomainStyle`](style::DomainStyle)
//! (compound, pun, descriptive, abstract) and free-text custom instructions
//! of at most 280 chars. Both are owned by a [`SettingsOwner`](owner::SettingsOwner);
//! this crate provides the edit-then-save [`SettingsMirror`](mirror::SettingsMirror)
//! that frontends drive, plus the [`Notifier`](notify::Notifier) seam used for
//! transient confirmation toasts.
//!
//! The crate has no rendering dependencies. `domainforge-tui` draws the
//! dialog in a terminal; other frontends only need to forward user actions
//! to the mirror and display whatever the notifier receives.
//!
//! # Example
//!
//! ```
//! use domainforge::prelude::*;
//!
//! let store = SettingsStore::default();
//! let toasts = ToastQueue::new();
//! let mut mirror = SettingsMirror::new(store.clone(), toasts.clone());
//!
//! mirror.push_str("domain must contain the word 'apple'");
//! assert!(mirror.can_save());
//! mirror.save();
//! assert_eq!(store.custom_instructions(), "domain must contain the word 'apple'");
//!
//! mirror.select_style(DomainStyle::Abstract);
//! assert_eq!(store.domain_style(), "abstract");
//! assert_eq!(toasts.len(), 2);
//! ```

pub mod instructions;
pub mod mirror;
pub mod notify;
pub mod owner;
pub mod prelude;
pub mod style;
pub mod ui;
